//! Error types for sln-core

use std::path::PathBuf;

/// Result type for sln-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, transforming or saving a solution
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] sln_fs::Error),

    #[error("GlobalSection({name}) has no matching EndGlobalSection")]
    UnterminatedSection { name: String },

    #[error("GlobalSection({name}) header does not declare a section type")]
    MalformedSectionHeader { name: String },

    #[error("Malformed entry in {section}: '{line}'")]
    MalformedEntry { section: String, line: String },

    #[error("XML parse error: {0}")]
    Xml(String),

    #[error("XML write error: {0}")]
    XmlWrite(String),

    #[error("Missing <{name}> element")]
    MissingElement { name: String },

    #[error("<{element}> element is missing required attribute '{attribute}'")]
    MissingAttribute { element: String, attribute: String },

    #[error("Unexpected pattern value '{pattern}' for project '{project}'")]
    UnexpectedPattern { project: String, pattern: String },

    #[error("Failed to read project metadata from {path}: {message}")]
    ProjectMetadata { path: PathBuf, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn xml(err: impl std::fmt::Display) -> Self {
        Self::Xml(err.to_string())
    }

    pub(crate) fn xml_write(err: impl std::fmt::Display) -> Self {
        Self::XmlWrite(err.to_string())
    }

    pub(crate) fn missing_attribute(element: &str, attribute: &str) -> Self {
        Self::MissingAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
        }
    }
}
