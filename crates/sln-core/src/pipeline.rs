//! File-level entry points: pick the codec from the extension, load, render.

use sln_fs::{NormalizedPath, io};

use crate::diagnostics::WarningSink;
use crate::error::Result;
use crate::model::SolutionModel;
use crate::resolver::ProjectMetadataResolver;
use crate::settings::LineEnding;
use crate::{native, xml};

/// On-disk representation of a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionFormat {
    /// `.sln` text
    Native,
    /// XML definition
    Xml,
}

impl SolutionFormat {
    /// `.sln` (any case) is native; everything else is XML.
    pub fn from_path(path: &NormalizedPath) -> Self {
        if path.has_extension("sln") {
            Self::Native
        } else {
            Self::Xml
        }
    }
}

/// Directory a file lives in, `.` for a bare file name.
pub fn containing_directory(path: &NormalizedPath) -> NormalizedPath {
    path.parent().unwrap_or_else(|| NormalizedPath::new("."))
}

/// Load a solution file.
///
/// Native solutions resolve paths against their own directory. XML
/// definitions use `base_dir` when given, else their own directory.
pub fn load_file(
    path: &NormalizedPath,
    base_dir: Option<&NormalizedPath>,
    resolver: &dyn ProjectMetadataResolver,
    sink: &mut dyn WarningSink,
) -> Result<SolutionModel> {
    let content = io::read_text(path)?;
    tracing::debug!(path = %path, "loading solution");
    match SolutionFormat::from_path(path) {
        SolutionFormat::Native => {
            let mut model = native::parse_solution(&content)?;
            model.base_directory = containing_directory(path);
            Ok(model)
        }
        SolutionFormat::Xml => {
            let base = base_dir
                .cloned()
                .unwrap_or_else(|| containing_directory(path));
            xml::load_xml(&content, &base, resolver, sink)
        }
    }
}

/// Render a model in the given format.
pub fn render(
    model: &SolutionModel,
    format: SolutionFormat,
    line_ending: LineEnding,
    sink: &mut dyn WarningSink,
) -> Result<String> {
    match format {
        SolutionFormat::Native => Ok(native::write_solution(model, line_ending)),
        SolutionFormat::Xml => xml::save_xml(model, sink),
    }
}

/// Render a model and write it atomically to `path`.
pub fn save_file(
    model: &SolutionModel,
    path: &NormalizedPath,
    line_ending: LineEnding,
    sink: &mut dyn WarningSink,
) -> Result<()> {
    let content = render(model, SolutionFormat::from_path(path), line_ending, sink)?;
    io::write_text(path, &content)?;
    Ok(())
}
