//! Project metadata discovery.
//!
//! When a solution is built from an XML definition, each referenced project
//! file is asked for its GUID and type GUID.

use sln_fs::{NormalizedPath, io};

use crate::error::{Error, Result};
use crate::guids::strip_braces;
use crate::xml::Element;

/// Identity a project file declares about itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMetadata {
    /// `ProjectGuid`, braces removed
    pub project_guid: Option<String>,
    /// Last entry of `ProjectTypeGuids`, braces removed
    pub project_type_guid: Option<String>,
}

/// Reads metadata from a project file.
pub trait ProjectMetadataResolver {
    fn resolve(&self, path: &NormalizedPath) -> Result<ProjectMetadata>;
}

/// Reads `ProjectGuid`/`ProjectTypeGuids` from the first `PropertyGroup`
/// declaring them in an MSBuild project file.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsBuildProjectResolver;

impl MsBuildProjectResolver {
    pub fn new() -> Self {
        Self
    }

    /// Extract metadata from project file content.
    pub fn parse(content: &str) -> std::result::Result<ProjectMetadata, String> {
        let root = crate::xml::dom::parse(content).map_err(|e| e.to_string())?;
        let mut groups = Vec::new();
        root.descendants_named("PropertyGroup", &mut groups);

        let property = |name: &str| {
            groups
                .iter()
                .flat_map(|g| g.children.iter())
                .find(|p: &&Element| p.name == name)
                .map(|p| p.text.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Ok(ProjectMetadata {
            project_guid: property("ProjectGuid").map(|g| strip_braces(&g).to_string()),
            project_type_guid: property("ProjectTypeGuids").and_then(|list| {
                list.split(';')
                    .map(strip_braces)
                    .filter(|g| !g.is_empty())
                    .last()
                    .map(str::to_string)
            }),
        })
    }
}

impl ProjectMetadataResolver for MsBuildProjectResolver {
    fn resolve(&self, path: &NormalizedPath) -> Result<ProjectMetadata> {
        let content = io::read_text(path)?;
        Self::parse(&content).map_err(|message| Error::ProjectMetadata {
            path: path.to_native(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_legacy_project() {
        let content = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="4.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup>
    <Configuration Condition=" '$(Configuration)' == '' ">Debug</Configuration>
    <ProjectGuid>{6A1C4F2E-1B1F-4C4B-9D3A-0F0E9A1B2C3D}</ProjectGuid>
    <ProjectTypeGuids>{EFBA0AD7-5A72-4C68-AF49-83D382785DCF};{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}</ProjectTypeGuids>
  </PropertyGroup>
</Project>"#;
        let metadata = MsBuildProjectResolver::parse(content).unwrap();
        assert_eq!(
            metadata.project_guid.as_deref(),
            Some("6A1C4F2E-1B1F-4C4B-9D3A-0F0E9A1B2C3D")
        );
        assert_eq!(
            metadata.project_type_guid.as_deref(),
            Some("FAE04EC0-301F-11D3-BF4B-00C04F79EFBC")
        );
    }

    #[test]
    fn test_parse_sdk_project_without_metadata() {
        let content = r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <TargetFramework>net8.0</TargetFramework>
  </PropertyGroup>
</Project>"#;
        assert_eq!(
            MsBuildProjectResolver::parse(content).unwrap(),
            ProjectMetadata::default()
        );
    }

    #[test]
    fn test_first_declaration_wins() {
        let content = r#"<Project>
  <PropertyGroup><ProjectGuid>{AAAA}</ProjectGuid></PropertyGroup>
  <PropertyGroup><ProjectGuid>{BBBB}</ProjectGuid></PropertyGroup>
</Project>"#;
        let metadata = MsBuildProjectResolver::parse(content).unwrap();
        assert_eq!(metadata.project_guid.as_deref(), Some("AAAA"));
    }

    #[test]
    fn test_resolve_reports_unreadable_project() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Broken.csproj"), "<Project><PropertyGroup>").unwrap();
        let path = NormalizedPath::new(dir.path().join("Broken.csproj"));

        let err = MsBuildProjectResolver::new().resolve(&path).unwrap_err();
        assert!(matches!(err, Error::ProjectMetadata { .. }));
    }
}
