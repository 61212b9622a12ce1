//! Section-scanning parser for the native solution format.
//!
//! This is not a full grammar: projects are picked out with a line pattern,
//! and each global section is located by its `GlobalSection(<name>)` marker
//! and the next `EndGlobalSection`.

use regex::Regex;
use std::sync::LazyLock;

use sln_fs::NormalizedPath;

use super::{
    NESTED_PROJECTS, PROJECT_CONFIGURATION_PLATFORMS, SOLUTION_CONFIGURATION_PLATFORMS,
    is_well_known_section,
};
use crate::error::{Error, Result};
use crate::guids::strip_braces;
use crate::model::{GlobalSection, Nest, NestedProjects, Project, ProjectConfigurationPlatform, SolutionModel};

/// `Project("{TYPE}") = "NAME", "PATH", "{GUID}"`
static PROJECT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"Project\("\{([^"]+)\}"\) = "([^"]+)", "([^"]+)", "\{([^"]+)\}""#)
        .expect("Invalid project regex")
});

/// `GlobalSection(NAME)`
static SECTION_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"GlobalSection\(([^)\n]+)\)").expect("Invalid section name regex")
});

/// Parse native solution text into a model.
///
/// `base_directory` is left empty; callers loading from a file set it to
/// the solution's directory.
///
/// # Errors
/// A section whose header has no `=` or that never reaches
/// `EndGlobalSection` is a parse error, as is an interpreted line without
/// the separator the section requires. Missing well-known sections are not
/// errors; they yield empty collections.
pub fn parse_solution(text: &str) -> Result<SolutionModel> {
    let text = text.replace("\r\n", "\n");

    let mut model = SolutionModel::new(NormalizedPath::default());
    model.projects = parse_projects(&text);
    model.solution_configuration_platforms = parse_solution_configuration_platforms(&text)?;
    model.nested_projects = parse_nested_projects(&text)?;
    model.project_configuration_platforms = parse_project_configuration_platforms(&text)?;

    for name in global_section_names(&text) {
        // A repeated name resolves to its first occurrence each time
        if is_well_known_section(&name) {
            continue;
        }
        if let Some(section) = find_global_section(&text, &name)? {
            model.other_global_sections.push(section);
        }
    }

    tracing::debug!(
        projects = model.projects.len(),
        configurations = model.solution_configuration_platforms.len(),
        project_configurations = model.project_configuration_platforms.len(),
        nests = model.nested_projects.len(),
        other_sections = model.other_global_sections.len(),
        "parsed native solution"
    );
    Ok(model)
}

/// All `Project(...)` lines, in file order.
pub fn parse_projects(text: &str) -> Vec<Project> {
    PROJECT_REGEX
        .captures_iter(text)
        .map(|caps| Project {
            project_type_guids: caps[1].to_string(),
            name: caps[2].to_string(),
            path: caps[3].to_string(),
            project_guid: caps[4].to_string(),
        })
        .collect()
}

/// Every `GlobalSection(...)` name, duplicates included, in file order.
pub fn global_section_names(text: &str) -> Vec<String> {
    SECTION_NAME_REGEX
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Locate the first section called `name`.
///
/// The raw value is every line between the header and the line holding
/// `EndGlobalSection`, each terminated by `\n`.
pub fn find_global_section(text: &str, name: &str) -> Result<Option<GlobalSection>> {
    let marker = format!("GlobalSection({name})");
    let Some(start) = text.find(&marker) else {
        return Ok(None);
    };

    let unterminated = || Error::UnterminatedSection {
        name: name.to_string(),
    };

    let header_end = text[start..]
        .find('\n')
        .map(|i| start + i)
        .ok_or_else(unterminated)?;
    let section_type = text[start + marker.len()..header_end]
        .split_once('=')
        .map(|(_, ty)| ty.trim().to_string())
        .ok_or_else(|| Error::MalformedSectionHeader {
            name: name.to_string(),
        })?;

    let body_start = header_end + 1;
    let end_marker = text[body_start..]
        .find("EndGlobalSection")
        .map(|i| body_start + i)
        .ok_or_else(unterminated)?;
    let end_line_start = text[body_start..end_marker]
        .rfind('\n')
        .map(|i| body_start + i + 1)
        .unwrap_or(body_start);

    let mut raw_value = text[body_start..end_line_start].to_string();
    // Content sharing a line with EndGlobalSection
    let stray = text[end_line_start..end_marker].trim();
    if !stray.is_empty() {
        raw_value.push_str(&text[end_line_start..end_marker]);
        raw_value.push('\n');
    }

    Ok(Some(GlobalSection {
        name: name.to_string(),
        section_type,
        raw_value,
    }))
}

/// Non-empty trimmed lines of a section body; empty when the section is absent.
fn section_lines(text: &str, name: &str) -> Result<Vec<String>> {
    Ok(find_global_section(text, name)?
        .map(|section| {
            section
                .raw_value
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default())
}

/// `<id> = <id>` lines; the left-hand side is kept.
pub fn parse_solution_configuration_platforms(text: &str) -> Result<Vec<String>> {
    section_lines(text, SOLUTION_CONFIGURATION_PLATFORMS)?
        .into_iter()
        .map(|line| match line.split_once('=') {
            Some((name, _)) => Ok(name.trim().to_string()),
            None => Err(Error::MalformedEntry {
                section: SOLUTION_CONFIGURATION_PLATFORMS.to_string(),
                line,
            }),
        })
        .collect()
}

/// `{item} = {parent}` lines. Lines without `=` are ignored.
pub fn parse_nested_projects(text: &str) -> Result<NestedProjects> {
    Ok(section_lines(text, NESTED_PROJECTS)?
        .iter()
        .filter_map(|line| line.split_once('='))
        .filter(|(item, _)| !item.trim().is_empty())
        .map(|(item, parent)| Nest {
            item: strip_braces(item).to_string(),
            parent: strip_braces(parent).to_string(),
        })
        .collect())
}

/// `{guid}.<config>.<property...> = <value>` lines.
///
/// The key is split on `.`; everything after the configuration token is
/// rejoined so dotted properties such as `Build.0` survive intact. Lines
/// without `=` are ignored.
pub fn parse_project_configuration_platforms(
    text: &str,
) -> Result<Vec<ProjectConfigurationPlatform>> {
    let mut entries = Vec::new();
    for line in section_lines(text, PROJECT_CONFIGURATION_PLATFORMS)? {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let tokens: Vec<&str> = key.trim().split('.').collect();
        if tokens.len() < 2 {
            return Err(Error::MalformedEntry {
                section: PROJECT_CONFIGURATION_PLATFORMS.to_string(),
                line,
            });
        }
        entries.push(ProjectConfigurationPlatform {
            project_guid: strip_braces(tokens[0]).to_string(),
            solution_configuration_name: tokens[1].to_string(),
            property: tokens[2..].join("."),
            configuration_value: value.trim().to_string(),
        });
    }
    Ok(entries)
}
