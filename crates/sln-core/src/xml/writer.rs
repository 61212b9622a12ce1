//! [`SolutionModel`] -> XML definition.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::{
    CONFIG_NAMES, OTHER_GLOBAL_SECTIONS, PROJECT_CONFIG_PROPERTIES, PROJECTS, SOLUTION,
    SOLUTION_FOLDERS,
};
use crate::diagnostics::WarningSink;
use crate::error::{Error, Result};
use crate::model::SolutionModel;
use crate::template::{ConfigTemplate, PATTERN_ALL};

const PROJECT_NAME_COMMENT: &str =
    " Project name is omitted if it is identical to the file name (without extension). ";
const PATTERN_COMMENT: &str = " Value 'all' indicates that the project contains `ActiveCfg` and `Build.0` properties for all configs. ";

struct XmlOut {
    writer: Writer<Vec<u8>>,
}

impl XmlOut {
    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer.write_event(event).map_err(Error::xml_write)
    }

    fn start(&mut self, element: BytesStart<'_>) -> Result<()> {
        self.event(Event::Start(element))
    }

    fn empty(&mut self, element: BytesStart<'_>) -> Result<()> {
        self.event(Event::Empty(element))
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn comment(&mut self, text: &str) -> Result<()> {
        self.event(Event::Comment(BytesText::from_escaped(text)))
    }

    /// `<name>` ... `</name>`, or `<name />` when `body` writes nothing.
    fn container<F>(&mut self, name: &str, is_empty: bool, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        if is_empty {
            return self.empty(BytesStart::new(name));
        }
        self.start(BytesStart::new(name))?;
        body(self)?;
        self.end(name)
    }
}

/// Render the model as an XML definition.
///
/// Projects whose file does not exist under the model's base directory are
/// left out silently. Folder members and configuration groups whose GUID
/// resolves to no project are reported to `sink` and left out.
pub fn save_xml(model: &SolutionModel, sink: &mut dyn WarningSink) -> Result<String> {
    let mut out = XmlOut {
        writer: Writer::new_with_indent(Vec::new(), b' ', 2),
    };

    out.event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    out.start(BytesStart::new(SOLUTION))?;

    out.comment(PROJECT_NAME_COMMENT)?;
    let existing: Vec<_> = model
        .projects
        .iter()
        .filter(|p| model.base_directory.join(&p.path).is_file())
        .collect();
    out.container(PROJECTS, existing.is_empty(), |out| {
        for project in &existing {
            let mut element = BytesStart::new("project");
            let file = sln_fs::NormalizedPath::new(&project.path);
            if file.file_stem() != Some(project.name.as_str()) {
                element.push_attribute(("name", project.name.as_str()));
            }
            element.push_attribute(("file", project.path.as_str()));
            out.empty(element)?;
        }
        Ok(())
    })?;

    let configs = &model.solution_configuration_platforms;
    out.container(CONFIG_NAMES, configs.is_empty(), |out| {
        for config in configs {
            let mut element = BytesStart::new("config");
            element.push_attribute(("name", config.as_str()));
            out.empty(element)?;
        }
        Ok(())
    })?;

    let mut folders = Vec::new();
    for group in model.nested_projects.groups() {
        let Some(folder) = model.project_name(&group.parent) else {
            sink.warn(format!(
                "Nested projects reference unknown parent {{{}}}. Ignoring.",
                group.parent
            ));
            continue;
        };
        let mut items = Vec::new();
        for item in &group.items {
            match model.project_name(item) {
                Some(name) => items.push(name),
                None => sink.warn(format!(
                    "Solution folder '{}' contains unknown project {{{}}}. Ignoring.",
                    folder, item
                )),
            }
        }
        folders.push((folder, items));
    }
    out.container(SOLUTION_FOLDERS, folders.is_empty(), |out| {
        for (folder, items) in &folders {
            let mut element = BytesStart::new("folder");
            element.push_attribute(("name", *folder));
            if items.is_empty() {
                out.empty(element)?;
                continue;
            }
            out.start(element)?;
            for item in items {
                let mut child = BytesStart::new("project");
                child.push_attribute(("name", *item));
                out.empty(child)?;
            }
            out.end("folder")?;
        }
        Ok(())
    })?;

    out.comment(PATTERN_COMMENT)?;
    let template = ConfigTemplate::all(&model.solution_configuration_platforms);
    let mut groups = Vec::new();
    for group in model.config_groups() {
        match model.project_name(group.project_guid) {
            Some(name) => groups.push((name, group)),
            None => sink.warn(format!(
                "Configuration entries reference unknown project {{{}}}. Ignoring.",
                group.project_guid
            )),
        }
    }
    out.container(PROJECT_CONFIG_PROPERTIES, groups.is_empty(), |out| {
        for (name, group) in &groups {
            let mut element = BytesStart::new("project");
            element.push_attribute(("name", *name));
            if template.matches(group.entries.iter().copied()) {
                element.push_attribute(("pattern", PATTERN_ALL));
                out.empty(element)?;
                continue;
            }
            out.start(element)?;
            for entry in &group.entries {
                let mut child = BytesStart::new("config-platform");
                child.push_attribute(("config", entry.solution_configuration_name.as_str()));
                child.push_attribute(("property", entry.property.as_str()));
                child.push_attribute(("value", entry.configuration_value.as_str()));
                out.empty(child)?;
            }
            out.end("project")?;
        }
        Ok(())
    })?;

    let sections = &model.other_global_sections;
    out.container(OTHER_GLOBAL_SECTIONS, sections.is_empty(), |out| {
        for section in sections {
            let mut element = BytesStart::new("section");
            element.push_attribute(("name", section.name.as_str()));
            element.push_attribute(("type", section.section_type.as_str()));
            if section.raw_value.is_empty() {
                out.empty(element)?;
                continue;
            }
            out.start(element)?;
            out.event(Event::Text(BytesText::new(&section.raw_value)))?;
            out.end("section")?;
        }
        Ok(())
    })?;

    out.end(SOLUTION)?;

    let mut xml = String::from_utf8(out.writer.into_inner()).map_err(Error::xml_write)?;
    xml.push('\n');
    tracing::debug!(bytes = xml.len(), "rendered XML definition");
    Ok(xml)
}
