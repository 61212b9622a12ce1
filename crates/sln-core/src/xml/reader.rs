//! XML definition -> [`SolutionModel`].

use std::collections::HashMap;

use sln_fs::NormalizedPath;

use super::{
    CONFIG_NAMES, Element, OTHER_GLOBAL_SECTIONS, PROJECT_CONFIG_PROPERTIES, PROJECTS, SOLUTION,
    SOLUTION_FOLDERS, dom,
};
use crate::diagnostics::WarningSink;
use crate::error::{Error, Result};
use crate::guids;
use crate::model::{GlobalSection, Nest, Project, ProjectConfigurationPlatform, SolutionModel};
use crate::resolver::ProjectMetadataResolver;
use crate::template::{ConfigTemplate, PATTERN_ALL};

/// Build a model from an XML definition.
///
/// Project files are resolved against `base_directory` and asked for their
/// metadata through `resolver`. Recoverable problems (a `<project>` without
/// `file`, a file that does not exist, a name that matches no project) are
/// reported to `sink` and the offending entry is skipped.
///
/// # Errors
/// Malformed XML, a missing top-level section, a missing required
/// attribute, or a `pattern` other than `all` fail the whole load.
pub fn load_xml(
    xml: &str,
    base_directory: &NormalizedPath,
    resolver: &dyn ProjectMetadataResolver,
    sink: &mut dyn WarningSink,
) -> Result<SolutionModel> {
    let root = dom::parse(xml)?;
    if root.name != SOLUTION {
        return Err(Error::MissingElement {
            name: SOLUTION.to_string(),
        });
    }

    let mut loader = Loader {
        model: SolutionModel::new(base_directory.clone()),
        resolver,
        sink,
        metadata: HashMap::new(),
    };
    loader.load_projects(root.require_child(PROJECTS)?)?;
    loader.load_configurations(root.require_child(CONFIG_NAMES)?)?;
    loader.load_folders(root.require_child(SOLUTION_FOLDERS)?)?;
    loader.load_project_configurations(root.require_child(PROJECT_CONFIG_PROPERTIES)?)?;
    loader.load_other_sections(root.require_child(OTHER_GLOBAL_SECTIONS)?)?;

    let model = loader.model;
    tracing::debug!(
        projects = model.projects.len(),
        configurations = model.solution_configuration_platforms.len(),
        project_configurations = model.project_configuration_platforms.len(),
        nests = model.nested_projects.len(),
        other_sections = model.other_global_sections.len(),
        "loaded XML definition"
    );
    Ok(model)
}

struct Loader<'a> {
    model: SolutionModel,
    resolver: &'a dyn ProjectMetadataResolver,
    sink: &'a mut dyn WarningSink,
    /// (guid, type guid) per distinct project file
    metadata: HashMap<NormalizedPath, (String, String)>,
}

impl Loader<'_> {
    fn load_projects(&mut self, projects: &Element) -> Result<()> {
        for element in projects.children_named("project") {
            let Some(file) = element.attr("file") else {
                self.sink.warn(format!(
                    "<project> element '{}' has no 'file' attribute. Ignoring.",
                    element.attr("name").unwrap_or_default()
                ));
                continue;
            };

            let full_path = self.model.base_directory.join(file);
            if !full_path.is_file() {
                self.sink.warn(format!(
                    "<project> file '{}' does not exist. Ignoring.",
                    full_path
                ));
                continue;
            }

            let (project_guid, project_type_guids) = self.identify(&full_path)?;
            let name = element
                .attr("name")
                .or_else(|| full_path.file_stem())
                .unwrap_or(file)
                .to_string();

            self.model.projects.push(Project {
                project_type_guids,
                name,
                path: file.to_string(),
                project_guid,
            });
        }
        Ok(())
    }

    /// Metadata for a project file, generating a GUID when none is declared.
    fn identify(&mut self, path: &NormalizedPath) -> Result<(String, String)> {
        if let Some(known) = self.metadata.get(path) {
            return Ok(known.clone());
        }
        let metadata = self.resolver.resolve(path)?;
        let identity = (
            metadata.project_guid.unwrap_or_else(guids::new_guid),
            metadata
                .project_type_guid
                .unwrap_or_else(|| guids::for_project_file(path).to_string()),
        );
        self.metadata.insert(path.clone(), identity.clone());
        Ok(identity)
    }

    fn load_configurations(&mut self, configs: &Element) -> Result<()> {
        for element in configs.children_named("config") {
            let name = element.require_attr("name")?;
            self.model
                .solution_configuration_platforms
                .push(name.to_string());
        }
        Ok(())
    }

    fn load_folders(&mut self, folders: &Element) -> Result<()> {
        // Folders may nest each other, so every folder exists before any edge
        let mut parents = Vec::new();
        for folder in folders.children_named("folder") {
            let folder_name = folder.require_attr("name")?;
            let parent = match self.model.project_by_name(folder_name) {
                Some(existing) => existing.project_guid.clone(),
                None => {
                    let guid = guids::new_guid();
                    self.model.projects.push(Project {
                        project_type_guids: guids::SOLUTION_FOLDER.to_string(),
                        name: folder_name.to_string(),
                        path: folder_name.to_string(),
                        project_guid: guid.clone(),
                    });
                    guid
                }
            };
            parents.push((folder, folder_name, parent));
        }

        for (folder, folder_name, parent) in parents {
            for item in folder.children_named("project") {
                let item_name = item.require_attr("name")?;
                match self.model.project_by_name(item_name) {
                    Some(project) => {
                        let nest = Nest {
                            item: project.project_guid.clone(),
                            parent: parent.clone(),
                        };
                        self.model.nested_projects.push(nest);
                    }
                    None => self.sink.warn(format!(
                        "Solution folder '{}' lists unknown project '{}'. Ignoring.",
                        folder_name, item_name
                    )),
                }
            }
        }
        Ok(())
    }

    fn load_project_configurations(&mut self, properties: &Element) -> Result<()> {
        let template = ConfigTemplate::all(&self.model.solution_configuration_platforms);

        for element in properties.children_named("project") {
            let project_name = element.require_attr("name")?;
            let pattern = element.attr("pattern");
            if let Some(other) = pattern.filter(|p| *p != PATTERN_ALL) {
                return Err(Error::UnexpectedPattern {
                    project: project_name.to_string(),
                    pattern: other.to_string(),
                });
            }

            let Some(project_guid) = self
                .model
                .project_by_name(project_name)
                .map(|p| p.project_guid.clone())
            else {
                self.sink.warn(format!(
                    "Configuration properties reference unknown project '{}'. Ignoring.",
                    project_name
                ));
                continue;
            };

            if pattern.is_some() {
                self.model
                    .project_configuration_platforms
                    .extend(template.instantiate(&project_guid));
                continue;
            }

            for config in element.children_named("config-platform") {
                self.model
                    .project_configuration_platforms
                    .push(ProjectConfigurationPlatform {
                        project_guid: project_guid.clone(),
                        solution_configuration_name: config.require_attr("config")?.to_string(),
                        property: config.require_attr("property")?.to_string(),
                        configuration_value: config.require_attr("value")?.to_string(),
                    });
            }
        }
        Ok(())
    }

    fn load_other_sections(&mut self, sections: &Element) -> Result<()> {
        for element in sections.children_named("section") {
            self.model.other_global_sections.push(GlobalSection {
                name: element.require_attr("name")?.to_string(),
                section_type: element.require_attr("type")?.to_string(),
                raw_value: element.text.clone(),
            });
        }
        Ok(())
    }
}
