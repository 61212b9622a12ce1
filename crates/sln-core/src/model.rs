//! In-memory solution model shared by every codec.
//!
//! A [`SolutionModel`] is produced by one loader, optionally reordered by
//! [`crate::canonical::reorder`], and consumed by one writer. Nothing here
//! validates references between collections: a configuration entry or nest
//! may name a GUID that no project carries, and lookups report that as
//! `None`.

use serde::Serialize;
use sln_fs::NormalizedPath;

use crate::guids;

/// A project (or solution folder) listed in the solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Project type GUID, without braces
    pub project_type_guids: String,
    pub name: String,
    /// Path relative to the solution directory, as written in the solution
    pub path: String,
    /// Project GUID, without braces
    pub project_guid: String,
}

impl Project {
    pub fn is_solution_folder(&self) -> bool {
        guids::same_guid(&self.project_type_guids, guids::SOLUTION_FOLDER)
    }
}

/// One `{guid}.<config>.<property> = <value>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfigurationPlatform {
    pub project_guid: String,
    pub solution_configuration_name: String,
    pub property: String,
    pub configuration_value: String,
}

/// A single parent edge: `item` is displayed under `parent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nest {
    pub item: String,
    pub parent: String,
}

/// All nests sharing one parent, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NestGroup {
    pub parent: String,
    pub items: Vec<String>,
}

/// Adjacency list of the solution-folder forest, grouped by parent.
///
/// Groups appear in order of first appearance of their parent. Cycles are
/// neither detected nor rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NestedProjects {
    groups: Vec<NestGroup>,
}

impl NestedProjects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an edge, joining the existing group of its parent if any.
    pub fn push(&mut self, nest: Nest) {
        match self
            .groups
            .iter_mut()
            .find(|g| guids::same_guid(&g.parent, &nest.parent))
        {
            Some(group) => group.items.push(nest.item),
            None => self.groups.push(NestGroup {
                parent: nest.parent,
                items: vec![nest.item],
            }),
        }
    }

    pub fn groups(&self) -> &[NestGroup] {
        &self.groups
    }

    pub(crate) fn groups_mut(&mut self) -> &mut Vec<NestGroup> {
        &mut self.groups
    }

    /// Flattened edges in group order.
    pub fn edges(&self) -> impl Iterator<Item = Nest> + '_ {
        self.groups.iter().flat_map(|g| {
            g.items.iter().map(move |item| Nest {
                item: item.clone(),
                parent: g.parent.clone(),
            })
        })
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<Nest> for NestedProjects {
    fn from_iter<I: IntoIterator<Item = Nest>>(iter: I) -> Self {
        let mut nested = Self::new();
        for nest in iter {
            nested.push(nest);
        }
        nested
    }
}

/// A global section the model does not interpret, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalSection {
    pub name: String,
    /// `preSolution` / `postSolution`
    pub section_type: String,
    /// Interior lines, each terminated by `\n`
    pub raw_value: String,
}

/// Configuration entries of one project, in model order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigGroup<'a> {
    pub project_guid: &'a str,
    pub entries: Vec<&'a ProjectConfigurationPlatform>,
}

/// The whole solution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SolutionModel {
    pub projects: Vec<Project>,
    pub solution_configuration_platforms: Vec<String>,
    pub project_configuration_platforms: Vec<ProjectConfigurationPlatform>,
    pub nested_projects: NestedProjects,
    pub other_global_sections: Vec<GlobalSection>,
    /// Directory project paths are resolved against; not persisted.
    #[serde(skip)]
    pub base_directory: NormalizedPath,
}

impl SolutionModel {
    pub fn new(base_directory: NormalizedPath) -> Self {
        Self {
            base_directory,
            ..Self::default()
        }
    }

    /// First project carrying `guid`.
    pub fn project_by_guid(&self, guid: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| guids::same_guid(&p.project_guid, guid))
    }

    /// First project named exactly `name`, falling back to a
    /// case-insensitive match.
    pub fn project_by_name(&self, name: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.name == name)
            .or_else(|| {
                self.projects
                    .iter()
                    .find(|p| p.name.eq_ignore_ascii_case(name))
            })
    }

    pub fn project_name(&self, guid: &str) -> Option<&str> {
        self.project_by_guid(guid).map(|p| p.name.as_str())
    }

    /// Position of a configuration in the solution-wide list.
    pub fn solution_configuration_index(&self, name: &str) -> Option<usize> {
        self.solution_configuration_platforms
            .iter()
            .position(|c| c == name)
    }

    /// Group configuration entries by project, in order of first appearance.
    pub fn config_groups(&self) -> Vec<ConfigGroup<'_>> {
        let mut groups: Vec<ConfigGroup<'_>> = Vec::new();
        for entry in &self.project_configuration_platforms {
            match groups
                .iter_mut()
                .find(|g| guids::same_guid(g.project_guid, &entry.project_guid))
            {
                Some(group) => group.entries.push(entry),
                None => groups.push(ConfigGroup {
                    project_guid: &entry.project_guid,
                    entries: vec![entry],
                }),
            }
        }
        groups
    }
}
