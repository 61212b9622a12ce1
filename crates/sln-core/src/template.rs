//! Default per-configuration pattern for projects.
//!
//! A project "follows the pattern" when, for every solution configuration,
//! it carries exactly one `ActiveCfg` and one `Build.0` entry whose value is
//! the normalized configuration. Such projects are written to XML as
//! `pattern="all"`.

use crate::model::ProjectConfigurationPlatform;

/// Name of the only template, as used in the `pattern` attribute.
pub const PATTERN_ALL: &str = "all";

/// Properties generated for each configuration, in order.
pub const DEFAULT_PROPERTIES: [&str; 2] = ["ActiveCfg", "Build.0"];

/// One `(configuration, property, value)` triple of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub solution_configuration_name: String,
    pub property: String,
    pub configuration_value: String,
}

impl TemplateEntry {
    fn matches(&self, entry: &ProjectConfigurationPlatform) -> bool {
        self.property == entry.property
            && self.solution_configuration_name == entry.solution_configuration_name
            && self.configuration_value == entry.configuration_value
    }
}

/// A synthesized set of expected entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigTemplate {
    name: &'static str,
    entries: Vec<TemplateEntry>,
}

impl ConfigTemplate {
    /// The `all` template for the given solution configurations.
    pub fn all<S: AsRef<str>>(configurations: &[S]) -> Self {
        let entries = configurations
            .iter()
            .flat_map(|config| {
                let config = config.as_ref();
                let value = normalize_configuration_value(config);
                DEFAULT_PROPERTIES.iter().map(move |property| TemplateEntry {
                    solution_configuration_name: config.to_string(),
                    property: property.to_string(),
                    configuration_value: value.clone(),
                })
            })
            .collect();
        Self {
            name: PATTERN_ALL,
            entries,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    /// Multiset equality between the template and `actual`.
    ///
    /// Order is irrelevant; multiplicity is not. Each actual entry must
    /// claim a distinct template entry and every template entry must be
    /// claimed.
    pub fn matches<'a, I>(&self, actual: I) -> bool
    where
        I: IntoIterator<Item = &'a ProjectConfigurationPlatform>,
    {
        let mut claimed = vec![false; self.entries.len()];
        let mut count = 0;
        for entry in actual {
            count += 1;
            let slot = (0..self.entries.len())
                .find(|&idx| !claimed[idx] && self.entries[idx].matches(entry));
            match slot {
                Some(idx) => claimed[idx] = true,
                None => return false,
            }
        }
        count == self.entries.len() && claimed.iter().all(|c| *c)
    }

    /// Concrete entries for one project.
    pub fn instantiate(&self, project_guid: &str) -> Vec<ProjectConfigurationPlatform> {
        self.entries
            .iter()
            .map(|t| ProjectConfigurationPlatform {
                project_guid: project_guid.to_string(),
                solution_configuration_name: t.solution_configuration_name.clone(),
                property: t.property.clone(),
                configuration_value: t.configuration_value.clone(),
            })
            .collect()
    }
}

/// The value a conventional project maps a solution configuration to.
///
/// `<cfg>|<arch>` is split on the last `|`; a configuration ending in
/// `Debug`/`Release` collapses to that suffix and `AnyCPU` becomes
/// `Any CPU`. Without a `|` the configuration is used unchanged.
pub fn normalize_configuration_value(config: &str) -> String {
    let Some((conf, arch)) = config.rsplit_once('|') else {
        return config.to_string();
    };
    let conf = if conf.ends_with("Debug") {
        "Debug"
    } else if conf.ends_with("Release") {
        "Release"
    } else {
        conf
    };
    let arch = if arch == "AnyCPU" { "Any CPU" } else { arch };
    format!("{conf}|{arch}")
}
