//! Canonical ordering of every model collection.
//!
//! All sort keys derive from field values, never from prior positions, and
//! every sort is stable, so `reorder` is idempotent. References that do not
//! resolve to a project sort after the resolved ones, by raw GUID.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::{ProjectConfigurationPlatform, SolutionModel};

/// Case-insensitive ordinal comparison (upper-case folding).
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_uppercase)
        .cmp(b.chars().flat_map(char::to_uppercase))
}

fn guid_key(guid: &str) -> String {
    crate::guids::strip_braces(guid).to_ascii_uppercase()
}

/// Resolved names sort first, by name; unresolved ones after, by GUID.
fn compare_resolved(a: (Option<&str>, &str), b: (Option<&str>, &str)) -> Ordering {
    match (a.0, b.0) {
        (Some(x), Some(y)) => compare_ignore_case(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => compare_ignore_case(a.1, b.1),
    }
}

/// Impose the canonical order in place:
///
/// 1. projects by name
/// 2. solution configurations lexicographically
/// 3. nest groups by parent name, items within a group by item name
/// 4. configuration entries by owning project position, then
///    configuration name, then property
///
/// All string comparisons are case-insensitive.
pub fn reorder(model: &mut SolutionModel) {
    model
        .projects
        .sort_by(|a, b| compare_ignore_case(&a.name, &b.name));
    model
        .solution_configuration_platforms
        .sort_by(|a, b| compare_ignore_case(a, b));

    // First project wins for duplicated GUIDs
    let mut names: HashMap<String, &str> = HashMap::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for (idx, project) in model.projects.iter().enumerate() {
        let key = guid_key(&project.project_guid);
        names.entry(key.clone()).or_insert(project.name.as_str());
        positions.entry(key).or_insert(idx);
    }
    let name_of = |guid: &str| names.get(&guid_key(guid)).copied();

    let groups = model.nested_projects.groups_mut();
    for group in groups.iter_mut() {
        group
            .items
            .sort_by(|a, b| compare_resolved((name_of(a), a), (name_of(b), b)));
    }
    groups.sort_by(|a, b| {
        compare_resolved((name_of(&a.parent), &a.parent), (name_of(&b.parent), &b.parent))
    });

    let position_of = |entry: &ProjectConfigurationPlatform| {
        positions
            .get(&guid_key(&entry.project_guid))
            .copied()
            .unwrap_or(usize::MAX)
    };
    model.project_configuration_platforms.sort_by(|a, b| {
        position_of(a)
            .cmp(&position_of(b))
            .then_with(|| guid_key(&a.project_guid).cmp(&guid_key(&b.project_guid)))
            .then_with(|| {
                compare_ignore_case(&a.solution_configuration_name, &b.solution_configuration_name)
            })
            .then_with(|| compare_ignore_case(&a.property, &b.property))
    });

    tracing::debug!(
        projects = model.projects.len(),
        nests = model.nested_projects.len(),
        project_configurations = model.project_configuration_platforms.len(),
        "reordered solution"
    );
}
