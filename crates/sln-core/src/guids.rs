//! Well-known project type GUIDs and GUID helpers.

use std::collections::HashMap;
use std::sync::LazyLock;

use sln_fs::NormalizedPath;

pub const GENERIC_PROJECT: &str = "9344BDBB-3E7F-41FC-A0DD-8665D75EE146";
pub const CSHARP_DESKTOP: &str = "FAE04EC0-301F-11D3-BF4B-00C04F79EFBC";
pub const SOLUTION_FOLDER: &str = "2150E333-8FDC-42A3-9474-1A3956D46DE8";
pub const SHARED_PROJECT: &str = "D954291E-2A0B-460D-934E-DC6B0785DB48";

/// Symbolic name to GUID, in display priority order.
const KNOWN_PROJECT_TYPES: &[(&str, &str)] = &[
    ("GenericProject", GENERIC_PROJECT),
    ("CSharpDesktop", CSHARP_DESKTOP),
    ("SolutionFolder", SOLUTION_FOLDER),
    ("SharedProject", SHARED_PROJECT),
];

struct ProjectTypeTable {
    by_name: HashMap<&'static str, &'static str>,
    by_guid: HashMap<String, &'static str>,
}

static PROJECT_TYPES: LazyLock<ProjectTypeTable> = LazyLock::new(|| {
    let mut by_name = HashMap::new();
    let mut by_guid = HashMap::new();
    for &(name, guid) in KNOWN_PROJECT_TYPES {
        by_name.insert(name, guid);
        by_guid.entry(guid.to_ascii_uppercase()).or_insert(name);
    }
    ProjectTypeTable { by_name, by_guid }
});

/// Symbolic name of a well-known project type GUID.
pub fn name_for(guid: &str) -> Option<&'static str> {
    PROJECT_TYPES
        .by_guid
        .get(&strip_braces(guid).to_ascii_uppercase())
        .copied()
}

/// GUID of a well-known project type name.
pub fn guid_for(name: &str) -> Option<&'static str> {
    PROJECT_TYPES.by_name.get(name).copied()
}

/// Symbolic name when known, the GUID itself otherwise.
pub fn display_name(guid: &str) -> &str {
    name_for(guid).unwrap_or(guid)
}

/// Project type to assume when a project file does not declare one.
pub fn for_project_file(path: &NormalizedPath) -> &'static str {
    if path.has_extension("csproj") {
        CSHARP_DESKTOP
    } else if path.has_extension("shproj") {
        SHARED_PROJECT
    } else {
        GENERIC_PROJECT
    }
}

/// Remove surrounding whitespace and braces: `{ABC}` -> `ABC`.
pub fn strip_braces(guid: &str) -> &str {
    let trimmed = guid.trim();
    let trimmed = trimmed.strip_prefix('{').unwrap_or(trimmed);
    trimmed.strip_suffix('}').unwrap_or(trimmed)
}

/// GUIDs compare case-insensitively, braces ignored.
pub fn same_guid(a: &str, b: &str) -> bool {
    strip_braces(a).eq_ignore_ascii_case(strip_braces(b))
}

/// A fresh upper-case GUID without braces.
pub fn new_guid() -> String {
    uuid::Uuid::new_v4().to_string().to_ascii_uppercase()
}
