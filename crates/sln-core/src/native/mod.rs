//! The native line-oriented solution format.
//!
//! ```text
//! Project("{TYPEGUID}") = "Name", "Path\Name.csproj", "{GUID}"
//! EndProject
//! Global
//!     GlobalSection(SolutionConfigurationPlatforms) = preSolution
//!         Debug|Any CPU = Debug|Any CPU
//!     EndGlobalSection
//! EndGlobal
//! ```
//!
//! Only three global sections are interpreted; all others pass through
//! verbatim.

pub mod parser;
pub mod writer;

pub use parser::parse_solution;
pub use writer::write_solution;

pub const SOLUTION_CONFIGURATION_PLATFORMS: &str = "SolutionConfigurationPlatforms";
pub const PROJECT_CONFIGURATION_PLATFORMS: &str = "ProjectConfigurationPlatforms";
pub const NESTED_PROJECTS: &str = "NestedProjects";

/// Whether a global section is interpreted by the model.
pub fn is_well_known_section(name: &str) -> bool {
    matches!(
        name,
        SOLUTION_CONFIGURATION_PLATFORMS | PROJECT_CONFIGURATION_PLATFORMS | NESTED_PROJECTS
    )
}
