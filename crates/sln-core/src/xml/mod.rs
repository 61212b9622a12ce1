//! XML solution definitions.
//!
//! ```xml
//! <solution>
//!   <projects>
//!     <project file="src\App\App.csproj" />
//!   </projects>
//!   <config-names-for-solution>
//!     <config name="Debug|Any CPU" />
//!   </config-names-for-solution>
//!   <solution-folders>
//!     <folder name="src">
//!       <project name="App" />
//!     </folder>
//!   </solution-folders>
//!   <project-config-properties>
//!     <project name="App" pattern="all" />
//!   </project-config-properties>
//!   <other-global-sections>
//!     <section name="SolutionProperties" type="preSolution">...</section>
//!   </other-global-sections>
//! </solution>
//! ```

pub(crate) mod dom;
pub mod reader;
pub mod writer;

pub(crate) use dom::Element;
pub use reader::load_xml;
pub use writer::save_xml;

pub const SOLUTION: &str = "solution";
pub const PROJECTS: &str = "projects";
pub const CONFIG_NAMES: &str = "config-names-for-solution";
pub const SOLUTION_FOLDERS: &str = "solution-folders";
pub const PROJECT_CONFIG_PROPERTIES: &str = "project-config-properties";
pub const OTHER_GLOBAL_SECTIONS: &str = "other-global-sections";
