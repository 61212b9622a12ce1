//! Solution model and transformations for Solution Sanitizer.
//!
//! A solution manifest is loaded from either its native line-oriented text
//! form or an XML definition into a [`SolutionModel`], optionally brought
//! into canonical order, and written back out in either form.
//!
//! ```text
//! .sln  --native::parse_solution--+                       +--native::write_solution--> .sln
//!                                  +--> SolutionModel --+
//! .xml  --xml::load_xml-----------+    canonical::reorder +--xml::save_xml-----------> .xml
//! ```
//!
//! # Modules
//!
//! - [`model`]: projects, configurations, nests, passthrough sections
//! - [`native`]: section-scanning parser and fixed-format writer
//! - [`xml`]: XML definition codec
//! - [`template`]: the `pattern="all"` matcher
//! - [`canonical`]: deterministic ordering
//! - [`resolver`]: project file metadata lookup
//! - [`dump`]: diagnostic renditions

pub mod canonical;
pub mod diagnostics;
pub mod dump;
pub mod error;
pub mod guids;
pub mod model;
pub mod native;
pub mod pipeline;
pub mod resolver;
pub mod settings;
pub mod template;
pub mod xml;

pub use canonical::reorder;
pub use diagnostics::{CollectingSink, TracingSink, WarningSink};
pub use error::{Error, Result};
pub use model::{
    GlobalSection, Nest, NestGroup, NestedProjects, Project, ProjectConfigurationPlatform,
    SolutionModel,
};
pub use pipeline::{SolutionFormat, load_file, render, save_file};
pub use resolver::{MsBuildProjectResolver, ProjectMetadata, ProjectMetadataResolver};
pub use settings::{DumpFormat, LineEnding, SanitizerSettings};
pub use template::ConfigTemplate;
