//! Serializer for the native solution format.

use std::fmt::Display;

use super::{NESTED_PROJECTS, PROJECT_CONFIGURATION_PLATFORMS, SOLUTION_CONFIGURATION_PLATFORMS};
use crate::model::SolutionModel;
use crate::settings::LineEnding;

/// The fixed tool/version banner.
pub const HEADER: [&str; 2] = [
    "Microsoft Visual Studio Solution File, Format Version 12.00",
    "# Visual Studio 2012",
];

/// Line-at-a-time text builder with a fixed terminator.
pub(crate) struct Lines {
    out: String,
    ending: &'static str,
}

impl Lines {
    pub(crate) fn new(ending: &'static str) -> Self {
        Self {
            out: String::new(),
            ending,
        }
    }

    pub(crate) fn line(&mut self, content: impl Display) {
        use std::fmt::Write;
        // Writing into a String cannot fail
        let _ = write!(self.out, "{}{}", content, self.ending);
    }

    pub(crate) fn into_string(self) -> String {
        self.out
    }

    fn section(&mut self, name: &str, section_type: &str) {
        self.line(format_args!("\tGlobalSection({name}) = {section_type}"));
    }

    fn end_section(&mut self) {
        self.line("\tEndGlobalSection");
    }
}

/// Render the model in model order.
///
/// Nothing is validated or reordered here; run
/// [`crate::canonical::reorder`] first for canonical output.
pub fn write_solution(model: &SolutionModel, line_ending: LineEnding) -> String {
    let mut w = Lines::new(line_ending.as_str());

    for header in HEADER {
        w.line(header);
    }

    for project in &model.projects {
        w.line(format_args!(
            "Project(\"{{{}}}\") = \"{}\", \"{}\", \"{{{}}}\"",
            project.project_type_guids, project.name, project.path, project.project_guid
        ));
        w.line("EndProject");
    }

    w.line("Global");

    w.section(SOLUTION_CONFIGURATION_PLATFORMS, "preSolution");
    for config in &model.solution_configuration_platforms {
        w.line(format_args!("\t\t{config} = {config}"));
    }
    w.end_section();

    w.section(PROJECT_CONFIGURATION_PLATFORMS, "postSolution");
    for entry in &model.project_configuration_platforms {
        w.line(format_args!(
            "\t\t{{{}}}.{}.{} = {}",
            entry.project_guid,
            entry.solution_configuration_name,
            entry.property,
            entry.configuration_value
        ));
    }
    w.end_section();

    w.section(NESTED_PROJECTS, "preSolution");
    for nest in model.nested_projects.edges() {
        w.line(format_args!("\t\t{{{}}} = {{{}}}", nest.item, nest.parent));
    }
    w.end_section();

    for other in &model.other_global_sections {
        w.section(&other.name, &other.section_type);
        for raw in other.raw_value.lines() {
            w.line(raw);
        }
        w.end_section();
    }

    w.line("EndGlobal");

    tracing::debug!(bytes = w.out.len(), "rendered native solution");
    w.into_string()
}
