//! Human-readable and JSON renditions of a model for inspection.

use crate::error::Result;
use crate::guids;
use crate::model::SolutionModel;
use crate::native::writer::Lines;
use crate::settings::DumpFormat;
use crate::template::ConfigTemplate;

/// Render `model` in `format`; `None` for [`DumpFormat::None`].
pub fn render(model: &SolutionModel, format: DumpFormat) -> Result<Option<String>> {
    Ok(match format {
        DumpFormat::Text => Some(render_text(model)),
        DumpFormat::Json => Some(render_json(model)?),
        DumpFormat::None => None,
    })
}

pub fn render_json(model: &SolutionModel) -> Result<String> {
    Ok(serde_json::to_string_pretty(model)?)
}

/// Indented listing of every collection. Unknown GUIDs print as `{GUID}`.
pub fn render_text(model: &SolutionModel) -> String {
    let mut w = Lines::new("\n");
    let name_or_guid = |guid: &str| match model.project_name(guid) {
        Some(name) => name.to_string(),
        None => format!("{{{guid}}}"),
    };

    w.line("Projects");
    for project in &model.projects {
        w.line(format_args!(
            "\t{} {}",
            guids::display_name(&project.project_type_guids),
            project.path
        ));
    }

    w.line("");
    w.line("SolutionConfigurationPlatform");
    for config in &model.solution_configuration_platforms {
        w.line(format_args!("\t{config}"));
    }

    w.line("");
    w.line("Solution Folders:");
    for group in model.nested_projects.groups() {
        w.line(format_args!("\t{}", name_or_guid(&group.parent)));
        for item in &group.items {
            w.line(format_args!("\t\t{}", name_or_guid(item)));
        }
    }

    w.line("");
    w.line("ProjectConfigurationPlatforms");
    let template = ConfigTemplate::all(&model.solution_configuration_platforms);
    for group in model.config_groups() {
        let name = name_or_guid(group.project_guid);
        if template.matches(group.entries.iter().copied()) {
            w.line(format_args!("\t{} : {}", name, template.name()));
            continue;
        }
        w.line(format_args!("\t{name}"));
        for entry in &group.entries {
            let index = model
                .solution_configuration_index(&entry.solution_configuration_name)
                .map(|i| i.to_string())
                .unwrap_or_else(|| "?".to_string());
            w.line(format_args!(
                "\t\tCFG#{} / {} / {}",
                index, entry.property, entry.configuration_value
            ));
        }
    }

    w.line("");
    for section in &model.other_global_sections {
        w.line(format_args!(
            "OTHER SECTION: {} ({})",
            section.name, section.section_type
        ));
        for raw in section.raw_value.lines() {
            w.line(raw);
        }
    }

    w.into_string()
}
