//! Native format parsing and writing against whole solution texts.

use pretty_assertions::assert_eq;
use rstest::rstest;
use sln_core::native::{parse_solution, write_solution};
use sln_core::{Error, LineEnding, reorder};
use sln_test_utils::samples::{GUID_A, GUID_B, GUID_FOLDER, MINIMAL_SOLUTION, UNORDERED_SOLUTION};

#[test]
fn test_parse_reads_every_collection() {
    let model = parse_solution(UNORDERED_SOLUTION).unwrap();

    let names: Vec<_> = model.projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["B", "A", "Libs"]);
    assert_eq!(model.projects[1].path, "A\\A.csproj");
    assert_eq!(model.projects[1].project_guid, GUID_A);
    assert!(model.projects[2].is_solution_folder());

    assert_eq!(
        model.solution_configuration_platforms,
        ["Release|x86", "Debug|x86"]
    );
    assert_eq!(model.project_configuration_platforms.len(), 5);
    assert_eq!(model.project_configuration_platforms[2].property, "Build.0");

    let edges: Vec<_> = model.nested_projects.edges().collect();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].item, GUID_A);
    assert_eq!(edges[0].parent, GUID_FOLDER);

    assert_eq!(model.other_global_sections.len(), 1);
    let section = &model.other_global_sections[0];
    assert_eq!(section.name, "SolutionProperties");
    assert_eq!(section.section_type, "preSolution");
    assert_eq!(section.raw_value, "\t\tHideSolutionNode = FALSE\n");
}

#[test]
fn test_missing_nested_projects_section_is_tolerated() {
    let model = parse_solution(MINIMAL_SOLUTION).unwrap();
    assert_eq!(model.projects.len(), 1);
    assert!(model.nested_projects.is_empty());
    assert!(model.solution_configuration_platforms.is_empty());
    assert!(model.project_configuration_platforms.is_empty());
}

#[test]
fn test_crlf_input_parses_like_lf() {
    let crlf = UNORDERED_SOLUTION.replace('\n', "\r\n");
    assert_eq!(
        parse_solution(&crlf).unwrap(),
        parse_solution(UNORDERED_SOLUTION).unwrap()
    );
}

#[test]
fn test_write_parse_write_is_stable() {
    let model = parse_solution(UNORDERED_SOLUTION).unwrap();
    let first = write_solution(&model, LineEnding::Crlf);
    let second = write_solution(&parse_solution(&first).unwrap(), LineEnding::Crlf);
    assert_eq!(first, second);
}

#[test]
fn test_round_trip_preserves_model() {
    let mut model = parse_solution(UNORDERED_SOLUTION).unwrap();
    reorder(&mut model);
    let reparsed = parse_solution(&write_solution(&model, LineEnding::Lf)).unwrap();
    assert_eq!(reparsed, model);
}

#[test]
fn test_canonical_output() {
    let mut model = parse_solution(UNORDERED_SOLUTION).unwrap();
    reorder(&mut model);
    let out = write_solution(&model, LineEnding::Lf);

    let expected = format!(
        concat!(
            "Microsoft Visual Studio Solution File, Format Version 12.00\n",
            "# Visual Studio 2012\n",
            "Project(\"{{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}}\") = \"A\", \"A\\A.csproj\", \"{{{a}}}\"\n",
            "EndProject\n",
            "Project(\"{{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}}\") = \"B\", \"B\\B.csproj\", \"{{{b}}}\"\n",
            "EndProject\n",
            "Project(\"{{2150E333-8FDC-42A3-9474-1A3956D46DE8}}\") = \"Libs\", \"Libs\", \"{{{f}}}\"\n",
            "EndProject\n",
            "Global\n",
            "\tGlobalSection(SolutionConfigurationPlatforms) = preSolution\n",
            "\t\tDebug|x86 = Debug|x86\n",
            "\t\tRelease|x86 = Release|x86\n",
            "\tEndGlobalSection\n",
            "\tGlobalSection(ProjectConfigurationPlatforms) = postSolution\n",
            "\t\t{{{a}}}.Debug|x86.ActiveCfg = Debug|x86\n",
            "\t\t{{{a}}}.Debug|x86.Build.0 = Debug|x86\n",
            "\t\t{{{a}}}.Release|x86.ActiveCfg = Release|x86\n",
            "\t\t{{{a}}}.Release|x86.Build.0 = Release|x86\n",
            "\t\t{{{b}}}.Release|x86.ActiveCfg = Release|Win32\n",
            "\tEndGlobalSection\n",
            "\tGlobalSection(NestedProjects) = preSolution\n",
            "\t\t{{{a}}} = {{{f}}}\n",
            "\tEndGlobalSection\n",
            "\tGlobalSection(SolutionProperties) = preSolution\n",
            "\t\tHideSolutionNode = FALSE\n",
            "\tEndGlobalSection\n",
            "EndGlobal\n",
        ),
        a = GUID_A,
        b = GUID_B,
        f = GUID_FOLDER,
    );
    assert_eq!(out, expected);
}

#[test]
fn test_crlf_line_ending_applies_to_every_line() {
    let model = parse_solution(MINIMAL_SOLUTION).unwrap();
    let out = write_solution(&model, LineEnding::Crlf);
    assert!(out.ends_with("EndGlobal\r\n"));
    assert_eq!(out.matches('\n').count(), out.matches("\r\n").count());
}

#[rstest]
#[case::no_equals_in_header(
    "Global\n\tGlobalSection(SolutionConfigurationPlatforms) preSolution\n\tEndGlobalSection\nEndGlobal\n"
)]
#[case::unterminated(
    "Global\n\tGlobalSection(SolutionConfigurationPlatforms) = preSolution\n\t\tDebug|x86 = Debug|x86\n"
)]
#[case::config_without_separator(
    "Global\n\tGlobalSection(SolutionConfigurationPlatforms) = preSolution\n\t\tDebug|x86\n\tEndGlobalSection\nEndGlobal\n"
)]
#[case::project_config_key_too_short(
    "Global\n\tGlobalSection(ProjectConfigurationPlatforms) = postSolution\n\t\t{ABC} = Debug|x86\n\tEndGlobalSection\nEndGlobal\n"
)]
fn test_malformed_sections_fail(#[case] text: &str) {
    let err = parse_solution(text).unwrap_err();
    assert!(
        matches!(
            err,
            Error::MalformedSectionHeader { .. }
                | Error::UnterminatedSection { .. }
                | Error::MalformedEntry { .. }
        ),
        "unexpected error: {err}"
    );
}

#[test]
fn test_nested_lines_without_separator_are_ignored() {
    let text = "Global\n\tGlobalSection(NestedProjects) = preSolution\n\t\tgarbage\n\t\t{A} = {F}\n\tEndGlobalSection\nEndGlobal\n";
    let model = parse_solution(text).unwrap();
    assert_eq!(model.nested_projects.len(), 1);
}

#[test]
fn test_repeated_section_name_written_per_occurrence() {
    let text = "Global\n\tGlobalSection(X) = preSolution\n\t\ta = 1\n\tEndGlobalSection\n\tGlobalSection(X) = preSolution\n\t\ta = 2\n\tEndGlobalSection\nEndGlobal\n";
    let out = write_solution(&parse_solution(text).unwrap(), LineEnding::Lf);
    assert_eq!(out.matches("\tGlobalSection(X) = preSolution\n\t\ta = 1\n").count(), 2);
    assert!(!out.contains("a = 2"));
}
