//! Template synthesis and multiset matching.

use proptest::prelude::*;
use rstest::rstest;
use sln_core::ProjectConfigurationPlatform;
use sln_core::template::ConfigTemplate;

const CONFIGS: [&str; 2] = ["Debug|AnyCPU", "Release|AnyCPU"];

fn entry(config: &str, property: &str, value: &str) -> ProjectConfigurationPlatform {
    ProjectConfigurationPlatform {
        project_guid: "P".to_string(),
        solution_configuration_name: config.to_string(),
        property: property.to_string(),
        configuration_value: value.to_string(),
    }
}

fn conventional() -> Vec<ProjectConfigurationPlatform> {
    vec![
        entry("Debug|AnyCPU", "ActiveCfg", "Debug|Any CPU"),
        entry("Debug|AnyCPU", "Build.0", "Debug|Any CPU"),
        entry("Release|AnyCPU", "ActiveCfg", "Release|Any CPU"),
        entry("Release|AnyCPU", "Build.0", "Release|Any CPU"),
    ]
}

#[test]
fn test_all_template_for_any_cpu() {
    let template = ConfigTemplate::all(&CONFIGS);
    assert_eq!(template.instantiate("P"), conventional());
}

#[rstest]
#[case::value(0, |e: &mut ProjectConfigurationPlatform| e.configuration_value = "Debug|x86".into())]
#[case::property(1, |e: &mut ProjectConfigurationPlatform| e.property = "Build.1".into())]
#[case::config(3, |e: &mut ProjectConfigurationPlatform| e.solution_configuration_name = "Release|x86".into())]
fn test_single_difference_breaks_match(
    #[case] index: usize,
    #[case] mutate: fn(&mut ProjectConfigurationPlatform),
) {
    let template = ConfigTemplate::all(&CONFIGS);
    let mut entries = conventional();
    mutate(&mut entries[index]);
    assert!(!template.matches(&entries));
}

#[test]
fn test_duplicates_matter() {
    let template = ConfigTemplate::all(&CONFIGS);
    let mut entries = conventional();
    entries[3] = entries[2].clone();
    assert!(!template.matches(&entries));

    let mut extra = conventional();
    extra.push(extra[0].clone());
    assert!(!template.matches(&extra));

    let mut missing = conventional();
    missing.pop();
    assert!(!template.matches(&missing));
}

#[test]
fn test_configuration_without_platform_uses_raw_value() {
    let template = ConfigTemplate::all(&["Default"]);
    let values: Vec<_> = template
        .entries()
        .iter()
        .map(|e| e.configuration_value.as_str())
        .collect();
    assert_eq!(values, ["Default", "Default"]);
}

proptest! {
    #[test]
    fn prop_match_ignores_order(order in Just((0..4usize).collect::<Vec<_>>()).prop_shuffle()) {
        let template = ConfigTemplate::all(&CONFIGS);
        let base = conventional();
        let permuted: Vec<_> = order.iter().map(|&i| base[i].clone()).collect();
        prop_assert!(template.matches(&permuted));
    }
}
