//! Canned solution texts shared by the test suites.

pub const GUID_A: &str = "AAAAAAAA-0000-0000-0000-000000000001";
pub const GUID_B: &str = "BBBBBBBB-0000-0000-0000-000000000002";
pub const GUID_FOLDER: &str = "FFFFFFFF-0000-0000-0000-000000000003";

/// Two C# projects listed B before A, one folder holding A, a fully
/// patterned configuration set for A, a partial set for B, and one
/// passthrough section.
pub const UNORDERED_SOLUTION: &str = "\
Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio 2012
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"B\", \"B\\B.csproj\", \"{BBBBBBBB-0000-0000-0000-000000000002}\"
EndProject
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"A\", \"A\\A.csproj\", \"{AAAAAAAA-0000-0000-0000-000000000001}\"
EndProject
Project(\"{2150E333-8FDC-42A3-9474-1A3956D46DE8}\") = \"Libs\", \"Libs\", \"{FFFFFFFF-0000-0000-0000-000000000003}\"
EndProject
Global
\tGlobalSection(SolutionConfigurationPlatforms) = preSolution
\t\tRelease|x86 = Release|x86
\t\tDebug|x86 = Debug|x86
\tEndGlobalSection
\tGlobalSection(ProjectConfigurationPlatforms) = postSolution
\t\t{BBBBBBBB-0000-0000-0000-000000000002}.Release|x86.ActiveCfg = Release|Win32
\t\t{AAAAAAAA-0000-0000-0000-000000000001}.Release|x86.ActiveCfg = Release|x86
\t\t{AAAAAAAA-0000-0000-0000-000000000001}.Release|x86.Build.0 = Release|x86
\t\t{AAAAAAAA-0000-0000-0000-000000000001}.Debug|x86.ActiveCfg = Debug|x86
\t\t{AAAAAAAA-0000-0000-0000-000000000001}.Debug|x86.Build.0 = Debug|x86
\tEndGlobalSection
\tGlobalSection(SolutionProperties) = preSolution
\t\tHideSolutionNode = FALSE
\tEndGlobalSection
\tGlobalSection(NestedProjects) = preSolution
\t\t{AAAAAAAA-0000-0000-0000-000000000001} = {FFFFFFFF-0000-0000-0000-000000000003}
\tEndGlobalSection
EndGlobal
";

/// A single project, no configurations and no `NestedProjects` section.
pub const MINIMAL_SOLUTION: &str = "\
Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio 2012
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"A\", \"A\\A.csproj\", \"{AAAAAAAA-0000-0000-0000-000000000001}\"
EndProject
Global
\tGlobalSection(SolutionConfigurationPlatforms) = preSolution
\tEndGlobalSection
\tGlobalSection(ProjectConfigurationPlatforms) = postSolution
\tEndGlobalSection
EndGlobal
";
