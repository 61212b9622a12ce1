//! [`TestSolution`] builder for solution trees on disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding project files and solution definitions.
///
/// # Example
///
/// ```rust,no_run
/// use sln_test_utils::TestSolution;
///
/// let sln = TestSolution::new();
/// sln.add_project("App/App.csproj", Some("11111111-1111-1111-1111-111111111111"));
/// sln.write("App.xml", "<solution/>");
/// sln.assert_file_exists("App/App.csproj");
/// ```
pub struct TestSolution {
    temp_dir: TempDir,
}

impl Default for TestSolution {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSolution {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root as a forward-slash string, ready for `NormalizedPath::new`.
    pub fn root_str(&self) -> String {
        self.root().to_string_lossy().replace('\\', "/")
    }

    /// Absolute path of `relative` inside the root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Write a minimal MSBuild project file, declaring `guid` when given.
    pub fn add_project(&self, relative: &str, guid: Option<&str>) -> PathBuf {
        self.write(relative, &project_file(guid, None))
    }

    /// Write a project file declaring both its GUID and a type GUID list.
    pub fn add_typed_project(&self, relative: &str, guid: &str, type_guids: &str) -> PathBuf {
        self.write(relative, &project_file(Some(guid), Some(type_guids)))
    }

    pub fn read(&self, relative: &str) -> String {
        let full_path = self.path(relative);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// # Panics
    /// Panics if `relative` does not exist.
    pub fn assert_file_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, relative: &str, content: &str) {
        let file_content = self.read(relative);
        assert!(
            file_content.contains(content),
            "Expected {} to contain {:?}, got:\n{}",
            relative,
            content,
            file_content
        );
    }
}

fn project_file(guid: Option<&str>, type_guids: Option<&str>) -> String {
    let mut properties = String::new();
    if let Some(guid) = guid {
        properties.push_str(&format!("    <ProjectGuid>{{{guid}}}</ProjectGuid>\n"));
    }
    if let Some(types) = type_guids {
        properties.push_str(&format!("    <ProjectTypeGuids>{types}</ProjectTypeGuids>\n"));
    }
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <Project ToolsVersion=\"15.0\" xmlns=\"http://schemas.microsoft.com/developer/msbuild/2003\">\n\
         \x20 <PropertyGroup>\n\
         {properties}\
         \x20 </PropertyGroup>\n\
         </Project>\n"
    )
}
