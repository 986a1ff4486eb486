//! Common test utilities for podstatic integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A test project for integration tests
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root (the directory containing `ios/`)
    pub path: PathBuf,
}

impl TestProject {
    /// Create a new, empty test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a project with `ios/Podfile`
    pub fn with_podfile(content: &str) -> Self {
        let project = Self::new();
        project.write_file("ios/Podfile", content);
        project
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// The podstatic binary, run from the project root
    pub fn cmd(&self) -> Command {
        let mut cmd = podstatic_cmd();
        cmd.current_dir(&self.path);
        cmd
    }
}

/// The podstatic binary with a clean environment
#[allow(deprecated)]
pub fn podstatic_cmd() -> Command {
    let mut cmd = Command::cargo_bin("podstatic").expect("podstatic binary should be built");
    // Ignore any developer override of the project root during tests
    cmd.env_remove("PODSTATIC_PROJECT_ROOT");
    cmd
}

/// Podfile without any hook
#[allow(dead_code)]
pub const SIMPLE_PODFILE: &str = "target 'MyApp' do\n  # Some pod dependencies\nend";

/// Marker comment written with the hook
#[allow(dead_code)]
pub const MARKER: &str = "# Added by expo-plugin-ios-static-libraries";
