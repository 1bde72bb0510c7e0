//! Fixed file names probed inside each project directory.

use std::path::Path;

/// Well-known files of a CMake-managed project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFile {
    /// The `CMakeLists.txt` build description (project marker)
    CmakeLists,
    /// The `CMakePresets.json` shared, version-controlled preset file
    SharedPresets,
    /// The `CMakeUserPresets.json` user-local preset file
    PrivatePresets,
}

impl ProjectFile {
    /// Get the relative file name inside a project directory.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CmakeLists => "CMakeLists.txt",
            Self::SharedPresets => "CMakePresets.json",
            Self::PrivatePresets => "CMakeUserPresets.json",
        }
    }
}

impl AsRef<Path> for ProjectFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectFile {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
