//! Scan state of one project directory

use cmake_fs::Directory;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Namespace a preset belongs to.
///
/// Shared, version-controlled presets land in [`RegistryKey::Public`];
/// user-local ones in [`RegistryKey::Private`]. The namespaces are
/// independent: the same name in both resolves to two distinct entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryKey {
    Public,
    Private,
}

impl RegistryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl std::fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reference to the preset currently designated for use by a project.
///
/// When present it always names an entry that exists in the corresponding
/// namespace of [`ProjectState::cmake_presets`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedPreset {
    pub registry: RegistryKey,
    pub id: String,
}

/// Presets declared by one source file.
#[derive(Debug, Clone, Default)]
pub struct PresetNamespace {
    /// Names in source-array order. A duplicate name keeps both
    /// occurrences here even though `registry` retains only the later
    /// entry.
    pub order: Vec<String>,
    /// Name -> raw preset entry, passed through opaquely beyond `name`.
    pub registry: HashMap<String, Value>,
}

impl PresetNamespace {
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

/// The two preset namespaces of one project.
#[derive(Debug, Clone, Default)]
pub struct PresetRegistries {
    pub public: PresetNamespace,
    pub private: PresetNamespace,
}

impl PresetRegistries {
    pub fn namespace(&self, key: RegistryKey) -> &PresetNamespace {
        match key {
            RegistryKey::Public => &self.public,
            RegistryKey::Private => &self.private,
        }
    }

    pub fn namespace_mut(&mut self, key: RegistryKey) -> &mut PresetNamespace {
        match key {
            RegistryKey::Public => &mut self.public,
            RegistryKey::Private => &mut self.private,
        }
    }
}

/// Scan result for one project directory.
///
/// Built in two phases: [`crate::initialize_project_state`] decides
/// eligibility and seeds preset files, [`crate::update_presets`] loads
/// both namespaces and applies the selection policy. `errors` and
/// `warnings` are append-only within a scan pass.
#[derive(Debug, Clone)]
pub struct ProjectState {
    pub directory: Arc<dyn Directory>,
    pub is_cmake_project: bool,
    /// Derived from the marker probe; true only for CMake projects.
    pub is_language_cpp_or_c: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// `None` until the merge stage runs; stays `None` for non-CMake
    /// projects, whose scan short-circuits before that stage.
    pub cmake_presets: Option<PresetRegistries>,
    pub selected_cmake_preset: Option<SelectedPreset>,
}

impl ProjectState {
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self {
            directory,
            is_cmake_project: false,
            is_language_cpp_or_c: false,
            errors: Vec::new(),
            warnings: Vec::new(),
            cmake_presets: None,
            selected_cmake_preset: None,
        }
    }
}
