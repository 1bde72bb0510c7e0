//! Project-state discovery and preset resolution.
//!
//! For each open project directory this crate decides whether it is a
//! CMake-managed project, seeds a default preset file when none exists,
//! loads the shared and user-local preset files into two independent
//! namespaces, and deterministically selects one active preset.
//!
//! All per-file failures degrade to diagnostic codes recorded on the
//! [`ProjectState`]; a workspace scan always completes for every project.

pub mod codes;
pub mod init;
pub mod loader;
pub mod select;
pub mod state;

pub use init::initialize_project_state;
pub use loader::load_presets;
pub use select::{choose_active_preset, update_presets};
pub use state::{
    PresetNamespace, PresetRegistries, ProjectState, RegistryKey, SelectedPreset,
};
