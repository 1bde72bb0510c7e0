//! Project eligibility discovery and preset-file bootstrap

use crate::codes;
use crate::state::ProjectState;
use cmake_fs::{Directory, ProjectFile};
use std::sync::Arc;

/// Probe `directory` and build its initial scan state.
///
/// Directories without a `CMakeLists.txt` marker short-circuit after the
/// first probe. When the project carries no preset file at all, the shared
/// file is seeded with `default_presets_body` so the merge stage always
/// has a source to load; a rejected write becomes a
/// `cannot.create.preset` error on the state instead of failing the scan.
///
/// Probes run strictly in sequence since each outcome gates the next. The
/// only possible side effect is creating the shared preset file; the
/// private file is never written, nor is a preset file that already
/// exists.
pub async fn initialize_project_state(
    directory: Arc<dyn Directory>,
    default_presets_body: &str,
) -> ProjectState {
    let mut state = ProjectState::new(directory);

    // step 1: eligibility
    let cmakelists = state.directory.get_file(ProjectFile::CmakeLists.as_str());
    if !cmakelists.exists() {
        return state;
    }
    state.is_cmake_project = true;
    state.is_language_cpp_or_c = true;

    // step 2: enforce presets existence
    let shared = state.directory.get_file(ProjectFile::SharedPresets.as_str());
    if shared.exists() {
        return state;
    }
    let private = state
        .directory
        .get_file(ProjectFile::PrivatePresets.as_str());
    if private.exists() {
        return state;
    }

    if let Err(error) = shared.write(default_presets_body).await {
        tracing::warn!(
            project = %state.directory.get_path(),
            %error,
            "could not seed shared preset file"
        );
        state
            .errors
            .push(codes::cannot_create_preset(ProjectFile::SharedPresets.as_str()));
    }
    state
}
