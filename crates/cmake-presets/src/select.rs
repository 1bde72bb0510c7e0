//! Namespace merge and active-preset selection

use crate::codes;
use crate::loader::load_presets;
use crate::state::{PresetRegistries, ProjectState, RegistryKey, SelectedPreset};
use cmake_fs::ProjectFile;

fn reset_presets(state: &mut ProjectState) {
    state.selected_cmake_preset = None;
    state.cmake_presets = Some(PresetRegistries::default());
}

/// True when the current selection references an entry that exists in the
/// namespace it names.
fn has_valid_selection(state: &ProjectState) -> bool {
    let (Some(selected), Some(registries)) = (&state.selected_cmake_preset, &state.cmake_presets)
    else {
        return false;
    };
    registries
        .namespace(selected.registry)
        .registry
        .contains_key(&selected.id)
}

/// Apply the selection policy to a state whose namespaces are loaded.
///
/// Both namespaces empty records `no.preset.after.load` and leaves the
/// selection empty. A still-valid existing selection is kept unchanged, so
/// re-running selection on a resolved state never silently switches
/// presets. Otherwise shared presets win over private ones, and the first
/// declared preset of the winning namespace becomes the default.
pub fn choose_active_preset(mut state: ProjectState) -> ProjectState {
    let Some(registries) = &state.cmake_presets else {
        return state;
    };
    let has_shared_presets = !registries.public.is_empty();
    let has_no_presets = !has_shared_presets && registries.private.is_empty();
    if has_no_presets {
        state.errors.push(codes::NO_PRESET_AFTER_LOAD.to_string());
        return state;
    }
    if has_valid_selection(&state) {
        return state;
    }

    state.selected_cmake_preset = if has_shared_presets {
        registries.public.order.first().map(|id| SelectedPreset {
            registry: RegistryKey::Public,
            id: id.clone(),
        })
    } else {
        registries.private.order.first().map(|id| SelectedPreset {
            registry: RegistryKey::Private,
            id: id.clone(),
        })
    };
    state
}

/// Rebuild both namespaces from their source files and (re)apply the
/// selection policy.
///
/// No-op for non-CMake states. The shared file loads strictly before the
/// private one, keeping file-read ordering deterministic. This stage never
/// fails: broken preset sources degrade to `errors`/`warnings` entries so
/// a workspace scan completes for every project.
pub async fn update_presets(mut state: ProjectState) -> ProjectState {
    if !state.is_cmake_project {
        return state;
    }
    reset_presets(&mut state);
    let state = load_presets(
        state,
        ProjectFile::SharedPresets.as_str(),
        RegistryKey::Public,
    )
    .await;
    let state = load_presets(
        state,
        ProjectFile::PrivatePresets.as_str(),
        RegistryKey::Private,
    )
    .await;
    choose_active_preset(state)
}
