//! Loading one preset file into one namespace

use crate::codes;
use crate::state::{PresetNamespace, ProjectState, RegistryKey};
use serde_json::Value;

/// Parse a preset document body into a namespace.
///
/// `order` preserves source-array order, duplicates included, while the
/// registry retains the later of two same-named entries. A missing or
/// non-array `configurePresets` field yields an empty namespace. Entries
/// without a string `name` are dropped.
fn parse_namespace(body: &str) -> Result<PresetNamespace, serde_json::Error> {
    let document: Value = serde_json::from_str(body)?;
    let mut namespace = PresetNamespace::default();
    if let Some(entries) = document.get("configurePresets").and_then(Value::as_array) {
        for entry in entries {
            if let Some(name) = entry.get("name").and_then(Value::as_str) {
                namespace.order.push(name.to_string());
                namespace.registry.insert(name.to_string(), entry.clone());
            }
        }
    }
    Ok(namespace)
}

/// Load the presets declared by `file_name` into the `key` namespace.
///
/// The caller has reset the namespace beforehand; an absent file leaves it
/// empty and returns the state unchanged. Read rejections and malformed
/// documents both degrade to a `cannot.read.file` warning carrying the
/// failure description — the scan itself never fails here.
pub async fn load_presets(
    mut state: ProjectState,
    file_name: &str,
    key: RegistryKey,
) -> ProjectState {
    let file = state.directory.get_file(file_name);
    if !file.exists() {
        return state;
    }

    let loaded = match file.read().await {
        Ok(body) => parse_namespace(&body).map_err(|e| e.to_string()),
        Err(error) => Err(error.to_string()),
    };
    match loaded {
        Ok(namespace) => {
            tracing::debug!(
                project = %state.directory.get_path(),
                file = file_name,
                registry = %key,
                presets = namespace.order.len(),
                "loaded presets"
            );
            let registries = state.cmake_presets.get_or_insert_with(Default::default);
            *registries.namespace_mut(key) = namespace;
        }
        Err(description) => {
            state
                .warnings
                .push(codes::cannot_read_file(file_name, &description));
        }
    }
    state
}
