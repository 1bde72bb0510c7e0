//! Workspace scans against real directories on the local filesystem.

use cmake_engine::{CONFIG_KEY_DEFAULT_PRESET_BODY, IntegrationEngine};
use cmake_fs::{Directory, LocalDirectory};
use cmake_presets::RegistryKey;
use cmake_test_utils::{StaticConfig, StaticProjectLister};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const SEEDED_BODY: &str = r#"{"configurePresets": [{"name": "seeded"}]}"#;

fn write_marker(root: &Path) {
    fs::write(root.join("CMakeLists.txt"), "project(demo C CXX)\n").unwrap();
}

fn engine_over(roots: &[&Path]) -> IntegrationEngine {
    let directories: Vec<Arc<dyn Directory>> = roots
        .iter()
        .map(|root| Arc::new(LocalDirectory::new(*root)) as Arc<dyn Directory>)
        .collect();
    IntegrationEngine::new(
        StaticProjectLister::new(directories),
        Arc::new(StaticConfig::new().with(CONFIG_KEY_DEFAULT_PRESET_BODY, SEEDED_BODY)),
    )
}

#[tokio::test]
async fn test_scan_bootstraps_a_preset_file_on_disk() {
    let temp = TempDir::new().unwrap();
    write_marker(temp.path());

    let mut engine = engine_over(&[temp.path()]);
    engine.initialize_state().await;

    let shared = temp.path().join("CMakePresets.json");
    assert!(shared.is_file());
    assert_eq!(fs::read_to_string(shared).unwrap(), SEEDED_BODY);

    let state = engine.state();
    let project = state.values().next().unwrap();
    assert_eq!(project.errors, Vec::<String>::new());
    let selected = project.selected_cmake_preset.as_ref().unwrap();
    assert_eq!(
        (selected.registry, selected.id.as_str()),
        (RegistryKey::Public, "seeded")
    );
}

#[tokio::test]
async fn test_scan_reads_shared_and_private_files_from_disk() {
    let temp = TempDir::new().unwrap();
    write_marker(temp.path());
    fs::write(
        temp.path().join("CMakePresets.json"),
        r#"{"configurePresets": [{"name": "team-debug"}, {"name": "team-release"}]}"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("CMakeUserPresets.json"),
        r#"{"configurePresets": [{"name": "mine"}]}"#,
    )
    .unwrap();

    let mut engine = engine_over(&[temp.path()]);
    engine.initialize_state().await;

    let state = engine.state();
    let project = state.values().next().unwrap();
    let registries = project.cmake_presets.as_ref().unwrap();
    assert_eq!(registries.public.order, vec!["team-debug", "team-release"]);
    assert_eq!(registries.private.order, vec!["mine"]);

    // Both sources present: the shared namespace wins the selection.
    let selected = project.selected_cmake_preset.as_ref().unwrap();
    assert_eq!(
        (selected.registry, selected.id.as_str()),
        (RegistryKey::Public, "team-debug")
    );
}

#[tokio::test]
async fn test_scan_mixes_cmake_and_non_cmake_directories() {
    let cmake = TempDir::new().unwrap();
    write_marker(cmake.path());
    let plain = TempDir::new().unwrap();

    let mut engine = engine_over(&[cmake.path(), plain.path()]);
    engine.initialize_state().await;

    let state = engine.state();
    assert_eq!(state.len(), 2);
    assert!(state[&cmake.path().to_string_lossy().into_owned()].is_cmake_project);
    assert!(!state[&plain.path().to_string_lossy().into_owned()].is_cmake_project);
    // Non-CMake directories are never seeded.
    assert!(!plain.path().join("CMakePresets.json").exists());
}

#[tokio::test]
async fn test_existing_preset_files_are_never_rewritten() {
    let temp = TempDir::new().unwrap();
    write_marker(temp.path());
    let original = r#"{"configurePresets": [{"name": "keep-me"}]}"#;
    fs::write(temp.path().join("CMakePresets.json"), original).unwrap();

    let mut engine = engine_over(&[temp.path()]);
    engine.initialize_state().await;

    assert_eq!(
        fs::read_to_string(temp.path().join("CMakePresets.json")).unwrap(),
        original
    );
}

#[tokio::test]
async fn test_malformed_file_on_disk_yields_a_warning_not_a_crash() {
    let temp = TempDir::new().unwrap();
    write_marker(temp.path());
    fs::write(temp.path().join("CMakePresets.json"), "{broken").unwrap();

    let mut engine = engine_over(&[temp.path()]);
    engine.initialize_state().await;

    let state = engine.state();
    let project = state.values().next().unwrap();
    assert_eq!(project.warnings.len(), 1);
    assert!(project.warnings[0].starts_with("cannot.read.file:CMakePresets.json:"));
    assert_eq!(project.errors, vec!["no.preset.after.load"]);
}
