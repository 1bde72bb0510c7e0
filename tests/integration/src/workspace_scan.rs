//! End-to-end workspace scan over scripted in-memory hosts.
//!
//! One engine pass over five directories covering every discovery
//! outcome: not a CMake project, bootstrap succeeds, bootstrap fails,
//! shared presets win, private presets as fallback.

use cmake_engine::{CONFIG_KEY_DEFAULT_PRESET_BODY, IntegrationEngine};
use cmake_fs::Directory;
use cmake_presets::RegistryKey;
use cmake_test_utils::{MemoryDirectory, MemoryFile, StaticConfig, StaticProjectLister};
use pretty_assertions::assert_eq;
use std::sync::Arc;

const MARKER: &str = "CMakeLists.txt";
const SHARED: &str = "CMakePresets.json";
const PRIVATE: &str = "CMakeUserPresets.json";

const SEEDED_BODY: &str = r#"{"configurePresets": [{"name": "seeded"}]}"#;
const WHATEVER_BODY: &str = r#"{"configurePresets": [{"name": "whatever"}]}"#;

fn cmake_project(path: &str) -> Arc<MemoryDirectory> {
    let dir = MemoryDirectory::new(path);
    dir.insert(MARKER, MemoryFile::with_content("project(demo C CXX)"));
    dir
}

#[tokio::test]
async fn test_full_scan_over_every_discovery_outcome() {
    let plain = MemoryDirectory::new("/ws/plain");

    let fresh = cmake_project("/ws/fresh");

    let readonly = cmake_project("/ws/readonly");
    readonly.insert(SHARED, MemoryFile::uncreatable("read-only filesystem"));

    let team = cmake_project("/ws/team");
    team.insert(SHARED, MemoryFile::with_content(WHATEVER_BODY));

    let solo = cmake_project("/ws/solo");
    solo.insert(PRIVATE, MemoryFile::with_content(WHATEVER_BODY));

    let directories: Vec<Arc<dyn Directory>> = vec![
        plain.clone(),
        fresh.clone(),
        readonly.clone(),
        team.clone(),
        solo.clone(),
    ];
    let mut engine = IntegrationEngine::new(
        StaticProjectLister::new(directories),
        Arc::new(StaticConfig::new().with(CONFIG_KEY_DEFAULT_PRESET_BODY, SEEDED_BODY)),
    );
    engine.initialize_state().await;
    let state = engine.state();

    // Registration covers every directory, in discovery order.
    let paths: Vec<&String> = state.keys().collect();
    assert_eq!(
        paths,
        ["/ws/plain", "/ws/fresh", "/ws/readonly", "/ws/team", "/ws/solo"]
    );

    // 1. No marker file: untouched base state.
    let project = &state["/ws/plain"];
    assert!(!project.is_cmake_project);
    assert!(!project.is_language_cpp_or_c);
    assert_eq!(project.errors, Vec::<String>::new());
    assert_eq!(project.warnings, Vec::<String>::new());
    assert!(project.cmake_presets.is_none());
    assert!(project.selected_cmake_preset.is_none());

    // 2. Marker only on a writable filesystem: shared file seeded with the
    // configured body, which then resolves as the active preset.
    let project = &state["/ws/fresh"];
    assert!(project.is_cmake_project);
    assert!(project.is_language_cpp_or_c);
    assert_eq!(project.errors, Vec::<String>::new());
    assert_eq!(fresh.file(SHARED).written().as_deref(), Some(SEEDED_BODY));
    let selected = project.selected_cmake_preset.as_ref().unwrap();
    assert_eq!((selected.registry, selected.id.as_str()), (RegistryKey::Public, "seeded"));

    // 3. Marker plus rejected bootstrap: the create error from phase one,
    // then the exhaustion error once the merge stage finds nothing.
    let project = &state["/ws/readonly"];
    assert_eq!(
        project.errors,
        vec!["cannot.create.preset:CMakePresets.json", "no.preset.after.load"]
    );
    assert!(project.selected_cmake_preset.is_none());

    // 4. Shared presets present: public namespace selected.
    let project = &state["/ws/team"];
    let selected = project.selected_cmake_preset.as_ref().unwrap();
    assert_eq!(
        (selected.registry, selected.id.as_str()),
        (RegistryKey::Public, "whatever")
    );

    // 5. Private presets only: private namespace selected.
    let project = &state["/ws/solo"];
    let selected = project.selected_cmake_preset.as_ref().unwrap();
    assert_eq!(
        (selected.registry, selected.id.as_str()),
        (RegistryKey::Private, "whatever")
    );
    assert_eq!(project.errors, Vec::<String>::new());
}

#[tokio::test]
async fn test_snapshot_mutation_does_not_leak_into_the_engine() {
    let mut engine = IntegrationEngine::new(
        StaticProjectLister::new(vec![cmake_project("/ws/guarded") as Arc<dyn Directory>]),
        Arc::new(StaticConfig::new().with(CONFIG_KEY_DEFAULT_PRESET_BODY, SEEDED_BODY)),
    );
    engine.initialize_state().await;

    let mut snapshot = engine.state();
    snapshot
        .get_mut("/ws/guarded")
        .unwrap()
        .errors
        .push("externally injected".to_string());
    snapshot.clear();

    let state = engine.state();
    assert_eq!(state["/ws/guarded"].errors, Vec::<String>::new());
}
