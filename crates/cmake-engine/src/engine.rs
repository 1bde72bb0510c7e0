//! Workspace scan orchestration

use crate::config::CONFIG_KEY_DEFAULT_PRESET_BODY;
use cmake_fs::{ConfigGetter, ProjectLister};
use cmake_presets::{ProjectState, initialize_project_state, update_presets};
use futures::future::join_all;
use indexmap::IndexMap;
use std::sync::Arc;

/// Orchestrates project-state scans across all open project directories.
///
/// Owns the mapping from project path to scan state; readers receive
/// snapshot copies, never the live map, so external mutation cannot
/// corrupt engine state. One project's broken files never abort its
/// siblings — per-project failures stay on that project's state.
///
/// A scan takes `&mut self`, so concurrent scans on one engine instance
/// are rejected at compile time.
#[derive(Debug)]
pub struct IntegrationEngine {
    project: Arc<dyn ProjectLister>,
    config: Arc<dyn ConfigGetter>,
    state: IndexMap<String, ProjectState>,
}

impl IntegrationEngine {
    pub fn new(project: Arc<dyn ProjectLister>, config: Arc<dyn ConfigGetter>) -> Self {
        Self {
            project,
            config,
            state: IndexMap::new(),
        }
    }

    /// Snapshot of the last completed scan, keyed by project path in
    /// discovery order.
    pub fn state(&self) -> IndexMap<String, ProjectState> {
        self.state.clone()
    }

    /// Run one full workspace scan.
    ///
    /// Phase one initializes every listed directory concurrently and
    /// registers the results. Phase two merges preset sources and applies
    /// the selection policy over every registered state, shared file
    /// before private file within each project. The map is never exposed
    /// mid-scan; [`IntegrationEngine::state`] always reflects the last
    /// completed pass.
    pub async fn initialize_state(&mut self) {
        let default_presets_body = self.config.get(CONFIG_KEY_DEFAULT_PRESET_BODY);
        let directories = self.project.get_directories();

        self.state.clear();
        let states = join_all(
            directories
                .into_iter()
                .map(|dir| initialize_project_state(dir, &default_presets_body)),
        )
        .await;
        for state in states {
            let path = state.directory.get_path();
            tracing::info!(project = %path, cmake = state.is_cmake_project, "registered");
            self.state.insert(path, state);
        }

        let registered: Vec<ProjectState> = self.state.drain(..).map(|(_, state)| state).collect();
        let updated = join_all(registered.into_iter().map(update_presets)).await;
        for state in updated {
            self.state.insert(state.directory.get_path(), state);
        }
    }
}
