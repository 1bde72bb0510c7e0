//! Command implementations: the CLI is a host of the integration engine.

use crate::error::{CliError, Result};
use cmake_engine::{
    BuilderProvider, CONFIG_KEY_DEFAULT_PRESET_BODY, DEFAULT_PRESET_BODY, IntegrationEngine,
};
use cmake_fs::{ConfigGetter, Directory, LocalDirectory, ProjectLister};
use cmake_presets::{ProjectState, SelectedPreset};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Project lister over the directories given on the command line.
#[derive(Debug)]
struct ArgProjects {
    directories: Vec<Arc<dyn Directory>>,
}

impl ProjectLister for ArgProjects {
    fn get_directories(&self) -> Vec<Arc<dyn Directory>> {
        self.directories.clone()
    }
}

/// Configuration store of the CLI host: a single built-in default.
#[derive(Debug)]
struct CliConfig;

impl ConfigGetter for CliConfig {
    fn get(&self, key: &str) -> String {
        match key {
            CONFIG_KEY_DEFAULT_PRESET_BODY => DEFAULT_PRESET_BODY.to_string(),
            _ => String::new(),
        }
    }
}

/// Per-project scan summary printed to the user.
#[derive(Debug, Serialize)]
struct ProjectReport {
    path: String,
    is_cmake_project: bool,
    selected_preset: Option<SelectedPreset>,
    public_presets: Vec<String>,
    private_presets: Vec<String>,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl From<&ProjectState> for ProjectReport {
    fn from(state: &ProjectState) -> Self {
        let (public_presets, private_presets) = state
            .cmake_presets
            .as_ref()
            .map(|registries| {
                (
                    registries.public.order.clone(),
                    registries.private.order.clone(),
                )
            })
            .unwrap_or_default();
        Self {
            path: state.directory.get_path(),
            is_cmake_project: state.is_cmake_project,
            selected_preset: state.selected_cmake_preset.clone(),
            public_presets,
            private_presets,
            errors: state.errors.clone(),
            warnings: state.warnings.clone(),
        }
    }
}

fn resolve_root(dir: &Path) -> Result<PathBuf> {
    dir.canonicalize()
        .map_err(|_| CliError::user(format!("no such directory: {}", dir.display())))
}

async fn scan_reports(dirs: &[PathBuf]) -> Result<Vec<ProjectReport>> {
    let mut directories: Vec<Arc<dyn Directory>> = Vec::with_capacity(dirs.len());
    for dir in dirs {
        directories.push(Arc::new(LocalDirectory::new(resolve_root(dir)?)));
    }

    let mut engine = IntegrationEngine::new(Arc::new(ArgProjects { directories }), Arc::new(CliConfig));
    engine.initialize_state().await;

    Ok(engine.state().values().map(ProjectReport::from).collect())
}

fn print_report(report: &ProjectReport) {
    if !report.is_cmake_project {
        println!("{} {}", report.path.bold(), "not a CMake project".dimmed());
        return;
    }

    match &report.selected_preset {
        Some(selected) => println!(
            "{} {} preset {} [{}]",
            report.path.bold(),
            "CMake project".green(),
            selected.id.cyan(),
            selected.registry
        ),
        None => println!(
            "{} {} {}",
            report.path.bold(),
            "CMake project".green(),
            "no preset selected".yellow()
        ),
    }
    for error in &report.errors {
        println!("  {}: {}", "error".red().bold(), error);
    }
    for warning in &report.warnings {
        println!("  {}: {}", "warning".yellow().bold(), warning);
    }
}

pub async fn run_scan(dirs: &[PathBuf], json: bool) -> Result<()> {
    let reports = scan_reports(dirs).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }
    Ok(())
}

pub async fn run_targets(dir: &Path) -> Result<()> {
    let root = resolve_root(dir)?;
    let provider = BuilderProvider::new(root.to_string_lossy(), "CMake builders of");

    println!("{}", serde_json::to_string_pretty(&provider.settings())?);
    Ok(())
}
