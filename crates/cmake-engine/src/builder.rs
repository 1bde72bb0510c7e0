//! Build-command provider stub
//!
//! Turns a resolved project into descriptions the host build system can
//! invoke. Placeholder behavior: the single description shells out to
//! `echo` with the provider's nice name instead of invoking CMake.

use serde::Serialize;

/// One invocable build description offered to the host.
#[derive(Debug, Clone, Serialize)]
pub struct BuildDescription {
    pub exec: String,
    pub name: String,
    pub args: Vec<String>,
    pub sh: bool,
    pub cwd: String,
}

/// Provides build descriptions for one project root.
#[derive(Debug, Clone)]
pub struct BuilderProvider {
    basedir: String,
    nice_name: String,
}

impl BuilderProvider {
    pub fn new(cwd: impl Into<String>, nice_name_prefix: &str) -> Self {
        let basedir = cwd.into();
        let nice_name = format!("{nice_name_prefix} '{basedir}'");
        Self { basedir, nice_name }
    }

    /// Readable name of this provider.
    pub fn nice_name(&self) -> &str {
        &self.nice_name
    }

    /// Whether this provider can build the project in its base directory.
    pub fn is_eligible(&self) -> bool {
        true
    }

    /// Build descriptions for the host to register.
    pub fn settings(&self) -> Vec<BuildDescription> {
        vec![BuildDescription {
            exec: "echo".to_string(),
            name: format!("cmake:{}> echo", self.basedir),
            args: vec![self.nice_name.clone()],
            sh: true,
            cwd: self.basedir.clone(),
        }]
    }
}
