//! Static host capability implementations

use cmake_fs::{ConfigGetter, Directory, ProjectLister};
use std::collections::HashMap;
use std::sync::Arc;

/// Fixed list of open project directories.
#[derive(Debug, Default)]
pub struct StaticProjectLister {
    directories: Vec<Arc<dyn Directory>>,
}

impl StaticProjectLister {
    pub fn new(directories: Vec<Arc<dyn Directory>>) -> Arc<Self> {
        Arc::new(Self { directories })
    }
}

impl ProjectLister for StaticProjectLister {
    fn get_directories(&self) -> Vec<Arc<dyn Directory>> {
        self.directories.clone()
    }
}

/// Fixed key-value configuration; unknown keys resolve to an empty string.
#[derive(Debug, Default)]
pub struct StaticConfig {
    values: HashMap<String, String>,
}

impl StaticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigGetter for StaticConfig {
    fn get(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }
}
