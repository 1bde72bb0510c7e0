//! Local filesystem host backed by `tokio::fs`

use crate::capability::{Directory, FileHandle};
use crate::{Error, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File inside a [`LocalDirectory`].
#[derive(Debug)]
pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FileHandle for LocalFile {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    async fn read(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::io(&self.path, e))
    }

    async fn write(&self, text: &str) -> Result<()> {
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "writing file");
        tokio::fs::write(&self.path, text)
            .await
            .map_err(|e| Error::io(&self.path, e))
    }
}

/// Project root on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalDirectory {
    root: PathBuf,
}

impl LocalDirectory {
    /// Wrap `root` as a project directory. Callers pass an absolute path;
    /// the engine keys its state map by the string returned from
    /// [`Directory::get_path`].
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Directory for LocalDirectory {
    fn get_path(&self) -> String {
        self.root.to_string_lossy().into_owned()
    }

    fn get_file(&self, relative_path: &str) -> Arc<dyn FileHandle> {
        Arc::new(LocalFile::new(self.root.join(relative_path)))
    }
}
