//! Capability traits supplied by the hosting environment
//!
//! The scanning core never touches the filesystem directly; it consumes
//! these contracts. The host decides what backs them — the local
//! filesystem, an editor's project model, or in-memory fixtures.

use crate::Result;
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

/// A single file inside a project directory.
#[async_trait]
pub trait FileHandle: Debug + Send + Sync {
    /// Cheap, non-blocking existence probe.
    fn exists(&self) -> bool;

    /// Read the whole file as text. Rejects when unreadable or absent.
    async fn read(&self) -> Result<String>;

    /// Write `text`, creating the file when the filesystem allows it.
    async fn write(&self, text: &str) -> Result<()>;
}

/// One open project root.
pub trait Directory: Debug + Send + Sync {
    /// Absolute path of the project root.
    fn get_path(&self) -> String;

    /// Handle for `relative_path` inside this directory.
    ///
    /// Idempotent within a scan: the same path yields an equivalent handle.
    fn get_file(&self, relative_path: &str) -> Arc<dyn FileHandle>;
}

/// Lists the project roots currently open in the host.
pub trait ProjectLister: Debug + Send + Sync {
    fn get_directories(&self) -> Vec<Arc<dyn Directory>>;
}

/// Key-value configuration lookup supplied by the host.
pub trait ConfigGetter: Debug + Send + Sync {
    /// Raw configured value for `key`; empty string when unset.
    fn get(&self, key: &str) -> String;
}
