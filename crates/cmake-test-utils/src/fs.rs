//! In-memory file and directory capability fixtures

use async_trait::async_trait;
use cmake_fs::{Directory, Error, FileHandle, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug)]
struct FileBody {
    exists: bool,
    content: Option<String>,
}

/// Scripted in-memory file handle.
///
/// Covers the failure modes a host filesystem exhibits: absent, readable,
/// unreadable, and write-rejecting files. A successful `write` makes the
/// file exist and readable, and its body is captured for assertions.
#[derive(Debug)]
pub struct MemoryFile {
    read_error: Option<String>,
    write_error: Option<String>,
    body: Mutex<FileBody>,
    written: Mutex<Option<String>>,
}

impl MemoryFile {
    fn make(
        exists: bool,
        content: Option<String>,
        read_error: Option<String>,
        write_error: Option<String>,
    ) -> Arc<Self> {
        Arc::new(Self {
            read_error,
            write_error,
            body: Mutex::new(FileBody { exists, content }),
            written: Mutex::new(None),
        })
    }

    /// Existing, readable, writable file with the given body.
    pub fn with_content(content: impl Into<String>) -> Arc<Self> {
        Self::make(true, Some(content.into()), None, None)
    }

    /// Absent file on a writable filesystem.
    pub fn absent() -> Arc<Self> {
        Self::make(false, None, None, None)
    }

    /// Absent file on a filesystem that rejects writes with `message`.
    pub fn uncreatable(message: impl Into<String>) -> Arc<Self> {
        Self::make(false, None, None, Some(message.into()))
    }

    /// Existing file whose reads reject with `message`.
    pub fn unreadable(message: impl Into<String>) -> Arc<Self> {
        Self::make(true, None, Some(message.into()), None)
    }

    /// Existing, readable file whose writes reject with `message`.
    pub fn read_only(content: impl Into<String>, message: impl Into<String>) -> Arc<Self> {
        Self::make(true, Some(content.into()), None, Some(message.into()))
    }

    /// Body captured by the last successful `write`, if any.
    pub fn written(&self) -> Option<String> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileHandle for MemoryFile {
    fn exists(&self) -> bool {
        self.body.lock().unwrap().exists
    }

    async fn read(&self) -> Result<String> {
        if let Some(message) = &self.read_error {
            return Err(Error::host(message.clone()));
        }
        self.body
            .lock()
            .unwrap()
            .content
            .clone()
            .ok_or_else(|| Error::host("no such file"))
    }

    async fn write(&self, text: &str) -> Result<()> {
        if let Some(message) = &self.write_error {
            return Err(Error::host(message.clone()));
        }
        let mut body = self.body.lock().unwrap();
        body.exists = true;
        body.content = Some(text.to_string());
        *self.written.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

/// In-memory project directory holding scripted files.
///
/// Unregistered relative paths resolve to a cached absent-but-writable
/// file, so repeated `get_file` calls observe one handle per path — the
/// idempotence the [`Directory`] contract requires.
#[derive(Debug)]
pub struct MemoryDirectory {
    path: String,
    files: Mutex<HashMap<String, Arc<MemoryFile>>>,
}

impl MemoryDirectory {
    pub fn new(path: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            path: path.into(),
            files: Mutex::new(HashMap::new()),
        })
    }

    /// Register a scripted file under `relative_path`.
    pub fn insert(&self, relative_path: impl Into<String>, file: Arc<MemoryFile>) {
        self.files.lock().unwrap().insert(relative_path.into(), file);
    }

    /// The concrete fixture behind `relative_path`, creating the default
    /// absent file on first access. Useful for asserting captured writes.
    pub fn file(&self, relative_path: &str) -> Arc<MemoryFile> {
        self.files
            .lock()
            .unwrap()
            .entry(relative_path.to_string())
            .or_insert_with(MemoryFile::absent)
            .clone()
    }
}

impl Directory for MemoryDirectory {
    fn get_path(&self) -> String {
        self.path.clone()
    }

    fn get_file(&self, relative_path: &str) -> Arc<dyn FileHandle> {
        self.file(relative_path)
    }
}
