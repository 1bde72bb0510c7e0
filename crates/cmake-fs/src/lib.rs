//! Host filesystem capabilities for the CMake build provider
//!
//! Defines the directory and file contracts the scanning core consumes,
//! the fixed project file names, and a local-filesystem host implementation.

pub mod capability;
pub mod constants;
pub mod error;
pub mod local;

pub use capability::{ConfigGetter, Directory, FileHandle, ProjectLister};
pub use constants::ProjectFile;
pub use error::{Error, Result};
pub use local::{LocalDirectory, LocalFile};
