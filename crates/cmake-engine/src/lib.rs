//! Workspace scan orchestration for the CMake build provider
//!
//! Sits above `cmake-fs` and `cmake-presets`, fanning the scan out over
//! every open project directory and owning the resulting state map:
//!
//! ```text
//!        host (editor / CLI)
//!               |
//!         cmake-engine
//!               |
//!      +--------+--------+
//!      |                 |
//!  cmake-fs       cmake-presets
//! ```

pub mod builder;
pub mod config;
pub mod engine;

pub use builder::{BuildDescription, BuilderProvider};
pub use config::{CONFIG_KEY_DEFAULT_PRESET_BODY, DEFAULT_PRESET_BODY};
pub use engine::IntegrationEngine;
