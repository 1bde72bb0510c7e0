//! Host configuration keys and fallback values

/// Configuration key holding the body seeded into a project's shared
/// preset file when the project has no preset file at all.
pub const CONFIG_KEY_DEFAULT_PRESET_BODY: &str = "cmake-build-provider.default-preset-body";

/// Fallback shared-preset document for hosts without a configuration
/// store of their own.
pub const DEFAULT_PRESET_BODY: &str = r#"{
  "version": 4,
  "configurePresets": [
    {
      "name": "default",
      "displayName": "Default Config",
      "binaryDir": "${sourceDir}/build/default"
    }
  ]
}
"#;
