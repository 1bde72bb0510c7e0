//! Diagnostic codes recorded on a project state.
//!
//! Codes are colon-delimited string literals; hosts match on them to
//! present project problems, so the formats are part of the public
//! contract.

/// Neither preset source yielded a single preset.
pub const NO_PRESET_AFTER_LOAD: &str = "no.preset.after.load";

/// Seeding the shared preset file failed (e.g. read-only filesystem).
pub fn cannot_create_preset(file_name: &str) -> String {
    format!("cannot.create.preset:{file_name}")
}

/// A preset file exists but could not be read or parsed.
pub fn cannot_read_file(file_name: &str, description: &str) -> String {
    format!("cannot.read.file:{file_name}:{description}")
}
