//! Host editor settings for indentsync.
//!
//! This module provides:
//! - Loading editor settings from `indentsync.toml`
//! - Settings file discovery (search upward from current directory)
//! - Merging CLI args, per-language overrides, and `[editor]` settings
//! - Template generation with `indentsync init`

mod file;
mod init;
mod merge;
mod toml_schema;

pub use file::{
    find_file_upward, find_settings_file, load_project_config, load_settings, SETTINGS_FILE_NAME,
};
pub use init::{generate_init_file, generate_init_file_in, SETTINGS_TEMPLATE};
pub use merge::{layer_editor_section, LayeredSettings};
pub use toml_schema::{EditorSection, SettingsToml};
