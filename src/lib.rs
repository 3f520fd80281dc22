//! Resolve per-file editor indentation options from project configuration,
//! and express editor options as project configuration.

pub mod apply;
pub mod config;
pub mod defaults;
pub mod document;
mod error;
pub mod mapping;
pub mod notify;
pub mod options;
mod output;
pub mod project;
pub mod resolve;

pub use apply::{apply_options, ScratchEditor, TextEditor};
pub use config::{
    find_settings_file, generate_init_file, load_project_config, load_settings, EditorSection,
    LayeredSettings, SettingsToml, SETTINGS_FILE_NAME,
};
pub use defaults::{pick_defaults, EditorSettings, SettingsProvider};
pub use document::{resolve_file, Document, DocumentSource, ResolvedFile, Workspace};
pub use error::{Error, LoadError, Result};
pub use mapping::{from_config, normalize_tab_size, to_config};
pub use notify::{LogObserver, Notification, Observer};
pub use options::{EditorOptions, IndentSize, InsertSpaces, TabSize, WorkspaceDefaults};
pub use output::{render_diff, render_options};
pub use project::{ConfigValue, IndentStyle, ProjectConfig};
pub use resolve::{ConfigLoader, Resolver, StaticConfigLoader};
