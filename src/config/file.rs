//! Settings file discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::toml_schema::SettingsToml;
use crate::error::Result;
use crate::project::ProjectConfig;

pub const SETTINGS_FILE_NAME: &str = "indentsync.toml";

/// Search upward from `start_dir` for a file with the given name.
///
/// If `stop_at_git_root` is true, stops searching when a `.git` directory is found.
/// Returns `None` if the file is not found.
pub fn find_file_upward(
    start_dir: &Path,
    filename: &str,
    stop_at_git_root: bool,
) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let file_path = current.join(filename);
        if file_path.exists() {
            return Some(file_path);
        }

        if stop_at_git_root && current.join(".git").exists() {
            return None;
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Find indentsync.toml by searching upward from the given directory.
///
/// Stops at the first `indentsync.toml` found, or at the git repository root
/// (directory containing `.git`), whichever comes first.
pub fn find_settings_file(start_dir: &Path) -> Option<PathBuf> {
    find_file_upward(start_dir, SETTINGS_FILE_NAME, true)
}

/// Load and parse indentsync.toml from the given path.
pub fn load_settings(path: &Path) -> Result<SettingsToml> {
    let content = fs::read_to_string(path)?;
    let settings = toml::from_str(&content)?;
    debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Load a flat table of already-resolved project configuration entries.
pub fn load_project_config(path: &Path) -> Result<ProjectConfig> {
    let content = fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    debug!(path = %path.display(), entries = config.len(), "loaded project configuration");
    Ok(config)
}
