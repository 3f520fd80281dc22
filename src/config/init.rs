//! Template generation for `indentsync init`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::file::SETTINGS_FILE_NAME;

/// Template indentsync.toml with documentation
pub const SETTINGS_TEMPLATE: &str = r#"# indentsync.toml - editor defaults for indentsync
#
# These settings play the role of the editor's own workspace settings.
# Project configuration (indent_style, indent_size, tab_width) is merged
# on top of them for every file. Uncomment and modify as needed.

[editor]
# Detect indentation from file content. When enabled, none of the
# defaults below are used.
# Default: false
# detect_indentation = false

# Width of a tab character in columns, or "auto".
# tab_size = 4

# Width of one indentation level in columns, or "tabSize" to follow tab_size.
# indent_size = "tabSize"

# Indent with spaces instead of tab characters.
# insert_spaces = true

# Per-language overrides, keyed by language id (the file extension).
# [language.go]
# insert_spaces = false
# tab_size = 8
"#;

/// Generate indentsync.toml in the specified directory (or current directory if None).
///
/// Returns an error if indentsync.toml already exists.
pub fn generate_init_file_in(dir: Option<&Path>) -> io::Result<PathBuf> {
    let path = dir.map_or_else(
        || PathBuf::from(SETTINGS_FILE_NAME),
        |d| d.join(SETTINGS_FILE_NAME),
    );

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{SETTINGS_FILE_NAME} already exists"),
        ));
    }

    fs::write(&path, SETTINGS_TEMPLATE)?;
    Ok(path)
}

/// Generate indentsync.toml in the current directory.
pub fn generate_init_file() -> io::Result<PathBuf> {
    generate_init_file_in(None)
}
