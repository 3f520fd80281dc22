//! Workspace default indentation settings.

use tracing::trace;

use crate::options::{IndentSize, InsertSpaces, TabSize, WorkspaceDefaults};

/// The editor settings this crate reads from the host, typed.
pub trait EditorSettings {
    /// Whether the host detects indentation from file content.
    fn detect_indentation(&self) -> bool;
    fn tab_size(&self) -> Option<TabSize>;
    fn indent_size(&self) -> Option<IndentSize>;
    fn insert_spaces(&self) -> Option<bool>;
}

/// Hands out the editor settings that apply to a given language.
pub trait SettingsProvider {
    type Scope: EditorSettings;

    fn scope(&self, language_id: &str) -> Self::Scope;
}

/// Baseline settings to merge under the project configuration.
///
/// With indentation detection on, a static default would fight the
/// per-file detection, so nothing is returned.
pub fn pick_defaults<S: EditorSettings + ?Sized>(settings: &S) -> WorkspaceDefaults {
    if settings.detect_indentation() {
        trace!("indentation detection enabled, no workspace defaults");
        return WorkspaceDefaults::default();
    }

    WorkspaceDefaults {
        tab_size: settings.tab_size(),
        indent_size: settings.indent_size(),
        insert_spaces: settings.insert_spaces().map(InsertSpaces::Fixed),
    }
}
