//! TOML schema definitions for indentsync.toml

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::defaults::{EditorSettings, SettingsProvider};
use crate::options::{IndentSize, TabSize};

/// Root structure for indentsync.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SettingsToml {
    /// Workspace-wide editor settings
    #[serde(default)]
    pub editor: EditorSection,

    /// Per-language overrides, keyed by language id
    #[serde(default)]
    pub language: BTreeMap<String, EditorSection>,
}

/// `[editor]` and `[language.<id>]` sections
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSection {
    /// Detect indentation from file content (default: false)
    pub detect_indentation: Option<bool>,

    /// Tab width in columns, or "auto"
    pub tab_size: Option<TabSize>,

    /// Indent width in columns, or "tabSize"
    pub indent_size: Option<IndentSize>,

    /// Indent with spaces instead of tabs
    pub insert_spaces: Option<bool>,
}

impl EditorSettings for EditorSection {
    fn detect_indentation(&self) -> bool {
        self.detect_indentation.unwrap_or(false)
    }

    fn tab_size(&self) -> Option<TabSize> {
        self.tab_size
    }

    fn indent_size(&self) -> Option<IndentSize> {
        self.indent_size
    }

    fn insert_spaces(&self) -> Option<bool> {
        self.insert_spaces
    }
}

/// A bare section applies to every language.
impl SettingsProvider for EditorSection {
    type Scope = EditorSection;

    fn scope(&self, _language_id: &str) -> EditorSection {
        self.clone()
    }
}
