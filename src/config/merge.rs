//! Settings merging
//!
//! Priority: CLI args > `[language.<id>]` > `[editor]`

use crate::defaults::SettingsProvider;

use super::toml_schema::{EditorSection, SettingsToml};

/// Fill every unset field of `upper` from `lower`.
pub fn layer_editor_section(upper: &EditorSection, lower: &EditorSection) -> EditorSection {
    EditorSection {
        detect_indentation: upper.detect_indentation.or(lower.detect_indentation),
        tab_size: upper.tab_size.or(lower.tab_size),
        indent_size: upper.indent_size.or(lower.indent_size),
        insert_spaces: upper.insert_spaces.or(lower.insert_spaces),
    }
}

/// Settings file plus command-line overrides.
#[derive(Debug, Default, Clone)]
pub struct LayeredSettings {
    file: SettingsToml,
    cli: EditorSection,
}

impl LayeredSettings {
    pub fn new(file: SettingsToml, cli: EditorSection) -> Self {
        Self { file, cli }
    }
}

impl SettingsProvider for LayeredSettings {
    type Scope = EditorSection;

    fn scope(&self, language_id: &str) -> EditorSection {
        let base = match self.file.language.get(language_id) {
            Some(language) => layer_editor_section(language, &self.file.editor),
            None => self.file.editor.clone(),
        };
        layer_editor_section(&self.cli, &base)
    }
}
