//! Project-level indentation configuration, as handed over by a config loader.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const INDENT_STYLE: &str = "indent_style";
pub const INDENT_SIZE: &str = "indent_size";
pub const TAB_WIDTH: &str = "tab_width";

/// A loosely typed configuration value: string, number or boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{b}"),
            ConfigValue::Number(n) => write!(f, "{n}"),
            ConfigValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Number(n)
    }
}

impl From<u32> for ConfigValue {
    fn from(n: u32) -> Self {
        ConfigValue::Number(n.into())
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl ConfigValue {
    /// Parse a command-line style value: integers and booleans are typed,
    /// everything else stays text.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Ok(n) = raw.parse::<i64>() {
            return ConfigValue::Number(n);
        }
        match raw {
            "true" => ConfigValue::Bool(true),
            "false" => ConfigValue::Bool(false),
            _ => ConfigValue::Text(raw.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Tab,
    Space,
}

impl IndentStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            IndentStyle::Tab => "tab",
            IndentStyle::Space => "space",
        }
    }
}

/// A width-like entry (`indent_size`, `tab_width`) after sentinel decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Columns(u32),
    /// `"tab"`: use the tab width.
    Tab,
    /// `"unset"`: explicitly drop the setting.
    Unset,
}

/// Parsed key/value project configuration for a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectConfig(BTreeMap<String, ConfigValue>);

impl ProjectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.0.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `indent_style`, if it names a known style.
    pub fn indent_style(&self) -> Option<IndentStyle> {
        match self.get(INDENT_STYLE)? {
            ConfigValue::Text(s) if s.eq_ignore_ascii_case("tab") => Some(IndentStyle::Tab),
            ConfigValue::Text(s) if s.eq_ignore_ascii_case("space") => Some(IndentStyle::Space),
            other => {
                debug!(value = %other, "ignoring unrecognized indent_style");
                None
            }
        }
    }

    /// Decode a width entry. Values that are neither a column count nor a
    /// known sentinel count as absent.
    pub fn width(&self, key: &str) -> Option<Width> {
        let value = self.get(key)?;
        let width = match value {
            ConfigValue::Number(n) => u32::try_from(*n).ok().map(Width::Columns),
            ConfigValue::Text(s) if s.eq_ignore_ascii_case("tab") => Some(Width::Tab),
            ConfigValue::Text(s) if s.eq_ignore_ascii_case("unset") => Some(Width::Unset),
            ConfigValue::Text(s) => s.trim().parse().ok().map(Width::Columns),
            ConfigValue::Bool(_) => None,
        };
        if width.is_none() {
            debug!(key, value = %value, "ignoring unusable width");
        }
        width
    }

    /// Rewrite `indent_size = "tab"` to the value of `tab_width`.
    ///
    /// Without a `tab_width` the entry is removed.
    pub fn resolve_tab_reference(&mut self) {
        if self.width(INDENT_SIZE) != Some(Width::Tab) {
            return;
        }
        match self.get(TAB_WIDTH).cloned() {
            Some(tab_width) => {
                self.insert(INDENT_SIZE, tab_width);
            }
            None => {
                self.remove(INDENT_SIZE);
            }
        }
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for ProjectConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.0 {
            writeln!(f, "{key} = {value}")?;
        }
        Ok(())
    }
}
