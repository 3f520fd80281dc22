//! Editor-side indentation options and their sentinel values.
//!
//! On the wire every field is a number, a boolean or one of the keywords
//! `"auto"` / `"tabSize"`. Inside the crate they are plain enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::project::ConfigValue;

/// Width used for an auto-detected tab size when a concrete number is needed.
pub const AUTO_TAB_SIZE: u32 = 4;

const AUTO: &str = "auto";
const MIRROR_TAB_SIZE: &str = "tabSize";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigValue", into = "ConfigValue")]
pub enum TabSize {
    Columns(u32),
    /// Let the editor detect the tab size from file content.
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigValue", into = "ConfigValue")]
pub enum IndentSize {
    Columns(u32),
    /// Follow whatever the tab size resolves to.
    MirrorTabSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigValue", into = "ConfigValue")]
pub enum InsertSpaces {
    Fixed(bool),
    Auto,
}

fn columns(field: &'static str, value: &ConfigValue) -> Result<u32, Error> {
    let invalid = || Error::InvalidOption {
        field,
        value: value.to_string(),
    };
    match value {
        ConfigValue::Number(n) => u32::try_from(*n).map_err(|_| invalid()),
        ConfigValue::Text(s) => s.trim().parse().map_err(|_| invalid()),
        ConfigValue::Bool(_) => Err(invalid()),
    }
}

impl TryFrom<ConfigValue> for TabSize {
    type Error = Error;

    fn try_from(value: ConfigValue) -> Result<Self, Error> {
        match &value {
            ConfigValue::Text(s) if s == AUTO => Ok(TabSize::Auto),
            _ => columns("tabSize", &value).map(TabSize::Columns),
        }
    }
}

impl From<TabSize> for ConfigValue {
    fn from(size: TabSize) -> Self {
        match size {
            TabSize::Columns(n) => n.into(),
            TabSize::Auto => AUTO.into(),
        }
    }
}

impl TryFrom<ConfigValue> for IndentSize {
    type Error = Error;

    fn try_from(value: ConfigValue) -> Result<Self, Error> {
        match &value {
            ConfigValue::Text(s) if s == MIRROR_TAB_SIZE => Ok(IndentSize::MirrorTabSize),
            _ => columns("indentSize", &value).map(IndentSize::Columns),
        }
    }
}

impl From<IndentSize> for ConfigValue {
    fn from(size: IndentSize) -> Self {
        match size {
            IndentSize::Columns(n) => n.into(),
            IndentSize::MirrorTabSize => MIRROR_TAB_SIZE.into(),
        }
    }
}

impl TryFrom<ConfigValue> for InsertSpaces {
    type Error = Error;

    fn try_from(value: ConfigValue) -> Result<Self, Error> {
        match value {
            ConfigValue::Bool(b) => Ok(InsertSpaces::Fixed(b)),
            ConfigValue::Text(s) if s == AUTO => Ok(InsertSpaces::Auto),
            ConfigValue::Text(s) if s == "true" || s == "false" => {
                Ok(InsertSpaces::Fixed(s == "true"))
            }
            other => Err(Error::InvalidOption {
                field: "insertSpaces",
                value: other.to_string(),
            }),
        }
    }
}

impl From<InsertSpaces> for ConfigValue {
    fn from(insert: InsertSpaces) -> Self {
        match insert {
            InsertSpaces::Fixed(b) => b.into(),
            InsertSpaces::Auto => AUTO.into(),
        }
    }
}

macro_rules! text_conversions {
    ($($ty:ty),*) => {$(
        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Error> {
                Self::try_from(ConfigValue::Text(s.trim().to_string()))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&ConfigValue::from(*self), f)
            }
        }
    )*};
}

text_conversions!(TabSize, IndentSize, InsertSpaces);

/// Live indentation options of an editing surface.
///
/// `None` means "inherit the editor's own default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_size: Option<TabSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent_size: Option<IndentSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_spaces: Option<InsertSpaces>,
}

impl EditorOptions {
    pub fn is_empty(&self) -> bool {
        self.tab_size.is_none() && self.indent_size.is_none() && self.insert_spaces.is_none()
    }
}

/// Baseline editor settings of the workspace, built fresh for every resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkspaceDefaults {
    pub tab_size: Option<TabSize>,
    pub indent_size: Option<IndentSize>,
    pub insert_spaces: Option<InsertSpaces>,
}

impl From<WorkspaceDefaults> for EditorOptions {
    fn from(defaults: WorkspaceDefaults) -> Self {
        EditorOptions {
            tab_size: defaults.tab_size,
            indent_size: defaults.indent_size,
            insert_spaces: defaults.insert_spaces,
        }
    }
}
