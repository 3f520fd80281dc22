//! Translation between project indentation config and editor options.
//!
//! Both directions are pure and total. `"tab"` in the project config is a
//! cross-reference to the tab width, so it is dereferenced in a second pass
//! after the first pass has picked a candidate value.

use crate::options::{
    EditorOptions, IndentSize, InsertSpaces, TabSize, WorkspaceDefaults, AUTO_TAB_SIZE,
};
use crate::project::{IndentStyle, ProjectConfig, Width, INDENT_SIZE, INDENT_STYLE, TAB_WIDTH};

/// A width while merging, before it is narrowed to an editor field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Candidate {
    Columns(u32),
    Tab,
    Unset,
    Auto,
    MirrorTabSize,
}

impl From<Width> for Candidate {
    fn from(width: Width) -> Self {
        match width {
            Width::Columns(n) => Candidate::Columns(n),
            Width::Tab => Candidate::Tab,
            Width::Unset => Candidate::Unset,
        }
    }
}

impl From<TabSize> for Candidate {
    fn from(size: TabSize) -> Self {
        match size {
            TabSize::Columns(n) => Candidate::Columns(n),
            TabSize::Auto => Candidate::Auto,
        }
    }
}

impl From<IndentSize> for Candidate {
    fn from(size: IndentSize) -> Self {
        match size {
            IndentSize::Columns(n) => Candidate::Columns(n),
            IndentSize::MirrorTabSize => Candidate::MirrorTabSize,
        }
    }
}

impl Candidate {
    fn into_tab_size(self) -> Option<TabSize> {
        match self {
            Candidate::Columns(n) => Some(TabSize::Columns(n)),
            Candidate::Auto => Some(TabSize::Auto),
            // An unresolvable "tab" has no editor representation.
            Candidate::Tab | Candidate::Unset | Candidate::MirrorTabSize => None,
        }
    }

    fn into_indent_size(self) -> Option<IndentSize> {
        match self {
            Candidate::Columns(n) => Some(IndentSize::Columns(n)),
            Candidate::Tab | Candidate::MirrorTabSize => Some(IndentSize::MirrorTabSize),
            Candidate::Unset | Candidate::Auto => None,
        }
    }
}

/// Merge project configuration with workspace defaults into editor options.
///
/// Fields without actionable information are left `None` so the editor keeps
/// its own default. `defaults.insert_spaces` is never consulted: spacing is
/// only forced when the project config says something about it.
pub fn from_config(config: &ProjectConfig, defaults: &WorkspaceDefaults) -> EditorOptions {
    let style = config.indent_style();
    let tab_width = config.width(TAB_WIDTH);
    let indent_size = config.width(INDENT_SIZE);

    let mut tab_size = match style {
        Some(IndentStyle::Tab) => tab_width.or(indent_size),
        _ => tab_width,
    }
    .map(Candidate::from)
    .or(defaults.tab_size.map(Candidate::from));

    let mut indent = match style {
        Some(IndentStyle::Tab) => {
            Some(indent_size.map_or(Candidate::MirrorTabSize, Candidate::from))
        }
        _ => indent_size.map(Candidate::from),
    }
    .or(defaults.indent_size.map(Candidate::from));

    if tab_size == Some(Candidate::Tab) {
        tab_size = tab_width.map(Candidate::from);
    }
    if indent == Some(Candidate::Tab) {
        indent = Some(Candidate::MirrorTabSize);
    }

    let insert_spaces = match (style, indent_size) {
        (Some(style), _) => Some(InsertSpaces::Fixed(style == IndentStyle::Space)),
        (None, Some(Width::Tab)) => Some(InsertSpaces::Fixed(false)),
        (None, _) => None,
    };

    EditorOptions {
        tab_size: tab_size.and_then(Candidate::into_tab_size),
        indent_size: indent.and_then(Candidate::into_indent_size),
        insert_spaces,
    }
}

/// Express editor options as a project configuration fragment.
///
/// Without a known spacing mode there is nothing to say and the fragment is
/// empty.
pub fn to_config(options: &EditorOptions) -> ProjectConfig {
    let mut fragment = ProjectConfig::new();

    let (style, width_key) = match options.insert_spaces {
        Some(InsertSpaces::Fixed(true)) => (IndentStyle::Space, INDENT_SIZE),
        Some(InsertSpaces::Fixed(false) | InsertSpaces::Auto) => (IndentStyle::Tab, TAB_WIDTH),
        None => return fragment,
    };

    fragment.insert(INDENT_STYLE, style.as_str());
    if let Some(size) = options.tab_size.filter(|size| *size != TabSize::Columns(0)) {
        fragment.insert(width_key, normalize_tab_size(size));
    }
    fragment
}

/// Concrete column count for a tab size; `auto` becomes [`AUTO_TAB_SIZE`].
pub fn normalize_tab_size(size: TabSize) -> u32 {
    match size {
        TabSize::Columns(n) => n,
        TabSize::Auto => AUTO_TAB_SIZE,
    }
}
