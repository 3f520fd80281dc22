//! Writing resolved options to the active editor.

use tracing::debug;

use crate::defaults::EditorSettings;
use crate::notify::{Notification, Observer};
use crate::options::{EditorOptions, IndentSize, TabSize};

/// An editing surface with live, replaceable indentation options.
pub trait TextEditor {
    fn options(&self) -> EditorOptions;
    fn set_options(&mut self, options: EditorOptions);
}

/// In-memory editing surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScratchEditor {
    options: EditorOptions,
}

impl ScratchEditor {
    pub fn new(options: EditorOptions) -> Self {
        Self { options }
    }
}

impl TextEditor for ScratchEditor {
    fn options(&self) -> EditorOptions {
        self.options
    }

    fn set_options(&mut self, options: EditorOptions) {
        self.options = options;
    }
}

/// Replace the live options of `editor` with `options`.
///
/// When the host mirrors indent size from tab size and only a numeric tab
/// size is being set, the editor's current indent size is carried over so it
/// is not reset. Returns the options that were written, or `None` when there
/// is no active editor.
pub fn apply_options<E, S, O>(
    mut options: EditorOptions,
    editor: Option<&mut E>,
    settings: &S,
    observer: &O,
) -> Option<EditorOptions>
where
    E: TextEditor + ?Sized,
    S: EditorSettings + ?Sized,
    O: Observer + ?Sized,
{
    let Some(editor) = editor else {
        observer.notify(Notification::NoActiveEditor);
        return None;
    };

    if settings.indent_size() == Some(IndentSize::MirrorTabSize)
        && options.indent_size.is_none()
        && matches!(options.tab_size, Some(TabSize::Columns(_)))
    {
        options.indent_size = editor.options().indent_size;
        debug!(indent_size = ?options.indent_size, "keeping current indent size");
    }

    editor.set_options(options);
    observer.notify(Notification::Applied { options: &options });
    Some(options)
}
