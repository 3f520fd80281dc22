//! Documents and the paths used to look up their project configuration.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Language ids of editing surfaces that have no file behind them.
const NON_FILE_LANGUAGES: &[&str] = &["Log"];

pub const DEFAULT_LANGUAGE: &str = "plaintext";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Saved to disk at this absolute path.
    File(PathBuf),
    /// In-memory buffer that has never been saved.
    Untitled { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub language_id: String,
    pub source: DocumentSource,
}

impl Document {
    pub fn file(path: impl Into<PathBuf>, language_id: impl Into<String>) -> Self {
        Self {
            language_id: language_id.into(),
            source: DocumentSource::File(path.into()),
        }
    }

    pub fn untitled(name: impl Into<String>, language_id: impl Into<String>) -> Self {
        Self {
            language_id: language_id.into(),
            source: DocumentSource::Untitled { name: name.into() },
        }
    }

    /// A file document whose language id is its extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let language_id = language_for_path(&path);
        Self::file(path, language_id)
    }
}

/// Extension-based language id, `plaintext` when there is none.
pub fn language_for_path(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Workspace folders known to the host, in order.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    roots: Vec<PathBuf>,
}

impl Workspace {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn first_root(&self) -> Option<&Path> {
        self.roots.first().map(PathBuf::as_path)
    }

    /// Path relative to the first root containing it, or the path itself.
    pub fn relative_path(&self, path: &Path) -> PathBuf {
        self.roots
            .iter()
            .find_map(|root| path.strip_prefix(root).ok())
            .map_or_else(|| path.to_path_buf(), Path::to_path_buf)
    }
}

/// Where to look up project configuration for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub file_name: PathBuf,
    pub relative_path: PathBuf,
}

/// Resolve the lookup path for `doc`.
///
/// Unsaved buffers get a hypothetical path under the first workspace root.
/// Returns `None` when there is nothing to key configuration on.
pub fn resolve_file(doc: &Document, workspace: &Workspace) -> Option<ResolvedFile> {
    if NON_FILE_LANGUAGES.contains(&doc.language_id.as_str()) {
        debug!(language = %doc.language_id, "document is not a file");
        return None;
    }

    match &doc.source {
        DocumentSource::File(path) => Some(ResolvedFile {
            file_name: path.clone(),
            relative_path: workspace.relative_path(path),
        }),
        DocumentSource::Untitled { name } => {
            let Some(root) = workspace.first_root() else {
                debug!(%name, "untitled document without a workspace root");
                return None;
            };
            Some(ResolvedFile {
                file_name: root.join(name),
                relative_path: PathBuf::from(name),
            })
        }
    }
}
