//! Per-document option resolution.

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::defaults::{pick_defaults, SettingsProvider};
use crate::document::{resolve_file, Document, Workspace};
use crate::error::{Error, LoadError, Result};
use crate::mapping::from_config;
use crate::notify::{Notification, Observer};
use crate::options::EditorOptions;
use crate::project::ProjectConfig;

/// Finds and parses the project configuration that applies to a path.
///
/// An empty config means nothing applies. Failures are reported as-is and
/// are never retried here.
#[async_trait]
pub trait ConfigLoader: Send + Sync {
    async fn load(&self, path: &Path) -> Result<ProjectConfig, LoadError>;
}

/// Serves the same configuration for every path.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigLoader {
    config: ProjectConfig,
}

impl StaticConfigLoader {
    pub fn new(config: ProjectConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ConfigLoader for StaticConfigLoader {
    async fn load(&self, _path: &Path) -> Result<ProjectConfig, LoadError> {
        Ok(self.config.clone())
    }
}

/// Resolves editor options for documents of one workspace.
///
/// Holds no state between calls; every resolution reloads its config.
pub struct Resolver<'a, L, S> {
    workspace: &'a Workspace,
    loader: &'a L,
    settings: &'a S,
}

impl<'a, L, S> Resolver<'a, L, S>
where
    L: ConfigLoader,
    S: SettingsProvider,
{
    pub fn new(workspace: &'a Workspace, loader: &'a L, settings: &'a S) -> Self {
        Self {
            workspace,
            loader,
            settings,
        }
    }

    /// Resolve the options `doc` should be edited with.
    ///
    /// An empty result means "keep the editor's own defaults".
    pub async fn resolve_options<O>(&self, doc: &Document, observer: &O) -> Result<EditorOptions>
    where
        O: Observer + ?Sized,
    {
        let Some(file) = resolve_file(doc, self.workspace) else {
            debug!(source = ?doc.source, "no file to resolve configuration for");
            return Ok(EditorOptions::default());
        };

        observer.notify(Notification::BeforeResolve {
            relative_path: &file.relative_path,
        });

        let mut config = self
            .loader
            .load(&file.file_name)
            .await
            .map_err(|source| Error::Load {
                path: file.file_name.clone(),
                source,
            })?;
        let was_empty = config.is_empty();
        config.resolve_tab_reference();

        if was_empty {
            observer.notify(Notification::EmptyConfig {
                relative_path: &file.relative_path,
            });
            return Ok(EditorOptions::default());
        }

        let defaults = pick_defaults(&self.settings.scope(&doc.language_id));
        let options = from_config(&config, &defaults);
        debug!(path = %file.relative_path.display(), ?options, "resolved editor options");
        Ok(options)
    }
}
