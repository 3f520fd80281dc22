//! Lifecycle notifications emitted while resolving and applying options.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::options::EditorOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification<'a> {
    /// About to load project configuration for this path.
    BeforeResolve { relative_path: &'a Path },
    /// No project configuration applies; editor defaults stay in effect.
    EmptyConfig { relative_path: &'a Path },
    /// Options were to be applied but no editor is active.
    NoActiveEditor,
    /// Options were written to the active editor.
    Applied { options: &'a EditorOptions },
}

/// Receives notifications. Return values are not part of the contract, and
/// an observer cannot stop resolution.
pub trait Observer {
    fn notify(&self, notification: Notification<'_>);
}

/// Forwards every notification to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn notify(&self, notification: Notification<'_>) {
        match notification {
            Notification::BeforeResolve { relative_path } => {
                debug!(path = %relative_path.display(), "resolving project configuration");
            }
            Notification::EmptyConfig { relative_path } => {
                info!(path = %relative_path.display(), "no project configuration applies");
            }
            Notification::NoActiveEditor => warn!("no active editor to apply options to"),
            Notification::Applied { options } => debug!(?options, "applied editor options"),
        }
    }
}
