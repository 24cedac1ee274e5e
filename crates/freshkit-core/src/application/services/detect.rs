//! Project detection.

use std::path::Path;

use tracing::debug;

use crate::application::ports::Filesystem;
use crate::domain::Workspace;

/// Reports whether a directory is a Fresh project.
///
/// The check is a single existence probe for the generated marker file.
/// Any filesystem error while probing reads as "not a Fresh project" -
/// the caller only ever sees a boolean.
pub struct ProjectDetector {
    filesystem: Box<dyn Filesystem>,
}

impl ProjectDetector {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// `true` when `root` contains the project marker directly under it.
    ///
    /// `None` (no workspace open) is always `false`.
    pub fn is_fresh_project(&self, root: Option<&Path>) -> bool {
        let Some(root) = root else {
            return false;
        };

        let marker = Workspace::new(root).marker_path();
        let found = self.filesystem.exists(&marker);
        debug!(marker = %marker.display(), found, "project marker probed");
        found
    }
}
