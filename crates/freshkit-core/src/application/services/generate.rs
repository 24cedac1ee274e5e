//! Generate Service - the scaffolder.
//!
//! One workflow, three entry points (artifact kinds, export wrappers,
//! route templates), all funnelling into the same write path:
//! resolve the target folder, append the extension if missing, derive the
//! identifier, render the template, refuse to overwrite, write.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::application::{ApplicationError, ports::Filesystem};
use crate::domain::{
    ArtifactKind, DomainError, RouteTemplate, Workspace,
    naming::identifier_from_file_name,
    routes::ROUTES_FOLDER,
    templates::{ExportKind, render},
};
use crate::error::FreshkitResult;

/// What a successful scaffold produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Absolute path of the new file.
    pub path: PathBuf,
    /// Identifier substituted into the template.
    pub identifier: String,
}

/// Main scaffolding service.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Scaffold a new artifact of the given kind.
    ///
    /// `folder` overrides the kind's default top-level folder; a relative
    /// folder is resolved against the workspace root, an absolute one is
    /// used as-is.
    #[instrument(skip_all, fields(kind = %kind, file = %file_name))]
    pub fn generate(
        &self,
        workspace: &Workspace,
        kind: ArtifactKind,
        folder: Option<&Path>,
        file_name: &str,
    ) -> FreshkitResult<GeneratedFile> {
        self.write_artifact(
            workspace,
            kind.template(),
            kind.extension(),
            kind.default_folder(),
            folder,
            file_name,
        )
    }

    /// Wrap an existing module into an island or section re-export file.
    #[instrument(skip_all, fields(kind = %kind, file = %file_name))]
    pub fn export_as(
        &self,
        workspace: &Workspace,
        kind: ExportKind,
        folder: Option<&Path>,
        file_name: &str,
    ) -> FreshkitResult<GeneratedFile> {
        self.write_artifact(
            workspace,
            kind.template(),
            kind.extension(),
            kind.default_folder(),
            folder,
            file_name,
        )
    }

    /// Scaffold a route file from one of the labelled route bodies.
    #[instrument(skip_all, fields(route = %route.label, file = %file_name))]
    pub fn scaffold_route(
        &self,
        workspace: &Workspace,
        route: &RouteTemplate,
        folder: Option<&Path>,
        file_name: &str,
    ) -> FreshkitResult<GeneratedFile> {
        self.write_artifact(workspace, route.body, ".tsx", ROUTES_FOLDER, folder, file_name)
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    fn write_artifact(
        &self,
        workspace: &Workspace,
        template: &str,
        extension: &str,
        default_folder: &str,
        folder: Option<&Path>,
        file_name: &str,
    ) -> FreshkitResult<GeneratedFile> {
        if !self.filesystem.exists(workspace.root()) {
            return Err(ApplicationError::WorkspaceNotFound {
                path: workspace.root().to_path_buf(),
            }
            .into());
        }

        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(DomainError::InvalidFileName {
                name: file_name.to_string(),
                reason: "name is empty".into(),
            }
            .into());
        }

        // Identifier derives from the raw entered name; the extension is
        // appended afterwards and never reaches the identifier.
        let identifier = identifier_from_file_name(file_name);
        let file_name = ensure_extension(file_name, extension);

        let folder = match folder {
            Some(folder) => workspace.root().join(folder),
            None => workspace.root().join(default_folder),
        };
        let path = folder.join(&file_name);

        if self.filesystem.exists(&path) {
            return Err(ApplicationError::FileExists { path }.into());
        }

        let content = render(template, &identifier);

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, &content)?;

        info!(path = %path.display(), identifier, "artifact created");
        Ok(GeneratedFile { path, identifier })
    }
}

/// Append `extension` unless the name already ends with it.
fn ensure_extension(file_name: &str, extension: &str) -> String {
    if file_name.ends_with(extension) {
        file_name.to_string()
    } else {
        format!("{file_name}{extension}")
    }
}
