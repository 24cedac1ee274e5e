//! Implementation of the `freshkit export` command.
//!
//! Produces an island or section wrapper that re-exports an existing
//! module, so a component written elsewhere can be published under the
//! framework's conventional folders.

use tracing::{debug, instrument};

use freshkit_adapters::LocalFilesystem;
use freshkit_core::application::services::GenerateService;
use freshkit_core::domain::{Workspace, templates::ExportKind};

use crate::{
    cli::{ExportArgs, GlobalArgs},
    commands::resolve_file_name,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `freshkit export` command.
#[instrument(skip_all, fields(kind = ?args.kind))]
pub fn execute(args: ExportArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let kind = ExportKind::from(args.kind);
    let workspace = Workspace::new(global.workspace_root()?);

    let default_name = format!("index{}", kind.extension());
    let Some(file_name) = resolve_file_name(args.name, &default_name)? else {
        debug!("name prompt cancelled");
        return Ok(());
    };

    let service = GenerateService::new(Box::new(LocalFilesystem::new()));
    let generated = service.export_as(&workspace, kind, args.folder.as_deref(), &file_name)?;

    output.success(&format!(
        "{} wrapper created: {}",
        generated.identifier,
        generated.path.display()
    ))?;
    Ok(())
}
