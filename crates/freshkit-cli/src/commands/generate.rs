//! Implementation of the `freshkit generate` command.

use tracing::{debug, instrument};

use freshkit_adapters::LocalFilesystem;
use freshkit_core::application::services::GenerateService;
use freshkit_core::domain::{ArtifactKind, Workspace};

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    commands::resolve_file_name,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `freshkit generate` command.
///
/// Dispatch sequence:
/// 1. Resolve the workspace root
/// 2. Obtain the file name (flag or prompt; empty input aborts silently)
/// 3. Scaffold via `GenerateService`
/// 4. Show the created path
#[instrument(skip_all, fields(kind = ?args.kind))]
pub fn execute(args: GenerateArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let kind = ArtifactKind::from(args.kind);
    let workspace = Workspace::new(global.workspace_root()?);

    let Some(file_name) = resolve_file_name(args.name, &kind.default_file_name())? else {
        // Dismissed prompt: no error, no write.
        debug!("name prompt cancelled");
        return Ok(());
    };

    let service = GenerateService::new(Box::new(LocalFilesystem::new()));
    let generated = service.generate(&workspace, kind, args.folder.as_deref(), &file_name)?;

    output.success(&format!("File created: {}", generated.path.display()))?;
    output.print(&format!("  identifier: {}", generated.identifier))?;
    Ok(())
}
