//! Implementation of the `freshkit route` subcommands.

use tracing::{debug, instrument};

use freshkit_adapters::LocalFilesystem;
use freshkit_core::application::services::GenerateService;
use freshkit_core::domain::{ROUTE_TEMPLATES, Workspace, select_route};

use crate::{
    cli::{GlobalArgs, RouteCommands},
    commands::resolve_file_name,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a `freshkit route` subcommand.
#[instrument(skip_all)]
pub fn execute(cmd: RouteCommands, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    match cmd {
        RouteCommands::List => list(output),
        RouteCommands::New {
            template,
            folder,
            name,
        } => new(&template, folder.as_deref(), name, global, output),
    }
}

fn list(output: &OutputManager) -> CliResult<()> {
    output.header("Route templates")?;
    for route in ROUTE_TEMPLATES {
        output.item(route.label)?;
    }
    Ok(())
}

fn new(
    template: &str,
    folder: Option<&std::path::Path>,
    name: Option<String>,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    let route = select_route(template).map_err(|e| CliError::Core(e.into()))?;
    let workspace = Workspace::new(global.workspace_root()?);

    let Some(file_name) = resolve_file_name(name, "index.tsx")? else {
        debug!("name prompt cancelled");
        return Ok(());
    };

    let service = GenerateService::new(Box::new(LocalFilesystem::new()));
    let generated = service.scaffold_route(&workspace, route, folder, &file_name)?;

    output.success(&format!(
        "Route created from '{}': {}",
        route.label,
        generated.path.display()
    ))?;
    Ok(())
}
