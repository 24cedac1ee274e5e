//! Implementation of the `freshkit complete` command.
//!
//! Reads the document, runs the completion providers at the requested
//! position, and prints the items - one per line for humans, a JSON
//! array for tooling.

use tracing::instrument;

use freshkit_adapters::LocalFilesystem;
use freshkit_core::application::services::{CompletionEngine, CompletionItem, ProviderContext};
use freshkit_core::domain::{Document, Position, Workspace};

use crate::{
    cli::{CompleteArgs, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `freshkit complete` command.
#[instrument(skip_all, fields(file = %args.file.display(), line = args.line))]
pub fn execute(
    args: CompleteArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let text = std::fs::read_to_string(&args.file).map_err(|e| CliError::UnreadableFile {
        path: args.file.clone(),
        source: Box::new(e),
    })?;

    let document = Document::new(text);
    let position = Position::new(args.line, args.character);
    let workspace = Workspace::new(global.workspace_root()?);

    let filesystem = LocalFilesystem::new();
    let cx = ProviderContext {
        filesystem: &filesystem,
        workspace: &workspace,
        previews_dir: config.previews.dir.as_deref(),
    };

    let engine = CompletionEngine::standard();
    let items = match args.provider {
        Some(provider) => engine
            .complete_with(provider.as_str(), &document, position, &cx)
            .unwrap_or_default(),
        None => engine.complete(&document, position, &cx),
    };

    render(&items, output)
}

fn render(items: &[CompletionItem], output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    if items.is_empty() {
        output.info("No completions")?;
        return Ok(());
    }

    output.header(&format!(
        "{} completion{}",
        items.len(),
        if items.len() == 1 { "" } else { "s" }
    ))?;
    for item in items {
        output.item(&item.label)?;
    }
    Ok(())
}
