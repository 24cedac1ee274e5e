//! Implementation of the `freshkit detect` command.

use tracing::instrument;

use freshkit_adapters::LocalFilesystem;
use freshkit_core::application::services::ProjectDetector;
use freshkit_core::domain::PROJECT_MARKER;

use crate::{
    cli::{DetectArgs, GlobalArgs, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

/// Execute the `freshkit detect` command.
///
/// Detection is a report, not a gate: the command always exits 0 and the
/// result is the output itself (machine-readable with
/// `--output-format json`).
#[instrument(skip_all)]
pub fn execute(args: DetectArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let root = match args.dir {
        Some(dir) => dir,
        None => global.workspace_root()?,
    };

    let detector = ProjectDetector::new(Box::new(LocalFilesystem::new()));
    let fresh = detector.is_fresh_project(Some(&root));

    if output.format() == OutputFormat::Json {
        println!(
            "{}",
            serde_json::json!({ "root": root, "fresh_project": fresh })
        );
        return Ok(());
    }

    if !root.exists() {
        output.warning(&format!("Directory does not exist: {}", root.display()))?;
    }

    if fresh {
        output.success(&format!("Fresh project detected at {}", root.display()))?;
    } else {
        output.info(&format!(
            "Not a Fresh project: no {PROJECT_MARKER} under {}",
            root.display()
        ))?;
    }

    Ok(())
}
