//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! aliases, help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use freshkit_core::domain::{ArtifactKind, templates::ExportKind};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "freshkit",
    bin_name = "freshkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f34b} Fresh project assistant",
    long_about = "Freshkit scaffolds Fresh/deco artifacts and answers \
                  annotation-completion queries for deco documentation tags.",
    after_help = "EXAMPLES:\n\
        \x20 freshkit detect\n\
        \x20 freshkit generate section --name product-shelf\n\
        \x20 freshkit generate island ui/widgets --name counter\n\
        \x20 freshkit complete sections/Hero.tsx --line 4 --character 6\n\
        \x20 freshkit completions zsh > ~/.zfunc/_freshkit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report whether the workspace is a Fresh project.
    #[command(
        about = "Detect a Fresh project",
        after_help = "Checks for fresh.gen.ts directly under the workspace root."
    )]
    Detect(DetectArgs),

    /// Scaffold a new artifact file from its template.
    #[command(
        visible_alias = "g",
        about = "Generate an artifact file",
        after_help = "EXAMPLES:\n\
            \x20 freshkit generate component --name my-card\n\
            \x20 freshkit generate loader --name products\n\
            \x20 freshkit generate section landing --name hero"
    )]
    Generate(GenerateArgs),

    /// Wrap an existing module into an island or section re-export.
    #[command(
        about = "Export a module as an island or section",
        after_help = "EXAMPLES:\n\
            \x20 freshkit export island --name Gallery\n\
            \x20 freshkit export section --name product-shelf"
    )]
    Export(ExportArgs),

    /// Work with route templates.
    #[command(
        about = "Route template management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 freshkit route list\n\
            \x20 freshkit route new \"Dynamic\" --name greet"
    )]
    Route(RouteCommands),

    /// Query completion providers at a document position.
    #[command(
        about = "List completions at a position",
        after_help = "EXAMPLES:\n\
            \x20 freshkit complete sections/Hero.tsx --line 4 --character 6\n\
            \x20 freshkit complete sections/Hero.tsx -l 4 -k 6 --provider options"
    )]
    Complete(CompleteArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 freshkit completions bash > ~/.local/share/bash-completion/completions/freshkit\n\
            \x20 freshkit completions fish > ~/.config/fish/completions/freshkit.fish"
    )]
    Completions(CompletionsArgs),
}

// ── detect ────────────────────────────────────────────────────────────────────

/// Arguments for `freshkit detect`.
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Directory to check instead of the workspace root.
    #[arg(value_name = "DIR", help = "Directory to check")]
    pub dir: Option<PathBuf>,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `freshkit generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Artifact kind to scaffold.
    #[arg(value_enum, help = "Artifact kind")]
    pub kind: KindArg,

    /// Target folder (default: the kind's top-level folder).
    #[arg(value_name = "FOLDER", help = "Target folder, relative to the workspace root")]
    pub folder: Option<PathBuf>,

    /// File name; prompted for interactively when omitted.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "File name")]
    pub name: Option<String>,
}

// ── export ────────────────────────────────────────────────────────────────────

/// Arguments for `freshkit export`.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Wrapper kind to produce.
    #[arg(value_enum, help = "Wrapper kind")]
    pub kind: ExportKindArg,

    /// Target folder (default: islands/ or sections/).
    #[arg(value_name = "FOLDER", help = "Target folder, relative to the workspace root")]
    pub folder: Option<PathBuf>,

    /// File name; prompted for interactively when omitted.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "File name")]
    pub name: Option<String>,
}

// ── route ─────────────────────────────────────────────────────────────────────

/// Subcommands for `freshkit route`.
#[derive(Debug, Subcommand)]
pub enum RouteCommands {
    /// List the available route templates.
    List,
    /// Scaffold a route file from a template.
    New {
        /// Template label (case-insensitive substring).
        #[arg(value_name = "TEMPLATE", help = "Template label fragment")]
        template: String,

        /// Target folder (default: routes/).
        #[arg(value_name = "FOLDER", help = "Target folder, relative to the workspace root")]
        folder: Option<PathBuf>,

        /// File name; prompted for interactively when omitted.
        #[arg(short = 'n', long = "name", value_name = "NAME", help = "File name")]
        name: Option<String>,
    },
}

// ── complete ──────────────────────────────────────────────────────────────────

/// Arguments for `freshkit complete`.
#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Document to complete in.
    #[arg(value_name = "FILE", help = "Source file to read")]
    pub file: PathBuf,

    /// Zero-based cursor line.
    #[arg(short = 'l', long = "line", default_value_t = 0, help = "Cursor line (zero-based)")]
    pub line: u32,

    /// Zero-based cursor character.
    #[arg(
        short = 'k',
        long = "character",
        default_value_t = 0,
        help = "Cursor character (zero-based)"
    )]
    pub character: u32,

    /// Run a single provider instead of all of them.
    #[arg(short = 'p', long = "provider", value_enum, help = "Provider to query")]
    pub provider: Option<ProviderArg>,
}

/// Addressable completion providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProviderArg {
    Annotation,
    Format,
    Options,
    Snippet,
}

impl ProviderArg {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annotation => "annotation",
            Self::Format => "format",
            Self::Options => "options",
            Self::Snippet => "snippet",
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `freshkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Scaffoldable artifact kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum KindArg {
    Component,
    Island,
    Loader,
    Action,
    Section,
}

impl From<KindArg> for ArtifactKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Component => Self::Component,
            KindArg::Island => Self::Island,
            KindArg::Loader => Self::Loader,
            KindArg::Action => Self::Action,
            KindArg::Section => Self::Section,
        }
    }
}

/// Export wrapper kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ExportKindArg {
    Island,
    Section,
}

impl From<ExportKindArg> for ExportKind {
    fn from(kind: ExportKindArg) -> Self {
        match kind {
            ExportKindArg::Island => Self::Island,
            ExportKindArg::Section => Self::Section,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
