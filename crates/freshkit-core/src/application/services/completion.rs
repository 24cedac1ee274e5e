//! Completion Engine - annotation, format, options, and snippet providers.
//!
//! The host (the CLI here, an editor originally) asks the engine for
//! completions at a document position; each registered provider decides
//! for itself whether it applies. Providers are stateless - everything
//! they need arrives through [`ProviderContext`] per request.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, error};

use crate::application::ports::Filesystem;
use crate::domain::{
    Annotation, Document, Position, Workspace,
    annotations::{ANNOTATIONS, FORMAT_WIDGETS, preview_file_name, suppresses_general_catalog},
    manifest::extract_loader_keys,
    snippets::SNIPPETS,
};

/// Detail string shown next to every item.
const DETAIL: &str = "Deco";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    Keyword,
    Snippet,
}

/// One completion suggestion, ready for the host to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionItem {
    pub label: String,
    pub insert_text: String,
    pub detail: String,
    /// Markdown: description plus an embedded preview image when one
    /// exists on disk.
    pub documentation: String,
    /// `"0"`-prefixed so these sort ahead of generic language completions.
    pub sort_text: String,
    pub kind: CompletionKind,
}

/// Per-request environment handed to every provider.
pub struct ProviderContext<'a> {
    pub filesystem: &'a dyn Filesystem,
    pub workspace: &'a Workspace,
    /// Where preview images live; `None` disables the image lookup.
    pub previews_dir: Option<&'a Path>,
}

/// A single completion capability, queried by the host per request.
pub trait CompletionProvider: Send + Sync {
    /// Stable name used to address the provider from the CLI.
    fn name(&self) -> &'static str;

    fn provide(
        &self,
        document: &Document,
        position: Position,
        cx: &ProviderContext<'_>,
    ) -> Vec<CompletionItem>;
}

// ── item construction ─────────────────────────────────────────────────────────

/// Build a keyword item, embedding a preview image reference when the
/// correspondingly named file exists.
fn keyword_item(
    annotation: &Annotation,
    prefix: Option<&str>,
    cx: &ProviderContext<'_>,
) -> CompletionItem {
    item_with_docs(annotation.keyword, annotation.doc, prefix, cx)
}

fn item_with_docs(
    label: &str,
    doc: &str,
    prefix: Option<&str>,
    cx: &ProviderContext<'_>,
) -> CompletionItem {
    let mut documentation = format!("{doc}\n\n");

    if let Some(dir) = cx.previews_dir {
        let image = dir.join(preview_file_name(label, prefix));
        if cx.filesystem.exists(&image) {
            documentation.push_str(&format!(
                r#"<img src="{}" alt="{label} preview" width="100%" />"#,
                image.display()
            ));
        }
    }

    CompletionItem {
        label: label.to_string(),
        insert_text: label.to_string(),
        detail: DETAIL.to_string(),
        documentation,
        sort_text: format!("0{label}"),
        kind: CompletionKind::Keyword,
    }
}

// ── providers ─────────────────────────────────────────────────────────────────

/// The general annotation catalog, active inside block comments only.
pub struct AnnotationCompletions;

impl CompletionProvider for AnnotationCompletions {
    fn name(&self) -> &'static str {
        "annotation"
    }

    fn provide(
        &self,
        document: &Document,
        position: Position,
        cx: &ProviderContext<'_>,
    ) -> Vec<CompletionItem> {
        if document.block_comment_at(position).is_none() {
            return Vec::new();
        }

        let line = document.line_text(position.line);
        if suppresses_general_catalog(line) {
            // The cursor sits mid-value of @format/@options; a new tag
            // suggestion would be wrong here.
            return Vec::new();
        }

        ANNOTATIONS
            .iter()
            .map(|a| keyword_item(a, None, cx))
            .collect()
    }
}

/// Widget names, active when the line carries `@format`.
pub struct FormatCompletions;

impl CompletionProvider for FormatCompletions {
    fn name(&self) -> &'static str {
        "format"
    }

    fn provide(
        &self,
        document: &Document,
        position: Position,
        cx: &ProviderContext<'_>,
    ) -> Vec<CompletionItem> {
        let line = document.line_text(position.line);
        if !line.contains("@format") {
            return Vec::new();
        }

        FORMAT_WIDGETS
            .iter()
            .map(|a| keyword_item(a, Some("format"), cx))
            .collect()
    }
}

/// Loader keys scraped from the generated manifest, active when the line
/// carries `@options`.
pub struct OptionsCompletions;

impl CompletionProvider for OptionsCompletions {
    fn name(&self) -> &'static str {
        "options"
    }

    fn provide(
        &self,
        document: &Document,
        position: Position,
        cx: &ProviderContext<'_>,
    ) -> Vec<CompletionItem> {
        let line = document.line_text(position.line);
        if !line.contains("@options") {
            return Vec::new();
        }

        self.loader_keys(cx)
            .iter()
            .map(|key| item_with_docs(key, key, Some("options"), cx))
            .collect()
    }
}

impl OptionsCompletions {
    /// Read the manifest and extract loader keys.
    ///
    /// A missing or unreadable manifest degrades to an empty list; the
    /// failure is logged and never reaches the caller.
    fn loader_keys(&self, cx: &ProviderContext<'_>) -> Vec<String> {
        let path = cx.workspace.manifest_path();
        match cx.filesystem.read_to_string(&path) {
            Ok(text) => {
                let keys = extract_loader_keys(&text);
                debug!(count = keys.len(), "loader keys extracted from manifest");
                keys
            }
            Err(e) => {
                error!(manifest = %path.display(), error = %e, "failed to read manifest");
                Vec::new()
            }
        }
    }
}

/// Fixed inline snippets for JSX modules.
pub struct SnippetCompletions;

impl CompletionProvider for SnippetCompletions {
    fn name(&self) -> &'static str {
        "snippet"
    }

    fn provide(
        &self,
        _document: &Document,
        _position: Position,
        _cx: &ProviderContext<'_>,
    ) -> Vec<CompletionItem> {
        SNIPPETS
            .iter()
            .map(|s| CompletionItem {
                label: s.label.to_string(),
                insert_text: s.body.to_string(),
                detail: DETAIL.to_string(),
                documentation: String::new(),
                sort_text: s.label.to_string(),
                kind: CompletionKind::Snippet,
            })
            .collect()
    }
}

// ── engine ────────────────────────────────────────────────────────────────────

/// Registry of providers, queried together or by name.
pub struct CompletionEngine {
    providers: Vec<Box<dyn CompletionProvider>>,
}

impl CompletionEngine {
    /// The standard registration: annotation, format, options, snippet.
    pub fn standard() -> Self {
        Self {
            providers: vec![
                Box::new(AnnotationCompletions),
                Box::new(FormatCompletions),
                Box::new(OptionsCompletions),
                Box::new(SnippetCompletions),
            ],
        }
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Run every provider and concatenate the results in registration
    /// order.
    pub fn complete(
        &self,
        document: &Document,
        position: Position,
        cx: &ProviderContext<'_>,
    ) -> Vec<CompletionItem> {
        self.providers
            .iter()
            .flat_map(|p| p.provide(document, position, cx))
            .collect()
    }

    /// Run a single provider by name; `None` when no such provider.
    pub fn complete_with(
        &self,
        name: &str,
        document: &Document,
        position: Position,
        cx: &ProviderContext<'_>,
    ) -> Option<Vec<CompletionItem>> {
        self.providers
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.provide(document, position, cx))
    }
}
