//! Loader extraction from the generated manifest.
//!
//! The manifest is a generated registry file whose text contains a
//! `"loaders": { ... }` object literal with double-quoted keys. Extraction
//! is purely textual and deliberately regex-based: it tolerates (but does
//! not validate) the surrounding syntax, and it breaks on nested braces -
//! the same contract the admin tooling has always had. Keep it that way
//! for compatibility rather than switching to a real parser.

use regex::Regex;
use std::sync::LazyLock;

/// Manifest file name, expected directly under the workspace root.
pub const MANIFEST_FILE: &str = "manifest.gen.ts";

static LOADERS_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""loaders":\s*\{([^}]*)\}"#).expect("hard-coded regex"));

static LOADER_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)":"#).expect("hard-coded regex"));

/// Extract loader keys from manifest text, in order of appearance.
///
/// Returns an empty list when no `"loaders"` block is present. Never
/// fails: malformed text simply yields fewer (or zero) keys.
pub fn extract_loader_keys(manifest: &str) -> Vec<String> {
    let Some(block) = LOADERS_BLOCK
        .captures(manifest)
        .and_then(|caps| caps.get(1))
    else {
        return Vec::new();
    };

    LOADER_KEY
        .captures_iter(block.as_str())
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
