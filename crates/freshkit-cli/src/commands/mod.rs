//! Command handlers.
//!
//! Each module translates parsed CLI arguments into core service calls
//! and displays results. No business logic lives here.

pub mod complete;
pub mod completions;
pub mod detect;
pub mod export;
pub mod generate;
pub mod route;

use crate::error::CliResult;

/// Resolve the file name for a scaffold command.
///
/// `--name` wins; otherwise the user is prompted (interactive builds
/// only). `Ok(None)` means the prompt was dismissed or left empty - the
/// caller aborts silently, writing nothing.
pub fn resolve_file_name(name: Option<String>, default: &str) -> CliResult<Option<String>> {
    if let Some(name) = name {
        let trimmed = name.trim();
        return Ok(if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        });
    }

    prompt_file_name(default)
}

#[cfg(feature = "interactive")]
fn prompt_file_name(default: &str) -> CliResult<Option<String>> {
    use dialoguer::Input;

    let entered = Input::<String>::new()
        .with_prompt("Enter file name")
        .default(default.to_string())
        .interact_text();

    match entered {
        Ok(name) if !name.trim().is_empty() => Ok(Some(name.trim().to_string())),
        // Empty input or a dismissed prompt both read as cancellation.
        Ok(_) | Err(_) => Ok(None),
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt_file_name(_default: &str) -> CliResult<Option<String>> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_name_wins() {
        let name = resolve_file_name(Some("hero".into()), "index.tsx").unwrap();
        assert_eq!(name.as_deref(), Some("hero"));
    }

    #[test]
    fn explicit_name_is_trimmed() {
        let name = resolve_file_name(Some("  hero  ".into()), "index.tsx").unwrap();
        assert_eq!(name.as_deref(), Some("hero"));
    }

    #[test]
    fn blank_explicit_name_cancels() {
        let name = resolve_file_name(Some("   ".into()), "index.tsx").unwrap();
        assert!(name.is_none());
    }
}
