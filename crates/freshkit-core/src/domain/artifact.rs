//! Artifact kinds: the closed set of things the scaffolder can create.
//!
//! # Design
//!
//! `ArtifactKind` is a pure value type - `Copy`, equality-by-value, no
//! identity. Each kind carries its file extension, its default target
//! folder, and its template body. Adding a kind means adding a variant
//! here plus a template in `templates.rs`; nothing else changes.

use crate::domain::error::DomainError;
use crate::domain::templates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A scaffoldable artifact kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Component,
    Island,
    Loader,
    Action,
    Section,
}

impl ArtifactKind {
    /// Every kind, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Component,
        Self::Island,
        Self::Loader,
        Self::Action,
        Self::Section,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Island => "island",
            Self::Loader => "loader",
            Self::Action => "action",
            Self::Section => "section",
        }
    }

    /// File extension, leading dot included.
    ///
    /// Loaders and actions are plain modules; everything else renders JSX.
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Loader | Self::Action => ".ts",
            Self::Component | Self::Island | Self::Section => ".tsx",
        }
    }

    /// Default target folder under the workspace root (the plural kind name).
    pub const fn default_folder(&self) -> &'static str {
        match self {
            Self::Component => "components",
            Self::Island => "islands",
            Self::Loader => "loaders",
            Self::Action => "actions",
            Self::Section => "sections",
        }
    }

    /// The template body this kind is scaffolded from.
    pub const fn template(&self) -> &'static str {
        match self {
            Self::Component => templates::COMPONENT,
            Self::Island => templates::ISLAND,
            Self::Loader => templates::LOADER,
            Self::Action => templates::ACTION,
            Self::Section => templates::SECTION,
        }
    }

    /// Suggested default file name for the name prompt (`index` + extension).
    pub fn default_file_name(&self) -> String {
        format!("index{}", self.extension())
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "component" | "components" => Ok(Self::Component),
            "island" | "islands" => Ok(Self::Island),
            "loader" | "loaders" => Ok(Self::Loader),
            "action" | "actions" => Ok(Self::Action),
            "section" | "sections" => Ok(Self::Section),
            other => Err(DomainError::UnknownArtifactKind(other.to_string())),
        }
    }
}
