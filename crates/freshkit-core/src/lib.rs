//! Freshkit Core - domain and application layers.
//!
//! This crate holds everything that does not touch the real filesystem or a
//! terminal: the artifact catalog and templates, identifier derivation, the
//! annotation catalog, manifest scraping, and the services that orchestrate
//! them behind ports.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          freshkit-cli (CLI)             │
//! │        (drives the services)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (GenerateService, CompletionEngine,     │
//! │  ProjectDetector)                       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Filesystem)                   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   freshkit-adapters (Infrastructure)    │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ArtifactKind, templates, annotations,  │
//! │  Document, manifest scraping)           │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use freshkit_core::{
//!     application::services::GenerateService,
//!     domain::{ArtifactKind, Workspace},
//! };
//!
//! # fn adapters() -> Box<dyn freshkit_core::application::ports::Filesystem> { unimplemented!() }
//! let service = GenerateService::new(adapters());
//! let workspace = Workspace::new("/path/to/project");
//! let generated = service
//!     .generate(&workspace, ArtifactKind::Component, None, "my-comp")
//!     .unwrap();
//! assert!(generated.path.ends_with("components/my-comp.tsx"));
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub use error::{ErrorCategory, FreshkitError, FreshkitResult};
