//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `freshkit-adapters` crate provides implementations.

use crate::error::FreshkitResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `freshkit_adapters::filesystem::LocalFilesystem` (production)
/// - `freshkit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// `exists` is infallible on purpose: any error while probing a path is
/// read as "absent", which is the failure semantics the detector and the
/// preview lookup both want.
pub trait Filesystem: Send + Sync {
    /// Check if a path exists. Errors read as `false`.
    fn exists(&self, path: &Path) -> bool;

    /// Read an entire file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> FreshkitResult<String>;

    /// Write content to a file, replacing nothing (callers check first).
    fn write_file(&self, path: &Path, content: &str) -> FreshkitResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> FreshkitResult<()>;
}
