//! Application layer: services orchestrating the domain behind ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{
    CompletionEngine, GenerateService, GeneratedFile, ProjectDetector, ProviderContext,
};
