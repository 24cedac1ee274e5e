//! Application services.

pub mod completion;
pub mod detect;
pub mod generate;

pub use completion::{
    AnnotationCompletions, CompletionEngine, CompletionItem, CompletionKind, CompletionProvider,
    FormatCompletions, OptionsCompletions, ProviderContext, SnippetCompletions,
};
pub use detect::ProjectDetector;
pub use generate::{GenerateService, GeneratedFile};
