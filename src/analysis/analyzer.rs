//! Analyzers combine char filters, a tokenizer and token filters.
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Tokens
//! ```

use crate::analysis::diagnostic::Diagnostics;
use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod pipeline;

pub use pipeline::PipelineAnalyzer;

/// Trait for analyzers that convert raw text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens. Recoverable
    /// conditions are pushed to `diagnostics`.
    fn analyze(&self, text: &str, diagnostics: &mut Diagnostics) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
