//! Text analysis building blocks.
//!
//! Char filters rewrite the raw text, a tokenizer splits it, and token
//! filters transform the token stream. A
//! [`PipelineAnalyzer`](analyzer::PipelineAnalyzer) chains them and maps
//! token offsets back to the raw text.

pub mod analyzer;
pub mod char_filter;
pub mod diagnostic;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
