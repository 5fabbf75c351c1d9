//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::diagnostic::Diagnostic;
use crate::cli::args::{OutputFormat, SocialnormArgs};
use crate::error::Result;
use crate::lexicon::GlyphTable;
use crate::normalizer::Normalized;

/// Result of normalizing one input line.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentResult {
    Normalized {
        tokens: Vec<String>,
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        diagnostics: Vec<Diagnostic>,
    },
    Failed {
        error: String,
    },
}

impl DocumentResult {
    pub fn failed<E: ToString>(error: E) -> Self {
        DocumentResult::Failed {
            error: error.to_string(),
        }
    }
}

impl From<Normalized> for DocumentResult {
    fn from(normalized: Normalized) -> Self {
        DocumentResult::Normalized {
            tokens: normalized.tokens,
            diagnostics: normalized.diagnostics.into_vec(),
        }
    }
}

/// Result of looking up one glyph.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveResult {
    pub glyph: String,
    pub table: Option<GlyphTable>,
    pub labels: Vec<String>,
}

/// Things that have a plain-text rendering.
pub trait TextOutput {
    fn to_text(&self) -> String;
}

impl TextOutput for DocumentResult {
    fn to_text(&self) -> String {
        match self {
            DocumentResult::Normalized { tokens, .. } => tokens.join(" "),
            DocumentResult::Failed { error } => format!("error: {error}"),
        }
    }
}

impl TextOutput for ResolveResult {
    fn to_text(&self) -> String {
        if self.labels.is_empty() {
            format!("{}: no category", self.glyph)
        } else {
            format!("{}: {}", self.glyph, self.labels.join(" "))
        }
    }
}

impl TextOutput for crate::config::PipelineConfig {
    fn to_text(&self) -> String {
        let disabled: Vec<String> = self.disabled_stages.iter().map(|s| s.to_string()).collect();
        let stemmer = self
            .stemmer
            .map_or_else(|| "default".to_string(), |s| s.to_string());
        let emoji_cap = self
            .emoji_cap
            .map_or_else(|| "unbounded".to_string(), |cap| cap.to_string());

        [
            format!("language: {}", self.language),
            format!("url_mode: {}", self.url_mode),
            format!("mention_mode: {}", self.mention_mode),
            format!("hashtag_mode: {}", self.hashtag_mode),
            format!("emoji_cap: {emoji_cap}"),
            format!("stopwords: {}", self.stopwords),
            format!("include_negations: {}", self.include_negations),
            format!("numerals: {}", self.numerals),
            format!("stemmer: {stemmer}"),
            format!("emoticon_partial_match: {}", self.emoticon_partial_match),
            format!("disabled_stages: {}", disabled.join(", ")),
        ]
        .join("\n")
    }
}

/// Output a result in the requested format.
pub fn output_result<W, T>(out: &mut W, result: &T, args: &SocialnormArgs) -> Result<()>
where
    W: Write,
    T: Serialize + TextOutput,
{
    match args.output_format {
        OutputFormat::Json => output_json(out, result, args),
        OutputFormat::Text => {
            writeln!(out, "{}", result.to_text())?;
            Ok(())
        }
    }
}

fn output_json<W: Write, T: Serialize>(out: &mut W, result: &T, args: &SocialnormArgs) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, result)?;
    } else {
        serde_json::to_writer(&mut *out, result)?;
    }
    writeln!(out)?;
    Ok(())
}
