//! Command line argument parsing for the socialnorm CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stem::StemmerAlgorithm;
use crate::config::{
    HashtagMode, Language, MentionMode, NumeralMode, PipelineConfig, StageKind, StopwordMode,
    UrlMode,
};
use crate::error::Result;

/// socialnorm - normalize social-media posts into token sequences
#[derive(Parser, Debug, Clone)]
#[command(name = "socialnorm")]
#[command(about = "Normalize social-media post text into canonical token sequences")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SocialnormArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "json", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SocialnormArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Normalize posts, one per input line
    Normalize(NormalizeArgs),

    /// Print the emotion categories of an emoji or emoticon
    Resolve(ResolveArgs),

    /// Print the effective pipeline configuration
    Config(ConfigArgs),
}

/// Pipeline options shared by the commands that build a pipeline.
#[derive(Parser, Debug, Clone, Default)]
pub struct PipelineArgs {
    /// Pipeline configuration file (JSON); flags override its values
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Lookup table file (JSON) layered over the built-in tables
    #[arg(short, long, value_name = "LEXICON_FILE")]
    pub lexicon: Option<PathBuf>,

    /// Language of the posts (english, french, other)
    #[arg(long)]
    pub language: Option<Language>,

    /// URL handling (keep, replace, delete)
    #[arg(long)]
    pub url_mode: Option<UrlMode>,

    /// Mention handling (keep, replace, delete, screen_name)
    #[arg(long)]
    pub mention_mode: Option<MentionMode>,

    /// Hashtag handling (keep, replace, delete)
    #[arg(long)]
    pub hashtag_mode: Option<HashtagMode>,

    /// Maximum emoji labels per category and post (0 = unbounded)
    #[arg(long, value_name = "N")]
    pub emoji_cap: Option<usize>,

    /// Stopwords (standard, no_personal, manual:word,word,...)
    #[arg(long)]
    pub stopwords: Option<StopwordMode>,

    /// Keep negations even if they are stopwords
    #[arg(long)]
    pub include_negations: bool,

    /// Numeral handling (replace, delete)
    #[arg(long)]
    pub numerals: Option<NumeralMode>,

    /// Snowball stemmer overriding the language default
    #[arg(long)]
    pub stemmer: Option<StemmerAlgorithm>,

    /// Disable a stage (repeatable)
    #[arg(long = "disable", value_name = "STAGE")]
    pub disabled_stages: Vec<StageKind>,
}

impl PipelineArgs {
    /// Load the configuration file, if any, and apply the flags on top.
    pub fn to_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_json_file(path)?,
            None => PipelineConfig::default(),
        };

        if let Some(language) = self.language {
            config = config.language(language);
        }
        if let Some(mode) = self.url_mode {
            config = config.url_mode(mode);
        }
        if let Some(mode) = self.mention_mode {
            config = config.mention_mode(mode);
        }
        if let Some(mode) = self.hashtag_mode {
            config = config.hashtag_mode(mode);
        }
        if let Some(cap) = self.emoji_cap {
            config = config.emoji_cap(cap);
        }
        if let Some(mode) = &self.stopwords {
            config = config.stopwords(mode.clone());
        }
        if self.include_negations {
            config = config.include_negations(true);
        }
        if let Some(mode) = self.numerals {
            config = config.numerals(mode);
        }
        if let Some(algorithm) = self.stemmer {
            config = config.stemmer(algorithm);
        }

        Ok(self
            .disabled_stages
            .iter()
            .fold(config, |config, stage| config.disable(*stage)))
    }
}

/// Arguments for normalizing posts
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Input file; standard input when omitted
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Record format of each input line
    #[arg(short, long, default_value = "plain")]
    pub source: SourceFormat,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

/// Arguments for resolving a glyph
#[derive(Parser, Debug, Clone)]
pub struct ResolveArgs {
    /// Emoji or emoticon to look up
    #[arg(value_name = "GLYPH")]
    pub glyph: String,

    /// Lookup table file (JSON) layered over the built-in tables
    #[arg(short, long, value_name = "LEXICON_FILE")]
    pub lexicon: Option<PathBuf>,
}

/// Arguments for printing the configuration
#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    /// Also list the active stages in execution order
    #[arg(long)]
    pub stages: bool,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

/// How each input line is read
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// The line is the post text
    #[default]
    Plain,
    /// A JSON tweet; the text is in `text`
    Twitter,
    /// A JSON Reddit post; the text is in `fulltext`
    Reddit,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON document per line
    Json,
    /// Space-separated tokens
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalize() {
        let args = SocialnormArgs::parse_from([
            "socialnorm",
            "normalize",
            "posts.jsonl",
            "--source",
            "twitter",
            "--mention-mode",
            "screen_name",
            "--emoji-cap",
            "2",
            "--disable",
            "stem",
            "--disable",
            "lemmatize",
            "-vv",
        ]);

        assert_eq!(args.verbosity(), 2);
        let Command::Normalize(normalize) = args.command else {
            panic!("expected the normalize command");
        };
        assert_eq!(normalize.source, SourceFormat::Twitter);

        let config = normalize.pipeline.to_config().unwrap();
        assert_eq!(config.mention_mode, MentionMode::ScreenName);
        assert_eq!(config.emoji_cap.map(|cap| cap.get()), Some(2));
        assert!(!config.is_enabled(StageKind::Stem));
        assert!(!config.is_enabled(StageKind::Lemmatize));
    }

    #[test]
    fn test_undefined_mode_is_rejected() {
        let result = SocialnormArgs::try_parse_from([
            "socialnorm",
            "normalize",
            "--url-mode",
            "shorten",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = SocialnormArgs::parse_from(["socialnorm", "-q", "-vvv", "resolve", ":)"]);
        assert_eq!(args.verbosity(), 0);
    }
}
