//! Command implementations for the socialnorm CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use serde::Serialize;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::PipelineConfig;
use crate::error::{NormalizeError, Result};
use crate::lexicon::{Lexicon, LexiconSource};
use crate::normalizer::Normalizer;
use crate::source::{FieldExtractor, TextExtractor};

/// Execute a CLI command.
pub fn execute_command(args: SocialnormArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &args.command {
        Command::Normalize(normalize_args) => normalize(normalize_args, &args, &mut out)?,
        Command::Resolve(resolve_args) => resolve(resolve_args, &args, &mut out)?,
        Command::Config(config_args) => show_config(config_args, &args, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

/// Built-in tables, optionally overlaid with a JSON lexicon file.
pub fn load_lexicon(path: Option<&Path>) -> Result<Lexicon> {
    match path {
        Some(path) => {
            info!("loading lexicon from {}", path.display());
            LexiconSource::from_json_file(path)?.build()
        }
        None => Lexicon::english(),
    }
}

fn build_normalizer(pipeline: &PipelineArgs) -> Result<Normalizer> {
    let config = pipeline.to_config()?;
    let lexicon = load_lexicon(pipeline.lexicon.as_deref())?;
    Normalizer::new(Arc::new(lexicon), config)
}

/// Normalize every non-empty input line.
fn normalize<W: Write>(args: &NormalizeArgs, cli_args: &SocialnormArgs, out: &mut W) -> Result<()> {
    let normalizer = build_normalizer(&args.pipeline)?;

    let lines = match &args.input {
        Some(path) => read_lines(BufReader::new(File::open(path)?))?,
        None => read_lines(io::stdin().lock())?,
    };
    debug!("read {} line(s)", lines.len());

    let start = Instant::now();
    let results = normalize_lines(&normalizer, args.source, &lines);
    for result in &results {
        output_result(out, result, cli_args)?;
    }

    let failed = results
        .iter()
        .filter(|r| matches!(r, DocumentResult::Failed { .. }))
        .count();
    info!(
        "normalized {} document(s) in {} ms, {} failed",
        results.len(),
        start.elapsed().as_millis(),
        failed
    );

    Ok(())
}

fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Extract and normalize each line. The output has one entry per line, in
/// order; a line that cannot be read or normalized yields a failure entry.
pub fn normalize_lines(
    normalizer: &Normalizer,
    source: SourceFormat,
    lines: &[String],
) -> Vec<DocumentResult> {
    let extracted: Vec<Result<String>> = lines
        .iter()
        .map(|line| extract_text(source, line))
        .collect();

    let texts: Vec<&str> = extracted
        .iter()
        .filter_map(|text| text.as_deref().ok())
        .collect();
    let mut normalized = normalizer.normalize_batch(&texts).into_iter();

    extracted
        .into_iter()
        .map(|text| match text {
            Ok(_) => match normalized.next() {
                Some(Ok(result)) => result.into(),
                Some(Err(e)) => DocumentResult::failed(e),
                None => DocumentResult::failed(NormalizeError::analysis("missing batch result")),
            },
            Err(e) => DocumentResult::failed(e),
        })
        .collect()
}

fn extract_text(source: SourceFormat, line: &str) -> Result<String> {
    let extractor = match source {
        SourceFormat::Plain => return Ok(line.to_string()),
        SourceFormat::Twitter => FieldExtractor::twitter(),
        SourceFormat::Reddit => FieldExtractor::reddit(),
    };
    let record: serde_json::Value = serde_json::from_str(line)?;
    Ok(extractor.extract(&record)?.to_string())
}

/// Look up the categories of a single glyph.
fn resolve<W: Write>(args: &ResolveArgs, cli_args: &SocialnormArgs, out: &mut W) -> Result<()> {
    let lexicon = load_lexicon(args.lexicon.as_deref())?;
    let resolution = lexicon.resolver().lookup(&args.glyph);

    let result = ResolveResult {
        glyph: args.glyph.clone(),
        table: resolution.as_ref().map(|r| r.table),
        labels: resolution
            .map(|r| r.labels.into_iter().map(str::to_string).collect())
            .unwrap_or_default(),
    };
    output_result(out, &result, cli_args)
}

#[derive(Serialize)]
struct ConfigReport<'a> {
    #[serde(flatten)]
    config: &'a PipelineConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    stages: Option<Vec<&'static str>>,
}

impl TextOutput for ConfigReport<'_> {
    fn to_text(&self) -> String {
        match &self.stages {
            Some(stages) => format!("{}\nstages: {}", self.config.to_text(), stages.join(" -> ")),
            None => self.config.to_text(),
        }
    }
}

/// Print the effective configuration after applying file and flags.
fn show_config<W: Write>(args: &ConfigArgs, cli_args: &SocialnormArgs, out: &mut W) -> Result<()> {
    let normalizer = build_normalizer(&args.pipeline)?;
    let report = ConfigReport {
        config: normalizer.config(),
        stages: args.stages.then(|| normalizer.stages()),
    };
    output_result(out, &report, cli_args)
}
