//! Text and JSON rendering of command results.

use crate::cli::OutputFormat;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;
use vienna::{FoldResult, InverseResult};

#[derive(Serialize)]
pub struct FoldRecord<'a> {
    pub sequence: &'a str,
    #[serde(flatten)]
    pub result: &'a FoldResult,
}

/// One detected (or missing) engine executable.
#[derive(Serialize)]
pub struct EngineRecord {
    pub tool: String,
    pub path: Option<String>,
    pub version: Option<String>,
    pub error: Option<String>,
}

pub fn write_json<W: Write + ?Sized, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(anyhow::Error::from)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_fold_text<W: Write + ?Sized>(
    out: &mut W,
    record: &FoldRecord<'_>,
    with_bpp: bool,
) -> Result<()> {
    let result = record.result;
    writeln!(out, "{}", record.sequence)?;
    writeln!(out, "{} ({:.2})", result.dot_bracket(), result.mfe())?;
    writeln!(out, " ensemble diversity {:.2}", result.ensemble_diversity())?;
    if with_bpp {
        for bp in result.bp_probs() {
            writeln!(out, "{:>5} {:>5} {:.6}", bp.i, bp.j, bp.probability)?;
        }
    }
    Ok(())
}

pub fn write_inverse_text<W: Write + ?Sized>(out: &mut W, result: &InverseResult) -> Result<()> {
    for candidate in result {
        writeln!(out, "{} {}", candidate.sequence, candidate.score)?;
    }
    Ok(())
}

pub fn write_engine_text<W: Write + ?Sized>(out: &mut W, records: &[EngineRecord]) -> Result<()> {
    for record in records {
        match (&record.path, &record.error) {
            (Some(path), _) => writeln!(
                out,
                "{:<11} {:<8} {}",
                record.tool,
                record.version.as_deref().unwrap_or("unknown"),
                path
            )?,
            (None, error) => writeln!(
                out,
                "{:<11} missing  {}",
                record.tool,
                error.as_deref().unwrap_or("")
            )?,
        }
    }
    Ok(())
}

/// Renders `value` as JSON or with the given text writer.
pub fn emit<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&mut dyn Write) -> Result<()>,
) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Json => write_json(&mut out, value),
        OutputFormat::Text => text(&mut out),
    }
}
