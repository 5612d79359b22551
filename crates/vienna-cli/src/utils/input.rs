use crate::error::Result;
use std::path::Path;

/// Reads one sequence per line. Blank lines, `#` comments and FASTA `>`
/// headers are skipped; surrounding whitespace is trimmed.
pub fn read_sequences(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_sequences(&content))
}

fn parse_sequences(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('>') && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
