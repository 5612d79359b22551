//! Extraction of base-pair probabilities from the engine's dot-plot dump.
//!
//! `RNAfold -p` writes a PostScript file (`dot.ps`) whose data section lists
//! one box per pair:
//!
//! ```text
//! 1 12 0.974334 ubox
//! 2 11 0.968221 ubox
//! 1 12 0.95 lbox
//! ```
//!
//! `ubox` lines hold the partition-function values for the upper triangle;
//! every other line (`lbox` MFE entries, PostScript definitions, comments) is
//! ignored.

use super::ParseError;
use crate::core::models::BasePairProb;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// File name the engine uses for the dump of an unnamed sequence.
pub const DOT_PLOT_FILE: &str = "dot.ps";

const UPPER_BOX_MARKER: &str = "ubox";

/// Parses dump contents into sparse 1-indexed triples, in file order.
/// Zero-probability entries are dropped.
pub fn parse_dot_plot(content: &str) -> Result<Vec<BasePairProb>, ParseError> {
    let mut pairs = Vec::new();
    for (line_num, line) in content.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 || fields[3] != UPPER_BOX_MARKER {
            continue;
        }
        let invalid = || ParseError::InvalidDotPlotEntry {
            line: line_num + 1,
            content: line.to_string(),
        };
        let i: usize = fields[0].parse().map_err(|_| invalid())?;
        let j: usize = fields[1].parse().map_err(|_| invalid())?;
        let probability: f64 = fields[2].parse().map_err(|_| invalid())?;
        if probability == 0.0 {
            continue;
        }
        pairs.push(BasePairProb::new(i, j, probability));
    }
    Ok(pairs)
}

/// Reads and parses a dump, then deletes it. The file is removed before
/// parsing so a malformed dump never outlives the call.
pub fn extract_from_file(path: &Path) -> Result<Vec<BasePairProb>, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|e| ParseError::UnreadableDotPlot {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    if let Err(e) = remove_if_exists(path) {
        warn!(path = %path.display(), error = %e, "Failed to delete dot plot dump.");
    }
    let pairs = parse_dot_plot(&content)?;
    debug!(pairs = pairs.len(), "Extracted base-pair probabilities.");
    Ok(pairs)
}

/// Deletes `path`; a file that is already gone is not an error.
pub fn remove_if_exists(path: &Path) -> io::Result<()> {
    match std::fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const DOT_PS_EXCERPT: &str = "%!PS-Adobe-3.0 EPSF-3.0
%%Title: RNA Dot Plot
/ubox {
   logscale {
      log dup add lpmin div 1 exch sub dup 0 lt { pop 0 } if
   } if
   3 1 roll
   EXCH 0.5 sub exch 0.5 sub 3 -1 roll dup box
} bind def
%data starts here
1 12 0.9743 ubox
2 11 0.9682 ubox
3 10 0.0 ubox
4 9 0.8143 ubox
1 12 0.95 lbox
showpage
";

    #[test]
    fn keeps_only_nonzero_upper_boxes() {
        let pairs = parse_dot_plot(DOT_PS_EXCERPT).unwrap();
        assert_eq!(
            pairs,
            vec![
                BasePairProb::new(1, 12, 0.9743),
                BasePairProb::new(2, 11, 0.9682),
                BasePairProb::new(4, 9, 0.8143),
            ]
        );
    }

    #[test]
    fn lines_with_other_field_counts_are_ignored() {
        let pairs = parse_dot_plot("1 12 0.5 ubox extra\n1 12 ubox\n\n").unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn malformed_upper_box_is_a_parse_error() {
        let err = parse_dot_plot("%data\n1 x 0.5 ubox\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidDotPlotEntry {
                line: 2,
                content: "1 x 0.5 ubox".to_string()
            }
        );
    }

    #[test]
    fn extraction_deletes_the_dump() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DOT_PLOT_FILE);
        fs::write(&path, DOT_PS_EXCERPT).unwrap();

        let pairs = extract_from_file(&path).unwrap();
        assert_eq!(pairs.len(), 3);
        assert!(!path.exists());
    }

    #[test]
    fn malformed_dump_is_still_deleted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DOT_PLOT_FILE);
        fs::write(&path, "1 2 nan? ubox\n").unwrap();

        assert!(extract_from_file(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn missing_dump_is_reported() {
        let dir = tempdir().unwrap();
        let result = extract_from_file(&dir.path().join(DOT_PLOT_FILE));
        assert!(matches!(result, Err(ParseError::UnreadableDotPlot { .. })));
    }

    #[test]
    fn removal_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.ps");
        assert!(remove_if_exists(&path).is_ok());
        fs::write(&path, "").unwrap();
        assert!(remove_if_exists(&path).is_ok());
        assert!(remove_if_exists(&path).is_ok());
    }
}
