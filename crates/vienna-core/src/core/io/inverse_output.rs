//! Collection of `RNAinverse` candidates.
//!
//! The engine prints one candidate per line as `<sequence> <score>`. Banner
//! and diagnostic lines have a different number of fields and are skipped.

use super::ParseError;
use crate::core::models::{InverseResult, SeqScore};
use std::collections::HashSet;
use tracing::trace;

/// Collects up to `max_solutions` distinct candidates in output order.
///
/// Lines after the last accepted candidate are not parsed.
pub fn collect_inverse_output(
    stdout: &str,
    max_solutions: usize,
) -> Result<InverseResult, ParseError> {
    let mut seen = HashSet::new();
    let mut seq_scores = Vec::new();

    for (line_num, line) in stdout.lines().enumerate() {
        if seq_scores.len() >= max_solutions {
            break;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [sequence, score] = fields.as_slice() else {
            continue;
        };
        let score: f64 = score.parse().map_err(|_| ParseError::InvalidScore {
            line: line_num + 1,
            value: score.to_string(),
        })?;
        if !seen.insert(*sequence) {
            trace!(sequence, "Skipping duplicate inverse-folding candidate.");
            continue;
        }
        seq_scores.push(SeqScore {
            sequence: sequence.to_string(),
            score,
        });
    }

    Ok(InverseResult::new(seq_scores))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_two_field_lines_in_order() {
        let stdout = "\
GGGgCUAGAAAUAGaCCC   0
CCCgAGAAUUCUCUaGGG   2
";
        let result = collect_inverse_output(stdout, 10).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.get(0).unwrap().sequence, "GGGgCUAGAAAUAGaCCC");
        assert_eq!(result.get(1).unwrap().score, 2.0);
    }

    #[test]
    fn skips_banner_and_blank_lines() {
        let stdout = "\
Input structure & start string (lower case letters for const positions)

GGGgCUAGAAAUAGaCCC   0
GGGgCUAGAAAUAGaCCC   0  (0.123) d= 1.5
";
        let result = collect_inverse_output(stdout, 10).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn duplicates_are_dropped() {
        let stdout = "AAAGGG 1\nAAAGGG 0\nCCCUUU 3\n";
        let result = collect_inverse_output(stdout, 10).unwrap();
        let seqs: Vec<_> = result.sequences().collect();
        assert_eq!(seqs, vec!["AAAGGG", "CCCUUU"]);
        assert_eq!(result.get(0).unwrap().score, 1.0);
    }

    #[test]
    fn stops_at_requested_count_without_parsing_the_rest() {
        let stdout = "AAAGGG 1\nCCCUUU 2\nGGGAAA not-a-number\n";
        let result = collect_inverse_output(stdout, 2).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn non_numeric_score_is_a_parse_error() {
        let err = collect_inverse_output("AAAGGG 1\nCCCUUU x\n", 5).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidScore {
                line: 2,
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn zero_solutions_requested_yields_empty_result() {
        let result = collect_inverse_output("AAAGGG 1\n", 0).unwrap();
        assert!(result.is_empty());
    }
}
