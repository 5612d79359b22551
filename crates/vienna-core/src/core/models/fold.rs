use crate::core::io::ParseError;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// One entry of the sparse base-pair probability matrix.
///
/// Positions are 1-indexed with `i < j`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct BasePairProb {
    pub i: usize,
    pub j: usize,
    pub probability: f64,
}

impl BasePairProb {
    pub fn new(i: usize, j: usize, probability: f64) -> Self {
        Self { i, j, probability }
    }

    /// Converts a dense, 0-indexed probability matrix into 1-indexed sparse
    /// triples, reading the upper triangle only and dropping zero entries.
    pub fn from_dense(matrix: &DMatrix<f64>) -> Vec<Self> {
        let n = matrix.nrows().min(matrix.ncols());
        let mut pairs = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let p = matrix[(i, j)];
                if p != 0.0 {
                    pairs.push(Self::new(i + 1, j + 1, p));
                }
            }
        }
        pairs
    }
}

/// Result of a single `RNAfold` or `RNAcofold` run.
#[derive(Debug, Clone, PartialEq, PartialOrd, Serialize)]
pub struct FoldResult {
    dot_bracket: String,
    mfe: f64,
    ensemble_diversity: f64,
    bp_probs: Vec<BasePairProb>,
}

impl FoldResult {
    /// Builds a result, checking every pair against the structure length.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::PairOutOfRange`] if a pair violates
    /// `1 <= i < j <= n` or `0 < p <= 1`, where `n` excludes the strand separator.
    pub fn new(
        dot_bracket: String,
        mfe: f64,
        ensemble_diversity: f64,
        bp_probs: Vec<BasePairProb>,
    ) -> Result<Self, ParseError> {
        let length = dot_bracket.chars().filter(|&c| c != '&').count();
        if let Some(bad) = bp_probs.iter().find(|bp| {
            bp.i < 1
                || bp.i >= bp.j
                || bp.j > length
                || !(bp.probability > 0.0 && bp.probability <= 1.0)
        }) {
            return Err(ParseError::PairOutOfRange {
                i: bad.i,
                j: bad.j,
                probability: bad.probability,
                length,
            });
        }
        Ok(Self {
            dot_bracket,
            mfe,
            ensemble_diversity,
            bp_probs,
        })
    }

    pub fn dot_bracket(&self) -> &str {
        &self.dot_bracket
    }

    /// Minimum free energy in kcal/mol.
    pub fn mfe(&self) -> f64 {
        self.mfe
    }

    /// Trailing ensemble statistic of the partition-function run.
    ///
    /// For `RNAfold` this is the ensemble diversity. For `RNAcofold` it is
    /// whatever number ends the engine's last line (the binding free energy
    /// on current releases) and is not a diversity. It is `0.0` when the
    /// engine did not report a value.
    pub fn ensemble_diversity(&self) -> f64 {
        self.ensemble_diversity
    }

    pub fn bp_probs(&self) -> &[BasePairProb] {
        &self.bp_probs
    }

    /// Number of nucleotides, not counting the strand separator.
    pub fn len(&self) -> usize {
        self.dot_bracket.chars().filter(|&c| c != '&').count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dense symmetric probability matrix, 0-indexed. Pairs that were not
    /// reported are zero.
    pub fn probability_matrix(&self) -> DMatrix<f64> {
        let n = self.len();
        let mut matrix = DMatrix::zeros(n, n);
        for bp in &self.bp_probs {
            matrix[(bp.i - 1, bp.j - 1)] = bp.probability;
            matrix[(bp.j - 1, bp.i - 1)] = bp.probability;
        }
        matrix
    }

    pub fn into_parts(self) -> (String, f64, f64, Vec<BasePairProb>) {
        (
            self.dot_bracket,
            self.mfe,
            self.ensemble_diversity,
            self.bp_probs,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hairpin(bp_probs: Vec<BasePairProb>) -> Result<FoldResult, ParseError> {
        FoldResult::new("((((....))))".to_string(), -5.4, 0.56, bp_probs)
    }

    #[test]
    fn new_accepts_pairs_within_bounds() {
        let result = hairpin(vec![BasePairProb::new(1, 12, 0.99), BasePairProb::new(4, 9, 0.5)])
            .unwrap();
        assert_eq!(result.dot_bracket(), "((((....))))");
        assert_eq!(result.len(), 12);
        assert_eq!(result.bp_probs().len(), 2);
    }

    #[test]
    fn new_rejects_pair_past_sequence_end() {
        let err = hairpin(vec![BasePairProb::new(1, 13, 0.5)]).unwrap_err();
        assert!(matches!(err, ParseError::PairOutOfRange { j: 13, length: 12, .. }));
    }

    #[test]
    fn new_rejects_reversed_and_zero_based_pairs() {
        assert!(hairpin(vec![BasePairProb::new(5, 2, 0.5)]).is_err());
        assert!(hairpin(vec![BasePairProb::new(0, 2, 0.5)]).is_err());
        assert!(hairpin(vec![BasePairProb::new(3, 3, 0.5)]).is_err());
    }

    #[test]
    fn new_rejects_probability_outside_unit_interval() {
        assert!(hairpin(vec![BasePairProb::new(1, 12, 0.0)]).is_err());
        assert!(hairpin(vec![BasePairProb::new(1, 12, 1.2)]).is_err());
        assert!(hairpin(vec![BasePairProb::new(1, 12, f64::NAN)]).is_err());
    }

    #[test]
    fn length_ignores_strand_separator() {
        let result = FoldResult::new("((((&...))))".to_string(), -2.0, 0.0, vec![]).unwrap();
        assert_eq!(result.len(), 11);
        assert!(!result.is_empty());
    }

    #[test]
    fn probability_matrix_is_symmetric_and_zero_filled() {
        let result = hairpin(vec![BasePairProb::new(1, 12, 0.9), BasePairProb::new(2, 11, 0.8)])
            .unwrap();
        let m = result.probability_matrix();
        assert_eq!(m.nrows(), 12);
        assert_eq!(m[(0, 11)], 0.9);
        assert_eq!(m[(11, 0)], 0.9);
        assert_eq!(m[(1, 10)], 0.8);
        assert_eq!(m[(5, 6)], 0.0);
    }

    #[test]
    fn from_dense_shifts_to_one_based_upper_triangle() {
        let mut m = DMatrix::zeros(4, 4);
        m[(0, 3)] = 0.7;
        m[(3, 0)] = 0.7;
        m[(1, 2)] = 0.25;
        let pairs = BasePairProb::from_dense(&m);
        assert_eq!(
            pairs,
            vec![BasePairProb::new(1, 4, 0.7), BasePairProb::new(2, 3, 0.25)]
        );
    }

    #[test]
    fn results_order_by_structure_first() {
        let a = FoldResult::new("(...)".to_string(), -1.0, 0.0, vec![]).unwrap();
        let b = FoldResult::new(".....".to_string(), -3.0, 0.0, vec![]).unwrap();
        assert!(a < b);
    }
}
