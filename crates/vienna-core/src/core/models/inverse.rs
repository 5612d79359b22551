use serde::Serialize;

/// One candidate returned by `RNAinverse`.
#[derive(Debug, Clone, PartialEq, PartialOrd, Serialize)]
pub struct SeqScore {
    pub sequence: String,
    pub score: f64,
}

/// Candidate sequences from an inverse-folding run, in engine output order.
///
/// Sequences are unique and the collection never exceeds the solution count
/// requested when it was collected.
#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct InverseResult {
    seq_scores: Vec<SeqScore>,
}

impl InverseResult {
    pub(crate) fn new(seq_scores: Vec<SeqScore>) -> Self {
        Self { seq_scores }
    }

    pub fn len(&self) -> usize {
        self.seq_scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq_scores.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SeqScore> {
        self.seq_scores.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeqScore> {
        self.seq_scores.iter()
    }

    pub fn sequences(&self) -> impl Iterator<Item = &str> {
        self.seq_scores.iter().map(|s| s.sequence.as_str())
    }

    /// Candidate with the lowest score, ties resolved by output order.
    pub fn best(&self) -> Option<&SeqScore> {
        self.seq_scores
            .iter()
            .min_by(|a, b| {
                a.score
                    .partial_cmp(&b.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

impl IntoIterator for InverseResult {
    type Item = SeqScore;
    type IntoIter = std::vec::IntoIter<SeqScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.seq_scores.into_iter()
    }
}

impl<'a> IntoIterator for &'a InverseResult {
    type Item = &'a SeqScore;
    type IntoIter = std::slice::Iter<'a, SeqScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.seq_scores.iter()
    }
}
