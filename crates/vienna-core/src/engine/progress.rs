/// Events emitted while [`Vienna::fold_batch`](crate::Vienna::fold_batch)
/// works through its input. Indices are zero-based positions in the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    BatchStart { total: u64 },
    SequenceFolded { index: usize },
    SequenceFailed { index: usize, reason: String },
    BatchFinish { failed: usize },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards progress events to an optional callback; silent by default.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Reports the outcome of the sequence at `index`.
    pub fn report_outcome<T, E: std::fmt::Display>(&self, index: usize, outcome: &Result<T, E>) {
        if self.callback.is_none() {
            return;
        }
        self.report(match outcome {
            Ok(_) => Progress::SequenceFolded { index },
            Err(e) => Progress::SequenceFailed {
                index,
                reason: e.to_string(),
            },
        });
    }
}
