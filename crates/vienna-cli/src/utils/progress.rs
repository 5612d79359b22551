use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use vienna::engine::progress::{Progress, ProgressCallback};

/// Renders core progress events as a progress bar on stderr.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new(visible: bool) -> Self {
        let target = if visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        let pb = ProgressBar::with_draw_target(Some(0), target).with_style(bar_style());
        pb.finish_and_clear();
        Self { pb }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::BatchStart { total } => {
                pb.reset();
                pb.set_length(total);
                pb.set_position(0);
                pb.set_style(bar_style());
                pb.set_message("Folding");
            }
            Progress::SequenceFolded { .. } => pb.inc(1),
            Progress::SequenceFailed { index, reason } => {
                pb.println(format!("  sequence {} failed: {}", index + 1, reason));
                pb.inc(1);
            }
            Progress::BatchFinish { failed } => {
                if failed == 0 {
                    pb.finish_with_message("done");
                } else {
                    pb.finish_with_message(format!("{} failed", failed));
                }
            }
        })
    }
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg:<12} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .with_key("eta", |state: &ProgressState, w: &mut dyn std::fmt::Write| {
            let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
        })
        .progress_chars("##-")
}
