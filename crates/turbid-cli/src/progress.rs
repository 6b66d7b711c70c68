use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use turbid_core::pipeline::{RestorationReporter, RestorationStage};
use turbid_core::restore::RestorationMethod;

/// Spinner that shows the current restoration stage and prints a warning
/// line when an operator falls back to a constant image.
pub struct StageReporter {
    pb: ProgressBar,
}

impl StageReporter {
    pub fn spinner() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

impl RestorationReporter for StageReporter {
    fn begin_stage(&self, stage: RestorationStage) {
        self.pb.set_message(stage.to_string());
    }

    fn degenerate_output(&self, method: RestorationMethod, fallback: u8) {
        let warn = Style::new().yellow();
        self.pb.println(format!(
            "  {} {method} produced a flat result; using constant {fallback}",
            warn.apply_to("warning:")
        ));
    }
}
