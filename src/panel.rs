//! Scoring panel state: input text, loading flag, current score, alert.
//!
//! The panel does no I/O itself. The window drives it in two halves
//! (`begin_submit` on click, `finish` when the worker thread answers) while
//! the headless command and tests use `submit_with` to run both halves
//! inline.

use crate::error::ScoreResult;
use crate::net::scorer::Scorer;
use crate::score::{Score, Theme};

/// The one message shown for any scoring failure.
pub const ALERT_MESSAGE: &str = "Error analyzing text";

/// Footer link under the verdict.
pub const CONNECT_LABEL: &str = "Connect on LinkedIn";
pub const CONNECT_URL: &str = "https://www.linkedin.com/in/neel-dandiwala/";

#[derive(Debug, Default)]
pub struct ScoringPanel {
    pub text: String,
    loading: bool,
    score: Option<Score>,
    alert: Option<&'static str>,
}

impl ScoringPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit is enabled only with text entered and no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.text.is_empty() && !self.loading
    }

    /// Mark a request in flight and hand back the text to send.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.loading = true;
        log::info!("Scoring {} chars", self.text.chars().count());
        Some(self.text.clone())
    }

    /// Apply a scorer's answer. Failures keep the previous score and raise
    /// the alert; either way the loading flag is cleared.
    pub fn finish(&mut self, result: ScoreResult<Score>) {
        match result {
            Ok(score) => {
                log::info!("Score {} ({})", score, score.bucket().label());
                self.score = Some(score);
            }
            Err(e) => {
                log::error!("Error: {}", e);
                self.alert = Some(ALERT_MESSAGE);
            }
        }
        self.loading = false;
    }

    /// Run one full submit cycle on the calling thread.
    /// Returns `false` when submission was not allowed.
    pub fn submit_with(&mut self, scorer: &dyn Scorer) -> bool {
        let Some(text) = self.begin_submit() else {
            return false;
        };
        let result = scorer.score(&text);
        self.finish(result);
        true
    }

    /// The pending alert, handed out once.
    pub fn take_alert(&mut self) -> Option<&'static str> {
        self.alert.take()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn score(&self) -> Option<Score> {
        self.score
    }

    pub fn theme(&self) -> Theme {
        Theme::for_score(self.score)
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading {
            "Analyzing..."
        } else {
            "Check Post"
        }
    }

    /// "Cringe Score: 42.0%" once a score exists.
    pub fn score_line(&self) -> Option<String> {
        self.score.map(|s| format!("Cringe Score: {}%", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoreError;

    #[test]
    fn loading_blocks_second_submit() {
        let mut panel = ScoringPanel::new();
        panel.text = "hi".into();
        assert_eq!(panel.begin_submit().as_deref(), Some("hi"));
        assert!(panel.is_loading());
        assert_eq!(panel.button_label(), "Analyzing...");
        assert!(panel.begin_submit().is_none());
        panel.finish(Err(ScoreError::Status(500)));
        assert!(!panel.is_loading());
        assert_eq!(panel.button_label(), "Check Post");
    }

    #[test]
    fn score_line_formats_one_decimal() {
        let mut panel = ScoringPanel::new();
        assert_eq!(panel.score_line(), None);
        panel.finish(Ok(Score::from_percent(42.0)));
        assert_eq!(panel.score_line().as_deref(), Some("Cringe Score: 42.0%"));
    }
}
