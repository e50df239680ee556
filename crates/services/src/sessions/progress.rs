use quiz_core::model::Track;

/// Position inside the current question track, for the "k / N" indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub track: Track,
    /// Questions of this track already answered.
    pub answered: usize,
    pub total: usize,
}

impl QuizProgress {
    /// 1-based number of the question on screen.
    #[must_use]
    pub fn number(&self) -> usize {
        self.answered + 1
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }

    /// Completed share of the track in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.answered as f32 / self.total as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_one() {
        let progress = QuizProgress {
            track: Track::Ideal,
            answered: 3,
            total: 13,
        };
        assert_eq!(progress.number(), 4);
        assert_eq!(progress.remaining(), 10);
    }

    #[test]
    fn fraction_handles_empty_tracks() {
        let progress = QuizProgress {
            track: Track::Current,
            answered: 0,
            total: 0,
        };
        assert!(progress.fraction().abs() < f32::EPSILON);
    }
}
