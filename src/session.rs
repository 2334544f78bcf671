use crate::problem::ProblemKind;
use crate::tier::Tier;
use itertools::Itertools;

/// One answered problem within the current session.
#[derive(Debug, Clone, Copy)]
pub struct Attempt {
    pub tier: Tier,
    pub kind: ProblemKind,
    pub correct: bool,
}

/// In-memory tally of the running session. Nothing here survives the
/// process; cross-session persistence is deliberately absent.
#[derive(Debug, Default, Clone)]
pub struct SessionLog {
    attempts: Vec<Attempt>,
    best_streak: u32,
}

impl SessionLog {
    pub fn record(&mut self, attempt: Attempt, streak_after: u32) {
        self.attempts.push(attempt);
        if streak_after > self.best_streak {
            self.best_streak = streak_after;
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.len()
    }

    pub fn correct(&self) -> usize {
        self.attempts.iter().filter(|a| a.correct).count()
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    /// Percentage of correct answers, 0.0 when nothing was answered yet.
    pub fn accuracy(&self) -> f64 {
        if self.attempts.is_empty() {
            return 0.0;
        }
        self.correct() as f64 / self.attempts.len() as f64 * 100.0
    }

    /// Attempt counts per tier, in tier declaration order.
    pub fn per_tier(&self) -> Vec<(Tier, usize)> {
        let counts = self.attempts.iter().counts_by(|a| a.tier);
        [Tier::Easy, Tier::Medium, Tier::Hard]
            .into_iter()
            .filter_map(|t| counts.get(&t).map(|&n| (t, n)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(tier: Tier, correct: bool) -> Attempt {
        Attempt {
            tier,
            kind: ProblemKind::Normal,
            correct,
        }
    }

    #[test]
    fn test_empty_log() {
        let log = SessionLog::default();
        assert_eq!(log.attempts(), 0);
        assert_eq!(log.correct(), 0);
        assert_eq!(log.best_streak(), 0);
        assert_eq!(log.accuracy(), 0.0);
        assert!(log.per_tier().is_empty());
    }

    #[test]
    fn test_tally_and_accuracy() {
        let mut log = SessionLog::default();
        log.record(attempt(Tier::Easy, true), 1);
        log.record(attempt(Tier::Easy, true), 2);
        log.record(attempt(Tier::Easy, false), 0);
        log.record(attempt(Tier::Medium, true), 1);

        assert_eq!(log.attempts(), 4);
        assert_eq!(log.correct(), 3);
        assert_eq!(log.accuracy(), 75.0);
    }

    #[test]
    fn test_best_streak_is_high_water_mark() {
        let mut log = SessionLog::default();
        log.record(attempt(Tier::Easy, true), 1);
        log.record(attempt(Tier::Easy, true), 2);
        log.record(attempt(Tier::Easy, true), 3);
        log.record(attempt(Tier::Easy, false), 0);
        log.record(attempt(Tier::Easy, true), 1);

        assert_eq!(log.best_streak(), 3);
    }

    #[test]
    fn test_per_tier_counts_in_order() {
        let mut log = SessionLog::default();
        log.record(attempt(Tier::Hard, true), 1);
        log.record(attempt(Tier::Easy, true), 2);
        log.record(attempt(Tier::Hard, false), 0);

        assert_eq!(
            log.per_tier(),
            vec![(Tier::Easy, 1), (Tier::Hard, 2)]
        );
    }
}
