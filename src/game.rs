use crate::celebration::Celebration;
use crate::problem::Problem;
use crate::session::{Attempt, SessionLog};
use crate::streak::milestone_word;
use crate::tier::Tier;
use crate::util::is_answer_char;
use crate::TICK_RATE_MS;
use rand::Rng;

/// Notice shown after a wrong answer, cleared on the next edit.
pub const WRONG_ANSWER_NOTICE: &str = "Dat is niet helemaal goed. Probeer het nog een keer! 💪";

/// Keeps the answer box from growing past anything sensible.
const MAX_ANSWER_LEN: usize = 12;

#[derive(Clone, Debug, Copy, PartialEq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// The running game: current problem, answer buffer, score and streak, and
/// the delayed advance after a correct answer. One `Game` per session.
#[derive(Debug)]
pub struct Game {
    pub problem: Problem,
    pub tier: Tier,
    pub score: u32,
    pub streak: u32,
    pub answer: String,
    pub show_success: bool,
    pub notice: Option<&'static str>,
    pub celebration: Celebration,
    pub session: SessionLog,
    secs_until_advance: Option<f64>,
    tolerance: f64,
    advance_delay: f64,
}

impl Game {
    pub fn new(tier: Tier, tolerance: f64, advance_delay: f64) -> Self {
        let mut rng = rand::thread_rng();
        Self::with_rng(tier, tolerance, advance_delay, &mut rng)
    }

    pub fn with_rng(tier: Tier, tolerance: f64, advance_delay: f64, rng: &mut impl Rng) -> Self {
        Self {
            problem: Problem::generate(tier, rng),
            tier,
            score: 0,
            streak: 0,
            answer: String::new(),
            show_success: false,
            notice: None,
            celebration: Celebration::new(),
            session: SessionLog::default(),
            secs_until_advance: None,
            tolerance,
            advance_delay,
        }
    }

    /// An advance to the next problem is pending; input is ignored until it
    /// fires, so a second timer can never overlap the first.
    pub fn is_advancing(&self) -> bool {
        self.secs_until_advance.is_some()
    }

    pub fn write(&mut self, c: char) {
        if self.is_advancing() || !is_answer_char(c) || self.answer.len() >= MAX_ANSWER_LEN {
            return;
        }
        self.notice = None;
        self.answer.push(c);
    }

    pub fn backspace(&mut self) {
        if self.is_advancing() {
            return;
        }
        self.notice = None;
        self.answer.pop();
    }

    /// Evaluate the current answer against the current problem.
    ///
    /// Returns None when no evaluation happened (advance pending or empty
    /// buffer). On a correct answer the auto-advance timer starts; on a
    /// wrong one the problem stays and the retry notice is raised.
    pub fn submit(&mut self) -> Option<Outcome> {
        if self.is_advancing() || self.answer.is_empty() {
            return None;
        }

        let correct = self.problem.check(&self.answer, self.tolerance);
        let outcome = if correct {
            self.score += 1;
            self.streak += 1;
            self.show_success = true;
            self.secs_until_advance = Some(self.advance_delay);
            Outcome::Correct
        } else {
            self.streak = 0;
            self.notice = Some(WRONG_ANSWER_NOTICE);
            Outcome::Incorrect
        };

        self.session.record(
            Attempt {
                tier: self.tier,
                kind: self.problem.kind,
                correct,
            },
            self.streak,
        );

        Some(outcome)
    }

    /// Fire the milestone celebration when the streak just hit one.
    pub fn start_celebration_if_milestone(&mut self, width: u16, height: u16) {
        if !self.show_success {
            return;
        }
        if let Some(word) = milestone_word(self.streak) {
            self.celebration.start(word, width, height);
        }
    }

    /// Advance timers by one tick; moves to the next problem when the
    /// post-goal delay has elapsed.
    pub fn on_tick(&mut self) {
        self.celebration.update();

        if let Some(secs) = self.secs_until_advance {
            let remaining = secs - TICK_RATE_MS as f64 / 1000.0;
            if remaining <= 0.0 {
                self.next_problem();
            } else {
                self.secs_until_advance = Some(remaining);
            }
        }
    }

    /// Replace the current problem and clear the transient answer state.
    pub fn next_problem(&mut self) {
        let mut rng = rand::thread_rng();
        self.next_problem_with_rng(&mut rng);
    }

    pub fn next_problem_with_rng(&mut self, rng: &mut impl Rng) {
        self.problem = Problem::generate(self.tier, rng);
        self.answer.clear();
        self.show_success = false;
        self.notice = None;
        self.secs_until_advance = None;
    }

    /// Switch tier and deal a fresh problem for it. Score and streak carry
    /// over; the child keeps their run when moving up a division.
    pub fn set_tier(&mut self, tier: Tier) {
        self.tier = tier;
        self.next_problem();
    }
}
