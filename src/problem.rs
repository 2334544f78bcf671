use crate::tier::Tier;
use crate::util::parse_answer;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Default absolute tolerance for fraction answers. A product choice, not a
/// derived constant; overridable via config or `--tolerance`.
pub const DEFAULT_FRACTION_TOLERANCE: f64 = 0.01;

/// Denominator range for fraction questions (asking the decimal value of 1/n).
const FRACTION_DENOM_MIN: u32 = 2;
const FRACTION_DENOM_MAX: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Percent,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "×",
            Operator::Div => "÷",
            Operator::Percent => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    Normal,
    Fraction,
    Percentage,
}

/// A single question. Replaced wholesale on every advance, never mutated.
/// Fraction problems carry the denominator in `num1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Problem {
    pub num1: u32,
    pub num2: u32,
    pub operator: Operator,
    pub kind: ProblemKind,
}

impl Problem {
    /// Draw a fresh problem for the tier. Pure in (tier spec, rng).
    pub fn generate(tier: Tier, rng: &mut impl Rng) -> Self {
        let spec = tier.spec();

        if spec.fraction_chance > 0.0 && rng.gen_bool(spec.fraction_chance) {
            return Self {
                num1: rng.gen_range(FRACTION_DENOM_MIN..=FRACTION_DENOM_MAX),
                num2: 1,
                operator: Operator::Div,
                kind: ProblemKind::Fraction,
            };
        }

        let operator = spec
            .operators
            .choose(rng)
            .copied()
            .unwrap_or(Operator::Add);

        let (num1, num2) = match operator {
            Operator::Add => (
                rng.gen_range(1..=spec.operand_max),
                rng.gen_range(1..=spec.operand_max),
            ),
            Operator::Sub => {
                let a = rng.gen_range(1..=spec.operand_max);
                let b = rng.gen_range(1..=spec.operand_max);
                // Keep the result non-negative.
                (a.max(b), a.min(b))
            }
            Operator::Mul => (
                rng.gen_range(1..=spec.operand_max),
                rng.gen_range(1..=spec.mul_max),
            ),
            Operator::Div => {
                let divisor = rng.gen_range(2..=spec.div_divisor_max);
                let quotient = rng.gen_range(1..=spec.div_quotient_max);
                (divisor * quotient, divisor)
            }
            Operator::Percent => (
                rng.gen_range(1..=spec.percent_base_max),
                spec.percent_choices.choose(rng).copied().unwrap_or(50),
            ),
        };

        let kind = match operator {
            Operator::Percent => ProblemKind::Percentage,
            _ => ProblemKind::Normal,
        };

        Self {
            num1,
            num2,
            operator,
            kind,
        }
    }

    /// The exact expected answer.
    pub fn answer(&self) -> f64 {
        match self.kind {
            ProblemKind::Fraction => 1.0 / self.num1 as f64,
            ProblemKind::Percentage => self.num1 as f64 * self.num2 as f64 / 100.0,
            ProblemKind::Normal => {
                let (a, b) = (self.num1 as f64, self.num2 as f64);
                match self.operator {
                    Operator::Add => a + b,
                    Operator::Sub => a - b,
                    Operator::Mul => a * b,
                    Operator::Div => a / b,
                    Operator::Percent => a * b / 100.0,
                }
            }
        }
    }

    /// Check a raw answer string. Unparseable input is simply wrong.
    ///
    /// Fraction answers within `tolerance` of the exact value are snapped to
    /// it, so "0.33" passes for 1/3 while "0.3" does not (at the default
    /// tolerance). The comparison is strict: a guess exactly `tolerance` away
    /// is rejected.
    pub fn check(&self, raw: &str, tolerance: f64) -> bool {
        let Some(guess) = parse_answer(raw) else {
            return false;
        };

        match self.kind {
            ProblemKind::Fraction => (guess - self.answer()).abs() < tolerance,
            _ => guess == self.answer(),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ProblemKind::Fraction => write!(f, "Hoeveel is 1/{} als decimaal?", self.num1),
            ProblemKind::Percentage => write!(f, "Hoeveel is {}% van {}?", self.num2, self.num1),
            ProblemKind::Normal => write!(
                f,
                "{} {} {} = ?",
                self.num1,
                self.operator.symbol(),
                self.num2
            ),
        }
    }
}
