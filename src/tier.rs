use crate::problem::Operator;
use clap::ValueEnum;

/// Difficulty tier, named after Dutch youth football divisions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, strum_macros::Display)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

/// Generation rules for one tier. All ranges are inclusive; plain operands
/// are drawn from [1, operand_max].
#[derive(Debug, Clone, Copy)]
pub struct TierSpec {
    pub operators: &'static [Operator],
    pub operand_max: u32,
    /// Cap on the second operand for multiplication.
    pub mul_max: u32,
    /// Divisor range for division is [2, div_divisor_max]; the dividend is
    /// divisor times a quotient in [1, div_quotient_max].
    pub div_divisor_max: u32,
    pub div_quotient_max: u32,
    /// Probability that the problem is overridden to a fraction question.
    pub fraction_chance: f64,
    /// Percentages available for % problems (empty when % is not offered).
    pub percent_choices: &'static [u32],
    /// Base operand range for % problems is [1, percent_base_max].
    pub percent_base_max: u32,
}

const EASY: TierSpec = TierSpec {
    operators: &[Operator::Add, Operator::Sub, Operator::Mul],
    operand_max: 20,
    mul_max: 10,
    div_divisor_max: 0,
    div_quotient_max: 0,
    fraction_chance: 0.0,
    percent_choices: &[],
    percent_base_max: 0,
};

const MEDIUM: TierSpec = TierSpec {
    operators: &[Operator::Add, Operator::Sub, Operator::Mul, Operator::Div],
    operand_max: 20,
    mul_max: 12,
    div_divisor_max: 11,
    div_quotient_max: 10,
    fraction_chance: 0.25,
    percent_choices: &[],
    percent_base_max: 0,
};

const HARD: TierSpec = TierSpec {
    operators: &[
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Percent,
    ],
    operand_max: 50,
    mul_max: 20,
    div_divisor_max: 13,
    div_quotient_max: 20,
    fraction_chance: 0.33,
    percent_choices: &[10, 20, 25, 50, 75],
    percent_base_max: 200,
};

impl Tier {
    pub fn spec(&self) -> &'static TierSpec {
        match self {
            Tier::Easy => &EASY,
            Tier::Medium => &MEDIUM,
            Tier::Hard => &HARD,
        }
    }

    /// Division label shown in the tier badge.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Easy => "Pupillen",
            Tier::Medium => "Junioren",
            Tier::Hard => "Champions League",
        }
    }

    /// Next tier in the cycle easy -> medium -> hard -> easy.
    pub fn next(&self) -> Tier {
        match self {
            Tier::Easy => Tier::Medium,
            Tier::Medium => Tier::Hard,
            Tier::Hard => Tier::Easy,
        }
    }

    pub fn from_name(name: &str) -> Option<Tier> {
        match name.to_lowercase().as_str() {
            "easy" => Some(Tier::Easy),
            "medium" => Some(Tier::Medium),
            "hard" => Some(Tier::Hard),
            _ => None,
        }
    }
}
