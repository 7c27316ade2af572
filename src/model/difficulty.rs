use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Default for DifficultyLevel {
    fn default() -> Self {
        DifficultyLevel::Hard
    }
}

impl DifficultyLevel {
    pub fn all() -> Vec<DifficultyLevel> {
        vec![
            DifficultyLevel::Easy,
            DifficultyLevel::Medium,
            DifficultyLevel::Hard,
            DifficultyLevel::Expert,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            DifficultyLevel::Easy => 0,
            DifficultyLevel::Medium => 1,
            DifficultyLevel::Hard => 2,
            DifficultyLevel::Expert => 3,
        }
    }

    pub fn from_index(index: usize) -> DifficultyLevel {
        match index {
            0 => DifficultyLevel::Easy,
            1 => DifficultyLevel::Medium,
            2 => DifficultyLevel::Hard,
            3 => DifficultyLevel::Expert,
            _ => DifficultyLevel::Hard,
        }
    }

    /// Upper bound (inclusive) on `num1 + num2` for generated problems
    pub fn max_sum(&self) -> u32 {
        match self {
            DifficultyLevel::Easy => 10,
            DifficultyLevel::Medium => 20,
            DifficultyLevel::Hard => 50,
            DifficultyLevel::Expert => 100,
        }
    }

    /// Easy sums stay below ten, so splitting into tens and units adds nothing
    pub fn shows_decomposition(&self) -> bool {
        !matches!(self, DifficultyLevel::Easy)
    }

    /// Largest value a wrong answer choice may take
    pub fn max_answer_value(&self) -> u32 {
        self.max_sum()
    }

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "Up to 10",
            DifficultyLevel::Medium => "Up to 20",
            DifficultyLevel::Hard => "Up to 50",
            DifficultyLevel::Expert => "Up to 100",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Medium => "medium",
            DifficultyLevel::Hard => "hard",
            DifficultyLevel::Expert => "expert",
        };
        write!(f, "{}", name)
    }
}
