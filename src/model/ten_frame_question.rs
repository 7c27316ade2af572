use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::QuizType;

pub const TEN: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenFrameMode {
    Recognition,
    Make10,
}

impl TenFrameMode {
    /// Values a question number may take in this mode
    pub fn number_range(&self) -> RangeInclusive<u32> {
        match self {
            TenFrameMode::Recognition => 1..=TEN,
            TenFrameMode::Make10 => 1..=TEN - 1,
        }
    }

    /// Largest value an answer choice may take in this mode
    pub fn max_choice(&self) -> u32 {
        *self.number_range().end()
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            TenFrameMode::Recognition => "What number is this?",
            TenFrameMode::Make10 => "How many more to make 10?",
        }
    }

    pub fn quiz_type(&self) -> QuizType {
        match self {
            TenFrameMode::Recognition => QuizType::Recognition,
            TenFrameMode::Make10 => QuizType::Make10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenFrameQuestion {
    pub number: u32,
    pub correct_answer: u32,
}

impl TenFrameQuestion {
    pub fn recognition(number: u32) -> Self {
        Self {
            number,
            correct_answer: number,
        }
    }

    pub fn make10(number: u32) -> Self {
        Self {
            number,
            correct_answer: TEN - number,
        }
    }

    pub fn for_mode(mode: TenFrameMode, number: u32) -> Self {
        match mode {
            TenFrameMode::Recognition => Self::recognition(number),
            TenFrameMode::Make10 => Self::make10(number),
        }
    }
}
