use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DifficultyLevel, TenFrameMode};

/// Persisted discriminator for the three practice flows
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum QuizType {
    Addition,
    Recognition,
    Make10,
}

impl QuizType {
    pub fn all() -> Vec<QuizType> {
        vec![QuizType::Addition, QuizType::Recognition, QuizType::Make10]
    }
}

impl fmt::Display for QuizType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuizType::Addition => "addition",
            QuizType::Recognition => "recognition",
            QuizType::Make10 => "make10",
        };
        write!(f, "{}", name)
    }
}

/// What a session is generated from; carries the knobs each flow needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizKind {
    Addition(DifficultyLevel),
    TenFrame(TenFrameMode),
}

impl QuizKind {
    pub fn quiz_type(&self) -> QuizType {
        match self {
            QuizKind::Addition(_) => QuizType::Addition,
            QuizKind::TenFrame(mode) => mode.quiz_type(),
        }
    }
}
