use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::QuizType;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizTypeStats {
    pub quizzes_completed: u32,
    pub average_score: f64,
    pub average_star_rating: f64,
    pub best_score: u32,
    /// milliseconds
    pub total_time_spent: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizTypeStatsSet {
    pub addition: QuizTypeStats,
    pub recognition: QuizTypeStats,
    pub make10: QuizTypeStats,
}

impl QuizTypeStatsSet {
    pub fn get(&self, quiz_type: QuizType) -> &QuizTypeStats {
        match quiz_type {
            QuizType::Addition => &self.addition,
            QuizType::Recognition => &self.recognition,
            QuizType::Make10 => &self.make10,
        }
    }

    pub fn get_mut(&mut self, quiz_type: QuizType) -> &mut QuizTypeStats {
        match quiz_type {
            QuizType::Addition => &mut self.addition,
            QuizType::Recognition => &mut self.recognition,
            QuizType::Make10 => &mut self.make10,
        }
    }
}

/// Running totals across every completed session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub total_quizzes_completed: u32,
    pub total_questions_answered: u32,
    pub total_correct_answers: u32,
    pub overall_accuracy: f64,
    pub average_star_rating: f64,
    pub last_activity_date: Option<DateTime<Utc>>,
    pub quiz_type_stats: QuizTypeStatsSet,
}
