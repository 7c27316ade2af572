use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::QuizType;

/// A finished session as stored in the history list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSessionRecord {
    pub session_id: String,
    pub quiz_type: QuizType,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub score: u32,
    pub star_rating: u8,
}

impl QuizSessionRecord {
    pub fn duration_millis(&self) -> u64 {
        u64::try_from((self.end_time - self.start_time).num_milliseconds()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> QuizSessionRecord {
        QuizSessionRecord {
            session_id: "test-session".to_string(),
            quiz_type: QuizType::Make10,
            start_time: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 3, 1, 9, 2, 30).unwrap(),
            total_questions: 10,
            correct_answers: 8,
            score: 80,
            star_rating: 4,
        }
    }

    #[test]
    fn test_duration() {
        assert_eq!(record().duration_millis(), 150_000);
    }

    #[test]
    fn test_reads_web_app_json() {
        let json = r#"{
            "sessionId": "make10-1740819600000",
            "quizType": "make10",
            "startTime": "2025-03-01T09:00:00.000Z",
            "endTime": "2025-03-01T09:02:30.000Z",
            "totalQuestions": 10,
            "correctAnswers": 8,
            "score": 80,
            "starRating": 4
        }"#;
        let parsed: QuizSessionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.quiz_type, QuizType::Make10);
        assert_eq!(parsed.duration_millis(), 150_000);
        assert_eq!(parsed.star_rating, 4);
    }
}
