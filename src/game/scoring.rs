use log::trace;

use crate::model::{QuizSessionRecord, QuizSessionState, UserStats};

pub const MAX_STARS: u8 = 5;

/// Percentage of correct answers, rounded half away from zero (7/9 -> 78).
pub fn calculate_score(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(correct) / f64::from(total) * 100.0).round() as u32
}

/// 5 for a perfect run, then 4/3/2 at 80/60/40 percent, otherwise 1.
pub fn calculate_star_rating(correct: u32, total: u32) -> u8 {
    let (correct, total) = (u64::from(correct), u64::from(total));
    if correct == total {
        MAX_STARS
    } else if correct * 10 >= total * 8 {
        4
    } else if correct * 10 >= total * 6 {
        3
    } else if correct * 10 >= total * 4 {
        2
    } else {
        1
    }
}

pub fn star_message(stars: u8) -> &'static str {
    match stars {
        MAX_STARS..=u8::MAX => "Perfect!",
        4 => "Great!",
        3 => "Good job!",
        2 => "Keep practicing!",
        _ => "Try again!",
    }
}

/// `(old_average * old_count + value) / (old_count + 1)`
fn running_average(old_average: f64, old_count: u32, value: f64) -> f64 {
    let old_count = f64::from(old_count);
    (old_average * old_count + value) / (old_count + 1.0)
}

/// Folds one finished session into the running statistics.
pub fn update_stats(existing: &UserStats, session: &QuizSessionRecord) -> UserStats {
    let mut stats = existing.clone();
    let score = f64::from(session.score);
    let stars = f64::from(session.star_rating);

    let completed = stats.total_quizzes_completed;
    stats.overall_accuracy = running_average(stats.overall_accuracy, completed, score);
    stats.average_star_rating = running_average(stats.average_star_rating, completed, stars);
    stats.total_quizzes_completed += 1;
    stats.total_questions_answered += session.total_questions;
    stats.total_correct_answers += session.correct_answers;
    stats.last_activity_date = Some(session.end_time);

    let type_stats = stats.quiz_type_stats.get_mut(session.quiz_type);
    let completed = type_stats.quizzes_completed;
    type_stats.average_score = running_average(type_stats.average_score, completed, score);
    type_stats.average_star_rating =
        running_average(type_stats.average_star_rating, completed, stars);
    type_stats.quizzes_completed += 1;
    type_stats.best_score = type_stats.best_score.max(session.score);
    type_stats.total_time_spent += session.duration_millis();

    trace!(target: "scoring", "Updated stats: {:?}", stats);
    stats
}

/// Summary record for a session that has reached its end.
pub fn build_record(session: &QuizSessionState) -> QuizSessionRecord {
    let total = session.total_questions() as u32;
    let correct = session.correct_count() as u32;
    let start_time = session.timer_state.start_time();
    QuizSessionRecord {
        session_id: session.session_id.to_string(),
        quiz_type: session.kind.quiz_type(),
        start_time,
        end_time: session.timer_state.end_time().unwrap_or(start_time),
        total_questions: total,
        correct_answers: correct,
        score: calculate_score(correct, total),
        star_rating: calculate_star_rating(correct, total),
    }
}
