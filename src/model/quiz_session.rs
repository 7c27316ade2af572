use std::time::SystemTime;
use uuid::Uuid;

use super::{MathProblem, QuizKind, TenFrameQuestion, TimerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    Addition(MathProblem),
    TenFrame(TenFrameQuestion),
}

impl Question {
    pub fn correct_answer(&self) -> u32 {
        match self {
            Question::Addition(problem) => problem.expected_answer,
            Question::TenFrame(question) => question.correct_answer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionResult {
    pub question_index: usize,
    pub question: Question,
    pub correct: bool,
    pub interactions: u32,
    /// milliseconds
    pub time_spent: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Active,
    Transition,
    Summary,
}

#[derive(Debug, Clone)]
pub struct QuizSessionState {
    pub session_id: Uuid,
    pub kind: QuizKind,
    pub questions: Vec<Question>,
    pub current_question_index: usize,
    pub session_results: Vec<QuestionResult>,
    pub session_phase: SessionPhase,
    pub timer_state: TimerState,
}

impl QuizSessionState {
    pub fn new(kind: QuizKind, questions: Vec<Question>, now: SystemTime) -> Self {
        let session_phase = if questions.is_empty() {
            SessionPhase::Summary
        } else {
            SessionPhase::Active
        };
        let timer_state = TimerState::started(now);
        Self {
            session_id: Uuid::new_v4(),
            kind,
            questions,
            current_question_index: 0,
            session_results: Vec::new(),
            session_phase,
            timer_state: if session_phase == SessionPhase::Summary {
                timer_state.ended(now)
            } else {
                timer_state
            },
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.session_phase == SessionPhase::Summary {
            return None;
        }
        self.questions.get(self.current_question_index)
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn correct_count(&self) -> usize {
        self.session_results.iter().filter(|r| r.correct).count()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_question_index + 1 == self.questions.len()
    }
}
