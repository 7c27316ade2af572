use std::time::SystemTime;
use uuid::Uuid;

use super::{QuizSessionRecord, SessionPhase, SlotId};

/// Learner actions and clock ticks fed into the session controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizCommand {
    SelectNumber(SlotId),
    SelectAnswer(u32),
    TransitionComplete,
    TryAgain,
    Tick(SystemTime),
}

/// Notifications published by the session controller
#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    SessionStarted {
        session_id: Uuid,
        total_questions: usize,
    },
    NumberDecomposed {
        slot: SlotId,
        tens: u32,
        units: u32,
    },
    ChoicesPresented(Vec<u32>),
    AnswerRejected(u32),
    /// Fired after the feedback delay; this is the completion callback
    QuestionCompleted {
        correct: bool,
        interactions: u32,
    },
    PhaseChanged(SessionPhase),
    SessionCompleted(QuizSessionRecord),
    PersistenceFailed(String),
}
