mod answer_choices;
mod difficulty;
mod interactive_problem_state;
mod math_problem;
mod quiz_event;
mod quiz_session;
mod quiz_type;
mod session_record;
mod ten_frame_question;
mod timer_state;
mod user_stats;

pub use answer_choices::{AnswerChoices, ChoiceOutcome};
pub use difficulty::DifficultyLevel;
pub use interactive_problem_state::{InteractiveProblemState, NumberSlot, ProblemPhase, SlotId};
pub use math_problem::{MathProblem, Operation};
pub use quiz_event::{QuizCommand, QuizEvent};
pub use quiz_session::{Question, QuestionResult, QuizSessionState, SessionPhase};
pub use quiz_type::{QuizKind, QuizType};
pub use session_record::QuizSessionRecord;
pub use ten_frame_question::{TenFrameMode, TenFrameQuestion, TEN};
pub use timer_state::TimerState;
pub use user_stats::{QuizTypeStats, QuizTypeStatsSet, UserStats};
