pub mod interaction;
pub mod pacer;
pub mod problem_generator;
pub mod scoring;
pub mod session_controller;
pub mod settings;
pub mod stats_manager;
pub mod ten_frame_generator;

pub use interaction::{InteractiveProblem, TenFrameInteraction};
pub use problem_generator::{generate_addition_choices, generate_addition_problems};
pub use scoring::{calculate_score, calculate_star_rating, star_message, update_stats};
pub use session_controller::{Clock, QuizConfig, QuizSessionController, SessionError, SystemClock};
pub use stats_manager::StatsManager;
pub use ten_frame_generator::{
    generate_answer_choices, generate_make10_questions, generate_recognition_questions,
};
