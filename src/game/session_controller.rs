use log::{info, trace, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::SystemTime;
use thiserror::Error;

use super::interaction::{InteractiveProblem, TenFrameInteraction};
use super::pacer::{PacedAction, Pacer, ANSWER_FEEDBACK_DELAY, TRANSITION_DELAY};
use super::problem_generator::generate_addition_problems;
use super::scoring::build_record;
use super::stats_manager::StatsManager;
use super::ten_frame_generator::{generate_make10_questions, generate_recognition_questions};
use crate::destroyable::Destroyable;
use crate::events::{EventEmitter, EventHandler, SubscriptionId};
use crate::model::{
    AnswerChoices, ChoiceOutcome, NumberSlot, Question, QuestionResult, QuizCommand, QuizEvent,
    QuizKind, QuizSessionRecord, QuizSessionState, SessionPhase, SlotId, TenFrameMode, TimerState,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("{action} is not allowed while the session is {phase:?}")]
    InvalidPhase {
        action: &'static str,
        phase: SessionPhase,
    },

    #[error("the current question has no numbers to split")]
    NotAnAdditionQuestion,
}

pub trait Clock {
    fn now(&self) -> SystemTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    pub kind: QuizKind,
    pub question_count: usize,
}

#[derive(Debug, Clone)]
enum ActiveQuestion {
    Addition(InteractiveProblem),
    TenFrame(TenFrameInteraction),
}

impl ActiveQuestion {
    fn choices(&self) -> Option<&AnswerChoices> {
        match self {
            ActiveQuestion::Addition(problem) => problem.choices(),
            ActiveQuestion::TenFrame(interaction) => Some(interaction.choices()),
        }
    }

    fn select_answer(&mut self, choice: u32) -> ChoiceOutcome {
        match self {
            ActiveQuestion::Addition(problem) => problem.select_answer(choice),
            ActiveQuestion::TenFrame(interaction) => interaction.select_answer(choice),
        }
    }

    fn completion(&self) -> Option<(bool, u32)> {
        match self {
            ActiveQuestion::Addition(problem) => problem.completion(),
            ActiveQuestion::TenFrame(interaction) => interaction.completion(),
        }
    }
}

/// Owns one practice session from the first question to the summary.
///
/// Learner input goes through [`select_number`](Self::select_number) and
/// [`select_answer`](Self::select_answer). A correct answer completes the
/// question logically at once, but the session only records it once the
/// feedback delay has elapsed, which the host signals by calling
/// [`advance_clock`](Self::advance_clock). Delayed actions carry the session
/// id and question index they were scheduled for and are dropped if either
/// no longer matches.
pub struct QuizSessionController {
    config: QuizConfig,
    session: QuizSessionState,
    active: Option<ActiveQuestion>,
    question_timer: TimerState,
    summary: Option<QuizSessionRecord>,
    pacer: Pacer,
    rng: StdRng,
    clock: Rc<dyn Clock>,
    stats_manager: Option<Rc<RefCell<StatsManager>>>,
    event_emitter: EventEmitter<QuizEvent>,
}

impl Destroyable for QuizSessionController {
    fn destroy(&mut self) {
        self.pacer.cancel_all();
        self.event_emitter.clear();
        self.active = None;
    }
}

impl QuizSessionController {
    pub fn new(
        config: QuizConfig,
        stats_manager: Option<Rc<RefCell<StatsManager>>>,
        clock: Rc<dyn Clock>,
        seed: Option<u64>,
    ) -> Self {
        let seed = seed.unwrap_or(rand::rng().next_u64());
        info!(target: "session", "New session controller; {:?}; seed: {}", config, seed);
        let now = clock.now();
        let mut controller = Self {
            config,
            session: QuizSessionState::new(config.kind, Vec::new(), now),
            active: None,
            question_timer: TimerState::started(now),
            summary: None,
            pacer: Pacer::new(),
            rng: StdRng::seed_from_u64(seed),
            clock,
            stats_manager,
            event_emitter: EventEmitter::new(),
        };
        controller.start(config);
        controller
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&QuizEvent) + 'static,
    {
        self.event_emitter.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.event_emitter.unsubscribe(id)
    }

    pub fn config(&self) -> QuizConfig {
        self.config
    }

    pub fn state(&self) -> &QuizSessionState {
        &self.session
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.session_phase
    }

    pub fn correct_count(&self) -> usize {
        self.session.correct_count()
    }

    /// Set once the session reaches its summary (non-empty sessions only)
    pub fn summary(&self) -> Option<&QuizSessionRecord> {
        self.summary.as_ref()
    }

    pub fn current_problem(&self) -> Option<&InteractiveProblem> {
        match self.active.as_ref()? {
            ActiveQuestion::Addition(problem) => Some(problem),
            ActiveQuestion::TenFrame(_) => None,
        }
    }

    pub fn current_ten_frame(&self) -> Option<&TenFrameInteraction> {
        match self.active.as_ref()? {
            ActiveQuestion::TenFrame(interaction) => Some(interaction),
            ActiveQuestion::Addition(_) => None,
        }
    }

    pub fn current_choices(&self) -> Option<&AnswerChoices> {
        self.active.as_ref()?.choices()
    }

    /// Earliest pending presentation delay, for hosts that sleep until then
    pub fn next_wakeup(&self) -> Option<SystemTime> {
        self.pacer.next_due()
    }

    /// Throws away whatever session was running and starts a fresh one.
    pub fn start(&mut self, config: QuizConfig) -> &QuizSessionState {
        self.pacer.cancel_all();
        self.config = config;
        self.summary = None;

        let questions = Self::generate_questions(config, &mut self.rng);
        if questions.len() < config.question_count {
            warn!(
                target: "session",
                "Starting with {} of {} requested questions",
                questions.len(),
                config.question_count
            );
        }

        let now = self.clock.now();
        self.session = QuizSessionState::new(config.kind, questions, now);
        trace!(target: "session", "Started session {}", self.session.session_id);
        self.event_emitter.emit(&QuizEvent::SessionStarted {
            session_id: self.session.session_id,
            total_questions: self.session.total_questions(),
        });
        self.load_current_question(now);
        &self.session
    }

    /// Same configuration, new questions, new session id.
    pub fn try_again(&mut self) -> &QuizSessionState {
        self.start(self.config)
    }

    fn generate_questions(config: QuizConfig, rng: &mut StdRng) -> Vec<Question> {
        let count = config.question_count;
        match config.kind {
            QuizKind::Addition(difficulty) => generate_addition_problems(count, difficulty, rng)
                .into_iter()
                .map(Question::Addition)
                .collect(),
            QuizKind::TenFrame(TenFrameMode::Recognition) => {
                generate_recognition_questions(count, rng)
                    .into_iter()
                    .map(Question::TenFrame)
                    .collect()
            }
            QuizKind::TenFrame(TenFrameMode::Make10) => generate_make10_questions(count, rng)
                .into_iter()
                .map(Question::TenFrame)
                .collect(),
        }
    }

    fn load_current_question(&mut self, now: SystemTime) {
        self.question_timer = TimerState::started(now);
        self.active = match (self.session.current_question().copied(), self.config.kind) {
            (Some(Question::Addition(problem)), QuizKind::Addition(difficulty)) => Some(
                ActiveQuestion::Addition(InteractiveProblem::for_difficulty(
                    problem,
                    difficulty,
                    &mut self.rng,
                )),
            ),
            (Some(Question::TenFrame(question)), QuizKind::TenFrame(mode)) => Some(
                ActiveQuestion::TenFrame(TenFrameInteraction::new(question, mode, &mut self.rng)),
            ),
            _ => None,
        };

        if self.session.session_phase == SessionPhase::Summary {
            // empty batch: nothing was asked, so nothing is recorded
            self.event_emitter
                .emit(&QuizEvent::PhaseChanged(SessionPhase::Summary));
            return;
        }
        if let Some(choices) = self.current_choices() {
            let choices = choices.choices().to_vec();
            self.event_emitter.emit(&QuizEvent::ChoicesPresented(choices));
        }
    }

    fn require_phase(&self, action: &'static str, phase: SessionPhase) -> Result<(), SessionError> {
        if self.session.session_phase != phase {
            return Err(SessionError::InvalidPhase {
                action,
                phase: self.session.session_phase,
            });
        }
        Ok(())
    }

    pub fn select_number(&mut self, slot: SlotId) -> Result<Option<NumberSlot>, SessionError> {
        self.require_phase("select_number", SessionPhase::Active)?;
        let Some(ActiveQuestion::Addition(problem)) = self.active.as_mut() else {
            return Err(SessionError::NotAnAdditionQuestion);
        };

        let decomposed = problem.select_number(slot, &mut self.rng);
        if let Some(number) = decomposed {
            self.event_emitter.emit(&QuizEvent::NumberDecomposed {
                slot,
                tens: number.tens,
                units: number.units,
            });
            if slot == SlotId::Number2 {
                if let Some(choices) = self.current_choices() {
                    let choices = choices.choices().to_vec();
                    self.event_emitter.emit(&QuizEvent::ChoicesPresented(choices));
                }
            }
        }
        Ok(decomposed)
    }

    pub fn select_answer(&mut self, choice: u32) -> Result<ChoiceOutcome, SessionError> {
        self.require_phase("select_answer", SessionPhase::Active)?;
        let Some(active) = self.active.as_mut() else {
            return Ok(ChoiceOutcome::Ignored);
        };

        let outcome = active.select_answer(choice);
        match outcome {
            ChoiceOutcome::Correct => {
                if let Some((correct, interactions)) = active.completion() {
                    self.pacer.schedule(
                        self.clock.now(),
                        ANSWER_FEEDBACK_DELAY,
                        self.session.session_id,
                        PacedAction::AcknowledgeAnswer {
                            question_index: self.session.current_question_index,
                            correct,
                            interactions,
                        },
                    );
                }
            }
            ChoiceOutcome::Incorrect => {
                self.event_emitter.emit(&QuizEvent::AnswerRejected(choice));
            }
            ChoiceOutcome::Ignored => (),
        }
        Ok(outcome)
    }

    /// Runs every delayed action that has come due by `now`.
    pub fn advance_clock(&mut self, now: SystemTime) {
        for (session_id, action) in self.pacer.take_due(now) {
            if session_id != self.session.session_id {
                trace!(target: "session", "Dropping {:?} from session {}", action, session_id);
                continue;
            }
            let result = match action {
                PacedAction::AcknowledgeAnswer {
                    question_index,
                    correct,
                    interactions,
                } => {
                    // already recorded through a direct completion
                    if question_index != self.session.current_question_index
                        || self.session.session_phase != SessionPhase::Active
                    {
                        continue;
                    }
                    self.event_emitter.emit(&QuizEvent::QuestionCompleted {
                        correct,
                        interactions,
                    });
                    self.on_question_complete(correct, interactions)
                }
                PacedAction::FinishTransition { question_index } => {
                    if question_index != self.session.current_question_index {
                        continue;
                    }
                    self.on_transition_complete()
                }
            };
            if let Err(e) = result {
                trace!(target: "session", "Ignoring stale {:?}: {}", action, e);
            }
        }
    }

    /// Records a finished question. Wrong answers are never recorded; the
    /// learner keeps working on the same question until it is right.
    pub fn on_question_complete(&mut self, correct: bool, interactions: u32) -> Result<(), SessionError> {
        self.require_phase("on_question_complete", SessionPhase::Active)?;
        if !correct {
            return Ok(());
        }
        let Some(question) = self.session.current_question().copied() else {
            return Ok(());
        };

        let now = self.clock.now();
        let question_index = self.session.current_question_index;
        self.session.session_results.push(QuestionResult {
            question_index,
            question,
            correct: true,
            interactions,
            time_spent: self.question_timer.ended(now).elapsed_millis(now),
        });
        trace!(
            target: "session",
            "Question {} done in {} interactions",
            question_index,
            interactions
        );

        if self.session.is_last_question() {
            self.finish_session(now);
        } else {
            self.session.session_phase = SessionPhase::Transition;
            self.pacer.schedule(
                now,
                TRANSITION_DELAY,
                self.session.session_id,
                PacedAction::FinishTransition { question_index },
            );
            self.event_emitter
                .emit(&QuizEvent::PhaseChanged(SessionPhase::Transition));
        }
        Ok(())
    }

    pub fn on_transition_complete(&mut self) -> Result<(), SessionError> {
        self.require_phase("on_transition_complete", SessionPhase::Transition)?;
        self.session.current_question_index += 1;
        self.session.session_phase = SessionPhase::Active;
        self.event_emitter
            .emit(&QuizEvent::PhaseChanged(SessionPhase::Active));
        self.load_current_question(self.clock.now());
        Ok(())
    }

    fn finish_session(&mut self, now: SystemTime) {
        self.session.session_phase = SessionPhase::Summary;
        self.session.timer_state = self.session.timer_state.ended(now);
        self.active = None;

        let record = build_record(&self.session);
        info!(
            target: "session",
            "Session {} finished: {}/{} correct, {} stars",
            record.session_id,
            record.correct_answers,
            record.total_questions,
            record.star_rating
        );

        if let Some(stats_manager) = &self.stats_manager {
            if let Err(e) = stats_manager.borrow_mut().record_session(&record) {
                self.event_emitter
                    .emit(&QuizEvent::PersistenceFailed(e.to_string()));
            }
        }

        self.summary = Some(record.clone());
        self.event_emitter
            .emit(&QuizEvent::PhaseChanged(SessionPhase::Summary));
        self.event_emitter.emit(&QuizEvent::SessionCompleted(record));
    }
}

impl EventHandler<QuizCommand> for QuizSessionController {
    fn handle_event(&mut self, event: &QuizCommand) {
        trace!(target: "session", "Handling command: {:?}", event);
        let result = match event {
            QuizCommand::SelectNumber(slot) => self.select_number(*slot).map(|_| ()),
            QuizCommand::SelectAnswer(choice) => self.select_answer(*choice).map(|_| ()),
            QuizCommand::TransitionComplete => self.on_transition_complete(),
            QuizCommand::TryAgain => {
                self.try_again();
                Ok(())
            }
            QuizCommand::Tick(now) => {
                self.advance_clock(*now);
                Ok(())
            }
        };
        if let Err(e) = result {
            warn!(target: "session", "Rejected {:?}: {}", event, e);
        }
    }
}
