use log::trace;
use rand::Rng;

use super::problem_generator::generate_addition_choices;
use super::ten_frame_generator::generate_answer_choices;
use crate::model::{
    AnswerChoices, ChoiceOutcome, DifficultyLevel, InteractiveProblemState, MathProblem,
    NumberSlot, ProblemPhase, SlotId, TenFrameMode, TenFrameQuestion,
};

/// Walks one addition problem through decomposition and answer selection.
///
/// With decomposition shown the phases are
/// `Number1 -> Number2 -> FinalAnswer -> Complete`; otherwise the problem
/// opens directly in `FinalAnswer`. Wrong answers never end the problem:
/// each one is disabled and counted, and the learner keeps going until the
/// correct choice is picked.
#[derive(Debug, Clone)]
pub struct InteractiveProblem {
    problem: MathProblem,
    max_answer_value: u32,
    state: InteractiveProblemState,
}

impl InteractiveProblem {
    pub fn new<R: Rng + ?Sized>(
        problem: MathProblem,
        show_decomposition: bool,
        max_answer_value: u32,
        rng: &mut R,
    ) -> Self {
        let state = InteractiveProblemState {
            phase: if show_decomposition {
                ProblemPhase::Number1
            } else {
                ProblemPhase::FinalAnswer
            },
            number1: NumberSlot::new(problem.num1, show_decomposition),
            number2: NumberSlot::new(problem.num2, false),
            interaction_count: 0,
            is_correct: None,
            choices: None,
        };
        let mut interactive = Self {
            problem,
            max_answer_value,
            state,
        };
        if !show_decomposition {
            interactive.enter_final_answer(rng);
        }
        interactive
    }

    pub fn for_difficulty<R: Rng + ?Sized>(
        problem: MathProblem,
        difficulty: DifficultyLevel,
        rng: &mut R,
    ) -> Self {
        Self::new(
            problem,
            difficulty.shows_decomposition(),
            difficulty.max_answer_value(),
            rng,
        )
    }

    pub fn problem(&self) -> &MathProblem {
        &self.problem
    }

    pub fn state(&self) -> &InteractiveProblemState {
        &self.state
    }

    pub fn phase(&self) -> ProblemPhase {
        self.state.phase
    }

    pub fn interaction_count(&self) -> u32 {
        self.state.interaction_count
    }

    pub fn choices(&self) -> Option<&AnswerChoices> {
        self.state.choices.as_ref()
    }

    /// `Some((correct, interactions))` once the problem is finished
    pub fn completion(&self) -> Option<(bool, u32)> {
        self.state
            .is_correct
            .map(|correct| (correct, self.state.interaction_count))
    }

    /// Splits the selected operand into tens and units. Returns the
    /// decomposed slot, or `None` when the slot can't be selected right now.
    pub fn select_number<R: Rng + ?Sized>(
        &mut self,
        slot: SlotId,
        rng: &mut R,
    ) -> Option<NumberSlot> {
        let expected = match self.state.phase {
            ProblemPhase::Number1 => SlotId::Number1,
            ProblemPhase::Number2 => SlotId::Number2,
            _ => return None,
        };
        let target = self.state.slot(slot);
        if slot != expected || !target.is_selectable || target.is_decomposed {
            return None;
        }

        self.state.slot_mut(slot).decompose();
        self.state.interaction_count += 1;

        match slot {
            SlotId::Number1 => {
                self.state.phase = ProblemPhase::Number2;
                self.state.number2.is_selectable = true;
            }
            SlotId::Number2 => self.enter_final_answer(rng),
        }
        trace!(
            target: "interaction",
            "Decomposed {:?} of {}; now in {:?}",
            slot,
            self.problem,
            self.state.phase
        );

        Some(*self.state.slot(slot))
    }

    pub fn select_answer(&mut self, choice: u32) -> ChoiceOutcome {
        if self.state.phase != ProblemPhase::FinalAnswer {
            return ChoiceOutcome::Ignored;
        }
        let Some(choices) = self.state.choices.as_mut() else {
            return ChoiceOutcome::Ignored;
        };

        let outcome = choices.select(choice);
        match outcome {
            ChoiceOutcome::Correct => {
                self.state.phase = ProblemPhase::Complete;
                self.state.is_correct = Some(true);
            }
            ChoiceOutcome::Incorrect => {
                self.state.interaction_count += 1;
            }
            ChoiceOutcome::Ignored => (),
        }
        trace!(target: "interaction", "Picked {} for {}: {:?}", choice, self.problem, outcome);
        outcome
    }

    fn enter_final_answer<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let answer = self.problem.expected_answer;
        let choices = generate_addition_choices(answer, self.max_answer_value, rng);
        self.state.choices = Some(AnswerChoices::new(choices, answer));
        self.state.phase = ProblemPhase::FinalAnswer;
    }
}

/// A single ten-frame drill question. Every tap on an enabled choice counts
/// as an interaction, including the final correct one.
#[derive(Debug, Clone)]
pub struct TenFrameInteraction {
    question: TenFrameQuestion,
    mode: TenFrameMode,
    choices: AnswerChoices,
    interactions: u32,
}

impl TenFrameInteraction {
    pub fn new<R: Rng + ?Sized>(question: TenFrameQuestion, mode: TenFrameMode, rng: &mut R) -> Self {
        let choices = generate_answer_choices(question.correct_answer, mode, rng);
        Self {
            question,
            mode,
            choices: AnswerChoices::new(choices, question.correct_answer),
            interactions: 0,
        }
    }

    pub fn question(&self) -> &TenFrameQuestion {
        &self.question
    }

    pub fn mode(&self) -> TenFrameMode {
        self.mode
    }

    pub fn choices(&self) -> &AnswerChoices {
        &self.choices
    }

    pub fn interactions(&self) -> u32 {
        self.interactions
    }

    pub fn completion(&self) -> Option<(bool, u32)> {
        self.choices
            .is_answered()
            .then_some((true, self.interactions))
    }

    pub fn select_answer(&mut self, choice: u32) -> ChoiceOutcome {
        let outcome = self.choices.select(choice);
        if outcome != ChoiceOutcome::Ignored {
            self.interactions += 1;
        }
        outcome
    }
}
