use super::AnswerChoices;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemPhase {
    Number1,
    Number2,
    FinalAnswer,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    Number1,
    Number2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSlot {
    pub value: u32,
    pub is_decomposed: bool,
    pub is_selectable: bool,
    pub tens: u32,
    pub units: u32,
}

impl NumberSlot {
    pub fn new(value: u32, is_selectable: bool) -> Self {
        Self {
            value,
            is_decomposed: false,
            is_selectable,
            tens: 0,
            units: 0,
        }
    }

    /// 23 -> 20 + 3
    pub fn decompose(&mut self) {
        self.tens = self.value / 10 * 10;
        self.units = self.value % 10;
        self.is_decomposed = true;
        self.is_selectable = false;
    }
}

/// Per-problem state, thrown away once the problem completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveProblemState {
    pub phase: ProblemPhase,
    pub number1: NumberSlot,
    pub number2: NumberSlot,
    pub interaction_count: u32,
    pub is_correct: Option<bool>,
    pub choices: Option<AnswerChoices>,
}

impl InteractiveProblemState {
    pub fn slot(&self, slot: SlotId) -> &NumberSlot {
        match slot {
            SlotId::Number1 => &self.number1,
            SlotId::Number2 => &self.number2,
        }
    }

    pub fn slot_mut(&mut self, slot: SlotId) -> &mut NumberSlot {
        match slot {
            SlotId::Number1 => &mut self.number1,
            SlotId::Number2 => &mut self.number2,
        }
    }
}
