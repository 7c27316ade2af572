use std::collections::BTreeSet;

/// Outcome of picking one of the multiple-choice buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceOutcome {
    Correct,
    Incorrect,
    /// Not offered, already eliminated, or the question is already answered
    Ignored,
}

/// Multiple-choice options with incremental elimination of wrong picks.
/// The correct value is never disabled, so the learner can always finish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerChoices {
    choices: Vec<u32>,
    correct_answer: u32,
    disabled: BTreeSet<u32>,
    answered: bool,
}

impl AnswerChoices {
    pub fn new(choices: Vec<u32>, correct_answer: u32) -> Self {
        debug_assert!(choices.contains(&correct_answer));
        Self {
            choices,
            correct_answer,
            disabled: BTreeSet::new(),
            answered: false,
        }
    }

    pub fn choices(&self) -> &[u32] {
        &self.choices
    }

    pub fn correct_answer(&self) -> u32 {
        self.correct_answer
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn is_enabled(&self, choice: u32) -> bool {
        !self.answered && self.choices.contains(&choice) && !self.disabled.contains(&choice)
    }

    pub fn disabled(&self) -> impl Iterator<Item = &u32> {
        self.disabled.iter()
    }

    pub fn remaining(&self) -> Vec<u32> {
        self.choices
            .iter()
            .copied()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }

    pub fn select(&mut self, choice: u32) -> ChoiceOutcome {
        if !self.is_enabled(choice) {
            return ChoiceOutcome::Ignored;
        }
        if choice == self.correct_answer {
            self.answered = true;
            ChoiceOutcome::Correct
        } else {
            self.disabled.insert(choice);
            ChoiceOutcome::Incorrect
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_picks_are_eliminated_one_at_a_time() {
        let mut choices = AnswerChoices::new(vec![7, 5, 6], 5);

        assert_eq!(choices.select(7), ChoiceOutcome::Incorrect);
        assert!(!choices.is_enabled(7));
        assert_eq!(choices.remaining(), vec![5, 6]);

        assert_eq!(choices.select(7), ChoiceOutcome::Ignored);
        assert_eq!(choices.select(6), ChoiceOutcome::Incorrect);
        assert_eq!(choices.remaining(), vec![5]);
        assert!(choices.is_enabled(5));

        assert_eq!(choices.select(5), ChoiceOutcome::Correct);
        assert!(choices.is_answered());
        assert!(choices.remaining().is_empty());
        assert_eq!(choices.select(5), ChoiceOutcome::Ignored);
    }

    #[test]
    fn test_unknown_value_is_ignored() {
        let mut choices = AnswerChoices::new(vec![1, 2, 3], 2);
        assert_eq!(choices.select(9), ChoiceOutcome::Ignored);
        assert_eq!(choices.disabled().count(), 0);
    }
}
