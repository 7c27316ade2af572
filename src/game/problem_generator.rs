use log::{trace, warn};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use std::collections::HashSet;

use crate::model::{DifficultyLevel, MathProblem};

/// Draws per requested problem before giving up on uniqueness
const ATTEMPTS_PER_PROBLEM: usize = 100;

/// Generates up to `count` distinct addition problems whose sum stays within
/// the difficulty's bound. Uniqueness is best effort: if the attempt budget
/// runs out (tiny bounds, large counts) the batch comes back short.
pub fn generate_addition_problems<R: Rng + ?Sized>(
    count: usize,
    difficulty: DifficultyLevel,
    rng: &mut R,
) -> Vec<MathProblem> {
    let max_sum = difficulty.max_sum();
    if max_sum < 2 {
        return Vec::new();
    }

    // ordered pairs of positive operands with num1 + num2 <= max_sum
    let distinct = (max_sum as usize) * (max_sum as usize - 1) / 2;
    let target = count.min(distinct);
    let mut problems = Vec::with_capacity(target);
    let mut used = HashSet::new();
    let max_attempts = count.saturating_mul(ATTEMPTS_PER_PROBLEM);
    let mut attempts = 0;

    while problems.len() < target && attempts < max_attempts {
        attempts += 1;

        let num1 = rng.random_range(1..max_sum);
        let num2 = rng.random_range(1..=max_sum - num1);
        let problem = MathProblem::addition(num1, num2);

        if used.insert(problem.key()) {
            problems.push(problem);
        }
    }

    if problems.len() < count {
        warn!(
            target: "problem_generator",
            "Only found {} of {} unique problems for {} after {} attempts",
            problems.len(),
            count,
            difficulty,
            attempts
        );
    }
    trace!(target: "problem_generator", "Generated problems: {:?}", problems);

    problems
}

/// Multiple-choice options for an addition problem: the answer plus two
/// positive distractors within ten below / nine above it, none larger than
/// `max_value`. Shuffled.
pub fn generate_addition_choices<R: Rng + ?Sized>(
    correct_answer: u32,
    max_value: u32,
    rng: &mut R,
) -> Vec<u32> {
    let low = correct_answer.saturating_sub(10).max(1);
    let high = (correct_answer + 9).min(max_value.max(correct_answer));
    let distractors: Vec<u32> = (low..=high).filter(|c| *c != correct_answer).collect();

    let mut choices = vec![correct_answer];
    choices.extend(distractors.choose_multiple(rng, 2).copied());
    choices.shuffle(rng);
    choices
}
