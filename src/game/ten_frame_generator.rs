use log::{trace, warn};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::model::{TenFrameMode, TenFrameQuestion};

pub const CHOICE_COUNT: usize = 3;
const MAX_CHOICE_OFFSET: u32 = 3;

fn draw_with_replacement<R: Rng + ?Sized>(mode: TenFrameMode, count: usize, rng: &mut R) -> Vec<u32> {
    let range = mode.number_range();
    (0..count).map(|_| rng.random_range(range.clone())).collect()
}

/// Deals from a shuffled deck of the mode's numbers, so nothing repeats
/// until the deck runs out; the rest are drawn with replacement.
fn deal_then_draw<R: Rng + ?Sized>(mode: TenFrameMode, count: usize, rng: &mut R) -> Vec<u32> {
    let mut deck: Vec<u32> = mode.number_range().collect();
    deck.shuffle(rng);

    let mut numbers: Vec<u32> = deck.into_iter().take(count).collect();
    let missing = count - numbers.len();
    numbers.extend(draw_with_replacement(mode, missing, rng));
    numbers
}

fn to_questions(mode: TenFrameMode, numbers: Vec<u32>) -> Vec<TenFrameQuestion> {
    let questions: Vec<TenFrameQuestion> = numbers
        .into_iter()
        .map(|number| TenFrameQuestion::for_mode(mode, number))
        .collect();
    trace!(target: "ten_frame_generator", "{:?} questions: {:?}", mode, questions);
    questions
}

/// Up to ten questions never repeat. Larger batches are drawn entirely with
/// replacement, since only ten distinct values exist.
pub fn generate_recognition_questions<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Vec<TenFrameQuestion> {
    let mode = TenFrameMode::Recognition;
    let numbers = if count <= mode.number_range().count() {
        deal_then_draw(mode, count, rng)
    } else {
        draw_with_replacement(mode, count, rng)
    };
    to_questions(mode, numbers)
}

/// The first nine questions are a shuffle of 1..=9; any beyond that are
/// drawn with replacement.
pub fn generate_make10_questions<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Vec<TenFrameQuestion> {
    let mode = TenFrameMode::Make10;
    to_questions(mode, deal_then_draw(mode, count, rng))
}

/// The correct answer plus two neighbours within three of it, shuffled.
pub fn generate_answer_choices<R: Rng + ?Sized>(
    correct_answer: u32,
    mode: TenFrameMode,
    rng: &mut R,
) -> Vec<u32> {
    let max = mode.max_choice();
    let low = correct_answer.saturating_sub(MAX_CHOICE_OFFSET).max(1);
    let high = (correct_answer + MAX_CHOICE_OFFSET).min(max);
    let neighbours: Vec<u32> = (low..=high).filter(|c| *c != correct_answer).collect();

    if neighbours.len() < CHOICE_COUNT - 1 {
        warn!(
            target: "ten_frame_generator",
            "Only {} distractors available for {} in {:?}",
            neighbours.len(),
            correct_answer,
            mode
        );
    }

    let mut choices = vec![correct_answer];
    choices.extend(neighbours.choose_multiple(rng, CHOICE_COUNT - 1).copied());
    choices.shuffle(rng);
    choices
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_recognition_ten_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        let questions = generate_recognition_questions(10, &mut rng);
        assert_eq!(questions.len(), 10);

        let numbers: Vec<u32> = questions.iter().map(|q| q.number).sorted().collect();
        assert_eq!(numbers, (1..=10).collect::<Vec<u32>>());
        assert!(questions.iter().all(|q| q.correct_answer == q.number));
    }

    #[test]
    fn test_recognition_small_batch_has_no_repeats() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let questions = generate_recognition_questions(6, &mut rng);
            assert!(questions.iter().map(|q| q.number).all_unique());
        }
    }

    #[test]
    fn test_recognition_twenty_allows_repeats() {
        let mut rng = StdRng::seed_from_u64(12);
        let questions = generate_recognition_questions(20, &mut rng);
        assert_eq!(questions.len(), 20);
        assert!(questions.iter().all(|q| (1..=10).contains(&q.number)));
    }

    #[test]
    fn test_recognition_large_batch_draws_every_question_with_replacement() {
        let mut rng = StdRng::seed_from_u64(14);
        // a dealt deck would make the first ten a permutation every time
        let opening_repeats = (0..20)
            .map(|_| generate_recognition_questions(11, &mut rng))
            .filter(|questions| !questions.iter().take(10).map(|q| q.number).all_unique())
            .count();
        assert!(opening_repeats > 0);
    }

    #[test]
    fn test_make10_invariants() {
        let mut rng = StdRng::seed_from_u64(13);
        for count in [0, 5, 9, 15] {
            let questions = generate_make10_questions(count, &mut rng);
            assert_eq!(questions.len(), count);
            for question in &questions {
                assert!((1..=9).contains(&question.number));
                assert_eq!(question.number + question.correct_answer, 10);
            }
            let mut first_nine = questions.iter().take(9).map(|q| q.number);
            assert!(first_nine.all_unique());
        }
    }

    #[test]
    fn test_answer_choices_shape() {
        let mut rng = StdRng::seed_from_u64(21);
        for mode in [TenFrameMode::Recognition, TenFrameMode::Make10] {
            for correct in mode.number_range() {
                for _ in 0..10 {
                    let choices = generate_answer_choices(correct, mode, &mut rng);
                    assert_eq!(choices.len(), CHOICE_COUNT);
                    assert!(choices.contains(&correct));
                    assert!(choices.iter().all_unique());
                    assert!(choices.iter().all(|c| (1..=mode.max_choice()).contains(c)));
                    assert!(choices.iter().all(|c| c.abs_diff(correct) <= 3));
                }
            }
        }
    }
}
