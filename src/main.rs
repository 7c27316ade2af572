use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::thread;
use std::time::SystemTime;

use itertools::Itertools;
use log::info;
use tenframe_math::destroyable::Destroyable;
use tenframe_math::game::scoring::MAX_STARS;
use tenframe_math::game::settings::UserPreferences;
use tenframe_math::game::{star_message, QuizConfig, QuizSessionController, StatsManager, SystemClock};
use tenframe_math::model::{
    ChoiceOutcome, DifficultyLevel, ProblemPhase, QuizEvent, QuizKind, SessionPhase, SlotId,
    TenFrameMode, TEN,
};
use tenframe_math::storage::{FileStore, StorageService};

const DEFAULT_QUESTION_COUNT: usize = 10;

fn init_logging() {
    env_logger::init();
}

/// Next trimmed line from stdin; `None` once input is closed
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, text: &str) -> Option<String> {
    print!("{}", text);
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => Some(line.trim().to_string()),
        _ => None,
    }
}

fn render_ten_frame(filled: u32) -> String {
    (0..TEN)
        .map(|i| if i < filled { "●" } else { "○" })
        .chunks(TEN as usize / 2)
        .into_iter()
        .map(|mut row| format!("  {}", row.join(" ")))
        .join("\n")
}

fn render_stars(stars: u8) -> String {
    (0..MAX_STARS).map(|i| if i < stars { '★' } else { '☆' }).collect()
}

/// Fires paced actions as they come due. With animations off the delays are
/// skipped rather than slept through.
fn settle(controller: &mut QuizSessionController, animations_enabled: bool) {
    while let Some(due) = controller.next_wakeup() {
        if animations_enabled {
            if let Ok(wait) = due.duration_since(SystemTime::now()) {
                thread::sleep(wait);
            }
            controller.advance_clock(SystemTime::now());
        } else {
            controller.advance_clock(due);
        }
    }
}

fn choose_kind(lines: &mut impl Iterator<Item = io::Result<String>>, choice: &str) -> Option<QuizKind> {
    match choice {
        "1" => {
            for level in DifficultyLevel::all() {
                println!("  {}) {}", level.index() + 1, level.label());
            }
            let answer = prompt(lines, "Difficulty [3]: ")?;
            let level = match answer.parse::<usize>() {
                Ok(n) if (1..=DifficultyLevel::all().len()).contains(&n) => {
                    DifficultyLevel::from_index(n - 1)
                }
                _ => DifficultyLevel::default(),
            };
            Some(QuizKind::Addition(level))
        }
        "2" => Some(QuizKind::TenFrame(TenFrameMode::Recognition)),
        "3" => Some(QuizKind::TenFrame(TenFrameMode::Make10)),
        _ => None,
    }
}

fn show_question(controller: &QuizSessionController, debug: bool) {
    let state = controller.state();
    println!(
        "\nQuestion {} of {}",
        state.current_question_index + 1,
        state.total_questions()
    );
    if let Some(problem) = controller.current_problem() {
        println!("  {} = ?", problem.problem());
    }
    if let Some(ten_frame) = controller.current_ten_frame() {
        println!("{}", render_ten_frame(ten_frame.question().number));
        println!("  {}", ten_frame.mode().prompt());
    }
    if debug {
        if let Some(choices) = controller.current_choices() {
            println!("  [debug] answer: {}", choices.correct_answer());
        }
    }
}

/// Plays until the summary; returns false if input ran out.
fn play(
    controller: &mut QuizSessionController,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    preferences: &UserPreferences,
    debug: bool,
) -> bool {
    let mut shown_index = None;
    while controller.phase() == SessionPhase::Active {
        let index = controller.state().current_question_index;
        if shown_index != Some(index) {
            show_question(controller, debug);
            shown_index = Some(index);
        }

        let splitting = controller.current_problem().and_then(|problem| {
            let slot = match problem.phase() {
                ProblemPhase::Number1 => SlotId::Number1,
                ProblemPhase::Number2 => SlotId::Number2,
                _ => return None,
            };
            Some((slot, problem.state().slot(slot).value))
        });

        if let Some((slot, value)) = splitting {
            if prompt(lines, &format!("  Press enter to split {}: ", value)).is_none() {
                return false;
            }
            if let Ok(Some(number)) = controller.select_number(slot) {
                println!("  {} = {} + {}", number.value, number.tens, number.units);
            }
            continue;
        }

        let Some(choices) = controller.current_choices() else {
            break;
        };
        let options = choices.remaining().iter().join(" / ");
        let Some(answer) = prompt(lines, &format!("  Choose [{}]: ", options)) else {
            return false;
        };
        let Ok(choice) = answer.parse::<u32>() else {
            continue;
        };

        match controller.select_answer(choice) {
            Ok(ChoiceOutcome::Correct) => {
                println!("  Correct!");
                settle(controller, preferences.animations_enabled);
            }
            Ok(ChoiceOutcome::Incorrect) => println!("  Not quite, try again."),
            Ok(ChoiceOutcome::Ignored) | Err(_) => (),
        }
    }
    true
}

fn show_summary(controller: &QuizSessionController) {
    match controller.summary() {
        Some(record) => {
            println!("\n{}", star_message(record.star_rating));
            println!("  {}", render_stars(record.star_rating));
            println!(
                "  {} of {} correct ({}%) in {}s",
                record.correct_answers,
                record.total_questions,
                record.score,
                record.duration_millis() / 1000
            );
        }
        None => println!("\nNo questions this time."),
    }
}

fn show_history(stats_manager: &StatsManager) {
    let history = stats_manager.get_session_history(Some(10));
    if history.is_empty() {
        println!("\nNo quizzes yet.");
        return;
    }
    println!("\nRecent quizzes:");
    for record in history {
        println!(
            "  {}  {:<12} {:>3}%  {}",
            record.end_time.format("%Y-%m-%d %H:%M"),
            record.quiz_type.to_string(),
            record.score,
            render_stars(record.star_rating)
        );
    }
    let stats = stats_manager.get_user_stats();
    println!(
        "  {} quizzes, {} of {} answers correct, accuracy {:.0}%",
        stats.total_quizzes_completed,
        stats.total_correct_answers,
        stats.total_questions_answered,
        stats.overall_accuracy
    );
}

fn main() {
    init_logging();

    let debug = UserPreferences::is_debug_mode();
    let seed = UserPreferences::seed_from_env();
    let path = FileStore::default_location();
    info!("Using storage at {:?}", path);

    let storage = StorageService::new(Box::new(FileStore::open(&path)));
    let stats_manager = Rc::new(RefCell::new(StatsManager::new(storage)));
    let mut preferences = stats_manager.borrow().get_preferences();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n1) Addition  2) Ten-frame: how many?  3) Ten-frame: make 10");
        println!("h) History  p) Toggle animations  c) Clear data  q) Quit");
        let Some(choice) = prompt(&mut lines, "> ") else {
            break;
        };

        match choice.as_str() {
            "q" => break,
            "h" => show_history(&stats_manager.borrow()),
            "c" => {
                stats_manager.borrow_mut().clear_all_data();
                preferences = UserPreferences::default();
                println!("All saved data cleared.");
            }
            "p" => {
                preferences.animations_enabled = !preferences.animations_enabled;
                if let Err(e) = stats_manager.borrow_mut().save_preferences(&preferences) {
                    eprintln!("Could not save preferences: {}", e);
                }
                println!("Animations {}", if preferences.animations_enabled { "on" } else { "off" });
            }
            other => {
                let Some(kind) = choose_kind(&mut lines, other) else {
                    continue;
                };
                let Some(count) = prompt(&mut lines, "How many questions? [10]: ") else {
                    break;
                };
                let question_count = count.parse().unwrap_or(DEFAULT_QUESTION_COUNT);

                let mut controller = QuizSessionController::new(
                    QuizConfig {
                        kind,
                        question_count,
                    },
                    Some(stats_manager.clone()),
                    Rc::new(SystemClock),
                    seed,
                );
                controller.subscribe(|event| match event {
                    QuizEvent::PhaseChanged(SessionPhase::Transition) => println!("  Well done!"),
                    QuizEvent::PersistenceFailed(reason) => {
                        eprintln!("Could not save this quiz: {}", reason)
                    }
                    _ => (),
                });

                let finished = play(&mut controller, &mut lines, &preferences, debug);
                if finished {
                    show_summary(&controller);
                }
                controller.destroy();
                if !finished {
                    break;
                }
            }
        }
    }
}
