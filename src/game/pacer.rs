use log::trace;
use std::time::{Duration, SystemTime};
use uuid::Uuid;

/// Pause between picking the right answer and reporting completion
pub const ANSWER_FEEDBACK_DELAY: Duration = Duration::from_millis(500);
/// How long the "well done" acknowledgement stays up between questions
pub const TRANSITION_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacedAction {
    AcknowledgeAnswer {
        question_index: usize,
        correct: bool,
        interactions: u32,
    },
    FinishTransition {
        question_index: usize,
    },
}

#[derive(Debug, Clone)]
struct Scheduled {
    due: SystemTime,
    session_id: Uuid,
    action: PacedAction,
}

/// Presentation delays as data. Nothing here decides anything; the owner
/// pumps it with the current time and re-checks each action's session id
/// and question index before acting on it.
#[derive(Debug, Default)]
pub struct Pacer {
    queue: Vec<Scheduled>,
}

impl Pacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: SystemTime, delay: Duration, session_id: Uuid, action: PacedAction) {
        let due = now + delay;
        trace!(target: "pacer", "Scheduling {:?} for {:?}", action, due);
        self.queue.push(Scheduled {
            due,
            session_id,
            action,
        });
    }

    /// Removes and returns every action due at `now`, earliest first.
    pub fn take_due(&mut self, now: SystemTime) -> Vec<(Uuid, PacedAction)> {
        let (mut due, pending): (Vec<Scheduled>, Vec<Scheduled>) =
            self.queue.drain(..).partition(|s| s.due <= now);
        self.queue = pending;
        due.sort_by_key(|s| s.due);
        due.into_iter().map(|s| (s.session_id, s.action)).collect()
    }

    pub fn next_due(&self) -> Option<SystemTime> {
        self.queue.iter().map(|s| s.due).min()
    }

    pub fn cancel_all(&mut self) {
        if !self.queue.is_empty() {
            trace!(target: "pacer", "Cancelling {} pending actions", self.queue.len());
        }
        self.queue.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_due_actions_fire() {
        let now = SystemTime::now();
        let session = Uuid::new_v4();
        let mut pacer = Pacer::new();
        pacer.schedule(now, TRANSITION_DELAY, session, PacedAction::FinishTransition { question_index: 0 });

        assert!(pacer.take_due(now + Duration::from_millis(499)).is_empty());
        assert_eq!(pacer.next_due(), Some(now + TRANSITION_DELAY));

        let fired = pacer.take_due(now + Duration::from_millis(500));
        assert_eq!(fired, vec![(session, PacedAction::FinishTransition { question_index: 0 })]);
        assert!(pacer.is_idle());
    }

    #[test]
    fn test_due_actions_come_back_in_order() {
        let now = SystemTime::now();
        let session = Uuid::new_v4();
        let mut pacer = Pacer::new();
        pacer.schedule(now, Duration::from_millis(300), session, PacedAction::FinishTransition { question_index: 0 });
        pacer.schedule(
            now,
            Duration::from_millis(100),
            session,
            PacedAction::AcknowledgeAnswer {
                question_index: 0,
                correct: true,
                interactions: 2,
            },
        );

        let fired: Vec<PacedAction> = pacer
            .take_due(now + Duration::from_secs(1))
            .into_iter()
            .map(|(_, action)| action)
            .collect();
        assert_eq!(
            fired,
            vec![
                PacedAction::AcknowledgeAnswer {
                    question_index: 0,
                    correct: true,
                    interactions: 2
                },
                PacedAction::FinishTransition { question_index: 0 }
            ]
        );
    }

    #[test]
    fn test_cancel_all() {
        let now = SystemTime::now();
        let mut pacer = Pacer::new();
        pacer.schedule(now, ANSWER_FEEDBACK_DELAY, Uuid::new_v4(), PacedAction::FinishTransition { question_index: 0 });
        pacer.cancel_all();
        assert!(pacer.take_due(now + Duration::from_secs(5)).is_empty());
    }
}
