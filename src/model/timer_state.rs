use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};

/// Wall-clock span of a session or of a single question. Time is always
/// passed in so callers can drive it from a fake clock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerState {
    pub started_timestamp: SystemTime,
    pub ended_timestamp: Option<SystemTime>,
}

impl TimerState {
    pub fn started(now: SystemTime) -> TimerState {
        Self {
            started_timestamp: now,
            ended_timestamp: None,
        }
    }

    pub fn is_ended(&self) -> bool {
        self.ended_timestamp.is_some()
    }

    /// Time between start and either the end stamp or `now`
    pub fn elapsed(&self, now: SystemTime) -> Duration {
        self.ended_timestamp
            .unwrap_or(now)
            .duration_since(self.started_timestamp)
            .unwrap_or(Duration::default())
    }

    pub fn elapsed_millis(&self, now: SystemTime) -> u64 {
        u64::try_from(self.elapsed(now).as_millis()).unwrap_or(u64::MAX)
    }

    pub fn ended(&self, now: SystemTime) -> TimerState {
        let mut new_state = self.clone();
        if new_state.ended_timestamp.is_none() {
            new_state.ended_timestamp = Some(now);
        }
        new_state
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from(self.started_timestamp)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.ended_timestamp.map(DateTime::<Utc>::from)
    }
}
