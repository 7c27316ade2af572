use log::trace;

use super::scoring::update_stats;
use super::settings::UserPreferences;
use crate::model::{QuizSessionRecord, UserStats};
use crate::storage::{StorageError, StorageService};

const SESSION_HISTORY_KEY: &str = "session-history";
const USER_STATS_KEY: &str = "user-stats";
const PREFERENCES_KEY: &str = "preferences";

pub const MAX_HISTORY_SIZE: usize = 50;

/// Session history, running statistics and preferences on top of a
/// namespaced storage service.
pub struct StatsManager {
    storage: StorageService,
}

impl StatsManager {
    pub fn new(storage: StorageService) -> Self {
        Self { storage }
    }

    /// Prepends the session to the history (dropping the oldest past the
    /// cap) and folds it into the user stats. The two writes are separate;
    /// if the second fails the history already contains the session.
    pub fn record_session(&mut self, session: &QuizSessionRecord) -> Result<(), StorageError> {
        let mut history = self.get_session_history(None);
        history.insert(0, session.clone());
        history.truncate(MAX_HISTORY_SIZE);
        self.storage.save(SESSION_HISTORY_KEY, &history)?;

        let stats = update_stats(&self.get_user_stats(), session);
        self.storage.save(USER_STATS_KEY, &stats)?;

        trace!(
            target: "stats_manager",
            "Recorded session {} ({} in history)",
            session.session_id,
            history.len()
        );
        Ok(())
    }

    /// Most recent first
    pub fn get_session_history(&self, limit: Option<usize>) -> Vec<QuizSessionRecord> {
        let history: Vec<QuizSessionRecord> = self
            .storage
            .load(SESSION_HISTORY_KEY)
            .unwrap_or_default();
        match limit {
            Some(limit) => history.into_iter().take(limit).collect(),
            None => history,
        }
    }

    pub fn get_user_stats(&self) -> UserStats {
        self.storage.load(USER_STATS_KEY).unwrap_or_default()
    }

    pub fn get_preferences(&self) -> UserPreferences {
        let mut preferences: UserPreferences =
            self.storage.load(PREFERENCES_KEY).unwrap_or_default();
        preferences.migrate();
        preferences
    }

    pub fn save_preferences(&mut self, preferences: &UserPreferences) -> Result<(), StorageError> {
        self.storage.save(PREFERENCES_KEY, preferences)
    }

    pub fn clear_all_data(&mut self) {
        self.storage.clear();
    }
}
