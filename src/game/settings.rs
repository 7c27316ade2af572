use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default = "default_true")]
    pub sound_enabled: bool,

    #[serde(default = "default_true")]
    pub animations_enabled: bool,

    #[serde(default)]
    pub theme: Theme,
}

// Helper functions for default values
fn default_version() -> u32 {
    1
}
fn default_true() -> bool {
    true
}

impl Default for UserPreferences {
    fn default() -> Self {
        UserPreferences {
            sound_enabled: true,
            animations_enabled: true,
            theme: Theme::default(),
            version: 1,
        }
    }
}

impl UserPreferences {
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Brings preferences saved by older builds up to the current version
    pub(crate) fn migrate(&mut self) {
        match self.version {
            0 => {
                self.version = 1;
            }
            _ => (),
        }
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    pub fn seed_from_env() -> Option<u64> {
        std::env::var("SEED").ok().and_then(|v| v.parse::<u64>().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_missing_fields_take_defaults() {
        let prefs: UserPreferences = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(prefs.theme, Theme::Dark);
        assert!(prefs.sound_enabled);
        assert!(prefs.animations_enabled);
        assert_eq!(prefs.version(), 1);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(UserPreferences::default()).unwrap();
        assert_eq!(json["soundEnabled"], true);
        assert_eq!(json["animationsEnabled"], true);
        assert_eq!(json["theme"], "light");
    }

    #[test]
    fn test_migrate_bumps_version_zero() {
        let mut prefs: UserPreferences = serde_json::from_str(r#"{"version": 0}"#).unwrap();
        prefs.migrate();
        assert_eq!(prefs.version(), 1);
    }

    #[test]
    #[serial]
    fn test_seed_from_env() {
        std::env::set_var("SEED", "1234");
        assert_eq!(UserPreferences::seed_from_env(), Some(1234));
        std::env::set_var("SEED", "not-a-number");
        assert_eq!(UserPreferences::seed_from_env(), None);
        std::env::remove_var("SEED");
        assert_eq!(UserPreferences::seed_from_env(), None);
    }

    #[test]
    #[serial]
    fn test_debug_mode_from_env() {
        std::env::set_var("DEBUG", "1");
        assert!(UserPreferences::is_debug_mode());
        std::env::remove_var("DEBUG");
        assert!(!UserPreferences::is_debug_mode());
    }
}
