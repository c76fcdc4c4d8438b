/// Application configuration: load, save, and sanitize.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Theme preference: "System", "Dark", or "Light".
    pub theme: String,
    /// UI language code (e.g. "en", "uz").
    pub locale: String,
    /// Whether completed tasks stay visible in the task list.
    pub show_completed_tasks: bool,
    /// Max undo history depth per session.
    pub history_depth: usize,
    /// Whether phase-change chimes are enabled.
    pub sound_enabled: bool,
    /// Chime volume in 0.0..=1.0.
    pub sound_volume: f32,
    /// Focus session length in minutes.
    pub pomodoro_focus_minutes: u64,
    /// Short break length in minutes.
    pub pomodoro_short_break_minutes: u64,
    /// Long break length in minutes.
    pub pomodoro_long_break_minutes: u64,
    /// A long break replaces every Nth short break.
    pub pomodoro_long_break_every: u32,
    /// Whether the next phase starts without waiting for the user.
    pub pomodoro_auto_advance: bool,
    /// How many minutes before its due time a task reminder fires.
    pub reminder_lead_minutes: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: "System".to_string(),
            locale: "en".to_string(),
            show_completed_tasks: true,
            history_depth: 40,
            sound_enabled: true,
            sound_volume: 0.7,
            pomodoro_focus_minutes: 25,
            pomodoro_short_break_minutes: 5,
            pomodoro_long_break_minutes: 15,
            pomodoro_long_break_every: 4,
            pomodoro_auto_advance: false,
            reminder_lead_minutes: 10,
        }
    }
}

impl AppConfig {
    /// Returns the config file path: exe directory + `kuntartib.json`.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join("kuntartib.json")))
            .unwrap_or_else(|| PathBuf::from("kuntartib.json"))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (missing file, parse error, etc.).
    pub fn load_or_create(path: &std::path::Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Return defaults on error (don't overwrite broken file)
            let mut config = Self::default();
            config.sanitize();
            config
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        if !["System", "Dark", "Light"].contains(&self.theme.as_str()) {
            self.theme = "System".to_string();
        }
        if crate::locale::Locale::from_code(&self.locale).is_none() {
            self.locale = "en".to_string();
        }
        self.history_depth = self.history_depth.clamp(1, 500);
        self.sound_volume = self.sound_volume.clamp(0.0, 1.0);
        self.pomodoro_focus_minutes = self.pomodoro_focus_minutes.clamp(1, 180);
        self.pomodoro_short_break_minutes = self.pomodoro_short_break_minutes.clamp(1, 60);
        self.pomodoro_long_break_minutes = self.pomodoro_long_break_minutes.clamp(1, 120);
        self.pomodoro_long_break_every = self.pomodoro_long_break_every.clamp(1, 12);
        self.reminder_lead_minutes = self.reminder_lead_minutes.clamp(0, 24 * 60);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.theme, "System");
        assert_eq!(config.locale, "en");
        assert!(config.show_completed_tasks);
        assert_eq!(config.history_depth, 40);
        assert_eq!(config.pomodoro_focus_minutes, 25);
        assert_eq!(config.pomodoro_long_break_every, 4);
    }

    #[test]
    fn test_sanitize_resets_unknown_theme() {
        let mut config = AppConfig::default();
        config.theme = "Solarized".to_string();
        config.sanitize();
        assert_eq!(config.theme, "System");
    }

    #[test]
    fn test_sanitize_resets_unknown_locale() {
        let mut config = AppConfig::default();
        config.locale = "xx".to_string();
        config.sanitize();
        assert_eq!(config.locale, "en");
    }

    #[test]
    fn test_sanitize_keeps_uzbek_locale() {
        let mut config = AppConfig::default();
        config.locale = "uz".to_string();
        config.sanitize();
        assert_eq!(config.locale, "uz");
    }

    #[test]
    fn test_sanitize_clamps_volume() {
        let mut config = AppConfig::default();
        config.sound_volume = 3.0;
        config.sanitize();
        assert!((config.sound_volume - 1.0).abs() < f32::EPSILON);

        config.sound_volume = -0.5;
        config.sanitize();
        assert!(config.sound_volume.abs() < f32::EPSILON);
    }

    #[test]
    fn test_sanitize_clamps_history_depth() {
        let mut config = AppConfig::default();
        config.history_depth = 0;
        config.sanitize();
        assert_eq!(config.history_depth, 1);

        config.history_depth = 100_000;
        config.sanitize();
        assert_eq!(config.history_depth, 500);
    }

    #[test]
    fn test_sanitize_clamps_pomodoro_durations() {
        let mut config = AppConfig::default();
        config.pomodoro_focus_minutes = 0;
        config.pomodoro_long_break_every = 0;
        config.sanitize();
        assert_eq!(config.pomodoro_focus_minutes, 1);
        assert_eq!(config.pomodoro_long_break_every, 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.theme, config.theme);
        assert_eq!(parsed.locale, config.locale);
        assert_eq!(parsed.history_depth, config.history_depth);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        // Simulates loading a config file from an older version
        let json = r#"{"theme": "Dark"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.theme, "Dark");
        assert_eq!(parsed.locale, "en");
        assert_eq!(parsed.pomodoro_focus_minutes, 25);
    }
}
