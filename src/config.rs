use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::session::countdown::{ANSWER_BASE_MS, REVEAL_MS, SpeedLevel, TICK_MS, Timings};

const MIN_TICK_MS: u64 = 10;
const MAX_TICK_MS: u64 = 1_000;
const MAX_PHASE_MS: u64 = 60_000;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_speed_level")]
    pub speed_level: u8,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_answer_base_ms")]
    pub answer_base_ms: u64,
    #[serde(default = "default_reveal_ms")]
    pub reveal_ms: u64,
    #[serde(default)]
    pub shuffle_questions: bool,
    #[serde(default)]
    pub last_dataset: Option<PathBuf>,
}

fn default_speed_level() -> u8 {
    SpeedLevel::MIN
}
fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_tick_ms() -> u64 {
    TICK_MS
}
fn default_answer_base_ms() -> u64 {
    ANSWER_BASE_MS
}
fn default_reveal_ms() -> u64 {
    REVEAL_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed_level: default_speed_level(),
            theme: default_theme(),
            tick_ms: default_tick_ms(),
            answer_base_ms: default_answer_base_ms(),
            reveal_ms: default_reveal_ms(),
            shuffle_questions: false,
            last_dataset: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.normalize();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lexiquiz")
            .join("config.toml")
    }

    /// Reset out-of-range values left behind by hand edits.
    pub fn normalize(&mut self) {
        if SpeedLevel::new(self.speed_level).is_none() {
            self.speed_level = default_speed_level();
        }
        if self.tick_ms == 0 {
            self.tick_ms = default_tick_ms();
        }
        if self.answer_base_ms == 0 {
            self.answer_base_ms = default_answer_base_ms();
        }
        if self.reveal_ms == 0 {
            self.reveal_ms = default_reveal_ms();
        }
        self.tick_ms = self.tick_ms.clamp(MIN_TICK_MS, MAX_TICK_MS);
        self.answer_base_ms = self.answer_base_ms.clamp(self.tick_ms, MAX_PHASE_MS);
        self.reveal_ms = self.reveal_ms.clamp(self.tick_ms, MAX_PHASE_MS);
    }

    /// Carry over what a session may change for good: the speed level and
    /// the dataset. Everything else in `runtime` was a one-off override.
    pub fn remember_session(&mut self, runtime: &Config) {
        self.speed_level = runtime.speed_level;
        if runtime.last_dataset.is_some() {
            self.last_dataset = runtime.last_dataset.clone();
        }
    }

    pub fn speed(&self) -> SpeedLevel {
        SpeedLevel::new(self.speed_level).unwrap_or_default()
    }

    pub fn timings(&self) -> Timings {
        Timings {
            tick_ms: self.tick_ms,
            answer_base_ms: self.answer_base_ms,
            reveal_ms: self.reveal_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.speed_level, 1);
        assert_eq!(config.theme, "catppuccin-mocha");
        assert_eq!(config.timings(), Timings::default());
        assert!(!config.shuffle_questions);
        assert!(config.last_dataset.is_none());
    }

    #[test]
    fn test_config_serde_partial_fields() {
        let toml_str = r#"
speed_level = 3
theme = "gruvbox"
last_dataset = "/tmp/words.json"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.speed().get(), 3);
        assert_eq!(config.theme, "gruvbox");
        assert_eq!(config.last_dataset, Some(PathBuf::from("/tmp/words.json")));
        assert_eq!(config.reveal_ms, REVEAL_MS);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let mut config = Config::default();
        config.speed_level = 2;
        config.last_dataset = Some(PathBuf::from("vocab.json"));
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.speed_level, 2);
        assert_eq!(deserialized.last_dataset, config.last_dataset);
    }

    #[test]
    fn test_normalize_resets_invalid_values() {
        let mut config: Config = toml::from_str("speed_level = 9\ntick_ms = 0").unwrap();
        config.normalize();
        assert_eq!(config.speed_level, 1);
        assert_eq!(config.tick_ms, TICK_MS);
    }

    #[test]
    fn test_normalize_clamps_oversized_timings() {
        let mut config: Config =
            toml::from_str("tick_ms = 10000000000000\nanswer_base_ms = 99999999\nreveal_ms = 5")
                .unwrap();
        config.normalize();
        assert_eq!(config.tick_ms, MAX_TICK_MS);
        assert_eq!(config.answer_base_ms, MAX_PHASE_MS);
        assert_eq!(config.reveal_ms, MAX_TICK_MS);
    }

    #[test]
    fn test_oversized_tick_still_runs_the_quiz() {
        use crate::session::engine::QuizEngine;
        use crate::session::question::Question;

        let mut config: Config = toml::from_str("tick_ms = 10000000000000").unwrap();
        config.normalize();
        let mut engine = QuizEngine::new(config.timings());
        engine.load(vec![
            Question::new("cat", "a feline", "", "?"),
            Question::new("dog", "a canine", "", "?"),
        ]);
        for _ in 0..1_000 {
            if engine.is_completed() {
                break;
            }
            engine.tick();
        }
        assert!(engine.is_completed());
        assert_eq!(engine.score(), 2);
    }

    #[test]
    fn test_remember_session_keeps_one_off_overrides_out() {
        let saved = Config::default();
        let mut runtime = saved.clone();
        runtime.theme = "no-such-theme".to_string();
        runtime.shuffle_questions = true;
        runtime.speed_level = 3;
        runtime.last_dataset = Some(PathBuf::from("words.json"));

        let mut persisted = saved.clone();
        persisted.remember_session(&runtime);
        assert_eq!(persisted.speed_level, 3);
        assert_eq!(persisted.last_dataset, Some(PathBuf::from("words.json")));
        assert_eq!(persisted.theme, saved.theme);
        assert!(!persisted.shuffle_questions);

        let reloaded: Config = toml::from_str(&toml::to_string_pretty(&persisted).unwrap()).unwrap();
        assert!(!reloaded.shuffle_questions);
        assert_eq!(reloaded.theme, "catppuccin-mocha");
    }
}
