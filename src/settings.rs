//! Run settings
//!
//! Loaded from a JSON file next to the binary. Missing or broken files fall
//! back to defaults so a bad config never stops the game from starting.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Casual,
    #[default]
    Normal,
    Brutal,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Casual => "Casual",
            Difficulty::Normal => "Normal",
            Difficulty::Brutal => "Brutal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "casual" | "easy" => Some(Difficulty::Casual),
            "normal" => Some(Difficulty::Normal),
            "brutal" | "hard" => Some(Difficulty::Brutal),
            _ => None,
        }
    }

    /// Lives the run starts with
    pub fn starting_lives(&self) -> u32 {
        match self {
            Difficulty::Casual => 5,
            Difficulty::Normal => 3,
            Difficulty::Brutal => 1,
        }
    }

    /// Level the run starts on (spawn rates scale with level)
    pub fn starting_level(&self) -> u32 {
        match self {
            Difficulty::Casual => 1,
            Difficulty::Normal => 1,
            Difficulty::Brutal => 3,
        }
    }
}

/// Run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty preset
    pub difficulty: Difficulty,
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,
    /// Overrides the preset's starting level
    pub starting_level: Option<u32>,
    /// Print the status line every N ticks (0 = never)
    pub status_every: u32,
    /// Stop the headless run after this many ticks
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            seed: None,
            starting_level: None,
            status_every: 120,
            max_ticks: 10_000,
        }
    }
}

impl Settings {
    /// Create settings from a difficulty preset
    pub fn from_preset(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn starting_lives(&self) -> u32 {
        self.difficulty.starting_lives()
    }

    /// Effective starting level (never below 1)
    pub fn starting_level(&self) -> u32 {
        self.starting_level
            .unwrap_or_else(|| self.difficulty.starting_level())
            .max(1)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
