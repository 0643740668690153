use core::fmt;
use core::str::FromStr;
use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Timing for one difficulty level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub spawn_interval: Duration,
    pub round_duration: Seconds,
}

/// How many moles and hazards a single spawn cycle places.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnPattern {
    pub moles: u8,
    pub hazards: u8,
}

impl SpawnPattern {
    pub const fn new(moles: u8, hazards: u8) -> Self {
        Self { moles, hazards }
    }

    pub const fn claims(self) -> u8 {
        self.moles + self.hazards
    }
}

const STEADY_PATTERNS: &[SpawnPattern] = &[SpawnPattern::new(1, 1)];

const CHAOS_PATTERNS: &[SpawnPattern] = &[
    SpawnPattern::new(1, 2),
    SpawnPattern::new(2, 1),
    SpawnPattern::new(2, 2),
];

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
        }
    }

    pub const fn label(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "Easy",
            Medium => "Medium",
            Hard => "Hard",
        }
    }

    pub const fn profile(self) -> DifficultyProfile {
        use Difficulty::*;
        let (spawn_ms, round_duration) = match self {
            Easy => (1400, 50),
            Medium => (1100, 35),
            Hard => (1000, 35),
        };
        DifficultyProfile {
            spawn_interval: Duration::from_millis(spawn_ms),
            round_duration,
        }
    }

    /// Patterns a spawn cycle picks from, uniformly at random.
    pub const fn patterns(self) -> &'static [SpawnPattern] {
        match self {
            Self::Hard => CHAOS_PATTERNS,
            Self::Easy | Self::Medium => STEADY_PATTERNS,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::UnknownDifficulty)
    }
}
