//! Seams between a round and the environment hosting it.
//!
//! The controller never touches timers, audio, storage or rendering directly;
//! a host implements these traits instead. In the browser that is the web
//! front-end, in tests a recording fake.

use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// Period of the countdown timer.
pub const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// How long the "+10" popup stays next to a hit tile.
pub const POPUP_LIFETIME: Duration = Duration::from_millis(600);

/// How long a clicked hazard tile flashes red.
pub const FLASH_LIFETIME: Duration = Duration::from_millis(400);

/// How long a clicked hazard tile shakes.
pub const SHAKE_LIFETIME: Duration = Duration::from_millis(200);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timer {
    Spawn,
    Countdown,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Music,
    Hit,
    RoundOver,
}

pub trait Scheduler {
    /// Starts firing `timer` every `period` until cancelled.
    fn schedule(&mut self, timer: Timer, period: Duration);

    fn cancel(&mut self, timer: Timer);
}

pub trait Presenter {
    /// Shows the board, accepting tile input only when `enabled`.
    fn show_board(&mut self, enabled: bool);
    fn show_tile(&mut self, tile: TileIndex, occupant: Occupant);
    fn show_score(&mut self, score: Score);
    fn show_time_left(&mut self, time_left: Seconds);
    fn show_high_score(&mut self, high_score: Score);
    fn show_sound(&mut self, enabled: bool);
    /// Transient "+points" artifact next to `tile`.
    fn hit_feedback(&mut self, tile: TileIndex, points: Score);
    /// Transient flash and shake on `tile`.
    fn hazard_feedback(&mut self, tile: TileIndex);
    fn show_stats(&mut self, stats: RoundStats);
    fn hide_stats(&mut self);
}

pub trait Sound {
    fn play(&mut self, cue: Cue) -> core::result::Result<(), SoundError>;
    fn pause_music(&mut self);
    /// Pauses the music and rewinds it to the start.
    fn stop_music(&mut self);
}

pub trait HighScoreStore {
    fn load_high_score(&self) -> HighScore;
    fn save_high_score(&mut self, high_score: &HighScore);
}

/// Everything a [`GameController`] needs from its environment.
pub trait Host: Scheduler + Presenter + Sound + HighScoreStore {}

impl<T: Scheduler + Presenter + Sound + HighScoreStore> Host for T {}
