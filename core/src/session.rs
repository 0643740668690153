use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    #[default]
    Idle,
    Running,
    Over,
}

impl RoundState {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    NoChange,
    Counted(Seconds),
    Expired(RoundSummary),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpawnOutcome {
    NoChange,
    Spawned(Wave),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    NoChange,
    Empty,
    Hit {
        tile: TileIndex,
        score: Score,
    },
    HitHazard {
        tile: TileIndex,
        summary: RoundSummary,
    },
}

/// State of a single round: Idle, then Running, then Over for good.
#[derive(Clone, Debug)]
pub struct GameSession<S = RandomSpawner> {
    spawner: S,
    difficulty: Difficulty,
    state: RoundState,
    board: [Occupant; TILE_COUNT as usize],
    moles: TileMask,
    hazards: TileMask,
    score: Saturating<Score>,
    hits: Saturating<u32>,
    misses: Saturating<u32>,
    time_left: Seconds,
}

impl<S: Spawner> GameSession<S> {
    pub fn new(spawner: S) -> Self {
        Self {
            spawner,
            difficulty: Difficulty::default(),
            state: RoundState::Idle,
            board: Default::default(),
            moles: TileMask::empty(),
            hazards: TileMask::empty(),
            score: Saturating(0),
            hits: Saturating(0),
            misses: Saturating(0),
            time_left: Difficulty::default().profile().round_duration,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> Score {
        self.score.0
    }

    pub fn hits(&self) -> u32 {
        self.hits.0
    }

    pub fn misses(&self) -> u32 {
        self.misses.0
    }

    pub fn time_left(&self) -> Seconds {
        self.time_left
    }

    pub fn moles(&self) -> TileMask {
        self.moles
    }

    pub fn hazards(&self) -> TileMask {
        self.hazards
    }

    pub fn occupant_at(&self, tile: TileIndex) -> Occupant {
        self.board
            .get(usize::from(tile))
            .copied()
            .unwrap_or_default()
    }

    pub fn stats(&self) -> RoundStats {
        RoundStats {
            hits: self.hits.0,
            misses: self.misses.0,
        }
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Begins the round. Only an idle session can start; a finished one
    /// stays finished until it is replaced.
    pub fn start(&mut self, difficulty: Difficulty) -> Result<DifficultyProfile> {
        if !matches!(self.state, RoundState::Idle) {
            return Err(GameError::AlreadyStarted);
        }

        let profile = difficulty.profile();
        self.difficulty = difficulty;
        self.state = RoundState::Running;
        self.score = Saturating(0);
        self.hits = Saturating(0);
        self.misses = Saturating(0);
        self.time_left = profile.round_duration;
        self.clear_board();
        log::debug!("round started on {} ({:?})", difficulty, profile);
        Ok(profile)
    }

    /// One countdown step. The round expires on the first tick after the
    /// clock has already reached zero.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::NoChange;
        }

        if self.time_left > 0 {
            self.time_left -= 1;
            TickOutcome::Counted(self.time_left)
        } else {
            self.finish(EndReason::TimeUp)
                .map_or(TickOutcome::NoChange, TickOutcome::Expired)
        }
    }

    pub fn spawn_cycle(&mut self) -> SpawnOutcome {
        if !self.state.is_running() {
            return SpawnOutcome::NoChange;
        }

        self.clear_board();
        let wave = self.spawner.next_wave(self.difficulty);
        for tile in wave.moles().tiles() {
            self.board[usize::from(tile)] = Occupant::Mole;
        }
        for tile in wave.hazards().tiles() {
            self.board[usize::from(tile)] = Occupant::Hazard;
        }
        self.moles = wave.moles();
        self.hazards = wave.hazards();
        SpawnOutcome::Spawned(wave)
    }

    pub fn select_tile(&mut self, tile: TileIndex) -> Result<SelectOutcome> {
        let tile = validate_tile(tile)?;

        if !self.state.is_running() {
            return Ok(SelectOutcome::NoChange);
        }

        Ok(if self.moles.has(tile) {
            self.moles.remove(TileMask::single(tile));
            self.board[usize::from(tile)] = Occupant::Empty;
            self.score += POINTS_PER_HIT;
            self.hits += 1;
            SelectOutcome::Hit {
                tile,
                score: self.score.0,
            }
        } else if self.hazards.has(tile) {
            self.misses += 1;
            match self.finish(EndReason::HazardHit) {
                Some(summary) => SelectOutcome::HitHazard { tile, summary },
                None => SelectOutcome::NoChange,
            }
        } else {
            SelectOutcome::Empty
        })
    }

    /// Ends a running round. Returns `None` when there is nothing to end, so
    /// repeated calls are harmless.
    pub fn end(&mut self) -> Option<RoundSummary> {
        self.finish(EndReason::Forced)
    }

    fn finish(&mut self, reason: EndReason) -> Option<RoundSummary> {
        if !self.state.is_running() {
            return None;
        }

        self.state = RoundState::Over;
        self.clear_board();
        let summary = RoundSummary {
            score: self.score.0,
            stats: self.stats(),
            reason,
        };
        log::debug!("round over: {:?}", summary);
        Some(summary)
    }

    fn clear_board(&mut self) {
        self.board = Default::default();
        self.moles = TileMask::empty();
        self.hazards = TileMask::empty();
    }
}
