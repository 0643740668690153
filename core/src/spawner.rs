use alloc::collections::VecDeque;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

/// Tiles claimed by one spawn cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wave {
    moles: TileMask,
    hazards: TileMask,
}

impl Wave {
    pub fn new(moles: TileMask, hazards: TileMask) -> Result<Self> {
        if !TileMask::ALL.contains(moles | hazards) {
            return Err(GameError::InvalidTile);
        }
        if moles.intersects(hazards) {
            return Err(GameError::OverlappingClaims);
        }
        Ok(Self { moles, hazards })
    }

    pub fn from_tiles(moles: &[TileIndex], hazards: &[TileIndex]) -> Result<Self> {
        for &tile in moles.iter().chain(hazards) {
            validate_tile(tile)?;
        }
        Self::new(
            moles.iter().copied().collect(),
            hazards.iter().copied().collect(),
        )
    }

    pub const fn empty() -> Self {
        Self {
            moles: TileMask::empty(),
            hazards: TileMask::empty(),
        }
    }

    pub const fn moles(&self) -> TileMask {
        self.moles
    }

    pub const fn hazards(&self) -> TileMask {
        self.hazards
    }

    pub fn occupant_at(&self, tile: TileIndex) -> Occupant {
        if self.moles.has(tile) {
            Occupant::Mole
        } else if self.hazards.has(tile) {
            Occupant::Hazard
        } else {
            Occupant::Empty
        }
    }
}

pub trait Spawner {
    fn next_wave(&mut self, difficulty: Difficulty) -> Wave;
}

/// Uniformly random placement, the way the game is normally played.
///
/// Tiles are drawn by rejection sampling against the tiles already claimed this
/// cycle. With at most four claims on nine tiles a free tile always exists, so
/// the loop needs no retry bound. This does not scale to large boards, where a
/// partial shuffle would be the better fit.
#[derive(Clone, Debug)]
pub struct RandomSpawner {
    rng: SmallRng,
}

impl RandomSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn pick_pattern(&mut self, difficulty: Difficulty) -> SpawnPattern {
        match difficulty.patterns() {
            [only] => *only,
            patterns => patterns[self.rng.random_range(0..patterns.len())],
        }
    }

    fn claim(&mut self, used: &mut TileMask) -> TileIndex {
        debug_assert!(*used != TileMask::ALL, "no free tile left to claim");
        loop {
            let tile = self.rng.random_range(0..TILE_COUNT);
            if !used.has(tile) {
                used.insert(TileMask::single(tile));
                return tile;
            }
        }
    }
}

impl Spawner for RandomSpawner {
    fn next_wave(&mut self, difficulty: Difficulty) -> Wave {
        let pattern = self.pick_pattern(difficulty);
        let mut used = TileMask::empty();

        let mut moles = TileMask::empty();
        for _ in 0..pattern.moles {
            moles |= TileMask::single(self.claim(&mut used));
        }

        let mut hazards = TileMask::empty();
        for _ in 0..pattern.hazards {
            hazards |= TileMask::single(self.claim(&mut used));
        }

        log::trace!(
            "wave {:?}: moles {:?}, hazards {:?}",
            pattern,
            moles.bits(),
            hazards.bits()
        );
        Wave { moles, hazards }
    }
}

/// Replays a fixed list of waves, then keeps the board empty.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSpawner {
    waves: VecDeque<Wave>,
}

impl ScriptedSpawner {
    pub fn new(waves: impl IntoIterator<Item = Wave>) -> Self {
        Self {
            waves: waves.into_iter().collect(),
        }
    }

    pub fn push(&mut self, wave: Wave) {
        self.waves.push_back(wave);
    }

    pub fn remaining(&self) -> usize {
        self.waves.len()
    }
}

impl Spawner for ScriptedSpawner {
    fn next_wave(&mut self, _difficulty: Difficulty) -> Wave {
        self.waves.pop_front().unwrap_or_default()
    }
}
