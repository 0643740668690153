use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Index of a tile on the 3x3 board, row-major from the top-left corner.
pub type TileIndex = u8;

/// Points, used for the running score and the high score.
pub type Score = u32;

/// Whole seconds, used for the round countdown.
pub type Seconds = u32;

pub const TILE_COUNT: TileIndex = 9;

pub const fn validate_tile(index: TileIndex) -> Result<TileIndex> {
    if index < TILE_COUNT {
        Ok(index)
    } else {
        Err(GameError::InvalidTile)
    }
}

bitflags! {
    /// Set of tile indices, one bit per tile.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct TileMask: u16 {
        const ALL = (1 << TILE_COUNT) - 1;
    }
}

impl TileMask {
    /// Mask holding just `tile`, or an empty mask when `tile` is off the board.
    pub const fn single(tile: TileIndex) -> Self {
        if tile < TILE_COUNT {
            Self::from_bits_retain(1 << tile)
        } else {
            Self::empty()
        }
    }

    pub const fn has(self, tile: TileIndex) -> bool {
        tile < TILE_COUNT && self.contains(Self::single(tile))
    }

    pub const fn count(self) -> u32 {
        self.bits().count_ones()
    }

    /// Iterates over the member tiles in ascending order.
    pub fn tiles(self) -> impl Iterator<Item = TileIndex> {
        (0..TILE_COUNT).filter(move |&tile| self.has(tile))
    }
}

impl FromIterator<TileIndex> for TileMask {
    fn from_iter<I: IntoIterator<Item = TileIndex>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |mask, tile| mask | Self::single(tile))
    }
}
