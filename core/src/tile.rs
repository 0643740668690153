use serde::{Deserialize, Serialize};

/// What currently sits on a tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    #[default]
    Empty,
    Mole,
    Hazard,
}

impl Occupant {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}
