use serde::{Deserialize, Serialize};

use crate::*;

/// Points awarded for each mole hit.
pub const POINTS_PER_HIT: Score = 10;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub hits: u32,
    pub misses: u32,
}

impl RoundStats {
    pub const fn interactions(&self) -> u32 {
        self.hits.saturating_add(self.misses)
    }

    /// Hits as a whole percentage of all interactions, rounded half up.
    ///
    /// A round without any interaction has an accuracy of zero.
    pub const fn accuracy(&self) -> u32 {
        let total = self.hits as u64 + self.misses as u64;
        if total == 0 {
            return 0;
        }
        ((self.hits as u64 * 200 + total) / (total * 2)) as u32
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    TimeUp,
    HazardHit,
    /// Ended from outside, neither by the clock nor by a hazard.
    Forced,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub score: Score,
    pub stats: RoundStats,
    pub reason: EndReason,
}

/// Best score across rounds, persisted as a bare integer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScore(Score);

impl HighScore {
    pub const fn new(score: Score) -> Self {
        Self(score)
    }

    pub const fn best(self) -> Score {
        self.0
    }

    /// Records `score` if it beats the current best, returning whether it did.
    pub fn submit(&mut self, score: Score) -> bool {
        if score > self.0 {
            self.0 = score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(hits: u32, misses: u32) -> RoundStats {
        RoundStats { hits, misses }
    }

    #[test]
    fn accuracy_is_rounded_percentage() {
        assert_eq!(stats(7, 3).accuracy(), 70);
        assert_eq!(stats(1, 1).accuracy(), 50);
        assert_eq!(stats(2, 1).accuracy(), 67);
        assert_eq!(stats(1, 2).accuracy(), 33);
        assert_eq!(stats(5, 0).accuracy(), 100);
        assert_eq!(stats(0, 1).accuracy(), 0);
    }

    #[test]
    fn accuracy_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(stats(1, 7).accuracy(), 13);
    }

    #[test]
    fn accuracy_without_interactions_is_zero() {
        assert_eq!(stats(0, 0).accuracy(), 0);
        assert_eq!(stats(0, 0).interactions(), 0);
    }

    #[test]
    fn high_score_only_moves_up() {
        let mut high = HighScore::default();

        assert!(high.submit(40));
        assert_eq!(high.best(), 40);
        assert!(!high.submit(30));
        assert!(!high.submit(40));
        assert_eq!(high.best(), 40);
    }

    #[test]
    fn high_score_serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&HighScore::new(40)).unwrap(), "40");
        assert_eq!(
            serde_json::from_str::<HighScore>("120").unwrap(),
            HighScore::new(120)
        );
    }
}
