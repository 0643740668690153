//! What the page currently shows, kept apart from the DOM so it can be
//! checked without a browser.

use burrow_core::*;
use std::time::Duration;

pub(crate) type FeedbackId = u32;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum FeedbackKind {
    Points(Score),
    Flash,
    Shake,
}

impl FeedbackKind {
    pub(crate) const fn lifetime(self) -> Duration {
        match self {
            Self::Points(_) => POPUP_LIFETIME,
            Self::Flash => FLASH_LIFETIME,
            Self::Shake => SHAKE_LIFETIME,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Feedback {
    pub id: FeedbackId,
    pub tile: TileIndex,
    pub kind: FeedbackKind,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Screen {
    pub tiles: [Occupant; TILE_COUNT as usize],
    pub board_enabled: bool,
    pub score: Score,
    pub time_left: Seconds,
    pub high_score: Score,
    pub sound_enabled: bool,
    pub stats: RoundStats,
    pub stats_open: bool,
    feedback: Vec<Feedback>,
    next_feedback: FeedbackId,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            tiles: Default::default(),
            board_enabled: false,
            score: 0,
            time_left: Difficulty::default().profile().round_duration,
            high_score: 0,
            sound_enabled: true,
            stats: RoundStats::default(),
            stats_open: false,
            feedback: Vec::new(),
            next_feedback: 0,
        }
    }
}

impl Screen {
    pub(crate) fn occupant_at(&self, tile: TileIndex) -> Occupant {
        self.tiles
            .get(usize::from(tile))
            .copied()
            .unwrap_or_default()
    }

    pub(crate) fn set_tile(&mut self, tile: TileIndex, occupant: Occupant) {
        if let Some(slot) = self.tiles.get_mut(usize::from(tile)) {
            *slot = occupant;
        }
    }

    pub(crate) fn add_feedback(&mut self, tile: TileIndex, kind: FeedbackKind) -> Feedback {
        let feedback = Feedback {
            id: self.next_feedback,
            tile,
            kind,
        };
        self.next_feedback = self.next_feedback.wrapping_add(1);
        self.feedback.push(feedback);
        feedback
    }

    /// Drops an expired artifact, returning whether it was still shown.
    pub(crate) fn expire(&mut self, id: FeedbackId) -> bool {
        let before = self.feedback.len();
        self.feedback.retain(|feedback| feedback.id != id);
        self.feedback.len() != before
    }

    pub(crate) fn feedback_on(&self, tile: TileIndex) -> Vec<FeedbackKind> {
        self.feedback
            .iter()
            .filter(|feedback| feedback.tile == tile)
            .map(|feedback| feedback.kind)
            .collect()
    }

    pub(crate) const fn sound_label(&self) -> &'static str {
        if self.sound_enabled {
            "Sound: ON"
        } else {
            "Sound: OFF"
        }
    }
}
