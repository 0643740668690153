use burrow_core::*;
use gloo::timers::callback::{Interval, Timeout};
use std::time::Duration;
use yew::html::Scope;

use crate::game::{GameView, Msg};
use crate::screen::{Feedback, FeedbackKind, Screen};
use crate::sound::AudioDeck;
use crate::utils::*;

impl StorageKey for HighScore {
    const KEY: &'static str = "burrow:high-score";
}

fn millis(period: Duration) -> u32 {
    period.as_millis().try_into().unwrap_or(u32::MAX)
}

/// Runs a round inside the page: gloo timers feed messages back into the
/// component, and everything presented lands in a [`Screen`] it renders.
#[derive(Debug)]
pub(crate) struct BrowserHost {
    link: Scope<GameView>,
    spawn_timer: Option<Interval>,
    countdown_timer: Option<Interval>,
    audio: AudioDeck,
    screen: Screen,
}

impl BrowserHost {
    pub(crate) fn new(link: Scope<GameView>) -> Self {
        Self {
            link,
            spawn_timer: None,
            countdown_timer: None,
            audio: AudioDeck::load(),
            screen: Screen::default(),
        }
    }

    pub(crate) fn screen(&self) -> &Screen {
        &self.screen
    }

    pub(crate) fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    fn timer_slot(&mut self, timer: Timer) -> &mut Option<Interval> {
        match timer {
            Timer::Spawn => &mut self.spawn_timer,
            Timer::Countdown => &mut self.countdown_timer,
        }
    }

    fn show_feedback(&mut self, tile: TileIndex, kind: FeedbackKind) {
        let Feedback { id, kind, .. } = self.screen.add_feedback(tile, kind);
        let link = self.link.clone();
        Timeout::new(millis(kind.lifetime()), move || {
            link.send_message(Msg::ExpireFeedback(id))
        })
        .forget();
    }
}

impl Scheduler for BrowserHost {
    fn schedule(&mut self, timer: Timer, period: Duration) {
        let link = self.link.clone();
        let interval = Interval::new(millis(period), move || link.send_message(Msg::Timer(timer)));
        if self.timer_slot(timer).replace(interval).is_some() {
            log::warn!("{:?} timer was still live, replaced it", timer);
        }
        log::debug!("{:?} timer every {:?}", timer, period);
    }

    fn cancel(&mut self, timer: Timer) {
        // dropping an Interval clears it
        if self.timer_slot(timer).take().is_some() {
            log::debug!("{:?} timer cancelled", timer);
        }
    }
}

impl Presenter for BrowserHost {
    fn show_board(&mut self, enabled: bool) {
        self.screen.board_enabled = enabled;
    }

    fn show_tile(&mut self, tile: TileIndex, occupant: Occupant) {
        self.screen.set_tile(tile, occupant);
    }

    fn show_score(&mut self, score: Score) {
        self.screen.score = score;
    }

    fn show_time_left(&mut self, time_left: Seconds) {
        self.screen.time_left = time_left;
    }

    fn show_high_score(&mut self, high_score: Score) {
        self.screen.high_score = high_score;
    }

    fn show_sound(&mut self, enabled: bool) {
        self.screen.sound_enabled = enabled;
    }

    fn hit_feedback(&mut self, tile: TileIndex, points: Score) {
        self.show_feedback(tile, FeedbackKind::Points(points));
    }

    fn hazard_feedback(&mut self, tile: TileIndex) {
        self.show_feedback(tile, FeedbackKind::Flash);
        self.show_feedback(tile, FeedbackKind::Shake);
    }

    fn show_stats(&mut self, stats: RoundStats) {
        self.screen.stats = stats;
        self.screen.stats_open = true;
    }

    fn hide_stats(&mut self) {
        self.screen.stats_open = false;
    }
}

impl Sound for BrowserHost {
    fn play(&mut self, cue: Cue) -> std::result::Result<(), SoundError> {
        self.audio.play(cue)
    }

    fn pause_music(&mut self) {
        self.audio.pause_music();
    }

    fn stop_music(&mut self) {
        self.audio.stop_music();
    }
}

impl HighScoreStore for BrowserHost {
    fn load_high_score(&self) -> HighScore {
        HighScore::local_or_default()
    }

    fn save_high_score(&mut self, high_score: &HighScore) {
        high_score.local_save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_score_storage_key_is_namespaced() {
        assert_eq!(<HighScore as StorageKey>::KEY, "burrow:high-score");
    }

    #[test]
    fn periods_convert_to_whole_millis() {
        assert_eq!(millis(Difficulty::Easy.profile().spawn_interval), 1400);
        assert_eq!(millis(COUNTDOWN_PERIOD), 1000);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
