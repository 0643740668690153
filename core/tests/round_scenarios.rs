//! Whole-round scenarios driven through the public controller API.

use std::collections::BTreeSet;
use std::time::Duration;

use burrow_core::*;

/// Host double that mirrors what a player would see.
#[derive(Debug, Default)]
struct ScreenRecorder {
    tiles: [Occupant; TILE_COUNT as usize],
    live_timers: BTreeSet<(u8, u64)>,
    cancelled: Vec<Timer>,
    board_enabled: bool,
    score: Score,
    time_left: Seconds,
    high_score_readout: Score,
    sound_readout: bool,
    popups: Vec<(TileIndex, Score)>,
    hazard_flashes: Vec<TileIndex>,
    stats: Option<RoundStats>,
    cues: Vec<Cue>,
    music_playing: bool,
    stored: HighScore,
    saves: u32,
}

impl ScreenRecorder {
    fn with_stored(stored: HighScore) -> Self {
        Self {
            stored,
            ..Default::default()
        }
    }

    fn timer_key(timer: Timer) -> u8 {
        match timer {
            Timer::Spawn => 0,
            Timer::Countdown => 1,
        }
    }
}

impl Scheduler for ScreenRecorder {
    fn schedule(&mut self, timer: Timer, period: Duration) {
        self.live_timers
            .insert((Self::timer_key(timer), period.as_millis() as u64));
    }

    fn cancel(&mut self, timer: Timer) {
        let key = Self::timer_key(timer);
        self.live_timers.retain(|&(live, _)| live != key);
        self.cancelled.push(timer);
    }
}

impl Presenter for ScreenRecorder {
    fn show_board(&mut self, enabled: bool) {
        self.board_enabled = enabled;
    }

    fn show_tile(&mut self, tile: TileIndex, occupant: Occupant) {
        self.tiles[usize::from(tile)] = occupant;
    }

    fn show_score(&mut self, score: Score) {
        self.score = score;
    }

    fn show_time_left(&mut self, time_left: Seconds) {
        self.time_left = time_left;
    }

    fn show_high_score(&mut self, high_score: Score) {
        self.high_score_readout = high_score;
    }

    fn show_sound(&mut self, enabled: bool) {
        self.sound_readout = enabled;
    }

    fn hit_feedback(&mut self, tile: TileIndex, points: Score) {
        self.popups.push((tile, points));
    }

    fn hazard_feedback(&mut self, tile: TileIndex) {
        self.hazard_flashes.push(tile);
    }

    fn show_stats(&mut self, stats: RoundStats) {
        self.stats = Some(stats);
    }

    fn hide_stats(&mut self) {
        self.stats = None;
    }
}

impl Sound for ScreenRecorder {
    fn play(&mut self, cue: Cue) -> std::result::Result<(), SoundError> {
        if cue == Cue::Music {
            self.music_playing = true;
        }
        self.cues.push(cue);
        Ok(())
    }

    fn pause_music(&mut self) {
        self.music_playing = false;
    }

    fn stop_music(&mut self) {
        self.music_playing = false;
    }
}

impl HighScoreStore for ScreenRecorder {
    fn load_high_score(&self) -> HighScore {
        self.stored
    }

    fn save_high_score(&mut self, high_score: &HighScore) {
        self.stored = *high_score;
        self.saves += 1;
    }
}

fn wave(moles: &[TileIndex], hazards: &[TileIndex]) -> Wave {
    Wave::from_tiles(moles, hazards).unwrap()
}

fn controller(
    stored: HighScore,
    waves: Vec<Wave>,
) -> GameController<ScreenRecorder, ScriptedSpawner> {
    GameController::new(
        ScreenRecorder::with_stored(stored),
        ScriptedSpawner::new(waves),
    )
}

#[test]
fn idle_board_shows_stored_high_score_and_blocks_input() {
    let mut game = controller(HighScore::new(90), Vec::new());

    assert_eq!(game.host().high_score_readout, 90);
    assert!(!game.host().board_enabled);
    assert!(game.host().sound_readout);
    assert_eq!(game.select_tile(3), Ok(SelectOutcome::NoChange));
}

#[test]
fn medium_round_hit_then_hazard() {
    let mut game = controller(HighScore::default(), vec![wave(&[4], &[0]), wave(&[6], &[2])]);
    game.start(Difficulty::Medium).unwrap();
    assert_eq!(game.host().time_left, 35);
    assert_eq!(
        game.host().live_timers,
        BTreeSet::from([(0, 1100), (1, 1000)])
    );

    game.on_timer(Timer::Spawn);
    assert_eq!(game.host().tiles[4], Occupant::Mole);

    game.select_tile(4).unwrap();
    assert_eq!(game.host().score, 10);
    assert_eq!(game.session().hits(), 1);
    assert_eq!(game.host().tiles[4], Occupant::Empty);
    assert_eq!(game.host().popups, [(4, 10)]);
    assert_eq!(game.host().cues, [Cue::Music, Cue::Hit]);

    game.on_timer(Timer::Spawn);
    assert_eq!(game.host().tiles[2], Occupant::Hazard);

    let outcome = game.select_tile(2).unwrap();
    assert!(matches!(outcome, SelectOutcome::HitHazard { tile: 2, .. }));
    assert_eq!(game.session().state(), RoundState::Over);
    assert_eq!(game.host().hazard_flashes, [2]);
    assert!(game.host().live_timers.is_empty());
    assert!(game.host().tiles.iter().all(|tile| tile.is_empty()));
    assert!(!game.host().music_playing);
    assert_eq!(game.host().cues.last(), Some(&Cue::RoundOver));

    let stats = game.host().stats.unwrap();
    assert_eq!(stats, RoundStats { hits: 1, misses: 1 });
    assert_eq!(stats.accuracy(), 50);
}

#[test]
fn nothing_moves_after_the_round_is_over() {
    let mut game = controller(HighScore::default(), vec![wave(&[1], &[5]), wave(&[3], &[7])]);
    game.start(Difficulty::Easy).unwrap();
    game.on_timer(Timer::Spawn);
    game.select_tile(5).unwrap();
    let cancelled = game.host().cancelled.len();

    game.on_timer(Timer::Spawn);
    game.on_timer(Timer::Countdown);
    game.select_tile(3).unwrap();
    game.end();

    assert!(game.host().tiles.iter().all(|tile| tile.is_empty()));
    assert_eq!(game.session().misses(), 1);
    assert_eq!(game.host().cancelled.len(), cancelled);
    assert_eq!(game.session().spawner().remaining(), 1);
}

#[test]
fn countdown_runs_out_once() {
    let mut game = controller(HighScore::default(), Vec::new());
    game.start(Difficulty::Hard).unwrap();

    for _ in 0..35 {
        game.on_timer(Timer::Countdown);
    }
    assert_eq!(game.host().time_left, 0);
    assert!(game.session().state().is_running());

    for _ in 0..4 {
        game.on_timer(Timer::Countdown);
    }

    assert_eq!(game.session().state(), RoundState::Over);
    assert_eq!(game.host().cancelled, [Timer::Spawn, Timer::Countdown]);
    assert_eq!(
        game.host()
            .cues
            .iter()
            .filter(|&&cue| cue == Cue::RoundOver)
            .count(),
        1
    );
    assert_eq!(game.host().stats, Some(RoundStats::default()));
}

#[test]
fn high_score_survives_a_worse_round() {
    let four_moles = (0..4).map(|tile| wave(&[tile], &[8])).collect();
    let mut first = controller(HighScore::default(), four_moles);
    first.start(Difficulty::Medium).unwrap();
    for tile in 0..4 {
        first.on_timer(Timer::Spawn);
        first.select_tile(tile).unwrap();
    }
    first.end();

    assert_eq!(first.session().score(), 40);
    let stored = first.host().stored;
    assert_eq!(stored, HighScore::new(40));
    assert_eq!(first.host().high_score_readout, 40);

    let three_moles = (0..3).map(|tile| wave(&[tile], &[8])).collect();
    let mut second = controller(stored, three_moles);
    second.start(Difficulty::Medium).unwrap();
    for tile in 0..3 {
        second.on_timer(Timer::Spawn);
        second.select_tile(tile).unwrap();
    }
    second.end();

    assert_eq!(second.session().score(), 30);
    assert_eq!(second.host().stored, HighScore::new(40));
    assert_eq!(second.host().saves, 0);
    assert_eq!(second.high_score(), HighScore::new(40));
}

#[test]
fn sound_toggle_pauses_and_resumes_music() {
    let mut game = controller(HighScore::default(), Vec::new());
    game.start(Difficulty::Medium).unwrap();
    assert!(game.host().music_playing);

    assert!(!game.toggle_sound());
    assert!(!game.host().music_playing);
    assert!(!game.host().sound_readout);

    assert!(game.toggle_sound());
    assert!(game.host().music_playing);
    assert!(game.host().sound_readout);
}

#[test]
fn restart_stops_music() {
    let mut game = controller(HighScore::default(), Vec::new());
    game.start(Difficulty::Medium).unwrap();

    game.restart();

    assert!(!game.host().music_playing);
}

#[test]
fn random_rounds_never_overlap_claims() {
    let mut game = GameController::new(ScreenRecorder::default(), RandomSpawner::new(11));
    game.start(Difficulty::Hard).unwrap();

    for _ in 0..50 {
        game.on_timer(Timer::Spawn);
        let moles = game.session().moles();
        let hazards = game.session().hazards();
        assert!(!moles.intersects(hazards));
        assert!((1..=2).contains(&moles.count()));
        assert!((1..=2).contains(&hazards.count()));
        assert!(moles.count() + hazards.count() <= 4);
        for tile in 0..TILE_COUNT {
            assert_eq!(game.host().tiles[usize::from(tile)], game.session().occupant_at(tile));
        }
    }
}

#[test]
fn muted_hit_still_scores_without_a_hit_cue() {
    let mut game = controller(HighScore::default(), vec![wave(&[4], &[0])]);
    assert!(!game.toggle_sound());
    game.start(Difficulty::Medium).unwrap();
    game.on_timer(Timer::Spawn);

    let outcome = game.select_tile(4).unwrap();

    assert_eq!(outcome, SelectOutcome::Hit { tile: 4, score: 10 });
    assert_eq!(game.host().score, 10);
    assert_eq!(game.session().hits(), 1);
    assert_eq!(game.host().popups, [(4, 10)]);
    assert!(!game.host().cues.contains(&Cue::Hit));
    assert!(game.host().cues.is_empty());
}
