use crate::*;

/// Drives a [`GameSession`] and mirrors every change onto a [`Host`].
#[derive(Debug)]
pub struct GameController<H, S = RandomSpawner> {
    host: H,
    session: GameSession<S>,
    high_score: HighScore,
    sound_enabled: bool,
}

impl<H: Host, S: Spawner> GameController<H, S> {
    /// Reads the persisted high score once and shows the idle board.
    pub fn new(mut host: H, spawner: S) -> Self {
        let high_score = host.load_high_score();
        let session = GameSession::new(spawner);

        host.show_high_score(high_score.best());
        host.show_score(session.score());
        host.show_time_left(session.time_left());
        host.show_sound(true);
        host.show_board(false);

        Self {
            host,
            session,
            high_score,
            sound_enabled: true,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    pub fn high_score(&self) -> HighScore {
        self.high_score
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn start(&mut self, difficulty: Difficulty) -> Result<()> {
        let profile = self.session.start(difficulty)?;

        self.host.show_score(self.session.score());
        self.host.show_time_left(self.session.time_left());
        if self.sound_enabled {
            self.play(Cue::Music);
        }
        self.host.show_board(true);
        self.clear_tiles();

        self.host.schedule(Timer::Spawn, profile.spawn_interval);
        self.host.schedule(Timer::Countdown, COUNTDOWN_PERIOD);
        Ok(())
    }

    pub fn on_timer(&mut self, timer: Timer) {
        match timer {
            Timer::Spawn => self.spawn_cycle(),
            Timer::Countdown => self.tick(),
        }
    }

    pub fn spawn_cycle(&mut self) {
        if let SpawnOutcome::Spawned(wave) = self.session.spawn_cycle() {
            for tile in 0..TILE_COUNT {
                self.host.show_tile(tile, wave.occupant_at(tile));
            }
        }
    }

    pub fn tick(&mut self) {
        match self.session.tick() {
            TickOutcome::NoChange => {}
            TickOutcome::Counted(time_left) => self.host.show_time_left(time_left),
            TickOutcome::Expired(summary) => self.finish(summary),
        }
    }

    pub fn select_tile(&mut self, tile: TileIndex) -> Result<SelectOutcome> {
        let outcome = self.session.select_tile(tile)?;

        match outcome {
            SelectOutcome::NoChange | SelectOutcome::Empty => {}
            SelectOutcome::Hit { tile, score } => {
                self.host.show_score(score);
                self.host.show_tile(tile, Occupant::Empty);
                self.host.hit_feedback(tile, POINTS_PER_HIT);
                if self.sound_enabled {
                    self.play(Cue::Hit);
                }
            }
            SelectOutcome::HitHazard { tile, summary } => {
                self.host.hazard_feedback(tile);
                self.finish(summary);
            }
        }

        Ok(outcome)
    }

    /// Ends the round; a no-op unless one is running.
    pub fn end(&mut self) {
        if let Some(summary) = self.session.end() {
            self.finish(summary);
        }
    }

    /// Flips the sound setting and returns the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        if self.sound_enabled {
            self.play(Cue::Music);
        } else {
            self.host.pause_music();
        }
        self.host.show_sound(self.sound_enabled);
        self.sound_enabled
    }

    pub fn show_stats(&mut self) {
        self.host.show_stats(self.session.stats());
    }

    pub fn close_stats(&mut self) {
        self.host.hide_stats();
    }

    /// Silences the round ahead of the host throwing it away.
    pub fn restart(&mut self) {
        self.host.stop_music();
    }

    fn finish(&mut self, summary: RoundSummary) {
        // spawn first, so no wave lands after the round is over
        self.host.cancel(Timer::Spawn);
        self.host.cancel(Timer::Countdown);

        self.clear_tiles();
        self.host.show_board(false);
        self.host.stop_music();
        if self.sound_enabled {
            self.play(Cue::RoundOver);
        }

        if self.high_score.submit(summary.score) {
            log::info!("new high score: {}", summary.score);
            self.host.save_high_score(&self.high_score);
            self.host.show_high_score(self.high_score.best());
        }

        self.host.show_stats(summary.stats);
    }

    fn clear_tiles(&mut self) {
        for tile in 0..TILE_COUNT {
            self.host.show_tile(tile, Occupant::Empty);
        }
    }

    fn play(&mut self, cue: Cue) {
        if let Err(err) = self.host.play(cue) {
            log::debug!("{:?} not played: {}", cue, err);
        }
    }
}
