use burrow_core::{Cue, SoundError};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

const MUSIC_SRC: &str = "./music/background.mp3";
const HIT_SRC: &str = "./hit.wav";
const ROUND_OVER_SRC: &str = "./gameover.wav";
const MUSIC_VOLUME: f64 = 0.4;

/// The three audio elements the game plays.
#[derive(Debug, Default)]
pub(crate) struct AudioDeck {
    music: Option<HtmlAudioElement>,
    hit: Option<HtmlAudioElement>,
    round_over: Option<HtmlAudioElement>,
}

impl AudioDeck {
    pub(crate) fn load() -> Self {
        let music = load_element(MUSIC_SRC);
        if let Some(music) = &music {
            music.set_loop(true);
            music.set_volume(MUSIC_VOLUME);
        }
        Self {
            music,
            hit: load_element(HIT_SRC),
            round_over: load_element(ROUND_OVER_SRC),
        }
    }

    fn element(&self, cue: Cue) -> Option<&HtmlAudioElement> {
        match cue {
            Cue::Music => self.music.as_ref(),
            Cue::Hit => self.hit.as_ref(),
            Cue::RoundOver => self.round_over.as_ref(),
        }
    }

    /// Starts playback. A promise the browser rejects later, usually because of
    /// its autoplay policy, is awaited and dropped.
    pub(crate) fn play(&self, cue: Cue) -> Result<(), SoundError> {
        let element = self.element(cue).ok_or(SoundError::Unavailable)?;
        if cue != Cue::Music {
            element.set_current_time(0.0);
        }
        let promise = element.play().map_err(|err| {
            log::debug!("{:?} play() threw: {:?}", cue, err);
            SoundError::Rejected
        })?;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::debug!("{:?} playback rejected: {:?}", cue, err);
            }
        });
        Ok(())
    }

    pub(crate) fn pause_music(&self) {
        if let Some(music) = &self.music {
            if let Err(err) = music.pause() {
                log::warn!("could not pause music: {:?}", err);
            }
        }
    }

    pub(crate) fn stop_music(&self) {
        self.pause_music();
        if let Some(music) = &self.music {
            music.set_current_time(0.0);
        }
    }
}

fn load_element(src: &str) -> Option<HtmlAudioElement> {
    HtmlAudioElement::new_with_src(src)
        .map_err(|err| log::warn!("could not load {}: {:?}", src, err))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_reports_unavailable() {
        let deck = AudioDeck::default();

        assert_eq!(deck.play(Cue::Hit), Err(SoundError::Unavailable));
        assert_eq!(deck.play(Cue::Music), Err(SoundError::Unavailable));
    }

    #[cfg(target_arch = "wasm32")]
    mod browser {
        use super::*;
        use wasm_bindgen_test::*;

        wasm_bindgen_test_configure!(run_in_browser);

        #[wasm_bindgen_test]
        fn music_loops_at_reduced_volume() {
            let deck = AudioDeck::load();

            let music = deck.music.as_ref().unwrap();
            assert!(music.loop_());
            assert_eq!(music.volume(), MUSIC_VOLUME);
            assert!(deck.hit.is_some());
            assert!(deck.round_over.is_some());
        }

        #[wasm_bindgen_test]
        fn stop_music_leaves_it_paused_at_the_start() {
            let deck = AudioDeck::load();

            deck.stop_music();

            let music = deck.music.as_ref().unwrap();
            assert!(music.paused());
            assert_eq!(music.current_time(), 0.0);
        }
    }
}
