//! Playback controller - owns the dial state (station, backdrop, play flag,
//! volume) and every transition on it. This module is deliberately free of
//! Dioxus and browser imports so the whole state machine is unit-testable on
//! the native host; the components layer projects it onto the page.

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::catalog::{Station, BACKDROPS, STATIONS};

/// Level applied to a freshly loaded stream. Volume is not carried across
/// station loads; only explicit volume commands move it afterwards.
pub const DEFAULT_VOLUME: f64 = 0.5;

/// Per-keypress volume increment for the arrow-key shortcuts.
pub const VOLUME_STEP: f64 = 0.1;

/// What the caller has to do after a play/pause toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    /// Nothing was tuned yet; the current station was loaded and the audio
    /// layer should start it once the new source is attached.
    Load,
    /// Playback was stopped. Pausing is synchronous and never fails.
    Pause,
    /// A paused stream should be resumed; report the outcome back through
    /// [`Controller::finish_play`].
    Resume,
}

/// Why a play attempt did not produce sound.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("Playback is blocked until you interact with the page. Press play to start the stream.")]
    AutoplayBlocked,
    #[error("Playback was aborted before the stream loaded.")]
    Aborted,
    #[error("Network error while loading this station.")]
    Network,
    #[error("The stream could not be decoded.")]
    Decode,
    #[error("No supported stream source was found for this station.")]
    Unsupported,
    #[error("Unable to start playback for this station.")]
    Other,
}

impl PlaybackError {
    /// Map a browser `MediaError.code` (1-4) to an error.
    pub fn from_media_code(code: u16) -> Self {
        match code {
            1 => Self::Aborted,
            2 => Self::Network,
            3 => Self::Decode,
            4 => Self::Unsupported,
            _ => Self::Other,
        }
    }
}

/// Dial state for the page. One instance lives in a signal for the lifetime
/// of the view; nothing else mutates playback state.
#[derive(Clone, Debug)]
pub struct Controller {
    station_index: usize,
    backdrop_index: usize,
    tuned: bool,
    playing: bool,
    volume: f64,
    load_epoch: u64,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    pub fn new() -> Self {
        Self {
            station_index: 0,
            backdrop_index: 0,
            tuned: false,
            playing: false,
            volume: DEFAULT_VOLUME,
            load_epoch: 0,
        }
    }

    pub fn station_index(&self) -> usize {
        self.station_index
    }

    pub fn station(&self) -> &'static Station {
        &STATIONS[self.station_index]
    }

    pub fn backdrop_index(&self) -> usize {
        self.backdrop_index
    }

    pub fn backdrop(&self) -> &'static str {
        BACKDROPS[self.backdrop_index]
    }

    pub fn is_tuned(&self) -> bool {
        self.tuned
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Increments on every station load, including reloads of the same index,
    /// so the audio layer can restart the stream and swap the backdrop.
    pub fn load_epoch(&self) -> u64 {
        self.load_epoch
    }

    /// Icon name for the play/pause button.
    pub fn glyph(&self) -> &'static str {
        if self.playing {
            "pause"
        } else {
            "play"
        }
    }

    /// Tune the dial to `index`. Resets the volume to the default, picks a
    /// fresh backdrop (always, whether or not the stream ends up playing),
    /// and bumps the load epoch. Returns `None` for an out-of-range index
    /// without touching any state.
    pub fn load_station(&mut self, index: usize, rng: &mut impl Rng) -> Option<&'static Station> {
        let station = STATIONS.get(index)?;
        self.station_index = index;
        self.tuned = true;
        self.volume = DEFAULT_VOLUME;
        self.backdrop_index = rng.gen_range(0..BACKDROPS.len());
        self.load_epoch += 1;
        Some(station)
    }

    /// Play/pause. The playing flag is only raised by [`Self::finish_play`]
    /// once the asynchronous play attempt actually succeeds.
    pub fn toggle(&mut self, rng: &mut impl Rng) -> ToggleAction {
        if !self.tuned {
            self.load_station(self.station_index, rng);
            ToggleAction::Load
        } else if self.playing {
            self.playing = false;
            ToggleAction::Pause
        } else {
            ToggleAction::Resume
        }
    }

    /// Record the outcome of a play attempt. Failure leaves the playing flag
    /// at its prior value; the notice shown to the user is the caller's job.
    pub fn finish_play(&mut self, outcome: Result<(), PlaybackError>) {
        if outcome.is_ok() {
            self.playing = true;
        }
    }

    /// Retune to a uniformly random station. Despite the directional name
    /// this is a fresh draw over the whole catalog and may land on the
    /// current station, which still restarts the stream.
    pub fn next_station(&mut self, rng: &mut impl Rng) -> &'static Station {
        self.retune_random(rng)
    }

    /// Same draw as [`Self::next_station`]; the two exist so the buttons and
    /// arrow keys keep their conventional names.
    pub fn prev_station(&mut self, rng: &mut impl Rng) -> &'static Station {
        self.retune_random(rng)
    }

    fn retune_random(&mut self, rng: &mut impl Rng) -> &'static Station {
        let index = rng.gen_range(0..STATIONS.len());
        self.load_station(index, rng)
            .unwrap_or_else(|| self.station())
    }

    /// Store `value` verbatim. The direct path performs no clamping or
    /// validation; slider input is normalized by the widget before it gets
    /// here.
    pub fn set_volume(&mut self, value: f64) {
        self.volume = value;
    }

    /// Nudge the level by `delta`, clamped to `[0.0, 1.0]`.
    pub fn step_volume(&mut self, delta: f64) -> f64 {
        self.volume = (self.volume + delta).clamp(0.0, 1.0);
        self.volume
    }
}

/// One fake "listeners tuned in" sample, uniform in `[0, 1000)`. Cosmetic
/// only; the page has no notion of a real audience.
pub fn sample_listeners(rng: &mut impl Rng) -> u32 {
    rng.gen_range(0..1000)
}

thread_local! {
    static PAGE_RNG: RefCell<StdRng> = RefCell::new(StdRng::from_entropy());
}

/// Run `f` with the page-wide RNG. Event handlers go through this; tests
/// construct their own seeded [`StdRng`] instead.
pub fn with_rng<T>(f: impl FnOnce(&mut StdRng) -> T) -> T {
    PAGE_RNG.with(|cell| f(&mut cell.borrow_mut()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn initial_state_is_untuned_and_paused() {
        let controller = Controller::new();
        assert_eq!(controller.station_index(), 0);
        assert!(!controller.is_tuned());
        assert!(!controller.is_playing());
        assert_eq!(controller.volume(), DEFAULT_VOLUME);
        assert_eq!(controller.load_epoch(), 0);
        assert_eq!(controller.glyph(), "play");
    }

    #[test]
    fn load_station_sets_every_valid_index() {
        let mut rng = rng(1);
        for index in 0..STATIONS.len() {
            let mut controller = Controller::new();
            let station = controller.load_station(index, &mut rng);
            assert_eq!(station, Some(&STATIONS[index]));
            assert_eq!(controller.station_index(), index);
            assert!(controller.is_tuned());
        }
    }

    #[test]
    fn load_station_rejects_out_of_range_index() {
        let mut rng = rng(1);
        let mut controller = Controller::new();
        assert_eq!(controller.load_station(STATIONS.len(), &mut rng), None);
        assert!(!controller.is_tuned());
        assert_eq!(controller.load_epoch(), 0);
    }

    #[test]
    fn every_load_bumps_the_epoch_and_repicks_the_backdrop() {
        let mut rng = rng(7);
        let mut controller = Controller::new();
        let mut epochs = Vec::new();
        let mut backdrops = Vec::new();
        for _ in 0..20 {
            controller.load_station(0, &mut rng);
            epochs.push(controller.load_epoch());
            backdrops.push(controller.backdrop_index());
            assert!(controller.backdrop_index() < BACKDROPS.len());
        }
        let expected: Vec<u64> = (1..=20).collect();
        assert_eq!(epochs, expected);
        // 20 uniform draws over the backdrop catalog settle on more than one
        // entry for any reasonable seed.
        backdrops.dedup();
        assert!(backdrops.len() > 1);
    }

    #[test]
    fn load_resets_volume_to_default() {
        let mut rng = rng(2);
        let mut controller = Controller::new();
        controller.set_volume(0.9);
        controller.load_station(1, &mut rng);
        assert_eq!(controller.volume(), DEFAULT_VOLUME);
    }

    #[test]
    fn random_retune_stays_in_range_and_is_reproducible() {
        let mut a = rng(42);
        let mut b = rng(42);
        let mut first = Controller::new();
        let mut second = Controller::new();
        for _ in 0..50 {
            first.next_station(&mut a);
            second.next_station(&mut b);
            assert!(first.station_index() < STATIONS.len());
            assert_eq!(first.station_index(), second.station_index());
            assert_eq!(first.backdrop_index(), second.backdrop_index());
        }
    }

    #[test]
    fn prev_station_draws_from_the_same_distribution() {
        let mut a = rng(9);
        let mut b = rng(9);
        let mut via_next = Controller::new();
        let mut via_prev = Controller::new();
        for _ in 0..25 {
            via_next.next_station(&mut a);
            via_prev.prev_station(&mut b);
            assert_eq!(via_next.station_index(), via_prev.station_index());
        }
    }

    #[test]
    fn toggle_from_cold_loads_the_current_station() {
        let mut rng = rng(3);
        let mut controller = Controller::new();
        assert_eq!(controller.toggle(&mut rng), ToggleAction::Load);
        assert!(controller.is_tuned());
        assert_eq!(controller.station_index(), 0);
        assert_eq!(controller.load_epoch(), 1);
        // Still paused until the play attempt reports back.
        assert!(!controller.is_playing());
    }

    #[test]
    fn glyph_alternates_across_successful_toggles() {
        let mut rng = rng(4);
        let mut controller = Controller::new();

        controller.toggle(&mut rng);
        controller.finish_play(Ok(()));
        assert!(controller.is_playing());
        assert_eq!(controller.glyph(), "pause");

        assert_eq!(controller.toggle(&mut rng), ToggleAction::Pause);
        assert!(!controller.is_playing());
        assert_eq!(controller.glyph(), "play");

        assert_eq!(controller.toggle(&mut rng), ToggleAction::Resume);
        assert!(!controller.is_playing());
        controller.finish_play(Ok(()));
        assert_eq!(controller.glyph(), "pause");
    }

    #[test]
    fn failed_play_leaves_the_playing_flag_untouched() {
        let mut rng = rng(5);
        let mut controller = Controller::new();

        controller.toggle(&mut rng);
        controller.finish_play(Err(PlaybackError::AutoplayBlocked));
        assert!(!controller.is_playing());

        controller.finish_play(Ok(()));
        assert!(controller.is_playing());
        controller.load_station(2, &mut rng);
        controller.finish_play(Err(PlaybackError::Network));
        assert!(controller.is_playing());
    }

    #[test]
    fn set_volume_stores_values_verbatim() {
        let mut controller = Controller::new();
        controller.set_volume(0.25);
        assert_eq!(controller.volume(), 0.25);
        // The direct path does not validate; out-of-range values pass through.
        controller.set_volume(1.5);
        assert_eq!(controller.volume(), 1.5);
        controller.set_volume(-0.5);
        assert_eq!(controller.volume(), -0.5);
    }

    #[test]
    fn five_steps_up_from_default_clamp_to_exactly_one() {
        let mut controller = Controller::new();
        for _ in 0..5 {
            controller.step_volume(VOLUME_STEP);
        }
        assert_eq!(controller.volume(), 1.0);
        controller.step_volume(VOLUME_STEP);
        assert_eq!(controller.volume(), 1.0);
    }

    #[test]
    fn stepping_down_never_goes_below_zero() {
        let mut controller = Controller::new();
        for _ in 0..7 {
            controller.step_volume(-VOLUME_STEP);
        }
        assert_eq!(controller.volume(), 0.0);
    }

    #[test]
    fn listener_samples_stay_in_range_and_follow_the_seed() {
        let mut a = rng(11);
        let mut b = rng(11);
        for _ in 0..100 {
            let sample = sample_listeners(&mut a);
            assert!(sample < 1000);
            assert_eq!(sample, sample_listeners(&mut b));
        }
    }

    #[test]
    fn media_error_codes_map_like_the_browser_reports_them() {
        assert_eq!(PlaybackError::from_media_code(1), PlaybackError::Aborted);
        assert_eq!(PlaybackError::from_media_code(2), PlaybackError::Network);
        assert_eq!(PlaybackError::from_media_code(3), PlaybackError::Decode);
        assert_eq!(
            PlaybackError::from_media_code(4),
            PlaybackError::Unsupported
        );
        assert_eq!(PlaybackError::from_media_code(0), PlaybackError::Other);
    }
}
