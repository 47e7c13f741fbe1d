//! Carousel controller.
//!
//! Owns the shuffled slide sequence, the current position, the play state
//! and two independent repeating timers:
//!
//! - the **advance timer**, firing every `slide_duration_ms` and moving to
//!   the next slide;
//! - the **progress timer**, firing every `progress_tick_ms` and filling the
//!   progress bar, stopping itself once the bar is full.
//!
//! Both timers are started and stopped together by `start_slideshow` and
//! `stop_slideshow`. Manual navigation restarts the progress timer only, so
//! the advance timer keeps its own schedule and the bar may complete slightly
//! before or after the actual advance.
//!
//! The controller never sleeps or spawns anything: the host delivers elapsed
//! time through [`Carousel::update`] and due callbacks run in order.

use log::{debug, info, warn};
use rand::Rng;

use crate::constants::*;
use crate::error::{CarouselError, Result};
use crate::input::{Action, Key, KeyResponse};
use crate::renderer::Renderer;
use crate::shuffle::fisher_yates;
use crate::state::{CarouselState, SlideId, marker_for};
use crate::timer::{Clock, Interval, earliest_due};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    pub slide_duration_ms: u64,
    pub progress_tick_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slide_duration_ms: SLIDE_DURATION_MS,
            progress_tick_ms: PROGRESS_TICK_MS,
        }
    }
}

pub struct Carousel<R: Renderer, G: Rng> {
    renderer: R,
    rng: G,
    config: CarouselConfig,

    sequence: Vec<SlideId>,
    current_index: usize,
    is_playing: bool,
    assets_ready: bool,

    clock: Clock,
    advance_timer: Option<Interval>,
    progress_timer: Option<Interval>,
    progress_ticks: u64,
}

impl<R: Renderer, G: Rng> Carousel<R, G> {
    /// Builds the controller and shuffles `slides` into display order.
    ///
    /// No timer runs until [`Carousel::on_assets_ready`] is called.
    pub fn initialize(slides: Vec<SlideId>, config: CarouselConfig, renderer: R, rng: G) -> Result<Self> {
        if slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }
        if config.slide_duration_ms == 0 {
            return Err(CarouselError::InvalidDuration);
        }
        if config.progress_tick_ms == 0 {
            return Err(CarouselError::InvalidTick);
        }

        let mut carousel = Self {
            renderer,
            rng,
            config,
            sequence: slides,
            current_index: 0,
            is_playing: true,
            assets_ready: false,
            clock: Clock::new(),
            advance_timer: None,
            progress_timer: None,
            progress_ticks: 0,
        };

        carousel.renderer.set_loading(true);
        carousel.renderer.set_play_pause_label(PAUSE_GLYPH);
        carousel.shuffle_sequence();
        carousel.show_slide(0);

        info!(
            "Carousel initialized with {} slides ({} ms per slide)",
            carousel.sequence.len(),
            config.slide_duration_ms
        );
        Ok(carousel)
    }

    /// Called once every slide's asset has loaded or failed.
    pub fn on_assets_ready(&mut self) {
        if self.assets_ready {
            warn!("Assets already reported ready, ignoring");
            return;
        }
        self.assets_ready = true;

        self.renderer.set_loading(false);
        self.show_slide(0);
        self.start_slideshow();
        info!("Assets ready, slideshow started");
    }

    /// Marks `index` active and its circular neighbours prev/next.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid position.
    pub fn show_slide(&mut self, index: usize) {
        let len = self.sequence.len();
        assert!(index < len, "slide index {} out of range for {} slides", index, len);

        for position in 0..len {
            self.renderer.set_marker(position, marker_for(position, index, len));
        }

        self.current_index = index;
        self.update_counter();
    }

    pub fn next_image(&mut self) {
        let next = (self.current_index + 1) % self.sequence.len();
        debug!("Next slide: {} -> {}", self.current_index, next);
        self.show_slide(next);
        self.restart_progress();
    }

    pub fn previous_image(&mut self) {
        let len = self.sequence.len();
        let prev = (self.current_index + len - 1) % len;
        debug!("Previous slide: {} -> {}", self.current_index, prev);
        self.show_slide(prev);
        self.restart_progress();
    }

    pub fn toggle_play_pause(&mut self) {
        self.is_playing = !self.is_playing;

        if self.is_playing {
            self.renderer.set_play_pause_label(PAUSE_GLYPH);
            self.start_slideshow();
        } else {
            self.renderer.set_play_pause_label(PLAY_GLYPH);
            self.stop_slideshow();
        }
        info!("Slideshow {}", if self.is_playing { "resumed" } else { "paused" });
    }

    /// Starts both timers from a fresh countdown. No-op while paused.
    pub fn start_slideshow(&mut self) {
        if !self.is_playing {
            return;
        }

        self.stop_slideshow();
        self.start_progress();
        self.advance_timer = Some(self.clock.interval(self.config.slide_duration_ms));
    }

    pub fn stop_slideshow(&mut self) {
        self.advance_timer = None;
        self.stop_progress();
    }

    /// Empties the progress bar and starts filling it again.
    pub fn start_progress(&mut self) {
        self.stop_progress();
        self.progress_ticks = 0;
        self.renderer.set_progress(0.0);
        self.progress_timer = Some(self.clock.interval(self.config.progress_tick_ms));
    }

    pub fn stop_progress(&mut self) {
        self.progress_timer = None;
    }

    pub fn restart_progress(&mut self) {
        if self.is_playing {
            self.start_progress();
        }
    }

    /// Reshuffles the slides and starts over from the first one.
    pub fn shuffle(&mut self) {
        self.stop_slideshow();
        self.shuffle_sequence();
        self.show_slide(0);
        if self.is_playing {
            self.start_slideshow();
        }
        info!("Slides reshuffled");
    }

    /// Lets `dt_ms` milliseconds pass, running every timer callback that
    /// falls due in that window in chronological order.
    pub fn update(&mut self, dt_ms: u64) {
        let target = self.clock.now_ms() + dt_ms;

        loop {
            let progress = self.progress_timer.map(|t| t.deadline());
            let advance = self.advance_timer.map(|t| t.deadline());
            let Some(next) = earliest_due([progress, advance], target) else {
                break;
            };

            self.clock.advance_to(next.0);
            if Some(next) == progress {
                self.tick_progress();
            } else {
                self.fire_advance();
            }
        }

        self.clock.advance_to(target);
    }

    /// Routes a key press. Keys are ignored until assets are ready.
    pub fn handle_key(&mut self, key: Key) -> KeyResponse {
        if !self.assets_ready {
            return KeyResponse::default();
        }
        let Some(action) = key.action() else {
            return KeyResponse::default();
        };

        match action {
            Action::Previous => self.previous_image(),
            Action::Next => self.next_image(),
            Action::TogglePlayPause => self.toggle_play_pause(),
            Action::Shuffle => self.shuffle(),
        }

        KeyResponse {
            handled: true,
            prevent_default: key == Key::Space,
        }
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            sequence: self.sequence.clone(),
            current_index: self.current_index,
            is_playing: self.is_playing,
            advance_timer_active: self.advance_timer.is_some(),
            progress_timer_active: self.progress_timer.is_some(),
            progress_fraction: self.progress_fraction(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn advance_timer_active(&self) -> bool {
        self.advance_timer.is_some()
    }

    pub fn progress_timer_active(&self) -> bool {
        self.progress_timer.is_some()
    }

    pub fn progress_fraction(&self) -> f32 {
        let elapsed = self.progress_ticks * self.config.progress_tick_ms;
        (elapsed as f32 / self.config.slide_duration_ms as f32).min(1.0)
    }

    pub fn sequence(&self) -> &[SlideId] {
        &self.sequence
    }

    // Never empty: initialize rejects an empty slide list
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn shuffle_sequence(&mut self) {
        fisher_yates(&mut self.sequence, &mut self.rng);
        self.renderer.reorder(&self.sequence);
        self.current_index = 0;
    }

    fn tick_progress(&mut self) {
        if let Some(timer) = self.progress_timer.as_mut() {
            timer.rearm();
        }
        self.progress_ticks += 1;
        self.renderer.set_progress(self.progress_fraction());

        if self.progress_ticks * self.config.progress_tick_ms >= self.config.slide_duration_ms {
            self.stop_progress();
        }
    }

    fn fire_advance(&mut self) {
        if let Some(timer) = self.advance_timer.as_mut() {
            timer.rearm();
        }
        self.next_image();
    }

    fn update_counter(&mut self) {
        self.renderer.set_counter(self.current_index + 1, self.sequence.len());
    }
}
