//! Shared test doubles, only compiled for unit tests.

use crate::renderer::Renderer;
use crate::state::{Marker, SlideId};

/// Renderer that records the last value of every affordance.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub markers: Vec<Marker>,
    pub order: Vec<SlideId>,
    pub loading: bool,
    pub label: String,
    pub progress: f32,
    pub counter: (usize, usize),
    pub reorders: usize,
}

impl Renderer for RecordingRenderer {
    fn set_marker(&mut self, position: usize, marker: Marker) {
        if position >= self.markers.len() {
            self.markers.resize(position + 1, Marker::None);
        }
        self.markers[position] = marker;
    }

    fn reorder(&mut self, order: &[SlideId]) {
        self.order = order.to_vec();
        self.markers = vec![Marker::None; order.len()];
        self.reorders += 1;
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn set_play_pause_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    fn set_progress(&mut self, fraction: f32) {
        self.progress = fraction;
    }

    fn set_counter(&mut self, current: usize, total: usize) {
        self.counter = (current, total);
    }
}

/// `n` slides in host order.
pub fn slides(n: usize) -> Vec<SlideId> {
    (0..n).map(SlideId).collect()
}
