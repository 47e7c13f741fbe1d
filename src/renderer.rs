use crate::state::{Marker, SlideId};

/// Display surface driven by the carousel controller.
///
/// Positions are ordinal positions in the current (shuffled) display order,
/// as last set through [`Renderer::reorder`].
pub trait Renderer {
    /// Applies `marker` to the slide at `position`, replacing any previous one.
    fn set_marker(&mut self, position: usize, marker: Marker);

    /// Rearranges the displayed slides so that `order[i]` sits at position `i`.
    fn reorder(&mut self, order: &[SlideId]);

    fn set_loading(&mut self, visible: bool);

    fn set_play_pause_label(&mut self, label: &str);

    /// Sets the progress fill, `fraction` in `[0, 1]`.
    fn set_progress(&mut self, fraction: f32);

    /// Updates the "current/total" display; `current` is 1-based.
    fn set_counter(&mut self, current: usize, total: usize);
}
