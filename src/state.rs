/// Opaque handle to a slide: its position in the host's original ordering.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct SlideId(pub usize);

/// Transition classification of a slide relative to the current position.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Marker {
    Active, // The slide being shown
    Prev,   // Circular predecessor of the active slide
    Next,   // Circular successor of the active slide
    None,   // Everything else
}

/// Read-only view of the controller state.
#[derive(Debug, PartialEq, Clone)]
pub struct CarouselState {
    pub sequence: Vec<SlideId>,
    pub current_index: usize,
    pub is_playing: bool,
    pub advance_timer_active: bool,
    pub progress_timer_active: bool,
    pub progress_fraction: f32,
}

/// Marker of `position` when `current` is active in a sequence of `len` slides.
///
/// Prev takes precedence over next, so two slides never end up with three
/// markers between them.
pub fn marker_for(position: usize, current: usize, len: usize) -> Marker {
    if position == current {
        Marker::Active
    } else if position == (current + len - 1) % len {
        Marker::Prev
    } else if position == (current + 1) % len {
        Marker::Next
    } else {
        Marker::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_wrap_around_both_ends() {
        assert_eq!(marker_for(0, 0, 5), Marker::Active);
        assert_eq!(marker_for(4, 0, 5), Marker::Prev);
        assert_eq!(marker_for(1, 0, 5), Marker::Next);
        assert_eq!(marker_for(2, 0, 5), Marker::None);

        assert_eq!(marker_for(3, 4, 5), Marker::Prev);
        assert_eq!(marker_for(0, 4, 5), Marker::Next);
    }

    #[test]
    fn single_slide_is_only_active() {
        assert_eq!(marker_for(0, 0, 1), Marker::Active);
    }

    #[test]
    fn two_slides_get_active_and_prev() {
        assert_eq!(marker_for(0, 1, 2), Marker::Prev);
        assert_eq!(marker_for(1, 1, 2), Marker::Active);
        assert_eq!(marker_for(1, 0, 2), Marker::Prev);
    }
}
