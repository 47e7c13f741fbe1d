/// Key press routed to the carousel.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    Char(char),
    Other,
}

/// Carousel operation bound to a key.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    Previous,
    Next,
    TogglePlayPause,
    Shuffle,
}

/// What the host should do with a key after the carousel saw it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct KeyResponse {
    pub handled: bool,
    /// Host must skip its default handling (page scroll for space).
    pub prevent_default: bool,
}

impl Key {
    /// Parses a DOM `KeyboardEvent.key` value.
    pub fn from_dom_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            " " => Key::Space,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }

    pub fn action(self) -> Option<Action> {
        match self {
            Key::ArrowLeft => Some(Action::Previous),
            Key::ArrowRight => Some(Action::Next),
            Key::Space => Some(Action::TogglePlayPause),
            Key::Char('s') | Key::Char('S') => Some(Action::Shuffle),
            _ => None,
        }
    }
}
