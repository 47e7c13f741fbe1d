//! Shuffled image carousel.
//!
//! The [`Carousel`] controller cycles through a fixed set of slides with a
//! timed auto-advance, keyboard navigation and a progress indicator. It
//! drives any display surface implementing [`Renderer`] and receives time
//! from its host through [`Carousel::update`].

pub mod assets;
pub mod carousel;
pub mod constants;
pub mod error;
pub mod input;
pub mod popup;
pub mod renderer;
pub mod shuffle;
pub mod state;
pub mod timer;

#[cfg(test)]
mod test_utils;

pub use carousel::{Carousel, CarouselConfig};
pub use error::{AssetError, CarouselError, Result};
pub use input::{Key, KeyResponse};
pub use renderer::Renderer;
pub use state::{CarouselState, Marker, SlideId};
