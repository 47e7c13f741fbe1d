pub const WINDOW_WIDTH: i32 = 1280;            // Default window width
pub const WINDOW_HEIGHT: i32 = 720;            // Default window height
pub const FPS: u32 = 60;                       // Frames per second

pub const SLIDE_DURATION_MS: u64 = 4000;       // Time each slide stays active before auto-advance
pub const PROGRESS_TICK_MS: u64 = 50;          // Period of the progress bar timer
pub const ANIMATION_DURATION: f32 = 0.5;       // Duration of the slide cross-fade (seconds)

pub const REDIRECT_DELAY_MS: u64 = 3500;       // Time the popup stays up before redirecting
pub const REDIRECT_URL: &str = "https://wa.me/+2348123927685";

pub const PLAY_GLYPH: &str = "▶";
pub const PAUSE_GLYPH: &str = "⏸";
