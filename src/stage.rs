use raylib::prelude::*;

use carousel::constants::*;
use carousel::popup::RedirectPopup;
use carousel::{Marker, Renderer, SlideId};

const BAR_HEIGHT: f32 = 6.0;
const BUTTON_SIZE: f32 = 48.0;
const MARGIN: f32 = 16.0;
const SIDE_SCALE: f32 = 0.22; // Size of prev/next previews relative to the screen

struct StageSlide {
    texture: Option<Texture2D>,
    name: String,
    failed: bool,
    opacity: f32,
}

/// raylib surface for the carousel: keeps what the controller asked for and
/// draws it every frame.
pub struct Stage {
    slides: Vec<StageSlide>, // Host order
    order: Vec<usize>,       // Display position -> host index
    markers: Vec<Marker>,    // Per display position
    loading: bool,
    loaded: usize,
    label: String,
    progress: f32,
    counter: (usize, usize),
}

impl Stage {
    pub fn new(names: Vec<String>) -> Self {
        let count = names.len();
        Self {
            slides: names
                .into_iter()
                .map(|name| StageSlide { texture: None, name, failed: false, opacity: 0.0 })
                .collect(),
            order: (0..count).collect(),
            markers: vec![Marker::None; count],
            loading: true,
            loaded: 0,
            label: PAUSE_GLYPH.to_string(),
            progress: 0.0,
            counter: (0, count),
        }
    }

    /// Stores the outcome of loading the texture of host slide `index`.
    pub fn attach(&mut self, index: usize, texture: Result<Texture2D, String>) {
        let Some(slide) = self.slides.get_mut(index) else {
            return;
        };
        match texture {
            Ok(texture) => slide.texture = Some(texture),
            Err(_) => slide.failed = true,
        }
        self.loaded += 1;
    }

    /// Host index of the slide carrying `marker`.
    pub fn slide_with(&self, marker: Marker) -> Option<usize> {
        self.markers
            .iter()
            .position(|&m| m == marker)
            .and_then(|position| self.order.get(position).copied())
    }

    pub fn marker_of(&self, index: usize) -> Marker {
        self.order
            .iter()
            .position(|&i| i == index)
            .and_then(|position| self.markers.get(position).copied())
            .unwrap_or(Marker::None)
    }

    /// Fades the active slide in and every other one out.
    pub fn animate(&mut self, dt: f32) {
        let step = dt / ANIMATION_DURATION;
        for index in 0..self.slides.len() {
            let target = if self.marker_of(index) == Marker::Active { 1.0 } else { 0.0 };
            let slide = &mut self.slides[index];
            slide.opacity = if slide.opacity < target {
                (slide.opacity + step).min(target)
            } else {
                (slide.opacity - step).max(target)
            };
        }
    }

    pub fn play_button_rect(&self, screen_width: f32, screen_height: f32) -> Rectangle {
        Rectangle::new(
            (screen_width - BUTTON_SIZE) * 0.5,
            screen_height - BUTTON_SIZE - MARGIN - BAR_HEIGHT,
            BUTTON_SIZE,
            BUTTON_SIZE,
        )
    }

    pub fn chat_button_rect(&self, screen_width: f32, screen_height: f32) -> Rectangle {
        Rectangle::new(
            screen_width - 120.0 - MARGIN,
            screen_height - BUTTON_SIZE - MARGIN - BAR_HEIGHT,
            120.0,
            BUTTON_SIZE,
        )
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, popup: &RedirectPopup) {
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        d.clear_background(Color::new(17, 17, 17, 255));

        if self.loading {
            self.draw_loading(d, sw, sh);
            return;
        }

        // Previews first so the active slide covers them while it fades in
        for (marker, x) in [(Marker::Prev, sw * 0.125), (Marker::Next, sw * 0.875)] {
            if let Some(index) = self.slide_with(marker) {
                self.draw_slide(d, index, Vector2::new(x, sh * 0.5), sw * SIDE_SCALE, sh * SIDE_SCALE, 0.4);
            }
        }
        for index in 0..self.slides.len() {
            let opacity = self.slides[index].opacity;
            if opacity > 0.0 {
                self.draw_slide(d, index, Vector2::new(sw * 0.5, sh * 0.5), sw * 0.6, sh * 0.8, opacity);
            }
        }

        // Progress bar
        d.draw_rectangle_rec(Rectangle::new(0.0, sh - BAR_HEIGHT, sw, BAR_HEIGHT), Color::new(255, 255, 255, 40));
        d.draw_rectangle_rec(
            Rectangle::new(0.0, sh - BAR_HEIGHT, sw * self.progress.clamp(0.0, 1.0), BAR_HEIGHT),
            Color::SKYBLUE,
        );

        let (current, total) = self.counter;
        d.draw_text(&format!("{} / {}", current, total), (sw - 140.0) as i32, MARGIN as i32, 28, Color::WHITE);

        self.draw_play_button(d, self.play_button_rect(sw, sh));

        let chat = self.chat_button_rect(sw, sh);
        d.draw_rectangle_rec(chat, Color::new(37, 211, 102, 255));
        d.draw_text("Chat", (chat.x + 32.0) as i32, (chat.y + 14.0) as i32, 22, Color::WHITE);

        if popup.overlay_visible() {
            d.draw_rectangle_rec(Rectangle::new(0.0, 0.0, sw, sh), Color::new(0, 0, 0, 160));
        }
        if popup.popup_visible() {
            let bx = Rectangle::new(sw * 0.5 - 220.0, sh * 0.5 - 60.0, 440.0, 120.0);
            d.draw_rectangle_rec(bx, Color::RAYWHITE);
            d.draw_text("Redirecting you to WhatsApp...", (bx.x + 24.0) as i32, (bx.y + 48.0) as i32, 22, Color::DARKGRAY);
        }
    }

    fn draw_loading(&self, d: &mut RaylibDrawHandle, sw: f32, sh: f32) {
        let text = format!("Loading images... {}/{}", self.loaded, self.slides.len());
        d.draw_text(&text, (sw * 0.5 - 160.0) as i32, (sh * 0.5) as i32, 24, Color::LIGHTGRAY);
    }

    fn draw_slide(&self, d: &mut RaylibDrawHandle, index: usize, center: Vector2, max_w: f32, max_h: f32, alpha: f32) {
        let slide = &self.slides[index];
        match &slide.texture {
            Some(texture) => {
                let tex_width = texture.width() as f32;
                let tex_height = texture.height() as f32;
                let scale = fit_scale(tex_width, tex_height, max_w, max_h);
                let w = tex_width * scale;
                let h = tex_height * scale;

                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(center.x - w * 0.5, center.y - h * 0.5, w, h),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    with_alpha(Color::WHITE, alpha),
                );
            }
            None => {
                // Missing asset: placeholder box with the file name
                let rec = Rectangle::new(center.x - max_w * 0.5, center.y - max_h * 0.5, max_w, max_h);
                d.draw_rectangle_rec(rec, with_alpha(Color::DARKGRAY, alpha));
                let caption = if slide.failed { format!("Missing: {}", slide.name) } else { slide.name.clone() };
                d.draw_text(&caption, (rec.x + 12.0) as i32, (rec.y + 12.0) as i32, 20, with_alpha(Color::LIGHTGRAY, alpha));
            }
        }
    }

    fn draw_play_button(&self, d: &mut RaylibDrawHandle, rec: Rectangle) {
        d.draw_rectangle_rec(rec, Color::new(255, 255, 255, 50));
        let inset = rec.width * 0.3;
        if self.label == PLAY_GLYPH {
            d.draw_triangle(
                Vector2::new(rec.x + inset, rec.y + inset),
                Vector2::new(rec.x + inset, rec.y + rec.height - inset),
                Vector2::new(rec.x + rec.width - inset, rec.y + rec.height * 0.5),
                Color::WHITE,
            );
        } else {
            let bar = (rec.width - 2.0 * inset) / 3.0;
            let h = rec.height - 2.0 * inset;
            d.draw_rectangle_rec(Rectangle::new(rec.x + inset, rec.y + inset, bar, h), Color::WHITE);
            d.draw_rectangle_rec(Rectangle::new(rec.x + rec.width - inset - bar, rec.y + inset, bar, h), Color::WHITE);
        }
    }
}

impl Renderer for Stage {
    fn set_marker(&mut self, position: usize, marker: Marker) {
        if let Some(slot) = self.markers.get_mut(position) {
            *slot = marker;
        }
    }

    fn reorder(&mut self, order: &[SlideId]) {
        self.order = order.iter().map(|id| id.0).collect();
        self.markers = vec![Marker::None; self.order.len()];
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

/// Scale fitting a `width` x `height` texture into the given box, never
/// enlarging it.
pub fn fit_scale(width: f32, height: f32, max_w: f32, max_h: f32) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 1.0;
    }
    (max_w / width).min(max_h / height).min(1.0)
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(n: usize) -> Stage {
        Stage::new((0..n).map(|i| format!("img{}.jpg", i)).collect())
    }

    #[test]
    fn markers_follow_display_order() {
        let mut s = stage(3);
        s.reorder(&[SlideId(2), SlideId(0), SlideId(1)]);
        s.set_marker(0, Marker::Active);
        s.set_marker(1, Marker::Next);
        s.set_marker(2, Marker::Prev);

        assert_eq!(s.marker_of(2), Marker::Active);
        assert_eq!(s.marker_of(0), Marker::Next);
        assert_eq!(s.slide_with(Marker::Prev), Some(1));
    }

    #[test]
    fn active_slide_fades_in() {
        let mut s = stage(2);
        s.reorder(&[SlideId(0), SlideId(1)]);
        s.set_marker(1, Marker::Active);

        s.animate(ANIMATION_DURATION * 0.5);
        assert!((s.slides[1].opacity - 0.5).abs() < 1e-6);
        assert_eq!(s.slides[0].opacity, 0.0);

        s.animate(ANIMATION_DURATION);
        assert_eq!(s.slides[1].opacity, 1.0);
    }

    #[test]
    fn failed_assets_are_counted() {
        let mut s = stage(2);
        s.attach(0, Err("decode error".to_string()));
        assert!(s.slides[0].failed);
        assert_eq!(s.loaded, 1);
        s.attach(9, Err("out of range".to_string()));
        assert_eq!(s.loaded, 1);
    }

    #[test]
    fn fit_never_upscales() {
        assert_eq!(fit_scale(100.0, 50.0, 1000.0, 1000.0), 1.0);
        assert_eq!(fit_scale(2000.0, 1000.0, 1000.0, 1000.0), 0.5);
        assert_eq!(fit_scale(1000.0, 2000.0, 1000.0, 500.0), 0.25);
    }

    #[test]
    fn buttons_are_hit_inside_their_bounds() {
        let s = stage(1);
        let play = s.play_button_rect(800.0, 600.0);
        let chat = s.chat_button_rect(800.0, 600.0);

        let center = Vector2::new(play.x + play.width * 0.5, play.y + play.height * 0.5);
        assert!(play.check_collision_point_rec(center));
        assert!(!chat.check_collision_point_rec(center));
        assert!(!play.check_collision_point_rec(Vector2::new(10.0, 10.0)));
    }
}
