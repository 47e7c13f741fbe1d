use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;

mod cli;
mod stage;
mod texture_loader;

use carousel::assets::{AssetGate, load_sorted_image_paths};
use carousel::constants::*;
use carousel::popup::{RedirectPopup, SystemBrowser};
use carousel::{AssetError, Carousel, Key, SlideId};

use crate::cli::Args;
use crate::stage::Stage;
use crate::texture_loader::load_texture_with_exif_rotation;

fn poll_key(rl: &RaylibHandle) -> Option<Key> {
    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        Some(Key::ArrowLeft)
    } else if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        Some(Key::ArrowRight)
    } else if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        Some(Key::Space)
    } else if rl.is_key_pressed(KeyboardKey::KEY_S) {
        Some(Key::Char('s'))
    } else {
        None
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .format_timestamp_millis()
        .init();
    debug!("Command-line args: {:?}", args);

    let image_paths = load_sorted_image_paths(&args.image_dir)
        .with_context(|| format!("loading images from {:?}", args.image_dir))?;

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Image Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // Textures live in the stage, which must be dropped before the window
    let names = image_paths
        .iter()
        .map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default())
        .collect();
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let slides = (0..image_paths.len()).map(SlideId).collect();
    let mut carousel = Carousel::initialize(slides, args.config(), Stage::new(names), rng)
        .context("creating carousel")?;

    let mut gate = AssetGate::new(image_paths.len());
    let mut next_to_load = 0;
    let mut popup = RedirectPopup::default();
    let mut browser = SystemBrowser;

    let started = Instant::now();
    let mut delivered_ms = 0;

    while !rl.window_should_close() {
        let now_ms = started.elapsed().as_millis() as u64;
        let dt_ms = now_ms - delivered_ms;
        delivered_ms = now_ms;

        // One texture per frame so the loading overlay keeps drawing
        if let Some(path) = image_paths.get(next_to_load) {
            let texture = load_texture_with_exif_rotation(&mut rl, &thread, path);
            let signal = texture.as_ref().map(|_| ()).map_err(|reason| AssetError {
                slide: next_to_load,
                reason: reason.clone(),
            });
            carousel.renderer_mut().attach(next_to_load, texture);
            if gate.resolve(next_to_load, signal) {
                info!("Loaded {} images ({} failed)", image_paths.len(), gate.failures().len());
                carousel.on_assets_ready();
            }
            next_to_load += 1;
        }

        if let Some(key) = poll_key(&rl).filter(|_| gate.is_complete()) {
            let response = carousel.handle_key(key);
            debug!("Key {:?} -> {:?}", key, response);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_W) {
            popup.trigger();
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) && gate.is_complete() {
            let mouse = rl.get_mouse_position();
            let sw = rl.get_screen_width() as f32;
            let sh = rl.get_screen_height() as f32;
            if carousel.renderer().play_button_rect(sw, sh).check_collision_point_rec(mouse) {
                carousel.toggle_play_pause();
            } else if carousel.renderer().chat_button_rect(sw, sh).check_collision_point_rec(mouse) {
                popup.trigger();
            }
        }

        carousel.update(dt_ms);
        popup.update(dt_ms, &mut browser);
        carousel.renderer_mut().animate(dt_ms as f32 / 1000.0);

        let mut d = rl.begin_drawing(&thread);
        carousel.renderer().draw(&mut d, &popup);
    }

    Ok(())
}
