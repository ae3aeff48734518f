use std::env;
use std::path::PathBuf;

use crate::core::audio::AudioSpec;
use crate::core::tone::Tone;

/// Environment variable that replaces the default font path.
pub const FONT_PATH_VAR: &str = "TONE_BUTTON_FONT";

#[derive(Debug, Clone)]
pub struct Config {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub font_path: PathBuf,
    pub font_size: f32,
    pub button_width: i32,
    pub button_height: i32,
    pub label: String,
    pub initial_background: [u8; 3],
    pub tone: Tone,
    pub audio: AudioSpec,
}

impl Default for Config {
    fn default() -> Self {
        let font_path = env::var_os(FONT_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./assets/fonts/MotivaSansBold.woff.ttf"));

        Self {
            window_title: "SDL2 Button".to_string(),
            window_width: 900.0,
            window_height: 600.0,
            font_path,
            font_size: 28.0,
            button_width: 200,
            button_height: 60,
            label: "Click me!".to_string(),
            // Dark gray until the first click
            initial_background: [20, 24, 28],
            tone: Tone::default(),
            audio: AudioSpec::default(),
        }
    }
}
