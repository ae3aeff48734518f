//! Main application structure and per-frame loop

use crate::config::Config;
use crate::core::{tone, AudioOutput, Tone};
use eframe::egui;

use super::button;
use super::fonts;
use super::scene::{PointerInput, Scene};

pub struct ToneButtonApp {
    pub scene: Scene,
    pub audio: Option<AudioOutput>,
    pub tone: Tone,
    pub label: String,
    pub label_font: egui::FontId,
    pub window_size: Option<(i32, i32)>,
}

impl ToneButtonApp {
    pub fn new(config: Config, audio: Option<AudioOutput>) -> Self {
        let scene = Scene::with_entropy(
            (config.button_width, config.button_height),
            config.initial_background,
        );

        Self {
            scene,
            audio,
            tone: config.tone,
            label: config.label,
            label_font: fonts::label_font(config.font_size),
            window_size: None,
        }
    }

    /// Recenters the button whenever the window size changes
    fn sync_layout(&mut self, size: egui::Vec2) {
        let size = (size.x.round() as i32, size.y.round() as i32);
        if self.window_size != Some(size) {
            self.window_size = Some(size);
            self.scene.layout(size.0, size.1);
        }
    }

    /// Synthesizes the click tone and queues it. Silent without an audio device.
    pub fn play_tone(&self) {
        let Some(audio) = &self.audio else {
            return;
        };
        let samples = tone::synthesize(self.tone, audio.sample_rate(), audio.channels());
        log::debug!("🔔 queued {} samples ({} Hz)", samples.len(), self.tone.frequency);
        audio.enqueue(&samples);
    }
}

fn to_pixel(pos: egui::Pos2) -> (i32, i32) {
    (pos.x.floor() as i32, pos.y.floor() as i32)
}

/// Maps an egui event to primary-pointer input; everything else is ignored.
fn pointer_input(event: &egui::Event) -> Option<PointerInput> {
    match event {
        egui::Event::PointerMoved(pos) => {
            let (x, y) = to_pixel(*pos);
            Some(PointerInput::Moved { x, y })
        }
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            ..
        } => {
            let (x, y) = to_pixel(*pos);
            Some(if *pressed {
                PointerInput::Down { x, y }
            } else {
                PointerInput::Up { x, y }
            })
        }
        _ => None,
    }
}

impl eframe::App for ToneButtonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_layout(ctx.screen_rect().size());

        // Hover from the live pointer first, then this frame's events
        let (pointer, events) = ctx.input(|i| (i.pointer.latest_pos(), i.events.clone()));
        self.scene.poll_pointer(pointer.map(to_pixel));

        for input in events.iter().filter_map(pointer_input) {
            if self.scene.handle(input) {
                self.play_tone();
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.scene.background()))
            .show(ctx, |ui| {
                button::draw_button(ui.painter(), self.scene.button(), &self.label, &self.label_font);
            });

        if self.scene.button().hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        // Redraw continuously; presentation is vsync-locked
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::geometry::Rect;

    fn app() -> ToneButtonApp {
        ToneButtonApp::new(Config::default(), None)
    }

    #[test]
    fn layout_runs_once_per_size_change() {
        let mut app = app();
        app.sync_layout(egui::vec2(900.0, 600.0));
        assert_eq!(app.scene.button().rect(), Rect::new(350, 270, 200, 60));
        assert_eq!(app.window_size, Some((900, 600)));

        app.sync_layout(egui::vec2(400.0, 300.0));
        assert_eq!(app.scene.button().rect(), Rect::new(100, 120, 200, 60));
    }

    #[test]
    fn primary_button_events_map_to_pointer_input() {
        let down = egui::Event::PointerButton {
            pos: egui::pos2(400.6, 300.2),
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        };
        assert_eq!(pointer_input(&down), Some(PointerInput::Down { x: 400, y: 300 }));

        let up = egui::Event::PointerButton {
            pos: egui::pos2(10.0, 20.0),
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        };
        assert_eq!(pointer_input(&up), Some(PointerInput::Up { x: 10, y: 20 }));

        let moved = egui::Event::PointerMoved(egui::pos2(5.0, 6.0));
        assert_eq!(pointer_input(&moved), Some(PointerInput::Moved { x: 5, y: 6 }));
    }

    #[test]
    fn other_buttons_are_ignored() {
        let right = egui::Event::PointerButton {
            pos: egui::pos2(400.0, 300.0),
            button: egui::PointerButton::Secondary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        };
        assert_eq!(pointer_input(&right), None);
        assert_eq!(pointer_input(&egui::Event::PointerGone), None);
    }

    #[test]
    fn clicking_without_audio_still_changes_color() {
        let mut app = app();
        app.sync_layout(egui::vec2(900.0, 600.0));
        let before = app.scene.background();
        assert!(!app.scene.handle(PointerInput::Down { x: 450, y: 300 }));
        assert!(app.scene.handle(PointerInput::Up { x: 450, y: 300 }));
        app.play_tone();
        // Initial color is outside the click range, so any roll differs
        assert_ne!(app.scene.background(), before);
    }

    #[test]
    fn confirmed_click_queues_one_beep() {
        let mut app = ToneButtonApp::new(Config::default(), Some(AudioOutput::detached(48_000, 2)));
        app.sync_layout(egui::vec2(900.0, 600.0));

        for input in [
            PointerInput::Down { x: 450, y: 300 },
            PointerInput::Up { x: 450, y: 300 },
        ] {
            if app.scene.handle(input) {
                app.play_tone();
            }
        }
        let queued = app.audio.as_ref().map(AudioOutput::queued);
        assert_eq!(queued, Some(11_520));
    }

    #[test]
    fn cancelled_click_queues_nothing() {
        let mut app = ToneButtonApp::new(Config::default(), Some(AudioOutput::detached(48_000, 2)));
        app.sync_layout(egui::vec2(900.0, 600.0));

        for input in [
            PointerInput::Down { x: 450, y: 300 },
            PointerInput::Moved { x: 5, y: 5 },
            PointerInput::Up { x: 5, y: 5 },
        ] {
            if app.scene.handle(input) {
                app.play_tone();
            }
        }
        assert_eq!(app.audio.as_ref().map(AudioOutput::queued), Some(0));
    }
}
