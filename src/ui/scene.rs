//! Button, background color and the click action, independent of the window toolkit

use eframe::egui;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use super::button::Button;
use super::geometry::Rect;

/// Range each background channel is drawn from on click.
pub const BACKGROUND_CHANNEL: RangeInclusive<u8> = 40..=220;

/// Primary-pointer input in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    Moved { x: i32, y: i32 },
    Down { x: i32, y: i32 },
    Up { x: i32, y: i32 },
}

pub struct Scene {
    button: Button,
    button_size: (i32, i32),
    background: egui::Color32,
    rng: StdRng,
}

impl Scene {
    pub fn new(button_size: (i32, i32), background: [u8; 3], rng: StdRng) -> Self {
        Self {
            button: Button::new(Rect::new(0, 0, button_size.0, button_size.1)),
            button_size,
            background: egui::Color32::from_rgb(background[0], background[1], background[2]),
            rng,
        }
    }

    /// Scene with a generator seeded from OS entropy.
    pub fn with_entropy(button_size: (i32, i32), background: [u8; 3]) -> Self {
        Self::new(button_size, background, StdRng::from_entropy())
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn background(&self) -> egui::Color32 {
        self.background
    }

    /// Recenters the button in a `width`×`height` window.
    pub fn layout(&mut self, width: i32, height: i32) {
        let (w, h) = self.button_size;
        let rect = Rect::centered(width, height, w, h);
        log::debug!("window {}x{}, button at {:?}", width, height, rect);
        self.button.set_rect(rect);
    }

    /// Recomputes hover from the live pointer position, `None` when it is off the window.
    pub fn poll_pointer(&mut self, pos: Option<(i32, i32)>) {
        match pos {
            Some((x, y)) => self.button.pointer_at(x, y),
            None => self.button.pointer_gone(),
        }
    }

    /// Applies one input event. Returns true when it completed a click,
    /// in which case the background has already been re-rolled.
    pub fn handle(&mut self, input: PointerInput) -> bool {
        let clicked = match input {
            PointerInput::Moved { x, y } => {
                self.button.pointer_at(x, y);
                false
            }
            PointerInput::Down { x, y } => {
                self.button.press(x, y);
                false
            }
            PointerInput::Up { x, y } => self.button.release(x, y),
        };
        log::trace!("{:?} -> {:?}", input, self.button.state());
        if clicked {
            self.randomize_background();
        }
        clicked
    }

    fn randomize_background(&mut self) {
        let r = self.rng.gen_range(BACKGROUND_CHANNEL);
        let g = self.rng.gen_range(BACKGROUND_CHANNEL);
        let b = self.rng.gen_range(BACKGROUND_CHANNEL);
        self.background = egui::Color32::from_rgb(r, g, b);
        log::debug!("🎨 background -> ({}, {}, {})", r, g, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: [u8; 3] = [20, 24, 28];

    fn scene(seed: u64) -> Scene {
        let mut scene = Scene::new((200, 60), START, StdRng::seed_from_u64(seed));
        scene.layout(900, 600);
        scene
    }

    fn start_color() -> egui::Color32 {
        egui::Color32::from_rgb(START[0], START[1], START[2])
    }

    #[test]
    fn initial_layout_centers_button() {
        assert_eq!(scene(1).button().rect(), Rect::new(350, 270, 200, 60));
    }

    #[test]
    fn resize_recenters_button() {
        let mut s = scene(1);
        s.layout(1280, 721);
        assert_eq!(s.button().rect(), Rect::new(540, 330, 200, 60));
    }

    #[test]
    fn click_rolls_background_into_range() {
        for seed in 0..64 {
            let mut s = scene(seed);
            assert!(!s.handle(PointerInput::Down { x: 400, y: 300 }));
            assert!(s.handle(PointerInput::Up { x: 400, y: 300 }));
            let bg = s.background();
            for channel in [bg.r(), bg.g(), bg.b()] {
                assert!(BACKGROUND_CHANNEL.contains(&channel), "seed {seed}: {channel}");
            }
        }
    }

    #[test]
    fn dragging_off_the_button_cancels_click() {
        let mut s = scene(7);
        s.handle(PointerInput::Down { x: 400, y: 300 });
        s.handle(PointerInput::Moved { x: 20, y: 20 });
        assert!(!s.handle(PointerInput::Up { x: 20, y: 20 }));
        assert_eq!(s.background(), start_color());
        assert!(!s.button().active_press());
    }

    #[test]
    fn press_that_starts_outside_never_clicks() {
        let mut s = scene(7);
        s.handle(PointerInput::Down { x: 20, y: 20 });
        s.handle(PointerInput::Moved { x: 400, y: 300 });
        assert!(!s.handle(PointerInput::Up { x: 400, y: 300 }));
        assert_eq!(s.background(), start_color());
    }

    #[test]
    fn polling_tracks_hover_without_events() {
        let mut s = scene(3);
        s.poll_pointer(Some((400, 300)));
        assert!(s.button().hovered());
        s.poll_pointer(None);
        assert!(!s.button().hovered());
    }
}
