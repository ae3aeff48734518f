//! Integer window-space rectangles

use eframe::egui;

/// Axis-aligned rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w`×`h` centered in a `window_w`×`window_h` window.
    pub fn centered(window_w: i32, window_h: i32, w: i32, h: i32) -> Self {
        Self::new((window_w - w) / 2, (window_h - h) / 2, w, h)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        contains(x, y, self)
    }

    pub fn to_egui(self) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(self.x as f32, self.y as f32),
            egui::vec2(self.w as f32, self.h as f32),
        )
    }
}

/// Half-open containment: the right and bottom edges are outside.
pub fn contains(x: i32, y: i32, rect: &Rect) -> bool {
    x >= rect.x && x < rect.x + rect.w && y >= rect.y && y < rect.y + rect.h
}
