//! Button state machine and rendering

use eframe::egui;

use super::geometry::Rect;

/// Fill colors per visual state
pub const FILL_IDLE: egui::Color32 = egui::Color32::from_rgb(40, 40, 40);
pub const FILL_HOVERED: egui::Color32 = egui::Color32::from_rgb(70, 70, 70);
pub const FILL_PRESSED: egui::Color32 = egui::Color32::from_rgb(30, 30, 30);

/// Border colors per visual state
pub const BORDER_IDLE: egui::Color32 = egui::Color32::from_rgb(200, 200, 200);
pub const BORDER_HOVERED: egui::Color32 = egui::Color32::from_rgb(215, 215, 215);
pub const BORDER_PRESSED: egui::Color32 = egui::Color32::from_rgb(235, 235, 235);

pub const LABEL_COLOR: egui::Color32 = egui::Color32::WHITE;

/// Where the pointer and primary button stand relative to the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    Hovered,
    /// Press began inside and the pointer is still inside
    Pressed,
    /// Press began inside but the pointer has left
    PressedOutside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    rect: Rect,
    state: ButtonState,
}

impl Button {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            state: ButtonState::Idle,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn hovered(&self) -> bool {
        matches!(self.state, ButtonState::Hovered | ButtonState::Pressed)
    }

    /// Visually pressed: an active press with the pointer inside.
    pub fn pressed(&self) -> bool {
        self.state == ButtonState::Pressed
    }

    pub fn active_press(&self) -> bool {
        matches!(self.state, ButtonState::Pressed | ButtonState::PressedOutside)
    }

    /// Re-evaluates hover for a pointer at `(x, y)`.
    pub fn pointer_at(&mut self, x: i32, y: i32) {
        self.set_hovered(self.rect.contains(x, y));
    }

    /// Pointer left the window.
    pub fn pointer_gone(&mut self) {
        self.set_hovered(false);
    }

    fn set_hovered(&mut self, inside: bool) {
        self.state = match (self.state, inside) {
            (ButtonState::Idle | ButtonState::Hovered, true) => ButtonState::Hovered,
            (ButtonState::Idle | ButtonState::Hovered, false) => ButtonState::Idle,
            (ButtonState::Pressed | ButtonState::PressedOutside, true) => ButtonState::Pressed,
            (ButtonState::Pressed | ButtonState::PressedOutside, false) => ButtonState::PressedOutside,
        };
    }

    /// Primary button went down at `(x, y)`. Only a press inside starts an active press.
    pub fn press(&mut self, x: i32, y: i32) {
        self.state = if self.rect.contains(x, y) {
            ButtonState::Pressed
        } else {
            ButtonState::Idle
        };
    }

    /// Primary button released at `(x, y)`.
    ///
    /// Returns true when this completes a click. The active press ends either way.
    pub fn release(&mut self, x: i32, y: i32) -> bool {
        let inside = self.rect.contains(x, y);
        let clicked = self.active_press() && inside;
        self.state = if inside {
            ButtonState::Hovered
        } else {
            ButtonState::Idle
        };
        clicked
    }

    /// (fill, border) for the current visual state.
    pub fn colors(&self) -> (egui::Color32, egui::Color32) {
        if self.pressed() {
            (FILL_PRESSED, BORDER_PRESSED)
        } else if self.hovered() {
            (FILL_HOVERED, BORDER_HOVERED)
        } else {
            (FILL_IDLE, BORDER_IDLE)
        }
    }
}

/// Top-left corner that centers a `size` label inside `rect`.
pub fn label_origin(rect: Rect, size: egui::Vec2) -> egui::Pos2 {
    let tw = size.x.round() as i32;
    let th = size.y.round() as i32;
    egui::pos2(
        (rect.x + (rect.w - tw) / 2) as f32,
        (rect.y + (rect.h - th) / 2) as f32,
    )
}

/// Draws the button: fill, 1px border, then the centered label.
///
/// A label that lays out to nothing is skipped; the shape is still drawn.
pub fn draw_button(
    painter: &egui::Painter,
    button: &Button,
    label: &str,
    font: &egui::FontId,
) {
    let (fill, border) = button.colors();
    let rect = button.rect().to_egui();

    painter.rect_filled(rect, 0.0, fill);
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, border),
        egui::epaint::StrokeKind::Inside,
    );

    let galley = painter.layout_no_wrap(label.to_owned(), font.clone(), LABEL_COLOR);
    let size = galley.size();
    if size.x <= 0.0 || size.y <= 0.0 {
        log::trace!("label '{}' produced no glyphs, skipping", label);
        return;
    }
    painter.galley(label_origin(button.rect(), size), galley, LABEL_COLOR);
}
