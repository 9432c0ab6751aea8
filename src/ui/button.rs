use macroquad::prelude::*;
use super::{ACCENT, ACCENT_HOVER, CELL_DISABLED};

/// Button UI component with hover and click detection.
/// A disabled button keeps its label but ignores the mouse.
#[derive(Clone, Debug)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    font_size: u16,
    enabled: bool,
    color: Color,
    hover_color: Color,
    disabled_color: Color,
    text_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            font_size: 22,
            enabled: true,
            color: ACCENT,
            hover_color: ACCENT_HOVER,
            disabled_color: CELL_DISABLED,
            text_color: BLACK,
        }
    }

    pub fn with_font_size(mut self, font_size: u16) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Point-in-rectangle test, regardless of enabled state
    pub fn contains(&self, pos: (f32, f32)) -> bool {
        pos.0 >= self.x
            && pos.0 <= self.x + self.width
            && pos.1 >= self.y
            && pos.1 <= self.y + self.height
    }

    /// Check if mouse is hovering over an enabled button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.enabled && self.contains(mouse_pos)
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if !self.enabled {
            self.disabled_color
        } else if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        if self.text.is_empty() {
            return;
        }
        let text_size = measure_text(&self.text, None, self.font_size, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.offset_y) / 2.0,
            self.font_size as f32,
            self.text_color,
        );
    }
}
