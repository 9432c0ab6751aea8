mod board_view;
mod button;
mod dialog;

pub use board_view::BoardView;
pub use button::Button;
pub use dialog::Dialog;

use macroquad::prelude::Color;

// Fixed window, so layout is constant
pub const WINDOW_WIDTH: f32 = 450.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

pub const BACKGROUND: Color = Color::new(40.0 / 255.0, 44.0 / 255.0, 52.0 / 255.0, 1.0);
pub const ACCENT: Color = Color::new(97.0 / 255.0, 218.0 / 255.0, 251.0 / 255.0, 1.0);
pub const ACCENT_HOVER: Color = Color::new(150.0 / 255.0, 230.0 / 255.0, 252.0 / 255.0, 1.0);
pub const CELL_DISABLED: Color = Color::new(72.0 / 255.0, 160.0 / 255.0, 186.0 / 255.0, 1.0);

pub const TITLE_FONT_SIZE: f32 = 40.0;
pub const LABEL_FONT_SIZE: f32 = 24.0;
pub const CELL_FONT_SIZE: u16 = 56;

pub const TITLE_Y: f32 = 50.0;
pub const X_LABEL_Y: f32 = 90.0;
pub const O_LABEL_Y: f32 = 120.0;
pub const STATUS_Y: f32 = 215.0;

pub const RESET_WIDTH: f32 = 160.0;
pub const RESET_HEIGHT: f32 = 40.0;
pub const RESET_Y: f32 = 140.0;

pub const CELL_SIZE: f32 = 110.0;
pub const CELL_GAP: f32 = 10.0;
pub const BOARD_TOP: f32 = 235.0;

/// Width of the 3x3 board including gaps
pub const BOARD_SIZE: f32 = 3.0 * CELL_SIZE + 2.0 * CELL_GAP;

/// Left edge of the board, centred horizontally
pub const fn board_left() -> f32 {
    (WINDOW_WIDTH - BOARD_SIZE) / 2.0
}

/// Top-left corner of a cell, row-major index
pub fn cell_origin(index: usize) -> (f32, f32) {
    let (row, col) = (index / 3, index % 3);
    (
        board_left() + col as f32 * (CELL_SIZE + CELL_GAP),
        BOARD_TOP + row as f32 * (CELL_SIZE + CELL_GAP),
    )
}

/// Create the nine cell buttons, laid out as a grid
pub fn create_cell_buttons() -> Vec<Button> {
    (0..crate::domain::CELL_COUNT)
        .map(|index| {
            let (x, y) = cell_origin(index);
            Button::new(x, y, CELL_SIZE, CELL_SIZE, "")
                .with_font_size(CELL_FONT_SIZE)
        })
        .collect()
}

pub fn create_reset_button() -> Button {
    Button::new(
        (WINDOW_WIDTH - RESET_WIDTH) / 2.0,
        RESET_Y,
        RESET_WIDTH,
        RESET_HEIGHT,
        "Reset Game",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_fits_window() {
        let (x, y) = cell_origin(8);
        assert!(board_left() >= 0.0);
        assert!(x + CELL_SIZE <= WINDOW_WIDTH);
        assert!(y + CELL_SIZE <= WINDOW_HEIGHT);
    }

    #[test]
    fn test_cells_are_row_major() {
        assert_eq!(cell_origin(0), (board_left(), BOARD_TOP));
        assert_eq!(cell_origin(1).1, cell_origin(0).1);
        assert_eq!(cell_origin(3).0, cell_origin(0).0);
        assert!(cell_origin(3).1 > cell_origin(2).1);
    }

    #[test]
    fn test_cell_buttons_do_not_overlap() {
        let buttons = create_cell_buttons();
        assert_eq!(buttons.len(), 9);
        for (index, button) in buttons.iter().enumerate() {
            let (x, y) = cell_origin(index);
            let center = (x + CELL_SIZE / 2.0, y + CELL_SIZE / 2.0);
            let hits: Vec<usize> = buttons
                .iter()
                .enumerate()
                .filter(|(_, b)| b.contains(center))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(hits, vec![index]);
            assert!(button.is_enabled());
        }
    }
}
