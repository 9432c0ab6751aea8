use macroquad::prelude::*;
use crate::domain::Player;
use crate::ui::{
    ACCENT, BACKGROUND, BoardView, LABEL_FONT_SIZE, O_LABEL_Y, STATUS_Y, TITLE_FONT_SIZE, TITLE_Y,
    WINDOW_WIDTH, X_LABEL_Y,
};

/// Draw text horizontally centred in the window
fn draw_centered(text: &str, y: f32, font_size: f32, color: Color) {
    let size = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, (WINDOW_WIDTH - size.width) / 2.0, y, font_size, color);
}

/// Title, score labels and reset button
pub fn draw_dashboard(view: &BoardView, mouse_pos: (f32, f32)) {
    draw_centered("Tic Tac Toe", TITLE_Y, TITLE_FONT_SIZE, ACCENT);
    draw_centered(&view.score_text(Player::X), X_LABEL_Y, LABEL_FONT_SIZE, WHITE);
    draw_centered(&view.score_text(Player::O), O_LABEL_Y, LABEL_FONT_SIZE, WHITE);
    view.reset_button().draw(mouse_pos);

    // Turn hint only makes sense while the round is live
    if view.dialog().is_none() {
        draw_centered(&view.status_text(), STATUS_Y, 20.0, GRAY);
    }
}

pub fn draw_board(view: &BoardView, mouse_pos: (f32, f32)) {
    // Suppress hover under the modal
    let pointer = if view.dialog().is_some() { (-1.0, -1.0) } else { mouse_pos };
    view.cells().iter().for_each(|cell| cell.draw(pointer));
}

/// Render one full frame
pub fn draw_screen(view: &BoardView, mouse_pos: (f32, f32)) {
    clear_background(BACKGROUND);
    draw_dashboard(view, mouse_pos);
    draw_board(view, mouse_pos);

    if let Some(dialog) = view.dialog() {
        dialog.draw(mouse_pos);
    }
}
