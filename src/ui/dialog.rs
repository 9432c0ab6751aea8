use macroquad::prelude::*;
use crate::domain::{Outcome, Player};
use super::{Button, BACKGROUND, LABEL_FONT_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};

const DIALOG_WIDTH: f32 = 320.0;
const DIALOG_HEIGHT: f32 = 170.0;
const OK_WIDTH: f32 = 100.0;
const OK_HEIGHT: f32 = 36.0;

/// Modal message box shown when a round ends
#[derive(Clone, Debug)]
pub struct Dialog {
    title: String,
    message: String,
    ok: Button,
}

impl Dialog {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        let (x, y) = Self::origin();
        Self {
            title: title.into(),
            message: message.into(),
            ok: Button::new(
                x + (DIALOG_WIDTH - OK_WIDTH) / 2.0,
                y + DIALOG_HEIGHT - OK_HEIGHT - 16.0,
                OK_WIDTH,
                OK_HEIGHT,
                "OK",
            ),
        }
    }

    /// "Game Over" box for a finished round; None while the round is live
    pub fn game_over(outcome: Outcome) -> Option<Self> {
        let message = match outcome {
            Outcome::Win(player) => Self::win_message(player),
            Outcome::Draw => "It's a Draw!".to_owned(),
            Outcome::InProgress => return None,
        };
        Some(Self::new("Game Over", message))
    }

    fn win_message(player: Player) -> String {
        format!("Player {player} wins!")
    }

    /// Top-left corner, centred in the window
    fn origin() -> (f32, f32) {
        (
            (WINDOW_WIDTH - DIALOG_WIDTH) / 2.0,
            (WINDOW_HEIGHT - DIALOG_HEIGHT) / 2.0,
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn ok_button(&self) -> &Button {
        &self.ok
    }

    /// Dim the screen and draw the box on top
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_rectangle(0.0, 0.0, WINDOW_WIDTH, WINDOW_HEIGHT, Color::new(0.0, 0.0, 0.0, 0.6));

        let (x, y) = Self::origin();
        draw_rectangle(x, y, DIALOG_WIDTH, DIALOG_HEIGHT, BACKGROUND);
        draw_rectangle_lines(x, y, DIALOG_WIDTH, DIALOG_HEIGHT, 2.0, WHITE);

        draw_text(&self.title, x + 16.0, y + 34.0, LABEL_FONT_SIZE, GRAY);

        let size = measure_text(&self.message, None, 30, 1.0);
        draw_text(
            &self.message,
            x + (DIALOG_WIDTH - size.width) / 2.0,
            y + 84.0,
            30.0,
            WHITE,
        );

        self.ok.draw(mouse_pos);
    }
}
