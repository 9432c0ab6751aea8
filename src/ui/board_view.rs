use crate::application::Notification;
use crate::domain::Player;
use super::{Button, Dialog, create_cell_buttons, create_reset_button};

/// Everything the shell shows, driven only by notifications from the core
#[derive(Clone, Debug)]
pub struct BoardView {
    cells: Vec<Button>,
    reset: Button,
    x_score: u32,
    o_score: u32,
    turn: Player,
    dialog: Option<Dialog>,
}

impl BoardView {
    pub fn new() -> Self {
        Self {
            cells: create_cell_buttons(),
            reset: create_reset_button(),
            x_score: 0,
            o_score: 0,
            turn: Player::X,
            dialog: None,
        }
    }

    /// Reflect one notification in the widgets
    pub fn apply(&mut self, notification: &Notification) {
        match notification {
            Notification::CellUpdated { index, player } => {
                if let Some(cell) = self.cells.get_mut(*index) {
                    cell.set_text(player.to_string());
                    cell.set_enabled(false);
                }
            }
            Notification::CellsLocked(indices) => {
                for &index in indices {
                    if let Some(cell) = self.cells.get_mut(index) {
                        cell.set_enabled(false);
                    }
                }
            }
            Notification::ScoreChanged { x, o } => {
                self.x_score = *x;
                self.o_score = *o;
            }
            Notification::RoundEnded(outcome) => {
                self.dialog = Dialog::game_over(*outcome);
            }
            Notification::TurnChanged(player) => {
                self.turn = *player;
            }
            Notification::BoardCleared => {
                self.cells.iter_mut().for_each(|cell| {
                    cell.set_text("");
                    cell.set_enabled(true);
                });
            }
        }
    }

    pub fn cells(&self) -> &[Button] {
        &self.cells
    }

    pub fn reset_button(&self) -> &Button {
        &self.reset
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn score_text(&self, player: Player) -> String {
        let score = match player {
            Player::X => self.x_score,
            Player::O => self.o_score,
        };
        format!("Player {player}: {score}")
    }

    pub fn status_text(&self) -> String {
        format!("Player {}'s turn", self.turn)
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{Event, GameState};
    use crate::domain::Outcome;

    fn drive(state: &mut GameState, view: &mut BoardView, events: &[Event]) {
        for &event in events {
            for notification in state.handle(event).unwrap() {
                view.apply(&notification);
            }
        }
    }

    #[test]
    fn test_initial_labels() {
        let view = BoardView::new();
        assert_eq!(view.score_text(Player::X), "Player X: 0");
        assert_eq!(view.score_text(Player::O), "Player O: 0");
        assert_eq!(view.status_text(), "Player X's turn");
        assert_eq!(view.reset_button().text(), "Reset Game");
        assert!(view.dialog().is_none());
    }

    #[test]
    fn test_played_cell_shows_marker_and_disables() {
        let mut view = BoardView::new();
        view.apply(&Notification::CellUpdated { index: 4, player: Player::O });

        assert_eq!(view.cells()[4].text(), "O");
        assert!(!view.cells()[4].is_enabled());
        assert!(view.cells()[3].is_enabled());
    }

    #[test]
    fn test_out_of_range_notification_is_ignored() {
        let mut view = BoardView::new();
        view.apply(&Notification::CellUpdated { index: 42, player: Player::X });
        view.apply(&Notification::CellsLocked(vec![42]));
        assert!(view.cells().iter().all(Button::is_enabled));
    }

    #[test]
    fn test_win_locks_board_and_opens_dialog() {
        let mut state = GameState::new();
        let mut view = BoardView::new();
        let clicks: Vec<Event> = [0, 3, 1, 4, 2].into_iter().map(Event::CellClicked).collect();
        drive(&mut state, &mut view, &clicks);

        assert!(view.cells().iter().all(|cell| !cell.is_enabled()));
        assert_eq!(view.score_text(Player::X), "Player X: 1");
        assert_eq!(view.dialog().map(Dialog::message), Some("Player X wins!"));
    }

    #[test]
    fn test_reset_clears_cells_and_keeps_score() {
        let mut state = GameState::new();
        let mut view = BoardView::new();
        let clicks: Vec<Event> = [0, 3, 1, 4, 2].into_iter().map(Event::CellClicked).collect();
        drive(&mut state, &mut view, &clicks);
        view.close_dialog();
        drive(&mut state, &mut view, &[Event::ResetClicked]);

        assert!(view.cells().iter().all(|cell| cell.is_enabled() && cell.text().is_empty()));
        assert_eq!(view.score_text(Player::X), "Player X: 1");
        assert_eq!(view.status_text(), "Player X's turn");
        assert!(view.dialog().is_none());
    }

    #[test]
    fn test_draw_dialog() {
        let mut view = BoardView::new();
        view.apply(&Notification::RoundEnded(Outcome::Draw));
        assert_eq!(view.dialog().map(Dialog::message), Some("It's a Draw!"));
    }
}
