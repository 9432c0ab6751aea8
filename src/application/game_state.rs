use crate::domain::{self, Board, InvalidMove, Outcome, Player, Result};
use super::{Event, Notification, Score};

/// GameState owns the session: the current round plus the score tally.
/// This is the application layer that coordinates domain logic.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    turn: Player,
    score: Score,
}

impl GameState {
    /// Start a session: empty board, X to move, 0-0
    pub fn new() -> Self {
        let (board, turn) = domain::reset();
        Self {
            board,
            turn,
            score: Score::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose move it is (the last mover once the round is over)
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn outcome(&self) -> Outcome {
        domain::outcome(&self.board)
    }

    /// Apply one shell event. A rejected click leaves the state untouched.
    pub fn handle(&mut self, event: Event) -> Result<Vec<Notification>> {
        match event {
            Event::CellClicked(index) => self.play(index),
            Event::ResetClicked => Ok(self.reset()),
        }
    }

    fn play(&mut self, index: usize) -> Result<Vec<Notification>> {
        if self.outcome().is_terminal() {
            return Err(InvalidMove::RoundOver);
        }

        self.board = domain::apply_move(self.board, self.turn, index)?;
        log::debug!("{} takes cell {}", self.turn, index);

        let mut notifications = vec![Notification::CellUpdated {
            index,
            player: self.turn,
        }];

        match self.outcome() {
            Outcome::Win(winner) => {
                self.score.record_win(winner);
                log::info!(
                    "player {} wins, score X {} - O {}",
                    winner,
                    self.score.x,
                    self.score.o
                );
                notifications.extend([
                    Notification::ScoreChanged {
                        x: self.score.x,
                        o: self.score.o,
                    },
                    Notification::CellsLocked(self.board.empty_cells()),
                    Notification::RoundEnded(Outcome::Win(winner)),
                ]);
            }
            Outcome::Draw => {
                log::info!("round drawn");
                notifications.extend([
                    Notification::CellsLocked(Vec::new()),
                    Notification::RoundEnded(Outcome::Draw),
                ]);
            }
            Outcome::InProgress => {
                self.turn = domain::next_turn(self.turn);
                notifications.push(Notification::TurnChanged(self.turn));
            }
        }

        Ok(notifications)
    }

    fn reset(&mut self) -> Vec<Notification> {
        (self.board, self.turn) = domain::reset();
        log::debug!("board reset, score kept at X {} - O {}", self.score.x, self.score.o);
        vec![Notification::BoardCleared, Notification::TurnChanged(self.turn)]
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
