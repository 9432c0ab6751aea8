use crate::domain::{Outcome, Player};

/// Input from the presentation shell
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Event {
    CellClicked(usize),
    ResetClicked,
}

/// What the shell should reflect after an event
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Notification {
    CellUpdated { index: usize, player: Player },
    /// Cells that stop accepting clicks once the round is decided
    CellsLocked(Vec<usize>),
    ScoreChanged { x: u32, o: u32 },
    RoundEnded(Outcome),
    TurnChanged(Player),
    BoardCleared,
}
