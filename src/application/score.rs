use crate::domain::Player;

/// Win counters for the session. Only ever goes up.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Score {
    pub x: u32,
    pub o: u32,
}

impl Score {
    pub fn record_win(&mut self, winner: Player) {
        let counter = match winner {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *counter = counter.saturating_add(1);
    }

    pub const fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}
