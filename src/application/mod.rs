mod events;
mod game_state;
mod score;

pub use events::{Event, Notification};
pub use game_state::GameState;
pub use score::Score;
