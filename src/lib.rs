// Domain layer - Board, players and the rules engine
pub mod domain;

// Application layer - Session state and event handling
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Board, Cell, InvalidMove, Outcome, Player};
pub use application::{Event, GameState, Notification, Score};
pub use ui::BoardView;
