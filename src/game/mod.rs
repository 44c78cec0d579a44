// Minesweeper engine: board generation, single-cell reveals and game lifecycle

pub mod board;
pub mod engine;
pub mod error;
pub mod reveal;

pub use board::BoardGenerator;
pub use engine::{ClickOutcome, GameRules, GameService};
pub use error::{GameError, Result};
pub use reveal::reveal;
