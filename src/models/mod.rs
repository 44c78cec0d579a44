pub mod game;

pub use game::{Cell, Game, GameStatus, Grid, Position};
