pub mod memory;

pub use memory::MemoryGameStore;

use crate::models::Game;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("game {0} already exists")]
    AlreadyExists(String),

    #[error("game {0} not found")]
    NotFound(String),

    #[error("game {0} was modified concurrently")]
    Conflict(String),
}

/// Keyed storage of whole-game snapshots.
///
/// Games cross this boundary by value: what `get_by_name` returns is an
/// independent copy, and nothing a caller does to it is visible to other
/// callers until it is passed back through `update`.
pub trait GameStore: Send + Sync {
    /// Store a new game, failing if the name is taken
    fn insert(&self, game: &Game) -> Result<(), StoreError>;

    /// Replace an existing game. The caller must hand back the `version` it
    /// loaded; a stale version means another writer got there first.
    fn update(&self, game: &Game) -> Result<(), StoreError>;

    fn get_by_name(&self, name: &str) -> Result<Game, StoreError>;
}
