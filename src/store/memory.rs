use dashmap::{mapref::entry::Entry, DashMap};

use crate::{
    models::Game,
    store::{GameStore, StoreError},
};

/// In-memory game store keyed by game name
#[derive(Debug, Default)]
pub struct MemoryGameStore {
    games: DashMap<String, Game>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameStore for MemoryGameStore {
    fn insert(&self, game: &Game) -> Result<(), StoreError> {
        match self.games.entry(game.name.clone()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists(game.name.clone())),
            Entry::Vacant(slot) => {
                let mut stored = game.clone();
                stored.version = 0;
                slot.insert(stored);
                Ok(())
            }
        }
    }

    fn update(&self, game: &Game) -> Result<(), StoreError> {
        // Holding the shard write guard makes the version check and the swap atomic
        let mut stored = self
            .games
            .get_mut(&game.name)
            .ok_or_else(|| StoreError::NotFound(game.name.clone()))?;

        if stored.version != game.version {
            tracing::warn!(
                "Rejected stale update of game {} (stored version {}, got {})",
                game.name,
                stored.version,
                game.version
            );
            return Err(StoreError::Conflict(game.name.clone()));
        }

        let mut next = game.clone();
        next.version = game.version + 1;
        *stored = next;
        Ok(())
    }

    fn get_by_name(&self, name: &str) -> Result<Game, StoreError> {
        self.games
            .get(name)
            .map(|game| game.value().clone())
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }
}
