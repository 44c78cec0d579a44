use rand::Rng;

use crate::{
    game::{reveal, BoardGenerator, GameError, Result},
    models::{Cell, Game, GameStatus},
    store::GameStore,
};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 6;
pub const DEFAULT_MINES: usize = 12;
pub const MAX_ROWS: usize = 30;
pub const MAX_COLS: usize = 30;

/// Board size policy applied when a game is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub default_rows: usize,
    pub default_cols: usize,
    pub default_mines: usize,
    pub max_rows: usize,
    pub max_cols: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            default_rows: DEFAULT_ROWS,
            default_cols: DEFAULT_COLS,
            default_mines: DEFAULT_MINES,
            max_rows: MAX_ROWS,
            max_cols: MAX_COLS,
        }
    }
}

impl GameRules {
    /// Zero means "use the default". Dimensions are clamped first so the mine
    /// clamp sees the final board size.
    pub fn resolve(&self, rows: usize, cols: usize, mines: usize) -> (usize, usize, usize) {
        let rows = if rows == 0 { self.default_rows } else { rows };
        let cols = if cols == 0 { self.default_cols } else { cols };
        let mines = if mines == 0 { self.default_mines } else { mines };

        let rows = rows.min(self.max_rows);
        let cols = cols.min(self.max_cols);
        let mines = mines.min(rows * cols);
        (rows, cols, mines)
    }
}

/// Result of a click: the cell that was revealed and what the player may see
/// of the game afterwards
#[derive(Debug, Clone, PartialEq)]
pub struct ClickOutcome {
    pub cell: Cell,
    pub game: Game,
}

pub struct GameService<S> {
    store: S,
    rules: GameRules,
}

impl<S: GameStore> GameService<S> {
    pub fn new(store: S, rules: GameRules) -> Self {
        Self { store, rules }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create(&self, name: &str, rows: usize, cols: usize, mines: usize) -> Result<Game> {
        if name.trim().is_empty() {
            return Err(GameError::Validation("game name is required".to_string()));
        }

        let (rows, cols, mines) = self.rules.resolve(rows, cols, mines);
        let game = Game::new(name.to_string(), rows, cols, mines);
        self.store.insert(&game)?;

        tracing::info!(
            "Created game {} ({}x{}, {} mines)",
            game.name,
            game.rows,
            game.cols,
            game.mine_count
        );
        Ok(game)
    }

    /// Deal a fresh board for the game. Starting a game that is already in
    /// play replaces its board.
    pub fn start(&self, name: &str, rng: &mut impl Rng) -> Result<Game> {
        let mut game = self.store.get_by_name(name)?;

        if game.status != GameStatus::New {
            tracing::info!("Re-dealing board for game {} ({:?})", name, game.status);
        }

        let grid = BoardGenerator::generate(game.rows, game.cols, game.mine_count, rng)?;
        game.grid = Some(grid);
        game.revealed_safe_count = 0;
        game.status = GameStatus::Started;

        self.store.update(&game)?;
        game.version += 1;

        tracing::info!("Started game {}", name);
        Ok(game)
    }

    pub fn click(&self, name: &str, row: usize, col: usize) -> Result<ClickOutcome> {
        let mut game = self.store.get_by_name(name)?;

        let cell = reveal(&mut game, row, col).inspect_err(|e| {
            tracing::warn!("Rejected click on game {} at ({}, {}): {}", name, row, col, e);
        })?;

        self.store.update(&game)?;
        game.version += 1;

        match game.status {
            GameStatus::Over => tracing::info!("Game {} lost at ({}, {})", name, row, col),
            GameStatus::Won => tracing::info!("Game {} won", name),
            _ => tracing::debug!("Game {} revealed ({}, {})", name, row, col),
        }

        Ok(ClickOutcome {
            cell,
            game: game.player_view(),
        })
    }
}
