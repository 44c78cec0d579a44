use crate::{
    game::{GameError, Result},
    models::{Cell, Game, GameStatus},
};

/// Reveal a single cell of a started game, updating the cell and the game
/// status in place. Returns the revealed cell.
pub fn reveal(game: &mut Game, row: usize, col: usize) -> Result<Cell> {
    match game.status {
        GameStatus::Started => {}
        GameStatus::New => return Err(GameError::NotStarted(game.name.clone())),
        GameStatus::Over | GameStatus::Won => {
            return Err(GameError::GameEnded(game.name.clone()))
        }
    }

    let (rows, cols) = (game.rows, game.cols);
    if row >= rows || col >= cols {
        return Err(GameError::OutOfRange {
            row,
            col,
            rows,
            cols,
        });
    }

    let grid = game
        .grid
        .as_mut()
        .ok_or_else(|| GameError::NotStarted(game.name.clone()))?;
    let cell = grid
        .get_mut(row)
        .and_then(|cells| cells.get_mut(col))
        .ok_or(GameError::OutOfRange {
            row,
            col,
            rows,
            cols,
        })?;

    if cell.is_revealed {
        return Err(GameError::AlreadyRevealed { row, col });
    }
    cell.is_revealed = true;
    let revealed = *cell;

    if revealed.is_mine {
        game.status = GameStatus::Over;
        return Ok(revealed);
    }

    game.revealed_safe_count += 1;
    if game.revealed_safe_count == game.safe_cell_count() {
        game.status = GameStatus::Won;
    }

    Ok(revealed)
}
