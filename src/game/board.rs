use rand::{seq::index, Rng};

use crate::{
    game::{GameError, Result},
    models::{Cell, Grid},
};

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// In-bounds neighbors of `(row, col)` on a `rows x cols` board, diagonals included
pub fn neighbors(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> impl Iterator<Item = (usize, usize)> {
    DISPLACEMENTS.iter().filter_map(move |&(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < rows && c < cols).then_some((r, c))
    })
}

pub struct BoardGenerator;

impl BoardGenerator {
    /// Generate a `rows x cols` grid with exactly `mine_count` mines and
    /// adjacency counts filled in
    pub fn generate(
        rows: usize,
        cols: usize,
        mine_count: usize,
        rng: &mut impl Rng,
    ) -> Result<Grid> {
        if rows == 0 || cols == 0 {
            return Err(GameError::Validation(format!(
                "board must have at least one row and column, got {}x{}",
                rows, cols
            )));
        }
        let total = rows * cols;
        if mine_count > total {
            return Err(GameError::Validation(format!(
                "{} mines do not fit on a {}x{} board",
                mine_count, rows, cols
            )));
        }

        let mut grid: Grid = vec![vec![Cell::default(); cols]; rows];

        // Distinct indices without replacement, so a full board terminates too
        for idx in index::sample(rng, total, mine_count) {
            grid[idx / cols][idx % cols].is_mine = true;
        }

        Self::fill_counts(&mut grid, rows, cols);

        tracing::debug!("Generated {}x{} board with {} mines", rows, cols, mine_count);
        Ok(grid)
    }

    fn fill_counts(grid: &mut Grid, rows: usize, cols: usize) {
        for row in 0..rows {
            for col in 0..cols {
                if !grid[row][col].is_mine {
                    continue;
                }
                for (r, c) in neighbors(row, col, rows, cols) {
                    let cell = &mut grid[r][c];
                    if !cell.is_mine {
                        cell.adjacent_mines += 1;
                    }
                }
            }
        }
    }
}
