use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    New,
    Started,
    Over,
    Won,
}

impl GameStatus {
    /// `Over` and `Won` accept no further reveals
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Over | GameStatus::Won)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::New
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cell {
    #[serde(rename = "mine")]
    pub is_mine: bool,
    #[serde(rename = "revealed")]
    pub is_revealed: bool,
    /// Always 0 for mine cells
    pub adjacent_mines: u8,
}

pub type Grid = Vec<Vec<Cell>>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    pub name: String,
    pub rows: usize,
    pub cols: usize,
    #[serde(rename = "mines")]
    pub mine_count: usize,
    pub status: GameStatus,
    /// Safe cells revealed so far
    #[serde(rename = "clicks")]
    pub revealed_safe_count: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub grid: Option<Grid>,
    /// Bumped by the store on every successful update
    #[serde(skip)]
    pub version: u64,
}

impl Game {
    pub fn new(name: String, rows: usize, cols: usize, mine_count: usize) -> Self {
        Self {
            name,
            rows,
            cols,
            mine_count,
            status: GameStatus::New,
            revealed_safe_count: 0,
            grid: None,
            version: 0,
        }
    }

    pub fn total_cells(&self) -> usize {
        self.rows * self.cols
    }

    pub fn safe_cell_count(&self) -> usize {
        self.total_cells() - self.mine_count
    }

    /// Snapshot safe to hand to a player: the grid is only exposed once the
    /// game has ended.
    pub fn player_view(&self) -> Game {
        let mut view = self.clone();
        if !self.status.is_finished() {
            view.grid = None;
        }
        view
    }

    /// Snapshot without the grid regardless of status
    pub fn without_grid(&self) -> Game {
        Game {
            grid: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> Grid {
        vec![
            vec![
                Cell { is_mine: false, is_revealed: false, adjacent_mines: 1 },
                Cell { is_mine: true, is_revealed: false, adjacent_mines: 0 },
            ],
            vec![
                Cell { is_mine: false, is_revealed: false, adjacent_mines: 1 },
                Cell { is_mine: false, is_revealed: false, adjacent_mines: 1 },
            ],
        ]
    }

    #[test]
    fn test_new_game_has_no_grid() {
        let game = Game::new("mygame".to_string(), 10, 11, 12);
        assert_eq!(game.status, GameStatus::New);
        assert!(game.grid.is_none());
        assert_eq!(game.safe_cell_count(), 98);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&GameStatus::Started).unwrap();
        assert_eq!(json, "\"started\"");
        assert!(GameStatus::Over.is_finished());
        assert!(GameStatus::Won.is_finished());
        assert!(!GameStatus::Started.is_finished());
    }

    #[test]
    fn test_game_json_omits_missing_grid_and_version() {
        let game = Game::new("teste".to_string(), 10, 12, 30);
        let json = serde_json::to_string(&game).unwrap();
        assert_eq!(
            json,
            r#"{"name":"teste","rows":10,"cols":12,"mines":30,"status":"new","clicks":0}"#
        );
    }

    #[test]
    fn test_player_view_hides_grid_until_finished() {
        let mut game = Game::new("teste".to_string(), 2, 2, 1);
        game.grid = Some(small_grid());
        game.status = GameStatus::Started;
        assert!(game.player_view().grid.is_none());

        game.status = GameStatus::Over;
        assert_eq!(game.player_view().grid, Some(small_grid()));
        assert!(game.without_grid().grid.is_none());
    }

    #[test]
    fn test_position_rejects_negative_coordinates() {
        let pos: Position = serde_json::from_str(r#"{"row":1,"col":0}"#).unwrap();
        assert_eq!(pos, Position { row: 1, col: 0 });
        assert!(serde_json::from_str::<Position>(r#"{"row":-1,"col":0}"#).is_err());
    }
}
