use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::game::{engine, GameRules};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub default_rows: usize,
    pub default_cols: usize,
    pub default_mines: usize,
    pub max_rows: usize,
    pub max_cols: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_rows: engine::DEFAULT_ROWS,
            default_cols: engine::DEFAULT_COLS,
            default_mines: engine::DEFAULT_MINES,
            max_rows: engine::MAX_ROWS,
            max_cols: engine::MAX_COLS,
        }
    }
}

fn usize_var(key: &str, default: usize) -> Result<usize> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a non-negative number", key)),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
        };

        let defaults = GameConfig::default();
        let game = GameConfig {
            default_rows: usize_var("GAME_DEFAULT_ROWS", defaults.default_rows)?,
            default_cols: usize_var("GAME_DEFAULT_COLS", defaults.default_cols)?,
            default_mines: usize_var("GAME_DEFAULT_MINES", defaults.default_mines)?,
            max_rows: usize_var("GAME_MAX_ROWS", defaults.max_rows)?,
            max_cols: usize_var("GAME_MAX_COLS", defaults.max_cols)?,
        };
        game.validate()?;

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl GameConfig {
    fn validate(&self) -> Result<()> {
        if self.max_rows == 0 || self.max_cols == 0 {
            anyhow::bail!("GAME_MAX_ROWS and GAME_MAX_COLS must be at least 1");
        }
        if self.default_rows == 0 || self.default_cols == 0 {
            anyhow::bail!("GAME_DEFAULT_ROWS and GAME_DEFAULT_COLS must be at least 1");
        }
        Ok(())
    }

    pub fn rules(&self) -> GameRules {
        GameRules {
            default_rows: self.default_rows,
            default_cols: self.default_cols,
            default_mines: self.default_mines,
            max_rows: self.max_rows,
            max_cols: self.max_cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_game_config_matches_engine_rules() {
        assert_eq!(GameConfig::default().rules(), GameRules::default());
    }

    #[test]
    fn test_zero_max_is_rejected() {
        let config = GameConfig {
            max_rows: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_server_addr() {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            game: GameConfig::default(),
        };
        assert_eq!(config.server_addr(), "127.0.0.1:3000");
    }
}
