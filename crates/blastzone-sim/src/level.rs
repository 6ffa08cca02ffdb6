//! Character-grid level loader.
//!
//! One text line per row, one character per cell:
//! `x` wall, `b` breakable crate, `p` player spawn, `e` enemy spawn,
//! anything else is floor. A level must contain exactly one `p`.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("level is empty")]
    Empty,
    #[error("level has no player spawn ('p')")]
    MissingPlayer,
    #[error("level has more than one player spawn (row, col): {first:?} and {second:?}")]
    DuplicatePlayer {
        first: (usize, usize),
        second: (usize, usize),
    },
}

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Floor,
    Wall,
    Crate,
    PlayerSpawn,
    EnemySpawn,
}

impl Cell {
    fn from_char(ch: char) -> Self {
        match ch {
            'x' => Cell::Wall,
            'b' => Cell::Crate,
            'p' => Cell::PlayerSpawn,
            'e' => Cell::EnemySpawn,
            _ => Cell::Floor,
        }
    }
}

/// A parsed, validated level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelGrid {
    rows: Vec<Vec<Cell>>,
    player_spawn: (usize, usize),
}

impl LevelGrid {
    /// Read and parse a level file.
    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse level text. Fails fast; never yields a grid without a player.
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        if text.trim().is_empty() {
            return Err(LevelError::Empty);
        }

        let rows: Vec<Vec<Cell>> = text
            .lines()
            .map(|line| line.chars().map(Cell::from_char).collect())
            .collect();

        let mut player_spawn: Option<(usize, usize)> = None;
        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if *cell != Cell::PlayerSpawn {
                    continue;
                }
                if let Some(first) = player_spawn {
                    return Err(LevelError::DuplicatePlayer {
                        first,
                        second: (row, col),
                    });
                }
                player_spawn = Some((row, col));
            }
        }

        let player_spawn = player_spawn.ok_or(LevelError::MissingPlayer)?;
        Ok(Self { rows, player_spawn })
    }

    /// Number of columns in the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// (row, col) of the player spawn.
    pub fn player_spawn(&self) -> (usize, usize) {
        self.player_spawn
    }

    /// Every cell as (row, col, cell), row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (row, col, *cell))
        })
    }

    pub fn count(&self, kind: Cell) -> usize {
        self.cells().filter(|(_, _, cell)| *cell == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        let grid = LevelGrid::parse("xxxx\nxpbx\nx ex\nxxxx\n").unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.player_spawn(), (1, 1));
        assert_eq!(grid.count(Cell::Wall), 12);
        assert_eq!(grid.count(Cell::Crate), 1);
        assert_eq!(grid.count(Cell::EnemySpawn), 1);
        assert_eq!(grid.count(Cell::Floor), 1);
    }

    #[test]
    fn test_unknown_symbols_are_floor() {
        let grid = LevelGrid::parse("p?#.").unwrap();
        assert_eq!(grid.count(Cell::Floor), 3);
    }

    #[test]
    fn test_ragged_rows_and_crlf() {
        let grid = LevelGrid::parse("xxxxxx\r\nxp\r\nxxx\r\n").unwrap();
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.count(Cell::Floor), 0, "'\\r' must not become a floor cell");
    }

    #[test]
    fn test_empty_level_rejected() {
        assert!(matches!(LevelGrid::parse(""), Err(LevelError::Empty)));
        assert!(matches!(LevelGrid::parse("  \n\n"), Err(LevelError::Empty)));
    }

    #[test]
    fn test_missing_player_rejected() {
        let err = LevelGrid::parse("xxx\nxex\nxxx").unwrap_err();
        assert!(matches!(err, LevelError::MissingPlayer));
    }

    #[test]
    fn test_duplicate_player_rejected() {
        let err = LevelGrid::parse("p  \n  p").unwrap_err();
        match err {
            LevelError::DuplicatePlayer { first, second } => {
                assert_eq!(first, (0, 0));
                assert_eq!(second, (1, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LevelGrid::load(Path::new("/definitely/not/a/level")).unwrap_err();
        assert!(matches!(err, LevelError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/a/level"));
    }
}
