//! Tunable game rules, loadable from JSON.
//!
//! Every field falls back to the matching constant in `constants.rs`, so a
//! rules file only needs to name the values it overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::HostileContact;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read rules file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid rules: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid rules: {0}")]
    Invalid(String),
}

/// Arena tuning shared by level setup and the systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Side of one grid cell in world units; also the player's step.
    pub tile_size: i32,
    /// World position of grid cell (0, 0).
    pub origin: (i32, i32),
    pub max_bombs: u32,
    /// Blast reach in cells for the player's bombs.
    pub max_range: u32,
    pub bomb_fuse_secs: f64,
    pub blast_lifetime_secs: f64,
    pub blast_frame_count: u32,
    pub enemy_speed: i32,
    /// Initial enemy velocities, consumed in spawn order and cycled.
    pub enemy_spawn_pattern: Vec<(i32, i32)>,
    pub hostile_contact: HostileContact,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            origin: GRID_ORIGIN,
            max_bombs: DEFAULT_MAX_BOMBS,
            max_range: DEFAULT_MAX_RANGE,
            bomb_fuse_secs: BOMB_FUSE_SECS,
            blast_lifetime_secs: BLAST_LIFETIME_SECS,
            blast_frame_count: BLAST_FRAME_COUNT,
            enemy_speed: ENEMY_SPEED,
            enemy_spawn_pattern: vec![(ENEMY_SPEED, 0), (0, ENEMY_SPEED)],
            hostile_contact: HostileContact::default(),
        }
    }
}

impl GameRules {
    /// Parse rules from a JSON document and validate them.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let rules: GameRules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Read and parse a JSON rules file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size <= 0 {
            return Err(ConfigError::Invalid(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if self.blast_frame_count == 0 {
            return Err(ConfigError::Invalid("blast_frame_count must be at least 1".into()));
        }
        if self.bomb_fuse_secs < 0.0 || self.blast_lifetime_secs < 0.0 {
            return Err(ConfigError::Invalid("fuse lengths must not be negative".into()));
        }
        Ok(())
    }

    /// Time between explosion animation frames.
    pub fn blast_frame_delta_secs(&self) -> f64 {
        self.blast_lifetime_secs / self.blast_frame_count as f64
    }

    /// Initial velocity for the `index`-th enemy in spawn order.
    pub fn enemy_spawn_velocity(&self, index: usize) -> (i32, i32) {
        if self.enemy_spawn_pattern.is_empty() {
            return (self.enemy_speed, 0);
        }
        self.enemy_spawn_pattern[index % self.enemy_spawn_pattern.len()]
    }

    /// The four cardinal velocities at enemy speed.
    pub fn enemy_directions(&self) -> Vec<(i32, i32)> {
        crate::enums::Direction::ALL
            .iter()
            .map(|d| {
                let (dx, dy) = d.unit();
                (dx * self.enemy_speed, dy * self.enemy_speed)
            })
            .collect()
    }

    /// Snap a world position to the top-left corner of its grid cell.
    pub fn snap_to_cell(&self, x: i32, y: i32) -> (i32, i32) {
        let (ox, oy) = self.origin;
        let size = self.tile_size;
        let snap = |v: i32, o: i32| o + ((v - o) as f64 / size as f64).round() as i32 * size;
        (snap(x, ox), snap(y, oy))
    }
}
