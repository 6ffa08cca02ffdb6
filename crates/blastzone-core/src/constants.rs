//! Simulation constants and default tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 100;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Grid ---

/// Side of one grid cell in world units. The player steps one cell at a time.
pub const TILE_SIZE: i32 = 65;

/// World position of grid cell (0, 0).
pub const GRID_ORIGIN: (i32, i32) = (50, 50);

// --- Player ---

/// Default number of bombs a player may have outstanding.
pub const DEFAULT_MAX_BOMBS: u32 = 5;

/// Default blast reach in cells from the bomb's own cell.
pub const DEFAULT_MAX_RANGE: u32 = 2;

// --- Fuses ---

/// Bomb fuse length (seconds).
pub const BOMB_FUSE_SECS: f64 = 2.0;

/// Visible lifetime of a blast cell (seconds).
pub const BLAST_LIFETIME_SECS: f64 = 0.6;

/// Frames in the explosion spritesheet.
pub const BLAST_FRAME_COUNT: u32 = 12;

// --- Enemies ---

/// Wandering speed of hostile actors (world units per tick).
pub const ENEMY_SPEED: i32 = 3;
