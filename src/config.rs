//! Runner configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BLOCKFALL_SEED` | clock-derived | RNG seed for shape selection |
//! | `BLOCKFALL_FALL_MS` | 500 | Automatic fall interval (must be > 0) |
//! | `BLOCKFALL_FIELD_PX` | `300x600` | Play-field size in pixels, `WxH` |
//! | `BLOCKFALL_BLOCK_PX` | 30 | Block edge in pixels |
//! | `BLOCKFALL_LOG_PATH` | unset | JSON-lines session log file |
//!
//! Values that are missing or fail to parse fall back to their defaults. A field
//! whose grid edge falls outside `MIN_GRID_DIM..=MAX_GRID_DIM` cells uses 10x20.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::EngineConfig;
use crate::types::{
    grid_dims_from_px, BLOCK_SIZE_PX, DEFAULT_FALL_INTERVAL_MS, GRID_HEIGHT, GRID_WIDTH,
    PLAYFIELD_HEIGHT_PX, PLAYFIELD_WIDTH_PX,
};

pub use crate::types::MAX_GRID_DIM;

/// Smallest grid edge accepted from configuration
pub const MIN_GRID_DIM: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub fall_interval_ms: u32,
    pub grid_width: u16,
    pub grid_height: u16,
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            fall_interval_ms: DEFAULT_FALL_INTERVAL_MS,
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let fall_interval_ms = lookup("BLOCKFALL_FALL_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(DEFAULT_FALL_INTERVAL_MS);

        let (field_w, field_h) = lookup("BLOCKFALL_FIELD_PX")
            .and_then(|s| parse_size(&s))
            .unwrap_or((PLAYFIELD_WIDTH_PX, PLAYFIELD_HEIGHT_PX));
        let block_px = lookup("BLOCKFALL_BLOCK_PX")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(BLOCK_SIZE_PX);
        let (grid_width, grid_height) = grid_dims_from_px(field_w, field_h, block_px)
            .filter(|&(w, h)| grid_dim_ok(w) && grid_dim_ok(h))
            .unwrap_or((GRID_WIDTH, GRID_HEIGHT));

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            seed,
            fall_interval_ms,
            grid_width,
            grid_height,
            log_path,
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            grid_width: self.grid_width,
            grid_height: self.grid_height,
            fall_interval_ms: self.fall_interval_ms,
        }
    }
}

fn grid_dim_ok(cells: u16) -> bool {
    (MIN_GRID_DIM..=MAX_GRID_DIM).contains(&cells)
}

/// Parse `"WxH"` (case-insensitive `x`).
fn parse_size(s: &str) -> Option<(u16, u16)> {
    let (w, h) = s.trim().split_once(['x', 'X'])?;
    Some((w.trim().parse().ok()?, h.trim().parse().ok()?))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
