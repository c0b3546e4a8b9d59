use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration for converting tile-map coordinates into vectors. There's
/// one of these per [TileGrid](crate::TileGrid), so maps with different tile
/// sizes can be handled side by side.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TileGridConfig {
    /// Distance from the center hex of a tile to its corner hexes, in hexes.
    /// The standard tactical map uses 8.
    #[validate(range(min = 1, max = 10000))]
    pub tile_radius: u16,
}

impl Default for TileGridConfig {
    fn default() -> Self {
        Self { tile_radius: 8 }
    }
}

/// Parameters of a single shellstar launch
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ShellstarConfig {
    /// Closing speed of the projectile, in hexes per turn
    #[validate(range(min = 0.0))]
    pub muzzle_velocity: f64,

    /// Segment (1-8) of the launch. If given, the closure trace is stamped
    /// `turn:segment` starting from turn 0, otherwise it counts elapsed
    /// segments (`+N`).
    #[validate(range(min = 1, max = 8))]
    pub launch_segment: Option<u8>,
}

impl Default for ShellstarConfig {
    fn default() -> Self {
        Self {
            muzzle_velocity: 24.0,
            launch_segment: None,
        }
    }
}

impl ShellstarConfig {
    pub fn new(muzzle_velocity: f64) -> Self {
        Self {
            muzzle_velocity,
            launch_segment: None,
        }
    }

    /// Same config, launched in `segment`
    pub fn launched_in(self, segment: u8) -> Self {
        Self {
            launch_segment: Some(segment),
            ..self
        }
    }
}
