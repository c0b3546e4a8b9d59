//! Conversion from tile-map coordinates to hex vectors. A tactical map is
//! made of large hexagonal tiles, each of which holds a grid of hexes.

use crate::{
    config::TileGridConfig,
    error::Result,
    vector::HexVector,
};
use log::debug;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A location on a tiled map. `j`/`k` pick the tile, `u`/`v` the hex within
/// the tile (in the same oblique axes as [HexVector]) and `h` is height.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct TileCoord {
    pub j: i32,
    pub k: i32,
    pub u: i32,
    pub v: i32,
    pub h: i32,
}

impl TileCoord {
    pub const fn new(j: i32, k: i32, u: i32, v: i32, h: i32) -> Self {
        Self { j, k, u, v, h }
    }
}

impl From<(i32, i32, i32, i32, i32)> for TileCoord {
    fn from((j, k, u, v, h): (i32, i32, i32, i32, i32)) -> Self {
        Self::new(j, k, u, v, h)
    }
}

/// A tiled map with a fixed tile size
#[derive(Copy, Clone, Debug)]
pub struct TileGrid {
    config: TileGridConfig,
}

impl TileGrid {
    /// Create a new grid. Fails if the config is invalid.
    pub fn new(config: TileGridConfig) -> Result<Self> {
        config.validate()?;
        debug!("Tile grid with radius {}", config.tile_radius);
        Ok(Self { config })
    }

    pub fn config(&self) -> &TileGridConfig {
        &self.config
    }

    pub fn radius(&self) -> u16 {
        self.config.tile_radius
    }

    /// Vector from one map location to another. Stepping one tile in `j`
    /// moves `(2R, -R)` hexes in `(u, v)`, one tile in `k` moves `(R, R)`.
    pub fn bearing_vector(&self, from: TileCoord, to: TileCoord) -> HexVector {
        let radius = i64::from(self.radius());
        let delta = |from: i32, to: i32| i64::from(to) - i64::from(from);
        let dj = delta(from.j, to.j);
        let dk = delta(from.k, to.k);

        HexVector::from_uvz(
            delta(from.u, to.u) + radius * (dk + 2 * dj),
            delta(from.v, to.v) + radius * (dk - dj),
            delta(from.h, to.h),
        )
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self {
            config: TileGridConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_invalid_radius() {
        let result = TileGrid::new(TileGridConfig { tile_radius: 0 });
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_tile_steps() {
        let grid = TileGrid::default();
        let origin = TileCoord::default();
        let v = grid.bearing_vector(origin, TileCoord::new(1, 0, 0, 0, 0));
        assert_eq!((v.u(), v.v()), (16, -8));
        let v = grid.bearing_vector(origin, TileCoord::new(0, 1, 0, 0, 0));
        assert_eq!((v.u(), v.v()), (8, 8));
    }
}
