//! Text-in, text-out helpers for filling out a turn's paperwork

use crate::{
    error::Result,
    vector::{Bearing, DistanceMode, HexVector},
};

/// A vector's canonical form followed by its movement grid, separated by a
/// blank line
pub fn movement_report(vector: &str) -> Result<String> {
    let vector: HexVector = vector.parse()?;
    Ok(format!("{}\n\n{}", vector, vector.movement_grid()))
}

/// Bearing to another ship, given both ships' vectors
pub fn crossing_bearing(mine: &str, other: &str) -> Result<Bearing> {
    let mine: HexVector = mine.parse()?;
    let other: HexVector = other.parse()?;
    Ok((other - mine).bearing(DistanceMode::Exact))
}
