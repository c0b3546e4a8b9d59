//! Geometry for Attack Vector: Tactical. This crate holds the math behind
//! the paperwork of a turn: hex vectors and their movement grids, AVID
//! windows, tile-map bearings and shellstar intercept runs. Presentation is
//! left to the caller (see the `avt` CLI).
//!
//! ```
//! use avt::{HexVector, DistanceMode, ShellstarConfig};
//!
//! let to_target: HexVector = "13A 5B 4-".parse().unwrap();
//! assert_eq!(to_target.bearing(DistanceMode::Exact).to_string(), "17 A/B");
//!
//! let outcome =
//!     avt::shellstar(to_target, HexVector::ZERO, &ShellstarConfig::new(24.0))
//!         .unwrap();
//! println!("{}", outcome);
//! ```

mod avid;
mod config;
mod error;
mod report;
mod shellstar;
mod tile;
mod util;
mod vector;

pub use crate::{
    avid::{AvidWindow, LABELS as WINDOW_LABELS, MAX_OFFSET, POLE_RING},
    config::{ShellstarConfig, TileGridConfig},
    error::{Error, Result, VectorFault},
    report::{crossing_bearing, movement_report},
    shellstar::{
        shellstar, ClosureEntry, Evasion, NoShotReason, SegmentStamp,
        ShellstarOutcome, ShellstarReport, EVASION_THRUST, MAX_FLIGHT_SEGMENTS,
    },
    tile::{TileCoord, TileGrid},
    util::round_to_half,
    vector::{
        Bearing, Cartesian, Component, Decomposition, Direction, DistanceMode,
        GridColumn, HexVector, Magnitudes, MovementGrid, RemainderTable,
        StandardRemainders, SEGMENTS_PER_TURN, SIN_60,
    },
};
