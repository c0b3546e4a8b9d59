//! Shellstar: segment-by-segment simulation of a seeking projectile closing
//! on a target that keeps moving at a constant relative velocity.

use crate::{
    avid::AvidWindow,
    config::ShellstarConfig,
    error::{Error, Result},
    timed,
    util,
    vector::{Bearing, DistanceMode, HexVector, MovementGrid, SEGMENTS_PER_TURN},
};
use derive_more::Display;
use log::{debug, Level};
use std::fmt;
use validator::Validate;

/// Evasion thrust (min/max) available to the target, indexed by how many
/// segments the projectile was in flight. Longer flights clamp to the last
/// entry.
pub const EVASION_THRUST: [&str; 10] = [
    "N/A", "0/1", "0/2", "1/3", "1/4", "1/5", "2/6", "2/7", "2/7", "2/8",
];

/// Give up on a projectile after this many segments (100 turns). Only a
/// target holding exactly at the edge of the projectile's reach gets here.
pub const MAX_FLIGHT_SEGMENTS: u32 = 100 * SEGMENTS_PER_TURN as u32;

/// Closing rates (hexes/turn) below this don't count as an impact
const MIN_CLOSURE_RATE: f64 = 0.25;

/// Why a shot can't land
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum NoShotReason {
    #[display(fmt = "range to target is opening")]
    Diverging,
    #[display(fmt = "closure rate is negligible")]
    NegligibleClosure,
    #[display(fmt = "projectile ran out of flight time")]
    FlightLimit,
    #[display(fmt = "target is at zero range")]
    PointBlank,
}

/// Time label of one line of the closure trace
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SegmentStamp {
    /// Segments since launch, when no launch segment was given
    Elapsed(u32),
    TurnSegment { turn: u32, segment: u8 },
}

impl fmt::Display for SegmentStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Elapsed(elapsed) => write!(f, "+{}", elapsed),
            Self::TurnSegment { turn, segment } => {
                write!(f, "{}:{}", turn, segment)
            }
        }
    }
}

/// One line of the closure trace. `distance` is the remaining range,
/// rounded, or `None` once the projectile has hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClosureEntry {
    pub stamp: SegmentStamp,
    pub distance: Option<u64>,
}

impl ClosureEntry {
    pub fn is_hit(&self) -> bool {
        self.distance.is_none()
    }
}

impl fmt::Display for ClosureEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.distance {
            Some(distance) => write!(f, "{} {}", self.stamp, distance),
            None => write!(f, "{} HIT", self.stamp),
        }
    }
}

/// Where the target can go to dodge
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Evasion {
    /// The projectile comes straight down (or up), so any direction on the
    /// horizon works
    Amber { impact: AvidWindow },
    /// The four windows 90° off the impact window
    Orthogonal {
        impact: AvidWindow,
        up: AvidWindow,
        right: AvidWindow,
        down: AvidWindow,
        left: AvidWindow,
    },
}

impl Evasion {
    /// Work out the evasion windows for a projectile arriving through
    /// `impact`
    pub fn for_impact(impact: AvidWindow) -> Result<Self> {
        if impact.is_pole() {
            return Ok(Self::Amber { impact });
        }

        // The ring starts at the top and runs clockwise, so its second half
        // starts at the bottom
        let ring = impact.offset_ring(3)?;
        let (first, second) = ring.split_at(ring.len() / 2);
        let on_horizon = |windows: &[AvidWindow]| {
            windows
                .iter()
                .copied()
                .find(AvidWindow::is_horizon)
                .ok_or(Error::Unsupported("evasion ring off the horizon"))
        };

        Ok(Self::Orthogonal {
            impact,
            up: first[0],
            right: on_horizon(first)?,
            down: second[0],
            left: on_horizon(second)?,
        })
    }

    pub fn impact(&self) -> AvidWindow {
        match self {
            Self::Amber { impact } | Self::Orthogonal { impact, .. } => *impact,
        }
    }
}

impl fmt::Display for Evasion {
    /// Either the pole and an amber-ring note, or a little compass:
    ///
    /// ```text
    ///    +++
    /// F (D/E) C
    ///    ---
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amber { impact } => {
                write!(f, "({})\nEvade in Amber Ring", impact)
            }
            Self::Orthogonal {
                impact,
                up,
                right,
                down,
                left,
            } => {
                let left = left.to_string();
                let pad = " ".repeat(left.len());
                writeln!(f, "{}  {}", pad, up)?;
                writeln!(f, "{} ({}) {}", left, impact, right)?;
                write!(f, "{}  {}", pad, down)
            }
        }
    }
}

/// Everything known about a shot that lands
#[derive(Clone, Debug, PartialEq)]
pub struct ShellstarReport {
    pub evasion: Evasion,
    /// Segments between launch and impact
    pub segments_elapsed: u32,
    /// Range to the target at every segment, ending with the hit
    pub trace: Vec<ClosureEntry>,
    /// Relative speed at impact, in hexes per turn
    pub closure_rate: f64,
}

impl ShellstarReport {
    /// Thrust the target needs to dodge, as `min/max`
    pub fn evasion_thrust(&self) -> &'static str {
        let index =
            (self.segments_elapsed as usize).min(EVASION_THRUST.len() - 1);
        EVASION_THRUST[index]
    }

    /// Closure rate per segment, to the nearest half
    pub fn rate_of_closure(&self) -> String {
        util::round_to_half(self.closure_rate / SEGMENTS_PER_TURN as f64)
    }
}

impl fmt::Display for ShellstarReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.evasion)?;
        writeln!(f, ">{} to evade", self.evasion_thrust())?;
        for entry in &self.trace {
            writeln!(f, "{}", entry)?;
        }
        write!(f, "RoC: {}", self.rate_of_closure())
    }
}

/// Result of a shellstar run. Missing is a normal outcome, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum ShellstarOutcome {
    NoShot(NoShotReason),
    Hit(ShellstarReport),
}

impl ShellstarOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    pub fn report(&self) -> Option<&ShellstarReport> {
        match self {
            Self::NoShot(_) => None,
            Self::Hit(report) => Some(report),
        }
    }
}

impl fmt::Display for ShellstarOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoShot(_) => write!(f, "No Shot"),
            Self::Hit(report) => write!(f, "{}", report),
        }
    }
}

/// Where the projectile ended up
struct Flight {
    /// Target position relative to the launcher at impact
    to_target: HexVector,
    segments_elapsed: u32,
    trace: Vec<ClosureEntry>,
}

/// Fire a projectile at a target `to_target` away that is moving at
/// `crossing` relative to the launcher.
///
/// Each segment the target moves one row of its movement grid and the
/// projectile closes another eighth of its muzzle velocity. The run stops
/// when the range reaches zero (a hit) or starts opening (no shot).
pub fn shellstar(
    to_target: HexVector,
    crossing: HexVector,
    config: &ShellstarConfig,
) -> Result<ShellstarOutcome> {
    config.validate()?;
    debug!(
        "Shellstar at {} crossing {} with {:?}",
        to_target, crossing, config
    );

    let grid = crossing.movement_grid();
    let flight = match timed!(
        "Shellstar flight",
        Level::Trace,
        fly(to_target, &grid, config)
    ) {
        Ok(flight) => flight,
        Err(reason) => return Ok(no_shot(reason)),
    };

    let impact = -flight.to_target;
    let window = match impact.bearing(DistanceMode::Exact) {
        Bearing::None => return Ok(no_shot(NoShotReason::PointBlank)),
        Bearing::Window { window, .. } => window,
    };
    let evasion = Evasion::for_impact(window)?;

    let target_velocity = crossing.to_cartesian();
    let seeker_velocity = flight.to_target.to_cartesian()
        * (config.muzzle_velocity / flight.to_target.cartesian_magnitude());
    let closure_rate = (seeker_velocity - target_velocity).norm();
    if closure_rate < MIN_CLOSURE_RATE {
        return Ok(no_shot(NoShotReason::NegligibleClosure));
    }

    let report = ShellstarReport {
        evasion,
        segments_elapsed: flight.segments_elapsed,
        trace: flight.trace,
        closure_rate,
    };
    debug!(
        "Hit after {} segments through {}",
        report.segments_elapsed, window
    );
    Ok(ShellstarOutcome::Hit(report))
}

fn no_shot(reason: NoShotReason) -> ShellstarOutcome {
    debug!("No shot: {}", reason);
    ShellstarOutcome::NoShot(reason)
}

fn fly(
    to_target: HexVector,
    grid: &MovementGrid,
    config: &ShellstarConfig,
) -> std::result::Result<Flight, NoShotReason> {
    let closing_per_segment = config.muzzle_velocity / SEGMENTS_PER_TURN as f64;
    let mut to_target = to_target;
    let mut segment = config.launch_segment.unwrap_or(1);
    let mut turn = 0;
    let mut elapsed = 0;
    let mut distance = to_target.cartesian_magnitude();
    let mut previous = distance;
    let mut trace = Vec::new();

    loop {
        if distance > previous {
            return Err(NoShotReason::Diverging);
        }

        let stamp = match config.launch_segment {
            Some(_) => SegmentStamp::TurnSegment { turn, segment },
            None => SegmentStamp::Elapsed(elapsed),
        };
        let hit = distance <= 0.0;
        let entry = ClosureEntry {
            stamp,
            distance: if hit {
                None
            } else {
                Some(util::round_half_up(distance) as u64)
            },
        };
        debug!("{} (exact range {:.3})", entry, distance);
        trace.push(entry);

        if hit {
            return Ok(Flight {
                to_target,
                segments_elapsed: elapsed,
                trace,
            });
        }
        if elapsed >= MAX_FLIGHT_SEGMENTS {
            return Err(NoShotReason::FlightLimit);
        }

        previous = distance;
        elapsed += 1;
        to_target += grid.displacement(segment);
        distance = to_target.cartesian_magnitude()
            - closing_per_segment * elapsed as f64;

        if segment == SEGMENTS_PER_TURN {
            segment = 1;
            turn += 1;
        } else {
            segment += 1;
        }
    }
}
