use crate::{
    avid::AvidWindow,
    util,
    vector::{Component, Decomposition, Direction, HexVector},
};
use std::fmt;
use strum::{Display, EnumString};

/// How to measure horizontal distance when taking a bearing
#[derive(Copy, Clone, Debug, Default, Display, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum DistanceMode {
    /// True geometric distance, accounting for the 60° between the major and
    /// minor components
    #[default]
    Exact,
    /// Hex count: major + minor, the way a counter moves on the map
    Counted,
}

/// The distance and AVID window at which a vector is seen from the origin
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Bearing {
    /// Zero vector, there's nothing to look at
    None,
    Window { distance: u64, window: AvidWindow },
}

impl Bearing {
    pub fn distance(&self) -> Option<u64> {
        match self {
            Self::None => None,
            Self::Window { distance, .. } => Some(*distance),
        }
    }

    pub fn window(&self) -> Option<AvidWindow> {
        match self {
            Self::None => None,
            Self::Window { window, .. } => Some(*window),
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "NONE"),
            Self::Window { distance, window } => {
                write!(f, "{} {}", distance, window)
            }
        }
    }
}

impl HexVector {
    /// Distance to this vector and the window it's seen through. The window
    /// is an edge (e.g. `C/D`) when the minor component is at least a third
    /// of the major one, and it climbs rings as the vertical component grows
    /// relative to the horizontal distance, up to a pole.
    pub fn bearing(&self, mode: DistanceMode) -> Bearing {
        let Decomposition {
            major,
            minor,
            vertical,
        } = self.decompose();

        let pole = if vertical.direction == Direction::Down {
            AvidWindow::DOWN
        } else {
            AvidWindow::UP
        };

        if major.magnitude == 0 {
            return if vertical.magnitude == 0 {
                Bearing::None
            } else {
                Bearing::Window {
                    distance: vertical.magnitude,
                    window: pole,
                }
            };
        }

        let (a, b) = (major.magnitude as u128, minor.magnitude as u128);
        let h_squared = match mode {
            DistanceMode::Exact => a * a + a * b + b * b,
            DistanceMode::Counted => (a + b) * (a + b),
        };
        let v_squared = (vertical.magnitude as u128).pow(2);

        // All three thresholds compare squares so they stay exact
        let tier = [
            16 * v_squared > h_squared,
            v_squared > h_squared,
            v_squared >= 16 * h_squared,
        ]
        .iter()
        .filter(|&&passed| passed)
        .count() as i32;

        let window = if tier == 3 {
            pole
        } else {
            let ring = if vertical.direction == Direction::Down {
                -tier
            } else {
                tier
            };
            AvidWindow::wrapping(horizontal_window(major, minor) as i32, ring)
        };

        let distance = util::round_sqrt(h_squared + v_squared);
        Bearing::Window {
            distance: distance as u64,
            window,
        }
    }
}

/// Window index for the horizontal part of a bearing
fn horizontal_window(major: Component, minor: Component) -> u8 {
    let edge = if minor.magnitude * 3 >= major.magnitude {
        major.direction.edge_window_index(minor.direction)
    } else {
        None
    };
    edge.or_else(|| major.direction.window_index())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bearing(s: &str, mode: DistanceMode) -> String {
        s.parse::<HexVector>().unwrap().bearing(mode).to_string()
    }

    #[test]
    fn test_exact() {
        let exact = |s| bearing(s, DistanceMode::Exact);
        assert_eq!(exact(""), "NONE");
        assert_eq!(exact("23B"), "23 B");
        assert_eq!(exact("8D 5C"), "11 C/D");
        assert_eq!(exact("8+"), "8 +++");
        assert_eq!(exact("8C 5D 12+"), "17 C/D++");
        assert_eq!(exact("12E 14+"), "18 E++");
        assert_eq!(exact("2A 12-"), "12 ---");
    }

    #[test]
    fn test_counted() {
        let counted = |s| bearing(s, DistanceMode::Counted);
        assert_eq!(counted("8C 5D"), "13 C/D");
        assert_eq!(counted("4-"), "4 ---");
    }

    #[test]
    fn test_edge_wraps_clockwise() {
        // F and A are adjacent across the end of the window table
        assert_eq!(bearing("5A 4F", DistanceMode::Exact), "8 F/A");
    }

    #[test]
    fn test_minor_below_edge_threshold() {
        // 3 * 3 < 10, so the bearing is still through the major's hex side
        assert_eq!(bearing("10B 3C", DistanceMode::Counted), "13 B");
    }

    #[test]
    fn test_accessors() {
        let b: Bearing = "23B".parse::<HexVector>().unwrap().bearing(
            DistanceMode::Exact,
        );
        assert_eq!(b.distance(), Some(23));
        assert_eq!(b.window().map(|w| w.to_string()), Some("B".into()));
        assert_eq!(Bearing::None.distance(), None);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(
            "counted".parse::<DistanceMode>(),
            Ok(DistanceMode::Counted)
        );
        assert_eq!(DistanceMode::Exact.to_string(), "exact");
    }
}
