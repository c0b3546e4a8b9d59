use derive_more::{Add, Display, Mul, Sub};

/// sin(60°), i.e. √3 / 2. The only irrational constant the hex basis needs.
pub const SIN_60: f64 = 0.866_025_403_784_438_6;

/// A vector projected into cartesian space. Positive `x` points through the
/// B/C edge, positive `y` through A and positive `z` is `+` (up).
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Add, Sub, Mul)]
#[display(fmt = "({}, {}, {})", x, y, z)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_sin_60() {
        assert_approx_eq!(SIN_60, (std::f64::consts::PI / 3.0).sin(), 1e-15);
    }

    #[test]
    fn test_norm() {
        assert_approx_eq!(Cartesian::new(3.0, 4.0, 12.0).norm(), 13.0);
        assert_approx_eq!(Cartesian::default().norm(), 0.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Cartesian::new(1.0, 2.0, 3.0);
        let b = Cartesian::new(0.5, -1.0, 1.0);
        assert_eq!(a - b, Cartesian::new(0.5, 3.0, 2.0));
        assert_eq!(a + b, Cartesian::new(1.5, 1.0, 4.0));
        assert_eq!(a * 2.0, Cartesian::new(2.0, 4.0, 6.0));
    }
}
