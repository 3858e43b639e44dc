use std::ops::{Add, Sub};

use num::Zero;

/// A Cartesian offset in the simulation's local world frame, in meters,
/// relative to the frame origin. `x` and `y` are the horizontal world axes
/// and `z` points up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalOffset {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LocalOffset {
    pub fn new(x: f64, y: f64, z: f64) -> LocalOffset {
        Self { x, y, z }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Horizontal distance from the origin.
    pub fn horizontal_norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl From<[f64; 3]> for LocalOffset {
    fn from([x, y, z]: [f64; 3]) -> Self {
        LocalOffset::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for LocalOffset {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        LocalOffset::new(x, y, z)
    }
}

impl From<LocalOffset> for [f64; 3] {
    fn from(value: LocalOffset) -> Self {
        [value.x, value.y, value.z]
    }
}

impl Add for LocalOffset {
    type Output = LocalOffset;

    fn add(self, rhs: Self) -> Self::Output {
        LocalOffset::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for LocalOffset {
    type Output = LocalOffset;

    fn sub(self, rhs: Self) -> Self::Output {
        LocalOffset::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Zero for LocalOffset {
    fn zero() -> Self {
        LocalOffset::new(0., 0., 0.)
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }
}
