use crate::ThisOrThat;

pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
    /// Degrees per turn
    pub const TD: i32 = 2 * HD;
}

fn special_sum(u: f64, v: f64) -> (f64, f64) {
    let s = u + v;
    let up = s - v;
    let vpp = s - up;

    let up = up - u;
    let vpp = vpp - v;

    let t = s.is_zero().ternary_lazy(|| s, || -(up + vpp));

    (s, t)
}

pub(crate) trait GeoMath {
    fn is_zero(&self) -> bool;
    fn eps_eq(&self, other: Self) -> bool;
    fn remainder(&self, denom: Self) -> Self;
    fn lon_normalize(&self) -> Self;
    fn heading_normalize(&self) -> Self;
    fn ang_diff(&self, other: Self) -> Self;
}

impl GeoMath for f64 {
    fn is_zero(&self) -> bool {
        self.abs() < f64::EPSILON
    }

    fn eps_eq(&self, other: f64) -> bool {
        (*self - other).abs() < f64::EPSILON
    }

    fn remainder(&self, denom: Self) -> Self {
        *self - (*self / denom).round() * denom
    }

    /// Wrap into `[-180, 180)`
    fn lon_normalize(&self) -> f64 {
        let hd = f64::from(dms::HD);
        let td = f64::from(dms::TD);
        // % is exact, values already in range come back unchanged
        let value = *self % td;

        if value < -hd {
            value + td
        } else {
            (value >= hd).ternary(value - td, value)
        }
    }

    /// Wrap into `[0, 360)`
    fn heading_normalize(&self) -> f64 {
        let td = f64::from(dms::TD);
        let value = self.rem_euclid(td);

        // rem_euclid rounds tiny negative inputs up to a full turn
        (value >= td).ternary(0., value)
    }

    /// Difference `other - self` reduced to `[-180, 180]`.
    fn ang_diff(&self, other: f64) -> f64 {
        let td = f64::from(dms::TD);
        // Use remainder instead of a full normalization, boundary cases are
        // resolved below taking account of the error
        let (diff, err) = special_sum((-*self).remainder(td), other % td);
        // This second sum can only change d if abs(d) < 128, so don't need to
        // apply remainder yet again.
        let (diff, err) = special_sum(diff.remainder(td), err);

        let hd = f64::from(dms::HD);
        // Fix the sign if d = -180, 0, 180.
        if diff.is_zero() || diff.abs().eps_eq(hd) {
            // If e == 0, take sign from y - x
            // else (e != 0, implies d = +/-180), d and e must have opposite signs
            let sign = if err.is_zero() { other - *self } else { -err };
            diff.copysign(sign)
        } else {
            diff
        }
    }
}
