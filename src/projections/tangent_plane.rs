use crate::{
    constants::{POLE_COS_EPS, ROTATION_REL_EPS},
    geodetic::Geodetic,
    local::LocalOffset,
    surface_model::EllipsoidRadii,
    utility::{dms, GeoMath},
    Error,
};

/// Local radii of curvature at a reference latitude, in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadiiOfCurvature {
    /// Prime-vertical radius `N`, scales east-west displacement.
    pub east: f64,
    /// Meridional radius `M`, scales north-south displacement.
    pub north: f64,
    /// Mean of `M` and `N`.
    pub vertical: f64,
}

impl RadiiOfCurvature {
    #[allow(clippy::similar_names)]
    pub(crate) fn at_latitude(ellipsoid: EllipsoidRadii, lat: f64) -> RadiiOfCurvature {
        let a = ellipsoid.equatorial;
        let e2 = ellipsoid.eccentricity_squared();

        let sin_lat = lat.to_radians().sin();
        let w2 = 1. - e2 * sin_lat.powi(2);

        let n = a / w2.sqrt();
        let m = a * (1. - e2) / (w2 * w2.sqrt());

        Self {
            east: n,
            north: m,
            vertical: (m + n) / 2.,
        }
    }
}

/// Linearized tangent plane at a reference point. Maps local offsets to
/// angular deltas through the reference radii of curvature, after rotating
/// the local axes by the heading offset.
///
/// The heading `θ` is the counter-clockwise angle from East to local +X,
/// which is also the angle from North to local +Y:
///
/// ```text
/// east  = x·cosθ − y·sinθ
/// north = x·sinθ + y·cosθ
/// ```
#[derive(Clone, Copy, Debug)]
pub(crate) struct TangentPlane {
    lat0: f64,
    lon0: f64,
    elevation: f64,
    radii: RadiiOfCurvature,
    cos_lat0: f64,
    sin_heading: f64,
    cos_heading: f64,
}

impl TangentPlane {
    pub fn new(lat0: f64, lon0: f64, heading: f64, elevation: f64, radii: RadiiOfCurvature) -> TangentPlane {
        let (sin_heading, cos_heading) = heading.to_radians().sin_cos();

        Self {
            lat0,
            lon0,
            elevation,
            radii,
            cos_lat0: lat0.to_radians().cos(),
            sin_heading,
            cos_heading,
        }
    }

    pub fn radii(&self) -> RadiiOfCurvature {
        self.radii
    }

    fn is_polar(&self) -> bool {
        self.cos_lat0.abs() < POLE_COS_EPS
    }

    pub fn to_geodetic(&self, offset: &LocalOffset) -> Result<Geodetic, Error> {
        if !offset.is_finite() {
            return Err(Error::OutOfDomain(format!("Offset {offset:?} is not finite")));
        }

        let east = offset.x * self.cos_heading - offset.y * self.sin_heading;
        let north = offset.x * self.sin_heading + offset.y * self.cos_heading;

        let dlat = north / self.radii.north;
        let dlon = if self.is_polar() {
            if east.abs() > ROTATION_REL_EPS * offset.horizontal_norm() {
                return Err(Error::SingularAtPole(east));
            }
            0.
        } else {
            east / (self.radii.east * self.cos_lat0)
        };

        let lat = self.lat0 + dlat.to_degrees();
        let qd = f64::from(dms::QD);
        if !(-qd..=qd).contains(&lat) {
            return Err(Error::OutOfDomain(format!(
                "Latitude {lat} outside of valid range [-90, 90]"
            )));
        }

        let lon = (self.lon0 + dlon.to_degrees()).lon_normalize();

        Ok(Geodetic::new(lat, lon, self.elevation + offset.z))
    }

    pub fn to_local(&self, coord: &Geodetic) -> Result<LocalOffset, Error> {
        let dlat = (coord.latitude - self.lat0).to_radians();
        // Compared before the heading rotation, so no rotation noise here.
        // Shortest way round, so offsets straddling the antimeridian stay small
        let dlon = self.lon0.ang_diff(coord.longitude).to_radians();

        let north = dlat * self.radii.north;
        let east = if self.is_polar() {
            if !dlon.is_zero() {
                return Err(Error::SingularAtPole(dlon.to_degrees()));
            }
            0.
        } else {
            dlon * self.radii.east * self.cos_lat0
        };

        let x = east * self.cos_heading + north * self.sin_heading;
        let y = -east * self.sin_heading + north * self.cos_heading;

        Ok(LocalOffset::new(x, y, coord.altitude - self.elevation))
    }
}
