use std::fmt::Display;

use crate::Error;

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// A geodetic coordinate: latitude and longitude in degrees, altitude in
/// meters above the reference ellipsoid. This is what
/// [`SphericalCoordinates::convert`](crate::SphericalCoordinates::convert)
/// produces.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geodetic {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "alt"))]
    pub(crate) altitude: f64,
}

impl Geodetic {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64, alt: f64) -> Geodetic {
        Self {
            latitude: lat,
            longitude: lon,
            altitude: alt,
        }
    }

    /// Tries to create a geodetic point. First checks if the values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180)
    /// * Altitude must be finite
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRangeLatitude`] for a bad latitude and
    /// [`Error::OutOfDomain`] for a bad longitude or altitude.
    ///
    /// # Usage
    ///
    /// ```
    /// use spherecoord::Geodetic;
    ///
    /// let coord = Geodetic::create(37.0, -122.0, 12.5).unwrap();
    ///
    /// assert_eq!(coord.latitude(), 37.0);
    /// assert_eq!(coord.longitude(), -122.0);
    /// assert_eq!(coord.altitude(), 12.5);
    ///
    /// assert!(Geodetic::create(91.0, 0.0, 0.0).is_err());
    /// assert!(Geodetic::create(0.0, 180.0, 0.0).is_err());
    /// ```
    pub fn create(lat: f64, lon: f64, alt: f64) -> Result<Geodetic, Error> {
        if !(-90_f64..=90_f64).contains(&lat) {
            Err(Error::OutOfRangeLatitude(lat))
        } else if !(-180_f64..180_f64).contains(&lon) || !alt.is_finite() {
            Err(Error::OutOfDomain(format!("Longitude {lon} / altitude {alt} outside of valid range")))
        } else {
            Ok(Geodetic::new(lat, lon, alt))
        }
    }

    /// Returns the latitude in degrees.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees, in `[-180, 180)`.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the altitude in meters.
    #[inline]
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Returns `[latitude, longitude, altitude]`.
    pub fn to_array(&self) -> [f64; 3] {
        [self.latitude, self.longitude, self.altitude]
    }

    /// Returns the surface distance in meters between two points
    /// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    /// Altitude is ignored.
    ///
    /// ```
    /// use spherecoord::Geodetic;
    ///
    /// let a = Geodetic::create(37.0, -122.0, 0.0).unwrap();
    /// let b = Geodetic::create(38.0, -122.0, 0.0).unwrap();
    /// assert!((a.haversine(&b) - 111_195.0).abs() < 1.0);
    /// ```
    pub fn haversine(&self, other: &Geodetic) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2) +
            lat1_r.cos() * lat2_r.cos() *
            ((other.longitude - self.longitude).to_radians() / 2.0).sin().powi(2)
        ).sqrt().asin()
    }
}

impl Display for Geodetic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        let mut buf = ryu::Buffer::new();
        let alt = buf.format(self.altitude);
        write!(f, "{lat} {lon} {alt}")
    }
}
