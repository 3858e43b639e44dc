use std::collections::{BTreeMap, HashMap};

use crate::{constants::element, Error, SurfaceModel};

/// Read access to a structured configuration document, such as the
/// `<spherical_coordinates>` element of a world description. Parsing the
/// document itself is up to the implementor; values are handed over as
/// their raw text.
pub trait ConfigSource {
    fn value(&self, key: &str) -> Option<&str>;
}

impl ConfigSource for HashMap<String, String> {
    fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl ConfigSource for BTreeMap<String, String> {
    fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<const N: usize> ConfigSource for [(&str, &str); N] {
    fn value(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

/// Already-parsed reference frame parameters, as handed to
/// [`SphericalCoordinates::load`](crate::SphericalCoordinates::load).
///
/// Values are stored as given; range checks and normalization happen on load.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceParams {
    pub surface_model: SurfaceModel,
    #[cfg_attr(feature = "serde", serde(alias = "latitude_deg"))]
    pub latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "longitude_deg"))]
    pub longitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "heading_deg"))]
    pub heading: f64,
    /// Altitude of the frame origin above the ellipsoid, in meters.
    #[cfg_attr(feature = "serde", serde(default))]
    pub elevation: f64,
}

impl ReferenceParams {
    pub fn new(surface_model: SurfaceModel, latitude: f64, longitude: f64, heading: f64) -> ReferenceParams {
        Self {
            surface_model,
            latitude,
            longitude,
            heading,
            elevation: 0.,
        }
    }

    pub fn with_elevation(mut self, elevation: f64) -> ReferenceParams {
        self.elevation = elevation;
        self
    }

    /// Reads the parameters from a configuration document. The
    /// `surface_model`, `latitude_deg`, `longitude_deg` and `heading_deg`
    /// elements are required, `elevation` defaults to `0`.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingConfiguration`] if a required element is absent.
    /// * [`Error::InvalidConfiguration`] if a numeric element does not hold a finite number.
    /// * [`Error::UnknownSurfaceModel`] if the surface model is not registered.
    ///
    /// # Usage
    ///
    /// ```
    /// use spherecoord::{ReferenceParams, SurfaceModel};
    ///
    /// let doc = [
    ///     ("surface_model", "EARTH_WGS84"),
    ///     ("latitude_deg", "37.0"),
    ///     ("longitude_deg", "-122.0"),
    ///     ("heading_deg", "0"),
    /// ];
    ///
    /// let params = ReferenceParams::from_source(&doc).unwrap();
    /// assert_eq!(params.surface_model, SurfaceModel::EarthWgs84);
    /// assert_eq!(params.latitude, 37.0);
    /// assert_eq!(params.elevation, 0.0);
    ///
    /// let missing = [("surface_model", "EARTH_WGS84")];
    /// assert!(ReferenceParams::from_source(&missing).is_err());
    /// ```
    pub fn from_source<S>(source: &S) -> Result<ReferenceParams, Error>
    where
        S: ConfigSource + ?Sized,
    {
        let surface_model = required(source, element::SURFACE_MODEL)?.parse::<SurfaceModel>()?;
        let latitude = parse_number(element::LATITUDE, required(source, element::LATITUDE)?)?;
        let longitude = parse_number(element::LONGITUDE, required(source, element::LONGITUDE)?)?;
        let heading = parse_number(element::HEADING, required(source, element::HEADING)?)?;
        let elevation = source
            .value(element::ELEVATION)
            .map(|raw| parse_number(element::ELEVATION, raw))
            .transpose()?
            .unwrap_or(0.);

        Ok(ReferenceParams {
            surface_model,
            latitude,
            longitude,
            heading,
            elevation,
        })
    }
}

fn required<'a, S>(source: &'a S, key: &'static str) -> Result<&'a str, Error>
where
    S: ConfigSource + ?Sized,
{
    source.value(key).ok_or(Error::MissingConfiguration(key))
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, Error> {
    let value = raw.trim().parse::<f64>().map_err(|e| Error::InvalidConfiguration {
        field,
        msg: format!("{raw:?} is not a number ({e})"),
    })?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidConfiguration {
            field,
            msg: format!("{raw:?} is not finite"),
        })
    }
}
