use std::{collections::HashMap, fmt::Display, str::FromStr};

use lazy_static::lazy_static;

use crate::{constants::{WGS84_A, WGS84_B}, Error};

/// Equatorial and polar radii of a reference ellipsoid, in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipsoidRadii {
    pub equatorial: f64,
    pub polar: f64,
}

impl EllipsoidRadii {
    /// First eccentricity squared, `e² = 1 - (b/a)²`
    pub fn eccentricity_squared(&self) -> f64 {
        1. - (self.polar / self.equatorial).powi(2)
    }
}

/// Identifiers for the planetary surface models a frame can be anchored on.
///
/// The discriminant is the numeric id used by configuration documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum SurfaceModel {
    /// Reference ellipsoid for Earth from the WGS 84 standard.
    #[cfg_attr(feature = "serde", serde(rename = "EARTH_WGS84"))]
    EarthWgs84 = 1,
}

struct Entry {
    model: SurfaceModel,
    name: &'static str,
    radii: EllipsoidRadii,
}

static REGISTRY: [Entry; 1] = [
    Entry {
        model: SurfaceModel::EarthWgs84,
        name: "EARTH_WGS84",
        radii: EllipsoidRadii { equatorial: WGS84_A, polar: WGS84_B },
    },
];

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, SurfaceModel> = REGISTRY
        .iter()
        .map(|entry| (entry.name, entry.model))
        .collect();
}

impl SurfaceModel {
    fn entry(self) -> &'static Entry {
        match self {
            SurfaceModel::EarthWgs84 => &REGISTRY[0],
        }
    }

    /// Looks up a surface model by its numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSurfaceModel`] if no model has that id.
    ///
    /// # Usage
    ///
    /// ```
    /// use spherecoord::SurfaceModel;
    ///
    /// assert_eq!(SurfaceModel::from_id(1).unwrap(), SurfaceModel::EarthWgs84);
    /// assert!(SurfaceModel::from_id(7).is_err());
    /// ```
    pub fn from_id(id: i32) -> Result<SurfaceModel, Error> {
        REGISTRY
            .iter()
            .find(|entry| entry.model.id() == id)
            .map(|entry| entry.model)
            .ok_or_else(|| Error::UnknownSurfaceModel(id.to_string()))
    }

    /// Numeric id of the model.
    pub fn id(self) -> i32 {
        self as i32
    }

    /// Canonical name, as written in configuration documents.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Equatorial and polar radii of the model.
    ///
    /// ```
    /// use spherecoord::SurfaceModel;
    ///
    /// let radii = SurfaceModel::EarthWgs84.radii();
    /// assert_eq!(radii.equatorial, 6378137.0);
    /// assert_eq!(radii.polar, 6356752.314245);
    /// ```
    pub fn radii(self) -> EllipsoidRadii {
        self.entry().radii
    }
}

impl FromStr for SurfaceModel {
    type Err = Error;

    /// Accepts the canonical name or the numeric id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(model) = BY_NAME.get(s) {
            return Ok(*model);
        }

        match s.parse::<i32>() {
            Ok(id) => SurfaceModel::from_id(id),
            Err(_) => Err(Error::UnknownSurfaceModel(s.to_string())),
        }
    }
}

impl Display for SurfaceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
