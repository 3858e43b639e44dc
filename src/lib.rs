//! Conversion between a simulation's local Cartesian world frame and
//! geodetic coordinates on a reference ellipsoid.
//!
//! A [`SphericalCoordinates`] frame is anchored at a reference latitude,
//! longitude and heading on a [`SurfaceModel`], and converts local offsets
//! (meters) into [`Geodetic`] latitude/longitude/altitude.

#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod config;
pub mod geodetic;
pub mod local;
pub mod spherical;
pub mod surface_model;
pub(crate) mod utility;

pub use config::{ConfigSource, ReferenceParams};
pub use geodetic::Geodetic;
pub use local::LocalOffset;
pub use projections::tangent_plane::RadiiOfCurvature;
pub use spherical::{FrameStatus, SphericalCoordinates};
pub use surface_model::{EllipsoidRadii, SurfaceModel};

pub(crate) mod projections {
    pub mod tangent_plane;
}

pub(crate) mod constants;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown surface model: {0}")]
    UnknownSurfaceModel(String),
    #[error("Latitude {0} outside of valid range [-90, 90]")]
    OutOfRangeLatitude(f64),
    #[error("Invalid value for <{field}>: {msg}")]
    InvalidConfiguration {
        field: &'static str,
        msg: String,
    },
    #[error("Missing required element <{0}>")]
    MissingConfiguration(&'static str),
    #[error("Spherical coordinates frame is {0}, call init() before converting")]
    NotInitialized(FrameStatus),
    #[error("Longitude undefined at a polar reference (east offset {0})")]
    SingularAtPole(f64),
    #[error("Result outside the geodetic domain: {0}")]
    OutOfDomain(String),
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
    fn ternary_lazy<F, E, T>(&self, r#true: F, r#false: E) -> T
    where
        F: Fn() -> T,
        E: Fn() -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }

    fn ternary_lazy<F, E, T>(&self, r#true: F, r#false: E) -> T
    where
        F: Fn() -> T,
        E: Fn() -> T,
    {
        if *self { r#true() } else { r#false() }
    }
}
