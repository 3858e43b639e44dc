use std::fmt::Display;

use tracing::{debug, warn};

use crate::{
    config::{ConfigSource, ReferenceParams},
    constants::element,
    geodetic::Geodetic,
    local::LocalOffset,
    projections::tangent_plane::{RadiiOfCurvature, TangentPlane},
    utility::{dms, GeoMath},
    Error,
};

/// Lifecycle stage of a [`SphericalCoordinates`] frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// Freshly constructed, nothing loaded.
    Unconfigured,
    /// Reference loaded, radii not derived for it yet.
    Configured,
    /// Radii derived; conversions are available.
    Ready,
}

impl Display for FrameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FrameStatus::Unconfigured => "unconfigured",
            FrameStatus::Configured => "configured",
            FrameStatus::Ready => "ready",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Copy, Debug)]
enum FrameState {
    Unconfigured,
    Configured(ReferenceParams),
    Ready {
        reference: ReferenceParams,
        plane: TangentPlane,
    },
}

/// Reference frame anchoring a simulation's local Cartesian world on a
/// planetary surface model.
///
/// A frame is [`load`](Self::load)ed with its reference point,
/// [`init`](Self::init)ialized to derive the radii of curvature at that
/// point, and then queried with [`convert`](Self::convert). Loading a new
/// latitude or surface model requires another `init` before converting.
///
/// Conversions use a tangent-plane approximation: they are accurate for
/// offsets of a few kilometers and degrade over continental distances.
///
/// # Usage
///
/// ```
/// use spherecoord::{ReferenceParams, SphericalCoordinates, SurfaceModel};
///
/// let mut frame = SphericalCoordinates::new();
/// frame.load(ReferenceParams::new(SurfaceModel::EarthWgs84, 37.0, -122.0, 0.0)).unwrap();
/// frame.init().unwrap();
///
/// let origin = frame.convert([0.0, 0.0, 0.0]).unwrap();
/// assert_eq!(origin.latitude(), 37.0);
/// assert_eq!(origin.longitude(), -122.0);
/// assert_eq!(origin.altitude(), 0.0);
///
/// let north = frame.convert([0.0, 111_320.0, 0.0]).unwrap();
/// assert!((north.latitude() - 38.0).abs() < 0.01);
/// ```
#[derive(Clone, Debug)]
pub struct SphericalCoordinates {
    state: FrameState,
}

impl Default for SphericalCoordinates {
    fn default() -> Self {
        Self::new()
    }
}

impl SphericalCoordinates {
    /// Creates an unconfigured frame. Conversions fail until it is loaded
    /// and initialized.
    pub fn new() -> SphericalCoordinates {
        Self {
            state: FrameState::Unconfigured,
        }
    }

    /// Loads and initializes a frame in one step.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn with_reference(params: ReferenceParams) -> Result<SphericalCoordinates, Error> {
        let mut frame = Self::new();
        frame.load(params)?;
        frame.init()?;
        Ok(frame)
    }

    /// Stores a new reference point. Longitude is wrapped into `[-180, 180)`
    /// and heading into `[0, 360)`.
    ///
    /// A ready frame stays ready if the surface model and latitude are
    /// unchanged, since its radii still hold. Otherwise it falls back to
    /// [`FrameStatus::Configured`] and must be initialized again.
    ///
    /// # Errors
    ///
    /// * [`Error::OutOfRangeLatitude`] if latitude is outside `[-90, 90]`.
    /// * [`Error::InvalidConfiguration`] if longitude, heading or elevation is not finite.
    ///
    /// A failed load leaves the frame untouched.
    #[allow(clippy::float_cmp)]
    pub fn load(&mut self, params: ReferenceParams) -> Result<(), Error> {
        let qd = f64::from(dms::QD);
        if !(-qd..=qd).contains(&params.latitude) {
            return Err(Error::OutOfRangeLatitude(params.latitude));
        }
        for (field, value) in [
            (element::LONGITUDE, params.longitude),
            (element::HEADING, params.heading),
            (element::ELEVATION, params.elevation),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidConfiguration {
                    field,
                    msg: format!("{value} is not finite"),
                });
            }
        }

        let reference = ReferenceParams {
            longitude: params.longitude.lon_normalize(),
            heading: params.heading.heading_normalize(),
            ..params
        };

        debug!(
            surface_model = %reference.surface_model,
            latitude = reference.latitude,
            longitude = reference.longitude,
            heading = reference.heading,
            elevation = reference.elevation,
            "loaded spherical coordinates reference"
        );

        self.state = match self.state {
            FrameState::Ready { reference: previous, plane }
                if previous.surface_model == reference.surface_model
                    && previous.latitude == reference.latitude =>
            {
                FrameState::Ready {
                    reference,
                    plane: build_plane(&reference, plane.radii()),
                }
            }
            FrameState::Ready { .. } => {
                warn!("reference latitude or surface model changed, frame needs init before converting");
                FrameState::Configured(reference)
            }
            FrameState::Unconfigured | FrameState::Configured(_) => FrameState::Configured(reference),
        };

        Ok(())
    }

    /// Reads the reference point from a configuration document and loads it.
    ///
    /// # Errors
    ///
    /// Anything [`ReferenceParams::from_source`] or [`load`](Self::load)
    /// reports.
    ///
    /// # Usage
    ///
    /// ```
    /// use spherecoord::{FrameStatus, SphericalCoordinates};
    ///
    /// let doc = [
    ///     ("surface_model", "EARTH_WGS84"),
    ///     ("latitude_deg", "-33.86"),
    ///     ("longitude_deg", "151.21"),
    ///     ("heading_deg", "45"),
    /// ];
    ///
    /// let mut frame = SphericalCoordinates::new();
    /// frame.load_from(&doc).unwrap();
    /// assert_eq!(frame.status(), FrameStatus::Configured);
    /// ```
    pub fn load_from<S>(&mut self, source: &S) -> Result<(), Error>
    where
        S: ConfigSource + ?Sized,
    {
        let params = ReferenceParams::from_source(source)?;
        self.load(params)
    }

    /// Derives the radii of curvature for the loaded reference and makes the
    /// frame ready for conversions. Calling it on a ready frame recomputes
    /// the radii.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfiguration`] if nothing has been loaded.
    pub fn init(&mut self) -> Result<(), Error> {
        let reference = match self.state {
            FrameState::Unconfigured => {
                return Err(Error::MissingConfiguration("spherical_coordinates"));
            }
            FrameState::Configured(reference) | FrameState::Ready { reference, .. } => reference,
        };

        let radii = RadiiOfCurvature::at_latitude(reference.surface_model.radii(), reference.latitude);

        debug!(
            east = radii.east,
            north = radii.north,
            vertical = radii.vertical,
            "derived reference radii of curvature"
        );

        self.state = FrameState::Ready {
            reference,
            plane: build_plane(&reference, radii),
        };

        Ok(())
    }

    /// Converts an offset in the local world frame to a geodetic coordinate.
    ///
    /// # Errors
    ///
    /// * [`Error::NotInitialized`] unless the frame is [`FrameStatus::Ready`].
    /// * [`Error::SingularAtPole`] for an east-west offset at a polar reference.
    /// * [`Error::OutOfDomain`] if the offset is not finite or the latitude
    ///   would pass a pole.
    pub fn convert<T>(&self, xyz: T) -> Result<Geodetic, Error>
    where
        T: Into<LocalOffset>,
    {
        match &self.state {
            FrameState::Ready { plane, .. } => plane.to_geodetic(&xyz.into()),
            _ => Err(Error::NotInitialized(self.status())),
        }
    }

    /// Maps a geodetic coordinate back to an offset in the local world
    /// frame, using the same radii and heading as [`convert`](Self::convert).
    ///
    /// # Errors
    ///
    /// * [`Error::NotInitialized`] unless the frame is [`FrameStatus::Ready`].
    /// * [`Error::SingularAtPole`] for a longitude change at a polar reference.
    ///
    /// # Usage
    ///
    /// ```
    /// use spherecoord::{LocalOffset, ReferenceParams, SphericalCoordinates, SurfaceModel};
    ///
    /// let params = ReferenceParams::new(SurfaceModel::EarthWgs84, 47.4, 8.5, 30.0);
    /// let frame = SphericalCoordinates::with_reference(params).unwrap();
    ///
    /// let offset = LocalOffset::new(250.0, -400.0, 12.0);
    /// let coord = frame.convert(offset).unwrap();
    /// let back = frame.local_from_geodetic(&coord).unwrap();
    ///
    /// assert!((back.x - offset.x).abs() < 1e-6);
    /// assert!((back.y - offset.y).abs() < 1e-6);
    /// assert!((back.z - offset.z).abs() < 1e-9);
    /// ```
    pub fn local_from_geodetic(&self, coord: &Geodetic) -> Result<LocalOffset, Error> {
        match &self.state {
            FrameState::Ready { plane, .. } => plane.to_local(coord),
            _ => Err(Error::NotInitialized(self.status())),
        }
    }

    /// Returns the lifecycle stage of the frame.
    pub fn status(&self) -> FrameStatus {
        match self.state {
            FrameState::Unconfigured => FrameStatus::Unconfigured,
            FrameState::Configured(_) => FrameStatus::Configured,
            FrameState::Ready { .. } => FrameStatus::Ready,
        }
    }

    /// Returns `true` once conversions are available.
    pub fn is_ready(&self) -> bool {
        self.status() == FrameStatus::Ready
    }

    /// Returns the loaded reference point, with longitude and heading
    /// normalized. `None` until something has been loaded.
    pub fn reference(&self) -> Option<ReferenceParams> {
        match self.state {
            FrameState::Unconfigured => None,
            FrameState::Configured(reference) | FrameState::Ready { reference, .. } => Some(reference),
        }
    }

    /// Returns the radii of curvature at the reference latitude. `None`
    /// unless the frame is ready, so stale radii are never exposed.
    pub fn radii(&self) -> Option<RadiiOfCurvature> {
        match &self.state {
            FrameState::Ready { plane, .. } => Some(plane.radii()),
            _ => None,
        }
    }
}

fn build_plane(reference: &ReferenceParams, radii: RadiiOfCurvature) -> TangentPlane {
    TangentPlane::new(
        reference.latitude,
        reference.longitude,
        reference.heading,
        reference.elevation,
        radii,
    )
}
