// Semi-major (equatorial) axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// Semi-minor (polar) axis b
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_B: f64 = 6_356_752.314245;

// Below this |cos(lat)| a reference latitude is treated as a pole
pub(crate) const POLE_COS_EPS: f64 = 1e-12;

// East components smaller than this fraction of the offset are rotation noise
pub(crate) const ROTATION_REL_EPS: f64 = 1e-12;

// SDF element names of <spherical_coordinates>
pub(crate) mod element {
    pub const SURFACE_MODEL: &str = "surface_model";
    pub const LATITUDE: &str = "latitude_deg";
    pub const LONGITUDE: &str = "longitude_deg";
    pub const HEADING: &str = "heading_deg";
    pub const ELEVATION: &str = "elevation";
}
