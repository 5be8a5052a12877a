//! Geodetic projection from latitude/longitude onto the globe surface.
//!
//! All positions are in world space with the globe centered at the origin,
//! `+Y` through the north pole. Longitudes are shifted by
//! [`TEXTURE_LON_OFFSET_DEG`](crate::constants::TEXTURE_LON_OFFSET_DEG) so
//! surface anchors line up with the land layout drawn by the globe shader.

use crate::constants::TEXTURE_LON_OFFSET_DEG;
use glam::{Quat, Vec3};
use thiserror::Error;

/// Decal quads face `+Z` in local space before being oriented outward.
pub const DECAL_FORWARD: Vec3 = Vec3::Z;

// Below this dot product an outward vector is treated as anti-parallel to
// DECAL_FORWARD and rotated by an explicit half-turn instead of the
// shortest-arc construction, which is degenerate there.
const ANTIPODAL_DOT_EPSILON: f32 = 1e-6;

/// Raised when a latitude/longitude pair is outside the valid domain.
///
/// Surfaced at construction time so a bad catalog entry fails the scene
/// build rather than producing NaN positions at render time.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("coordinate out of range: lat {lat_deg} deg, lon {lon_deg} deg")]
pub struct InvalidCoordinate {
    pub lat_deg: f32,
    pub lon_deg: f32,
}

/// A validated geodetic coordinate in degrees.
///
/// Latitude is restricted to `[-90, 90]` and longitude to `[-180, 180]`.
/// NaN is rejected by the range checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    lat_deg: f32,
    lon_deg: f32,
}

impl GeoCoordinate {
    pub fn new(lat_deg: f32, lon_deg: f32) -> Result<Self, InvalidCoordinate> {
        let lat_ok = lat_deg >= -90.0 && lat_deg <= 90.0;
        let lon_ok = lon_deg >= -180.0 && lon_deg <= 180.0;
        if lat_ok && lon_ok {
            Ok(Self { lat_deg, lon_deg })
        } else {
            Err(InvalidCoordinate { lat_deg, lon_deg })
        }
    }

    #[inline]
    pub fn lat_deg(&self) -> f32 {
        self.lat_deg
    }

    #[inline]
    pub fn lon_deg(&self) -> f32 {
        self.lon_deg
    }
}

/// A point on (or above) the globe surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub position: Vec3,
    /// Unit normal pointing away from the globe center.
    pub outward: Vec3,
}

/// Position plus the rotation that orients a decal tangent to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Quat,
}

/// Project a coordinate onto a sphere of the given radius.
///
/// Uses the polar-angle form: `phi` measured from the north pole, `theta`
/// around `+Y` with the texture longitude offset applied. The returned
/// position always satisfies `|position| == radius` and `outward` is its
/// unit direction.
pub fn project(coord: GeoCoordinate, radius: f32) -> SurfacePoint {
    debug_assert!(radius > 0.0);
    let phi = (90.0 - coord.lat_deg()).to_radians();
    let theta = (coord.lon_deg() - TEXTURE_LON_OFFSET_DEG).to_radians();
    let position = Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    );
    SurfacePoint {
        position,
        outward: position.normalize(),
    }
}

/// Shortest-arc rotation carrying [`DECAL_FORWARD`] onto `outward`.
///
/// `outward` must be a unit vector. The anti-parallel case (a point on the
/// far side of the globe, directly opposite the camera axis) has no unique
/// shortest arc; it is resolved as a half-turn about a fixed orthonormal
/// axis so the result is deterministic instead of NaN.
pub fn orientation(outward: Vec3) -> Quat {
    debug_assert!(outward.is_normalized());
    if DECAL_FORWARD.dot(outward) <= -1.0 + ANTIPODAL_DOT_EPSILON {
        let axis = DECAL_FORWARD.any_orthonormal_vector();
        return Quat::from_axis_angle(axis, std::f32::consts::PI);
    }
    Quat::from_rotation_arc(DECAL_FORWARD, outward)
}

/// Project and orient in one step.
#[inline]
pub fn place(coord: GeoCoordinate, radius: f32) -> Placement {
    let sp = project(coord, radius);
    Placement {
        position: sp.position,
        rotation: orientation(sp.outward),
    }
}
