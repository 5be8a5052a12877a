//! Scene state for the landing globe.
//!
//! [`GlobeScene`] owns the slowly spinning sphere, the placed flag markers
//! and the light rig. It is advanced by [`GlobeScene::tick`] with real
//! elapsed time, so the spin speed does not depend on the frame rate.

use crate::constants::{
    MARKER_OPACITY_HOVER, MARKER_OPACITY_IDLE, MARKER_PICK_RADIUS, SPIN_RATE_RAD_PER_SEC,
};
use crate::content::{FlagSpec, GlobeConfig};
use crate::geo::{self, GeoCoordinate, InvalidCoordinate, Placement};
use crate::routes::Route;
use glam::Quat;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    /// Position the light shines from, toward the origin.
    pub position: [f32; 3],
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub position: [f32; 3],
    pub intensity: f32,
}

/// The fixed light rig around the globe.
#[derive(Debug, Clone, Copy)]
pub struct LightRig {
    pub ambient_intensity: f32,
    pub directional: [DirectionalLight; 2],
    pub points: [PointLight; 4],
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient_intensity: 2.5,
            directional: [
                DirectionalLight { position: [5.0, 5.0, 5.0], intensity: 2.0 },
                DirectionalLight { position: [-5.0, -5.0, -5.0], intensity: 1.5 },
            ],
            points: [
                PointLight { position: [10.0, 10.0, 10.0], intensity: 2.0 },
                PointLight { position: [-10.0, -10.0, -10.0], intensity: 1.5 },
                PointLight { position: [0.0, 10.0, 0.0], intensity: 1.5 },
                PointLight { position: [0.0, -10.0, 0.0], intensity: 1.0 },
            ],
        }
    }
}

/// A flag marker placed on the globe.
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    pub placement: Placement,
    pub route: Route,
    pub flag: &'static FlagSpec,
    pub highlight_on_globe_hover: bool,
    pub pick_radius: f32,
    highlighted: bool,
}

impl Marker {
    #[inline]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

pub struct GlobeScene {
    markers: Vec<Marker>,
    lights: LightRig,
    sphere_radius: f32,
    sphere_route: Route,
    rotation_angle: f32,
    detached: bool,
}

impl GlobeScene {
    /// Build the scene, projecting every marker once.
    ///
    /// Marker placements are computed here and never again; per-frame code
    /// only reads them. A coordinate outside the valid domain fails the
    /// whole build.
    pub fn new(config: &GlobeConfig) -> Result<Self, InvalidCoordinate> {
        let mut markers = Vec::with_capacity(config.markers.len());
        for m in &config.markers {
            let coord = GeoCoordinate::new(m.lat_deg, m.lon_deg)?;
            markers.push(Marker {
                placement: geo::place(coord, m.altitude),
                route: m.route,
                flag: m.flag,
                highlight_on_globe_hover: m.highlight_on_globe_hover,
                pick_radius: MARKER_PICK_RADIUS,
                highlighted: false,
            });
        }
        log::info!(
            "[scene] built globe r={} with {} marker(s)",
            config.sphere_radius,
            markers.len()
        );
        Ok(Self {
            markers,
            lights: LightRig::default(),
            sphere_radius: config.sphere_radius,
            sphere_route: config.sphere_route,
            rotation_angle: 0.0,
            detached: false,
        })
    }

    /// Advance the spin by elapsed wall time. No-op once detached.
    pub fn tick(&mut self, dt: Duration) {
        if self.detached {
            return;
        }
        self.rotation_angle = (self.rotation_angle + SPIN_RATE_RAD_PER_SEC * dt.as_secs_f32())
            .rem_euclid(std::f32::consts::TAU);
    }

    /// Stop advancing this scene; used when the globe page is torn down so
    /// a stale animation subscription cannot keep mutating it.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    #[inline]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Accumulated spin around `+Y`, always in `[0, 2*pi)`.
    #[inline]
    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    #[inline]
    pub fn sphere_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.rotation_angle)
    }

    #[inline]
    pub fn sphere_radius(&self) -> f32 {
        self.sphere_radius
    }

    #[inline]
    pub fn sphere_route(&self) -> Route {
        self.sphere_route
    }

    #[inline]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[inline]
    pub fn lights(&self) -> &LightRig {
        &self.lights
    }

    /// Set a marker's cosmetic highlight. Idempotent; out-of-range indices
    /// are ignored.
    pub fn set_highlight(&mut self, marker: usize, on: bool) {
        if let Some(m) = self.markers.get_mut(marker) {
            m.highlighted = on;
        }
    }

    /// Hovering the bare globe highlights every marker that opted in.
    pub fn set_globe_hover(&mut self, on: bool) {
        for m in &mut self.markers {
            if m.highlight_on_globe_hover {
                m.highlighted = on;
            }
        }
    }

    pub fn is_highlighted(&self, marker: usize) -> bool {
        self.markers.get(marker).is_some_and(|m| m.highlighted)
    }

    /// Stripe opacity for a marker, raised to full when highlighted.
    pub fn marker_opacity(&self, marker: usize) -> f32 {
        if self.is_highlighted(marker) {
            MARKER_OPACITY_HOVER
        } else {
            MARKER_OPACITY_IDLE
        }
    }

    /// The gold glow plane renders only while highlighted.
    #[inline]
    pub fn glow_visible(&self, marker: usize) -> bool {
        self.is_highlighted(marker)
    }
}
