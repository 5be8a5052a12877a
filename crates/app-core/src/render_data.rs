//! GPU-facing uniform and instance layouts, assembled from scene state.
//!
//! Both frontends upload these verbatim, so the `repr(C)` layouts here
//! must stay in sync with the structs declared in `shaders/`.

use crate::scene::{GlobeScene, Marker};
use glam::{Mat4, Vec3};
use smallvec::SmallVec;

/// Upper bound on decal quads per marker (glow plus stripes).
pub const FLAG_INSTANCE_CAPACITY: usize = 8;

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobeUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub eye: [f32; 4],
    /// x: ambient intensity, rest padding.
    pub ambient: [f32; 4],
    /// xyz: unit direction toward the light, w: intensity.
    pub dir_lights: [[f32; 4]; 2],
    /// xyz: world position, w: intensity.
    pub point_lights: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FlagUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
}

/// One decal quad in marker-local space.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FlagInstance {
    pub offset: [f32; 3],
    pub size: [f32; 2],
    pub color: [f32; 4],
}

pub fn globe_uniforms(scene: &GlobeScene, view_proj: Mat4, eye: Vec3) -> GlobeUniforms {
    let lights = scene.lights();
    let mut dir_lights = [[0.0; 4]; 2];
    for (slot, light) in lights.directional.iter().enumerate() {
        let dir = Vec3::from(light.position).normalize();
        dir_lights[slot] = [dir.x, dir.y, dir.z, light.intensity];
    }
    let mut point_lights = [[0.0; 4]; 4];
    for (slot, light) in lights.points.iter().enumerate() {
        point_lights[slot] = [
            light.position[0],
            light.position[1],
            light.position[2],
            light.intensity,
        ];
    }
    GlobeUniforms {
        view_proj: view_proj.to_cols_array_2d(),
        model: Mat4::from_quat(scene.sphere_rotation()).to_cols_array_2d(),
        eye: [eye.x, eye.y, eye.z, 1.0],
        ambient: [lights.ambient_intensity, 0.0, 0.0, 0.0],
        dir_lights,
        point_lights,
    }
}

pub fn flag_uniforms(marker: &Marker, view_proj: Mat4) -> FlagUniforms {
    let model =
        Mat4::from_rotation_translation(marker.placement.rotation, marker.placement.position);
    FlagUniforms {
        view_proj: view_proj.to_cols_array_2d(),
        model: model.to_cols_array_2d(),
    }
}

/// Build the decal quads for one marker, back to front.
///
/// The glow plane comes first when visible so the alpha-blended stripes
/// draw over it; stripes carry the hover-driven opacity.
pub fn flag_instances(scene: &GlobeScene, marker: usize) -> SmallVec<[FlagInstance; 8]> {
    let mut out = SmallVec::new();
    let Some(m) = scene.markers().get(marker) else {
        return out;
    };
    let spec = m.flag;
    if scene.glow_visible(marker) {
        let [r, g, b] = spec.glow.color;
        out.push(FlagInstance {
            offset: [0.0, spec.glow.offset_y, 0.0],
            size: spec.glow.size,
            color: [r, g, b, spec.glow.alpha],
        });
    }
    let alpha = scene.marker_opacity(marker);
    for stripe in spec.stripes {
        let [r, g, b] = stripe.color;
        out.push(FlagInstance {
            offset: [0.0, stripe.offset_y, spec.stripe_lift],
            size: spec.stripe_size,
            color: [r, g, b, alpha],
        });
    }
    out
}
