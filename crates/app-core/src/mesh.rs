//! CPU-side mesh for the globe sphere.

use bytemuck::{Pod, Zeroable};

/// Vertex layout shared with the globe render pipelines.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SphereVertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Debug, Clone)]
pub struct SphereMesh {
    pub vertices: Vec<SphereVertex>,
    pub indices: Vec<u32>,
}

/// Generate a UV sphere centered at the origin.
///
/// `stacks` are latitude segments, `slices` longitude segments (both
/// clamped to at least 3). Texture coordinates run `u` around `+Y` from
/// the `+X` seam and `v` from the north pole down, matching the
/// longitude convention used by [`geo::project`](crate::geo::project).
pub fn uv_sphere(radius: f32, stacks: u32, slices: u32) -> SphereMesh {
    let stacks = stacks.max(3);
    let slices = slices.max(3);
    let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
    let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);

    for i in 0..=stacks {
        let v = i as f32 / stacks as f32;
        let theta = v * std::f32::consts::PI;
        let sin_t = theta.sin();
        let cos_t = theta.cos();
        for j in 0..=slices {
            let u = j as f32 / slices as f32;
            let phi = u * std::f32::consts::TAU;
            let nx = sin_t * phi.cos();
            let ny = cos_t;
            let nz = sin_t * phi.sin();
            vertices.push(SphereVertex {
                pos: [radius * nx, radius * ny, radius * nz],
                normal: [nx, ny, nz],
                uv: [u, v],
            });
        }
    }

    // Wound counter-clockwise seen from outside, so the render pipelines
    // can cull back faces.
    let stride = slices + 1;
    for i in 0..stacks {
        for j in 0..slices {
            let a = i * stride + j;
            let b = a + 1;
            let c = a + stride;
            let d = c + 1;
            indices.extend_from_slice(&[a, b, c]);
            indices.extend_from_slice(&[b, d, c]);
        }
    }

    SphereMesh { vertices, indices }
}
