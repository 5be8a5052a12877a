// Host-side tests for the generated globe mesh.

use app_core::mesh::uv_sphere;

#[test]
fn vertex_and_index_counts_match_the_grid() {
    let mesh = uv_sphere(2.0, 16, 24);
    assert_eq!(mesh.vertices.len(), (16 + 1) * (24 + 1));
    assert_eq!(mesh.indices.len(), 16 * 24 * 6);
}

#[test]
fn vertices_lie_on_the_sphere_with_outward_normals() {
    let radius = 2.0;
    let mesh = uv_sphere(radius, 8, 12);
    for v in &mesh.vertices {
        let pos = glam::Vec3::from(v.pos);
        let normal = glam::Vec3::from(v.normal);
        assert!(
            (pos.length() - radius).abs() < 1e-4,
            "vertex off sphere: {pos:?}"
        );
        assert!((normal.length() - 1.0).abs() < 1e-5);
        assert!(
            (pos / radius - normal).length() < 1e-5,
            "normal not radial at {pos:?}"
        );
    }
}

#[test]
fn uv_coordinates_cover_the_unit_square() {
    let mesh = uv_sphere(1.0, 6, 8);
    for v in &mesh.vertices {
        assert!((0.0..=1.0).contains(&v.uv[0]), "u out of range: {}", v.uv[0]);
        assert!((0.0..=1.0).contains(&v.uv[1]), "v out of range: {}", v.uv[1]);
    }
    // First ring is the north pole, last ring the south pole.
    assert_eq!(mesh.vertices.first().unwrap().uv[1], 0.0);
    assert_eq!(mesh.vertices.last().unwrap().uv[1], 1.0);
}

#[test]
fn indices_stay_in_bounds() {
    let mesh = uv_sphere(1.0, 5, 7);
    let n = mesh.vertices.len() as u32;
    for &i in &mesh.indices {
        assert!(i < n, "index {i} out of {n} vertices");
    }
}

#[test]
fn triangles_face_outward() {
    // Back-face culling relies on every non-degenerate triangle being
    // counter-clockwise when seen from outside the sphere.
    let mesh = uv_sphere(1.0, 8, 12);
    for tri in mesh.indices.chunks_exact(3) {
        let v0 = glam::Vec3::from(mesh.vertices[tri[0] as usize].pos);
        let v1 = glam::Vec3::from(mesh.vertices[tri[1] as usize].pos);
        let v2 = glam::Vec3::from(mesh.vertices[tri[2] as usize].pos);
        let face = (v1 - v0).cross(v2 - v0);
        if face.length() < 1e-8 {
            continue; // pole cap slivers collapse to a line
        }
        let centroid = (v0 + v1 + v2) / 3.0;
        assert!(
            face.dot(centroid) > 0.0,
            "inward-facing triangle at {centroid:?}"
        );
    }
}

#[test]
fn degenerate_segment_counts_are_clamped() {
    // Anything below 3 segments per axis degenerates, so it is raised.
    let mesh = uv_sphere(1.0, 0, 1);
    assert_eq!(mesh.vertices.len(), 4 * 4);
    assert_eq!(mesh.indices.len(), 3 * 3 * 6);
}
