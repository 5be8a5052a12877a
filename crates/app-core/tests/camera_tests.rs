// Host-side tests for the orbit camera.

use app_core::camera::OrbitCamera;
use app_core::constants::{CAMERA_DISTANCE, MAX_CAMERA_DISTANCE, MIN_CAMERA_DISTANCE};
use app_core::interaction::ray_sphere;
use glam::Vec3;

#[test]
fn default_pose_looks_from_positive_z() {
    let cam = OrbitCamera::default();
    let eye = cam.eye();
    assert!(
        (eye - Vec3::new(0.0, 0.0, CAMERA_DISTANCE)).length() < 1e-5,
        "default eye at {eye:?}"
    );
}

#[test]
fn zoom_clamps_to_the_distance_range() {
    let mut cam = OrbitCamera::default();
    cam.zoom(1e5);
    assert!((cam.distance - MAX_CAMERA_DISTANCE).abs() < 1e-5);
    cam.zoom(-1e5);
    assert!((cam.distance - MIN_CAMERA_DISTANCE).abs() < 1e-5);
}

#[test]
fn zoom_steps_compose_exponentially() {
    let mut stepped = OrbitCamera::default();
    stepped.zoom(100.0);
    stepped.zoom(100.0);
    let mut single = OrbitCamera::default();
    single.zoom(200.0);
    assert!(
        (stepped.distance - single.distance).abs() < 1e-3,
        "two half steps {} vs one full step {}",
        stepped.distance,
        single.distance
    );
}

#[test]
fn pitch_clamps_short_of_the_poles() {
    let mut cam = OrbitCamera::default();
    cam.rotate(0.0, -1e5);
    assert!(cam.pitch < std::f32::consts::FRAC_PI_2);
    assert!(cam.pitch > 1.5, "expected pitch near the limit, got {}", cam.pitch);
    cam.rotate(0.0, 2e5);
    assert!(cam.pitch > -std::f32::consts::FRAC_PI_2);
    let eye = cam.eye();
    assert!(eye.is_finite(), "eye degenerate at pitch limit: {eye:?}");
}

#[test]
fn rotating_preserves_the_orbit_distance() {
    let mut cam = OrbitCamera::default();
    for (dx, dy) in [(35.0, -12.0), (-400.0, 90.0), (7.5, 7.5)] {
        cam.rotate(dx, dy);
        assert!((cam.eye().length() - cam.distance).abs() < 1e-4);
    }
}

#[test]
fn center_ray_points_at_the_globe() {
    let cam = OrbitCamera::default();
    let (ro, rd) = cam.screen_ray(800.0, 600.0, 400.0, 300.0);
    assert!((ro - cam.eye()).length() < 1e-5);
    assert!((rd.length() - 1.0).abs() < 1e-5);
    // Straight through the viewport center means straight at the origin.
    let toward_origin = (-cam.eye()).normalize();
    assert!(rd.dot(toward_origin) > 0.999, "center ray {rd:?}");
    assert!(
        ray_sphere(ro, rd, Vec3::ZERO, 2.0).is_some(),
        "center ray should hit the globe"
    );
}

#[test]
fn corner_ray_diverges_from_the_axis() {
    let cam = OrbitCamera::default();
    let (_, center) = cam.screen_ray(800.0, 600.0, 400.0, 300.0);
    let (_, corner) = cam.screen_ray(800.0, 600.0, 0.0, 0.0);
    assert!(corner.dot(center) < 0.999);
    // Top-left of the screen is up and to the left in world space.
    assert!(corner.y > center.y);
}
