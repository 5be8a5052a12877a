// Host-side tests for the geodetic projection and decal orientation.

use app_core::geo::{self, GeoCoordinate, DECAL_FORWARD};
use glam::Vec3;

#[test]
fn projected_points_sit_on_the_sphere() {
    let radius = 2.0;
    for lat in [-90.0, -60.0, -13.5, 0.0, 13.0, 45.0, 89.0, 90.0] {
        for lon in [-180.0, -101.0, -1.0, 0.0, 90.0, 101.0, 179.5, 180.0] {
            let coord = GeoCoordinate::new(lat, lon).unwrap();
            let sp = geo::project(coord, radius);
            let r = sp.position.length();
            assert!(
                (r - radius).abs() < 1e-4,
                "|position| = {r} for lat {lat}, lon {lon}"
            );
            assert!(
                (sp.outward.length() - 1.0).abs() < 1e-5,
                "outward not unit for lat {lat}, lon {lon}"
            );
        }
    }
}

#[test]
fn projection_is_deterministic() {
    let coord = GeoCoordinate::new(-33.87, 151.21).unwrap();
    let a = geo::project(coord, 2.0);
    let b = geo::project(coord, 2.0);
    assert_eq!(a, b, "identical inputs must project identically");
}

#[test]
fn poles_ignore_longitude() {
    let radius = 2.0;
    let north_a = geo::project(GeoCoordinate::new(90.0, 0.0).unwrap(), radius);
    let north_b = geo::project(GeoCoordinate::new(90.0, 135.0).unwrap(), radius);
    assert!((north_a.position - north_b.position).length() < 1e-5);
    assert!((north_a.position - Vec3::new(0.0, radius, 0.0)).length() < 1e-5);

    let south = geo::project(GeoCoordinate::new(-90.0, -77.0).unwrap(), radius);
    assert!((south.position - Vec3::new(0.0, -radius, 0.0)).length() < 1e-5);
}

#[test]
fn thailand_anchor_matches_known_position() {
    // lat 13N, lon 101E at marker altitude, worked out by hand.
    let coord = GeoCoordinate::new(13.0, 101.0).unwrap();
    let sp = geo::project(coord, 2.02);
    let expected = Vec3::new(1.932066, 0.454401, 0.375556);
    assert!(
        (sp.position - expected).length() < 1e-4,
        "got {:?}, expected {expected:?}",
        sp.position
    );
    // Positive x and z: in front of the default camera quadrant-wise, and
    // north of the equator.
    assert!(sp.position.y > 0.0);
}

#[test]
fn orientation_carries_forward_onto_outward() {
    for lat in [-80.0, -30.0, 0.0, 13.0, 60.0] {
        for lon in [-150.0, -90.0, 0.0, 101.0, 170.0] {
            let coord = GeoCoordinate::new(lat, lon).unwrap();
            let sp = geo::project(coord, 1.0);
            let q = geo::orientation(sp.outward);
            let rotated = q * DECAL_FORWARD;
            assert!(
                (rotated - sp.outward).length() < 1e-5,
                "forward not carried onto outward at lat {lat}, lon {lon}"
            );
        }
    }
}

#[test]
fn antipodal_outward_still_yields_a_unit_rotation() {
    let outward = -DECAL_FORWARD;
    let q = geo::orientation(outward);
    assert!(q.is_normalized(), "antipodal rotation must stay unit length");
    assert!(!q.x.is_nan() && !q.y.is_nan() && !q.z.is_nan() && !q.w.is_nan());
    let rotated = q * DECAL_FORWARD;
    assert!((rotated - outward).length() < 1e-5);
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    assert!(GeoCoordinate::new(90.1, 0.0).is_err());
    assert!(GeoCoordinate::new(-90.1, 0.0).is_err());
    assert!(GeoCoordinate::new(0.0, 180.1).is_err());
    assert!(GeoCoordinate::new(0.0, -180.1).is_err());
    assert!(GeoCoordinate::new(f32::NAN, 0.0).is_err());
    assert!(GeoCoordinate::new(0.0, f32::NAN).is_err());
}

#[test]
fn placement_combines_projection_and_orientation() {
    let coord = GeoCoordinate::new(13.0, 101.0).unwrap();
    let placement = geo::place(coord, 2.02);
    let sp = geo::project(coord, 2.02);
    assert!((placement.position - sp.position).length() < 1e-6);
    let rotated = placement.rotation * DECAL_FORWARD;
    assert!((rotated - sp.outward).length() < 1e-5);
}
