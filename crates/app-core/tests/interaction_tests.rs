// Host-side tests for ray picking, hover transitions and click dispatch.

use app_core::content::globe_config;
use app_core::interaction::{pick_scene, ray_sphere, InteractionRouter, PickTarget};
use app_core::routes::{Navigator, Route};
use app_core::scene::GlobeScene;
use glam::Vec3;

#[derive(Default)]
struct CountingNav {
    calls: usize,
    last: Option<Route>,
}

impl Navigator for CountingNav {
    fn navigate_to(&mut self, route: Route) {
        self.calls += 1;
        self.last = Some(route);
    }
}

fn make_scene() -> GlobeScene {
    GlobeScene::new(&globe_config()).unwrap()
}

#[test]
fn ray_sphere_hits_head_on() {
    let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0), Vec3::ZERO, 2.0);
    let t = t.expect("head-on ray must hit");
    assert!((t - 3.0).abs() < 1e-5, "entry distance {t}");
}

#[test]
fn ray_sphere_misses_sideways() {
    let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, 2.0);
    assert!(t.is_none());
}

#[test]
fn sphere_behind_the_origin_is_ignored() {
    let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO, 2.0);
    assert!(t.is_none(), "hits behind the ray origin must not count");
}

#[test]
fn grazing_ray_reports_the_tangent_point() {
    let t = ray_sphere(Vec3::new(2.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0), Vec3::ZERO, 2.0);
    let t = t.expect("tangent ray should still hit");
    assert!((t - 5.0).abs() < 1e-4);
}

#[test]
fn marker_sorts_in_front_of_the_globe() {
    let scene = make_scene();
    let marker_pos = scene.markers()[0].placement.position;
    let outward = marker_pos.normalize();
    // Look straight down onto the flag from outside.
    let ro = outward * 5.0;
    let rd = -outward;
    let hits = pick_scene(&scene, ro, rd);
    assert_eq!(hits.as_slice(), &[PickTarget::Marker(0), PickTarget::Sphere]);
}

#[test]
fn ray_past_the_globe_hits_nothing() {
    let scene = make_scene();
    let hits = pick_scene(&scene, Vec3::new(0.0, 10.0, 5.0), Vec3::new(0.0, 1.0, 0.0));
    assert!(hits.is_empty());
}

#[test]
fn hover_transitions_toggle_highlights() {
    let mut scene = make_scene();
    let mut router = InteractionRouter::new();

    router.update_hover(&mut scene, Some(PickTarget::Marker(0)));
    assert!(scene.is_highlighted(0));
    assert_eq!(router.hovered(), Some(PickTarget::Marker(0)));

    router.update_hover(&mut scene, None);
    assert!(!scene.is_highlighted(0));
    assert_eq!(router.hovered(), None);
}

#[test]
fn globe_hover_also_lights_the_flag() {
    // The flag opts into globe hover, so pointing anywhere on the sphere
    // highlights it, and moving onto the flag itself keeps it lit.
    let mut scene = make_scene();
    let mut router = InteractionRouter::new();

    router.update_hover(&mut scene, Some(PickTarget::Sphere));
    assert!(scene.is_highlighted(0));

    router.update_hover(&mut scene, Some(PickTarget::Marker(0)));
    assert!(scene.is_highlighted(0));

    router.update_hover(&mut scene, None);
    assert!(!scene.is_highlighted(0));
}

#[test]
fn repeated_hover_updates_are_stable() {
    let mut scene = make_scene();
    let mut router = InteractionRouter::new();
    for _ in 0..3 {
        router.update_hover(&mut scene, Some(PickTarget::Marker(0)));
        assert!(scene.is_highlighted(0));
    }
}

#[test]
fn click_consumes_only_the_front_hit() {
    let scene = make_scene();
    let router = InteractionRouter::new();
    let mut nav = CountingNav::default();

    let hits = [PickTarget::Marker(0), PickTarget::Sphere];
    let route = router.dispatch_click(&scene, &hits, &mut nav);

    assert_eq!(route, Some(Route::Thailand));
    assert_eq!(nav.calls, 1, "stacked hits must not double-navigate");
    assert_eq!(nav.last, Some(Route::Thailand));
}

#[test]
fn click_on_the_bare_globe_routes_too() {
    let scene = make_scene();
    let router = InteractionRouter::new();
    let mut nav = CountingNav::default();

    let route = router.dispatch_click(&scene, &[PickTarget::Sphere], &mut nav);
    assert_eq!(route, Some(scene.sphere_route()));
    assert_eq!(nav.calls, 1);
}

#[test]
fn click_with_no_hits_goes_nowhere() {
    let scene = make_scene();
    let router = InteractionRouter::new();
    let mut nav = CountingNav::default();

    assert_eq!(router.dispatch_click(&scene, &[], &mut nav), None);
    assert_eq!(nav.calls, 0);
}
