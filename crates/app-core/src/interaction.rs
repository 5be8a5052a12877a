//! Pointer interaction over the globe scene: picking, hover transitions
//! and click dispatch.

use crate::routes::{Navigator, Route};
use crate::scene::GlobeScene;
use glam::Vec3;
use smallvec::SmallVec;

/// Something the pointer can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    Sphere,
    /// Index into [`GlobeScene::markers`].
    Marker(usize),
}

/// Pick results ordered front to back along the ray.
pub type PickHits = SmallVec<[PickTarget; 4]>;

/// Nearest intersection of a ray with a sphere, if any in front of the
/// origin.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Cast a ray against the globe and every marker pick sphere.
///
/// Markers float above the surface, so when the pointer is over a flag the
/// flag hit sorts in front of the globe hit behind it.
pub fn pick_scene(scene: &GlobeScene, ray_origin: Vec3, ray_dir: Vec3) -> PickHits {
    let mut hits: SmallVec<[(f32, PickTarget); 4]> = SmallVec::new();
    if let Some(t) = ray_sphere(ray_origin, ray_dir, Vec3::ZERO, scene.sphere_radius()) {
        hits.push((t, PickTarget::Sphere));
    }
    for (i, m) in scene.markers().iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, m.placement.position, m.pick_radius) {
            hits.push((t, PickTarget::Marker(i)));
        }
    }
    hits.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    hits.into_iter().map(|(_, target)| target).collect()
}

/// Routes pointer events to scene highlights and navigation.
#[derive(Default)]
pub struct InteractionRouter {
    hovered: Option<PickTarget>,
}

impl InteractionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn hovered(&self) -> Option<PickTarget> {
        self.hovered
    }

    /// Reconcile the hover state with this frame's front-most hit,
    /// emitting leave/enter transitions as needed.
    pub fn update_hover(&mut self, scene: &mut GlobeScene, target: Option<PickTarget>) {
        if target == self.hovered {
            return;
        }
        if let Some(prev) = self.hovered.take() {
            apply_highlight(scene, prev, false);
        }
        if let Some(t) = target {
            apply_highlight(scene, t, true);
            log::debug!("[hover] enter {:?}", t);
        }
        self.hovered = target;
    }

    /// Dispatch a click against an ordered hit list.
    ///
    /// Only the front-most hit is consumed; anything stacked behind it
    /// never sees the click, mirroring stop-propagation semantics. The
    /// navigator fires exactly once per call, and the chosen route is
    /// returned for the caller.
    pub fn dispatch_click(
        &self,
        scene: &GlobeScene,
        hits: &[PickTarget],
        nav: &mut dyn Navigator,
    ) -> Option<Route> {
        let front = *hits.first()?;
        let route = match front {
            PickTarget::Sphere => scene.sphere_route(),
            PickTarget::Marker(i) => scene.markers().get(i)?.route,
        };
        log::info!("[click] {:?} -> {}", front, route.path());
        nav.navigate_to(route);
        Some(route)
    }
}

fn apply_highlight(scene: &mut GlobeScene, target: PickTarget, on: bool) {
    match target {
        PickTarget::Sphere => scene.set_globe_hover(on),
        PickTarget::Marker(i) => scene.set_highlight(i, on),
    }
}
