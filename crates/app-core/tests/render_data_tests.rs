// Host-side tests for GPU upload layouts and their assembly.

use app_core::content::globe_config;
use app_core::render_data::{
    flag_instances, flag_uniforms, globe_uniforms, FlagInstance, FlagUniforms, GlobeUniforms,
};
use app_core::scene::GlobeScene;
use glam::{Mat4, Vec3};

fn make_scene() -> GlobeScene {
    GlobeScene::new(&globe_config()).unwrap()
}

#[test]
fn upload_layouts_match_the_shader_structs() {
    // Sizes are load-bearing: the buffers are created from these.
    assert_eq!(std::mem::size_of::<GlobeUniforms>(), 256);
    assert_eq!(std::mem::size_of::<FlagUniforms>(), 128);
    assert_eq!(std::mem::size_of::<FlagInstance>(), 36);
}

#[test]
fn idle_marker_renders_five_stripes_and_no_glow() {
    let scene = make_scene();
    let instances = flag_instances(&scene, 0);
    assert_eq!(instances.len(), 5);
    for inst in &instances {
        assert_eq!(inst.color[3], 0.95, "idle stripes are slightly translucent");
        assert_eq!(inst.offset[2], 0.01, "stripes sit lifted off the glow plane");
    }
}

#[test]
fn highlighted_marker_adds_the_glow_behind_the_stripes() {
    let mut scene = make_scene();
    scene.set_highlight(0, true);
    let instances = flag_instances(&scene, 0);
    assert_eq!(instances.len(), 6);

    let glow = &instances[0];
    assert_eq!(glow.color[3], 0.3);
    assert_eq!(glow.offset[2], 0.0, "glow renders at the marker plane");
    assert_eq!(glow.size, [0.5, 0.6]);

    for stripe in &instances[1..] {
        assert_eq!(stripe.color[3], 1.0, "hover raises stripes to full opacity");
    }
}

#[test]
fn out_of_range_marker_yields_no_instances() {
    let scene = make_scene();
    assert!(flag_instances(&scene, 7).is_empty());
}

#[test]
fn globe_uniforms_pack_the_light_rig() {
    let scene = make_scene();
    let u = globe_uniforms(&scene, Mat4::IDENTITY, Vec3::new(0.0, 0.0, 5.0));

    assert_eq!(u.ambient[0], 2.5);
    assert_eq!(u.eye, [0.0, 0.0, 5.0, 1.0]);

    // Directional slots store unit direction plus intensity.
    let d = Vec3::new(u.dir_lights[0][0], u.dir_lights[0][1], u.dir_lights[0][2]);
    assert!((d.length() - 1.0).abs() < 1e-5);
    assert!((d - Vec3::splat(1.0).normalize()).length() < 1e-5);
    assert_eq!(u.dir_lights[0][3], 2.0);
    assert_eq!(u.dir_lights[1][3], 1.5);

    // Point slots keep raw positions.
    assert_eq!(u.point_lights[3], [0.0, -10.0, 0.0, 1.0]);
}

#[test]
fn globe_model_matrix_tracks_the_spin() {
    let mut scene = make_scene();
    scene.tick(std::time::Duration::from_secs(30));
    let u = globe_uniforms(&scene, Mat4::IDENTITY, Vec3::ZERO);
    let expected = Mat4::from_quat(scene.sphere_rotation()).to_cols_array_2d();
    assert_eq!(u.model, expected);
}

#[test]
fn flag_model_matrix_places_the_quad() {
    let scene = make_scene();
    let marker = &scene.markers()[0];
    let u = flag_uniforms(marker, Mat4::IDENTITY);
    let model = Mat4::from_cols_array_2d(&u.model);
    let origin = model.transform_point3(Vec3::ZERO);
    assert!(
        (origin - marker.placement.position).length() < 1e-5,
        "quad origin should land on the marker anchor"
    );
    // The decal's +Z must point away from the globe center.
    let forward = model.transform_vector3(Vec3::Z);
    assert!(forward.dot(marker.placement.position.normalize()) > 0.999);
}
