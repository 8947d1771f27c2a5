use cgmath::{Matrix4, Point3, SquareMatrix, Vector3 as Vec3, Vector4};
use float_cmp::assert_approx_eq;
use imagine_bridge::host::{
    AttributeGroup, HostScene, MemoryCamera, MemoryGeometry, MemoryLight, MemoryObject,
    MemoryRaster, KNOB_INTENSITY, KNOB_LIGHT_TYPE, UV_ATTRIBUTE,
};
use imagine_bridge::{
    BuildOptions, ColorRGB, ConvertError, LightType, Notice, RebuildPolicy, SceneBuilder,
};
use rand::prelude::*;
use rand_xoshiro::Xoshiro128StarStar;

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn camera() -> MemoryCamera {
    MemoryCamera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 0.0), 50.0, 24.0)
}

fn quad(name: &str) -> MemoryObject {
    let mut obj = MemoryObject::new(
        name,
        vec![
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(-1.0, 1.0, 0.0),
        ],
    );
    obj.push_polygon(&[0, 1, 2, 3]);
    obj
}

fn red_quad_scene() -> MemoryGeometry {
    let mut obj = quad("quad");
    obj.material = Some(MemoryRaster::constant(16, 16, [1.0, 0.0, 0.0, 1.0], true));
    MemoryGeometry {
        lights: Vec::new(),
        objects: vec![obj],
        points_signature: None,
    }
}

fn random_scene(seed: u64) -> MemoryGeometry {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    let mut objects = Vec::new();
    for i in 0..rng.gen_range(2..12) {
        let points_no: u32 = rng.gen_range(3..64);
        let points = (0..points_no)
            .map(|_| Point3::new(rng.gen(), rng.gen(), rng.gen()))
            .collect();
        let mut obj = MemoryObject::new(&format!("obj{}", i), points);
        for _ in 0..rng.gen_range(1..32) {
            let vertices = (0..rng.gen_range(3..7))
                .map(|_| rng.gen_range(0..points_no))
                .collect::<Vec<_>>();
            obj.push_polygon(&vertices);
        }
        if rng.gen_bool(0.5) {
            let uvs = (0..obj.vertex_count() * 2).map(|_| rng.gen()).collect();
            obj.set_attribute(UV_ATTRIBUTE, AttributeGroup::Vertices, 2, uvs);
        }
        if rng.gen_bool(0.7) {
            let color = [rng.gen(), rng.gen(), rng.gen(), 1.0];
            obj.material = Some(MemoryRaster::constant(4, 4, color, rng.gen_bool(0.5)));
        }
        obj.matrix[0][3] = rng.gen_range(-10.0..10.0);
        objects.push(obj);
    }
    MemoryGeometry {
        lights: vec![MemoryLight::new(
            "sun",
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::new(-90.0, 0.0, 0.0),
        )],
        objects,
        points_signature: None,
    }
}

#[test]
fn convert_single_quad() {
    init_log();
    let cam = camera();
    let geo = red_quad_scene();
    let mut builder = SceneBuilder::default();
    let report = builder
        .build(&HostScene::new(Some(&cam), Some(&geo)))
        .unwrap();
    assert!(report.camera);
    assert!(report.rebuilt);
    assert!(report.notices.is_empty());
    let scene = builder.into_scene();
    let camera = scene.camera().unwrap();
    let expected_fov = f32::to_degrees(2.0 * f32::atan(12.0 / 50.0));
    assert_approx_eq!(f32, camera.fov, expected_fov, epsilon = 1e-4);
    assert_approx_eq!(f32, camera.fov, 27.3, epsilon = 0.5);
    let origin = camera.transform * Vector4::new(0.0, 0.0, 0.0, 1.0);
    assert_eq!(origin, Vector4::new(0.0, 0.0, 5.0, 1.0));
    assert!(scene.lights().is_empty());
    assert_eq!(scene.meshes().len(), 1);
    let mesh = &scene.meshes()[0];
    assert_eq!(mesh.name, "quad");
    assert_eq!(mesh.transform, Matrix4::identity());
    assert_eq!(mesh.geometry.polygon_count(), 1);
    assert_eq!(mesh.geometry.polygon(0), &[0, 1, 2, 3]);
    assert!(mesh.geometry.uvs.is_empty());
    assert_eq!(
        mesh.material.flat_color(),
        Some(ColorRGB::new(1.0, 0.0, 0.0))
    );
}

#[test]
fn textured_quad_with_vertex_uvs() {
    init_log();
    let cam = camera();
    let mut geo = red_quad_scene();
    geo.objects[0].set_attribute(
        UV_ATTRIBUTE,
        AttributeGroup::Vertices,
        2,
        vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
    );
    let mut builder = SceneBuilder::default();
    builder
        .build(&HostScene::new(Some(&cam), Some(&geo)))
        .unwrap();
    let mesh = &builder.scene().meshes()[0];
    assert!(mesh.material.is_textured());
    assert_eq!(mesh.material.alpha.as_ref().unwrap().dimensions(), (16, 16));
    assert!(mesh.geometry.per_vertex_uvs);
    assert_eq!(mesh.geometry.uv_indices, vec![0, 1, 2, 3]);
}

#[test]
fn rebuild_policies() {
    init_log();
    let cam = camera();
    let mut geo = red_quad_scene();
    let host = HostScene::new(Some(&cam), Some(&geo));
    let mut on_change = SceneBuilder::default();
    let mut always = SceneBuilder::new(BuildOptions {
        rebuild: RebuildPolicy::Always,
        ..Default::default()
    });
    assert!(on_change.build(&host).unwrap().rebuilt);
    assert!(always.build(&host).unwrap().rebuilt);
    assert!(!on_change.build(&host).unwrap().rebuilt);
    assert!(always.build(&host).unwrap().rebuilt);
    assert_eq!(on_change.scene(), always.scene());
    geo.objects[0].points[0].z = 1.0;
    let host = HostScene::new(Some(&cam), Some(&geo));
    let report = on_change.build(&host).unwrap();
    assert!(report.rebuilt);
    assert_eq!(
        on_change.scene().meshes()[0].geometry.points[0],
        Point3::new(-1.0, -1.0, 1.0)
    );
}

#[test]
fn empty_geometry_empties_scene() {
    init_log();
    let cam = camera();
    let geo = random_scene(7);
    let mut builder = SceneBuilder::default();
    builder
        .build(&HostScene::new(Some(&cam), Some(&geo)))
        .unwrap();
    assert!(!builder.scene().meshes().is_empty());
    let empty = MemoryGeometry {
        lights: geo.lights.clone(),
        ..Default::default()
    };
    let report = builder
        .build(&HostScene::new(Some(&cam), Some(&empty)))
        .unwrap();
    assert_eq!(report.notices, vec![Notice::MissingGeometry]);
    assert!(builder.scene().lights().is_empty());
    assert!(builder.scene().meshes().is_empty());
    assert!(builder.scene().camera().is_some());
}

#[test]
fn disconnected_inputs() {
    init_log();
    let mut builder = SceneBuilder::default();
    let report = builder.build(&HostScene::default()).unwrap();
    assert_eq!(
        report.notices,
        vec![Notice::MissingCamera, Notice::MissingGeometry]
    );
    assert!(builder.scene().camera().is_none());
}

#[test]
fn point_index_out_of_range() {
    init_log();
    let cam = camera();
    let mut geo = red_quad_scene();
    geo.objects.push(quad("broken"));
    geo.objects[1].push_polygon(&[0, 4, 2]);
    let mut builder = SceneBuilder::default();
    let err = builder
        .build(&HostScene::new(Some(&cam), Some(&geo)))
        .unwrap_err();
    assert_eq!(
        err,
        ConvertError::PointIndex {
            object: 1,
            primitive: 1,
            index: 4,
            points: 4
        }
    );
    assert!(builder.scene().meshes().is_empty());
}

#[test]
fn parallel_matches_sequential() {
    init_log();
    let cam = camera();
    for seed in 0..8 {
        let geo = random_scene(seed);
        let host = HostScene::new(Some(&cam), Some(&geo));
        let mut sequential = SceneBuilder::default();
        let mut parallel = SceneBuilder::new(BuildOptions {
            parallel: true,
            ..Default::default()
        });
        let seq_report = sequential.build(&host).unwrap();
        let par_report = parallel.build(&host).unwrap();
        assert_eq!(seq_report, par_report);
        assert_eq!(sequential.scene(), parallel.scene());
        assert_eq!(sequential.scene().meshes().len(), geo.objects.len());
    }
}

#[test]
fn spot_lights_option() {
    init_log();
    let cam = camera();
    let mut geo = red_quad_scene();
    geo.lights.push(
        MemoryLight::new("spot", Vec3::new(0.0, 5.0, 0.0), Vec3::new(-90.0, 0.0, 0.0))
            .with(KNOB_LIGHT_TYPE, &[2.0])
            .with(KNOB_INTENSITY, &[8.0]),
    );
    let mut builder = SceneBuilder::default();
    builder
        .build(&HostScene::new(Some(&cam), Some(&geo)))
        .unwrap();
    assert_eq!(builder.scene().lights()[0].ltype(), LightType::POINT);
    assert_approx_eq!(f32, builder.scene().lights()[0].intensity(), 2.0);
    let mut options = builder.options().clone();
    options.spot_lights = true;
    builder.set_options(options);
    let report = builder
        .build(&HostScene::new(Some(&cam), Some(&geo)))
        .unwrap();
    assert!(report.rebuilt);
    assert_eq!(builder.scene().lights()[0].ltype(), LightType::SPOT);
}
