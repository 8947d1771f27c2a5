use super::hash::structural_hash;
use super::renderer::RendererScene;
use crate::config::{BuildOptions, RebuildPolicy};
use crate::error::{ConvertError, Notice};
use crate::geometry::{build_geometry, convert_camera, convert_light, transform, uv_attribute};
use crate::host::{HostObject, HostScene};
use crate::materials::build_material;
use crate::Mesh;
use rayon::prelude::*;

/// Summary of a single [SceneBuilder::build] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    /// True if the camera was converted in this build.
    pub camera: bool,
    /// Number of lights in the scene after the build.
    pub lights: usize,
    /// Number of meshes in the scene after the build.
    pub meshes: usize,
    /// True if meshes were converted again, false if the previous ones were kept.
    pub rebuilt: bool,
    /// Structural hash of the geometry. None if there was no geometry to hash.
    pub hash: Option<u64>,
    /// Recovered conditions, in the order they were encountered.
    pub notices: Vec<Notice>,
}

/// Converts host scenes into a [RendererScene], keeping it across successive builds.
///
/// The builder remembers the structural hash of the last converted geometry and, depending on
/// the [RebuildPolicy], skips the conversion of meshes and materials when it did not change.
/// The camera and the lights are converted on every build.
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    options: BuildOptions,
    scene: RendererScene,
    last_hash: Option<u64>,
}

impl SceneBuilder {
    /// Creates a builder with an empty scene.
    pub fn new(options: BuildOptions) -> Self {
        SceneBuilder {
            options,
            scene: RendererScene::default(),
            last_hash: None,
        }
    }

    /// The scene produced by the last build.
    pub fn scene(&self) -> &RendererScene {
        &self.scene
    }

    /// Consumes the builder, returning the scene.
    pub fn into_scene(self) -> RendererScene {
        self.scene
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Replaces the options. The next build converts the geometry regardless of its hash.
    pub fn set_options(&mut self, options: BuildOptions) {
        self.options = options;
        self.invalidate();
    }

    /// Forgets the stored hash, forcing the next build to convert the geometry.
    pub fn invalidate(&mut self) {
        self.last_hash = None;
    }

    /// Converts the given host scene.
    ///
    /// Missing camera or geometry inputs are not errors: they are reported in the returned
    /// [BuildReport]. If an object has malformed topology the error is returned, and the scene
    /// is left without lights and meshes.
    pub fn build(&mut self, host: &HostScene) -> Result<BuildReport, ConvertError> {
        let mut report = BuildReport::default();
        match host.camera.and_then(|node| node.as_camera()) {
            Some(camera) => {
                self.scene.free_camera();
                self.scene
                    .set_default_camera(convert_camera(camera, self.options.projection));
                report.camera = true;
            }
            None => {
                log::warn!("Camera input is not a camera, keeping the previous one");
                report.notices.push(Notice::MissingCamera);
            }
        }
        let geometry = host.geometry.and_then(|node| node.as_geometry());
        let objects = geometry.map(|geo| geo.objects()).unwrap_or_default();
        let geometry = match geometry {
            Some(geometry) if !objects.is_empty() => geometry,
            _ => {
                log::warn!("No geometry to convert");
                self.last_hash = None;
                self.scene.free_lights();
                self.scene.free_geometry();
                report.notices.push(Notice::MissingGeometry);
                return Ok(report);
            }
        };
        self.scene.free_lights();
        for light in geometry.lights() {
            self.scene
                .add_light(convert_light(light, self.options.spot_lights));
        }
        report.lights = self.scene.lights().len();
        let hash = structural_hash(geometry, &objects);
        report.hash = Some(hash);
        let unchanged = self.last_hash == Some(hash);
        if unchanged {
            log::debug!("Geometry hash unchanged ({:016x})", hash);
        }
        if unchanged && self.options.rebuild == RebuildPolicy::OnChange {
            report.meshes = self.scene.meshes().len();
            log::info!(
                "Geometry unchanged, converted {} lights and kept {} meshes",
                report.lights,
                report.meshes
            );
            return Ok(report);
        }
        self.last_hash = None;
        self.scene.free_geometry();
        let converted = match self.convert_objects(&objects) {
            Ok(converted) => converted,
            Err(error) => {
                log::warn!("Scene conversion failed: {}", error);
                self.scene.free_lights();
                return Err(error);
            }
        };
        for (mesh, notices) in converted {
            report.notices.extend(notices);
            if let Some(mesh) = mesh {
                self.scene.add_mesh(mesh);
            }
        }
        self.last_hash = Some(hash);
        report.rebuilt = true;
        report.meshes = self.scene.meshes().len();
        log::info!(
            "Converted {} lights and {} meshes from {} objects",
            report.lights,
            report.meshes,
            objects.len()
        );
        Ok(report)
    }

    /// Converts every object, preserving the host order.
    fn convert_objects(
        &self,
        objects: &[&dyn HostObject],
    ) -> Result<Vec<(Option<Mesh>, Vec<Notice>)>, ConvertError> {
        let options = &self.options;
        if options.parallel {
            objects
                .par_iter()
                .enumerate()
                .map(|(index, object)| convert_object(*object, index, options))
                .collect()
        } else {
            objects
                .iter()
                .enumerate()
                .map(|(index, object)| convert_object(*object, index, options))
                .collect()
        }
    }
}

/// Converts a single object into a mesh. Objects without primitives produce no mesh.
fn convert_object(
    object: &dyn HostObject,
    index: usize,
    options: &BuildOptions,
) -> Result<(Option<Mesh>, Vec<Notice>), ConvertError> {
    let mut notices = Vec::new();
    if object.primitive_count() == 0 {
        log::warn!("Object {} has no primitives", object.name());
        notices.push(Notice::EmptyObject { object: index });
        return Ok((None, notices));
    }
    let has_uvs = uv_attribute(object).is_some();
    let material = build_material(
        object.material(),
        has_uvs,
        object.name(),
        index,
        options,
        &mut notices,
    )?;
    let geometry = build_geometry(object, index)?;
    let mesh = Mesh {
        name: object.name().to_string(),
        transform: transform::from_host_matrix(object.matrix()),
        geometry,
        material,
    };
    Ok((Some(mesh), notices))
}
