use crate::geometry::{Camera, Light, Mesh};

/// Scene in the representation consumed by the renderer.
///
/// Holds at most one camera, used as default camera, and the lights and meshes of the last
/// converted host scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RendererScene {
    camera: Option<Camera>,
    lights: Vec<Light>,
    meshes: Vec<Mesh>,
}

impl RendererScene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        RendererScene::default()
    }

    /// Returns the default camera, if any.
    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Replaces the default camera, dropping the previous one.
    pub fn set_default_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
    }

    pub fn free_camera(&mut self) {
        self.camera = None;
    }

    pub fn free_lights(&mut self) {
        self.lights.clear();
    }

    /// Drops every mesh, along with its geometry and material.
    pub fn free_geometry(&mut self) {
        self.meshes.clear();
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn add_mesh(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }
}
