//! Conversion of a host application scene graph into a renderer scene.
//!
//! The host scene is accessed through the traits in [host]. A [SceneBuilder] converts it into a
//! [RendererScene], converting again lights and meshes only when the geometry changes.

/// Module containing the options controlling a build.
pub mod config;
pub use self::config::{BuildOptions, RebuildPolicy};
/// Module containing the errors and the recovered conditions of a build.
pub mod error;
pub use self::error::{ConvertError, Notice, ParseOptionError};
/// Module containing the renderer entities: cameras, lights and meshes.
pub mod geometry;
pub use self::geometry::{
    Camera, ColorRGB, GeometryInstance, Light, LightType, Mesh, PointLight, ProjectionType,
    SpotLight,
};
/// Module containing the interfaces used to read the host scene graph.
pub mod host;
pub use self::host::HostScene;
/// Module containing materials and baked textures.
pub mod materials;
pub use self::materials::{Material, Texture};
/// Module containing the scene builder and the renderer scene.
pub mod scene;
pub use self::scene::{BuildReport, RendererScene, SceneBuilder};
