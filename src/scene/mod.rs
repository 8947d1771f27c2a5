mod builder;
pub use self::builder::{BuildReport, SceneBuilder};
mod hash;
pub use self::hash::{points_signature, structural_hash, PointHasher};
mod renderer;
pub use self::renderer::RendererScene;
