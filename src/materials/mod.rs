mod baker;
pub use self::baker::{bake, BakedTextures};
mod material;
pub(crate) use self::material::build_material;
pub use self::material::{Diffuse, Material, DEFAULT_COLOR, PLACEHOLDER_COLOR};
mod texture;
pub use self::texture::{
    ImageGrayF32, ImageRgbF32, Texture, TextureFormat, TextureGray, TextureInfo, TextureRGB,
};
