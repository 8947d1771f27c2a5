use super::baker::bake;
use super::texture::Texture;
use crate::config::BuildOptions;
use crate::error::{ConvertError, Notice};
use crate::host::HostRaster;
use crate::ColorRGB;

/// Color assigned to objects without a material.
pub const DEFAULT_COLOR: ColorRGB = ColorRGB::new(0.6, 0.6, 0.6);
/// Color assigned to objects whose material looks like the host placeholder.
pub const PLACEHOLDER_COLOR: ColorRGB = ColorRGB::new(0.6, 0.6, 0.0);

/// Source of the diffuse color of a [Material].
#[derive(Debug, Clone, PartialEq)]
pub enum Diffuse {
    Flat(ColorRGB),
    Texture(Texture),
}

/// A material used to determine the surface of a [Mesh][crate::Mesh].
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Name used to refer to a material. The name is not unique and used only to aid the user.
    pub name: String,
    pub diffuse: Diffuse,
    /// Texture used to determine the opacity mask of the material.
    pub alpha: Option<Texture>,
}

impl Material {
    /// Creates a material with a constant color.
    pub fn flat(name: &str, color: ColorRGB) -> Self {
        Material {
            name: name.to_string(),
            diffuse: Diffuse::Flat(color),
            alpha: None,
        }
    }

    /// Creates a textured material, with an optional opacity mask.
    pub fn textured(name: &str, diffuse: Texture, alpha: Option<Texture>) -> Self {
        Material {
            name: name.to_string(),
            diffuse: Diffuse::Texture(diffuse),
            alpha,
        }
    }

    /// Returns the diffuse color, if the material is not textured.
    pub fn flat_color(&self) -> Option<ColorRGB> {
        match &self.diffuse {
            Diffuse::Flat(color) => Some(*color),
            Diffuse::Texture(_) => None,
        }
    }

    pub fn is_textured(&self) -> bool {
        matches!(self.diffuse, Diffuse::Texture(_))
    }
}

impl Default for Material {
    /// Generates a default, flat, gray material.
    fn default() -> Self {
        Material::flat("default", DEFAULT_COLOR)
    }
}

/// Builds the material of the object at index `object`.
///
/// Textures are baked only if the object has UVs to map them. Otherwise the color of the first
/// pixel is used as flat color. Any recovered condition is appended to `notices`.
pub(crate) fn build_material(
    raster: Option<&dyn HostRaster>,
    has_uvs: bool,
    name: &str,
    object: usize,
    options: &BuildOptions,
    notices: &mut Vec<Notice>,
) -> Result<Material, ConvertError> {
    let raster = match raster {
        Some(raster) => raster,
        None => {
            log::warn!("Object {} has no material", name);
            notices.push(Notice::MissingMaterial { object });
            return Ok(Material::flat(name, options.default_color));
        }
    };
    let probe = raster.probe(0, 0);
    if has_uvs {
        let baked = bake(raster, name)?;
        Ok(Material::textured(name, baked.diffuse, baked.alpha))
    } else {
        let color = ColorRGB::from_rgba(probe);
        // black and opaque is a legit material, black and transparent is the host placeholder
        if color.is_black() && probe[3] == 0.0 {
            log::warn!("Object {} has a placeholder material", name);
            notices.push(Notice::PlaceholderMaterial { object });
            Ok(Material::flat(name, options.placeholder_color))
        } else {
            Ok(Material::flat(name, color))
        }
    }
}
