use super::texture::{ImageGrayF32, ImageRgbF32, Texture};
use crate::error::ConvertError;
use crate::host::{Channels, HostRaster};
use image::ImageBuffer;

/// Textures produced by baking a raster.
#[derive(Debug, Clone, PartialEq)]
pub struct BakedTextures {
    pub diffuse: Texture,
    /// Present only if the raster has an alpha channel.
    pub alpha: Option<Texture>,
}

/// Evaluates every texel of a raster and stores the result in owned textures.
///
/// The color channels and the alpha channel are split into two separate textures, keeping the
/// row-major order of the raster.
pub fn bake(raster: &dyn HostRaster, name: &str) -> Result<BakedTextures, ConvertError> {
    let width = raster.width();
    let height = raster.height();
    let has_alpha = raster.has_alpha();
    let channels = if has_alpha {
        Channels::Rgba
    } else {
        Channels::Rgb
    };
    let stride = channels.count();
    let texels = width as usize * height as usize;
    let plane = raster.fetch_plane(channels);
    let size_error = |actual| ConvertError::PlaneSize {
        texture: name.to_string(),
        expected: texels * stride,
        actual,
    };
    if plane.len() != texels * stride {
        return Err(size_error(plane.len()));
    }
    let mut color = Vec::with_capacity(texels * 3);
    let mut alpha = Vec::with_capacity(if has_alpha { texels } else { 0 });
    for texel in plane.chunks_exact(stride) {
        color.extend_from_slice(&texel[..3]);
        if has_alpha {
            alpha.push(texel[3]);
        }
    }
    let color: ImageRgbF32 =
        ImageBuffer::from_raw(width, height, color).ok_or_else(|| size_error(plane.len()))?;
    let alpha = if has_alpha {
        let alpha: ImageGrayF32 =
            ImageBuffer::from_raw(width, height, alpha).ok_or_else(|| size_error(plane.len()))?;
        Some(Texture::new_gray(&format!("{}(A)", name), alpha))
    } else {
        None
    };
    log::debug!(
        "Baked {}x{} texture {} (alpha: {})",
        width,
        height,
        name,
        has_alpha
    );
    Ok(BakedTextures {
        diffuse: Texture::new_rgb(&format!("{}(RGB)", name), color),
        alpha,
    })
}
