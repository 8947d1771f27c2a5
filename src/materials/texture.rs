use image::{ImageBuffer, Luma, Rgb};

/// Color image with one `f32` per channel.
pub type ImageRgbF32 = ImageBuffer<Rgb<f32>, Vec<f32>>;
/// Single channel image with one `f32` per texel.
pub type ImageGrayF32 = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Information about the texture.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TextureInfo {
    /// Name of the texture.
    /// Unused by the renderer, but may aid the user. Derived from the name of the object owning
    /// the material.
    pub name: String,
    /// Width of the texture, in pixels.
    pub width: u32,
    /// Height of the texture, in pixels.
    pub height: u32,
    /// Format of the texture.
    pub format: TextureFormat,
}

/// A RGB texture stored in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureRGB {
    /// Information about the texture.
    pub info: TextureInfo,
    pub data: ImageRgbF32,
}

/// A Grayscale (single channel) texture stored in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureGray {
    /// Information about the texture.
    pub info: TextureInfo,
    pub data: ImageGrayF32,
}

/// Enum listing the type of textures available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    /// A grayscale texture.
    /// 32 bit float, single channel.
    Gray,
    /// A color texture without alpha channel.
    /// 32 bit float per channel, 3 channels.
    /// The channels are ordered as Red, Green, Blue.
    Rgb,
}

impl TextureFormat {
    /// Returns the number of channels of each texel.
    pub const fn channels(self) -> usize {
        match self {
            TextureFormat::Gray => 1,
            TextureFormat::Rgb => 3,
        }
    }
}

/// A texture stored in memory.
#[derive(Debug, Clone, PartialEq)]
pub enum Texture {
    Rgb(TextureRGB),
    Gray(TextureGray),
}

impl Texture {
    /// Creates a new grayscale texture with the given name.
    pub fn new_gray(name: &str, data: ImageGrayF32) -> Self {
        let info = TextureInfo {
            name: name.to_string(),
            width: data.width(),
            height: data.height(),
            format: TextureFormat::Gray,
        };
        Texture::Gray(TextureGray { info, data })
    }

    /// Creates a new color texture with the given name.
    pub fn new_rgb(name: &str, data: ImageRgbF32) -> Self {
        let info = TextureInfo {
            name: name.to_string(),
            width: data.width(),
            height: data.height(),
            format: TextureFormat::Rgb,
        };
        Texture::Rgb(TextureRGB { info, data })
    }

    /// Returns the information about the texture.
    pub fn info(&self) -> &TextureInfo {
        match self {
            Texture::Rgb(t) => &t.info,
            Texture::Gray(t) => &t.info,
        }
    }

    /// Returns the name of the texture.
    pub fn name(&self) -> &str {
        &self.info().name
    }

    /// Returns (width, height) of the texture in pixel.
    pub fn dimensions(&self) -> (u32, u32) {
        let info = self.info();
        (info.width, info.height)
    }

    /// Returns the format of the texture.
    pub const fn format(&self) -> TextureFormat {
        match self {
            Texture::Rgb(_) => TextureFormat::Rgb,
            Texture::Gray(_) => TextureFormat::Gray,
        }
    }

    /// Returns the raw texel values, row-major, with channels interleaved.
    pub fn raw(&self) -> &[f32] {
        match self {
            Texture::Rgb(t) => t.data.as_raw(),
            Texture::Gray(t) => t.data.as_raw(),
        }
    }
}
