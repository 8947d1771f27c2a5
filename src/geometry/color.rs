/// Representation of a flat surface color in linear RGB.
///
/// Values are not clamped: hosts working in scene-referred space may supply components greater
/// than `1.0`, and these are passed to the renderer unchanged.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorRGB {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorRGB {
    /// Creates a new color with the given `r`, `g` and `b` values.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        ColorRGB { r, g, b }
    }

    /// Keeps the color channels of an RGBA sample.
    pub fn from_rgba(rgba: [f32; 4]) -> Self {
        ColorRGB::new(rgba[0], rgba[1], rgba[2])
    }

    /// Returns true if every channel is exactly zero.
    pub fn is_black(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }
}

impl From<[f32; 3]> for ColorRGB {
    fn from(rgb: [f32; 3]) -> Self {
        ColorRGB::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<ColorRGB> for [f32; 3] {
    fn from(col: ColorRGB) -> Self {
        [col.r, col.g, col.b]
    }
}

#[cfg(test)]
mod tests {
    use super::ColorRGB;

    #[test]
    fn from_rgba_drops_alpha() {
        let c = ColorRGB::from_rgba([0.5, 0.3, 0.2, 0.0]);
        assert_eq!(c, ColorRGB::new(0.5, 0.3, 0.2));
        assert!(!c.is_black());
        assert!(ColorRGB::from_rgba([0.0, 0.0, 0.0, 1.0]).is_black());
    }
}
