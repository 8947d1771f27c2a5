use std::fmt::Display;

/// Error raised when the host data can not be converted.
///
/// Missing inputs are never errors: they are replaced by defaults and reported as [Notice]s.
/// Errors are reserved to data that would otherwise be read out of bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A face references a vertex not belonging to its primitive.
    VertexIndex {
        object: usize,
        primitive: usize,
        vertex: usize,
        vertices: usize,
    },
    /// A primitive references a point not existing in the object.
    PointIndex {
        object: usize,
        primitive: usize,
        index: u32,
        points: usize,
    },
    /// A polygon vertex has no corresponding texture coordinate.
    UvIndex {
        object: usize,
        primitive: usize,
        index: usize,
        uvs: usize,
    },
    /// The raster plane returned by the host has an unexpected length.
    PlaneSize {
        texture: String,
        expected: usize,
        actual: usize,
    },
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::VertexIndex {
                object,
                primitive,
                vertex,
                vertices,
            } => write!(
                f,
                "Object {} primitive {}: face vertex {} out of {} vertices",
                object, primitive, vertex, vertices
            ),
            ConvertError::PointIndex {
                object,
                primitive,
                index,
                points,
            } => write!(
                f,
                "Object {} primitive {}: point index {} out of {} points",
                object, primitive, index, points
            ),
            ConvertError::UvIndex {
                object,
                primitive,
                index,
                uvs,
            } => write!(
                f,
                "Object {} primitive {}: uv index {} out of {} uvs",
                object, primitive, index, uvs
            ),
            ConvertError::PlaneSize {
                texture,
                expected,
                actual,
            } => write!(
                f,
                "Texture {}: expected {} values, got {}",
                texture, expected, actual
            ),
        }
    }
}

impl std::error::Error for ConvertError {}

/// Error used to report an unrecognized option value.
///
/// This is used by the `FromStr` implementations of the build options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptionError {
    pub(crate) option: &'static str,
    pub(crate) value: String,
}

impl Display for ParseOptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unrecognized {} \"{}\"", self.option, self.value)
    }
}

impl std::error::Error for ParseOptionError {}

/// A condition recovered during a build by substituting a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The camera input is disconnected or is not a camera. The previous camera is kept.
    MissingCamera,
    /// The geometry input is disconnected, is not a geometry node or has no objects.
    MissingGeometry,
    /// The object has no primitives and was skipped.
    EmptyObject { object: usize },
    /// The object has no material. The default gray was used.
    MissingMaterial { object: usize },
    /// The object material looks like the host placeholder. The diagnostic color was used.
    PlaceholderMaterial { object: usize },
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::MissingCamera => write!(f, "No camera connected"),
            Notice::MissingGeometry => write!(f, "No geometry connected"),
            Notice::EmptyObject { object } => write!(f, "Object {} has no primitives", object),
            Notice::MissingMaterial { object } => write!(f, "Object {} has no material", object),
            Notice::PlaceholderMaterial { object } => {
                write!(f, "Object {} has a placeholder material", object)
            }
        }
    }
}
