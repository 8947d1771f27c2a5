use cgmath::{Point3, Vector3 as Vec3};

mod memory;
pub use self::memory::{
    Knobs, MemoryCamera, MemoryGeometry, MemoryLight, MemoryObject, MemoryPrimitive, MemoryRaster,
};

/// Knob holding the translation of cameras and lights.
pub const KNOB_TRANSLATE: &str = "translate";
/// Knob holding the Euler rotation (in degrees) of cameras and lights.
pub const KNOB_ROTATE: &str = "rotate";
/// Knob holding the intensity of a light.
pub const KNOB_INTENSITY: &str = "intensity";
/// Knob holding the numeric type code of a light.
pub const KNOB_LIGHT_TYPE: &str = "light_type";
/// Knob holding the cone angle of a spot light, in degrees.
pub const KNOB_CONE_ANGLE: &str = "cone_angle";
/// Name of the texture coordinates attribute.
pub const UV_ATTRIBUTE: &str = "uv";

/// The two inputs of the render node.
///
/// Either input may be disconnected or connected to a node that does not provide the expected
/// capability. In both cases the conversion substitutes defaults instead of failing.
#[derive(Clone, Copy, Default)]
pub struct HostScene<'a> {
    /// Input expected to provide a camera.
    pub camera: Option<&'a dyn HostNode>,
    /// Input expected to provide lights and geometry.
    pub geometry: Option<&'a dyn HostNode>,
}

impl<'a> HostScene<'a> {
    pub fn new(camera: Option<&'a dyn HostNode>, geometry: Option<&'a dyn HostNode>) -> Self {
        HostScene { camera, geometry }
    }
}

/// A node of the host scene graph.
///
/// Nodes advertise what they can provide by returning `Some` from the capability queries.
pub trait HostNode {
    /// Returns the camera view of this node, if the node is a camera.
    fn as_camera(&self) -> Option<&dyn HostCamera> {
        None
    }

    /// Returns the geometry view of this node, if the node produces geometry.
    fn as_geometry(&self) -> Option<&dyn HostGeometry> {
        None
    }
}

/// Named, multi-component parameters exposed by the host UI.
pub trait ParamSource {
    /// Returns the component `component` of the knob `name`, or None if the knob does not exist
    /// or has fewer components.
    fn param(&self, name: &str, component: usize) -> Option<f32>;

    /// Reads the first three components of a knob as a vector.
    fn vector3(&self, name: &str) -> Option<Vec3<f32>> {
        Some(Vec3::new(
            self.param(name, 0)?,
            self.param(name, 1)?,
            self.param(name, 2)?,
        ))
    }
}

pub trait HostCamera: ParamSource {
    /// Focal length of the lens, in millimeters.
    fn focal_length(&self) -> f32;
    /// Width of the film back, in millimeters.
    fn horizontal_aperture(&self) -> f32;
}

pub trait HostLight: ParamSource {
    fn name(&self) -> &str;
}

/// A node producing geometry, along with the lights merged into its scene.
pub trait HostGeometry {
    /// Lights of the scene, in host order.
    fn lights(&self) -> Vec<&dyn HostLight>;
    /// Geometry objects of the scene, in host order.
    fn objects(&self) -> Vec<&dyn HostObject>;
    /// Signature of the point group of the node, if the host tracks one.
    ///
    /// When None, the signature is computed from the points of the first object.
    fn points_signature(&self) -> Option<u64> {
        None
    }
}

/// Scope of an attribute, determining how it is indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeGroup {
    /// One element per point.
    Points,
    /// One element per primitive vertex, across the whole object.
    Vertices,
    /// One element per primitive.
    Primitives,
    /// A single element for the entire object.
    Object,
}

/// A view over a named attribute of a [HostObject].
#[derive(Debug, Clone, Copy)]
pub struct Attribute<'a> {
    pub group: AttributeGroup,
    /// Number of components of each element.
    pub components: usize,
    /// Elements, stored contiguously.
    pub data: &'a [f32],
}

impl<'a> Attribute<'a> {
    /// Number of elements in the attribute.
    pub fn len(&self) -> usize {
        if self.components == 0 {
            0
        } else {
            self.data.len() / self.components
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the components of the element at the given index, or None if out of range.
    pub fn element(&self, index: usize) -> Option<&'a [f32]> {
        if index >= self.len() {
            return None;
        }
        let start = index * self.components;
        self.data.get(start..start + self.components)
    }
}

/// A geometry object as seen by the host.
///
/// Objects are converted concurrently when requested, hence the `Sync` bound.
pub trait HostObject: Sync {
    fn name(&self) -> &str;
    fn points(&self) -> &[Point3<f32>];
    /// Returns the attribute with the given name, if any.
    fn attribute(&self, name: &str) -> Option<Attribute<'_>>;
    fn primitive_count(&self) -> usize;
    /// Returns the primitive at the given index.
    ///
    /// `index` is guaranteed to be lower than [HostObject::primitive_count].
    fn primitive(&self, index: usize) -> &dyn HostPrimitive;
    /// The raster used as surface color, if any.
    fn material(&self) -> Option<&dyn HostRaster>;
    /// Object to world matrix, stored row-major: `matrix[row][column]`.
    fn matrix(&self) -> [[f32; 4]; 4];
}

/// A primitive of a [HostObject], possibly made of several faces.
pub trait HostPrimitive {
    /// Point indices of each vertex of the primitive.
    fn vertices(&self) -> &[u32];
    /// Index of the first vertex of this primitive in the object vertex attributes.
    fn vertex_offset(&self) -> usize;
    /// Number of sub-faces composing the primitive. Always at least 1.
    fn face_count(&self) -> usize;
    /// Writes in `out` the primitive-local vertex indices of the given sub-face.
    ///
    /// Any previous content of `out` is discarded.
    fn face_vertices(&self, face: usize, out: &mut Vec<usize>);
}

/// Channels requested when fetching a full raster plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    Rgb,
    Rgba,
}

impl Channels {
    /// Number of values stored for each texel.
    pub const fn count(self) -> usize {
        match self {
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }
}

/// A 2D color source, either an image or a procedural generator.
pub trait HostRaster {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Whether the raster carries an alpha channel.
    fn has_alpha(&self) -> bool;
    /// Samples a single pixel, returning its RGBA value.
    fn probe(&self, x: u32, y: u32) -> [f32; 4];
    /// Computes the full `width` x `height` plane.
    ///
    /// The result is row-major, with `channels.count()` interleaved values per texel.
    fn fetch_plane(&self, channels: Channels) -> Vec<f32>;
}

#[cfg(test)]
mod tests {
    use super::{Attribute, AttributeGroup};

    #[test]
    fn attribute_element_bounds() {
        let data = [0.0, 1.0, 2.0, 3.0, 4.0];
        let attr = Attribute {
            group: AttributeGroup::Points,
            components: 2,
            data: &data,
        };
        assert_eq!(attr.len(), 2);
        assert_eq!(attr.element(1), Some(&[2.0, 3.0][..]));
        assert_eq!(attr.element(2), None);
        let empty = Attribute {
            group: AttributeGroup::Object,
            components: 0,
            data: &data,
        };
        assert!(empty.is_empty());
        assert_eq!(empty.element(0), None);
    }
}
