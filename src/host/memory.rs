//! Owned, in-memory implementation of the host interfaces.
//!
//! Useful to drive the conversion from data already extracted from a host application, or to
//! build scenes by hand.

use super::{
    Attribute, AttributeGroup, Channels, HostCamera, HostGeometry, HostLight, HostNode,
    HostObject, HostPrimitive, HostRaster, ParamSource, KNOB_ROTATE, KNOB_TRANSLATE,
};
use cgmath::{Point3, Vector3 as Vec3};
use fnv::FnvHashMap;

/// A set of named knobs, each one with an arbitrary number of components.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Knobs {
    values: FnvHashMap<String, Vec<f32>>,
}

impl Knobs {
    pub fn new() -> Knobs {
        Knobs::default()
    }

    /// Sets the value of a knob, replacing the previous one.
    pub fn set(&mut self, name: &str, values: &[f32]) {
        self.values.insert(name.to_string(), values.to_vec());
    }

    /// Returns all the components of a knob.
    pub fn get(&self, name: &str) -> Option<&[f32]> {
        self.values.get(name).map(Vec::as_slice)
    }
}

impl ParamSource for Knobs {
    fn param(&self, name: &str, component: usize) -> Option<f32> {
        self.values.get(name)?.get(component).copied()
    }
}

fn set_transform(knobs: &mut Knobs, position: Vec3<f32>, rotation: Vec3<f32>) {
    knobs.set(KNOB_TRANSLATE, &[position.x, position.y, position.z]);
    knobs.set(KNOB_ROTATE, &[rotation.x, rotation.y, rotation.z]);
}

/// A camera node.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryCamera {
    pub knobs: Knobs,
    pub focal_length: f32,
    pub horizontal_aperture: f32,
}

impl MemoryCamera {
    /// Creates a camera with the given transform and lens. Rotation is expressed in degrees.
    pub fn new(
        position: Vec3<f32>,
        rotation: Vec3<f32>,
        focal_length: f32,
        horizontal_aperture: f32,
    ) -> Self {
        let mut knobs = Knobs::new();
        set_transform(&mut knobs, position, rotation);
        MemoryCamera {
            knobs,
            focal_length,
            horizontal_aperture,
        }
    }
}

impl ParamSource for MemoryCamera {
    fn param(&self, name: &str, component: usize) -> Option<f32> {
        self.knobs.param(name, component)
    }
}

impl HostCamera for MemoryCamera {
    fn focal_length(&self) -> f32 {
        self.focal_length
    }

    fn horizontal_aperture(&self) -> f32 {
        self.horizontal_aperture
    }
}

impl HostNode for MemoryCamera {
    fn as_camera(&self) -> Option<&dyn HostCamera> {
        Some(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryLight {
    pub name: String,
    pub knobs: Knobs,
}

impl MemoryLight {
    /// Creates a light with the given transform and no other knob.
    pub fn new(name: &str, position: Vec3<f32>, rotation: Vec3<f32>) -> Self {
        let mut knobs = Knobs::new();
        set_transform(&mut knobs, position, rotation);
        MemoryLight {
            name: name.to_string(),
            knobs,
        }
    }

    /// Sets a knob and returns the light, for chaining.
    pub fn with(mut self, knob: &str, values: &[f32]) -> Self {
        self.knobs.set(knob, values);
        self
    }
}

impl ParamSource for MemoryLight {
    fn param(&self, name: &str, component: usize) -> Option<f32> {
        self.knobs.param(name, component)
    }
}

impl HostLight for MemoryLight {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A primitive made of one or more faces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryPrimitive {
    pub vertices: Vec<u32>,
    pub vertex_offset: usize,
    /// Primitive-local vertex indices of each face. Empty for a single face spanning every vertex.
    pub faces: Vec<Vec<usize>>,
}

impl HostPrimitive for MemoryPrimitive {
    fn vertices(&self) -> &[u32] {
        &self.vertices
    }

    fn vertex_offset(&self) -> usize {
        self.vertex_offset
    }

    fn face_count(&self) -> usize {
        std::cmp::max(1, self.faces.len())
    }

    fn face_vertices(&self, face: usize, out: &mut Vec<usize>) {
        out.clear();
        if self.faces.is_empty() {
            out.extend(0..self.vertices.len());
        } else {
            out.extend_from_slice(&self.faces[face]);
        }
    }
}

/// A raster stored as RGBA values, in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRaster {
    pub width: u32,
    pub height: u32,
    pub alpha: bool,
    pub rgba: Vec<f32>,
}

impl MemoryRaster {
    /// Creates a raster where every pixel has the same value.
    pub fn constant(width: u32, height: u32, rgba: [f32; 4], alpha: bool) -> Self {
        let texels = width as usize * height as usize;
        MemoryRaster {
            width,
            height,
            alpha,
            rgba: rgba.iter().copied().cycle().take(texels * 4).collect(),
        }
    }

    /// Creates a raster by evaluating `f(x, y)` for each pixel.
    pub fn from_fn<F: Fn(u32, u32) -> [f32; 4]>(width: u32, height: u32, alpha: bool, f: F) -> Self {
        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                rgba.extend_from_slice(&f(x, y));
            }
        }
        MemoryRaster {
            width,
            height,
            alpha,
            rgba,
        }
    }
}

impl HostRaster for MemoryRaster {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn has_alpha(&self) -> bool {
        self.alpha
    }

    fn probe(&self, x: u32, y: u32) -> [f32; 4] {
        // outside the data window the host returns black
        if x >= self.width || y >= self.height {
            return [0.0; 4];
        }
        let start = (y as usize * self.width as usize + x as usize) * 4;
        match self.rgba.get(start..start + 4) {
            Some(px) => [px[0], px[1], px[2], px[3]],
            None => [0.0; 4],
        }
    }

    fn fetch_plane(&self, channels: Channels) -> Vec<f32> {
        let stride = channels.count();
        self.rgba
            .chunks_exact(4)
            .flat_map(|px| px[..stride].iter().copied())
            .collect()
    }
}

/// A geometry object with owned points, attributes and primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryObject {
    pub name: String,
    pub points: Vec<Point3<f32>>,
    pub primitives: Vec<MemoryPrimitive>,
    pub material: Option<MemoryRaster>,
    pub matrix: [[f32; 4]; 4],
    attributes: FnvHashMap<String, (AttributeGroup, usize, Vec<f32>)>,
    vertex_count: usize,
}

impl MemoryObject {
    /// Creates an object with the given points, no primitives and an identity matrix.
    pub fn new(name: &str, points: Vec<Point3<f32>>) -> Self {
        MemoryObject {
            name: name.to_string(),
            points,
            primitives: Vec::new(),
            material: None,
            matrix: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
            attributes: FnvHashMap::default(),
            vertex_count: 0,
        }
    }

    /// Appends a single face primitive.
    pub fn push_polygon(&mut self, vertices: &[u32]) {
        self.push_primitive(vertices, Vec::new());
    }

    /// Appends a primitive made of several faces, each one listing primitive-local vertices.
    pub fn push_primitive(&mut self, vertices: &[u32], faces: Vec<Vec<usize>>) {
        self.primitives.push(MemoryPrimitive {
            vertices: vertices.to_vec(),
            vertex_offset: self.vertex_count,
            faces,
        });
        self.vertex_count += vertices.len();
    }

    /// Adds or replaces an attribute.
    pub fn set_attribute(&mut self, name: &str, group: AttributeGroup, components: usize, data: Vec<f32>) {
        self.attributes
            .insert(name.to_string(), (group, components, data));
    }

    /// Total number of primitive vertices, the length expected for vertex attributes.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

impl HostObject for MemoryObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn points(&self) -> &[Point3<f32>] {
        &self.points
    }

    fn attribute(&self, name: &str) -> Option<Attribute<'_>> {
        self.attributes
            .get(name)
            .map(|(group, components, data)| Attribute {
                group: *group,
                components: *components,
                data,
            })
    }

    fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    fn primitive(&self, index: usize) -> &dyn HostPrimitive {
        &self.primitives[index]
    }

    fn material(&self) -> Option<&dyn HostRaster> {
        self.material.as_ref().map(|m| m as &dyn HostRaster)
    }

    fn matrix(&self) -> [[f32; 4]; 4] {
        self.matrix
    }
}

/// A geometry node, holding lights and objects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryGeometry {
    pub lights: Vec<MemoryLight>,
    pub objects: Vec<MemoryObject>,
    /// Point group signature advertised to the converter. None to let it compute one.
    pub points_signature: Option<u64>,
}

impl HostGeometry for MemoryGeometry {
    fn lights(&self) -> Vec<&dyn HostLight> {
        self.lights.iter().map(|l| l as &dyn HostLight).collect()
    }

    fn objects(&self) -> Vec<&dyn HostObject> {
        self.objects.iter().map(|o| o as &dyn HostObject).collect()
    }

    fn points_signature(&self) -> Option<u64> {
        self.points_signature
    }
}

impl HostNode for MemoryGeometry {
    fn as_geometry(&self) -> Option<&dyn HostGeometry> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{Knobs, MemoryObject, MemoryRaster};
    use crate::host::{Channels, HostObject, HostRaster, ParamSource};
    use cgmath::{Point3, Vector3 as Vec3};

    #[test]
    fn knobs_components() {
        let mut knobs = Knobs::new();
        knobs.set("translate", &[1.0, 2.0]);
        assert_eq!(knobs.get("translate"), Some(&[1.0, 2.0][..]));
        assert_eq!(knobs.param("translate", 1), Some(2.0));
        assert_eq!(knobs.vector3("translate"), None);
        knobs.set("translate", &[1.0, 2.0, 3.0]);
        assert_eq!(knobs.vector3("translate"), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(knobs.get("rotate"), None);
    }

    #[test]
    fn vertex_offsets_accumulate() {
        let mut obj = MemoryObject::new("obj", vec![Point3::new(0.0, 0.0, 0.0); 6]);
        obj.push_polygon(&[0, 1, 2]);
        obj.push_primitive(&[2, 3, 4, 5], vec![vec![0, 1, 2], vec![0, 2, 3]]);
        obj.push_polygon(&[3, 4, 5]);
        assert_eq!(obj.primitive(0).vertex_offset(), 0);
        assert_eq!(obj.primitive(1).vertex_offset(), 3);
        assert_eq!(obj.primitive(2).vertex_offset(), 7);
        assert_eq!(obj.vertex_count(), 10);
        assert_eq!(obj.primitive(0).face_count(), 1);
        assert_eq!(obj.primitive(1).face_count(), 2);
    }

    #[test]
    fn single_face_spans_every_vertex() {
        let mut obj = MemoryObject::new("obj", vec![Point3::new(0.0, 0.0, 0.0); 4]);
        obj.push_polygon(&[3, 2, 1, 0]);
        let mut out = vec![9, 9];
        obj.primitive(0).face_vertices(0, &mut out);
        assert_eq!(out, vec![0, 1, 2, 3]);
    }

    #[test]
    fn raster_plane_drops_alpha() {
        let raster = MemoryRaster::from_fn(2, 1, false, |x, _| [x as f32, 0.5, 0.25, 0.0]);
        assert_eq!(
            raster.fetch_plane(Channels::Rgb),
            vec![0.0, 0.5, 0.25, 1.0, 0.5, 0.25]
        );
        assert_eq!(raster.fetch_plane(Channels::Rgba).len(), 8);
    }

    #[test]
    fn raster_probe_out_of_window() {
        let raster = MemoryRaster::constant(1, 1, [1.0, 1.0, 1.0, 1.0], true);
        assert_eq!(raster.probe(0, 0), [1.0; 4]);
        assert_eq!(raster.probe(1, 0), [0.0; 4]);
    }
}
