use crate::error::ConvertError;
use crate::host::{Attribute, AttributeGroup, HostObject, HostPrimitive, UV_ATTRIBUTE};
use crate::Material;
use cgmath::{Matrix4, Point2, Point3};

/// Polygonal geometry in the layout expected by the renderer.
///
/// Polygons are stored as a flat list of point indices. `polygon_offsets[i]` is the index of
/// the first vertex *after* polygon `i`, so the vertices of polygon `i` are in the range
/// `polygon_offsets[i-1]..polygon_offsets[i]` (starting from 0 for the first polygon).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryInstance {
    pub points: Vec<Point3<f32>>,
    pub uvs: Vec<Point2<f32>>,
    pub polygon_offsets: Vec<u32>,
    pub polygon_indices: Vec<u32>,
    /// Index in `uvs` of each vertex of `polygon_indices`. Empty if the geometry has no UVs.
    pub uv_indices: Vec<u32>,
    pub per_vertex_uvs: bool,
}

impl GeometryInstance {
    pub fn polygon_count(&self) -> usize {
        self.polygon_offsets.len()
    }

    /// Returns the point indices of the polygon at the given index.
    pub fn polygon(&self, index: usize) -> &[u32] {
        let start = if index == 0 {
            0
        } else {
            self.polygon_offsets[index - 1] as usize
        };
        let end = self.polygon_offsets[index] as usize;
        &self.polygon_indices[start..end]
    }

    /// Iterates the point indices of every polygon.
    pub fn polygons(&self) -> impl Iterator<Item = &[u32]> + '_ {
        (0..self.polygon_count()).map(move |i| self.polygon(i))
    }
}

/// A renderable object: geometry, surface and placement in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub transform: Matrix4<f32>,
    pub geometry: GeometryInstance,
    pub material: Material,
}

/// How the UV attribute of an object is indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UvTopology {
    /// One UV per point: UV indices are the point indices.
    Points,
    /// One UV per primitive vertex.
    Vertices,
}

/// Returns the UV attribute of an object, if it is usable for texturing.
pub(crate) fn uv_attribute(object: &dyn HostObject) -> Option<(Attribute<'_>, UvTopology)> {
    let attr = object.attribute(UV_ATTRIBUTE)?;
    if attr.components < 2 || attr.is_empty() {
        return None;
    }
    match attr.group {
        AttributeGroup::Points => Some((attr, UvTopology::Points)),
        AttributeGroup::Vertices => Some((attr, UvTopology::Vertices)),
        group => {
            log::warn!(
                "Object {}: ignoring uv attribute bound to {:?}",
                object.name(),
                group
            );
            None
        }
    }
}

/// Accumulates polygons, validating each index before recording it.
struct PolygonWriter {
    object: usize,
    points: usize,
    uvs: Option<(UvTopology, usize)>,
    offsets: Vec<u32>,
    indices: Vec<u32>,
    uv_indices: Vec<u32>,
    dropped: usize,
}

impl PolygonWriter {
    /// Emits a polygon made of the given primitive-local vertices, in the given order.
    fn push<I>(
        &mut self,
        prim_index: usize,
        prim: &dyn HostPrimitive,
        local: I,
        len: usize,
    ) -> Result<(), ConvertError>
    where
        I: Iterator<Item = usize>,
    {
        if len < 3 {
            self.dropped += 1;
            return Ok(());
        }
        let vertices = prim.vertices();
        for vertex in local {
            let index = *vertices
                .get(vertex)
                .ok_or_else(|| ConvertError::VertexIndex {
                    object: self.object,
                    primitive: prim_index,
                    vertex,
                    vertices: vertices.len(),
                })?;
            if index as usize >= self.points {
                return Err(ConvertError::PointIndex {
                    object: self.object,
                    primitive: prim_index,
                    index,
                    points: self.points,
                });
            }
            self.indices.push(index);
            if let Some((topology, uvs)) = self.uvs {
                let uv_index = match topology {
                    UvTopology::Points => index as usize,
                    UvTopology::Vertices => prim.vertex_offset() + vertex,
                };
                if uv_index >= uvs {
                    return Err(ConvertError::UvIndex {
                        object: self.object,
                        primitive: prim_index,
                        index: uv_index,
                        uvs,
                    });
                }
                self.uv_indices.push(uv_index as u32);
            }
        }
        self.offsets.push(self.indices.len() as u32);
        Ok(())
    }
}

/// Converts the points, UVs and primitives of a host object.
///
/// Single face primitives keep the host vertex order. Primitives made of several faces are
/// split into one polygon per face, with the vertex order reversed to match the renderer
/// winding. Polygons with less than three vertices are discarded.
///
/// `object_index` is used only to report errors.
pub(crate) fn build_geometry(
    object: &dyn HostObject,
    object_index: usize,
) -> Result<GeometryInstance, ConvertError> {
    let points = object.points().to_vec();
    let uv_attr = uv_attribute(object);
    let uvs = match uv_attr {
        Some((attr, _)) => (0..attr.len())
            .filter_map(|i| attr.element(i))
            .map(|uv| Point2::new(uv[0], uv[1]))
            .collect(),
        None => Vec::new(),
    };
    let prim_count = object.primitive_count();
    let mut writer = PolygonWriter {
        object: object_index,
        points: points.len(),
        uvs: uv_attr.map(|(_, topology)| (topology, uvs.len())),
        offsets: Vec::with_capacity(prim_count),
        indices: Vec::new(),
        uv_indices: Vec::new(),
        dropped: 0,
    };
    // reused for every sub-face
    let mut face = Vec::new();
    for prim_index in 0..prim_count {
        let prim = object.primitive(prim_index);
        let faces = prim.face_count();
        if faces == 1 {
            let len = prim.vertices().len();
            writer.push(prim_index, prim, 0..len, len)?;
        } else {
            for face_index in 0..faces {
                prim.face_vertices(face_index, &mut face);
                writer.push(prim_index, prim, face.iter().rev().copied(), face.len())?;
            }
        }
    }
    if writer.dropped > 0 {
        log::debug!(
            "Object {}: dropped {} polygons with less than 3 vertices",
            object.name(),
            writer.dropped
        );
    }
    let per_vertex_uvs = writer.uvs.is_some();
    log::debug!(
        "Object {}: {} points, {} uvs, {} polygons",
        object.name(),
        points.len(),
        uvs.len(),
        writer.offsets.len()
    );
    Ok(GeometryInstance {
        points,
        uvs,
        polygon_offsets: writer.offsets,
        polygon_indices: writer.indices,
        uv_indices: writer.uv_indices,
        per_vertex_uvs,
    })
}
