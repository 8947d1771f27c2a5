use crate::host::{HostGeometry, HostObject};
use cgmath::Point3;
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Seed for the hasher used to fingerprint the geometry.
const HASHER_SEED: u64 = 0x368262AAA1DEB64D;

/// Returns the hasher used for the structural hash.
fn get_hasher() -> impl Hasher {
    XxHash64::with_seed(HASHER_SEED)
}

/// Feeds the coordinates of points to a [Hasher].
pub struct PointHasher<T: Hasher> {
    hasher: T,
}

impl<T: Hasher> PointHasher<T> {
    pub fn new(hasher: T) -> PointHasher<T> {
        PointHasher { hasher }
    }

    /// Hashes the exact bit pattern of every coordinate, in order.
    pub fn hash(mut self, points: &[Point3<f32>]) -> u64 {
        self.hasher.write_usize(points.len());
        for point in points {
            self.hasher.write(&point.x.to_le_bytes());
            self.hasher.write(&point.y.to_le_bytes());
            self.hasher.write(&point.z.to_le_bytes());
        }
        self.hasher.finish()
    }
}

/// Computes a signature of the given points, suitable as point group signature.
pub fn points_signature(points: &[Point3<f32>]) -> u64 {
    PointHasher::new(get_hasher()).hash(points)
}

/// Computes a coarse fingerprint of the geometry set.
///
/// The fingerprint combines the number of objects with the point group signature, either
/// supplied by the host or computed from the points of the first object. It is meant to detect
/// structural changes only, and ignores materials, attributes and lights.
pub fn structural_hash(geometry: &dyn HostGeometry, objects: &[&dyn HostObject]) -> u64 {
    let signature = geometry.points_signature().unwrap_or_else(|| {
        objects
            .first()
            .map(|obj| points_signature(obj.points()))
            .unwrap_or(0)
    });
    let mut hasher = get_hasher();
    hasher.write_usize(objects.len());
    hasher.write_u64(signature);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::{points_signature, structural_hash};
    use crate::host::{HostGeometry, MemoryGeometry, MemoryObject};
    use cgmath::Point3;

    fn geometry(objects: usize) -> MemoryGeometry {
        let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 2.0, 3.0)];
        MemoryGeometry {
            lights: Vec::new(),
            objects: (0..objects)
                .map(|i| MemoryObject::new(&format!("obj{}", i), points.clone()))
                .collect(),
            points_signature: None,
        }
    }

    fn hash_of(geo: &MemoryGeometry) -> u64 {
        structural_hash(geo, &geo.objects())
    }

    #[test]
    fn stable() {
        assert_eq!(hash_of(&geometry(2)), hash_of(&geometry(2)));
        let points = [Point3::new(0.5, 0.5, 0.5)];
        assert_eq!(points_signature(&points), points_signature(&points));
    }

    #[test]
    fn object_count_changes_hash() {
        assert_ne!(hash_of(&geometry(1)), hash_of(&geometry(2)));
    }

    #[test]
    fn first_object_points_change_hash() {
        let base = geometry(2);
        let mut moved = base.clone();
        moved.objects[0].points[1].y = 2.5;
        assert_ne!(hash_of(&base), hash_of(&moved));
    }

    #[test]
    fn other_objects_ignored() {
        let base = geometry(2);
        let mut moved = base.clone();
        moved.objects[1].points[1].y = 2.5;
        assert_eq!(hash_of(&base), hash_of(&moved));
    }

    #[test]
    fn host_signature_preferred() {
        let mut base = geometry(2);
        base.points_signature = Some(42);
        let mut moved = base.clone();
        moved.objects[0].points[1].y = 2.5;
        assert_eq!(hash_of(&base), hash_of(&moved));
        moved.points_signature = Some(43);
        assert_ne!(hash_of(&base), hash_of(&moved));
    }
}
