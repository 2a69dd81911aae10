//! The indexed triangle-soup solid.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh representing one generated solid.
///
/// Faces are counter-clockwise when viewed from outside (normals point
/// out). Indices are `u32`; generated solids stay far below that limit.
///
/// A `Solid` is a part handed to the downstream boolean kernel, not a
/// boolean result itself: merging two solids concatenates their geometry
/// and relies on the deliberate epsilon overlaps between parts for the
/// kernel's union to be robust.
///
/// # Example
///
/// ```
/// use case_loft::Solid;
/// use nalgebra::Point3;
///
/// let mut solid = Solid::new();
/// let a = solid.push_point(Point3::new(0.0, 0.0, 0.0));
/// let b = solid.push_point(Point3::new(1.0, 0.0, 0.0));
/// let c = solid.push_point(Point3::new(0.0, 1.0, 0.0));
/// solid.push_face([a, b, c]);
///
/// assert_eq!(solid.point_count(), 3);
/// assert_eq!(solid.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solid {
    /// Point positions.
    pub points: Vec<Point3<f64>>,
    /// Triangular faces as indices into `points`, CCW from outside.
    pub faces: Vec<[u32; 3]>,
}

impl Solid {
    /// Create an empty solid.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create an empty solid with preallocated capacity.
    #[must_use]
    pub fn with_capacity(points: usize, faces: usize) -> Self {
        Self {
            points: Vec::with_capacity(points),
            faces: Vec::with_capacity(faces),
        }
    }

    /// Number of points.
    #[inline]
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the solid has no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Append a point, returning its index.
    #[inline]
    pub fn push_point(&mut self, point: Point3<f64>) -> u32 {
        let index = self.points.len() as u32;
        self.points.push(point);
        index
    }

    /// Append a face.
    #[inline]
    pub fn push_face(&mut self, face: [u32; 3]) {
        self.faces.push(face);
    }

    /// Append another solid's geometry, offsetting its indices.
    pub fn merge(&mut self, other: &Self) {
        let offset = self.points.len() as u32;
        self.points.extend_from_slice(&other.points);
        self.faces.reserve(other.faces.len());
        for face in &other.faces {
            self.faces
                .push([face[0] + offset, face[1] + offset, face[2] + offset]);
        }
    }

    /// Concatenate many solids into one.
    ///
    /// The combined geometry is reserved up front and appended part by
    /// part. Zero parts yield the empty solid: an absent part is valid
    /// sparse data, not an error.
    #[must_use]
    pub fn union_all<'a, I>(parts: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let parts: Vec<&Self> = parts.into_iter().collect();
        let total_points = parts.iter().map(|s| s.points.len()).sum();
        let total_faces = parts.iter().map(|s| s.faces.len()).sum();

        let mut combined = Self::with_capacity(total_points, total_faces);
        for part in parts {
            combined.merge(part);
        }
        combined
    }

    /// Signed volume via the divergence theorem.
    ///
    /// Positive for a closed solid with outward (CCW) winding. Only
    /// meaningful for closed meshes; used by tests and sanity checks.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.faces
            .iter()
            .map(|face| {
                let v0 = self.points[face[0] as usize].coords;
                let v1 = self.points[face[1] as usize].coords;
                let v2 = self.points[face[2] as usize].coords;
                v0.dot(&v1.cross(&v2)) / 6.0
            })
            .sum()
    }

    /// Absolute volume.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Unit tetrahedron with outward winding.
    fn unit_tetrahedron() -> Solid {
        let mut solid = Solid::new();
        let o = solid.push_point(Point3::new(0.0, 0.0, 0.0));
        let x = solid.push_point(Point3::new(1.0, 0.0, 0.0));
        let y = solid.push_point(Point3::new(0.0, 1.0, 0.0));
        let z = solid.push_point(Point3::new(0.0, 0.0, 1.0));

        solid.push_face([o, y, x]);
        solid.push_face([o, x, z]);
        solid.push_face([o, z, y]);
        solid.push_face([x, y, z]);
        solid
    }

    #[test]
    fn empty_solid() {
        let solid = Solid::new();
        assert!(solid.is_empty());
        assert_eq!(solid.point_count(), 0);
        assert_relative_eq!(solid.signed_volume(), 0.0);
    }

    #[test]
    fn tetrahedron_volume() {
        let tet = unit_tetrahedron();
        assert_relative_eq!(tet.signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn merge_offsets_indices() {
        let mut a = unit_tetrahedron();
        let b = unit_tetrahedron();
        a.merge(&b);

        assert_eq!(a.point_count(), 8);
        assert_eq!(a.face_count(), 8);
        // Second copy's faces reference the second copy's points.
        assert_eq!(a.faces[4], [4, 6, 5]);
        // Concatenation doubles the enclosed volume.
        assert_relative_eq!(a.signed_volume(), 2.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn union_all_concatenates() {
        let parts = vec![unit_tetrahedron(), unit_tetrahedron(), unit_tetrahedron()];
        let combined = Solid::union_all(&parts);

        assert_eq!(combined.point_count(), 12);
        assert_eq!(combined.face_count(), 12);
    }

    #[test]
    fn union_all_of_nothing_is_empty() {
        let combined = Solid::union_all(std::iter::empty());
        assert!(combined.is_empty());
    }
}
