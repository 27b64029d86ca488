//! Definition of the per-triangle record exchanged by the slicing pipeline.

use crate::math::{Point, Real, TexCoord, Vector};
use crate::utils;

/// A triangle carrying its vertex attributes and the submesh it belongs to.
///
/// Vertices are in the local-space of the mesh being sliced. The three arrays
/// are always indexed consistently: `normals[i]` and `uvs[i]` belong to
/// `vertices[i]`.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct MeshTriangle {
    /// The triangle vertices.
    pub vertices: [Point<Real>; 3],
    /// The per-vertex normals.
    pub normals: [Vector<Real>; 3],
    /// The per-vertex texture coordinates.
    pub uvs: [TexCoord<Real>; 3],
    /// Index of the submesh (material slot) this triangle is rendered with.
    pub submesh: u32,
}

impl MeshTriangle {
    /// Creates a triangle from its vertices and attributes.
    #[inline]
    pub fn new(
        vertices: [Point<Real>; 3],
        normals: [Vector<Real>; 3],
        uvs: [TexCoord<Real>; 3],
        submesh: u32,
    ) -> Self {
        MeshTriangle {
            vertices,
            normals,
            uvs,
            submesh,
        }
    }

    /// `(b - a) × (c - a)` for this triangle's vertices.
    #[inline]
    pub fn face_cross(&self) -> Vector<Real> {
        let [a, b, c] = &self.vertices;
        utils::face_cross([a, b, c])
    }

    /// The sum of the three vertex normals.
    #[inline]
    pub fn normal_sum(&self) -> Vector<Real> {
        self.normals[0] + self.normals[1] + self.normals[2]
    }

    /// Reverses the winding of this triangle by swapping its first and last vertices,
    /// along with their normals and texture coordinates.
    #[inline]
    pub fn flip(&mut self) {
        self.vertices.swap(0, 2);
        self.normals.swap(0, 2);
        self.uvs.swap(0, 2);
    }

    /// Flips this triangle if its geometric normal points away from `reference`.
    ///
    /// Returns `true` if the triangle was flipped.
    #[inline]
    pub fn orient_toward(&mut self, reference: &Vector<Real>) -> bool {
        if self.face_cross().dot(reference) < 0.0 {
            self.flip();
            true
        } else {
            false
        }
    }
}
