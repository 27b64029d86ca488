//! Renderable triangle mesh partitioned into submeshes.

use crate::math::{Point, Real, TexCoord, Vector, DEFAULT_EPSILON};
use crate::parry::bounding_volume::Aabb;
use crate::shape::MeshTriangle;
use crate::utils;

/// The width of the indices used to render a mesh.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum IndexFormat {
    /// 16-bit indices.
    #[default]
    U16,
    /// 32-bit indices.
    U32,
}

impl IndexFormat {
    /// The narrowest format able to address `num_vertices` vertices, switching to
    /// [`IndexFormat::U32`] once `num_vertices` exceeds `u16_vertex_limit`.
    #[inline]
    pub fn for_vertex_count(num_vertices: usize, u16_vertex_limit: usize) -> Self {
        if num_vertices > u16_vertex_limit.min(u16::MAX as usize + 1) {
            IndexFormat::U32
        } else {
            IndexFormat::U16
        }
    }
}

bitflags::bitflags! {
    /// The vertex attributes [`RenderMesh::gather_triangle`] had to substitute
    /// because they were missing from the mesh.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct AttributeFallback: u8 {
        /// The normals were missing and replaced by the face normal.
        const NORMALS = 1;
        /// The texture coordinates were missing and replaced by zeros.
        const UVS = 1 << 1;
    }
}

/// A triangle mesh with per-vertex attributes, rendered in several submeshes.
///
/// Each submesh is an index buffer into the shared vertex buffer and is drawn
/// with its own material slot. Normals and texture coordinates are optional:
/// an empty attribute buffer means the attribute is absent. Nothing is validated
/// on construction; consumers tolerate out-of-range indices and short attribute
/// buffers.
#[derive(Clone, Debug)]
pub struct RenderMesh {
    vertices: Vec<Point<Real>>,
    normals: Vec<Vector<Real>>,
    uvs: Vec<TexCoord<Real>>,
    submeshes: Vec<Vec<[u32; 3]>>,
    index_format: IndexFormat,
    aabb: Aabb,
}

impl Default for RenderMesh {
    fn default() -> Self {
        Self::new(vec![], vec![])
    }
}

impl RenderMesh {
    /// Creates a mesh from its vertex buffer and one index buffer per submesh.
    ///
    /// The bounds are computed immediately. Normals and texture coordinates are
    /// left empty, see [`Self::with_normals`] and [`Self::with_uvs`].
    pub fn new(vertices: Vec<Point<Real>>, submeshes: Vec<Vec<[u32; 3]>>) -> Self {
        let mut result = RenderMesh {
            vertices,
            normals: vec![],
            uvs: vec![],
            submeshes,
            index_format: IndexFormat::U16,
            aabb: Aabb::new(Point::origin(), Point::origin()),
        };
        result.recompute_aabb();
        result
    }

    /// Sets the per-vertex normals of this mesh.
    pub fn with_normals(mut self, normals: Vec<Vector<Real>>) -> Self {
        self.normals = normals;
        self
    }

    /// Sets the per-vertex texture coordinates of this mesh.
    pub fn with_uvs(mut self, uvs: Vec<TexCoord<Real>>) -> Self {
        self.uvs = uvs;
        self
    }

    /// The vertex buffer.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The per-vertex normals. Empty if the mesh has none.
    #[inline]
    pub fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }

    /// The per-vertex texture coordinates. Empty if the mesh has none.
    #[inline]
    pub fn uvs(&self) -> &[TexCoord<Real>] {
        &self.uvs
    }

    /// The index buffers of every submesh.
    #[inline]
    pub fn submeshes(&self) -> &[Vec<[u32; 3]>] {
        &self.submeshes
    }

    /// The number of submeshes, including empty ones.
    #[inline]
    pub fn num_submeshes(&self) -> usize {
        self.submeshes.len()
    }

    /// The number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The total number of triangles across every submesh.
    pub fn num_triangles(&self) -> usize {
        self.submeshes.iter().map(|s| s.len()).sum()
    }

    /// Whether this mesh has no triangle at all.
    pub fn is_empty(&self) -> bool {
        self.submeshes.iter().all(|s| s.is_empty())
    }

    /// The width of the indices used to render this mesh.
    #[inline]
    pub fn index_format(&self) -> IndexFormat {
        self.index_format
    }

    /// Sets the width of the indices used to render this mesh.
    #[inline]
    pub fn set_index_format(&mut self, format: IndexFormat) {
        self.index_format = format;
    }

    /// The cached bounds of this mesh.
    ///
    /// Call [`Self::recompute_aabb`] after mutating the vertex buffer.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Mutable access to every buffer at once, for in-place cleanup passes.
    ///
    /// The cached bounds are not updated.
    #[inline]
    pub fn buffers_mut(
        &mut self,
    ) -> (
        &mut Vec<Point<Real>>,
        &mut Vec<Vector<Real>>,
        &mut Vec<TexCoord<Real>>,
        &mut Vec<Vec<[u32; 3]>>,
    ) {
        (
            &mut self.vertices,
            &mut self.normals,
            &mut self.uvs,
            &mut self.submeshes,
        )
    }

    /// Removes every vertex, attribute and submesh.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.normals.clear();
        self.uvs.clear();
        self.submeshes.clear();
        self.recompute_aabb();
    }

    /// Recomputes the bounds from the vertex buffer.
    ///
    /// An empty mesh gets a zero-sized box at the origin.
    pub fn recompute_aabb(&mut self) {
        let mut vertices = self.vertices.iter();

        self.aabb = match vertices.next() {
            Some(first) => {
                let mut mins = *first;
                let mut maxs = *first;

                for pt in vertices {
                    mins = mins.inf(pt);
                    maxs = maxs.sup(pt);
                }

                Aabb::new(mins, maxs)
            }
            None => Aabb::new(Point::origin(), Point::origin()),
        };
    }

    /// Recomputes smooth per-vertex normals from the faces referencing each vertex.
    ///
    /// Face normals are area-weighted. Vertices not referenced by any valid
    /// triangle get the `+Y` normal.
    pub fn recompute_normals(&mut self) {
        let mut normals = vec![Vector::zeros(); self.vertices.len()];

        for idx in self.submeshes.iter().flatten() {
            let [ia, ib, ic] = idx.map(|i| i as usize);

            if let (Some(a), Some(b), Some(c)) = (
                self.vertices.get(ia),
                self.vertices.get(ib),
                self.vertices.get(ic),
            ) {
                let cross = utils::face_cross([a, b, c]);
                normals[ia] += cross;
                normals[ib] += cross;
                normals[ic] += cross;
            }
        }

        for n in &mut normals {
            *n = n
                .try_normalize(DEFAULT_EPSILON)
                .unwrap_or_else(Vector::y);
        }

        self.normals = normals;
    }

    /// Reads the triangle `idx` of this mesh with its attributes.
    ///
    /// Returns `None` if any index is out of range of the vertex buffer. Missing
    /// normals are replaced by the face normal (or `+Y` for a degenerate face) and
    /// missing texture coordinates by zeros; the substituted attributes are
    /// reported in the returned flags.
    pub fn gather_triangle(
        &self,
        idx: [u32; 3],
        submesh: u32,
    ) -> Option<(MeshTriangle, AttributeFallback)> {
        let idx = idx.map(|i| i as usize);
        let vertices = [
            *self.vertices.get(idx[0])?,
            *self.vertices.get(idx[1])?,
            *self.vertices.get(idx[2])?,
        ];
        let mut fallback = AttributeFallback::empty();

        let normals = match (
            self.normals.get(idx[0]),
            self.normals.get(idx[1]),
            self.normals.get(idx[2]),
        ) {
            (Some(a), Some(b), Some(c)) => [*a, *b, *c],
            _ => {
                fallback |= AttributeFallback::NORMALS;
                let [a, b, c] = &vertices;
                let n = utils::ccw_face_normal([a, b, c])
                    .map(|n| n.into_inner())
                    .unwrap_or_else(Vector::y);
                [n; 3]
            }
        };

        let uvs = match (
            self.uvs.get(idx[0]),
            self.uvs.get(idx[1]),
            self.uvs.get(idx[2]),
        ) {
            (Some(a), Some(b), Some(c)) => [*a, *b, *c],
            _ => {
                fallback |= AttributeFallback::UVS;
                [TexCoord::zeros(); 3]
            }
        };

        Some((
            MeshTriangle::new(vertices, normals, uvs, submesh),
            fallback,
        ))
    }
}
