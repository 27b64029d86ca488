use crate::shape::{MeshTriangle, RenderMesh};

/// Append-only triangle buffer, bucketed by submesh.
///
/// Triangles are stored with their own attributes and are only turned into an
/// indexed mesh by [`MeshAccumulator::finalize`].
#[derive(Clone, Debug, Default)]
pub struct MeshAccumulator {
    buckets: Vec<Vec<MeshTriangle>>,
}

impl MeshAccumulator {
    /// An empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty accumulator with `num_submeshes` empty buckets preallocated.
    pub fn with_submeshes(num_submeshes: usize) -> Self {
        MeshAccumulator {
            buckets: vec![Vec::new(); num_submeshes],
        }
    }

    /// Appends a triangle to the bucket of its submesh.
    pub fn add(&mut self, triangle: MeshTriangle) {
        let bucket = triangle.submesh as usize;

        if self.buckets.len() <= bucket {
            self.buckets.resize_with(bucket + 1, Vec::new);
        }

        self.buckets[bucket].push(triangle);
    }

    /// Appends every triangle of `triangles`.
    pub fn extend(&mut self, triangles: impl IntoIterator<Item = MeshTriangle>) {
        for tri in triangles {
            self.add(tri);
        }
    }

    /// The total number of triangles added so far.
    pub fn num_triangles(&self) -> usize {
        self.buckets.iter().map(|b| b.len()).sum()
    }

    /// The number of buckets, i.e., one plus the highest submesh index seen.
    pub fn num_submeshes(&self) -> usize {
        self.buckets.len()
    }

    /// Builds the render mesh holding every accumulated triangle.
    ///
    /// Each triangle gets three vertices of its own; no vertex is shared. The
    /// result has one submesh per bucket, empty ones included, and both normals
    /// and texture coordinates.
    pub fn finalize(self) -> RenderMesh {
        let num_vertices = self.num_triangles() * 3;
        let mut vertices = Vec::with_capacity(num_vertices);
        let mut normals = Vec::with_capacity(num_vertices);
        let mut uvs = Vec::with_capacity(num_vertices);
        let mut submeshes = Vec::with_capacity(self.buckets.len());

        for bucket in self.buckets {
            let mut indices = Vec::with_capacity(bucket.len());

            for tri in bucket {
                let base = vertices.len() as u32;
                vertices.extend_from_slice(&tri.vertices);
                normals.extend_from_slice(&tri.normals);
                uvs.extend_from_slice(&tri.uvs);
                indices.push([base, base + 1, base + 2]);
            }

            submeshes.push(indices);
        }

        RenderMesh::new(vertices, submeshes)
            .with_normals(normals)
            .with_uvs(uvs)
    }
}
