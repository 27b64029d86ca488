/// Errors preventing a mesh from being cleaned up.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum MeshCleanupError {
    /// A per-vertex attribute buffer is neither empty nor as long as the vertex buffer.
    ///
    /// Triangles cannot be validated against attributes that do not match the
    /// vertices, so the mesh is left untouched.
    #[error("the {attribute} buffer has {len} elements but the mesh has {num_vertices} vertices.")]
    AttributeLengthMismatch {
        /// The name of the mismatching attribute.
        attribute: &'static str,
        /// The length of the attribute buffer.
        len: usize,
        /// The length of the vertex buffer.
        num_vertices: usize,
    },
}
