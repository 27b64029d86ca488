/// Errors preventing a slicing operation from starting.
///
/// None of these leave the sliced object modified. Geometric degeneracies met
/// once the slice is underway are not errors: they are recovered from locally
/// and logged.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum SliceError {
    /// The object to slice has no render mesh.
    #[error("the object to slice has no mesh.")]
    MissingMesh,
    /// The cutting normal is zero, or too small to be normalized.
    #[error("the cutting plane normal is degenerate.")]
    DegenerateCutNormal,
    /// The object's transform is not invertible, typically because of a zero scale.
    #[error("the transform of the object to slice is not invertible.")]
    DegenerateTransform,
}
