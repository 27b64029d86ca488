//! Plane slicing of render meshes and scene objects.
//!
//! A slice goes through the following steps:
//! 1. Every triangle is classified against the cutting plane. Triangles crossing
//!    it are split by [`split_triangle`], which also yields a boundary segment.
//! 2. The boundary segments are turned into cap polygons by the [`CapBuilder`].
//! 3. Both halves are assembled by a [`MeshAccumulator`] and cleaned of
//!    degenerate triangles.
//! 4. The [`Slicer`] assigns the halves to the original object and a new one.

pub use self::accumulator::MeshAccumulator;
pub use self::cap::{CapBuilder, CapTriangles};
pub use self::slice_error::SliceError;
pub use self::slice_options::{CapStrategy, CapSubmesh, SliceOptions};
pub use self::slicer::{slice, slice_mesh, SliceReport, SliceStage, SlicedMeshes, Slicer};
pub use self::split_triangle::{
    split_triangle, BoundarySegment, BoundaryVertex, SplitResult, SplitTriangles,
};

mod accumulator;
mod cap;
mod slice_error;
mod slice_options;
mod slicer;
mod split_triangle;
