//! Geometric records manipulated by the slicing pipeline.

pub use self::cut_plane::{CutPlane, Side};
pub use self::mesh_triangle::MeshTriangle;
pub use self::render_mesh::{AttributeFallback, IndexFormat, RenderMesh};

mod cut_plane;
mod mesh_triangle;
mod render_mesh;
