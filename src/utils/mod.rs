//! Various unsorted geometrical and logical operators.

pub use self::basis::orthonormal_basis;
pub use self::ccw_face_normal::{ccw_face_normal, face_cross};
pub use self::center::center;
pub use self::cleanup::remove_unused_vertices;
pub use self::weld_key::WeldKey;

mod basis;
mod ccw_face_normal;
mod center;
mod cleanup;
pub mod hashmap;
mod weld_key;
