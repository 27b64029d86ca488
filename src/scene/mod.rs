//! Minimal scene model hosting the meshes being sliced.

pub use self::chunks::ChunkSet;
pub use self::collider::Collider;
pub use self::object::{Material, SceneObject, Transform};

mod chunks;
mod collider;
mod object;
