/*!
cleave
======

**cleave** slices triangle meshes with a plane at runtime. Each cut yields two
closed pieces: the triangles crossing the plane are split, the cut
cross-section is sealed with cap triangles, and degenerate slivers are
cleaned up afterwards. Per-submesh material assignment survives the cut.

The entry point is [`slice::Slicer`] (or the [`slice()`] shortcut), which
works on a [`scene::SceneObject`]. Lower-level building blocks
([`slice::split_triangle`], [`slice::CapBuilder`],
[`transformation::clean_mesh`]) are exposed for callers that manage their
own geometry.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;
#[cfg(feature = "f32")]
pub extern crate parry3d as parry;
#[cfg(feature = "f64")]
pub extern crate parry3d_f64 as parry;

pub mod scene;
pub mod shape;
pub mod slice;
pub mod transformation;
pub mod utils;

pub use crate::slice::slice;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Point3, Translation3, UnitQuaternion, UnitVector3, Vector2, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The texture-coordinate type.
    pub use Vector2 as TexCoord;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation matrix type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
