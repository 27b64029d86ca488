use crate::math::Real;
use crate::transformation::CleanupOptions;

/// How the cut boundary polygon is reconstructed before being filled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CapStrategy {
    /// Sort every boundary vertex by angle around their centroid and fill the
    /// resulting single polygon.
    ///
    /// Only correct for convex cross-sections. Duplicate boundary vertices are kept.
    AngularSort,
    /// Weld the boundary segment endpoints and walk them into one polygon per
    /// connected chain.
    #[default]
    EdgeChaining,
}

/// The submesh the cap triangles are written to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CapSubmesh {
    /// A new submesh appended after the source mesh's submeshes, so caps get
    /// their own material slot.
    #[default]
    Dedicated,
    /// A fixed, existing submesh index.
    Index(u32),
}

impl CapSubmesh {
    /// The submesh index caps are written to when slicing a mesh with
    /// `num_source_submeshes` submeshes.
    #[inline]
    pub fn resolve(self, num_source_submeshes: usize) -> u32 {
        match self {
            CapSubmesh::Dedicated => num_source_submeshes as u32,
            CapSubmesh::Index(i) => i,
        }
    }
}

/// Parameters of a slicing operation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SliceOptions {
    /// Below this value, `|n · (b - a)|` is considered zero and the edge `[a, b]`
    /// parallel to the cutting plane. The edge midpoint is used instead.
    pub parallel_epsilon: Real,
    /// How the cap polygon is reconstructed.
    pub cap_strategy: CapStrategy,
    /// The submesh receiving the cap triangles.
    pub cap_submesh: CapSubmesh,
    /// Scale applied to plane-projected positions to get cap texture coordinates.
    pub cap_uv_scale: Real,
    /// Boundary vertices closer than this are merged when chaining segments.
    ///
    /// This is an absolute distance in the mesh local-space. It is lowered to a
    /// thousandth of the cut outline size for outlines smaller than that.
    pub weld_tolerance: Real,
    /// Upper bound on the number of steps of the edge-chaining walk.
    ///
    /// The walk is always allowed one step per boundary segment plus one, so this
    /// only limits inputs made of many disconnected chains.
    pub chain_iteration_limit: usize,
    /// Meshes with more vertices than this use 32-bit indices.
    pub u16_vertex_limit: usize,
    /// Suffix appended to the source object's name to name the new object.
    pub name_suffix: String,
    /// Cleanup pass applied to both halves.
    pub cleanup: CleanupOptions,
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self {
            parallel_epsilon: 1.0e-6,
            cap_strategy: CapStrategy::EdgeChaining,
            cap_submesh: CapSubmesh::Dedicated,
            cap_uv_scale: 0.1,
            weld_tolerance: 1.0e-4,
            chain_iteration_limit: 10_000,
            u16_vertex_limit: 65_000,
            name_suffix: String::from("_Right"),
            cleanup: CleanupOptions::default(),
        }
    }
}
