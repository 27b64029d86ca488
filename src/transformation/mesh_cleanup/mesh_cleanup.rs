use super::MeshCleanupError;
use crate::math::Real;
use crate::shape::RenderMesh;
use crate::utils;

/// Optional steps of [`clean_mesh`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CleanupFlags(u8);

bitflags::bitflags! {
    impl CleanupFlags: u8 {
        /// If set, vertices no longer referenced by any triangle are removed and
        /// the index buffers are remapped accordingly.
        const REMOVE_UNUSED_VERTICES = 1;
    }
}

/// Parameters of [`clean_mesh`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CleanupOptions {
    /// Triangles with `|(b - a) × (c - a)|²` below this value are removed.
    pub degenerate_epsilon: Real,
    /// Optional cleanup steps.
    pub flags: CleanupFlags,
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            degenerate_epsilon: 1.0e-12,
            flags: CleanupFlags::empty(),
        }
    }
}

/// What [`clean_mesh`] removed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// Triangles removed because one of their indices was out of range.
    pub invalid_triangles: usize,
    /// Triangles removed because their area was (nearly) zero.
    pub degenerate_triangles: usize,
    /// Vertices removed by [`CleanupFlags::REMOVE_UNUSED_VERTICES`].
    pub removed_vertices: usize,
    /// Whether the mesh ended up without any triangle and was cleared.
    pub cleared: bool,
}

impl CleanupReport {
    /// The total number of removed triangles.
    pub fn removed_triangles(&self) -> usize {
        self.invalid_triangles + self.degenerate_triangles
    }
}

/// Removes the invalid and degenerate triangles of every submesh of `mesh`.
///
/// Submeshes left without triangles are kept (empty) so that submesh indices
/// keep matching the material slots. If no triangle survives at all, the whole
/// mesh is cleared. The cached bounds are recomputed.
///
/// Fails without modifying the mesh if its normals or texture coordinates are
/// neither absent nor exactly one per vertex.
pub fn clean_mesh(
    mesh: &mut RenderMesh,
    options: &CleanupOptions,
) -> Result<CleanupReport, MeshCleanupError> {
    let num_vertices = mesh.num_vertices();
    check_attribute_len("normal", mesh.normals().len(), num_vertices)?;
    check_attribute_len("uv", mesh.uvs().len(), num_vertices)?;

    let mut report = CleanupReport::default();
    let (vertices, normals, uvs, submeshes) = mesh.buffers_mut();

    for indices in submeshes.iter_mut() {
        indices.retain(|idx| {
            let [a, b, c] = idx.map(|i| vertices.get(i as usize));

            match (a, b, c) {
                (Some(a), Some(b), Some(c)) => {
                    let degenerate = utils::face_cross([a, b, c]).norm_squared()
                        < options.degenerate_epsilon;
                    report.degenerate_triangles += degenerate as usize;
                    !degenerate
                }
                _ => {
                    report.invalid_triangles += 1;
                    false
                }
            }
        });
    }

    if report.invalid_triangles > 0 {
        log::warn!(
            "Removed {} triangles referencing vertices out of the {} available.",
            report.invalid_triangles,
            num_vertices
        );
    }

    if submeshes.iter().all(|s| s.is_empty()) {
        if num_vertices > 0 {
            log::warn!("No valid triangle left after cleanup; the mesh is cleared.");
        }
        report.cleared = true;
        mesh.clear();
        return Ok(report);
    }

    if options.flags.contains(CleanupFlags::REMOVE_UNUSED_VERTICES) {
        report.removed_vertices = utils::remove_unused_vertices(vertices, normals, uvs, submeshes);
    }

    mesh.recompute_aabb();
    Ok(report)
}

fn check_attribute_len(
    attribute: &'static str,
    len: usize,
    num_vertices: usize,
) -> Result<(), MeshCleanupError> {
    if len == 0 || len == num_vertices {
        Ok(())
    } else {
        Err(MeshCleanupError::AttributeLengthMismatch {
            attribute,
            len,
            num_vertices,
        })
    }
}
