use crate::math::{Point, Real, Vector};
use crate::scene::SceneObject;
use crate::slice::Slicer;

/// Every piece cut so far from a single root object.
///
/// Each cut is applied to all the pieces at once, so the pieces always form a
/// partition of the root object along every plane applied.
#[derive(Clone, Debug, Default)]
pub struct ChunkSet {
    chunks: Vec<SceneObject>,
}

impl ChunkSet {
    /// A chunk set whose only chunk is `root`.
    pub fn new(root: SceneObject) -> Self {
        ChunkSet { chunks: vec![root] }
    }

    /// The current pieces.
    pub fn chunks(&self) -> &[SceneObject] {
        &self.chunks
    }

    /// The number of pieces.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether there is no piece left.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Slices every current piece once with the given world-space plane.
    ///
    /// New pieces are appended after the existing ones. Pieces left without any
    /// triangle are dropped, so a plane missing a piece leaves it as is. Pieces
    /// that cannot be sliced are kept unchanged. Returns the net number of pieces added.
    pub fn cut(
        &mut self,
        slicer: &Slicer,
        contact_point: &Point<Real>,
        cut_normal: &Vector<Real>,
    ) -> usize {
        let num_before = self.chunks.len();
        let mut new_chunks = vec![];

        for chunk in &mut self.chunks {
            if let Ok(piece) = slicer.slice(chunk, contact_point, cut_normal) {
                new_chunks.push(piece);
            }
        }

        self.chunks.extend(new_chunks);
        self.chunks.retain(|chunk| {
            let keep = chunk.mesh.as_ref().map_or(true, |mesh| !mesh.is_empty());
            if !keep {
                log::debug!("Dropping empty chunk `{}`.", chunk.name);
            }
            keep
        });

        let added = self.chunks.len().saturating_sub(num_before);
        log::debug!(
            "Cut {} chunks into {} chunks.",
            num_before,
            self.chunks.len()
        );
        added
    }
}
