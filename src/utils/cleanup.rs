use crate::math::{Point, Real, TexCoord, Vector};

/// Given per-submesh index buffers, remove every vertex that is not indexed.
///
/// `normals` and `uvs` are compacted alongside `points` when they are not
/// empty; they must otherwise have the same length as `points`. The index
/// buffers are rewritten in place. Returns the number of removed vertices.
pub fn remove_unused_vertices(
    points: &mut Vec<Point<Real>>,
    normals: &mut Vec<Vector<Real>>,
    uvs: &mut Vec<TexCoord<Real>>,
    submeshes: &mut [Vec<[u32; 3]>],
) -> usize {
    let original_len = points.len();
    let mut used = vec![false; points.len()];
    let mut remap: Vec<usize> = (0..points.len()).collect();

    for idx in submeshes.iter().flatten() {
        for i in idx {
            if let Some(flag) = used.get_mut(*i as usize) {
                *flag = true;
            }
        }
    }

    let compact_normals = normals.len() == points.len();
    let compact_uvs = uvs.len() == points.len();

    let mut i = 0;
    while i != points.len() {
        if !used[i] {
            let _ = points.swap_remove(i);
            if compact_normals {
                let _ = normals.swap_remove(i);
            }
            if compact_uvs {
                let _ = uvs.swap_remove(i);
            }
            remap[points.len()] = i;
            used[i] = used[points.len()];
        } else {
            i += 1;
        }
    }

    for idx in submeshes.iter_mut().flatten() {
        for i in idx.iter_mut() {
            *i = remap[*i as usize] as u32;
        }
    }

    original_len - points.len()
}
