//! Reconstruction of the cut outline and generation of the cap sealing it.

use crate::math::{Point, Real, TexCoord, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::{CutPlane, MeshTriangle};
use crate::slice::{BoundarySegment, BoundaryVertex, CapStrategy, SliceOptions};
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::{self, WeldKey};
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

/// The cap triangles sealing both halves of a sliced mesh.
#[derive(Clone, Debug, Default)]
pub struct CapTriangles {
    /// Cap of the [`Side::Left`](crate::shape::Side::Left) half, facing away from
    /// the plane normal.
    pub left: Vec<MeshTriangle>,
    /// Cap of the [`Side::Right`](crate::shape::Side::Right) half, facing along
    /// the plane normal.
    pub right: Vec<MeshTriangle>,
    /// The number of outline polygons that were filled.
    pub num_loops: usize,
    /// Whether the outline reconstruction stopped early because it reached its
    /// iteration limit.
    pub chain_limit_reached: bool,
}

/// Builds the caps sealing a cut from the boundary segments produced while
/// splitting triangles.
///
/// The outline is reconstructed as one or several polygons according to the
/// [`CapStrategy`], each of which is fan-triangulated from its first vertex.
/// This is only exact for convex outlines.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CapBuilder {
    strategy: CapStrategy,
    submesh: u32,
    uv_scale: Real,
    weld_tolerance: Real,
    chain_iteration_limit: usize,
}

impl CapBuilder {
    /// A cap builder writing to `submesh`, configured from `options`.
    pub fn new(options: &SliceOptions, submesh: u32) -> Self {
        CapBuilder {
            strategy: options.cap_strategy,
            submesh,
            uv_scale: options.cap_uv_scale,
            weld_tolerance: options.weld_tolerance,
            chain_iteration_limit: options.chain_iteration_limit,
        }
    }

    /// Sets the outline reconstruction strategy.
    pub fn with_strategy(mut self, strategy: CapStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the bound on the number of edge-chaining steps.
    pub fn with_chain_iteration_limit(mut self, limit: usize) -> Self {
        self.chain_iteration_limit = limit;
        self
    }

    /// Generates the caps of both halves.
    ///
    /// Nothing is generated with fewer than two boundary vertices.
    pub fn build(&self, segments: &[BoundarySegment], plane: &CutPlane) -> CapTriangles {
        let mut result = CapTriangles::default();

        // Each segment contributes two boundary vertices.
        if segments.is_empty() {
            return result;
        }

        let (loops, limit_reached) = self.boundary_loops(segments, plane);
        result.chain_limit_reached = limit_reached;

        for outline in loops.iter().filter(|l| l.len() >= 3) {
            self.fill(outline, plane, &mut result);
            result.num_loops += 1;
        }

        result
    }

    /// Reconstructs the outline polygons from the boundary segments.
    ///
    /// Also returns whether the iteration limit was reached while chaining.
    pub fn boundary_loops(
        &self,
        segments: &[BoundarySegment],
        plane: &CutPlane,
    ) -> (Vec<Vec<BoundaryVertex>>, bool) {
        match self.strategy {
            CapStrategy::AngularSort => (vec![angular_sort(segments, plane)], false),
            CapStrategy::EdgeChaining => {
                chain_segments(segments, self.weld_tolerance, self.chain_iteration_limit)
            }
        }
    }

    fn fill(&self, outline: &[BoundaryVertex], plane: &CutPlane, out: &mut CapTriangles) {
        let Some(centroid) = utils::center(outline.iter().map(|v| &v.position)) else {
            return;
        };
        let [basis_u, basis_v] = utils::orthonormal_basis(&plane.normal);
        let planar_uv = |pt: &Point<Real>| {
            let offset = pt - centroid;
            TexCoord::new(offset.dot(&basis_u), offset.dot(&basis_v)) * self.uv_scale
                + TexCoord::repeat(0.5)
        };

        let outward: Vector<Real> = -*plane.normal;

        for i in 1..outline.len() - 1 {
            let vertices = [
                outline[0].position,
                outline[i].position,
                outline[i + 1].position,
            ];
            let uvs = vertices.map(|pt| planar_uv(&pt));

            let mut left = MeshTriangle::new(vertices, [outward; 3], uvs, self.submesh);
            let _ = left.orient_toward(&outward);

            let mut right = left;
            right.flip();
            right.normals = [-outward; 3];

            out.left.push(left);
            out.right.push(right);
        }
    }
}

fn angular_sort(segments: &[BoundarySegment], plane: &CutPlane) -> Vec<BoundaryVertex> {
    let mut vertices: Vec<BoundaryVertex> = segments.iter().flatten().copied().collect();
    let Some(centroid) = utils::center(vertices.iter().map(|v| &v.position)) else {
        return vertices;
    };

    let reference = UnitVector::try_new(vertices[0].position - centroid, DEFAULT_EPSILON)
        .map(|r| r.into_inner())
        .unwrap_or_else(|| utils::orthonormal_basis(&plane.normal)[0]);
    let right = plane.normal.cross(&reference);

    vertices.sort_by_key(|v| {
        let dir = v.position - centroid;
        OrderedFloat(dir.dot(&right).atan2(dir.dot(&reference)))
    });

    vertices
}

// Upper bound of the weld tolerance, relative to the diagonal of the outline bounds.
const MAX_RELATIVE_WELD_TOLERANCE: Real = 1.0e-3;

// The diagonal length of the bounding box of all segment endpoints.
fn outline_extent(segments: &[BoundarySegment]) -> Real {
    let mut points = segments.iter().flatten().map(|v| v.position);
    let Some(first) = points.next() else {
        return 0.0;
    };

    let (mins, maxs) = points.fold((first, first), |(mins, maxs), pt| {
        (mins.inf(&pt), maxs.sup(&pt))
    });
    (maxs - mins).norm()
}

// Welds the segment endpoints, then walks the resulting graph. Each walk
// starts from an unvisited segment, repeatedly follows an unvisited segment
// leaving the current last vertex, and stops when it comes back to its first
// vertex or gets stuck. A stuck walk is also extended backward so open chains
// are captured in full.
fn chain_segments(
    segments: &[BoundarySegment],
    weld_tolerance: Real,
    iteration_limit: usize,
) -> (Vec<Vec<BoundaryVertex>>, bool) {
    let weld_tolerance =
        weld_tolerance.min(outline_extent(segments) * MAX_RELATIVE_WELD_TOLERANCE);
    let mut node_ids: HashMap<WeldKey, usize> = HashMap::default();
    let mut nodes: Vec<BoundaryVertex> = vec![];
    let mut node_id = |v: &BoundaryVertex| {
        match node_ids.entry(WeldKey::new(&v.position, weld_tolerance)) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                nodes.push(*v);
                *e.insert(nodes.len() - 1)
            }
        }
    };

    let mut edges = Vec::with_capacity(segments.len());
    for [a, b] in segments {
        let (ia, ib) = (node_id(a), node_id(b));
        if ia != ib {
            edges.push([ia, ib]);
        }
    }

    // Walking a single outline never takes more steps than this.
    let iteration_limit = iteration_limit.max(edges.len() + 1);

    let mut adjacency: Vec<SmallVec<[usize; 2]>> = vec![SmallVec::new(); nodes.len()];
    for (e, [a, b]) in edges.iter().enumerate() {
        adjacency[*a].push(e);
        adjacency[*b].push(e);
    }

    let mut walker = ChainWalker {
        edges: &edges,
        adjacency: &adjacency,
        consumed: vec![false; edges.len()],
        iterations: 0,
        iteration_limit,
    };
    let mut loops = vec![];

    for start in 0..edges.len() {
        if walker.consumed[start] {
            continue;
        }

        walker.consumed[start] = true;
        let [first, second] = edges[start];
        let mut chain = vec![first, second];
        let closed = walker.extend(&mut chain);

        if !closed && !walker.limit_reached() {
            let mut backward = vec![first];
            let _ = walker.extend(&mut backward);
            let _ = chain.splice(0..1, backward.into_iter().rev());
        }

        if chain.len() > 1 && chain.first() == chain.last() {
            let _ = chain.pop();
        }

        loops.push(chain.into_iter().map(|i| nodes[i]).collect());

        if walker.limit_reached() {
            log::warn!(
                "Cap outline walk stopped after {} iterations; the cap may be incomplete.",
                walker.iterations
            );
            break;
        }
    }

    (loops, walker.limit_reached())
}

struct ChainWalker<'a> {
    edges: &'a [[usize; 2]],
    adjacency: &'a [SmallVec<[usize; 2]>],
    consumed: Vec<bool>,
    iterations: usize,
    iteration_limit: usize,
}

impl ChainWalker<'_> {
    fn limit_reached(&self) -> bool {
        self.iterations >= self.iteration_limit
    }

    // Appends vertices to `chain` until it closes on its first vertex, gets stuck,
    // or the iteration limit is reached. Returns `true` if the chain closed.
    fn extend(&mut self, chain: &mut Vec<usize>) -> bool {
        let Some(&start) = chain.first() else {
            return false;
        };

        while let Some(&current) = chain.last() {
            if self.limit_reached() {
                return false;
            }
            self.iterations += 1;

            let next_edge = self.adjacency[current]
                .iter()
                .copied()
                .find(|e| !self.consumed[*e]);
            let Some(e) = next_edge else {
                return false;
            };

            self.consumed[e] = true;
            let [a, b] = self.edges[e];
            let next = if a == current { b } else { a };
            chain.push(next);

            if next == start {
                return true;
            }
        }

        false
    }
}
