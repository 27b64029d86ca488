use crate::math::{Point, Real, TexCoord, Vector, DEFAULT_EPSILON};
use crate::shape::{CutPlane, MeshTriangle, Side};
use arrayvec::ArrayVec;

/// A vertex created on the cutting plane while splitting a triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BoundaryVertex {
    /// The position, lying on the cutting plane.
    pub position: Point<Real>,
    /// The normal interpolated from the split edge's endpoints.
    pub normal: Vector<Real>,
    /// The texture coordinates interpolated from the split edge's endpoints.
    pub uv: TexCoord<Real>,
}

/// The piece of the cut outline produced by splitting one triangle.
///
/// Both endpoints lie on the cutting plane.
pub type BoundarySegment = [BoundaryVertex; 2];

/// The triangles resulting from cutting a triangle crossing the plane.
#[derive(Clone, Debug)]
pub struct SplitTriangles {
    /// Triangles on the [`Side::Left`] of the plane.
    pub left: ArrayVec<MeshTriangle, 2>,
    /// Triangles on the [`Side::Right`] of the plane.
    pub right: ArrayVec<MeshTriangle, 2>,
    /// The segment along which the triangle was cut.
    pub segment: BoundarySegment,
    /// The number of edges (0, 1 or 2) too parallel to the plane to be intersected,
    /// for which the edge midpoint was used instead.
    pub midpoint_fallbacks: u8,
}

/// The result of splitting a triangle with a plane.
#[derive(Clone, Debug)]
pub enum SplitResult {
    /// The triangle lies entirely on the [`Side::Left`] of the plane.
    Left,
    /// The triangle lies entirely on the [`Side::Right`] of the plane.
    Right,
    /// The triangle crosses the plane.
    Pair(SplitTriangles),
}

/// Splits `triangle` along `plane`.
///
/// A triangle with vertices on both sides is cut along the two edges joining
/// the vertex alone on its side (the "lone" vertex) to the two others. This
/// yields one triangle on the lone vertex's side, two on the other side, and the
/// cut segment. Normals and texture coordinates are interpolated linearly along
/// the cut edges.
///
/// Every output triangle is wound consistently with its vertex normals (or with
/// the source triangle if those cancel out).
pub fn split_triangle(
    triangle: &MeshTriangle,
    plane: &CutPlane,
    parallel_epsilon: Real,
) -> SplitResult {
    let sides = triangle.vertices.map(|pt| plane.side(&pt));
    let num_left = sides.iter().filter(|s| **s == Side::Left).count();

    let minority = match num_left {
        3 => return SplitResult::Left,
        0 => return SplitResult::Right,
        1 => Side::Left,
        _ => Side::Right,
    };

    let lone = sides.iter().position(|s| *s == minority).unwrap_or(0);
    let (m1, m2) = match lone {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    };

    let mut midpoint_fallbacks = 0;
    let mut cut_edge = |to: usize| {
        let (vertex, fallback) = intersect_edge(triangle, lone, to, plane, parallel_epsilon);
        midpoint_fallbacks += fallback as u8;
        vertex
    };
    let i1 = cut_edge(m1);
    let i2 = cut_edge(m2);

    let source_cross = triangle.face_cross();
    let make_triangle = |a: Corner, b: Corner, c: Corner| {
        let mut tri = MeshTriangle::new(
            [a.position, b.position, c.position],
            [a.normal, b.normal, c.normal],
            [a.uv, b.uv, c.uv],
            triangle.submesh,
        );

        let normal_sum = tri.normal_sum();
        let reference = if normal_sum.norm_squared() > DEFAULT_EPSILON {
            normal_sum
        } else {
            source_cross
        };
        let _ = tri.orient_toward(&reference);
        tri
    };

    let lone_corner = Corner::of(triangle, lone);
    let m1_corner = Corner::of(triangle, m1);
    let m2_corner = Corner::of(triangle, m2);

    let mut minority_tris = ArrayVec::new();
    let mut majority_tris = ArrayVec::new();
    minority_tris.push(make_triangle(lone_corner, i1.into(), i2.into()));
    majority_tris.push(make_triangle(i1.into(), m1_corner, m2_corner));
    majority_tris.push(make_triangle(i1.into(), m2_corner, i2.into()));

    let (left, right) = match minority {
        Side::Left => (minority_tris, majority_tris),
        Side::Right => (majority_tris, minority_tris),
    };

    SplitResult::Pair(SplitTriangles {
        left,
        right,
        segment: [i1, i2],
        midpoint_fallbacks,
    })
}

#[derive(Copy, Clone)]
struct Corner {
    position: Point<Real>,
    normal: Vector<Real>,
    uv: TexCoord<Real>,
}

impl Corner {
    fn of(triangle: &MeshTriangle, i: usize) -> Self {
        Corner {
            position: triangle.vertices[i],
            normal: triangle.normals[i],
            uv: triangle.uvs[i],
        }
    }
}

impl From<BoundaryVertex> for Corner {
    fn from(v: BoundaryVertex) -> Self {
        Corner {
            position: v.position,
            normal: v.normal,
            uv: v.uv,
        }
    }
}

// Returns the vertex where the edge `from -> to` meets the plane, and whether
// the midpoint had to be used.
fn intersect_edge(
    triangle: &MeshTriangle,
    from: usize,
    to: usize,
    plane: &CutPlane,
    parallel_epsilon: Real,
) -> (BoundaryVertex, bool) {
    // Endpoints are taken in lexicographic order so that an edge shared by two
    // triangles yields the same point from both.
    let [p_from, p_to] = [from, to].map(|i| triangle.vertices[i].coords);
    let (from, to) = if p_to.iter().lt(p_from.iter()) {
        (to, from)
    } else {
        (from, to)
    };

    let (pa, pb) = (triangle.vertices[from], triangle.vertices[to]);
    let (norm_a, norm_b) = (triangle.normals[from], triangle.normals[to]);
    let (ua, ub) = (triangle.uvs[from], triangle.uvs[to]);

    match plane.intersect_segment(&pa, &pb, parallel_epsilon) {
        Some(t) => (
            BoundaryVertex {
                position: pa + (pb - pa) * t,
                normal: norm_a.lerp(&norm_b, t),
                uv: ua.lerp(&ub, t),
            },
            false,
        ),
        None => {
            log::warn!(
                "Edge {:?} -> {:?} is parallel to the cutting plane; using its midpoint.",
                pa,
                pb
            );
            let sum = norm_a + norm_b;
            (
                BoundaryVertex {
                    position: na::center(&pa, &pb),
                    normal: sum.try_normalize(DEFAULT_EPSILON).unwrap_or(sum),
                    uv: (ua + ub) * 0.5,
                },
                true,
            )
        }
    }
}
