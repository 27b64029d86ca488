use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::parry::bounding_volume::Aabb;
use crate::parry::shape::{ConvexPolyhedron, TriMesh};
use crate::shape::RenderMesh;
use core::fmt;

/// The collision proxy of a [`SceneObject`](crate::scene::SceneObject).
#[derive(Clone)]
pub enum Collider {
    /// The convex hull of the mesh vertices.
    Convex(ConvexPolyhedron),
    /// The mesh triangles themselves, used when no convex hull could be computed.
    TriMesh(TriMesh),
    /// No collision geometry, for objects whose mesh is empty.
    Empty,
}

impl fmt::Debug for Collider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collider::Convex(hull) => f
                .debug_struct("Convex")
                .field("num_points", &hull.points().len())
                .finish(),
            Collider::TriMesh(mesh) => f
                .debug_struct("TriMesh")
                .field("num_triangles", &mesh.indices().len())
                .finish(),
            Collider::Empty => f.write_str("Empty"),
        }
    }
}

impl Collider {
    /// Builds the collider of `mesh`.
    ///
    /// This is the convex hull of its vertices when it exists. Otherwise the
    /// triangles are used directly, or [`Collider::Empty`] if there are none.
    pub fn from_mesh(mesh: &RenderMesh) -> Self {
        if mesh.num_vertices() == 0 {
            return Collider::Empty;
        }

        if spans_volume(mesh.vertices()) {
            if let Some(hull) = ConvexPolyhedron::from_convex_hull(mesh.vertices()) {
                return Collider::Convex(hull);
            }
        }

        log::warn!(
            "Failed to compute the convex hull of {} vertices; using a triangle mesh collider.",
            mesh.num_vertices()
        );

        let indices: Vec<[u32; 3]> = mesh.submeshes().iter().flatten().copied().collect();
        match TriMesh::new(mesh.vertices().to_vec(), indices) {
            Ok(trimesh) => Collider::TriMesh(trimesh),
            Err(err) => {
                log::warn!("Failed to build a triangle mesh collider: {}", err);
                Collider::Empty
            }
        }
    }

    /// Whether this is a [`Collider::Convex`].
    pub fn is_convex(&self) -> bool {
        matches!(self, Collider::Convex(_))
    }

    /// Whether this is [`Collider::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Collider::Empty)
    }

    /// The local-space bounds of the collision geometry, if any.
    pub fn local_aabb(&self) -> Option<Aabb> {
        match self {
            Collider::Convex(hull) => Some(hull.local_aabb()),
            Collider::TriMesh(mesh) => Some(*mesh.local_aabb()),
            Collider::Empty => None,
        }
    }
}

// Whether `points` are neither all coplanar nor all collinear, up to a
// tolerance relative to their extent.
fn spans_volume(points: &[Point<Real>]) -> bool {
    let Some(p0) = points.first() else {
        return false;
    };

    let farthest = |metric: &dyn Fn(&Point<Real>) -> Real| {
        points
            .iter()
            .map(|pt| (pt, metric(pt)))
            .fold((p0, 0.0), |best, curr| if curr.1 > best.1 { curr } else { best })
    };

    let (p1, extent_sq) = farthest(&|pt| (pt - p0).norm_squared());
    let extent = extent_sq.sqrt();
    if extent <= DEFAULT_EPSILON {
        return false;
    }

    let dir = (p1 - p0) / extent;
    let (p2, _) = farthest(&|pt| (pt - p0).cross(&dir).norm_squared());
    let Some(normal) = (p2 - p0).cross(&dir).try_normalize(DEFAULT_EPSILON) else {
        return false;
    };

    let (_, height) = farthest(&|pt| (pt - p0).dot(&normal).abs());
    height > extent * 1.0e-5
}
