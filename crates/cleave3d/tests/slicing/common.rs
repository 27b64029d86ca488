use cleave3d::math::{Point, Real, TexCoord, Vector};
use cleave3d::scene::{Material, SceneObject, Transform};
use cleave3d::shape::RenderMesh;

/// An axis-aligned cube of side `size` centered at the origin.
///
/// Every face has its own four vertices, normals and texture coordinates. The
/// faces orthogonal to the `z` axis are in submesh 1, the others in submesh 0.
pub fn cube(size: Real) -> RenderMesh {
    let half = size / 2.0;
    let mut vertices = vec![];
    let mut normals = vec![];
    let mut uvs = vec![];
    let mut submeshes = vec![vec![], vec![]];

    for axis in 0..3 {
        for sign in [-1.0, 1.0] {
            let n = Vector::ith(axis, sign);
            let u = Vector::ith((axis + 1) % 3, sign);
            let v = Vector::ith((axis + 2) % 3, 1.0);
            let base = vertices.len() as u32;

            for (du, dv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                vertices.push(Point::from((n + u * du + v * dv) * half));
                normals.push(n);
                uvs.push(TexCoord::new((du + 1.0) / 2.0, (dv + 1.0) / 2.0));
            }

            let submesh = if axis == 2 { 1 } else { 0 };
            submeshes[submesh].push([base, base + 1, base + 2]);
            submeshes[submesh].push([base, base + 2, base + 3]);
        }
    }

    RenderMesh::new(vertices, submeshes)
        .with_normals(normals)
        .with_uvs(uvs)
}

/// A closed prism of height 2 centered at the origin, with a regular `sides`-gon of
/// circumradius 1 as its section orthogonal to the `y` axis.
pub fn cylinder(sides: usize) -> RenderMesh {
    let ring = |y: Real| -> Vec<Point<Real>> {
        (0..sides)
            .map(|i| {
                let angle = i as Real * std::f32::consts::TAU / sides as Real;
                Point::new(angle.cos(), y, angle.sin())
            })
            .collect()
    };
    let (bottom, top) = (ring(-1.0), ring(1.0));
    let n = sides as u32;

    // Side vertices, then the cap rings, then the two cap centers.
    let mut vertices = [&bottom[..], &top[..], &bottom[..], &top[..]].concat();
    let mut normals: Vec<_> = [&bottom[..], &top[..]]
        .concat()
        .iter()
        .map(|pt| Vector::new(pt.x, 0.0, pt.z))
        .collect();
    normals.extend(std::iter::repeat(-Vector::y()).take(sides));
    normals.extend(std::iter::repeat(Vector::y()).take(sides));
    vertices.extend([Point::new(0.0, -1.0, 0.0), Point::new(0.0, 1.0, 0.0)]);
    normals.extend([-Vector::y(), Vector::y()]);

    let (bottom_center, top_center) = (4 * n, 4 * n + 1);
    let mut indices = vec![];
    for i in 0..n {
        let j = (i + 1) % n;
        indices.push([i, n + i, n + j]);
        indices.push([i, n + j, j]);
        indices.push([bottom_center, 2 * n + i, 2 * n + j]);
        indices.push([top_center, 3 * n + j, 3 * n + i]);
    }

    let uvs = vec![TexCoord::zeros(); vertices.len()];
    RenderMesh::new(vertices, vec![indices])
        .with_normals(normals)
        .with_uvs(uvs)
}

pub fn cube_object(name: &str, transform: Transform) -> SceneObject {
    SceneObject::new(name, transform)
        .with_mesh(cube(1.0))
        .with_materials(vec![Material::new("sides"), Material::new("caps")])
        .with_mesh_collider()
}

/// The signed volume enclosed by `mesh`, positive if its triangles face outward.
pub fn volume(mesh: &RenderMesh) -> Real {
    triangles(mesh)
        .map(|[a, b, c]| a.coords.dot(&b.coords.cross(&c.coords)) / 6.0)
        .sum()
}

/// The total area of the triangles of the given submesh.
pub fn submesh_area(mesh: &RenderMesh, submesh: usize) -> Real {
    mesh.submeshes()[submesh]
        .iter()
        .map(|idx| {
            let [a, b, c] = idx.map(|i| mesh.vertices()[i as usize]);
            (b - a).cross(&(c - a)).norm() / 2.0
        })
        .sum()
}

pub fn triangles(mesh: &RenderMesh) -> impl Iterator<Item = [Point<Real>; 3]> + '_ {
    mesh.submeshes()
        .iter()
        .flatten()
        .map(|idx| idx.map(|i| mesh.vertices()[i as usize]))
}
