use crate::common::{cube, volume};
use approx::assert_relative_eq;
use cleave3d::math::{Point, Vector};
use cleave3d::scene::{SceneObject, Transform};
use cleave3d::shape::{CutPlane, RenderMesh};
use cleave3d::slice::{slice_mesh, SliceError, SliceOptions, Slicer};

fn without_attributes(mesh: &RenderMesh) -> RenderMesh {
    RenderMesh::new(mesh.vertices().to_vec(), mesh.submeshes().to_vec())
}

#[test]
fn missing_normals_and_uvs_are_substituted() {
    let mut object =
        SceneObject::new("bare", Transform::identity()).with_mesh(without_attributes(&cube(1.0)));
    let other = Slicer::default()
        .slice(&mut object, &Point::origin(), &Vector::x())
        .unwrap();

    for piece in [&object, &other] {
        let mesh = piece.mesh.as_ref().unwrap();
        assert_eq!(mesh.normals().len(), mesh.num_vertices());
        assert_eq!(mesh.uvs().len(), mesh.num_vertices());
        assert_relative_eq!(volume(mesh), 0.5, epsilon = 1.0e-5);
    }
}

#[test]
fn short_normal_buffer_is_tolerated() {
    let source = cube(1.0);
    let mesh = without_attributes(&source).with_normals(source.normals()[..5].to_vec());
    let plane = CutPlane::new(-Vector::x_axis(), 0.0);
    let sliced = slice_mesh(&mesh, &plane, &SliceOptions::default());

    assert_relative_eq!(volume(&sliced.kept), 0.5, epsilon = 1.0e-5);
    assert_relative_eq!(volume(&sliced.other), 0.5, epsilon = 1.0e-5);
}

#[test]
fn out_of_range_indices_skip_triangles() {
    let source = cube(1.0);
    let mut submeshes = source.submeshes().to_vec();
    submeshes[0].push([0, 1, 1000]);
    let mesh = RenderMesh::new(source.vertices().to_vec(), submeshes)
        .with_normals(source.normals().to_vec())
        .with_uvs(source.uvs().to_vec());

    let plane = CutPlane::new(-Vector::x_axis(), 0.0);
    let sliced = slice_mesh(&mesh, &plane, &SliceOptions::default());

    assert_eq!(sliced.report.skipped_triangles, 1);
    assert_eq!(sliced.report.split_triangles, 8);
    assert_relative_eq!(volume(&sliced.kept), 0.5, epsilon = 1.0e-5);
}

#[test]
fn degenerate_source_triangles_are_cleaned() {
    let source = without_attributes(&cube(1.0));
    let plane = CutPlane::new(-Vector::x_axis(), 0.0);
    let baseline = slice_mesh(&source, &plane, &SliceOptions::default());

    let mut vertices = source.vertices().to_vec();
    let mut submeshes = source.submeshes().to_vec();
    let base = vertices.len() as u32;
    vertices.extend([
        Point::new(-0.4, 0.0, 0.0),
        Point::new(-0.3, 0.0, 0.0),
        Point::new(-0.2, 0.0, 0.0),
    ]);
    submeshes[1].push([base, base + 1, base + 2]);

    let mesh = RenderMesh::new(vertices, submeshes);
    let sliced = slice_mesh(&mesh, &plane, &SliceOptions::default());

    let expected = baseline.report.kept_cleanup.unwrap();
    let cleanup = sliced.report.kept_cleanup.unwrap();
    assert_eq!(cleanup.degenerate_triangles, expected.degenerate_triangles + 1);
    assert_eq!(cleanup.invalid_triangles, 0);
    assert_eq!(
        sliced.kept.submeshes()[1].len(),
        baseline.kept.submeshes()[1].len()
    );
    assert_relative_eq!(volume(&sliced.kept), 0.5, epsilon = 1.0e-5);
}

#[test]
fn zero_cut_normal_leaves_the_object_untouched() {
    let mut object = crate::common::cube_object("cube", Transform::identity());
    let err = Slicer::default()
        .slice(&mut object, &Point::origin(), &Vector::zeros())
        .unwrap_err();

    assert_eq!(err, SliceError::DegenerateCutNormal);
    assert_eq!(object.mesh.as_ref().unwrap().num_triangles(), 12);
}
