use crate::common::{cube_object, volume};
use approx::assert_relative_eq;
use cleave3d::math::{Point, Vector};
use cleave3d::scene::{Collider, Transform};
use cleave3d::slice::Slicer;

#[test]
fn plane_beyond_the_mesh_keeps_everything() {
    let mut object = cube_object("cube", Transform::identity());
    let (other, report) = Slicer::default()
        .slice_with_report(&mut object, &Point::new(5.0, 0.0, 0.0), &Vector::x())
        .unwrap();

    assert!(!report.is_cut());
    assert_eq!(report.cap_triangles, 0);

    let kept = object.mesh.as_ref().unwrap();
    assert_eq!(kept.num_triangles(), 12);
    assert_eq!(kept.num_vertices(), 36);
    assert_eq!(kept.num_submeshes(), 2);
    assert_relative_eq!(volume(kept), 1.0, epsilon = 1.0e-5);

    let other_mesh = other.mesh.as_ref().unwrap();
    assert!(other_mesh.is_empty());
    assert_eq!(other_mesh.num_vertices(), 0);
    assert_eq!(other.materials.len(), 1);
    assert!(matches!(other.collider, Some(Collider::Empty)));
}

#[test]
fn opposite_orientation_moves_everything_to_the_new_object() {
    let mut object = cube_object("cube", Transform::identity());
    let other = Slicer::default()
        .slice(&mut object, &Point::new(5.0, 0.0, 0.0), &-Vector::x())
        .unwrap();

    assert!(object.mesh.as_ref().unwrap().is_empty());
    assert_eq!(other.mesh.as_ref().unwrap().num_triangles(), 12);
}
