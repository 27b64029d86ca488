use crate::common::{cube, cube_object, submesh_area, volume};
use approx::assert_relative_eq;
use cleave3d::math::{Point, Vector};
use cleave3d::scene::{Collider, Transform};
use cleave3d::shape::CutPlane;
use cleave3d::slice::{
    split_triangle, CapBuilder, CapStrategy, SliceOptions, Slicer, SplitResult,
};

#[test]
fn cube_bisection_gives_two_closed_boxes() {
    let mut object = cube_object("cube", Transform::identity());
    let (other, report) = Slicer::default()
        .slice_with_report(&mut object, &Point::origin(), &Vector::x())
        .unwrap();

    assert_eq!(other.name, "cube_Right");
    assert_eq!(other.transform, object.transform);
    assert_eq!(report.split_triangles, 8);
    assert_eq!(report.boundary_segments, 8);
    assert_eq!(report.cap_loops, 1);
    assert!(report.cap_triangles >= 2);
    assert!(!report.chain_limit_reached);

    let kept = object.mesh.as_ref().unwrap();
    let other_mesh = other.mesh.as_ref().unwrap();

    // The cut normal points away from the kept half.
    assert!(kept.vertices().iter().all(|pt| pt.x <= 1.0e-5));
    assert!(other_mesh.vertices().iter().all(|pt| pt.x >= -1.0e-5));

    // Both halves are closed and consistently oriented outward.
    assert_relative_eq!(volume(kept), 0.5, epsilon = 1.0e-5);
    assert_relative_eq!(volume(other_mesh), 0.5, epsilon = 1.0e-5);

    // The caps live in their own submesh, fill the cross-section and face each other.
    for (mesh, facing) in [(kept, 1.0), (other_mesh, -1.0)] {
        assert_eq!(mesh.num_submeshes(), 3);
        assert_relative_eq!(submesh_area(mesh, 2), 1.0, epsilon = 1.0e-5);
        for idx in &mesh.submeshes()[2] {
            let [a, b, c] = idx.map(|i| mesh.vertices()[i as usize]);
            assert_relative_eq!(a.x, 0.0, epsilon = 1.0e-6);
            assert!((b - a).cross(&(c - a)).x * facing > 0.0);
        }

        let aabb = mesh.local_aabb();
        assert_relative_eq!(aabb.maxs.x - aabb.mins.x, 0.5, epsilon = 1.0e-5);
        assert_relative_eq!(aabb.maxs.y - aabb.mins.y, 1.0, epsilon = 1.0e-5);
        assert_eq!(mesh.normals().len(), mesh.num_vertices());
    }

    // The side surfaces are shared between both halves.
    let side_area = submesh_area(kept, 0) + submesh_area(other_mesh, 0);
    assert_relative_eq!(side_area, 4.0, epsilon = 1.0e-5);

    assert!(matches!(object.collider, Some(Collider::Convex(_))));
    assert!(matches!(other.collider, Some(Collider::Convex(_))));
}

#[test]
fn split_triangles_send_each_vertex_to_one_side() {
    let mesh = cube(1.0);
    let plane = CutPlane::new(-Vector::x_axis(), 0.0);

    for (submesh, indices) in mesh.submeshes().iter().enumerate() {
        for idx in indices {
            let (tri, _) = mesh.gather_triangle(*idx, submesh as u32).unwrap();
            let SplitResult::Pair(split) = split_triangle(&tri, &plane, 1.0e-6) else {
                continue;
            };

            assert_eq!(split.left.len() + split.right.len(), 3);

            for v in &tri.vertices {
                let in_left = split.left.iter().any(|t| t.vertices.contains(v));
                let in_right = split.right.iter().any(|t| t.vertices.contains(v));
                assert!(in_left != in_right);
            }

            for bv in &split.segment {
                assert!(plane.signed_distance(&bv.position).abs() < 1.0e-6);
            }
        }
    }
}

#[test]
fn convex_outline_has_no_duplicate_or_missing_vertex() {
    let mesh = cube(1.0);
    let plane = CutPlane::new(-Vector::x_axis(), 0.0);
    let mut segments = vec![];

    for (submesh, indices) in mesh.submeshes().iter().enumerate() {
        for idx in indices {
            let (tri, _) = mesh.gather_triangle(*idx, submesh as u32).unwrap();
            if let SplitResult::Pair(split) = split_triangle(&tri, &plane, 1.0e-6) {
                segments.push(split.segment);
            }
        }
    }

    let builder = CapBuilder::new(&SliceOptions::default(), 2);
    let (loops, _) = builder.boundary_loops(&segments, &plane);

    // 4 corners of the cross-section and the 4 points where face diagonals cross it.
    assert_eq!(loops.len(), 1);
    assert_eq!(loops[0].len(), 8);

    for (i, a) in loops[0].iter().enumerate() {
        for b in &loops[0][i + 1..] {
            assert!((a.position - b.position).norm() > 1.0e-3);
        }
    }

    let sorted = builder
        .with_strategy(CapStrategy::AngularSort)
        .boundary_loops(&segments, &plane);
    assert_eq!(sorted.0[0].len(), 16);
}

#[test]
fn angular_sort_caps_close_the_cube_too() {
    let slicer = Slicer::new(SliceOptions {
        cap_strategy: CapStrategy::AngularSort,
        ..Default::default()
    });
    let mut object = cube_object("cube", Transform::identity());
    let other = slicer
        .slice(&mut object, &Point::new(0.0, 0.2, 0.0), &Vector::y())
        .unwrap();

    assert_relative_eq!(volume(object.mesh.as_ref().unwrap()), 0.7, epsilon = 1.0e-4);
    assert_relative_eq!(volume(other.mesh.as_ref().unwrap()), 0.3, epsilon = 1.0e-4);
}
