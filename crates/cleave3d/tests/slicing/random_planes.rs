use crate::common::{cube_object, volume};
use cleave3d::math::{Point, Real, Vector};
use cleave3d::scene::Transform;
use cleave3d::slice::Slicer;
use oorandom::Rand32;

fn random_in(rng: &mut Rand32, half_extent: Real) -> Real {
    (rng.rand_float() * 2.0 - 1.0) * half_extent
}

#[test]
fn random_cuts_partition_the_cube() {
    let mut rng = Rand32::new(0x5eed);
    let slicer = Slicer::default();
    let mut num_cuts = 0;

    while num_cuts < 50 {
        let contact = Point::new(
            random_in(&mut rng, 0.4),
            random_in(&mut rng, 0.4),
            random_in(&mut rng, 0.4),
        );
        let normal = Vector::new(
            random_in(&mut rng, 1.0),
            random_in(&mut rng, 1.0),
            random_in(&mut rng, 1.0),
        );
        if normal.norm() < 0.1 {
            continue;
        }
        num_cuts += 1;

        let mut kept = cube_object("cube", Transform::identity());
        let other = slicer.slice(&mut kept, &contact, &normal).unwrap();
        let kept_mesh = kept.mesh.as_ref().unwrap();
        let other_mesh = other.mesh.as_ref().unwrap();

        let total = volume(kept_mesh) + volume(other_mesh);
        assert!(
            (total - 1.0).abs() < 1.0e-3,
            "cut {} through {:?} along {:?}: total volume {}",
            num_cuts,
            contact,
            normal,
            total
        );

        let dir = normal.normalize();
        for pt in kept_mesh.vertices() {
            assert!((pt - contact).dot(&dir) <= 1.0e-4);
        }
        for pt in other_mesh.vertices() {
            assert!((pt - contact).dot(&dir) >= -1.0e-4);
        }

        assert_eq!(kept_mesh.normals().len(), kept_mesh.num_vertices());
        assert_eq!(other.materials.len(), other_mesh.num_submeshes().max(1));
    }
}
