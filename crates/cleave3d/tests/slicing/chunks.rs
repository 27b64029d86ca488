use crate::common::{cube_object, volume};
use approx::assert_relative_eq;
use cleave3d::math::{Point, Real, Vector};
use cleave3d::scene::{ChunkSet, Transform};
use cleave3d::slice::Slicer;

fn total_volume(chunks: &ChunkSet) -> Real {
    chunks
        .chunks()
        .iter()
        .map(|c| volume(c.mesh.as_ref().unwrap()))
        .sum()
}

#[test]
fn every_cut_applies_to_every_chunk() {
    let slicer = Slicer::default();
    let mut chunks = ChunkSet::new(cube_object("cube", Transform::identity()));

    assert_eq!(chunks.cut(&slicer, &Point::origin(), &Vector::x()), 1);
    assert_eq!(chunks.len(), 2);

    assert_eq!(chunks.cut(&slicer, &Point::origin(), &Vector::y()), 2);
    assert_eq!(chunks.len(), 4);

    assert_eq!(chunks.cut(&slicer, &Point::new(0.0, 0.0, 0.25), &Vector::z()), 4);
    assert_eq!(chunks.len(), 8);

    assert_relative_eq!(total_volume(&chunks), 1.0, epsilon = 1.0e-4);

    let names: Vec<_> = chunks.chunks().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(&names[..4], &["cube", "cube_Right", "cube_Right", "cube_Right_Right"]);
}

#[test]
fn missed_cut_keeps_the_chunk_count() {
    let slicer = Slicer::default();
    let mut chunks = ChunkSet::new(cube_object("cube", Transform::identity()));
    let _ = chunks.cut(&slicer, &Point::origin(), &Vector::x());

    assert_eq!(chunks.cut(&slicer, &Point::new(0.0, 3.0, 0.0), &Vector::y()), 0);
    assert_eq!(chunks.len(), 2);

    // Everything is on the new side: the emptied chunks are replaced.
    assert_eq!(chunks.cut(&slicer, &Point::new(0.0, 3.0, 0.0), &-Vector::y()), 0);
    assert_eq!(chunks.len(), 2);
    assert_relative_eq!(total_volume(&chunks), 1.0, epsilon = 1.0e-4);
}
