use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::scene::Collider;
use crate::shape::RenderMesh;

/// The placement of an object: a non-uniform scale, followed by a rotation and a translation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Transform {
    /// The rotation and translation applied after scaling.
    pub isometry: Isometry<Real>,
    /// The per-axis scale factors, applied first.
    pub scale: Vector<Real>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The identity transform.
    pub fn identity() -> Self {
        Transform {
            isometry: Isometry::identity(),
            scale: Vector::repeat(1.0),
        }
    }

    /// A transform with the given placement and scale.
    pub fn new(isometry: Isometry<Real>, scale: Vector<Real>) -> Self {
        Transform { isometry, scale }
    }

    /// A transform with the given placement and no scaling.
    pub fn from_isometry(isometry: Isometry<Real>) -> Self {
        Transform {
            isometry,
            scale: Vector::repeat(1.0),
        }
    }

    /// Whether the scale has no (nearly) zero component.
    pub fn is_invertible(&self) -> bool {
        self.scale.iter().all(|s| s.abs() > DEFAULT_EPSILON)
    }

    /// Maps a local-space point to world-space.
    pub fn transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.isometry * Point::from(pt.coords.component_mul(&self.scale))
    }

    /// Maps a world-space point to local-space.
    ///
    /// Returns `None` if the transform is not invertible.
    pub fn inverse_transform_point(&self, pt: &Point<Real>) -> Option<Point<Real>> {
        if !self.is_invertible() {
            return None;
        }

        let unscaled = self.isometry.inverse_transform_point(pt);
        Some(Point::from(unscaled.coords.component_div(&self.scale)))
    }

    /// Maps a world-space normal to local-space, using the inverse-transpose of
    /// the local-to-world transform, and normalizes it.
    ///
    /// Returns `None` if the transform is not invertible or the normal is (nearly) zero.
    pub fn inverse_transform_normal(&self, normal: &Vector<Real>) -> Option<Vector<Real>> {
        if !self.is_invertible() {
            return None;
        }

        let unrotated = self.isometry.inverse_transform_vector(normal);
        unrotated
            .component_mul(&self.scale)
            .try_normalize(DEFAULT_EPSILON)
    }
}

/// A material slot of a rendered object.
///
/// Only identity matters to slicing: materials are copied between objects, never inspected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Material {
    /// The material name.
    pub name: String,
}

impl Material {
    /// A material with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Material { name: name.into() }
    }

    /// The default material, used when an object has none.
    pub fn standard() -> Self {
        Material::new("Standard")
    }

    /// The material list of an object with `num_submeshes` submeshes, cycling
    /// through `source`.
    ///
    /// The result has one entry per submesh, and at least one. Entry `i` is
    /// `source[i % source.len()]`, or [`Material::standard`] if `source` is empty.
    pub fn assign(source: &[Material], num_submeshes: usize) -> Vec<Material> {
        let count = num_submeshes.max(1);

        if source.is_empty() {
            return vec![Material::standard(); count];
        }

        (0..count).map(|i| source[i % source.len()].clone()).collect()
    }
}

/// A named object of the scene, optionally rendered with a mesh.
#[derive(Clone, Debug, Default)]
pub struct SceneObject {
    /// The object name.
    pub name: String,
    /// The object placement.
    pub transform: Transform,
    /// The mesh rendered for this object, in local-space.
    pub mesh: Option<RenderMesh>,
    /// One material per submesh of `mesh`.
    pub materials: Vec<Material>,
    /// The collision proxy of this object.
    pub collider: Option<Collider>,
}

impl SceneObject {
    /// An object without mesh, material or collider.
    pub fn new(name: impl Into<String>, transform: Transform) -> Self {
        SceneObject {
            name: name.into(),
            transform,
            ..Default::default()
        }
    }

    /// Sets the mesh rendered for this object.
    pub fn with_mesh(mut self, mesh: RenderMesh) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Sets the materials of this object.
    pub fn with_materials(mut self, materials: Vec<Material>) -> Self {
        self.materials = materials;
        self
    }

    /// Sets the collider of this object from its mesh.
    pub fn with_mesh_collider(mut self) -> Self {
        self.collider = self.mesh.as_ref().map(Collider::from_mesh);
        self
    }
}
