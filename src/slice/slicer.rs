use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::scene::{Collider, Material, SceneObject};
use crate::shape::{AttributeFallback, CutPlane, IndexFormat, RenderMesh};
use crate::slice::{
    split_triangle, BoundarySegment, CapBuilder, MeshAccumulator, SliceError, SliceOptions,
    SplitResult,
};
use crate::transformation::{clean_mesh, CleanupReport};
use core::mem;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The successive stages of a slicing operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SliceStage {
    /// Nothing started yet.
    Idle,
    /// Building the local-space cutting plane and sorting triangles by side.
    Classifying,
    /// Splitting the triangles crossing the plane.
    Splitting,
    /// Generating the cap triangles.
    Capping,
    /// Building, cleaning and preparing both output meshes.
    Cleaning,
    /// Assigning the meshes, materials and colliders to the objects.
    Materializing,
    /// The slicing operation is complete.
    Done,
}

/// Statistics about a slicing operation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SliceReport {
    /// The number of triangles of the kept half, before cleanup, caps excluded.
    pub kept_triangles: usize,
    /// The number of triangles of the other half, before cleanup, caps excluded.
    pub other_triangles: usize,
    /// The number of source triangles crossing the plane.
    pub split_triangles: usize,
    /// The number of source triangles skipped because of out-of-range indices.
    pub skipped_triangles: usize,
    /// The number of boundary segments produced by the splits.
    pub boundary_segments: usize,
    /// The number of split edges for which the midpoint was used.
    pub midpoint_fallbacks: usize,
    /// The number of outline polygons filled by the caps.
    pub cap_loops: usize,
    /// The number of cap triangles added to each half.
    pub cap_triangles: usize,
    /// Whether the cap outline reconstruction hit its iteration limit.
    pub chain_limit_reached: bool,
    /// The cleanup of the kept half, if it succeeded.
    pub kept_cleanup: Option<CleanupReport>,
    /// The cleanup of the other half, if it succeeded.
    pub other_cleanup: Option<CleanupReport>,
}

impl SliceReport {
    /// Whether the plane actually crossed the mesh.
    pub fn is_cut(&self) -> bool {
        self.split_triangles > 0
    }
}

/// The two halves of a mesh cut by a plane.
#[derive(Clone, Debug)]
pub struct SlicedMeshes {
    /// The half on the [`Side::Left`](crate::shape::Side::Left) of the plane.
    pub kept: RenderMesh,
    /// The half on the [`Side::Right`](crate::shape::Side::Right) of the plane.
    pub other: RenderMesh,
    /// Statistics about the operation.
    pub report: SliceReport,
}

// Scratch state owned by a single slicing operation.
struct SliceContext {
    stage: SliceStage,
    kept: MeshAccumulator,
    other: MeshAccumulator,
    segments: Vec<BoundarySegment>,
    fallbacks: AttributeFallback,
    report: SliceReport,
}

impl SliceContext {
    fn new(num_submeshes: usize) -> Self {
        SliceContext {
            stage: SliceStage::Idle,
            kept: MeshAccumulator::with_submeshes(num_submeshes),
            other: MeshAccumulator::with_submeshes(num_submeshes),
            segments: vec![],
            fallbacks: AttributeFallback::empty(),
            report: SliceReport::default(),
        }
    }

    fn enter(&mut self, stage: SliceStage) {
        log::debug!("Slice stage: {:?} -> {:?}", self.stage, stage);
        self.stage = stage;
    }

    // Runs the splitting, capping and cleaning stages.
    fn cut(
        &mut self,
        mesh: &RenderMesh,
        plane: &CutPlane,
        options: &SliceOptions,
    ) -> SlicedMeshes {
        log::debug!(
            "Slicing {} triangles in {} submeshes with {:?}.",
            mesh.num_triangles(),
            mesh.num_submeshes(),
            plane
        );

        self.enter(SliceStage::Splitting);
        for (submesh, indices) in mesh.submeshes().iter().enumerate() {
            for idx in indices {
                let Some((triangle, fallback)) = mesh.gather_triangle(*idx, submesh as u32) else {
                    self.report.skipped_triangles += 1;
                    continue;
                };
                self.fallbacks |= fallback;

                match split_triangle(&triangle, plane, options.parallel_epsilon) {
                    SplitResult::Left => self.kept.add(triangle),
                    SplitResult::Right => self.other.add(triangle),
                    SplitResult::Pair(split) => {
                        self.kept.extend(split.left);
                        self.other.extend(split.right);
                        self.segments.push(split.segment);
                        self.report.split_triangles += 1;
                        self.report.midpoint_fallbacks += split.midpoint_fallbacks as usize;
                    }
                }
            }
        }

        if self.report.skipped_triangles > 0 {
            log::warn!(
                "Skipped {} triangles with out-of-range vertex indices.",
                self.report.skipped_triangles
            );
        }
        if self.fallbacks.contains(AttributeFallback::NORMALS) {
            log::warn!("The mesh has missing normals; face normals were used instead.");
        }
        if self.fallbacks.contains(AttributeFallback::UVS) {
            log::warn!("The mesh has missing texture coordinates; zeros were used instead.");
        }

        self.report.kept_triangles = self.kept.num_triangles();
        self.report.other_triangles = self.other.num_triangles();
        self.report.boundary_segments = self.segments.len();

        self.enter(SliceStage::Capping);
        if !self.segments.is_empty() {
            let cap_submesh = options.cap_submesh.resolve(mesh.num_submeshes());
            let caps = CapBuilder::new(options, cap_submesh).build(&self.segments, plane);

            self.report.cap_loops = caps.num_loops;
            self.report.cap_triangles = caps.left.len();
            self.report.chain_limit_reached = caps.chain_limit_reached;
            self.kept.extend(caps.left);
            self.other.extend(caps.right);
        }

        self.enter(SliceStage::Cleaning);
        let mut kept = mem::take(&mut self.kept).finalize();
        let mut other = mem::take(&mut self.other).finalize();
        self.report.kept_cleanup = clean_and_prepare(&mut kept, options, "kept");
        self.report.other_cleanup = clean_and_prepare(&mut other, options, "other");

        SlicedMeshes {
            kept,
            other,
            report: self.report,
        }
    }
}

/// Cuts `mesh` in two along `plane`, sealing both halves.
///
/// Every triangle lands in the half matching its [`Side`](crate::shape::Side);
/// triangles crossing the plane are split first. Both halves keep one submesh
/// per submesh of `mesh`, plus the cap submesh if it is a new one. They are then
/// cleaned of degenerate triangles and get fresh normals, bounds, and index
/// format.
///
/// If the plane misses the mesh, one of the halves is simply empty.
pub fn slice_mesh(mesh: &RenderMesh, plane: &CutPlane, options: &SliceOptions) -> SlicedMeshes {
    let mut ctx = SliceContext::new(mesh.num_submeshes());
    ctx.enter(SliceStage::Classifying);
    let sliced = ctx.cut(mesh, plane, options);
    ctx.enter(SliceStage::Done);
    sliced
}

fn clean_and_prepare(
    mesh: &mut RenderMesh,
    options: &SliceOptions,
    label: &str,
) -> Option<CleanupReport> {
    let report = match clean_mesh(mesh, &options.cleanup) {
        Ok(report) => Some(report),
        Err(err) => {
            log::warn!("Failed to clean the {} half; keeping it as is: {}", label, err);
            None
        }
    };

    mesh.set_index_format(IndexFormat::for_vertex_count(
        mesh.num_vertices(),
        options.u16_vertex_limit,
    ));
    mesh.recompute_normals();
    mesh.recompute_aabb();
    report
}

/// Slices scene objects with planes given in world-space.
///
/// The slicer holds no state besides its options and can be shared between
/// threads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Slicer {
    options: SliceOptions,
}

impl Slicer {
    /// A slicer with the given options.
    pub fn new(options: SliceOptions) -> Self {
        Slicer { options }
    }

    /// The options of this slicer.
    pub fn options(&self) -> &SliceOptions {
        &self.options
    }

    /// The cutting plane in the local-space of `object`.
    ///
    /// The plane passes through `contact_point` and its normal is the opposite
    /// of `cut_normal`: the [`Side::Left`](crate::shape::Side::Left) half, which
    /// the object keeps, is the one `cut_normal` points away from.
    pub fn local_plane(
        &self,
        object: &SceneObject,
        contact_point: &Point<Real>,
        cut_normal: &Vector<Real>,
    ) -> Result<CutPlane, SliceError> {
        if cut_normal.try_normalize(DEFAULT_EPSILON).is_none() {
            return Err(SliceError::DegenerateCutNormal);
        }

        let transform = &object.transform;
        let point = transform
            .inverse_transform_point(contact_point)
            .ok_or(SliceError::DegenerateTransform)?;
        let normal = transform
            .inverse_transform_normal(&-cut_normal)
            .ok_or(SliceError::DegenerateTransform)?;

        CutPlane::from_point_and_normal(&point, &normal).ok_or(SliceError::DegenerateCutNormal)
    }

    /// Slices `object` with the plane through `contact_point` orthogonal to
    /// `cut_normal`, both in world-space.
    ///
    /// The part of the mesh `cut_normal` points away from stays on `object`; the
    /// other part is returned as a new object with the same transform. Both get
    /// rebuilt materials and colliders. Returns an error, leaving `object`
    /// untouched, if the slice cannot be performed.
    pub fn slice(
        &self,
        object: &mut SceneObject,
        contact_point: &Point<Real>,
        cut_normal: &Vector<Real>,
    ) -> Result<SceneObject, SliceError> {
        self.slice_with_report(object, contact_point, cut_normal)
            .map(|(new_object, _)| new_object)
    }

    /// Same as [`Self::slice`], also returning statistics about the operation.
    pub fn slice_with_report(
        &self,
        object: &mut SceneObject,
        contact_point: &Point<Real>,
        cut_normal: &Vector<Real>,
    ) -> Result<(SceneObject, SliceReport), SliceError> {
        let result = self.try_slice(object, contact_point, cut_normal);

        if let Err(err) = &result {
            log::error!("Cannot slice `{}`: {}", object.name, err);
        }

        result
    }

    fn try_slice(
        &self,
        object: &mut SceneObject,
        contact_point: &Point<Real>,
        cut_normal: &Vector<Real>,
    ) -> Result<(SceneObject, SliceReport), SliceError> {
        let mesh = object.mesh.as_ref().ok_or(SliceError::MissingMesh)?;
        let mut ctx = SliceContext::new(mesh.num_submeshes());
        ctx.enter(SliceStage::Classifying);
        let plane = self.local_plane(object, contact_point, cut_normal)?;
        let source_materials = if object.materials.is_empty() {
            vec![Material::standard()]
        } else {
            object.materials.clone()
        };

        let SlicedMeshes {
            kept,
            other,
            report,
        } = ctx.cut(mesh, &plane, &self.options);

        ctx.enter(SliceStage::Materializing);
        let new_object = SceneObject {
            name: format!("{}{}", object.name, self.options.name_suffix),
            transform: object.transform,
            materials: Material::assign(&source_materials, other.num_submeshes()),
            collider: Some(Collider::from_mesh(&other)),
            mesh: Some(other),
        };

        object.materials = Material::assign(&source_materials, kept.num_submeshes());
        object.collider = Some(Collider::from_mesh(&kept));
        object.mesh = Some(kept);

        log::debug!(
            "Sliced `{}` into {} + {} triangles.",
            object.name,
            report.kept_triangles,
            report.other_triangles
        );

        ctx.enter(SliceStage::Done);
        Ok((new_object, report))
    }

    /// Slices each of `objects` with the same world-space plane.
    ///
    /// With the `parallel` feature, objects are sliced concurrently.
    pub fn slice_all(
        &self,
        objects: &mut [SceneObject],
        contact_point: &Point<Real>,
        cut_normal: &Vector<Real>,
    ) -> Vec<Result<SceneObject, SliceError>> {
        #[cfg(feature = "parallel")]
        let iter = objects.par_iter_mut();
        #[cfg(not(feature = "parallel"))]
        let iter = objects.iter_mut();

        iter.map(|object| self.slice(object, contact_point, cut_normal))
            .collect()
    }
}

/// Slices `object` with the default [`SliceOptions`].
///
/// See [`Slicer::slice`].
pub fn slice(
    object: &mut SceneObject,
    contact_point: &Point<Real>,
    cut_normal: &Vector<Real>,
) -> Result<SceneObject, SliceError> {
    Slicer::default().slice(object, contact_point, cut_normal)
}
