//! Cleanup passes applied to meshes produced by slicing.

pub use self::mesh_cleanup::{
    clean_mesh, CleanupFlags, CleanupOptions, CleanupReport, MeshCleanupError,
};

mod mesh_cleanup;
