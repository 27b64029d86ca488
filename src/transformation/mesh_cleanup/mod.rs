pub use self::mesh_cleanup::{clean_mesh, CleanupFlags, CleanupOptions, CleanupReport};
pub use self::mesh_cleanup_error::MeshCleanupError;

mod mesh_cleanup;
mod mesh_cleanup_error;
