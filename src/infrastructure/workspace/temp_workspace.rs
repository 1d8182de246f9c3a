use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::application::ports::{WorkspaceError, WorkspaceManager};
use crate::domain::WorkingFileSet;

/// Scratch directory for per-request files. Created once at startup; the
/// directory itself is ephemeral and never treated as durable state.
pub struct TempWorkspace {
    scratch_dir: PathBuf,
}

impl TempWorkspace {
    pub fn new(scratch_dir: impl Into<PathBuf>) -> Result<Self, WorkspaceError> {
        let scratch_dir = scratch_dir.into();
        std::fs::create_dir_all(&scratch_dir).map_err(WorkspaceError::ScratchDirUnavailable)?;
        Ok(Self { scratch_dir })
    }

    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }
}

impl WorkspaceManager for TempWorkspace {
    fn allocate(&self) -> Result<WorkingFileSet, WorkspaceError> {
        // The directory may have been swept since startup.
        std::fs::create_dir_all(&self.scratch_dir).map_err(WorkspaceError::ScratchDirUnavailable)?;
        let unique_id = Uuid::new_v4().simple().to_string();
        Ok(WorkingFileSet::new(&self.scratch_dir, unique_id))
    }
}
