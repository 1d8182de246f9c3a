use crate::domain::WorkingFileSet;

/// Allocates per-request scratch files. Implementations own the scratch
/// directory; callers own the returned set and its cleanup.
pub trait WorkspaceManager: Send + Sync {
    fn allocate(&self) -> Result<WorkingFileSet, WorkspaceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("scratch directory unavailable: {0}")]
    ScratchDirUnavailable(std::io::Error),
}
