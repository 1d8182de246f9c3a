use std::path::{Path, PathBuf};

/// The filesystem footprint of one pipeline run: input PDF, translation
/// prompt, and the canonical translated output, all named after one fresh
/// random id inside the scratch directory.
///
/// Every path here must be gone once the run ends, whatever the outcome.
/// `release` does that explicitly; `Drop` repeats it so the invariant also
/// holds on early returns and panics.
#[derive(Debug)]
pub struct WorkingFileSet {
    unique_id: String,
    scratch_dir: PathBuf,
    input_path: PathBuf,
    prompt_path: PathBuf,
    output_path: PathBuf,
}

impl WorkingFileSet {
    pub fn new(scratch_dir: &Path, unique_id: String) -> Self {
        let input_path = scratch_dir.join(format!("original_{unique_id}.pdf"));
        let prompt_path = scratch_dir.join(format!("prompt_{unique_id}.txt"));
        let output_path = scratch_dir.join(format!("translated_{unique_id}.pdf"));
        Self {
            unique_id,
            scratch_dir: scratch_dir.to_path_buf(),
            input_path,
            prompt_path,
            output_path,
        }
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn prompt_path(&self) -> &Path {
        &self.prompt_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// File name stem the translator's output is expected to contain.
    pub fn input_stem(&self) -> String {
        format!("original_{}", self.unique_id)
    }

    /// Deletes every allocated path that exists. A missing file is not an
    /// error, and one failed deletion does not stop the others.
    pub fn release(&self) {
        for path in [&self.input_path, &self.prompt_path, &self.output_path] {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to remove temp file");
                }
            }
        }
    }
}

impl Drop for WorkingFileSet {
    fn drop(&mut self) {
        self.release();
    }
}
