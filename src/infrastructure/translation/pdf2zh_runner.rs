use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{Translator, TranslatorError};
use crate::domain::WorkingFileSet;

/// Hard wall-clock limit on one translation attempt.
pub const TRANSLATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Suffix pdf2zh appends to its single-language output.
const OUTPUT_SUFFIX: &str = "-mono.pdf";

/// Runs the external `pdf2zh` CLI against the input PDF of a working file
/// set. The tool writes its output next to the input under its own naming
/// scheme, so success is confirmed by scanning the scratch directory and
/// moving the match to the canonical output path.
///
/// One attempt per request, no retries. Constrained to a single worker
/// thread to bound memory on small deployments.
pub struct Pdf2zhRunner {
    command: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl Pdf2zhRunner {
    pub fn new(command: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            command: command.into(),
            api_key: api_key.filter(|k| !k.is_empty()),
            timeout: TRANSLATION_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl Translator for Pdf2zhRunner {
    #[tracing::instrument(skip(self, files, prompt_text), fields(unique_id = files.unique_id()))]
    async fn translate(
        &self,
        files: &WorkingFileSet,
        prompt_text: &str,
    ) -> Result<PathBuf, TranslatorError> {
        // Without a key the runner never starts; the caller records a failed
        // translation and moves on.
        let api_key = self.api_key.as_deref().ok_or(TranslatorError::Skipped)?;

        tokio::fs::write(files.prompt_path(), prompt_text).await?;

        let mut child = Command::new(&self.command)
            .arg(files.input_path())
            .args(["-li", "en", "-lo", "ko"])
            .args(["-s", "google:gemini"])
            .arg("-o")
            .arg(files.scratch_dir())
            .arg("--prompt")
            .arg(files.prompt_path())
            .args(["-t", "1"])
            .env("GEMINI_API_KEY", api_key)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        tracing::info!(command = %self.command, "translation process started");

        let status = match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(waited) => waited?,
            Err(_) => {
                let _ = child.kill().await;
                return Err(TranslatorError::TimedOut(self.timeout.as_secs()));
            }
        };

        if !status.success() {
            return Err(TranslatorError::NonZeroExit(status.code().unwrap_or(-1)));
        }

        let found = find_translated_output(files).await?;
        tokio::fs::rename(&found, files.output_path()).await?;

        tracing::info!(output = %files.output_path().display(), "translation succeeded");
        Ok(files.output_path().to_path_buf())
    }
}

/// Scans the scratch directory for a file that carries the run's unique
/// input stem and the pdf2zh output suffix.
pub async fn find_translated_output(files: &WorkingFileSet) -> Result<PathBuf, TranslatorError> {
    let stem = files.input_stem();
    let mut entries = tokio::fs::read_dir(files.scratch_dir()).await?;

    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.ends_with(OUTPUT_SUFFIX) && name.contains(&stem) {
            return Ok(entry.path());
        }
    }

    Err(TranslatorError::OutputMissing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pdf2zh-test-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn missing_api_key_skips_without_running() {
        let dir = scratch("skip");
        let files = WorkingFileSet::new(&dir, "skipid".to_string());
        let runner = Pdf2zhRunner::new("definitely-not-a-command", None);

        let result = runner.translate(&files, "prompt").await;
        assert!(matches!(result, Err(TranslatorError::Skipped)));
        // Skipping happens before the prompt file is written.
        assert!(!files.prompt_path().exists());

        drop(files);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn scan_finds_the_suffixed_output() {
        let dir = scratch("scan");
        let files = WorkingFileSet::new(&dir, "scanid".to_string());
        let produced = dir.join("original_scanid.en.ko-mono.pdf");
        std::fs::write(&produced, b"pdf").unwrap();
        // A neighboring run's output must not match.
        std::fs::write(dir.join("original_other-mono.pdf"), b"pdf").unwrap();

        let found = find_translated_output(&files).await.unwrap();
        assert_eq!(found, produced);

        drop(files);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn scan_without_output_reports_missing() {
        let dir = scratch("none");
        let files = WorkingFileSet::new(&dir, "noneid".to_string());

        let result = find_translated_output(&files).await;
        assert!(matches!(result, Err(TranslatorError::OutputMissing)));

        drop(files);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn successful_process_output_is_moved_to_the_canonical_path() {
        use std::os::unix::fs::PermissionsExt;

        let dir = scratch("ok");
        let files = WorkingFileSet::new(&dir, "okid".to_string());

        // Fake translator: ignores its arguments and drops a -mono.pdf next
        // to the input, like pdf2zh does.
        let script = dir.join("fake-pdf2zh.sh");
        std::fs::write(
            &script,
            format!(
                "#!/bin/sh\nprintf pdf > {}\n",
                dir.join("original_okid.en.ko-mono.pdf").display()
            ),
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let runner = Pdf2zhRunner::new(script.to_str().unwrap(), Some("test-key".to_string()));
        let output = runner.translate(&files, "prompt").await.unwrap();

        assert_eq!(output, files.output_path());
        assert!(files.output_path().exists());
        assert!(files.prompt_path().exists());

        files.release();
        drop(files);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_a_failure() {
        use std::os::unix::fs::PermissionsExt;

        let dir = scratch("exit");
        let files = WorkingFileSet::new(&dir, "exitid".to_string());

        let script = dir.join("failing-pdf2zh.sh");
        std::fs::write(&script, "#!/bin/sh\nexit 3\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let runner = Pdf2zhRunner::new(script.to_str().unwrap(), Some("test-key".to_string()));
        let result = runner.translate(&files, "prompt").await;
        assert!(matches!(result, Err(TranslatorError::NonZeroExit(3))));

        drop(files);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn timeout_kills_the_process() {
        use std::os::unix::fs::PermissionsExt;

        let dir = scratch("slow");
        let files = WorkingFileSet::new(&dir, "slowid".to_string());

        let script = dir.join("slow-pdf2zh.sh");
        std::fs::write(&script, "#!/bin/sh\nsleep 30\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let runner = Pdf2zhRunner::new(script.to_str().unwrap(), Some("test-key".to_string()))
            .with_timeout(Duration::from_millis(200));
        let result = runner.translate(&files, "prompt").await;
        assert!(matches!(result, Err(TranslatorError::TimedOut(_))));

        drop(files);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let runner = Pdf2zhRunner::new("pdf2zh", Some(String::new()));
        assert!(runner.api_key.is_none());
    }
}
