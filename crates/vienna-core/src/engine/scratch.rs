use super::error::EngineError;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, warn};

/// Unique working directory for a single engine invocation.
///
/// The engine's auxiliary files (`dot.ps`, `inverse.in`) are created here, so
/// concurrent invocations never share them. The directory and its contents are
/// removed when the value is dropped, on success and error paths alike.
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    /// Creates the directory under `root`, or under the system temp dir.
    pub fn new(root: Option<&Path>) -> Result<Self, EngineError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("vienna-");
        let dir = match root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(|e| EngineError::io("creating scratch directory", e))?;
        debug!(path = %dir.path().display(), "Created scratch directory.");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes `contents` to `name` inside the directory.
    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf, EngineError> {
        let path = self.join(name);
        std::fs::write(&path, contents)
            .map_err(|e| EngineError::io(format!("writing {}", path.display()), e))?;
        Ok(path)
    }

    /// Removes the directory now, logging rather than failing on errors.
    pub fn close(self) {
        let path = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            warn!(path = %path.display(), error = %e, "Failed to remove scratch directory.");
        }
    }

    pub fn exists(&self) -> io::Result<bool> {
        self.dir.path().try_exists()
    }
}
