//! Directory the position images are read from

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ImageDirectory {
    root: Arc<PathBuf>,
}

impl ImageDirectory {
    pub fn new(root: impl Into<PathBuf>) -> ImageDirectory {
        ImageDirectory {
            root: Arc::new(root.into()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the directory (and parents) if it is missing.
    pub async fn ensure_exists(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(self.root.as_path()).await
    }

    /// Maps a client supplied filename to a path inside the directory.
    ///
    /// Only a single, non-hidden path segment is accepted; anything that could climb out of the
    /// directory yields `None`.
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        is_plain_filename(filename).then(|| self.root.join(filename))
    }
}

fn is_plain_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.starts_with('.')
        && !filename.contains(['/', '\\', ':', '\0'])
}
