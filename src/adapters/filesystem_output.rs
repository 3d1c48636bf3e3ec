use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::OutputStore;

/// Output store writing to a directory on disk.
#[derive(Debug, Clone)]
pub struct FilesystemOutputStore {
    root: PathBuf,
}

impl FilesystemOutputStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl OutputStore for FilesystemOutputStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self, relative: &Path) -> Result<(), AppError> {
        let path = self.root.join(relative);
        fs::create_dir_all(&path).map_err(|err| AppError::write_error(path, err))
    }

    fn write(&self, relative: &Path, content: &[u8]) -> Result<(), AppError> {
        let path = self.root.join(relative);
        fs::write(&path, content).map_err(|err| AppError::write_error(path, err))
    }
}
