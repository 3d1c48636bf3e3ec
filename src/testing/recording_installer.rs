use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::Installer;

/// Installer double that records the roots it was asked to install into.
#[derive(Debug, Default)]
pub struct RecordingInstaller {
    pub calls: RefCell<Vec<PathBuf>>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Installer for RecordingInstaller {
    fn install(&self, project_root: &Path) -> Result<(), AppError> {
        self.calls.borrow_mut().push(project_root.to_path_buf());
        Ok(())
    }
}
