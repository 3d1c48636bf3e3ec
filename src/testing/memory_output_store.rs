use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::OutputStore;

/// In-memory output store enforcing "parent exists before write".
#[derive(Debug, Default)]
pub struct MemoryOutputStore {
    root: PathBuf,
    dirs: RefCell<BTreeSet<PathBuf>>,
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    fail_on: Option<PathBuf>,
}

#[allow(dead_code)]
impl MemoryOutputStore {
    pub fn new() -> Self {
        Self { root: PathBuf::from("/out"), ..Self::default() }
    }

    /// Fail any write to `relative` with a permission error.
    pub fn failing_on(mut self, relative: impl Into<PathBuf>) -> Self {
        self.fail_on = Some(relative.into());
        self
    }

    pub fn seed(&self, relative: &str, content: &[u8]) {
        self.files.borrow_mut().insert(PathBuf::from(relative), content.to_vec());
    }

    pub fn file(&self, relative: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(Path::new(relative)).cloned()
    }

    pub fn file_text(&self, relative: &str) -> Option<String> {
        self.file(relative).map(|bytes| String::from_utf8(bytes).expect("utf-8 output"))
    }

    /// Written file paths with `/` separators.
    pub fn file_paths(&self) -> BTreeSet<String> {
        self.files
            .borrow()
            .keys()
            .map(|path| path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    pub fn has_dir(&self, relative: &str) -> bool {
        self.dirs.borrow().contains(Path::new(relative))
    }
}

impl OutputStore for MemoryOutputStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self, relative: &Path) -> Result<(), AppError> {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in relative.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn write(&self, relative: &Path, content: &[u8]) -> Result<(), AppError> {
        if self.fail_on.as_deref() == Some(relative) {
            return Err(AppError::write_error(
                self.root.join(relative),
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }
        if let Some(parent) = relative.parent()
            && !parent.as_os_str().is_empty()
            && !self.dirs.borrow().contains(parent)
        {
            return Err(AppError::write_error(
                self.root.join(relative),
                io::Error::new(io::ErrorKind::NotFound, "parent directory missing"),
            ));
        }
        self.files.borrow_mut().insert(relative.to_path_buf(), content.to_vec());
        Ok(())
    }
}
