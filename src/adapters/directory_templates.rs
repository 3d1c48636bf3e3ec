use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::TemplateSource;

/// Template set read from a directory on disk.
///
/// Mirrors the embedded layout, so a copy of `src/assets/templates` can be
/// edited and passed with `--templates`.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateSource for DirectoryTemplates {
    fn read(&self, source: &str) -> Result<Vec<u8>, AppError> {
        let path = source.split('/').fold(self.root.clone(), |path, part| path.join(part));
        fs::read(&path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => AppError::TemplateNotFound(path.display().to_string()),
            _ => AppError::Io(err),
        })
    }
}
