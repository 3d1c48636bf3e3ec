use std::path::Path;

use crate::domain::AppError;

/// Port for materializing files under an output root.
pub trait OutputStore {
    /// Absolute (or caller-relative) output root.
    fn root(&self) -> &Path;

    /// Create `relative` and all of its parents. Existing directories are not an error.
    fn ensure_dir(&self, relative: &Path) -> Result<(), AppError>;

    /// Write `content` to `relative`, replacing any existing file.
    ///
    /// The parent directory must already exist.
    fn write(&self, relative: &Path, content: &[u8]) -> Result<(), AppError>;
}
