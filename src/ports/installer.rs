use std::path::Path;

use crate::domain::AppError;

/// Port for the package installation step run after scaffolding.
pub trait Installer {
    fn install(&self, project_root: &Path) -> Result<(), AppError>;
}
