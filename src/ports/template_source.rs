use crate::domain::AppError;

/// Port for reading template files from a template root.
pub trait TemplateSource {
    /// Read the template at `source` (a `/`-separated path relative to the root).
    ///
    /// A missing template is a packaging defect and yields `AppError::TemplateNotFound`.
    fn read(&self, source: &str) -> Result<Vec<u8>, AppError>;
}
