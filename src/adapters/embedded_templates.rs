use include_dir::{Dir, include_dir};

use crate::domain::AppError;
use crate::ports::TemplateSource;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Template set compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn read(&self, source: &str) -> Result<Vec<u8>, AppError> {
        TEMPLATES_DIR
            .get_file(source)
            .map(|file| file.contents().to_vec())
            .ok_or_else(|| AppError::TemplateNotFound(source.to_string()))
    }
}
