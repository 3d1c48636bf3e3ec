pub mod configuration;
pub mod error;
pub mod manifest;
pub mod render;
pub mod slug;

pub use configuration::{
    BOWER_COMPONENTS_DIR, Configuration, DEFAULT_DESCRIPTION, DEFAULT_GITHUB_USER, DocsSource,
    StyleDialect,
};
pub use error::AppError;
pub use manifest::{APP_DIR, PlannedFile, RenderMode, TEMPLATE_ENTRIES, TemplateEntry, Tier};
pub use slug::slugify;
