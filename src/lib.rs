//! polygulp: scaffold a Polymer component project with a gulp build pipeline.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{ScaffoldOptions, ScaffoldOutcome, install, scaffold, scaffold_at};
pub use domain::{AppError, Configuration, DocsSource, StyleDialect, slugify};
