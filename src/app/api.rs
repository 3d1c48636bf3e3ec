//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::{
    AnswersFile, CommandInstaller, DialoguerPrompt, DirectoryTemplates, EmbeddedTemplates,
    FilesystemOutputStore,
};
use crate::app::AppContext;
use crate::app::commands::{install, scaffold};
use crate::ports::PromptInput;

pub use crate::app::commands::scaffold::ScaffoldOutcome;
pub use crate::domain::AppError;

/// Options for a scaffolding run.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    /// Do not signal dependency installation after writing files.
    pub skip_install: bool,
    /// Answer questions from this TOML file instead of the terminal.
    pub answers: Option<PathBuf>,
    /// Render from this directory instead of the embedded template set.
    pub templates: Option<PathBuf>,
}

/// Scaffold a component into the current directory.
pub fn scaffold(options: &ScaffoldOptions) -> Result<ScaffoldOutcome, AppError> {
    scaffold_at(std::env::current_dir()?, options)
}

/// Scaffold a component into `root`, creating it if needed.
///
/// The component name defaults to the base name of `root`.
pub fn scaffold_at(
    root: impl Into<PathBuf>,
    options: &ScaffoldOptions,
) -> Result<ScaffoldOutcome, AppError> {
    let root = absolute_root(root.into())?;
    let default_name = default_component_name(&root);
    tracing::debug!(root = %root.display(), default_name = %default_name, "starting scaffold");

    let prompt: Box<dyn PromptInput> = match &options.answers {
        Some(path) => Box::new(AnswersFile::load(path)?),
        None => Box::new(DialoguerPrompt::new()),
    };
    let output = FilesystemOutputStore::new(root);

    match &options.templates {
        Some(dir) => {
            let ctx = AppContext::new(DirectoryTemplates::new(dir), output);
            scaffold::execute(&ctx, prompt.as_ref(), &default_name, options.skip_install)
        }
        None => {
            let ctx = AppContext::new(EmbeddedTemplates::new(), output);
            scaffold::execute(&ctx, prompt.as_ref(), &default_name, options.skip_install)
        }
    }
}

/// Install npm and bower dependencies for a finished run, unless it opted out.
///
/// Returns whether installation ran.
pub fn install(outcome: &ScaffoldOutcome) -> Result<bool, AppError> {
    install::execute(&CommandInstaller::new(), outcome)
}

fn absolute_root(root: PathBuf) -> Result<PathBuf, AppError> {
    if root.exists() {
        return Ok(fs::canonicalize(&root)?);
    }
    Ok(std::path::absolute(&root)?)
}

fn default_component_name(root: &Path) -> String {
    root.file_name().map(|name| name.to_string_lossy().to_string()).unwrap_or_default()
}
