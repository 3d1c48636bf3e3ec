//! Scaffold command: resolve answers, then materialize the template set.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, Configuration};
use crate::ports::{OutputStore, PromptInput, TemplateSource};

use super::{materialize, resolve};

/// Result of a scaffolding run.
#[derive(Debug, Clone)]
pub struct ScaffoldOutcome {
    /// Output root the files were written under.
    pub root: PathBuf,
    /// Resolved answers.
    pub config: Configuration,
    /// Written files, relative to `root`, in manifest order.
    pub files: Vec<PathBuf>,
    /// Whether dependency installation should follow.
    pub install_required: bool,
}

/// Execute the scaffold command.
pub fn execute<T, O, P>(
    ctx: &AppContext<T, O>,
    prompt: &P,
    default_name: &str,
    skip_install: bool,
) -> Result<ScaffoldOutcome, AppError>
where
    T: TemplateSource,
    O: OutputStore,
    P: PromptInput + ?Sized,
{
    let config = resolve::execute(prompt, default_name)?;
    let files = materialize::execute(&config, ctx.templates(), ctx.output())?;

    Ok(ScaffoldOutcome {
        root: ctx.output().root().to_path_buf(),
        config,
        files: files.into_iter().map(|file| file.destination).collect(),
        install_required: !skip_install,
    })
}
