//! Template materialization: renders the manifest and writes it to the output root.

use crate::domain::manifest::{self, PlannedFile};
use crate::domain::{AppError, Configuration, RenderMode, render};
use crate::ports::{OutputStore, TemplateSource};

/// Execute materialization for a resolved configuration.
///
/// Every template is loaded and rendered before the first write, so a missing
/// or broken template aborts with the output root untouched. Filesystem
/// errors during writing abort immediately and leave earlier files in place.
pub fn execute<T, O>(
    config: &Configuration,
    templates: &T,
    output: &O,
) -> Result<Vec<PlannedFile>, AppError>
where
    T: TemplateSource + ?Sized,
    O: OutputStore + ?Sized,
{
    let component_file_name = config.component_file_name();
    if component_file_name.is_empty() {
        return Err(AppError::InvalidComponentName(config.component_name().to_string()));
    }

    let files = manifest::plan(&component_file_name, config.style_dialect());
    let mut rendered = Vec::with_capacity(files.len());
    for file in &files {
        rendered.push(load(file, config, templates)?);
    }

    for dir in manifest::component_dirs() {
        output.ensure_dir(&dir)?;
    }

    for (file, content) in files.iter().zip(rendered) {
        if let Some(parent) = file.destination.parent()
            && !parent.as_os_str().is_empty()
        {
            output.ensure_dir(parent)?;
        }
        output.write(&file.destination, &content)?;
        tracing::debug!(path = %file.destination.display(), source = %file.source, "wrote file");
    }

    tracing::info!(
        files = files.len(),
        root = %output.root().display(),
        "materialized component"
    );
    Ok(files)
}

fn load<T>(file: &PlannedFile, config: &Configuration, templates: &T) -> Result<Vec<u8>, AppError>
where
    T: TemplateSource + ?Sized,
{
    let raw = templates.read(&file.source)?;
    match file.mode {
        RenderMode::Verbatim => Ok(raw),
        RenderMode::Rendered => {
            let text = String::from_utf8(raw).map_err(|_| AppError::TemplateRender {
                template: file.source.clone(),
                details: "template is not valid UTF-8".to_string(),
            })?;
            Ok(render::render(&text, config, &file.source)?.into_bytes())
        }
    }
}
