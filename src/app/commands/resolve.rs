//! Prompt resolution: asks the questions in order and builds a `Configuration`.

use crate::domain::{
    AppError, Configuration, DEFAULT_DESCRIPTION, DEFAULT_GITHUB_USER, DocsSource, StyleDialect,
    slugify,
};
use crate::ports::{PromptInput, Question};

pub const COMPONENT_NAME: Question<'static> =
    Question { key: "componentName", message: "What is your component's name" };

pub const COMPONENT_DESCRIPTION: Question<'static> = Question {
    key: "componentDescription",
    message: "Please provide a short description for your component",
};

pub const STYLE_DIALECT: Question<'static> =
    Question { key: "sassOrScss", message: "Sass or Scss, this is the question" };

pub const USE_GITHUB: Question<'static> =
    Question { key: "useGithub", message: "Would you like to use github for this component?" };

pub const GH_USER: Question<'static> =
    Question { key: "ghUser", message: "Could you please provide me with your github username?" };

pub const COMPONENT_PAGE: Question<'static> = Question {
    key: "componentPage",
    message: "Please provide me with a specific reference page for this component (optional)",
};

/// Execute the prompt sequence.
///
/// Questions are asked strictly in order; the GitHub answer decides whether
/// the username or the explicit page is asked next, never both.
pub fn execute<P>(prompt: &P, default_name: &str) -> Result<Configuration, AppError>
where
    P: PromptInput + ?Sized,
{
    let component_name = prompt.text(&COMPONENT_NAME, default_name, Some(validate_name))?;
    let component_description = prompt.text(&COMPONENT_DESCRIPTION, DEFAULT_DESCRIPTION, None)?;

    let labels: Vec<&str> = StyleDialect::ALL.iter().map(|dialect| dialect.extension()).collect();
    let index = prompt.select(&STYLE_DIALECT, &labels, 0)?;
    let style_dialect = *StyleDialect::ALL.get(index).ok_or_else(|| AppError::InvalidAnswer {
        key: STYLE_DIALECT.key.to_string(),
        details: format!("choice {} out of range", index),
    })?;

    let docs = if prompt.confirm(&USE_GITHUB, true)? {
        DocsSource::Hosted { username: prompt.text(&GH_USER, DEFAULT_GITHUB_USER, None)? }
    } else {
        DocsSource::Explicit { url: prompt.text(&COMPONENT_PAGE, "", None)? }
    };

    let config = Configuration::new(component_name, component_description, style_dialect, docs);
    tracing::debug!(
        component = config.component_name(),
        dialect = %config.style_dialect(),
        docs_url = config.resolved_docs_url(),
        "resolved configuration"
    );
    Ok(config)
}

fn validate_name(value: &str) -> Result<(), String> {
    if slugify(value).is_empty() {
        Err("must contain at least one letter or digit".to_string())
    } else {
        Ok(())
    }
}
