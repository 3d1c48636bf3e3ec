//! Non-interactive answers loaded from a TOML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::AppError;
use crate::ports::{PromptInput, Question, Validator};

/// Pre-supplied answers keyed by question.
///
/// Questions without an entry take their default, so an empty file accepts
/// every default.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct AnswersFile {
    component_name: Option<String>,
    component_description: Option<String>,
    sass_or_scss: Option<String>,
    use_github: Option<bool>,
    gh_user: Option<String>,
    component_page: Option<String>,
}

enum Answer<'a> {
    Text(&'a str),
    Flag(bool),
}

impl AnswersFile {
    /// Answers that accept every default.
    pub fn defaults() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|err| AppError::AnswersFile {
            path: path.to_path_buf(),
            details: err.to_string(),
        })?;
        Self::parse(&content).map_err(|details| AppError::AnswersFile {
            path: path.to_path_buf(),
            details,
        })
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|err| err.to_string())
    }

    fn lookup(&self, key: &str) -> Option<Answer<'_>> {
        match key {
            "componentName" => self.component_name.as_deref().map(Answer::Text),
            "componentDescription" => self.component_description.as_deref().map(Answer::Text),
            "sassOrScss" => self.sass_or_scss.as_deref().map(Answer::Text),
            "useGithub" => self.use_github.map(Answer::Flag),
            "ghUser" => self.gh_user.as_deref().map(Answer::Text),
            "componentPage" => self.component_page.as_deref().map(Answer::Text),
            _ => None,
        }
    }
}

fn invalid(question: &Question<'_>, details: impl Into<String>) -> AppError {
    AppError::InvalidAnswer { key: question.key.to_string(), details: details.into() }
}

impl PromptInput for AnswersFile {
    fn text(
        &self,
        question: &Question<'_>,
        default: &str,
        validator: Option<Validator>,
    ) -> Result<String, AppError> {
        let value = match self.lookup(question.key) {
            Some(Answer::Text(value)) => value,
            Some(Answer::Flag(_)) => return Err(invalid(question, "expected a string")),
            None => default,
        };
        if let Some(validate) = validator {
            validate(value).map_err(|details| invalid(question, details))?;
        }
        Ok(value.to_string())
    }

    fn select(
        &self,
        question: &Question<'_>,
        choices: &[&str],
        default: usize,
    ) -> Result<usize, AppError> {
        match self.lookup(question.key) {
            Some(Answer::Text(value)) => {
                choices.iter().position(|choice| *choice == value).ok_or_else(|| {
                    invalid(question, format!("expected one of: {}", choices.join(", ")))
                })
            }
            Some(Answer::Flag(_)) => Err(invalid(question, "expected a string")),
            None => Ok(default),
        }
    }

    fn confirm(&self, question: &Question<'_>, default: bool) -> Result<bool, AppError> {
        match self.lookup(question.key) {
            Some(Answer::Flag(value)) => Ok(value),
            Some(Answer::Text(_)) => Err(invalid(question, "expected true or false")),
            None => Ok(default),
        }
    }
}
