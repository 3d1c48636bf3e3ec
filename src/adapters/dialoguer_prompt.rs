use dialoguer::{Confirm, Input, Select};

use crate::domain::AppError;
use crate::ports::{PromptInput, Question, Validator};

/// Terminal prompts backed by `dialoguer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }
}

fn aborted(question: &Question<'_>, err: dialoguer::Error) -> AppError {
    AppError::PromptAborted(format!("{}: {}", question.key, err))
}

impl PromptInput for DialoguerPrompt {
    fn text(
        &self,
        question: &Question<'_>,
        default: &str,
        validator: Option<Validator>,
    ) -> Result<String, AppError> {
        // Initial text rather than a default so the user can clear it.
        let mut input = Input::<String>::new()
            .with_prompt(question.message)
            .with_initial_text(default)
            .allow_empty(true);
        if let Some(validate) = validator {
            input = input.validate_with(move |value: &String| validate(value));
        }
        input.interact_text().map_err(|err| aborted(question, err))
    }

    fn select(
        &self,
        question: &Question<'_>,
        choices: &[&str],
        default: usize,
    ) -> Result<usize, AppError> {
        Select::new()
            .with_prompt(question.message)
            .items(choices)
            .default(default)
            .interact()
            .map_err(|err| aborted(question, err))
    }

    fn confirm(&self, question: &Question<'_>, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(question.message)
            .default(default)
            .interact()
            .map_err(|err| aborted(question, err))
    }
}
