use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::AppError;
use crate::ports::{PromptInput, Question, Validator};

#[derive(Debug, Clone)]
enum Scripted {
    Text(String),
    Choice(String),
    Flag(bool),
}

/// Prompt double answering from a script and recording what was asked.
///
/// Unscripted questions take their default. With `closed_after`, the stream
/// ends once that many questions were asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: HashMap<String, Scripted>,
    asked: RefCell<Vec<String>>,
    closed_after: Option<usize>,
}

#[allow(dead_code)]
impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_text(mut self, key: &str, value: &str) -> Self {
        self.answers.insert(key.to_string(), Scripted::Text(value.to_string()));
        self
    }

    pub fn answer_choice(mut self, key: &str, value: &str) -> Self {
        self.answers.insert(key.to_string(), Scripted::Choice(value.to_string()));
        self
    }

    pub fn answer_flag(mut self, key: &str, value: bool) -> Self {
        self.answers.insert(key.to_string(), Scripted::Flag(value));
        self
    }

    pub fn closed_after(mut self, questions: usize) -> Self {
        self.closed_after = Some(questions);
        self
    }

    /// Keys of the questions asked so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn ask(&self, question: &Question<'_>) -> Result<Option<Scripted>, AppError> {
        let mut asked = self.asked.borrow_mut();
        if self.closed_after.is_some_and(|limit| asked.len() >= limit) {
            return Err(AppError::PromptAborted(format!("{}: end of input", question.key)));
        }
        asked.push(question.key.to_string());
        Ok(self.answers.get(question.key).cloned())
    }
}

impl PromptInput for ScriptedPrompt {
    fn text(
        &self,
        question: &Question<'_>,
        default: &str,
        validator: Option<Validator>,
    ) -> Result<String, AppError> {
        let value = match self.ask(question)? {
            Some(Scripted::Text(value)) => value,
            None => default.to_string(),
            Some(other) => panic!("{} scripted as {:?}, asked as text", question.key, other),
        };
        if let Some(validate) = validator {
            validate(&value).map_err(|details| AppError::InvalidAnswer {
                key: question.key.to_string(),
                details,
            })?;
        }
        Ok(value)
    }

    fn select(
        &self,
        question: &Question<'_>,
        choices: &[&str],
        default: usize,
    ) -> Result<usize, AppError> {
        match self.ask(question)? {
            Some(Scripted::Choice(value)) => Ok(choices
                .iter()
                .position(|choice| *choice == value)
                .unwrap_or_else(|| panic!("{} is not a choice of {}", value, question.key))),
            None => Ok(default),
            Some(other) => panic!("{} scripted as {:?}, asked as select", question.key, other),
        }
    }

    fn confirm(&self, question: &Question<'_>, default: bool) -> Result<bool, AppError> {
        match self.ask(question)? {
            Some(Scripted::Flag(value)) => Ok(value),
            None => Ok(default),
            Some(other) => panic!("{} scripted as {:?}, asked as confirm", question.key, other),
        }
    }
}
