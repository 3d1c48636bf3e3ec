use crate::domain::AppError;

/// Answer check run before a text answer is accepted.
///
/// Returns a human-readable reason on rejection.
pub type Validator = fn(&str) -> Result<(), String>;

/// A single question put to the user.
#[derive(Debug, Clone, Copy)]
pub struct Question<'a> {
    /// Stable key; also the answers-file field name.
    pub key: &'a str,
    /// Text shown to the user.
    pub message: &'a str,
}

/// Port for collecting answers, interactively or from a prepared source.
///
/// Every method fails only when the input source cannot produce an answer
/// (end of stream, terminal failure, malformed pre-supplied answer).
pub trait PromptInput {
    /// Ask for free text, pre-filled with `default`.
    fn text(
        &self,
        question: &Question<'_>,
        default: &str,
        validator: Option<Validator>,
    ) -> Result<String, AppError>;

    /// Ask for one of `choices`; returns the chosen index.
    fn select(
        &self,
        question: &Question<'_>,
        choices: &[&str],
        default: usize,
    ) -> Result<usize, AppError>;

    /// Ask a yes/no question.
    fn confirm(&self, question: &Question<'_>, default: bool) -> Result<bool, AppError>;
}
