mod installer;
mod output_store;
mod prompt_input;
mod template_source;

pub use installer::Installer;
pub use output_store::OutputStore;
pub use prompt_input::{PromptInput, Question, Validator};
pub use template_source::TemplateSource;
