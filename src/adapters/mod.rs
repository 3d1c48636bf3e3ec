pub mod answers_file;
pub mod command_installer;
pub mod dialoguer_prompt;
pub mod directory_templates;
pub mod embedded_templates;
pub mod filesystem_output;

pub use answers_file::AnswersFile;
pub use command_installer::CommandInstaller;
pub use dialoguer_prompt::DialoguerPrompt;
pub use directory_templates::DirectoryTemplates;
pub use embedded_templates::EmbeddedTemplates;
pub use filesystem_output::FilesystemOutputStore;
