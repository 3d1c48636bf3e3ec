mod memory_output_store;
mod recording_installer;
mod scripted_prompt;

pub use memory_output_store::MemoryOutputStore;
pub use memory_templates::MemoryTemplates;
pub use recording_installer::RecordingInstaller;
pub use scripted_prompt::ScriptedPrompt;
