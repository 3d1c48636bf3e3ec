use crate::ports::{OutputStore, TemplateSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<T: TemplateSource, O: OutputStore> {
    templates: T,
    output: O,
}

impl<T: TemplateSource, O: OutputStore> AppContext<T, O> {
    /// Create a new application context.
    pub fn new(templates: T, output: O) -> Self {
        Self { templates, output }
    }

    /// Get a reference to the template source.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Get a reference to the output store.
    pub fn output(&self) -> &O {
        &self.output
    }
}
