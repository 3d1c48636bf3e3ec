use std::fmt;

use super::slug::slugify;

/// Placeholder description offered when the user has nothing better to say.
pub const DEFAULT_DESCRIPTION: &str = "Awesome stuff, the modular and interoperable way";

/// Placeholder GitHub account offered for hosted documentation pages.
pub const DEFAULT_GITHUB_USER: &str = "aGithubUserName";

/// Bower install directory referenced by `.bowerrc` and the gulpfile.
pub const BOWER_COMPONENTS_DIR: &str = "lib/.bower_components";

/// Style-sheet preprocessor dialect of the generated component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleDialect {
    #[default]
    Sass,
    Scss,
}

impl StyleDialect {
    pub const ALL: [StyleDialect; 2] = [StyleDialect::Sass, StyleDialect::Scss];

    /// File extension without the leading dot; also the label shown in prompts.
    pub fn extension(self) -> &'static str {
        match self {
            StyleDialect::Sass => "sass",
            StyleDialect::Scss => "scss",
        }
    }
}

impl fmt::Display for StyleDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Where the component's reference page lives.
///
/// Exactly one of the two answers is collected per run, so the type carries
/// only the one that was asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocsSource {
    /// Derived GitHub Pages URL for the given account.
    Hosted { username: String },
    /// Arbitrary URL supplied by the user; may be empty.
    Explicit { url: String },
}

impl DocsSource {
    fn resolve(&self, component_file_name: &str) -> String {
        match self {
            DocsSource::Hosted { username } => {
                format!("http://{}.github.io/{}", username, component_file_name)
            }
            DocsSource::Explicit { url } => url.clone(),
        }
    }
}

/// Answers collected for a single scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    component_name: String,
    component_description: String,
    style_dialect: StyleDialect,
    docs: DocsSource,
    resolved_docs_url: String,
}

impl Configuration {
    pub fn new(
        component_name: impl Into<String>,
        component_description: impl Into<String>,
        style_dialect: StyleDialect,
        docs: DocsSource,
    ) -> Self {
        let component_name = component_name.into();
        let resolved_docs_url = docs.resolve(&slugify(&component_name));
        Self {
            component_name,
            component_description: component_description.into(),
            style_dialect,
            docs,
            resolved_docs_url,
        }
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    pub fn component_description(&self) -> &str {
        &self.component_description
    }

    pub fn style_dialect(&self) -> StyleDialect {
        self.style_dialect
    }

    pub fn docs(&self) -> &DocsSource {
        &self.docs
    }

    /// Reference page URL, fixed when the configuration was built.
    pub fn resolved_docs_url(&self) -> &str {
        &self.resolved_docs_url
    }

    /// Slug used for component file stems and in-template references.
    pub fn component_file_name(&self) -> String {
        slugify(&self.component_name)
    }
}
