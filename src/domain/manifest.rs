//! Static template manifest and output path planning.

use std::path::PathBuf;

use super::configuration::StyleDialect;

/// Directory holding the component tier, relative to the output root.
pub const APP_DIR: &str = "app";

/// Directories created under [`APP_DIR`] before any file is written.
pub const COMPONENT_DIRS: [&str; 6] =
    ["scripts", "images", "public", "styles", "styles/components", "scripts/components"];

const SLUG_TOKEN: &str = "{slug}";
const EXT_TOKEN: &str = "{ext}";

/// Output tier a template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Markup, styles and scripts of the component, rooted under `app/`.
    Component,
    /// Build and meta files at the output root.
    Project,
}

/// How a template's bytes become output bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Placeholders are substituted from the configuration.
    Rendered,
    /// Bytes are copied unchanged.
    Verbatim,
}

/// One `(template → output)` mapping.
///
/// `source` and `destination` may contain `{ext}` (style dialect extension);
/// `destination` may contain `{slug}` (component file name).
#[derive(Debug, Clone, Copy)]
pub struct TemplateEntry {
    pub source: &'static str,
    pub destination: &'static str,
    pub tier: Tier,
    pub mode: RenderMode,
}

const fn component(source: &'static str, destination: &'static str) -> TemplateEntry {
    TemplateEntry { source, destination, tier: Tier::Component, mode: RenderMode::Rendered }
}

const fn project(
    source: &'static str,
    destination: &'static str,
    mode: RenderMode,
) -> TemplateEntry {
    TemplateEntry { source, destination, tier: Tier::Project, mode }
}

pub static TEMPLATE_ENTRIES: [TemplateEntry; 16] = [
    component("app/_component.html", "{slug}.html"),
    component("app/_index.html", "index.html"),
    component("app/_demo.html", "demo.html"),
    component("app/styles/_component.{ext}", "styles/{slug}.{ext}"),
    component("app/styles/components/_components.{ext}", "styles/components/components.{ext}"),
    component("app/scripts/_component.js", "scripts/{slug}.js"),
    component("app/scripts/components/_components.js", "scripts/components/components.js"),
    project("_gulpfile.js", "gulpfile.js", RenderMode::Rendered),
    project("_bower.json", "bower.json", RenderMode::Rendered),
    project("_package.json", "package.json", RenderMode::Rendered),
    project("_bowerrc", ".bowerrc", RenderMode::Rendered),
    project("editorconfig", ".editorconfig", RenderMode::Verbatim),
    project("jshintrc", ".jshintrc", RenderMode::Verbatim),
    project("gitignore", ".gitignore", RenderMode::Verbatim),
    project("gitattributes", ".gitattributes", RenderMode::Verbatim),
    project("travis.yml", ".travis.yml", RenderMode::Verbatim),
];

/// A manifest entry resolved against one run's answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Template path inside the template root.
    pub source: String,
    /// Output path relative to the output root.
    pub destination: PathBuf,
    pub mode: RenderMode,
}

/// Component directories, relative to the output root.
pub fn component_dirs() -> Vec<PathBuf> {
    COMPONENT_DIRS.iter().map(|dir| PathBuf::from(APP_DIR).join(dir)).collect()
}

/// Resolve every manifest entry for the given component file name and dialect.
///
/// Entries keep manifest order: component tier first, project tier after.
pub fn plan(component_file_name: &str, dialect: StyleDialect) -> Vec<PlannedFile> {
    TEMPLATE_ENTRIES
        .iter()
        .map(|entry| {
            let source = entry.source.replace(EXT_TOKEN, dialect.extension());
            let relative = entry
                .destination
                .replace(SLUG_TOKEN, component_file_name)
                .replace(EXT_TOKEN, dialect.extension());
            let destination = match entry.tier {
                Tier::Component => PathBuf::from(APP_DIR).join(relative),
                Tier::Project => PathBuf::from(relative),
            };
            PlannedFile { source, destination, mode: entry.mode }
        })
        .collect()
}
