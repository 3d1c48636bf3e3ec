//! Placeholder substitution for rendered templates.
//!
//! Templates use `<%= name %>` for values. Block (`[% %]`) and comment
//! (`[# #]`) delimiters are chosen so they never collide with the JavaScript,
//! JSON and Polymer `{{ }}` bindings found in the template bodies.

use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment, UndefinedBehavior, context};

use super::configuration::{BOWER_COMPONENTS_DIR, Configuration};
use super::error::AppError;
use super::slug::slugify;

/// Render `content` against `config`.
///
/// `name` identifies the template in error messages. Only the placeholders
/// bound below are defined; any other name fails the render.
pub fn render(content: &str, config: &Configuration, name: &str) -> Result<String, AppError> {
    let render_error =
        |details: String| AppError::TemplateRender { template: name.to_string(), details };

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    let syntax = SyntaxConfig::builder()
        .block_delimiters("[%", "%]")
        .variable_delimiters("<%=", "%>")
        .comment_delimiters("[#", "#]")
        .build()
        .map_err(|err| render_error(format!("invalid template syntax: {}", err)))?;
    env.set_syntax(syntax);
    env.add_filter("slugify", |value: String| slugify(&value));

    let ctx = context! {
        component_name => config.component_name(),
        component_description => config.component_description(),
        component_page => config.resolved_docs_url(),
        component_file_name => config.component_file_name(),
        style_dialect => config.style_dialect().extension(),
        bower_components_dir => BOWER_COMPONENTS_DIR,
    };

    env.add_template(name, content).map_err(|err| render_error(err.to_string()))?;
    env.get_template(name)
        .map_err(|err| render_error(err.to_string()))?
        .render(ctx)
        .map_err(|err| render_error(err.to_string()))
}
