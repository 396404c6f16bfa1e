//! Embedded minijinja templates.

use minijinja::{default_auto_escape_callback, Environment, Value};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::content::page::CategoryPage;
use crate::render::{PageRenderer, RenderError};

/// Name of the category page template.
pub const CATEGORY_TEMPLATE: &str = "category.html";

const CATEGORY_SOURCE: &str = include_str!("../../assets/category.html");

/// Bytes escaped when a canonical path is written into an `href`.
const HREF_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `href` filter: percent-encode a path so it survives as an attribute and
/// decodes back to the registered route.
fn href(path: String) -> Value {
    Value::from_safe_string(utf8_percent_encode(&path, HREF_ESCAPE).to_string())
}

/// Renders category pages with the embedded `category.html` template.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Load the embedded template.
    pub fn new() -> Result<Self, RenderError> {
        Self::from_source(CATEGORY_SOURCE)
    }

    /// Use `source` in place of the embedded category template.
    pub fn from_source(source: &'static str) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(default_auto_escape_callback);
        env.add_filter("href", href);
        env.add_template(CATEGORY_TEMPLATE, source)
            .map_err(|source| RenderError::Load {
                name: CATEGORY_TEMPLATE,
                source,
            })?;
        Ok(Self { env })
    }
}

impl PageRenderer for TemplateRenderer {
    fn render(&self, page: &CategoryPage) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(CATEGORY_TEMPLATE)?;
        Ok(tmpl.render(page)?)
    }
}
