//! Template interpolation for URL patterns
//!
//! Handles `{{ variable }}` placeholders such as the candidate profile link
//! `https://hiring.base.vn/opening/{{ opening_id }}?candidate={{ candidate_id }}`.

use crate::error::{Error, Result};
use crate::types::{scalar_to_string, JsonObject, JsonValue};
use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching template variables: {{ variable }}
static TEMPLATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}").unwrap());

/// Variables available to a template
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    vars: JsonObject,
}

impl TemplateContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, returning the context for chaining
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Get a variable by name
    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.vars.get(name)
    }
}

/// A URL pattern checked once and rendered per record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    source: String,
}

impl UrlTemplate {
    /// Parse a template, requiring every name in `required` to appear in it
    pub fn new(source: impl Into<String>, required: &[&str]) -> Result<Self> {
        let source = source.into();
        let present = extract_variables(&source);
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|name| !present.iter().any(|p| p == name))
            .collect();

        if !missing.is_empty() {
            return Err(Error::Template {
                message: format!(
                    "'{source}' must reference {}",
                    missing
                        .iter()
                        .map(|m| format!("{{{{ {m} }}}}"))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            });
        }

        Ok(Self { source })
    }

    /// Template source text
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Render with the given context
    pub fn render(&self, ctx: &TemplateContext) -> Result<String> {
        render(&self.source, ctx)
    }
}

/// Render a template string with the given context
///
/// Null, array and object values count as undefined.
pub fn render(template: &str, ctx: &TemplateContext) -> Result<String> {
    let mut errors = Vec::new();

    let result = TEMPLATE_REGEX.replace_all(template, |cap: &regex::Captures<'_>| {
        let name = &cap[1];
        match ctx.get(name).and_then(scalar_to_string) {
            Some(value) => value,
            None => {
                errors.push(name.to_string());
                String::new()
            }
        }
    });

    if errors.is_empty() {
        Ok(result.into_owned())
    } else {
        Err(Error::undefined_var(errors.join(", ")))
    }
}

/// Extract all variable names from a template
pub fn extract_variables(template: &str) -> Vec<String> {
    TEMPLATE_REGEX
        .captures_iter(template)
        .map(|cap| cap[1].to_string())
        .collect()
}
