//! Render bundle: the (markup, style, behavior) triple a template produces

use serde::Serialize;

use crate::error::{Result, template_generation_failed};

/// Output of a single generator call
///
/// Bundles are produced fresh on every call and consumed by exactly one mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderBundle {
    /// HTML fragment installed into the app container
    pub markup: String,

    /// Stylesheet text, applied document-wide
    pub style: String,

    /// Script text, executed with full-document scope
    pub behavior: String,
}

impl RenderBundle {
    /// Create a new bundle
    pub fn new(
        markup: impl Into<String>,
        style: impl Into<String>,
        behavior: impl Into<String>,
    ) -> Self {
        Self {
            markup: markup.into(),
            style: style.into(),
            behavior: behavior.into(),
        }
    }

    /// Reject bundles that would mount nothing visible.
    ///
    /// Style and behavior may legitimately be empty; markup may not.
    pub fn validate(&self, template: &str) -> Result<()> {
        if self.markup.trim().is_empty() {
            return Err(template_generation_failed(template, "markup is empty"));
        }
        Ok(())
    }

    /// Source dump shown in the code section, labelled by section
    pub fn source_listing(&self) -> String {
        format!(
            "// HTML\n{}\n\n// CSS\n{}\n\n// JavaScript\n{}",
            self.markup, self.style, self.behavior
        )
    }
}
