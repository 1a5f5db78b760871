//! Catalog entries and the generator capability they point at

use std::fmt;
use std::sync::Arc;

use super::RenderBundle;
use crate::error::Result;

/// Capability "produce a render bundle with no input"
pub trait TemplateGenerator: Send + Sync {
    fn generate(&self) -> Result<RenderBundle>;
}

impl<F> TemplateGenerator for F
where
    F: Fn() -> Result<RenderBundle> + Send + Sync,
{
    fn generate(&self) -> Result<RenderBundle> {
        self()
    }
}

/// A named, described reference to a template generator
///
/// Entries are immutable once registered. Cloning shares the generator.
#[derive(Clone)]
pub struct CatalogEntry {
    pub name: String,
    pub description: String,
    generator: Arc<dyn TemplateGenerator>,
}

impl CatalogEntry {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        generator: impl TemplateGenerator + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            generator: Arc::new(generator),
        }
    }

    /// Invoke the generator and validate its output.
    ///
    /// Errors come back exactly as the generator (or validation) produced them.
    pub fn generate(&self) -> Result<RenderBundle> {
        let bundle = self.generator.generate()?;
        bundle.validate(&self.name)?;
        Ok(bundle)
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl PartialEq for CatalogEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for CatalogEntry {}
