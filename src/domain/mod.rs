//! Domain models for appforge
//!
//! Pure value types shared by the template library, the selector and the
//! mount engine.

pub mod bundle;
pub mod entry;

pub use bundle::RenderBundle;
pub use entry::{CatalogEntry, TemplateGenerator};
