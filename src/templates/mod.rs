//! Template library: the fixed catalog of mini-application generators
//!
//! Each submodule is one self-contained widget exposing `NAME`,
//! `DESCRIPTION` and a `generate()` function. The library registers them
//! by name; the category index decides how they are grouped.

use std::collections::HashMap;

use crate::domain::CatalogEntry;
use crate::error::{Result, template_not_found};

pub mod calculator;
pub mod comments;
pub mod dashboard;
pub mod gallery;
pub mod pomodoro;
pub mod product;
pub mod tictactoe;
pub mod todo;

/// Registry of all template generators, keyed by display name
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    entries: Vec<CatalogEntry>,
    by_name: HashMap<String, usize>,
}

impl TemplateLibrary {
    /// Create a library from the given entries
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.name.to_lowercase(), idx))
            .collect();

        Self { entries, by_name }
    }

    /// Look up an entry by name, ignoring case
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .and_then(|&idx| self.entries.get(idx))
    }

    /// Like [`get`](Self::get) but reports a missing template as an error
    pub fn require(&self, name: &str) -> Result<&CatalogEntry> {
        self.get(name).ok_or_else(|| template_not_found(name))
    }

    /// All entries in registration order
    pub fn all(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::new(default_templates())
    }
}

/// The eight built-in widgets
pub fn default_templates() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(tictactoe::NAME, tictactoe::DESCRIPTION, tictactoe::generate),
        CatalogEntry::new(todo::NAME, todo::DESCRIPTION, todo::generate),
        CatalogEntry::new(pomodoro::NAME, pomodoro::DESCRIPTION, pomodoro::generate),
        CatalogEntry::new(calculator::NAME, calculator::DESCRIPTION, calculator::generate),
        CatalogEntry::new(dashboard::NAME, dashboard::DESCRIPTION, dashboard::generate),
        CatalogEntry::new(comments::NAME, comments::DESCRIPTION, comments::generate),
        CatalogEntry::new(product::NAME, product::DESCRIPTION, product::generate),
        CatalogEntry::new(gallery::NAME, gallery::DESCRIPTION, gallery::generate),
    ]
}
