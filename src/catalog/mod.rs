//! Category index: category key to ordered catalog entries
//!
//! Categories and their members are fixed configuration. Order inside a
//! category matters: random selection is uniform over the sequence and
//! keyword rules refer to entries by position.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::CatalogEntry;
use crate::error::Result;
use crate::templates::{
    TemplateLibrary, calculator, comments, dashboard, gallery, pomodoro, product, tictactoe, todo,
};

/// Fixed vocabulary of category keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Games,
    Productivity,
    Dashboard,
    Social,
    Ecommerce,
    Multimedia,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Games,
        Category::Productivity,
        Category::Dashboard,
        Category::Social,
        Category::Ecommerce,
        Category::Multimedia,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Games => "games",
            Category::Productivity => "productivity",
            Category::Dashboard => "dashboard",
            Category::Social => "social",
            Category::Ecommerce => "ecommerce",
            Category::Multimedia => "multimedia",
        }
    }

    /// Label used in the category select control
    pub fn label(self) -> &'static str {
        match self {
            Category::Games => "Games",
            Category::Productivity => "Productivity",
            Category::Dashboard => "Dashboard",
            Category::Social => "Social",
            Category::Ecommerce => "E-commerce",
            Category::Multimedia => "Multimedia",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = ();

    /// Exact key match; `"Games"` is not `"games"`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or(())
    }
}

/// Built-in grouping of template names per category
pub const DEFAULT_LAYOUT: [(Category, &[&str]); 6] = [
    (Category::Games, &[tictactoe::NAME]),
    (
        Category::Productivity,
        &[todo::NAME, pomodoro::NAME, calculator::NAME],
    ),
    (Category::Dashboard, &[dashboard::NAME]),
    (Category::Social, &[comments::NAME]),
    (Category::Ecommerce, &[product::NAME]),
    (Category::Multimedia, &[gallery::NAME]),
];

/// Ordered mapping from category to catalog entries
#[derive(Debug, Clone)]
pub struct CategoryIndex {
    groups: Vec<(Category, Vec<CatalogEntry>)>,
}

impl CategoryIndex {
    /// Create an index from explicit groups, kept in the given order
    pub fn new(groups: Vec<(Category, Vec<CatalogEntry>)>) -> Self {
        Self { groups }
    }

    /// Assemble the built-in index from a template library
    pub fn from_library(library: &TemplateLibrary) -> Result<Self> {
        let mut groups = Vec::with_capacity(DEFAULT_LAYOUT.len());
        for (category, names) in DEFAULT_LAYOUT {
            let entries = names
                .iter()
                .map(|name| library.require(name).cloned())
                .collect::<Result<Vec<_>>>()?;
            groups.push((category, entries));
        }
        Ok(Self::new(groups))
    }

    /// Entries registered under `key`, or an empty slice for unknown keys
    pub fn get(&self, key: &str) -> &[CatalogEntry] {
        self.groups
            .iter()
            .find(|(category, _)| category.key() == key)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or(&[])
    }

    /// Entry at `position` within `category`
    pub fn entry(&self, category: Category, position: usize) -> Option<&CatalogEntry> {
        self.get(category.key()).get(position)
    }

    pub fn groups(&self) -> &[(Category, Vec<CatalogEntry>)] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for CategoryIndex {
    fn default() -> Self {
        let library = TemplateLibrary::default();
        let groups = DEFAULT_LAYOUT
            .iter()
            .map(|(category, names)| {
                let entries = names
                    .iter()
                    .filter_map(|name| library.get(name).cloned())
                    .collect();
                (*category, entries)
            })
            .collect();
        Self::new(groups)
    }
}
