//! appforge - demo app generator
//!
//! Picks one of a fixed set of mini-application templates from a free-text
//! idea, a category, or at random, and mounts its markup, style and behavior
//! into a host page that can be rendered to HTML.
//!
//! ```
//! use appforge::catalog::CategoryIndex;
//! use appforge::selector::TemplateSelector;
//! use appforge::session::Session;
//!
//! let index = CategoryIndex::default();
//! let mut selector = TemplateSelector::seeded(&index, Some(1));
//! let mut session = Session::default();
//! session.mount(selector.select_from_text("a todo list")).unwrap();
//! assert_eq!(session.mounted().unwrap().template, "Todo List");
//! ```

pub mod assistant;
pub mod catalog;
pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod keywords;
pub mod logging;
pub mod operations;
pub mod selector;
pub mod session;
pub mod templates;

pub use error::{AppForgeError, Result};
