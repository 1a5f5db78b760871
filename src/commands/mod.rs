//! Command implementations for the appforge CLI

pub mod classify;
pub mod completions;
pub mod generate;
pub mod helpers;
pub mod list;
pub mod random;
pub mod replay;
pub mod show;
pub mod version;
