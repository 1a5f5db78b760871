//! Version command implementation
//!
//! Prints the crate version plus the size of the built-in catalog.

use appforge::catalog::Category;
use appforge::error::Result;
use appforge::templates::TemplateLibrary;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", render_version(&TemplateLibrary::default()));
    Ok(())
}

fn render_version(library: &TemplateLibrary) -> String {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    format!(
        "appforge {}\n\nBuilt-in catalog: {} templates in {} categories\nBuild: {} ({}, rust {})\n",
        env!("CARGO_PKG_VERSION"),
        library.all().len(),
        Category::ALL.len(),
        profile,
        std::env::consts::OS,
        env!("CARGO_PKG_RUST_VERSION"),
    )
}
