//! Show command implementation

use appforge::error::Result;
use appforge::templates::TemplateLibrary;

use crate::cli::{Section, ShowArgs};

/// Run show command
pub fn run(args: ShowArgs) -> Result<()> {
    let library = TemplateLibrary::default();
    let entry = library.require(&args.name)?;
    let bundle = entry.generate()?;

    let text = match args.section {
        Section::Html => bundle.markup,
        Section::Css => bundle.style,
        Section::Js => bundle.behavior,
        Section::All => bundle.source_listing(),
    };
    println!("{}", text.trim_matches('\n'));
    Ok(())
}
