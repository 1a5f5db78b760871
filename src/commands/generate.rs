//! Generate command implementation

use inquire::Select;

use appforge::assistant::SimulatedAssistant;
use appforge::catalog::Category;
use appforge::error::Result;
use appforge::operations::{GenerateRequest, generate};
use appforge::selector::TemplateSelector;

use super::helpers::{Context, GlobalOptions, finish};
use crate::cli::GenerateArgs;

/// Run generate command
pub fn run(options: &GlobalOptions, args: GenerateArgs) -> Result<()> {
    let context = Context::load(options)?;
    let output = context.output_path(args.output);

    let mut category = args.category;
    let has_idea = args.idea.as_deref().is_some_and(|idea| !idea.trim().is_empty());
    if args.interactive && !has_idea && category.is_none() {
        category = select_category_interactively()?;
    }

    let mut session = context.session();
    let mut selector = TemplateSelector::seeded(&context.index, context.seed);
    let request = GenerateRequest::new(args.idea, category);
    let outcome = generate(&mut session, &mut selector, &SimulatedAssistant, &request)?;

    finish(&session, &outcome, &output)
}

/// Ask for a category; `None` when the prompt is skipped
fn select_category_interactively() -> Result<Option<String>> {
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();

    let Some(choice) = Select::new("Select a category", labels)
        .with_starting_cursor(0)
        .with_page_size(10)
        .without_filtering()
        .with_help_message("↑↓ to move, ENTER to select, ESC to cancel")
        .prompt_skippable()?
    else {
        return Ok(None);
    };

    Ok(Category::ALL
        .into_iter()
        .find(|c| c.label() == choice)
        .map(|c| c.key().to_string()))
}
