//! Random command implementation

use appforge::error::Result;
use appforge::operations::random;
use appforge::selector::TemplateSelector;

use super::helpers::{Context, GlobalOptions, finish};
use crate::cli::RandomArgs;

/// Run random command
pub fn run(options: &GlobalOptions, args: RandomArgs) -> Result<()> {
    let context = Context::load(options)?;
    let output = context.output_path(args.output);

    let mut session = context.session();
    let mut selector = TemplateSelector::seeded(&context.index, context.seed);
    let outcome = random(&mut session, &mut selector)?;

    finish(&session, &outcome, &output)
}
