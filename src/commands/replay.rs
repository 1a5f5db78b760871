//! Replay command implementation
//!
//! Feeds a recorded event log through one session, then writes the page.
//! The summary reports how many stylesheets and scripts are still
//! installed, which is where remount leaks show up.

use console::Style;

use appforge::assistant::SimulatedAssistant;
use appforge::error::Result;
use appforge::operations::{GenerateOutcome, ReplayStep, apply_event, load_event_log};
use appforge::selector::TemplateSelector;

use super::helpers::{Context, GlobalOptions, write_page};
use crate::cli::ReplayArgs;

/// Run replay command
pub fn run(options: &GlobalOptions, args: ReplayArgs) -> Result<()> {
    let context = Context::load(options)?;
    let output = context.output_path(args.output);
    let to_stdout = output.as_os_str() == "-";
    let events = load_event_log(&args.file)?;

    let mut session = context.session();
    let mut selector = TemplateSelector::seeded(&context.index, context.seed);

    let mut lines = Vec::with_capacity(events.len() + 1);
    for (n, event) in events.iter().enumerate() {
        let step = apply_event(&mut session, &mut selector, &SimulatedAssistant, event)?;
        lines.push(format!("{:>3}. {}", n + 1, describe(&step)));
    }

    let doc = session.document();
    lines.push(format!(
        "{} {} stylesheet(s), {} script(s) installed",
        Style::new().bold().apply_to("Live:"),
        doc.stylesheets().len(),
        doc.scripts().len()
    ));

    write_page(&output, &doc.render_html())?;

    for line in lines {
        if to_stdout {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
    Ok(())
}

fn describe(step: &ReplayStep) -> String {
    match step {
        ReplayStep::Generated(GenerateOutcome::Mounted { receipt, .. }) => {
            format!("mounted {}", receipt.template)
        }
        ReplayStep::Generated(GenerateOutcome::NoSelection) => "no template selected".to_string(),
        ReplayStep::Generated(GenerateOutcome::Prompt(message)) => format!("prompt: {message}"),
        ReplayStep::Unmounted(true) => "unmounted".to_string(),
        ReplayStep::Unmounted(false) => "nothing to unmount".to_string(),
    }
}
