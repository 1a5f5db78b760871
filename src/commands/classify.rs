//! Classify command implementation

use console::Style;

use appforge::assistant::{Assistant, Intent, SimulatedAssistant};
use appforge::error::Result;

use crate::cli::ClassifyArgs;

/// Run classify command
pub fn run(args: ClassifyArgs) -> Result<()> {
    let response = SimulatedAssistant.process_input(&args.text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let intent = Intent::from(response.command);
    println!(
        "{} {:?}",
        Style::new().bold().apply_to("Intent:"),
        intent
    );
    println!(
        "{} {}",
        Style::new().bold().apply_to("Command:"),
        response.command.map_or("none", |c| c.as_str())
    );
    println!("{} {}", Style::new().bold().apply_to("Response:"), response.response);
    Ok(())
}
