//! The "Generate App" flow
//!
//! Idea text takes precedence over the category select. Idea text goes
//! through the assistant first; a `createApp` command is executed and must
//! be acknowledged before the idea is turned into a template. Any other
//! reply (including no command) goes straight to keyword selection.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assistant::{Assistant, Command, CommandParams, Intent};
use crate::error::Result;
use crate::selector::TemplateSelector;
use crate::session::{MountReceipt, Session};

/// Shown when neither an idea nor a category was given
pub const PROMPT_MESSAGE: &str = "Please enter an app idea or select a category";

/// Category reported to the assistant when none is selected
const GENERAL_CATEGORY: &str = "general";

/// State of the input surface when "Generate App" is pressed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub idea: Option<String>,
    pub category: Option<String>,
}

impl GenerateRequest {
    pub fn new(idea: Option<String>, category: Option<String>) -> Self {
        Self { idea, category }
    }

    fn idea(&self) -> Option<&str> {
        non_blank(self.idea.as_deref())
    }

    fn category(&self) -> Option<&str> {
        non_blank(self.category.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Result of one generate action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// A template was mounted
    Mounted { receipt: MountReceipt, intent: Intent },
    /// Nothing was selected (unknown category, or a command was refused)
    NoSelection,
    /// The user must supply input first; the document is untouched
    Prompt(String),
}

impl GenerateOutcome {
    fn from_receipt(receipt: Option<MountReceipt>, intent: Intent) -> Self {
        match receipt {
            Some(receipt) => GenerateOutcome::Mounted { receipt, intent },
            None => GenerateOutcome::NoSelection,
        }
    }

    pub fn template(&self) -> Option<&str> {
        match self {
            GenerateOutcome::Mounted { receipt, .. } => Some(receipt.template.as_str()),
            _ => None,
        }
    }
}

/// Run the generate action against `session`
pub fn generate<R, A>(
    session: &mut Session,
    selector: &mut TemplateSelector<'_, R>,
    assistant: &A,
    request: &GenerateRequest,
) -> Result<GenerateOutcome>
where
    R: Rng,
    A: Assistant + ?Sized,
{
    if let Some(idea) = request.idea() {
        let reply = assistant.process_input(idea);
        info!(response = reply.response.as_str(), "assistant replied");

        if reply.command == Some(Command::CreateApp) {
            let params = CommandParams {
                category: request.category().unwrap_or(GENERAL_CATEGORY).to_string(),
                description: idea.to_string(),
            };
            let ack = assistant.execute_command(Command::CreateApp, &params);
            if !ack.success {
                warn!(message = ack.message.as_str(), "createApp was not acknowledged");
                return Ok(GenerateOutcome::NoSelection);
            }
        }

        let intent = Intent::from(reply.command);
        let receipt = session.mount(selector.select_from_text(idea))?;
        return Ok(GenerateOutcome::from_receipt(receipt, intent));
    }

    if let Some(category) = request.category() {
        let receipt = session.mount(selector.select_from_category(category))?;
        return Ok(GenerateOutcome::from_receipt(receipt, Intent::None));
    }

    Ok(GenerateOutcome::Prompt(PROMPT_MESSAGE.to_string()))
}

/// Category select changed: mount from the new category unless it is blank
pub fn change_category<R: Rng>(
    session: &mut Session,
    selector: &mut TemplateSelector<'_, R>,
    category: &str,
) -> Result<GenerateOutcome> {
    let Some(category) = non_blank(Some(category)) else {
        return Ok(GenerateOutcome::NoSelection);
    };
    let receipt = session.mount(selector.select_from_category(category))?;
    Ok(GenerateOutcome::from_receipt(receipt, Intent::None))
}

/// "Random Demo" pressed
pub fn random<R: Rng>(
    session: &mut Session,
    selector: &mut TemplateSelector<'_, R>,
) -> Result<GenerateOutcome> {
    let receipt = session.mount(selector.select_random())?;
    Ok(GenerateOutcome::from_receipt(receipt, Intent::None))
}
