//! Replay of recorded UI events against one session
//!
//! An event log is a YAML list. Each item is the state of the input surface
//! plus the control that fired:
//!
//! ```yaml
//! - idea: build me a todo list          # "Generate App" with idea text
//! - { action: select, category: games } # category select changed
//! - action: random                      # "Random Demo"
//! - action: unmount
//! ```

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::generate::{self, GenerateOutcome, GenerateRequest};
use crate::assistant::Assistant;
use crate::error::{Result, event_log_parse_failed, file_read_failed};
use crate::selector::TemplateSelector;
use crate::session::Session;

/// Control that fired
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// "Generate App" button
    #[default]
    Generate,
    /// Category select change
    Select,
    /// "Random Demo" button
    Random,
    /// Explicit teardown of the current mount
    Unmount,
}

/// One recorded UI event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiEvent {
    pub action: Action,
    pub idea: Option<String>,
    pub category: Option<String>,
}

/// What one event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayStep {
    Generated(GenerateOutcome),
    Unmounted(bool),
}

/// Parse an event log; `source` names the log in errors
pub fn parse_event_log(yaml: &str, source: &str) -> Result<Vec<UiEvent>> {
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(yaml).map_err(|e| event_log_parse_failed(source, e.to_string()))
}

pub fn load_event_log(path: &Path) -> Result<Vec<UiEvent>> {
    let shown = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| file_read_failed(&shown, e.to_string()))?;
    parse_event_log(&content, &shown)
}

/// Apply one event to the session
pub fn apply_event<R, A>(
    session: &mut Session,
    selector: &mut TemplateSelector<'_, R>,
    assistant: &A,
    event: &UiEvent,
) -> Result<ReplayStep>
where
    R: Rng,
    A: Assistant + ?Sized,
{
    debug!(?event, "applying event");
    let step = match event.action {
        Action::Generate => {
            let request = GenerateRequest::new(event.idea.clone(), event.category.clone());
            ReplayStep::Generated(generate::generate(session, selector, assistant, &request)?)
        }
        Action::Select => ReplayStep::Generated(generate::change_category(
            session,
            selector,
            event.category.as_deref().unwrap_or_default(),
        )?),
        Action::Random => ReplayStep::Generated(generate::random(session, selector)?),
        Action::Unmount => ReplayStep::Unmounted(session.unmount()),
    };
    Ok(step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::SimulatedAssistant;
    use crate::catalog::CategoryIndex;
    use crate::error::AppForgeError;

    const LOG: &str = r"
- idea: build me a todo list
- { action: select, category: games }
- action: random
- action: unmount
- category: productivity
";

    #[test]
    fn test_parse_event_log() {
        let events = parse_event_log(LOG, "log.yaml").unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0].action, Action::Generate);
        assert_eq!(events[0].idea.as_deref(), Some("build me a todo list"));
        assert_eq!(events[1].action, Action::Select);
        assert_eq!(events[1].category.as_deref(), Some("games"));
        assert_eq!(events[2].action, Action::Random);
        assert_eq!(events[3].action, Action::Unmount);
        assert_eq!(events[4].action, Action::Generate);
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let err = parse_event_log("- colour: red\n", "log.yaml").unwrap_err();
        assert!(matches!(err, AppForgeError::EventLogParseFailed { .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_action() {
        assert!(parse_event_log("- action: explode\n", "log.yaml").is_err());
    }

    #[test]
    fn test_replay_accumulates_then_unmounts() {
        let index = CategoryIndex::default();
        let mut selector = TemplateSelector::seeded(&index, Some(4));
        let mut session = Session::default();
        let events = parse_event_log(LOG, "log.yaml").unwrap();

        let mut steps = Vec::new();
        for event in &events[..3] {
            steps.push(apply_event(&mut session, &mut selector, &SimulatedAssistant, event).unwrap());
        }
        match &steps[0] {
            ReplayStep::Generated(outcome) => assert_eq!(outcome.template(), Some("Todo List")),
            ReplayStep::Unmounted(_) => panic!("expected a mount"),
        }
        match &steps[1] {
            ReplayStep::Generated(outcome) => assert_eq!(outcome.template(), Some("Tic Tac Toe")),
            ReplayStep::Unmounted(_) => panic!("expected a mount"),
        }
        assert_eq!(session.document().stylesheets().len(), 3);

        let step = apply_event(&mut session, &mut selector, &SimulatedAssistant, &events[3]).unwrap();
        assert_eq!(step, ReplayStep::Unmounted(true));
        assert_eq!(session.document().stylesheets().len(), 2);
        assert!(session.document().container().is_empty());
    }

    #[test]
    fn test_empty_log() {
        assert!(parse_event_log("  \n", "log.yaml").unwrap().is_empty());
    }
}
