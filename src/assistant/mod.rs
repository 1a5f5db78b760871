//! Assistant backend seam
//!
//! The generate flow talks to an [`Assistant`]: free text in, classified
//! command out; command plus parameters in, acknowledgment out. The only
//! implementation is [`SimulatedAssistant`], which classifies locally and
//! always acknowledges success.

use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod classifier;

pub use classifier::{Intent, classify};

/// Commands an assistant can ask the host to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    CreateApp,
    ModifyApp,
    DeleteApp,
}

impl Command {
    pub fn from_intent(intent: Intent) -> Option<Self> {
        match intent {
            Intent::CreateApp => Some(Command::CreateApp),
            Intent::ModifyApp => Some(Command::ModifyApp),
            Intent::DeleteApp => Some(Command::DeleteApp),
            Intent::None => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Command::CreateApp => "createApp",
            Command::ModifyApp => "modifyApp",
            Command::DeleteApp => "deleteApp",
        }
    }
}

impl From<Option<Command>> for Intent {
    fn from(command: Option<Command>) -> Self {
        match command {
            Some(Command::CreateApp) => Intent::CreateApp,
            Some(Command::ModifyApp) => Intent::ModifyApp,
            Some(Command::DeleteApp) => Intent::DeleteApp,
            None => Intent::None,
        }
    }
}

/// Reply to a piece of user input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierResponse {
    pub command: Option<Command>,
    pub response: String,
}

/// Parameters sent along with a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandParams {
    pub category: String,
    pub description: String,
}

/// Acknowledgment of an executed command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandAck {
    pub success: bool,
    pub message: String,
}

/// Backend that interprets user input
pub trait Assistant {
    fn process_input(&self, input: &str) -> ClassifierResponse;

    fn execute_command(&self, command: Command, params: &CommandParams) -> CommandAck;
}

/// Local stand-in for a real assistant service
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedAssistant;

impl Assistant for SimulatedAssistant {
    fn process_input(&self, input: &str) -> ClassifierResponse {
        let intent = classify(input);
        debug!(?intent, "classified input");
        ClassifierResponse {
            command: Command::from_intent(intent),
            response: format!("Processed request: {input}"),
        }
    }

    fn execute_command(&self, command: Command, params: &CommandParams) -> CommandAck {
        debug!(
            command = command.as_str(),
            category = params.category.as_str(),
            "executing command"
        );
        CommandAck {
            success: true,
            message: "Command executed successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_input_echoes_request() {
        let response = SimulatedAssistant.process_input("I want a calculator app");
        assert_eq!(response.command, Some(Command::CreateApp));
        assert_eq!(response.response, "Processed request: I want a calculator app");
    }

    #[test]
    fn test_process_input_without_command() {
        let response = SimulatedAssistant.process_input("hello");
        assert_eq!(response.command, None);
    }

    #[test]
    fn test_response_json_shape() {
        let response = SimulatedAssistant.process_input("please update it");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["command"], "modifyApp");
        assert_eq!(json["response"], "Processed request: please update it");

        let none = serde_json::to_value(SimulatedAssistant.process_input("hi")).unwrap();
        assert!(none["command"].is_null());
    }

    #[test]
    fn test_execute_command_always_succeeds() {
        let params = CommandParams {
            category: "general".to_string(),
            description: "a calculator".to_string(),
        };
        let ack = SimulatedAssistant.execute_command(Command::DeleteApp, &params);
        assert!(ack.success);
        assert_eq!(ack.message, "Command executed successfully");
    }
}
