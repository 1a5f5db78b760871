//! Operations that drive a session from UI-level input

pub mod generate;
pub mod replay;

pub use generate::{GenerateOutcome, GenerateRequest, PROMPT_MESSAGE, change_category, generate, random};
pub use replay::{Action, ReplayStep, UiEvent, apply_event, load_event_log, parse_event_log};
