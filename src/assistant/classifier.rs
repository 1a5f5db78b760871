//! Intent classification by keyword containment

use serde::{Deserialize, Serialize};

use crate::keywords::{KeywordRule, first_match};

/// Classified purpose of free-text input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Intent {
    CreateApp,
    ModifyApp,
    DeleteApp,
    #[default]
    None,
}

/// Intent rules in priority order
pub const INTENT_RULES: [KeywordRule<Intent>; 3] = [
    KeywordRule::new(&["calculator", "calc"], Intent::CreateApp),
    KeywordRule::new(&["modify", "update"], Intent::ModifyApp),
    KeywordRule::new(&["delete", "remove"], Intent::DeleteApp),
];

/// Classify `input`; anything unrecognized is [`Intent::None`]
pub fn classify(input: &str) -> Intent {
    first_match(&INTENT_RULES, input).unwrap_or_default()
}
