//! Ordered first-match-wins keyword rules
//!
//! Both the intent classifier and the template selector are tables of
//! `(keywords, outcome)` pairs tested in order against lower-cased input.
//! A rule matches when any of its keywords occurs as a substring.

/// One row of a keyword table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule<T> {
    pub keywords: &'static [&'static str],
    pub outcome: T,
}

impl<T> KeywordRule<T> {
    pub const fn new(keywords: &'static [&'static str], outcome: T) -> Self {
        Self { keywords, outcome }
    }

    /// `haystack` must already be lower-cased
    fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|keyword| haystack.contains(keyword))
    }
}

/// Outcome of the first rule with a keyword contained in `input`
///
/// Matching is case-insensitive and position-independent.
pub fn first_match<T: Copy>(rules: &[KeywordRule<T>], input: &str) -> Option<T> {
    let haystack = input.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&haystack))
        .map(|rule| rule.outcome)
}
