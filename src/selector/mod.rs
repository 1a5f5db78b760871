//! Template selection from free text, a category key, or at random
//!
//! Text selection is a first-match-wins keyword table that falls back to a
//! random pick. Category selection draws uniformly within the category;
//! random selection draws a category uniformly first, so entries in small
//! categories are individually more likely than entries in large ones.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::catalog::{Category, CategoryIndex};
use crate::domain::CatalogEntry;
use crate::keywords::{KeywordRule, first_match};

/// Keyword table for free-text selection, in priority order
pub const TEXT_RULES: [KeywordRule<(Category, usize)>; 7] = [
    KeywordRule::new(&["calculator", "calc", "compute"], (Category::Productivity, 2)),
    KeywordRule::new(&["game", "play"], (Category::Games, 0)),
    KeywordRule::new(&["todo", "task"], (Category::Productivity, 0)),
    KeywordRule::new(&["dashboard", "analytics"], (Category::Dashboard, 0)),
    KeywordRule::new(&["comment", "social"], (Category::Social, 0)),
    KeywordRule::new(&["product", "shop"], (Category::Ecommerce, 0)),
    KeywordRule::new(&["image", "gallery"], (Category::Multimedia, 0)),
];

/// Chooses catalog entries from a category index
pub struct TemplateSelector<'a, R = StdRng> {
    index: &'a CategoryIndex,
    rng: R,
}

impl<'a> TemplateSelector<'a, StdRng> {
    /// Selector with a seeded generator, or an OS-seeded one when `seed` is `None`
    pub fn seeded(index: &'a CategoryIndex, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(index, rng)
    }
}

impl<'a, R: Rng> TemplateSelector<'a, R> {
    pub fn new(index: &'a CategoryIndex, rng: R) -> Self {
        Self { index, rng }
    }

    /// Entry named by the first matching keyword rule, else a random entry
    pub fn select_from_text(&mut self, input: &str) -> Option<&'a CatalogEntry> {
        match first_match(&TEXT_RULES, input) {
            Some((category, position)) => {
                let entry = self.index.entry(category, position);
                if let Some(entry) = entry {
                    info!(template = entry.name.as_str(), "selected by keyword");
                }
                entry
            }
            None => {
                debug!("no keyword matched, falling back to a random template");
                self.select_random()
            }
        }
    }

    /// Uniform pick within `key`; `None` for unknown or empty categories
    pub fn select_from_category(&mut self, key: &str) -> Option<&'a CatalogEntry> {
        let index = self.index;
        let entries = index.get(key);
        if entries.is_empty() {
            debug!(category = key, "no templates registered for category");
            return None;
        }
        let entry = &entries[self.rng.random_range(0..entries.len())];
        info!(category = key, template = entry.name.as_str(), "selected from category");
        Some(entry)
    }

    /// Uniform category, then uniform entry within it
    pub fn select_random(&mut self) -> Option<&'a CatalogEntry> {
        let index = self.index;
        if index.is_empty() {
            return None;
        }
        let (category, _) = &index.groups()[self.rng.random_range(0..index.len())];
        self.select_from_category(category.key())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::RenderBundle;
    use crate::error::Result;

    fn selector(index: &CategoryIndex, seed: u64) -> TemplateSelector<'_> {
        TemplateSelector::seeded(index, Some(seed))
    }

    fn name(entry: Option<&CatalogEntry>) -> &str {
        entry.map(|e| e.name.as_str()).unwrap_or("<none>")
    }

    macro_rules! test_text_selects {
        ($test_name:ident, $input:expr, $expected:expr) => {
            #[test]
            fn $test_name() {
                let index = CategoryIndex::default();
                let mut selector = selector(&index, 7);
                assert_eq!(name(selector.select_from_text($input)), $expected);
            }
        };
    }

    test_text_selects!(test_text_calculator, "I want a calculator app", "Calculator");
    test_text_selects!(test_text_compute, "something to COMPUTE sums", "Calculator");
    test_text_selects!(test_text_game, "let's play", "Tic Tac Toe");
    test_text_selects!(test_text_todo, "build me a todo list", "Todo List");
    test_text_selects!(test_text_task, "task tracker", "Todo List");
    test_text_selects!(test_text_dashboard, "Analytics for my site", "Analytics Dashboard");
    test_text_selects!(test_text_social, "a social feed", "Comment Section");
    test_text_selects!(test_text_shop, "online shop", "Product Card");
    test_text_selects!(test_text_gallery, "photo gallery", "Image Gallery");

    #[test]
    fn test_text_priority_calculator_over_game() {
        let index = CategoryIndex::default();
        let mut selector = selector(&index, 1);
        assert_eq!(name(selector.select_from_text("a calculator game")), "Calculator");
    }

    #[test]
    fn test_unmatched_text_falls_back_to_some_entry() {
        let index = CategoryIndex::default();
        let mut selector = selector(&index, 3);
        for _ in 0..20 {
            assert!(selector.select_from_text("something unrelated").is_some());
        }
    }

    #[test]
    fn test_productivity_draws_from_its_three_entries() {
        let index = CategoryIndex::default();
        let mut selector = selector(&index, 11);
        let allowed = ["Todo List", "Pomodoro Timer", "Calculator"];
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let picked = name(selector.select_from_category("productivity")).to_string();
            assert!(allowed.contains(&picked.as_str()), "unexpected {picked}");
            seen.insert(picked);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_games_is_deterministic() {
        let index = CategoryIndex::default();
        let mut selector = selector(&index, 5);
        for _ in 0..10 {
            assert_eq!(name(selector.select_from_category("games")), "Tic Tac Toe");
        }
    }

    #[test]
    fn test_unknown_category_selects_nothing() {
        let index = CategoryIndex::default();
        let mut selector = selector(&index, 5);
        assert!(selector.select_from_category("weather").is_none());
        assert!(selector.select_from_category("").is_none());
    }

    #[test]
    fn test_empty_category_selects_nothing() {
        let index = CategoryIndex::new(vec![(Category::Games, Vec::new())]);
        let mut selector = selector(&index, 5);
        assert!(selector.select_from_category("games").is_none());
        assert!(selector.select_random().is_none());
    }

    #[test]
    fn test_random_spans_multiple_categories() {
        let index = CategoryIndex::default();
        let mut selector = selector(&index, 42);
        let seen: HashSet<Category> = (0..100)
            .filter_map(|_| selector.select_random())
            .filter_map(|entry| {
                index
                    .groups()
                    .iter()
                    .find(|(_, entries)| entries.contains(entry))
                    .map(|(category, _)| *category)
            })
            .collect();
        assert!(seen.len() > 1, "only saw {seen:?}");
    }

    #[test]
    fn test_random_on_empty_index() {
        let index = CategoryIndex::new(Vec::new());
        let mut selector = selector(&index, 1);
        assert!(selector.select_random().is_none());
        assert!(selector.select_from_text("nothing matches").is_none());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let index = CategoryIndex::default();
        let mut a = selector(&index, 99);
        let mut b = selector(&index, 99);
        for _ in 0..20 {
            assert_eq!(name(a.select_random()), name(b.select_random()));
        }
    }

    #[test]
    fn test_keyword_rule_pointing_past_category_end() {
        fn stub() -> Result<RenderBundle> {
            Ok(RenderBundle::new("<p></p>", "", ""))
        }
        let index = CategoryIndex::new(vec![(
            Category::Productivity,
            vec![CatalogEntry::new("Only", "single entry", stub)],
        )]);
        let mut selector = selector(&index, 1);
        assert!(selector.select_from_text("calculator").is_none());
        assert_eq!(name(selector.select_from_text("todo")), "Only");
    }
}
