//! List command implementation
//!
//! Lists every category with its templates in selection order.

use console::Style;

use appforge::catalog::CategoryIndex;
use appforge::error::Result;
use appforge::templates::TemplateLibrary;

use crate::cli::ListArgs;

/// Run list command
pub fn run(args: ListArgs) -> Result<()> {
    let index = CategoryIndex::from_library(&TemplateLibrary::default())?;
    print!("{}", render_listing(&index, args.detailed));
    Ok(())
}

fn render_listing(index: &CategoryIndex, detailed: bool) -> String {
    let total: usize = index.groups().iter().map(|(_, entries)| entries.len()).sum();
    let mut out = format!("Templates ({total}):\n\n");

    for (category, entries) in index.groups() {
        out.push_str(&format!(
            "  {} {}\n",
            Style::new().bold().yellow().apply_to(category.key()),
            Style::new().dim().apply_to(format!("({})", category.label()))
        ));
        for entry in entries {
            if detailed {
                out.push_str(&format!(
                    "    {} {}\n",
                    Style::new().bold().apply_to(format!("{}:", entry.name)),
                    entry.description
                ));
            } else {
                out.push_str(&format!("    {}\n", entry.name));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_contains_all_templates() {
        console::set_colors_enabled(false);
        let listing = render_listing(&CategoryIndex::default(), false);
        assert!(listing.starts_with("Templates (8):"));
        for name in [
            "Tic Tac Toe",
            "Todo List",
            "Pomodoro Timer",
            "Calculator",
            "Analytics Dashboard",
            "Comment Section",
            "Product Card",
            "Image Gallery",
        ] {
            assert!(listing.contains(name), "missing {name}");
        }
        assert!(!listing.contains("Basic arithmetic calculator"));
    }

    #[test]
    fn test_detailed_listing_has_descriptions() {
        console::set_colors_enabled(false);
        let listing = render_listing(&CategoryIndex::default(), true);
        assert!(listing.contains("Calculator: Basic arithmetic calculator"));
    }
}
