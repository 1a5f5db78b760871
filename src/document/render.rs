//! HTML rendering of the host page

use std::fmt::Write as _;

use super::Document;
use crate::catalog::Category;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const FONT_AWESOME_CDN: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css";

/// Escape text for use in element content and double-quoted attributes
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn hidden_class(hidden: bool) -> &'static str {
    if hidden { " hidden" } else { "" }
}

pub(super) fn render_page(doc: &Document) -> String {
    let title = escape_html(doc.title());

    let mut styles = String::new();
    for sheet in doc.stylesheets() {
        let _ = write!(
            styles,
            "\n    <style data-mount=\"{}\">{}</style>",
            sheet.id, sheet.text
        );
    }

    let mut options = String::from("\n                <option value=\"\">Select a category</option>");
    for category in Category::ALL {
        let _ = write!(
            options,
            "\n                <option value=\"{}\">{}</option>",
            category.key(),
            category.label()
        );
    }

    let mut scripts = String::new();
    for script in doc.scripts() {
        let _ = write!(
            scripts,
            "\n    <script data-mount=\"{}\">{}</script>",
            script.id, script.text
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{TAILWIND_CDN}"></script>
    <link rel="stylesheet" href="{FONT_AWESOME_CDN}">{styles}
</head>
<body class="bg-gray-100 min-h-screen">
    <div class="container mx-auto px-4 py-8">
        <h1 class="text-4xl font-bold text-center mb-8">{title}</h1>
        <div class="max-w-2xl mx-auto bg-white rounded-lg shadow p-6 mb-8">
            <textarea id="appIdea" class="w-full px-4 py-2 border border-gray-300 rounded-lg mb-4" rows="3" placeholder="Describe your app idea..."></textarea>
            <select id="categorySelect" class="w-full px-4 py-2 border border-gray-300 rounded-lg mb-4">{options}
            </select>
            <div class="flex gap-4">
                <button id="randomDemo" class="flex-1 px-4 py-2 bg-purple-500 text-white rounded-lg hover:bg-purple-600">Random Demo</button>
                <button id="generateApp" class="flex-1 px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600">Generate App</button>
            </div>
        </div>
        <div id="previewSection" class="bg-white rounded-lg shadow p-6 mb-8{preview_hidden}">
            <h2 class="text-2xl font-semibold mb-4">Preview</h2>
            <div id="appContainer">{container}</div>
        </div>
        <div id="codeSection" class="bg-white rounded-lg shadow p-6{code_hidden}">
            <h2 class="text-2xl font-semibold mb-4">Generated Code</h2>
            <pre id="generatedCode" class="bg-gray-900 text-gray-100 p-4 rounded-lg overflow-x-auto text-sm">{source}</pre>
        </div>
    </div>{scripts}
</body>
</html>
"#,
        preview_hidden = hidden_class(doc.is_preview_hidden()),
        code_hidden = hidden_class(doc.is_code_hidden()),
        container = doc.container(),
        source = escape_html(doc.source_preview()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_empty_page_has_hidden_regions_and_inputs() {
        let html = Document::new("Demo").render_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="previewSection" class="bg-white rounded-lg shadow p-6 mb-8 hidden""#));
        assert!(html.contains(r#"id="codeSection" class="bg-white rounded-lg shadow p-6 hidden""#));
        assert!(html.contains(r#"id="appIdea""#));
        assert!(html.contains(r#"id="randomDemo""#));
        assert!(html.contains(r#"id="generateApp""#));
        for category in Category::ALL {
            assert!(html.contains(&format!(r#"<option value="{}">"#, category.key())));
        }
    }

    #[test]
    fn test_mounted_content_is_rendered() {
        let mut doc = Document::new("Demo");
        doc.reveal_regions();
        doc.set_container("<p id=\"w\">widget</p>");
        doc.append_stylesheet("#w { color: red; }");
        doc.append_script("console.log('w');");
        doc.set_source_preview("// HTML\n<p id=\"w\">widget</p>");

        let html = doc.render_html();
        assert!(html.contains(r#"<div id="appContainer"><p id="w">widget</p></div>"#));
        assert!(html.contains(r#"<style data-mount="0">#w { color: red; }</style>"#));
        assert!(html.contains(r#"<script data-mount="1">console.log('w');</script>"#));
        assert!(html.contains("// HTML\n&lt;p id=&quot;w&quot;&gt;widget&lt;/p&gt;"));
        assert!(!html.contains("p-6 mb-8 hidden"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = Document::new("Tom & Jerry").render_html();
        assert!(html.contains("<title>Tom &amp; Jerry</title>"));
    }
}
