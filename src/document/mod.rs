//! In-memory model of the host page
//!
//! The document has one app container, two regions that start hidden
//! (preview and source), a source-preview text block, and document-wide
//! lists of installed stylesheets and scripts. Stylesheets and scripts are
//! addressed by handles so a caller can remove exactly what it installed.

use serde::Serialize;

mod render;

/// Identifies a stylesheet installed in the document head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StyleHandle(u64);

/// Identifies a script installed at the end of the document body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScriptHandle(u64);

/// A stylesheet or script element and the id it was installed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledText {
    pub id: u64,
    pub text: String,
}

/// Host page state
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    title: String,
    container: String,
    preview_hidden: bool,
    code_hidden: bool,
    source_preview: String,
    stylesheets: Vec<InstalledText>,
    scripts: Vec<InstalledText>,
    next_id: u64,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            container: String::new(),
            preview_hidden: true,
            code_hidden: true,
            source_preview: String::new(),
            stylesheets: Vec::new(),
            scripts: Vec::new(),
            next_id: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current markup of the app container
    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn clear_container(&mut self) {
        self.container.clear();
    }

    pub fn set_container(&mut self, markup: impl Into<String>) {
        self.container = markup.into();
    }

    pub fn is_preview_hidden(&self) -> bool {
        self.preview_hidden
    }

    pub fn is_code_hidden(&self) -> bool {
        self.code_hidden
    }

    /// Show the preview and source regions; idempotent
    pub fn reveal_regions(&mut self) {
        self.preview_hidden = false;
        self.code_hidden = false;
    }

    pub fn source_preview(&self) -> &str {
        &self.source_preview
    }

    pub fn set_source_preview(&mut self, text: impl Into<String>) {
        self.source_preview = text.into();
    }

    pub fn append_stylesheet(&mut self, text: impl Into<String>) -> StyleHandle {
        let id = self.allocate_id();
        self.stylesheets.push(InstalledText {
            id,
            text: text.into(),
        });
        StyleHandle(id)
    }

    /// Remove a stylesheet; `false` if it was already gone
    pub fn remove_stylesheet(&mut self, handle: StyleHandle) -> bool {
        remove_by_id(&mut self.stylesheets, handle.0)
    }

    pub fn append_script(&mut self, text: impl Into<String>) -> ScriptHandle {
        let id = self.allocate_id();
        self.scripts.push(InstalledText {
            id,
            text: text.into(),
        });
        ScriptHandle(id)
    }

    /// Remove a script; `false` if it was already gone
    pub fn remove_script(&mut self, handle: ScriptHandle) -> bool {
        remove_by_id(&mut self.scripts, handle.0)
    }

    pub fn stylesheets(&self) -> &[InstalledText] {
        &self.stylesheets
    }

    pub fn scripts(&self) -> &[InstalledText] {
        &self.scripts
    }

    /// Render the whole page as HTML
    pub fn render_html(&self) -> String {
        render::render_page(self)
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TITLE)
    }
}

fn remove_by_id(items: &mut Vec<InstalledText>, id: u64) -> bool {
    let before = items.len();
    items.retain(|item| item.id != id);
    items.len() != before
}
