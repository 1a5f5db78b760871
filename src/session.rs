//! Mount/render engine
//!
//! A [`Session`] owns the host [`Document`] and the single mount slot. Each
//! mount replaces the container markup. Stylesheets and scripts from earlier
//! mounts stay installed unless the session was built with
//! `cleanup_on_remount` or the caller runs [`Session::unmount`] first.

use serde::Serialize;
use tracing::{debug, info};

use crate::document::{Document, ScriptHandle, StyleHandle};
use crate::domain::{CatalogEntry, RenderBundle};
use crate::error::Result;

/// The bundle currently live in the document and the handles it installed
#[derive(Debug, Clone)]
pub struct MountedState {
    pub template: String,
    pub bundle: RenderBundle,
    pub style: StyleHandle,
    pub script: ScriptHandle,
}

/// What a successful mount installed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountReceipt {
    pub template: String,
    pub style: StyleHandle,
    pub script: ScriptHandle,
}

/// One host page and at most one live mini-application
#[derive(Debug, Clone)]
pub struct Session {
    document: Document,
    mounted: Option<MountedState>,
    cleanup_on_remount: bool,
}

impl Session {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            mounted: None,
            cleanup_on_remount: false,
        }
    }

    /// Remove the previous mount's stylesheet and script before every mount
    pub fn with_cleanup_on_remount(mut self, enabled: bool) -> Self {
        self.cleanup_on_remount = enabled;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn mounted(&self) -> Option<&MountedState> {
        self.mounted.as_ref()
    }

    /// Install `entry` into the document.
    ///
    /// `None` is a no-op and returns `Ok(None)`. A generator error is
    /// returned as-is; by then the container has been cleared and the
    /// regions revealed, and nothing else has changed.
    pub fn mount(&mut self, entry: Option<&CatalogEntry>) -> Result<Option<MountReceipt>> {
        let Some(entry) = entry else {
            debug!("nothing selected, mount skipped");
            return Ok(None);
        };

        if self.cleanup_on_remount {
            self.unmount();
        } else if let Some(previous) = self.mounted.take() {
            debug!(
                template = previous.template.as_str(),
                "previous stylesheet and script left installed"
            );
        }

        self.document.clear_container();
        self.document.reveal_regions();

        let bundle = entry.generate()?;

        self.document.set_container(bundle.markup.as_str());
        let style = self.document.append_stylesheet(bundle.style.as_str());
        let script = self.document.append_script(bundle.behavior.as_str());
        self.document.set_source_preview(bundle.source_listing());

        info!(template = entry.name.as_str(), "mounted template");

        let receipt = MountReceipt {
            template: entry.name.clone(),
            style,
            script,
        };
        self.mounted = Some(MountedState {
            template: entry.name.clone(),
            bundle,
            style,
            script,
        });
        Ok(Some(receipt))
    }

    /// Reverse the current mount: clear the container and remove the
    /// stylesheet and script it installed. Returns `false` when nothing was
    /// mounted. Timers the script already started in a browser are out of
    /// reach.
    pub fn unmount(&mut self) -> bool {
        let Some(state) = self.mounted.take() else {
            return false;
        };
        self.document.clear_container();
        self.document.remove_stylesheet(state.style);
        self.document.remove_script(state.script);
        self.document.set_source_preview(String::new());
        info!(template = state.template.as_str(), "unmounted template");
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Document::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryIndex;
    use crate::error::{AppForgeError, template_generation_failed};
    use crate::templates::TemplateLibrary;

    fn broken() -> Result<RenderBundle> {
        Err(template_generation_failed("Broken", "malformed template"))
    }

    fn calculator() -> CatalogEntry {
        TemplateLibrary::default().require("Calculator").unwrap().clone()
    }

    #[test]
    fn test_mount_none_is_noop() {
        let mut session = Session::default();
        assert!(session.mount(None).unwrap().is_none());
        assert!(session.document().is_preview_hidden());
        assert!(session.document().container().is_empty());
        assert!(session.mounted().is_none());
    }

    #[test]
    fn test_mount_installs_all_parts() {
        let mut session = Session::default();
        let entry = calculator();
        let receipt = session.mount(Some(&entry)).unwrap().unwrap();
        let doc = session.document();

        assert_eq!(receipt.template, "Calculator");
        assert!(!doc.is_preview_hidden());
        assert!(!doc.is_code_hidden());
        assert!(doc.container().contains("readonly"));
        assert_eq!(doc.container().matches("<button").count(), 19);
        assert_eq!(doc.stylesheets().len(), 1);
        assert_eq!(doc.scripts().len(), 1);
        assert!(doc.source_preview().starts_with("// HTML\n"));
        assert!(doc.source_preview().contains("\n\n// CSS\n"));
        assert!(doc.source_preview().contains("\n\n// JavaScript\n"));
    }

    #[test]
    fn test_remount_replaces_markup_but_leaks_style_and_script() {
        let mut session = Session::default();
        let entry = calculator();
        session.mount(Some(&entry)).unwrap();
        let first = session.document().container().to_string();
        session.mount(Some(&entry)).unwrap();

        assert_eq!(session.document().container(), first);
        assert_eq!(session.document().stylesheets().len(), 2);
        assert_eq!(session.document().scripts().len(), 2);
    }

    #[test]
    fn test_cleanup_on_remount_keeps_one_of_each() {
        let mut session = Session::default().with_cleanup_on_remount(true);
        let index = CategoryIndex::default();
        for entry in index.get("productivity") {
            session.mount(Some(entry)).unwrap();
        }
        let doc = session.document();
        assert_eq!(doc.stylesheets().len(), 1);
        assert_eq!(doc.scripts().len(), 1);
        assert!(doc.container().contains("readonly"));
    }

    #[test]
    fn test_unmount_reverses_mount() {
        let mut session = Session::default();
        let entry = calculator();
        session.mount(Some(&entry)).unwrap();
        assert!(session.unmount());
        let doc = session.document();
        assert!(doc.container().is_empty());
        assert!(doc.stylesheets().is_empty());
        assert!(doc.scripts().is_empty());
        assert!(doc.source_preview().is_empty());
        assert!(!session.unmount());
    }

    #[test]
    fn test_unmount_only_removes_current_mount() {
        let mut session = Session::default();
        let entry = calculator();
        session.mount(Some(&entry)).unwrap();
        session.mount(Some(&entry)).unwrap();
        session.unmount();
        assert_eq!(session.document().stylesheets().len(), 1);
        assert_eq!(session.document().scripts().len(), 1);
    }

    #[test]
    fn test_generator_failure_propagates_after_clearing() {
        let mut session = Session::default();
        session.mount(Some(&calculator())).unwrap();

        let entry = CatalogEntry::new("Broken", "fails", broken);
        let err = session.mount(Some(&entry)).unwrap_err();
        assert!(matches!(err, AppForgeError::TemplateGenerationFailed { .. }));

        let doc = session.document();
        assert!(doc.container().is_empty());
        assert_eq!(doc.stylesheets().len(), 1);
        assert!(session.mounted().is_none());
    }
}
