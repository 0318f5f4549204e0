//! In-memory page used by tests and headless hosts.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::PageHandle;
use crate::mortgage::PaymentSegment;

#[derive(Default)]
struct PageState {
    nodes: HashSet<String>,
    fields: HashMap<String, String>,
    texts: HashMap<String, String>,
    visibility: HashMap<String, bool>,
    classes: HashMap<String, BTreeSet<String>>,
    widths: HashMap<String, u8>,
    tables: HashMap<String, Vec<Vec<String>>>,
    charts: HashMap<String, Vec<PaymentSegment>>,
    writes: usize,
}

/// A page whose nodes live in hash maps.
///
/// Only nodes declared with [`MemoryPage::with_nodes`] or given a field value
/// exist; writes to anything else are dropped, as on a real page.
#[derive(Default)]
pub struct MemoryPage {
    state: Mutex<PageState>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares nodes that exist on the page.
    pub fn with_nodes<I, S>(self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        {
            let mut state = self.lock();
            state.nodes.extend(ids.into_iter().map(Into::into));
        }
        self
    }

    /// Declares an input node holding `value`.
    pub fn with_field(self, id: &str, value: &str) -> Self {
        self.set_field(id, value);
        self
    }

    /// Simulates the user typing into a field (creating it if needed).
    pub fn set_field(&self, id: &str, value: &str) {
        let mut state = self.lock();
        state.nodes.insert(id.to_string());
        state.fields.insert(id.to_string(), value.to_string());
    }

    /// Removes a node, as when a section is detached from the document.
    pub fn remove_node(&self, id: &str) {
        let mut state = self.lock();
        state.nodes.remove(id);
        state.fields.remove(id);
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.lock().texts.get(id).cloned()
    }

    /// Visibility last written to the node; `None` if never written.
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.lock().visibility.get(id).copied()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.lock()
            .classes
            .get(id)
            .is_some_and(|classes| classes.contains(class))
    }

    pub fn width_percent(&self, id: &str) -> Option<u8> {
        self.lock().widths.get(id).copied()
    }

    pub fn table_rows(&self, id: &str) -> Vec<Vec<String>> {
        self.lock().tables.get(id).cloned().unwrap_or_default()
    }

    pub fn chart(&self, id: &str) -> Vec<PaymentSegment> {
        self.lock().charts.get(id).cloned().unwrap_or_default()
    }

    /// Number of output writes accepted so far.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PageHandle for MemoryPage {
    fn has_node(&self, id: &str) -> bool {
        self.lock().nodes.contains(id)
    }

    fn field_value(&self, id: &str) -> Option<String> {
        let state = self.lock();
        if !state.nodes.contains(id) {
            return None;
        }
        Some(state.fields.get(id).cloned().unwrap_or_default())
    }

    fn set_text(&self, id: &str, text: &str) {
        let mut state = self.lock();
        if state.nodes.contains(id) {
            state.texts.insert(id.to_string(), text.to_string());
            state.writes += 1;
        }
    }

    fn set_visible(&self, id: &str, visible: bool) {
        let mut state = self.lock();
        if state.nodes.contains(id) {
            state.visibility.insert(id.to_string(), visible);
            state.writes += 1;
        }
    }

    fn set_class(&self, id: &str, class: &str, enabled: bool) {
        let mut state = self.lock();
        if !state.nodes.contains(id) {
            return;
        }
        let classes = state.classes.entry(id.to_string()).or_default();
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
        state.writes += 1;
    }

    fn set_width_percent(&self, id: &str, percent: u8) {
        let mut state = self.lock();
        if state.nodes.contains(id) {
            state.widths.insert(id.to_string(), percent);
            state.writes += 1;
        }
    }

    fn replace_table_rows(&self, id: &str, rows: Vec<Vec<String>>) {
        let mut state = self.lock();
        if state.nodes.contains(id) {
            state.tables.insert(id.to_string(), rows);
            state.writes += 1;
        }
    }

    fn render_chart(&self, id: &str, segments: &[PaymentSegment]) {
        let mut state = self.lock();
        if state.nodes.contains(id) {
            state.charts.insert(id.to_string(), segments.to_vec());
            state.writes += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_to_missing_nodes_are_dropped() {
        let page = MemoryPage::new().with_nodes(["out"]);
        page.set_text("out", "$1");
        page.set_text("elsewhere", "$2");
        assert_eq!(page.text("out").as_deref(), Some("$1"));
        assert_eq!(page.text("elsewhere"), None);
        assert_eq!(page.write_count(), 1);
    }

    #[test]
    fn test_field_values() {
        let page = MemoryPage::new().with_nodes(["empty"]).with_field("price", "$400,000");
        assert_eq!(page.field_value("price").as_deref(), Some("$400,000"));
        assert_eq!(page.field_value("empty").as_deref(), Some(""));
        assert_eq!(page.field_value("missing"), None);

        page.remove_node("price");
        assert_eq!(page.field_value("price"), None);
    }

    #[test]
    fn test_text_is_stored_verbatim() {
        let page = MemoryPage::new().with_nodes(["out"]);
        page.set_text("out", "<b>not markup</b>");
        assert_eq!(page.text("out").as_deref(), Some("<b>not markup</b>"));
    }

    #[test]
    fn test_classes_toggle() {
        let page = MemoryPage::new().with_nodes(["dot"]);
        page.set_class("dot", "active", true);
        page.set_class("dot", "completed", true);
        page.set_class("dot", "active", false);
        assert!(!page.has_class("dot", "active"));
        assert!(page.has_class("dot", "completed"));
    }
}
