use crate::mortgage::PaymentSegment;

/// Collaborator handle onto the hosting page, addressed by node id.
///
/// Every text write is plain text. Implementations must insert it as text
/// content and never parse it as markup.
///
/// # Design Rules
///
/// - Calls must be fast and must not block; widgets call them from timer tasks
/// - Writes to a node that does not exist are ignored
pub trait PageHandle: Send + Sync {
    /// Whether a node with this id exists.
    fn has_node(&self, id: &str) -> bool;

    /// Current value of an input/select node, `None` if the node is absent.
    fn field_value(&self, id: &str) -> Option<String>;

    fn set_text(&self, id: &str, text: &str);

    fn set_visible(&self, id: &str, visible: bool);

    /// Adds (`enabled = true`) or removes a class/flag on a node.
    fn set_class(&self, id: &str, class: &str, enabled: bool);

    /// Sets a bar segment width as a percentage of its track.
    fn set_width_percent(&self, id: &str, percent: u8);

    /// Replaces all body rows of a table with plain-text cells.
    fn replace_table_rows(&self, id: &str, rows: Vec<Vec<String>>);

    /// Redraws a chart with the given segments, discarding the previous one.
    fn render_chart(&self, id: &str, segments: &[PaymentSegment]);
}
