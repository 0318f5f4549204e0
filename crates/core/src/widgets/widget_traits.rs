/// Common surface of every mounted widget.
pub trait Widget: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Id of the page node the widget is rooted at.
    fn root_node(&self) -> &'static str;

    /// Called on every input/change event inside the widget's form.
    fn on_input(&self) {}

    /// Releases timers before the widget's nodes leave the page.
    fn teardown(&self) {}
}
