/// An item that can be picked in a select dropdown
pub trait SelectableItem {
    /// Stable identity; selection membership is checked by this, never by value.
    fn id(&self) -> String;
    /// Text shown in the list and matched against the typed filter
    fn display_name(&self) -> String;
}
