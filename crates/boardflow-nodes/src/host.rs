//! The seam between node behaviors and the host editor.

/// Name of the API key widget on loader nodes.
pub const API_KEY_WIDGET: &str = "api_key";
/// Name of the hidden board id widget the selection lands in.
pub const BOARD_ID_WIDGET: &str = "board_id";
/// Name of the folder path widget on the local loader.
pub const FOLDER_PATH_WIDGET: &str = "folder_path";
/// Name of the browse button the remote loader adds to its node.
pub const BROWSE_BUTTON: &str = "load_boards";

/// Access to a node's widgets, provided by the host editor.
pub trait NodeWidgets {
    /// Current value of a named widget, if the node has one.
    fn widget_value(&self, name: &str) -> Option<String>;

    /// Sets the value of a named widget. Hosts ignore unknown names.
    fn set_widget_value(&mut self, name: &str, value: &str);

    /// Adds a button widget to the node. The host reports presses back
    /// through the behavior's `on_button`.
    fn add_button(&mut self, name: &str, label: &str);
}

/// Blocking, user-facing notifications, provided by the host editor.
pub trait Notifier {
    /// Shows an error message and blocks until acknowledged.
    fn error(&mut self, message: &str);
}
