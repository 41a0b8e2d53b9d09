//! BoardFlow Nodes - Editor Integration
//!
//! The node behaviors a host editor mounts per node, and the seam traits
//! the host implements: widget access and blocking notifications. Each
//! node type is a dedicated behavior object the editor instantiates,
//! rather than a patch on a shared node prototype.

#![warn(missing_docs)]

pub mod host;
pub mod local_loader;
pub mod ops;
pub mod remote_loader;

pub use host::{
    NodeWidgets, Notifier, API_KEY_WIDGET, BOARD_ID_WIDGET, BROWSE_BUTTON, FOLDER_PATH_WIDGET,
};
pub use local_loader::LocalBoardLoader;
pub use remote_loader::RemoteBoardLoader;
