//! The local moodboard loader node behavior.

use crate::host::{NodeWidgets, FOLDER_PATH_WIDGET};
use boardflow_core::Moodboard;
use boardflow_io::{load_local, Result};
use std::path::Path;

/// Per-node behavior for the local loader. The node carries a single
/// `folder_path` field and has no interactive widgets.
#[derive(Debug, Default)]
pub struct LocalBoardLoader;

impl LocalBoardLoader {
    /// Creates the behavior.
    pub fn new() -> Self {
        Self
    }

    /// Evaluation entry: loads the board from the configured folder.
    pub fn load(&self, node: &dyn NodeWidgets) -> Result<Moodboard> {
        let folder = node.widget_value(FOLDER_PATH_WIDGET).unwrap_or_default();
        load_local(Path::new(&folder))
    }
}
