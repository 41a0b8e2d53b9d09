//! Loading an exported board from a local folder.

use crate::error::{IoError, Result};
use boardflow_core::{CoreError, Moodboard};
use std::path::Path;
use tracing::info;

/// Loads a moodboard from a local export folder.
///
/// The folder must exist and contain a `.json` board document (the first
/// one found is used, non-recursively). The folder becomes the board's
/// `base_path` so relative image sources resolve against it.
pub fn load_local(folder: &Path) -> Result<Moodboard> {
    if !folder.is_dir() {
        return Err(IoError::FolderNotFound(folder.to_path_buf()));
    }

    let mut board_file = None;
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            board_file = Some(path);
            break;
        }
    }
    let board_file = board_file.ok_or_else(|| IoError::NoBoardFile(folder.to_path_buf()))?;

    let text = std::fs::read_to_string(&board_file)?;
    let value: serde_json::Value = serde_json::from_str(&text).map_err(CoreError::from)?;
    let mut board = Moodboard::from_value(value)?;
    board.base_path = Some(folder.to_path_buf());
    info!(
        id = %board.id,
        file = %board_file.display(),
        "loaded local board"
    );
    Ok(board)
}
