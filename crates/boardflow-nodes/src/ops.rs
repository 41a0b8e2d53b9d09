//! Moodboard operations for downstream nodes.
//!
//! Thin bindings of the core compositor to the I/O image resolver, for the
//! render / extract-images / extract-text node evaluations.

use boardflow_core::{extract_images, extract_text, render, Moodboard};
use boardflow_io::FsHttpResolver;
use image::RgbaImage;

/// Flattens the board into a single image.
pub fn render_board(board: &Moodboard) -> RgbaImage {
    render(board, &FsHttpResolver::new())
}

/// The resolved image of every image element, in element order.
pub fn board_images(board: &Moodboard) -> Vec<RgbaImage> {
    extract_images(board, &FsHttpResolver::new())
}

/// The text of every text element, joined with newlines.
pub fn board_text(board: &Moodboard) -> String {
    extract_text(board)
}
