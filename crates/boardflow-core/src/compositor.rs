//! CPU compositor that flattens a moodboard into a single RGBA image.
//!
//! The canvas is sized to the bounding box of all elements plus padding,
//! and elements draw in ascending z order. Image loading goes through the
//! [`ImageResolver`] seam so this crate stays off the filesystem and the
//! network.

use crate::board::{ElementKind, Moodboard};
use crate::color::parse_hex_color;
use image::{imageops, Rgba, RgbaImage};
use std::path::Path;
use tracing::{debug, warn};

/// Padding around the element bounding box, in pixels.
const CANVAS_PADDING: f32 = 50.0;

/// Side length of the error placeholder image.
const PLACEHOLDER_SIZE: u32 = 100;

/// Resolves an element image source to pixels.
///
/// Implementations decide how sources are located (board folder candidates,
/// remote URLs, plain paths). Returning `None` makes the compositor
/// substitute the error placeholder; resolution failure is never fatal to a
/// composite.
pub trait ImageResolver {
    /// Loads the image behind `src`, trying `base_path` candidates first
    /// when the board was loaded from a local folder.
    fn resolve(&self, src: &str, base_path: Option<&Path>) -> Option<RgbaImage>;
}

/// The solid red image substituted for sources that fail to resolve.
pub fn error_placeholder() -> RgbaImage {
    RgbaImage::from_pixel(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, Rgba([255, 0, 0, 255]))
}

/// Bounding box of all elements as `(min_x, min_y, max_x, max_y)`.
///
/// An empty board gets the default 1000x1000 canvas.
fn board_bounds(board: &Moodboard) -> (f32, f32, f32, f32) {
    if board.elements.is_empty() {
        return (0.0, 0.0, 1000.0, 1000.0);
    }
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for el in &board.elements {
        min_x = min_x.min(el.position.x);
        min_y = min_y.min(el.position.y);
        max_x = max_x.max(el.position.x + el.size.width);
        max_y = max_y.max(el.position.y + el.size.height);
    }
    (min_x, min_y, max_x, max_y)
}

/// Renders the board to a single image.
///
/// Elements draw in ascending z order (the order the document was
/// constructed in). Text elements are not rasterized; they are consumed by
/// [`extract_text`] instead.
pub fn render(board: &Moodboard, resolver: &dyn ImageResolver) -> RgbaImage {
    let (min_x, min_y, max_x, max_y) = board_bounds(board);
    let width = ((max_x - min_x + CANVAS_PADDING * 2.0) as u32).max(1);
    let height = ((max_y - min_y + CANVAS_PADDING * 2.0) as u32).max(1);
    let mut canvas = RgbaImage::new(width, height);

    let base_path = board.base_path.as_deref();
    for el in &board.elements {
        let dest_x = (el.position.x - min_x + CANVAS_PADDING) as i64;
        let dest_y = (el.position.y - min_y + CANVAS_PADDING) as i64;
        let dest_w = el.size.width as u32;
        let dest_h = el.size.height as u32;
        if dest_w == 0 || dest_h == 0 {
            debug!(id = %el.id, "skipping zero-sized element");
            continue;
        }

        match el.kind {
            ElementKind::Image => {
                let Some(src) = el.src.as_deref().filter(|s| !s.is_empty()) else {
                    continue;
                };
                let img = resolve_or_placeholder(resolver, src, base_path);
                let resized = imageops::resize(&img, dest_w, dest_h, imageops::FilterType::Lanczos3);
                imageops::overlay(&mut canvas, &resized, dest_x, dest_y);
            }
            ElementKind::Box => {
                if let Some(fill) = el.fill_color.as_deref().and_then(parse_hex_color) {
                    fill_rect(&mut canvas, dest_x, dest_y, dest_w, dest_h, Rgba(fill));
                }
                if let Some(border) = el.border_color.as_deref().and_then(parse_hex_color) {
                    stroke_rect(&mut canvas, dest_x, dest_y, dest_w, dest_h, Rgba(border));
                }
            }
            ElementKind::Text => {
                // No CPU font stack; text is surfaced through extract_text.
                debug!(id = %el.id, "text element not rasterized");
            }
            ElementKind::Unknown => {}
        }
    }

    canvas
}

/// The resolved image of every image element with a source, in element order.
///
/// Elements whose source fails to resolve contribute the error placeholder.
pub fn extract_images(board: &Moodboard, resolver: &dyn ImageResolver) -> Vec<RgbaImage> {
    let base_path = board.base_path.as_deref();
    board
        .elements
        .iter()
        .filter(|el| el.kind == ElementKind::Image)
        .filter_map(|el| el.src.as_deref().filter(|s| !s.is_empty()))
        .map(|src| resolve_or_placeholder(resolver, src, base_path))
        .collect()
}

/// The text of every text element, in element order, joined with newlines.
pub fn extract_text(board: &Moodboard) -> String {
    board
        .elements
        .iter()
        .filter(|el| el.kind == ElementKind::Text)
        .filter_map(|el| el.text.as_deref().filter(|t| !t.is_empty()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn resolve_or_placeholder(
    resolver: &dyn ImageResolver,
    src: &str,
    base_path: Option<&Path>,
) -> RgbaImage {
    resolver.resolve(src, base_path).unwrap_or_else(|| {
        warn!(src, "image source failed to resolve, using placeholder");
        error_placeholder()
    })
}

fn fill_rect(canvas: &mut RgbaImage, x: i64, y: i64, w: u32, h: u32, color: Rgba<u8>) {
    for py in y..y + h as i64 {
        for px in x..x + w as i64 {
            if px >= 0 && py >= 0 && px < canvas.width() as i64 && py < canvas.height() as i64 {
                canvas.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

fn stroke_rect(canvas: &mut RgbaImage, x: i64, y: i64, w: u32, h: u32, color: Rgba<u8>) {
    fill_rect(canvas, x, y, w, 1, color);
    fill_rect(canvas, x, y + h as i64 - 1, w, 1, color);
    fill_rect(canvas, x, y, 1, h, color);
    fill_rect(canvas, x + w as i64 - 1, y, 1, h, color);
}
