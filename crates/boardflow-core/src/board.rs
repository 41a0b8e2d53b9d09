//! Board summaries and moodboard documents.
//!
//! Wire types for the Draggen extension API. All fields are defaulted on
//! deserialization: upstream data is untrusted, and one malformed record
//! must not fail a whole response.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// A board as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardSummary {
    /// Stable board identifier. Records with an empty id are skipped by consumers.
    pub id: String,
    /// Display name. Falls back to the id when absent.
    pub name: Option<String>,
    /// Primary thumbnail source.
    pub thumbnail_url: Option<String>,
    /// Alternate thumbnail source.
    pub preview_image: Option<String>,
}

impl BoardSummary {
    /// The label shown for this board: `name`, falling back to `id`.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.id)
    }

    /// The thumbnail URL to display, `thumbnail_url` first, then `preview_image`.
    pub fn thumbnail_source(&self) -> Option<&str> {
        self.thumbnail_url
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.preview_image.as_deref().filter(|s| !s.is_empty()))
    }
}

/// 2D position of an element on the board, in board units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    /// Horizontal offset. May be negative.
    pub x: f32,
    /// Vertical offset. May be negative.
    pub y: f32,
}

/// 2D extent of an element, in board units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Size {
    /// Width of the element.
    pub width: f32,
    /// Height of the element.
    pub height: f32,
}

/// The kind of a board element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// An image referenced by `src`.
    Image,
    /// A text block.
    Text,
    /// A filled and/or outlined rectangle.
    Box,
    /// Anything this version does not understand. Ignored by the compositor.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A single element of a moodboard document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Element {
    /// Element identifier.
    pub id: String,
    /// Element kind.
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Top-left corner of the element.
    pub position: Position,
    /// Extent of the element.
    pub size: Size,
    /// Stacking order; lower values draw first.
    pub z_index: i32,
    /// Image source (URL or path relative to the board folder).
    pub src: Option<String>,
    /// Text content for text elements.
    pub text: Option<String>,
    /// Text color as `#rrggbb`.
    pub color: Option<String>,
    /// Box fill color as `#rrggbb`.
    pub fill_color: Option<String>,
    /// Box border color as `#rrggbb`.
    pub border_color: Option<String>,
}

/// A full moodboard document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Moodboard {
    /// Board identifier.
    pub id: String,
    /// Board name.
    pub name: String,
    /// Elements in ascending z order.
    pub elements: Vec<Element>,
    /// Editor viewport state. Opaque to BoardFlow.
    pub viewport: serde_json::Value,
    /// Folder the board was loaded from, for resolving relative image sources.
    /// Only set for locally loaded boards.
    #[serde(skip)]
    pub base_path: Option<PathBuf>,
}

impl Default for Moodboard {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: "Untitled".to_string(),
            elements: Vec::new(),
            viewport: serde_json::Value::Null,
            base_path: None,
        }
    }
}

impl Moodboard {
    /// Builds a moodboard from a raw API or export document.
    ///
    /// The document may be wrapped in one of several envelopes, probed in
    /// this order: `{"board": {...}}` (remote single-board response),
    /// `{"projects": [...]}` (local export format, first entry),
    /// `{"document": {...}}` (legacy), and finally the raw object itself.
    /// Elements are sorted ascending by `zIndex`.
    pub fn from_value(value: serde_json::Value) -> crate::Result<Self> {
        let doc = if let Some(board) = value.get("board") {
            board.clone()
        } else if let Some(first) = value
            .get("projects")
            .and_then(serde_json::Value::as_array)
            .and_then(|projects| projects.first())
        {
            first.clone()
        } else if let Some(document) = value.get("document") {
            document.clone()
        } else {
            value
        };

        let mut board: Moodboard = serde_json::from_value(doc)?;
        board.elements.sort_by_key(|el| el.z_index);
        debug!(
            id = %board.id,
            elements = board.elements.len(),
            "constructed moodboard"
        );
        Ok(board)
    }
}
