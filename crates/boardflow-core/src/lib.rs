//! BoardFlow Core - Domain Model for Draggen Moodboards
//!
//! This crate contains the data model shared by the BoardFlow crates:
//! - Board summaries as returned by the remote listing endpoint
//! - Full moodboard documents and their elements
//! - Hex color parsing
//! - The CPU compositor that flattens a board into a single image

#![warn(missing_docs)]

pub mod board;
pub mod color;
pub mod compositor;
pub mod error;

pub use board::{BoardSummary, Element, ElementKind, Moodboard, Position, Size};
pub use color::parse_hex_color;
pub use compositor::{extract_images, extract_text, render, ImageResolver};
pub use error::{CoreError, Result};
