//! BoardFlow UI - egui Components
//!
//! The modal board selector shown when the user browses their remote
//! boards from a loader node.

#![warn(missing_docs)]

pub mod selector;

pub use selector::{BoardSelector, ItemGeometry, SelectorError, SelectorResponse};
