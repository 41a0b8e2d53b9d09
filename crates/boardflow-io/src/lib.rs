//! BoardFlow I/O - Remote Board Access and Local Loading
//!
//! This crate owns everything that touches the filesystem or the network:
//! - The Draggen extension API client (board listing, board fetch)
//! - Loading an exported board from a local folder
//! - Resolving element image sources (folder candidates, then URLs)

#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod local;
pub mod resolve;

pub use client::{RemoteClient, DEFAULT_API_BASE};
pub use error::{IoError, Result};
pub use local::load_local;
pub use resolve::FsHttpResolver;
