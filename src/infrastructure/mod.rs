//! Infrastructure layer for host interactions.
//!
//! This module holds the boundary between the list view and its environment:
//! the [`Document`] trait the view renders into, an in-memory implementation
//! for headless hosting, and path helpers for configured files.

pub mod document;
pub mod memory;
pub mod paths;

pub use document::{Document, Region};
pub use memory::{MemoryDocument, ALL_LABEL};
pub use paths::expand_tilde;
