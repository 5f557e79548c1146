//! Markup rendering layer with component-based architecture.
//!
//! This module transforms view models into the HTML fragments written into the
//! card list and pagination regions of the host document.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → RenderedView
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable markup component renderers
//! - [`helpers`]: Shared rendering utilities (escaping)

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, render_into, RenderedView};
pub use viewmodel::{CardItem, EmptyState, PaginationInfo, UIViewModel};
