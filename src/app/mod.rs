//! Application layer coordinating selection state, events and actions.
//!
//! This module sits between the list view host wrapper and the catalog/UI
//! layers. It holds the list view's logic: selection, pagination and the state
//! machine that keeps the rendered page consistent with the active filter or
//! search term.
//!
//! # Architecture
//!
//! ```text
//! Interaction → Event → handle_event → AppState mutation → Actions + render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Document side effects emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Browsing/searching state derived from the selection
//! - [`paginator`]: Fixed-size pages and pagination control metadata
//! - [`selector`]: Catalog filtering by meal type or search term
//! - [`state`]: Selection state and view model computation
//!
//! # Example
//!
//! ```rust
//! use recipe_shelf::app::{handle_event, AppState, Event};
//! use recipe_shelf::Catalog;
//!
//! let mut state = AppState::new(Catalog::builtin());
//! let (should_render, actions) = handle_event(&mut state, &Event::Search("salad".to_string()))?;
//! # Ok::<(), recipe_shelf::RecipeShelfError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod paginator;
pub mod selector;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::ViewMode;
pub use paginator::{paginate, Page, PageControl, PageTarget, PAGE_SIZE};
pub use selector::{select, SelectionMode};
pub use state::AppState;
