//! Actions representing document side effects.
//!
//! The event handler returns a `Vec<Action>` alongside its render decision.
//! Actions cover the document changes that are not part of the card and
//! pagination re-render: the search field text and navigation highlighting.
//! The list view executes them in order against its
//! [`Document`](crate::infrastructure::Document).
//!
//! # Example
//!
//! ```rust
//! use recipe_shelf::app::Action;
//!
//! let actions = vec![
//!     Action::ClearSearchInput,
//!     Action::HighlightNav(Some("Lunch".to_string())),
//! ];
//! ```

/// Document side effects produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Empties the search field.
    ///
    /// Emitted when a meal navigation entry is selected, so the field never
    /// shows a term that no longer applies.
    ClearSearchInput,

    /// Highlights the navigation entry with this label, clearing all others.
    ///
    /// `None` clears every highlight, which is the case while searching.
    HighlightNav(Option<String>),
}
