//! Browsing state of the list view.
//!
//! The coordinator moves between two states:
//! - **Browsing**: a meal navigation entry (or `All`) narrows the catalog
//! - **Searching**: a search term narrows the catalog
//!
//! The state is derived from the current
//! [`SelectionMode`](crate::app::SelectionMode), so the two can never
//! disagree.
//!
//! # Example
//!
//! ```rust
//! use recipe_shelf::app::{SelectionMode, ViewMode};
//!
//! let mode = SelectionMode::BySearchTerm("toast".to_string());
//! assert_eq!(ViewMode::from(&mode), ViewMode::Searching("toast".to_string()));
//! ```

use super::selector::SelectionMode;
use crate::infrastructure::ALL_LABEL;

/// Which kind of narrowing is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// A navigation entry is selected. Holds its label.
    Browsing(String),

    /// A search was submitted. Holds the raw term. No navigation entry is
    /// highlighted in this state.
    Searching(String),
}

impl ViewMode {
    /// Returns the navigation label to highlight, if any.
    #[must_use]
    pub fn nav_label(&self) -> Option<&str> {
        match self {
            Self::Browsing(label) => Some(label),
            Self::Searching(_) => None,
        }
    }
}

impl From<&SelectionMode> for ViewMode {
    fn from(mode: &SelectionMode) -> Self {
        match mode {
            SelectionMode::All => Self::Browsing(ALL_LABEL.to_string()),
            SelectionMode::ByMealType(meal) => Self::Browsing(meal.label().to_string()),
            SelectionMode::Unrecognized(label) => Self::Browsing(label.clone()),
            SelectionMode::BySearchTerm(term) => Self::Searching(term.clone()),
        }
    }
}
