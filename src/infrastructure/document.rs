//! Host document abstraction.
//!
//! The list view never touches a concrete page. It writes into named display
//! regions through the [`Document`] trait, which a host implements over its
//! real page (or [`MemoryDocument`](super::MemoryDocument) in headless use).

use std::fmt;

/// Display regions the list view reads from or writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    /// Container for the recipe cards of the current page.
    CardList,
    /// Container for the previous/numbered/next page controls.
    Pagination,
    /// Meal-type navigation entries (`All`, `Breakfast`, ...).
    MealNav,
    /// Text field holding the search term.
    SearchInput,
    /// Control that submits the search.
    SearchSubmit,
}

impl Region {
    /// Every region, in mount-check order.
    pub const ALL: [Self; 5] = [
        Self::CardList,
        Self::Pagination,
        Self::MealNav,
        Self::SearchInput,
        Self::SearchSubmit,
    ];

    /// Short name used in errors and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CardList => "card-list",
            Self::Pagination => "pagination",
            Self::MealNav => "meal-nav",
            Self::SearchInput => "search-input",
            Self::SearchSubmit => "search-submit",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The page a list view is mounted onto.
pub trait Document {
    /// Returns `true` if the page provides `region`.
    fn has_region(&self, region: Region) -> bool;

    /// Replaces the entire content of `region` with `markup`.
    fn replace_region(&mut self, region: Region, markup: &str);

    /// Returns the current text of the search field.
    fn search_text(&self) -> String;

    /// Overwrites the text of the search field.
    fn set_search_text(&mut self, text: &str);

    /// Marks the navigation entry whose label equals `label` as active.
    ///
    /// Every other navigation entry, including site-wide navigation, loses its
    /// active marking. `None` clears all markings.
    fn highlight_nav(&mut self, label: Option<&str>);
}
