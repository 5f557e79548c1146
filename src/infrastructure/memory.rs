//! In-memory [`Document`] implementation.

use super::document::{Document, Region};
use crate::domain::MealType;
use std::collections::BTreeMap;

/// Label of the navigation entry that resets the filter.
pub const ALL_LABEL: &str = "All";

/// A headless page holding region markup and navigation state in memory.
///
/// Used to host the list view without a browser and to observe exactly what
/// the view wrote.
///
/// # Example
///
/// ```
/// use recipe_shelf::infrastructure::{Document, MemoryDocument, Region};
///
/// let mut doc = MemoryDocument::new();
/// doc.replace_region(Region::CardList, "<p>hi</p>");
/// assert_eq!(doc.region(Region::CardList), Some("<p>hi</p>"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDocument {
    regions: BTreeMap<Region, String>,
    search_text: String,
    nav_entries: Vec<String>,
    active_nav: Option<String>,
}

impl MemoryDocument {
    /// Creates a page with every region present and the standard meal
    /// navigation (`All`, `Breakfast`, `Lunch`, `Dinner`).
    #[must_use]
    pub fn new() -> Self {
        let nav_entries = std::iter::once(ALL_LABEL)
            .chain(MealType::ALL.iter().map(|meal| meal.label()))
            .map(String::from)
            .collect();

        Self {
            regions: Region::ALL.iter().map(|&r| (r, String::new())).collect(),
            search_text: String::new(),
            nav_entries,
            active_nav: None,
        }
    }

    /// Removes `region`, simulating a page that lacks it.
    #[must_use]
    pub fn without_region(mut self, region: Region) -> Self {
        self.regions.remove(&region);
        self
    }

    /// Returns the markup last written to `region`.
    #[must_use]
    pub fn region(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    /// Returns the label of the highlighted navigation entry.
    #[must_use]
    pub fn active_nav(&self) -> Option<&str> {
        self.active_nav.as_deref()
    }

    /// Simulates the user typing into the search field.
    pub fn type_search(&mut self, text: &str) {
        self.search_text = text.to_string();
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    fn has_region(&self, region: Region) -> bool {
        self.regions.contains_key(&region)
    }

    fn replace_region(&mut self, region: Region, markup: &str) {
        if let Some(content) = self.regions.get_mut(&region) {
            markup.clone_into(content);
        }
    }

    fn search_text(&self) -> String {
        self.search_text.clone()
    }

    fn set_search_text(&mut self, text: &str) {
        text.clone_into(&mut self.search_text);
    }

    fn highlight_nav(&mut self, label: Option<&str>) {
        self.active_nav = label
            .and_then(|label| self.nav_entries.iter().find(|entry| *entry == label))
            .cloned();
    }
}
