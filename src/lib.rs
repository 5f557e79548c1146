//! Recipe Shelf: a paginated, filterable and searchable recipe card list.
//!
//! Recipe Shelf renders a small in-memory recipe catalog as cards in a host
//! page and keeps that rendering consistent with what the user asked for:
//! - Meal-type filtering (`All`, `Breakfast`, `Lunch`, `Dinner`)
//! - Case-insensitive search by recipe name
//! - Pagination in fixed pages of six cards with previous/next controls
//! - Links to a detail page per recipe (`recipes.html?id=<id>`)

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  List View (view.rs)                                │  ← Host wrapper
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Selection and pagination                         │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog       │   │ Infrastructure│
//! │ (ui/)         │   │ (catalog/)    │   │ (infra../)    │
//! │ - Card markup │   │ - Built-in    │   │ - Document    │
//! │ - Pagination  │   │ - JSON / TOML │   │ - Regions     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): Recipe, MealType, errors         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Selection state machine with event/action model
//! - [`catalog`]: The read-only recipe collection and its sources
//! - [`domain`]: Core domain types (Recipe, MealType, errors)
//! - [`infrastructure`]: Host document abstraction and path helpers
//! - [`ui`]: Markup rendering of cards and pagination controls
//! - [`view`]: The list view mounted onto a document
//! - [`observability`]: Tracing subscriber and OpenTelemetry export
//!
//! # Example
//!
//! ```rust
//! use recipe_shelf::infrastructure::{MemoryDocument, Region};
//! use recipe_shelf::{initialize, Config, Interaction, RecipeListView};
//!
//! let state = initialize(&Config::default())?;
//! let mut view = RecipeListView::mount(state, MemoryDocument::new())?;
//!
//! view.dispatch(&Interaction::NavClicked { label: "Dinner".to_string() })?;
//! let cards = view.document().region(Region::CardList).unwrap_or_default();
//! assert_eq!(cards.matches("recipe-card-link").count(), 3);
//! # Ok::<(), recipe_shelf::RecipeShelfError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod view;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, SelectionMode, ViewMode};
pub use catalog::Catalog;
pub use domain::{MealType, Recipe, RecipeShelfError, Result};
pub use view::{Interaction, RecipeListView};

use infrastructure::expand_tilde;
use std::collections::BTreeMap;

/// Settings for a list view, as handed over by the host.
///
/// # Example
///
/// ```rust
/// use recipe_shelf::Config;
///
/// let config = Config {
///     catalog_file: Some("~/recipes/catalog.toml".to_string()),
///     ..Default::default()
/// };
/// assert!(config.trace_file.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Path to a `.json` or `.toml` catalog file. `~/` is expanded.
    ///
    /// `None` uses the built-in catalog.
    pub catalog_file: Option<String>,

    /// Tracing filter directive, e.g. `debug` or `recipe_shelf=trace`.
    /// Default: `"info"`
    pub trace_level: Option<String>,

    /// File receiving exported spans as JSON lines. When unset, events are
    /// written to stderr instead.
    pub trace_file: Option<String>,
}

impl Config {
    /// Parses configuration from the host's settings map.
    ///
    /// Recognized keys are `catalog_file`, `trace_level` and `trace_file`.
    /// Values are trimmed; empty values count as unset. Unknown keys are
    /// ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use recipe_shelf::Config;
    ///
    /// let mut settings = BTreeMap::new();
    /// settings.insert("catalog_file".to_string(), " recipes.json ".to_string());
    /// settings.insert("trace_level".to_string(), "".to_string());
    ///
    /// let config = Config::from_settings(&settings);
    /// assert_eq!(config.catalog_file.as_deref(), Some("recipes.json"));
    /// assert_eq!(config.trace_level, None);
    /// ```
    #[must_use]
    pub fn from_settings(settings: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            settings
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            catalog_file: get("catalog_file"),
            trace_level: get("trace_level"),
            trace_file: get("trace_file"),
        }
    }
}

/// Loads the configured catalog and creates the initial selection state.
///
/// # Errors
///
/// Returns an error if a configured catalog file cannot be read or parsed.
///
/// # Example
///
/// ```rust
/// use recipe_shelf::{initialize, Config, SelectionMode};
///
/// let state = initialize(&Config::default())?;
/// assert_eq!(state.mode, SelectionMode::All);
/// assert_eq!(state.active_subset.len(), 7);
/// # Ok::<(), recipe_shelf::RecipeShelfError>(())
/// ```
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing recipe list");

    let catalog = match &config.catalog_file {
        Some(catalog_file) => {
            let path = expand_tilde(catalog_file);
            tracing::debug!(path = %path.display(), "loading catalog file");
            Catalog::from_file(&path)?
        }
        None => Catalog::builtin(),
    };

    tracing::info!(recipes = catalog.len(), "catalog loaded");
    Ok(AppState::new(catalog))
}
