//! Catalog file loading.
//!
//! Catalogs can be supplied as JSON or TOML files. Both formats hold the same
//! records, in display order:
//!
//! ```json
//! {
//!   "recipes": [
//!     { "id": "Avocado_Toast", "name": "Avocado Toast", "image": "pictures/toast.jpg", "mealType": "Breakfast" }
//!   ]
//! }
//! ```
//!
//! ```toml
//! [[recipes]]
//! id = "Avocado_Toast"
//! name = "Avocado Toast"
//! image = "pictures/toast.jpg"
//! meal_type = "Breakfast"
//! ```
//!
//! A JSON file may also be a bare array of records.

use super::Catalog;
use crate::domain::error::{RecipeShelfError, Result};
use crate::domain::Recipe;
use serde::Deserialize;
use std::path::Path;

/// Top-level layout of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    recipes: Vec<Recipe>,
}

/// JSON catalogs accept the wrapped layout or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Wrapped(CatalogFile),
    Bare(Vec<Recipe>),
}

impl Catalog {
    /// Loads a catalog from a `.json` or `.toml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The extension is neither `json` nor `toml`
    /// - The file cannot be read
    /// - The content does not describe a list of recipes
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use recipe_shelf::Catalog;
    ///
    /// let catalog = Catalog::from_file("catalog.toml")?;
    /// # Ok::<(), recipe_shelf::RecipeShelfError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("load_catalog", path = %path.display()).entered();

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let catalog = match extension.as_deref() {
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            Some("toml") => Self::from_toml_str(&std::fs::read_to_string(path)?)?,
            _ => {
                return Err(RecipeShelfError::Catalog(format!(
                    "unsupported catalog format: {}",
                    path.display()
                )))
            }
        };

        tracing::debug!(recipe_count = catalog.len(), "catalog file loaded");
        Ok(catalog)
    }

    /// Parses a JSON catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeShelfError::Json`] if the document is not a recipe list.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let recipes = match serde_json::from_str::<JsonCatalog>(json)? {
            JsonCatalog::Wrapped(file) => file.recipes,
            JsonCatalog::Bare(recipes) => recipes,
        };
        Ok(Self::new(recipes))
    }

    /// Parses a TOML catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeShelfError::Toml`] if the document is not a recipe list.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(toml)?;
        Ok(Self::new(file.recipes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MealType;

    #[test]
    fn json_accepts_wrapped_and_bare_layouts() {
        let record = r#"{"id":"Caprese_Salad","name":"Caprese Salad","image":"c.jpg","mealType":"Lunch"}"#;
        let wrapped = Catalog::from_json_str(&format!(r#"{{"recipes":[{record}]}}"#)).unwrap();
        let bare = Catalog::from_json_str(&format!("[{record}]")).unwrap();

        assert_eq!(wrapped, bare);
        assert_eq!(wrapped.recipes()[0].meal_type, MealType::Lunch);
    }

    #[test]
    fn toml_preserves_file_order() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[recipes]]
            id = "b"
            name = "Beef Wellington"
            image = "b.jpg"
            meal_type = "Dinner"

            [[recipes]]
            id = "a"
            name = "Avocado Toast"
            image = "a.jpg"
            meal_type = "Breakfast"
            "#,
        )
        .unwrap();

        let ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn unknown_meal_type_is_rejected() {
        let result = Catalog::from_json_str(
            r#"[{"id":"x","name":"X","image":"x.jpg","mealType":"Brunch"}]"#,
        );
        assert!(matches!(result, Err(RecipeShelfError::Json(_))));
    }

    #[test]
    fn unsupported_extension_is_a_catalog_error() {
        let result = Catalog::from_file("recipes.yaml");
        assert!(matches!(result, Err(RecipeShelfError::Catalog(_))));
    }
}
