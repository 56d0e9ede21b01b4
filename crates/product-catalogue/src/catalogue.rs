//! Catalogue document types and JSON parsing.
//!
//! A catalogue holds the three read-only source collections. It is loaded
//! once, validated, and handed to the join stage; nothing mutates it
//! afterwards.

use std::collections::HashSet;

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::Deserialize;

use crate::error::{CatalogueError, Collection};
use crate::model::{Category, Product, User};

/// Current supported document version.
const SUPPORTED_VERSION: u32 = 1;

/// The users, categories, and products of one catalogue document.
///
/// # Example
///
/// ```
/// use product_catalogue::Catalogue;
///
/// let json = r#"{
///     "version": 1,
///     "users": [{"id": 1, "name": "Max", "sex": "m"}],
///     "categories": [{"id": 1, "title": "Fruits", "icon": "🍏"}],
///     "products": [{"id": 1, "name": "Apple", "categoryId": 1, "userId": 1}]
/// }"#;
///
/// let catalogue = Catalogue::from_json(json).expect("valid catalogue");
/// assert_eq!(catalogue.products().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalogue {
    /// Builds a catalogue from already-decoded collections.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::DuplicateId`] if any collection repeats an id.
    pub fn new(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Result<Self, CatalogueError> {
        ensure_unique_ids(Collection::Users, users.iter().map(|u| u.id))?;
        ensure_unique_ids(Collection::Categories, categories.iter().map(|c| c.id))?;
        ensure_unique_ids(Collection::Products, products.iter().map(|p| p.id))?;

        Ok(Self {
            users,
            categories,
            products,
        })
    }

    /// Parses a catalogue from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if:
    /// - The JSON is malformed or a required field is missing
    /// - The version is unsupported
    /// - An id repeats within a collection
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let raw: RawCatalogue =
            serde_json::from_str(json).map_err(|e| CatalogueError::ParseError {
                message: e.to_string(),
            })?;

        if raw.version != SUPPORTED_VERSION {
            return Err(CatalogueError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        Self::new(raw.users, raw.categories, raw.products)
    }

    /// Loads a catalogue from a JSON file relative to `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, CatalogueError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| CatalogueError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_json(&contents)
    }

    /// Returns the users in source order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the categories in source order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the products in source order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

fn ensure_unique_ids(
    collection: Collection,
    ids: impl Iterator<Item = u32>,
) -> Result<(), CatalogueError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogueError::DuplicateId { collection, id });
        }
    }
    Ok(())
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
struct RawCatalogue {
    version: u32,
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}
