//! Presentation state holder and the view derived from it.
//!
//! [`ProductList`] owns the prepared catalogue and the current
//! [`FilterSelection`]. Callers mutate the selection and then ask for a fresh
//! [`CatalogueView`]; there is no observer graph and nothing is cached between
//! derivations.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::filter::FilterSelection;
use crate::join::PreparedCatalogue;
use crate::model::{Category, EnrichedProduct, Sex};

/// Holds the prepared catalogue and the user's filter selection.
///
/// # Example
///
/// ```
/// use product_catalogue::{Catalogue, ProductList, prepare_products};
///
/// let json = r#"{
///     "version": 1,
///     "users": [{"id": 1, "name": "Max", "sex": "m"}, {"id": 2, "name": "Anna", "sex": "f"}],
///     "categories": [],
///     "products": [
///         {"id": 1, "name": "Apple", "categoryId": 1, "userId": 1},
///         {"id": 2, "name": "Banana", "categoryId": 1, "userId": 2}
///     ]
/// }"#;
/// let catalogue = Catalogue::from_json(json).expect("valid catalogue");
/// let mut list = ProductList::new(prepare_products(&catalogue));
///
/// list.select_owner("Anna");
/// list.set_query("ap");
/// assert_eq!(list.view().row_ids(), [2]);
///
/// list.reset_all();
/// assert_eq!(list.view().row_ids(), [1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductList {
    catalogue: PreparedCatalogue,
    selection: FilterSelection,
}

impl ProductList {
    /// Creates a holder with an empty selection.
    #[must_use]
    pub fn new(catalogue: PreparedCatalogue) -> Self {
        Self {
            catalogue,
            selection: FilterSelection::default(),
        }
    }

    /// Creates a holder starting from `selection`.
    #[must_use]
    pub const fn with_selection(catalogue: PreparedCatalogue, selection: FilterSelection) -> Self {
        Self {
            catalogue,
            selection,
        }
    }

    /// Selects an owner by name; the empty string returns to "All".
    pub fn select_owner(&mut self, name: impl Into<String>) {
        self.selection.owner = name.into();
        debug!(owner = %self.selection.owner, "owner filter changed");
    }

    /// Replaces the search query.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.selection.query = text.into();
        debug!(query = %self.selection.query, "search query changed");
    }

    /// Clears the search query, leaving the owner untouched.
    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Clears both the owner and the query.
    pub fn reset_all(&mut self) {
        self.selection = FilterSelection::default();
        debug!("all filters reset");
    }

    /// Returns the current selection.
    #[must_use]
    pub const fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Returns the full enriched product list.
    #[must_use]
    pub fn products(&self) -> &[EnrichedProduct] {
        self.catalogue.products()
    }

    /// Returns the products passing the current selection.
    #[must_use]
    pub fn visible(&self) -> Vec<&EnrichedProduct> {
        self.selection.apply(self.catalogue.products())
    }

    /// Derives everything the presentation layer draws from the current state.
    #[must_use]
    pub fn view(&self) -> CatalogueView {
        let visible = self.visible();

        CatalogueView {
            owner_tabs: owner_tabs(self.catalogue.products(), &self.selection.owner),
            query: self.selection.query.clone(),
            category_chips: category_chips(&visible),
            rows: visible.iter().map(|product| ProductRow::from(*product)).collect(),
        }
    }
}

/// Visual treatment of an owner cell, keyed on the owner's sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerStyle {
    /// Used for male owners.
    Link,
    /// Used for female owners.
    Danger,
}

impl From<Sex> for OwnerStyle {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Male => Self::Link,
            Sex::Female => Self::Danger,
        }
    }
}

/// One owner tab. The "All" tab has no user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerTab {
    /// Owner id, `None` for the "All" tab.
    pub user_id: Option<u32>,
    /// Tab caption.
    pub label: String,
    /// Whether this tab reflects the current selection.
    pub is_active: bool,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    /// Product id.
    pub id: u32,
    /// Product name.
    pub name: String,
    /// `"{icon} - {title}"`, or blank if the category is unresolved.
    pub category: String,
    /// Owner name, or blank if the owner is unresolved.
    pub owner: String,
    /// Owner cell style, absent if the owner is unresolved.
    pub owner_style: Option<OwnerStyle>,
}

impl From<&EnrichedProduct> for ProductRow {
    fn from(product: &EnrichedProduct) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product
                .category
                .as_ref()
                .map(Category::label)
                .unwrap_or_default(),
            owner: product.owner_name().unwrap_or_default().to_owned(),
            owner_style: product.user.as_ref().map(|user| OwnerStyle::from(user.sex)),
        }
    }
}

/// A snapshot of the listing for the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueView {
    /// "All" followed by one tab per distinct owner.
    pub owner_tabs: Vec<OwnerTab>,
    /// Current search text.
    pub query: String,
    /// Distinct categories of the visible products.
    pub category_chips: Vec<Category>,
    /// Visible products in catalogue order.
    pub rows: Vec<ProductRow>,
}

impl CatalogueView {
    /// Returns `true` when no product matched the selection.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the ids of the visible rows.
    #[must_use]
    pub fn row_ids(&self) -> Vec<u32> {
        self.rows.iter().map(|row| row.id).collect()
    }
}

/// Builds "All" plus one tab per owner, deduplicated by user id.
fn owner_tabs(products: &[EnrichedProduct], selected_owner: &str) -> Vec<OwnerTab> {
    let mut seen = HashSet::new();
    let owners = products
        .iter()
        .filter_map(|product| product.user.as_ref())
        .filter(|user| seen.insert(user.id))
        .map(|user| OwnerTab {
            user_id: Some(user.id),
            label: user.name.clone(),
            is_active: user.name == selected_owner,
        });

    std::iter::once(OwnerTab {
        user_id: None,
        label: "All".to_owned(),
        is_active: selected_owner.is_empty(),
    })
    .chain(owners)
    .collect()
}

fn category_chips(visible: &[&EnrichedProduct]) -> Vec<Category> {
    let mut seen = HashSet::new();
    visible
        .iter()
        .filter_map(|product| product.category.as_ref())
        .filter(|category| seen.insert(category.id))
        .cloned()
        .collect()
}
