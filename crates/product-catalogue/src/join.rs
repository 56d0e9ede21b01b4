//! Join stage: resolves product foreign keys into full records.

use tracing::warn;

use crate::catalogue::Catalogue;
use crate::model::{Category, EnrichedProduct, Product, User};

/// The enriched product list, derived once from a [`Catalogue`].
///
/// The list is immutable after construction; filters hand out borrowed views
/// into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCatalogue {
    products: Vec<EnrichedProduct>,
}

impl PreparedCatalogue {
    /// Returns the enriched products in source order.
    #[must_use]
    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }
}

/// Joins every product with its category and owner.
///
/// Lookups take the first record whose id matches the product's key. A key
/// that matches nothing leaves the field `None` and emits a warning; it never
/// fails the join.
///
/// # Example
///
/// ```
/// use product_catalogue::{Catalogue, prepare_products};
///
/// let json = r#"{
///     "version": 1,
///     "users": [{"id": 1, "name": "Max", "sex": "m"}],
///     "categories": [],
///     "products": [{"id": 1, "name": "Apple", "categoryId": 4, "userId": 1}]
/// }"#;
/// let catalogue = Catalogue::from_json(json).expect("valid catalogue");
///
/// let prepared = prepare_products(&catalogue);
/// let apple = prepared.products().first().expect("one product");
///
/// assert_eq!(apple.owner_name(), Some("Max"));
/// assert!(apple.category.is_none());
/// ```
#[must_use]
pub fn prepare_products(catalogue: &Catalogue) -> PreparedCatalogue {
    let products = catalogue
        .products()
        .iter()
        .map(|product| enrich(product, catalogue.categories(), catalogue.users()))
        .collect();

    PreparedCatalogue { products }
}

fn enrich(product: &Product, categories: &[Category], users: &[User]) -> EnrichedProduct {
    let category = categories
        .iter()
        .find(|category| category.id == product.category_id)
        .cloned();
    if category.is_none() {
        warn!(
            product_id = product.id,
            category_id = product.category_id,
            "product references an unknown category"
        );
    }

    let user = users.iter().find(|user| user.id == product.user_id).cloned();
    if user.is_none() {
        warn!(
            product_id = product.id,
            user_id = product.user_id,
            "product references an unknown user"
        );
    }

    EnrichedProduct {
        id: product.id,
        name: product.name.clone(),
        category,
        user,
    }
}
