//! Filter stage: owner or free-text selection over enriched products.
//!
//! The owner filter and the query filter are mutually exclusive. When an owner
//! is selected the query is ignored entirely, so the two can never combine.

use serde::Serialize;

use crate::model::EnrichedProduct;

/// The two pieces of user-selected filter state.
///
/// Both default to the empty string, which means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    /// Exact owner name to keep; empty selects every owner.
    pub owner: String,
    /// Free-text query over product and owner names.
    pub query: String,
}

impl FilterSelection {
    /// Applies this selection to `products`. See [`filter_products`].
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [EnrichedProduct]) -> Vec<&'a EnrichedProduct> {
        filter_products(products, &self.owner, &self.query)
    }

    /// Returns `true` when neither filter is set.
    #[must_use]
    pub const fn is_cleared(&self) -> bool {
        self.owner.is_empty() && self.query.is_empty()
    }
}

/// Selects the visible subsequence of `products`.
///
/// Checked in order:
///
/// 1. a non-empty `owner` keeps products whose owner name equals it exactly;
/// 2. otherwise a non-empty `query` keeps products whose name or owner name
///    contains the trimmed, lowercased query, ignoring case;
/// 3. otherwise every product is kept.
///
/// Matches keep their input order. Products without a resolved owner never
/// match an owner and are matched on their own name by a query.
///
/// # Example
///
/// ```
/// use product_catalogue::{EnrichedProduct, filter_products};
///
/// let products = vec![EnrichedProduct {
///     id: 1,
///     name: "Apple".to_owned(),
///     category: None,
///     user: None,
/// }];
///
/// assert_eq!(filter_products(&products, "", "  APP ").len(), 1);
/// assert!(filter_products(&products, "Max", "apple").is_empty());
/// ```
#[must_use]
pub fn filter_products<'a>(
    products: &'a [EnrichedProduct],
    owner: &str,
    query: &str,
) -> Vec<&'a EnrichedProduct> {
    if !owner.is_empty() {
        return products
            .iter()
            .filter(|product| product.owner_name() == Some(owner))
            .collect();
    }

    if !query.is_empty() {
        let normalized = normalize_query(query);
        return products
            .iter()
            .filter(|product| matches_query(product, &normalized))
            .collect();
    }

    products.iter().collect()
}

/// Trims surrounding whitespace and lowercases a search query.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

fn matches_query(product: &EnrichedProduct, normalized: &str) -> bool {
    product.name.to_lowercase().contains(normalized)
        || product
            .owner_name()
            .is_some_and(|name| name.to_lowercase().contains(normalized))
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::model::{Sex, User};

    fn product(id: u32, name: &str, owner: Option<&str>) -> EnrichedProduct {
        EnrichedProduct {
            id,
            name: name.to_owned(),
            category: None,
            user: owner.map(|owner_name| User {
                id,
                name: owner_name.to_owned(),
                sex: Sex::Male,
            }),
        }
    }

    #[fixture]
    fn products() -> Vec<EnrichedProduct> {
        vec![
            product(1, "Apple", Some("Max")),
            product(2, "Banana", Some("Anna")),
            product(3, "Grapes", Some("Max")),
            product(4, "Mango", None),
            product(5, "Papaya", Some("anna")),
        ]
    }

    fn ids(result: &[&EnrichedProduct]) -> Vec<u32> {
        result.iter().map(|p| p.id).collect()
    }

    #[rstest]
    fn empty_selection_is_identity(products: Vec<EnrichedProduct>) {
        let result = filter_products(&products, "", "");
        assert_eq!(ids(&result), [1, 2, 3, 4, 5]);
    }

    #[rstest]
    #[case("Max", vec![1, 3])]
    #[case("Anna", vec![2])]
    #[case("anna", vec![5])]
    #[case("Nobody", vec![])]
    fn owner_filter_is_exact_and_case_sensitive(
        products: Vec<EnrichedProduct>,
        #[case] owner: &str,
        #[case] expected: Vec<u32>,
    ) {
        let result = filter_products(&products, owner, "");
        assert_eq!(ids(&result), expected);
    }

    #[rstest]
    fn owner_filter_ignores_query(products: Vec<EnrichedProduct>) {
        let result = filter_products(&products, "Anna", "apple");
        assert_eq!(ids(&result), [2]);
    }

    #[rstest]
    #[case::product_name("grape", vec![3])]
    #[case::owner_name("ANNA", vec![2, 5])]
    #[case::trims_whitespace("  ma  ", vec![1, 3, 4])]
    #[case::substring_in_either("an", vec![2, 4, 5])]
    #[case::no_match("kiwi", vec![])]
    fn query_matches_product_or_owner_name(
        products: Vec<EnrichedProduct>,
        #[case] query: &str,
        #[case] expected: Vec<u32>,
    ) {
        let result = filter_products(&products, "", query);
        assert_eq!(ids(&result), expected);
    }

    #[rstest]
    fn whitespace_query_keeps_everything(products: Vec<EnrichedProduct>) {
        let result = filter_products(&products, "", "   ");
        assert_eq!(ids(&result), [1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn filtering_leaves_input_untouched(products: Vec<EnrichedProduct>) {
        let before = products.clone();
        let by_query = ids(&filter_products(&products, "", "an"));
        let by_owner = ids(&filter_products(&products, "Max", ""));

        assert_eq!(by_query, [2, 4, 5]);
        assert_eq!(by_owner, [1, 3]);
        assert_eq!(products, before);
    }

    #[rstest]
    fn selection_apply_matches_free_function(products: Vec<EnrichedProduct>) {
        let selection = FilterSelection {
            owner: String::new(),
            query: "p".to_owned(),
        };
        assert_eq!(
            ids(&selection.apply(&products)),
            ids(&filter_products(&products, "", "p"))
        );
    }

    #[test]
    fn normalize_query_trims_and_lowercases() {
        assert_eq!(normalize_query("  ApPlE \t"), "apple");
    }
}
