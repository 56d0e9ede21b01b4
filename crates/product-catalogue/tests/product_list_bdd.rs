//! Behavioural tests for product list filtering.
//!
//! These scenarios drive the state holder the way the presentation layer
//! does: mutate the selection, then derive and inspect a fresh view.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use product_catalogue::{
    Catalogue, NO_MATCH_MESSAGE, ProductList, RenderOptions, prepare_products, render_text,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

const TWO_PRODUCT_CATALOGUE: &str = r#"{
    "version": 1,
    "users": [
        {"id": 1, "name": "Max", "sex": "m"},
        {"id": 2, "name": "Anna", "sex": "f"}
    ],
    "categories": [
        {"id": 1, "title": "Fruits", "icon": "🍏"}
    ],
    "products": [
        {"id": 1, "name": "Apple", "categoryId": 1, "userId": 1},
        {"id": 2, "name": "Banana", "categoryId": 1, "userId": 2}
    ]
}"#;

#[derive(Default, ScenarioState)]
struct World {
    list: Slot<ProductList>,
}

impl World {
    fn list(&self) -> ProductList {
        self.list.get().expect("product list should be set")
    }

    fn update(&self, action: impl FnOnce(&mut ProductList)) {
        let mut list = self.list();
        action(&mut list);
        self.list.set(list);
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn parse_csv(value: &str) -> Vec<String> {
    value.split(',').map(|item| item.trim().to_owned()).collect()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a catalogue where Max owns Apple and Anna owns Banana")]
fn a_two_product_catalogue(world: &World) {
    let catalogue = Catalogue::from_json(TWO_PRODUCT_CATALOGUE).expect("valid catalogue");
    world.list.set(ProductList::new(prepare_products(&catalogue)));
}

// ============================================================================
// When steps
// ============================================================================

#[when("the owner \"{owner}\" is selected")]
fn the_owner_is_selected(world: &World, owner: String) {
    world.update(|list| list.select_owner(owner));
}

#[when("the All tab is selected")]
fn the_all_tab_is_selected(world: &World) {
    world.update(|list| list.select_owner(""));
}

#[when("the search query is \"{query}\"")]
fn the_search_query_is(world: &World, query: String) {
    world.update(|list| list.set_query(query));
}

#[when("all filters are reset")]
fn all_filters_are_reset(world: &World) {
    world.update(ProductList::reset_all);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the visible product ids are \"{ids}\"")]
fn the_visible_product_ids_are(world: &World, ids: String) {
    let expected: Vec<u32> = parse_csv(&ids)
        .iter()
        .map(|id| id.parse().expect("numeric id"))
        .collect();

    assert_eq!(world.list().view().row_ids(), expected);
}

#[then("no products are visible")]
fn no_products_are_visible(world: &World) {
    assert!(world.list().view().is_empty());
}

#[then("the rendered listing says nothing matches")]
fn the_rendered_listing_says_nothing_matches(world: &World) {
    let text = render_text(&world.list().view(), RenderOptions::default());
    assert!(text.contains(NO_MATCH_MESSAGE), "unexpected listing: {text}");
}

#[then("the owner tabs are \"{labels}\"")]
fn the_owner_tabs_are(world: &World, labels: String) {
    let actual: Vec<String> = world
        .list()
        .view()
        .owner_tabs
        .into_iter()
        .map(|tab| tab.label)
        .collect();

    assert_eq!(actual, parse_csv(&labels));
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/product_list.feature",
    name = "Initial view shows every product"
)]
fn initial_view_shows_every_product(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/product_list.feature",
    name = "Owner filter takes precedence over the search query"
)]
fn owner_filter_takes_precedence(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/product_list.feature",
    name = "Search matches product names case-insensitively"
)]
fn search_matches_product_names(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/product_list.feature",
    name = "Search matches owner names"
)]
fn search_matches_owner_names(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/product_list.feature",
    name = "Clearing the owner falls back to the search query"
)]
fn clearing_owner_falls_back_to_query(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/product_list.feature",
    name = "Unmatched search shows the empty message"
)]
fn unmatched_search_shows_empty_message(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/product_list.feature",
    name = "Owner tabs list each owner once after All"
)]
fn owner_tabs_list_each_owner_once(world: World) {
    let _ = world;
}
