//! Behavioural tests for catalogue sources.
//!
//! These scenarios cover loading fixture files from disk, rejecting invalid
//! documents, and reproducing generated catalogues.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use camino::Utf8PathBuf;
use product_catalogue::{
    Catalogue, CatalogueError, CatalogueSize, CatalogueSource, Collection, FixtureFile,
    GeneratedCatalogue, SourceError, prepare_products,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use test_support::write_temp_fixture;

const FIXTURE_JSON: &str = r#"{
    "version": 1,
    "users": [
        {"id": 1, "name": "Roma", "sex": "m"},
        {"id": 2, "name": "Anna", "sex": "f"}
    ],
    "categories": [
        {"id": 1, "title": "Grocery", "icon": "🍞"}
    ],
    "products": [
        {"id": 1, "name": "Milk", "categoryId": 1, "userId": 1},
        {"id": 2, "name": "Bread", "categoryId": 1, "userId": 2},
        {"id": 3, "name": "Orphan", "categoryId": 1, "userId": 9}
    ]
}"#;

#[derive(Default, ScenarioState)]
struct World {
    fixture_path: Slot<Utf8PathBuf>,
    load_result: Slot<Result<Catalogue, SourceError>>,
    seed: Slot<u64>,
    generated: Slot<(Catalogue, Catalogue)>,
}

impl World {
    fn load_result(&self) -> Result<Catalogue, SourceError> {
        self.load_result.get().expect("load result should be set")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn write_fixture(world: &World, contents: &str) {
    let path = write_temp_fixture("loading", contents).expect("write fixture");
    world.fixture_path.set(path);
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a catalogue fixture file")]
fn a_catalogue_fixture_file(world: &World) {
    write_fixture(world, FIXTURE_JSON);
}

#[given("a catalogue fixture file with version {version:u32}")]
fn a_catalogue_fixture_file_with_version(world: &World, version: u32) {
    let json = FIXTURE_JSON.replacen("\"version\": 1", &format!("\"version\": {version}"), 1);
    write_fixture(world, &json);
}

#[given("a catalogue fixture file with a repeated user id")]
fn a_catalogue_fixture_file_with_a_repeated_user_id(world: &World) {
    let json = FIXTURE_JSON.replacen(
        r#"{"id": 2, "name": "Anna""#,
        r#"{"id": 1, "name": "Anna""#,
        1,
    );
    write_fixture(world, &json);
}

#[given("a generator seed {seed:u64}")]
fn a_generator_seed(world: &World, seed: u64) {
    world.seed.set(seed);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the fixture is loaded")]
fn the_fixture_is_loaded(world: &World) {
    let path = world.fixture_path.get().expect("fixture path should be set");
    world.load_result.set(FixtureFile::new(path).load());
}

#[when("the catalogue is generated twice")]
fn the_catalogue_is_generated_twice(world: &World) {
    let source = GeneratedCatalogue {
        seed: world.seed.get().expect("seed should be set"),
        size: CatalogueSize::default(),
    };
    let first = source.load().expect("first generation");
    let second = source.load().expect("second generation");
    world.generated.set((first, second));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("loading succeeds with {count:usize} products")]
fn loading_succeeds_with_products(world: &World, count: usize) {
    let catalogue = world.load_result().expect("loading should succeed");
    assert_eq!(catalogue.products().len(), count);
}

#[then("the product \"{name}\" has no owner")]
fn the_product_has_no_owner(world: &World, name: String) {
    let catalogue = world.load_result().expect("loading should succeed");
    let prepared = prepare_products(&catalogue);
    let product = prepared
        .products()
        .iter()
        .find(|product| product.name == name)
        .expect("product should exist");

    assert!(product.user.is_none());
    assert!(product.category.is_some());
}

#[then("loading fails with an unsupported version error")]
fn loading_fails_with_an_unsupported_version_error(world: &World) {
    match world.load_result() {
        Err(SourceError::Catalogue(CatalogueError::UnsupportedVersion {
            expected: 1,
            actual: 2,
        })) => {}
        other => panic!("Expected UnsupportedVersion, got: {other:?}"),
    }
}

#[then("loading fails with a duplicate id error")]
fn loading_fails_with_a_duplicate_id_error(world: &World) {
    match world.load_result() {
        Err(SourceError::Catalogue(CatalogueError::DuplicateId {
            collection: Collection::Users,
            id: 1,
        })) => {}
        other => panic!("Expected DuplicateId, got: {other:?}"),
    }
}

#[then("both catalogues are identical")]
fn both_catalogues_are_identical(world: &World) {
    let (first, second) = world
        .generated
        .get()
        .expect("catalogues should be generated");
    assert_eq!(first, second);
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/catalogue_loading.feature",
    name = "Fixture file loads and joins"
)]
fn fixture_file_loads_and_joins(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/catalogue_loading.feature",
    name = "Unsupported version is rejected"
)]
fn unsupported_version_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/catalogue_loading.feature",
    name = "Duplicate ids are rejected"
)]
fn duplicate_ids_are_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/catalogue_loading.feature",
    name = "Generated catalogues are reproducible"
)]
fn generated_catalogues_are_reproducible(world: World) {
    let _ = world;
}
