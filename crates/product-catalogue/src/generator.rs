//! Deterministic demo catalogue generation.
//!
//! The same seed always produces the same catalogue, so demo sessions and
//! tests can rely on stable ids and names.

use std::collections::HashSet;

use fake::Fake;
use fake::faker::name::raw::FirstName;
use fake::locales::EN;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::catalogue::Catalogue;
use crate::error::GenerationError;
use crate::model::{Category, Product, Sex, User};

/// Maximum number of draws spent looking for each unique user name.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Titles and icons that generated categories are drawn from.
const CATEGORY_PALETTE: [(&str, &str); 8] = [
    ("Grocery", "🍞"),
    ("Drinks", "🍺"),
    ("Fruits", "🍏"),
    ("Electronics", "💻"),
    ("Clothes", "👚"),
    ("Books", "📚"),
    ("Toys", "🧸"),
    ("Garden", "🌱"),
];

/// Names that generated products are drawn from.
const PRODUCT_NAMES: [&str; 16] = [
    "Milk", "Bread", "Eggs", "Coffee", "Tea", "Apple", "Banana", "Laptop", "Phone",
    "Jacket", "Socks", "Novel", "Puzzle", "Kite", "Shovel", "Seeds",
];

/// How many records of each kind to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogueSize {
    /// Number of users.
    pub users: usize,
    /// Number of categories, capped at the palette size.
    pub categories: usize,
    /// Number of products.
    pub products: usize,
}

impl Default for CatalogueSize {
    fn default() -> Self {
        Self {
            users: 4,
            categories: 5,
            products: 12,
        }
    }
}

/// Generates a catalogue from a seed.
///
/// Users get distinct first names and a random sex, categories are drawn
/// without repetition from a fixed palette, and each product picks a name,
/// a category, and an owner at random. Every reference resolves.
///
/// # Errors
///
/// Returns [`GenerationError`] if:
/// - Products are requested with zero users or zero categories
/// - Enough distinct user names cannot be found
///
/// # Example
///
/// ```
/// use product_catalogue::{CatalogueSize, generate_catalogue};
///
/// let first = generate_catalogue(2026, CatalogueSize::default()).expect("generated");
/// let second = generate_catalogue(2026, CatalogueSize::default()).expect("generated");
///
/// assert_eq!(first, second);
/// assert_eq!(first.products().len(), 12);
/// ```
pub fn generate_catalogue(seed: u64, size: CatalogueSize) -> Result<Catalogue, GenerationError> {
    let category_count = size.categories.min(CATEGORY_PALETTE.len());
    if size.products > 0 && (size.users == 0 || category_count == 0) {
        return Err(GenerationError::EmptyPalette);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let users = generate_users(&mut rng, size.users)?;
    let categories = generate_categories(&mut rng, category_count);
    let products = generate_products(&mut rng, size.products, &users, &categories)?;

    Ok(Catalogue::new(users, categories, products)?)
}

fn generate_users(rng: &mut ChaCha8Rng, count: usize) -> Result<Vec<User>, GenerationError> {
    let mut names = HashSet::new();
    let mut users = Vec::with_capacity(count);

    for id in (1..).take(count) {
        let name = unique_first_name(rng, &mut names).ok_or(
            GenerationError::UserNameExhausted {
                requested: count,
                max_attempts: MAX_NAME_ATTEMPTS,
            },
        )?;
        let sex = if rng.random_ratio(1, 2) {
            Sex::Male
        } else {
            Sex::Female
        };
        users.push(User { id, name, sex });
    }

    Ok(users)
}

fn unique_first_name(rng: &mut ChaCha8Rng, taken: &mut HashSet<String>) -> Option<String> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let candidate: String = FirstName(EN).fake_with_rng(rng);
        if taken.insert(candidate.clone()) {
            return Some(candidate);
        }
    }
    None
}

fn generate_categories(rng: &mut ChaCha8Rng, count: usize) -> Vec<Category> {
    let mut palette = CATEGORY_PALETTE.to_vec();
    palette.shuffle(rng);

    (1..)
        .zip(palette.into_iter().take(count))
        .map(|(id, (title, icon))| Category {
            id,
            title: title.to_owned(),
            icon: icon.to_owned(),
        })
        .collect()
}

fn generate_products(
    rng: &mut ChaCha8Rng,
    count: usize,
    users: &[User],
    categories: &[Category],
) -> Result<Vec<Product>, GenerationError> {
    (1..)
        .take(count)
        .map(|id| {
            let name = PRODUCT_NAMES.choose(rng).ok_or(GenerationError::EmptyPalette)?;
            let category = categories.choose(rng).ok_or(GenerationError::EmptyPalette)?;
            let user = users.choose(rng).ok_or(GenerationError::EmptyPalette)?;
            Ok(Product {
                id,
                name: (*name).to_owned(),
                category_id: category.id,
                user_id: user.id,
            })
        })
        .collect()
}
