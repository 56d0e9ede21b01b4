//! Product listing with owner and free-text filtering.
//!
//! This crate joins three read-only datasets (users, categories, products)
//! into enriched product rows and filters them by a selected owner or by a
//! search query.
//!
//! # Overview
//!
//! - [`CatalogueSource`] implementations load a validated [`Catalogue`]
//! - [`prepare_products`] runs the join once and yields a [`PreparedCatalogue`]
//! - [`filter_products`] is the pure filter stage
//! - [`ProductList`] holds the filter selection and derives a [`CatalogueView`]
//! - [`render_text`] and [`render_json`] turn a view into output
//! - [`session`] drives a [`ProductList`] from line-oriented commands
//! - [`catalogue_cli`] wires settings, loading and the session together
//!
//! # Example
//!
//! ```
//! use product_catalogue::{CatalogueSource, EmbeddedFixture, ProductList, prepare_products};
//!
//! let catalogue = EmbeddedFixture.load().expect("embedded catalogue");
//! let mut list = ProductList::new(prepare_products(&catalogue));
//!
//! list.set_query("sweater");
//! let view = list.view();
//!
//! assert_eq!(view.rows.len(), 1);
//! assert_eq!(view.rows.first().map(|row| row.owner.as_str()), Some("John"));
//! ```

mod catalogue;
pub mod catalogue_cli;
mod config;
mod error;
mod filter;
mod generator;
mod join;
mod model;
mod render;
pub mod session;
mod source;
mod state;

pub use catalogue::Catalogue;
pub use config::{CatalogueSettings, OutputFormat, SelectedSource, SettingsError};
pub use error::{CatalogueError, Collection, GenerationError, SourceError};
pub use filter::{FilterSelection, filter_products, normalize_query};
pub use generator::{CatalogueSize, generate_catalogue};
pub use join::{PreparedCatalogue, prepare_products};
pub use model::{Category, EnrichedProduct, Product, Sex, User};
pub use render::{NO_MATCH_MESSAGE, RenderOptions, render_json, render_text};
pub use source::{CatalogueSource, EmbeddedFixture, FixtureFile, GeneratedCatalogue};
pub use state::{CatalogueView, OwnerStyle, OwnerTab, ProductList, ProductRow};
