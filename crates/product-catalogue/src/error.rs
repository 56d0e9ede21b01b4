//! Error types for the product-catalogue crate.
//!
//! Catalogue loading and demo generation each get a semantic error enum built
//! with `thiserror`. Unresolved product references are deliberately absent:
//! the join stage degrades them to `None` instead of failing.

use std::fmt;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Names one of the three source collections of a catalogue document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// The `users` array.
    Users,
    /// The `categories` array.
    Categories,
    /// The `products` array.
    Products,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Users => "users",
            Self::Categories => "categories",
            Self::Products => "products",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when reading or validating a catalogue document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// The fixture file could not be read.
    #[error("failed to read catalogue file at '{path}': {message}")]
    IoError {
        /// Path to the fixture file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The document is malformed or missing required fields.
    #[error("invalid catalogue JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The document version is not supported.
    #[error("unsupported catalogue version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the document.
        actual: u32,
    },

    /// An id appears more than once within a single collection.
    #[error("duplicate id {id} in {collection}")]
    DuplicateId {
        /// Collection holding the repeated id.
        collection: Collection,
        /// The repeated id.
        id: u32,
    },
}

/// Errors that can occur while generating a demo catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Could not find enough distinct user names.
    #[error("failed to generate {requested} unique user names after {max_attempts} attempts")]
    UserNameExhausted {
        /// Number of users requested.
        requested: usize,
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// Products were requested without any users or categories to reference.
    #[error("cannot generate products without at least one user and one category")]
    EmptyPalette,

    /// The generated collections failed catalogue validation.
    #[error("generated catalogue is invalid: {source}")]
    InvalidCatalogue {
        /// Underlying validation error.
        #[from]
        #[source]
        source: CatalogueError,
    },
}

/// Errors surfaced by a [`CatalogueSource`](crate::CatalogueSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// A fixture could not be read or validated.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// A demo catalogue could not be generated.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}
