//! Catalogue sources.
//!
//! The listing treats its data as an external read-only collaborator. Each
//! source produces one validated [`Catalogue`]; callers load it once at
//! startup.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use tracing::info;

use crate::catalogue::Catalogue;
use crate::error::{CatalogueError, SourceError};
use crate::generator::{CatalogueSize, generate_catalogue};

const EMBEDDED_CATALOGUE: &str = include_str!("../fixtures/catalogue.json");

/// Port for anything that can supply the three source collections.
pub trait CatalogueSource {
    /// Loads the catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the catalogue cannot be read, validated, or
    /// generated.
    fn load(&self) -> Result<Catalogue, SourceError>;
}

/// A catalogue document on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureFile {
    path: Utf8PathBuf,
}

impl FixtureFile {
    /// Points at a fixture file.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the fixture path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl CatalogueSource for FixtureFile {
    fn load(&self) -> Result<Catalogue, SourceError> {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_str().is_empty() => dir,
            _ => Utf8Path::new("."),
        };
        let file_name = self
            .path
            .file_name()
            .map(Utf8Path::new)
            .ok_or_else(|| CatalogueError::IoError {
                path: self.path.clone(),
                message: "catalogue path must name a file".to_owned(),
            })?;

        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
            CatalogueError::IoError {
                path: self.path.clone(),
                message: err.to_string(),
            }
        })?;
        let catalogue = Catalogue::from_file(&dir, file_name)?;

        info!(
            path = %self.path,
            products = catalogue.products().len(),
            "catalogue loaded from file"
        );
        Ok(catalogue)
    }
}

/// The sample catalogue compiled into the crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmbeddedFixture;

impl CatalogueSource for EmbeddedFixture {
    fn load(&self) -> Result<Catalogue, SourceError> {
        let catalogue = Catalogue::from_json(EMBEDDED_CATALOGUE)?;
        info!(
            products = catalogue.products().len(),
            "embedded catalogue loaded"
        );
        Ok(catalogue)
    }
}

/// A catalogue generated deterministically from a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedCatalogue {
    /// RNG seed.
    pub seed: u64,
    /// Record counts.
    pub size: CatalogueSize,
}

impl CatalogueSource for GeneratedCatalogue {
    fn load(&self) -> Result<Catalogue, SourceError> {
        let catalogue = generate_catalogue(self.seed, self.size)?;
        info!(
            seed = self.seed,
            products = catalogue.products().len(),
            "catalogue generated"
        );
        Ok(catalogue)
    }
}
