//! Listing configuration loaded via OrthoConfig.
//!
//! Values layer from CLI flags, `PRODUCT_CATALOGUE_*` environment variables,
//! and configuration files.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::catalogue::Catalogue;
use crate::error::SourceError;
use crate::filter::FilterSelection;
use crate::generator::CatalogueSize;
use crate::source::{CatalogueSource, EmbeddedFixture, FixtureFile, GeneratedCatalogue};

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The output format is not recognised.
    #[error("unknown output format '{value}'; expected 'table' or 'json'")]
    UnknownFormat {
        /// The rejected value.
        value: String,
    },
    /// The fixture path is not valid UTF-8.
    #[error("fixture path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// The rejected path.
        path: PathBuf,
    },
    /// Both a fixture path and a generator seed were supplied.
    #[error("choose either a fixture path or a generator seed, not both")]
    ConflictingSources,
}

/// How the derived view is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned text table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Configuration values controlling the product listing.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PRODUCT_CATALOGUE")]
pub struct CatalogueSettings {
    /// Catalogue document to load instead of the embedded sample.
    pub fixture_path: Option<PathBuf>,
    /// Generate a demo catalogue from this seed instead of loading one.
    pub generate_seed: Option<u64>,
    /// Owner to select at startup.
    pub owner: Option<String>,
    /// Search query to apply at startup.
    pub query: Option<String>,
    /// Output format, `table` or `json`.
    pub format: Option<String>,
    /// Colour owner names in table output.
    #[ortho_config(default = false)]
    pub color: bool,
    /// Read filter commands from stdin after the first render.
    #[ortho_config(default = false)]
    pub interactive: bool,
}

impl CatalogueSettings {
    /// Returns the configured output format, defaulting to a table.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownFormat`] for anything other than
    /// `table` or `json` (case-insensitive).
    pub fn output_format(&self) -> Result<OutputFormat, SettingsError> {
        match self.format.as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("table") => Ok(OutputFormat::Table),
            Some("json") => Ok(OutputFormat::Json),
            Some(_) => Err(SettingsError::UnknownFormat {
                value: self.format.clone().unwrap_or_default(),
            }),
        }
    }

    /// Resolves where the catalogue comes from.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if both sources are configured or the
    /// fixture path is not UTF-8.
    pub fn source(&self) -> Result<SelectedSource, SettingsError> {
        match (&self.fixture_path, self.generate_seed) {
            (Some(_), Some(_)) => Err(SettingsError::ConflictingSources),
            (Some(path), None) => {
                let utf8 = Utf8PathBuf::from_path_buf(path.clone())
                    .map_err(|rejected| SettingsError::NonUtf8Path { path: rejected })?;
                Ok(SelectedSource::File(FixtureFile::new(utf8)))
            }
            (None, Some(seed)) => Ok(SelectedSource::Generated(GeneratedCatalogue {
                seed,
                size: CatalogueSize::default(),
            })),
            (None, None) => Ok(SelectedSource::Embedded(EmbeddedFixture)),
        }
    }

    /// Returns the filter selection to start with.
    #[must_use]
    pub fn initial_selection(&self) -> FilterSelection {
        FilterSelection {
            owner: self.owner.clone().unwrap_or_default(),
            query: self.query.clone().unwrap_or_default(),
        }
    }
}

/// The catalogue source chosen by configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedSource {
    /// A fixture file on disk.
    File(FixtureFile),
    /// The embedded sample.
    Embedded(EmbeddedFixture),
    /// A seeded demo catalogue.
    Generated(GeneratedCatalogue),
}

impl CatalogueSource for SelectedSource {
    fn load(&self) -> Result<Catalogue, SourceError> {
        match self {
            Self::File(source) => source.load(),
            Self::Embedded(source) => source.load(),
            Self::Generated(source) => source.load(),
        }
    }
}
