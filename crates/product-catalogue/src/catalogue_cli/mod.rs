//! CLI support for the product listing.
//!
//! The binary delegates to [`run`] so the whole flow (settings, loading,
//! first render, optional session) can be exercised in tests without spawning
//! a subprocess.

use std::ffi::OsString;
use std::io::{BufRead, Write};

use ortho_config::OrthoConfig;
use thiserror::Error;
use tracing::debug;

use crate::config::{CatalogueSettings, SettingsError};
use crate::error::SourceError;
use crate::join::prepare_products;
use crate::render::RenderOptions;
use crate::session::{SessionError, SessionOutput, run_session, write_view};
use crate::source::CatalogueSource;
use crate::state::ProductList;

/// Errors returned by the listing CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded from flags, environment or files.
    #[error("configuration error: {message}")]
    Config {
        /// The loader's description of the failure.
        message: String,
    },
    /// Loaded settings are inconsistent.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The catalogue could not be loaded.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// Rendering or the interactive session failed.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Loads settings from `args`, renders the initial view to `out`, and runs
/// the interactive session on `input` when enabled.
///
/// `args` includes the program name, as with [`std::env::args_os`].
///
/// # Errors
///
/// Returns [`CliError`] when settings, loading, rendering or I/O fail.
pub fn run<I, R, W>(args: I, input: R, out: &mut W) -> Result<(), CliError>
where
    I: IntoIterator<Item = OsString>,
    R: BufRead,
    W: Write,
{
    let settings = CatalogueSettings::load_from_iter(args).map_err(|err| CliError::Config {
        message: err.to_string(),
    })?;
    let output = SessionOutput {
        format: settings.output_format()?,
        render: RenderOptions {
            color: settings.color,
        },
    };

    let source = settings.source()?;
    debug!(?source, "catalogue source selected");
    let catalogue = source.load()?;
    let mut list =
        ProductList::with_selection(prepare_products(&catalogue), settings.initial_selection());

    write_view(&list, output, out)?;
    if settings.interactive {
        run_session(&mut list, input, out, output)?;
    }
    out.flush().map_err(SessionError::from)?;
    Ok(())
}
