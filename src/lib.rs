#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::app::commands::LibraryCommand;
#[cfg(feature = "cli")]
pub use crate::config::{CliCommand, CliConfig};

pub use crate::config::toml_config::LibraryConfig;
pub use crate::core::{catalog::Catalog, report::OutputFormat};
pub use crate::utils::error::{LibraryError, Result};
