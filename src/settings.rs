//! Configuration for a [`crate::interface::Typewise`] instance.
//!
//! Settings are layered with the `config` crate: built-in defaults, then an
//! optional file. Nothing is read from the process environment.

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use std::path::Path;

use crate::error::Result;
use crate::pattern::PatternOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Flags given to coerced patterns that carry none of their own.
    pub pattern: PatternOptions,
}

impl Settings {
    /// Defaults overlaid with the file at `path`, when given.
    pub fn load(path: Option<&Path>) -> Result<Settings> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let settings: Settings = builder.build()?.try_deserialize()?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// Settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Settings> {
        let settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
