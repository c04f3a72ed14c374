//! User preferences.
//!
//! Preferences are stored as YAML. The defaults are compiled in from
//! `default.yaml`, and a user file is layered on top, so the user file only
//! needs to contain the keys it changes.

#[macro_use]
extern crate lazy_static;

use std::path::{Path, PathBuf};

use cubeturn_core::{ColorScheme, NetStyle};
use directories::ProjectDirs;
use eyre::{OptionExt, Result, WrapErr};
use serde::{Deserialize, Serialize};

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");
const PREFS_FILE_NAME: &str = "cubeturn-prefs.yaml";

lazy_static! {
    /// Compiled-in default preferences.
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

/// User preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Preferences {
    /// Colors of the solved cube.
    pub color_scheme: ColorScheme,
    /// How nets are drawn.
    pub net: NetStyle,
    /// Scramble generation.
    pub scramble: ScramblePreferences,
}

impl Default for Preferences {
    fn default() -> Self {
        DEFAULT_PREFS.clone()
    }
}

/// Scramble generation preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScramblePreferences {
    /// Number of moves in a scramble.
    pub length: usize,
}

impl Default for ScramblePreferences {
    fn default() -> Self {
        Self {
            length: cubeturn_core::DEFAULT_SCRAMBLE_LENGTH,
        }
    }
}

impl Preferences {
    /// Loads preferences from `user_file`, or from the default user file if
    /// `user_file` is `None`. If loading fails, logs a warning and returns the
    /// default preferences.
    pub fn load(user_file: Option<&Path>) -> Self {
        Self::try_load(user_file).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e:#}");
            Self::default()
        })
    }

    /// Loads preferences from `user_file`, or from the default user file if
    /// `user_file` is `None`.
    ///
    /// An explicitly requested file must exist. The default user file is
    /// optional.
    pub fn try_load(user_file: Option<&Path>) -> Result<Self> {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        match user_file {
            Some(path) => {
                log::info!("Loading preferences from {}", path.display());
                config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
            }
            None => match user_prefs_file() {
                Ok(path) => {
                    log::debug!("Loading preferences from {}", path.display());
                    config = config.add_source(
                        config::File::from(path.as_path())
                            .format(PREFS_FILE_FORMAT)
                            .required(false),
                    );
                }
                Err(e) => log::warn!("Error locating user preferences: {e}"),
            },
        }

        let prefs: Self = config
            .build()
            .and_then(|c| c.try_deserialize())
            .wrap_err("error reading preferences")?;
        prefs
            .color_scheme
            .validate()
            .wrap_err("invalid color scheme")?;
        Ok(prefs)
    }

    /// Saves preferences to `path` as YAML, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::info!("Saved preferences to {}", path.display());
        Ok(())
    }
}

/// Returns the path of the default user preferences file, in the platform's
/// configuration directory.
pub fn user_prefs_file() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "cubeturn").ok_or_eyre("no home directory")?;
    Ok(dirs.config_dir().join(PREFS_FILE_NAME))
}

#[cfg(test)]
mod tests;
