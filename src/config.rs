use std::fs;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use serde::{Deserialize, Deserializer};

use crate::civil_time::first_of_month;
use crate::error::{Error, Result};
use crate::types::{DstWindow, GeoLocation, Language, SunPathConfig};

/// Darmstadt, Germany.
pub const DEFAULT_LOCATION: GeoLocation = GeoLocation::new(49.827_304, 8.645_111);
pub const DEFAULT_YEAR: i32 = 2023;
pub const DEFAULT_OUTPUT: &str = "sunpath.svg";

impl Default for SunPathConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION,
            year: DEFAULT_YEAR,
            dst: DstWindow::central_european(DEFAULT_YEAR).ok(),
            language: Language::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// File form of [`SunPathConfig`]. `dst` distinguishes a missing key (derive
/// the window from `year`) from an explicit `null` (no correction).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawConfig {
    location: Option<GeoLocation>,
    year: Option<i32>,
    #[serde(deserialize_with = "present")]
    dst: Option<Option<DstWindow>>,
    language: Option<Language>,
    output: Option<PathBuf>,
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Option<DstWindow>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<DstWindow>::deserialize(deserializer).map(Some)
}

impl TryFrom<RawConfig> for SunPathConfig {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let year = raw.year.unwrap_or(DEFAULT_YEAR);
        let dst = match raw.dst {
            Some(explicit) => explicit,
            None => Some(DstWindow::central_european(year)?),
        };
        Ok(Self {
            location: raw.location.unwrap_or(DEFAULT_LOCATION),
            year,
            dst,
            language: raw.language.unwrap_or_default(),
            output: raw.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        })
    }
}

impl SunPathConfig {
    pub fn from_json_str(raw: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(raw).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw, path)
    }

    /// Moves the configuration to another year, rederiving the DST window
    /// when it follows the central European rule for the year it starts in.
    pub fn with_year(mut self, year: i32) -> Result<Self> {
        first_of_month(year, 1)?;
        if let Some(window) = self.dst {
            if follows_central_european_rule(&window, window.start.year()) {
                self.dst = Some(DstWindow::central_european(year)?);
            }
        }
        self.year = year;
        Ok(self)
    }
}

fn follows_central_european_rule(window: &DstWindow, year: i32) -> bool {
    DstWindow::central_european(year).is_ok_and(|rule| rule == *window)
}
