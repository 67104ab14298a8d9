use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Observer position in degrees. Ranges are conventional, not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Azimuth clockwise from north and elevation above the horizon, in degrees.
/// Elevation is clamped at 0 when the sun is below the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarAngle {
    pub azimuth: f64,
    pub elevation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunCoordinates {
    pub day_offset: f64,
    pub mean_longitude: f64,
    pub mean_anomaly: f64,
    pub ecliptic_longitude: f64,
    pub axial_tilt: f64,
    pub sidereal_time: f64,
    pub local_sidereal_angle: f64,
    pub v_s: f64,
    pub epsilon_s: f64,
    pub zeta_s: f64,
    pub azimuth: f64,
    pub elevation: f64,
}

impl SunCoordinates {
    pub fn angle(&self) -> SolarAngle {
        SolarAngle {
            azimuth: self.azimuth,
            elevation: self.elevation,
        }
    }
}

/// Daylight-saving period. Instants strictly inside are moved back one hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DstWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    German,
}

/// Deserialized through `config::RawConfig` so an omitted `dst` follows `year`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "crate::config::RawConfig")]
pub struct SunPathConfig {
    pub location: GeoLocation,
    pub year: i32,
    pub dst: Option<DstWindow>,
    pub language: Language,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointLabel {
    pub text: String,
    pub azimuth: f64,
    pub elevation: f64,
}

/// One point per day at a fixed clock hour.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalemmaSeries {
    pub hour: u32,
    pub color_index: usize,
    pub samples: Vec<SolarAngle>,
    pub labels: Vec<PointLabel>,
}

/// Sub-daily samples across the first day of a month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTrace {
    pub month: u32,
    pub samples: Vec<SolarAngle>,
    pub label: PointLabel,
}

impl MonthlyTrace {
    pub fn is_dotted(&self) -> bool {
        self.month % 2 == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SunPath {
    pub location: GeoLocation,
    pub year: i32,
    pub language: Language,
    pub analemmas: Vec<AnalemmaSeries>,
    pub traces: Vec<MonthlyTrace>,
}
