pub mod angles;
pub mod chart;
pub mod civil_time;
pub mod config;
pub mod error;
pub mod sun_path;
pub mod types;

pub use angles::{
    axial_tilt, clamp_elevation, deg_to_rad, direction_cosines, ecliptic_longitude,
    local_sidereal_angle, mean_anomaly, mean_longitude, normalize_angle, normalize_hours,
    rad_to_deg, resolve_azimuth, sidereal_time, solar_angle, sun_coordinates, DEGREES_PER_HOUR,
};

pub use chart::{render_svg, write_svg};

pub use civil_time::{
    add_days, compass_label, date_time, day_offset, first_of_month, last_sunday, month_name,
    to_standard_time, REFERENCE_EPOCH,
};

pub use config::{DEFAULT_LOCATION, DEFAULT_YEAR};

pub use error::{Error, Result};

pub use sun_path::{
    analemma, generate_analemmas, generate_monthly_traces, generate_sun_path, hourly_instants,
    monthly_instants, monthly_trace, peak_index, sample_angles, trough_index,
};

pub use types::{
    AnalemmaSeries, DstWindow, GeoLocation, Language, MonthlyTrace, PointLabel, SolarAngle,
    SunCoordinates, SunPath, SunPathConfig,
};
