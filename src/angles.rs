use chrono::NaiveDateTime;

use crate::civil_time::{day_offset, to_standard_time};
use crate::types::{DstWindow, GeoLocation, SolarAngle, SunCoordinates};

pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

fn normalize_period(value: f64, period: f64) -> f64 {
    let reduced = value - (value / period).floor() * period;
    // tiny negative inputs round up to exactly `period`
    if reduced >= period { 0.0 } else { reduced }
}

/// Reduces an angle to [0, 360).
pub fn normalize_angle(angle: f64) -> f64 {
    normalize_period(angle, 360.0)
}

/// Reduces a sidereal time to [0, 24).
pub fn normalize_hours(hours: f64) -> f64 {
    normalize_period(hours, 24.0)
}

pub fn mean_longitude(d: f64) -> f64 {
    normalize_angle(280.459 + 0.985_647_36 * d)
}

pub fn mean_anomaly(d: f64) -> f64 {
    normalize_angle(357.529 + 0.985_600_28 * d)
}

/// Not normalized; may fall slightly outside [0, 360).
pub fn ecliptic_longitude(mean_longitude: f64, mean_anomaly: f64) -> f64 {
    let g = deg_to_rad(mean_anomaly);
    mean_longitude + 1.915 * g.sin() + 0.02 * (2.0 * g).sin()
}

pub fn axial_tilt(d: f64) -> f64 {
    23.429 - 0.000_000_36 * d
}

/// Greenwich mean sidereal time in hours.
pub fn sidereal_time(d: f64) -> f64 {
    let t = d / DAYS_PER_JULIAN_CENTURY;
    normalize_hours(18.697_374_558 + 24.065_709_824_419_08 * d + 0.000_026 * t * t)
}

pub fn local_sidereal_angle(sidereal_time: f64, longitude: f64) -> f64 {
    normalize_angle(sidereal_time * DEGREES_PER_HOUR + longitude)
}

/// Returns `(v_S, Epsilon_S, Zeta_S)`: the two horizontal components and the
/// vertical component of the unit vector towards the sun.
pub fn direction_cosines(
    latitude: f64,
    local_sidereal_angle: f64,
    ecliptic_longitude: f64,
    axial_tilt: f64,
) -> (f64, f64, f64) {
    let (sin_phi, cos_phi) = deg_to_rad(latitude).sin_cos();
    let (sin_th, cos_th) = deg_to_rad(local_sidereal_angle).sin_cos();
    let (sin_lam, cos_lam) = deg_to_rad(ecliptic_longitude).sin_cos();
    let (sin_eps, cos_eps) = deg_to_rad(axial_tilt).sin_cos();

    let v_s = -sin_th * cos_lam + cos_th * cos_eps * sin_lam;
    let epsilon_s =
        -sin_phi * cos_th * cos_lam - (sin_phi * sin_th * cos_eps - cos_phi * sin_eps) * sin_lam;
    let zeta_s =
        cos_phi * cos_th * cos_lam + (cos_phi * sin_th * cos_eps + sin_phi * sin_eps) * sin_lam;
    (v_s, epsilon_s, zeta_s)
}

/// Sign-based quadrant rule, not a four-quadrant arctangent:
///
/// | `epsilon_s` | `v_s`  | azimuth            |
/// |-------------|--------|--------------------|
/// | > 0         | > 0    | atan(v/e)          |
/// | > 0         | < 0    | atan(v/e) + 360    |
/// | otherwise   | any    | atan(v/e) + 180    |
///
/// `epsilon_s > 0` with `v_s == 0` lands in the last row. When `epsilon_s`
/// is exactly 0 the arctangent takes its limit, giving 270 for positive
/// `v_s`, 90 for negative and 180 when both are 0.
pub fn resolve_azimuth(v_s: f64, epsilon_s: f64) -> f64 {
    let base = if epsilon_s == 0.0 {
        if v_s == 0.0 { 0.0 } else { 90.0_f64.copysign(v_s) }
    } else {
        rad_to_deg((v_s / epsilon_s).atan())
    };

    if epsilon_s > 0.0 && v_s > 0.0 {
        base
    } else if epsilon_s > 0.0 && v_s < 0.0 {
        base + 360.0
    } else {
        base + 180.0
    }
}

/// Elevation from the vertical component; below-horizon values become exactly 0.
pub fn clamp_elevation(zeta_s: f64) -> f64 {
    rad_to_deg(zeta_s.clamp(-1.0, 1.0).asin()).max(0.0)
}

/// Evaluates every step of the algorithm for one instant.
pub fn sun_coordinates(
    instant: NaiveDateTime,
    location: &GeoLocation,
    dst: Option<&DstWindow>,
) -> SunCoordinates {
    let d = day_offset(to_standard_time(instant, dst));
    let q = mean_longitude(d);
    let g = mean_anomaly(d);
    let lambda_s = ecliptic_longitude(q, g);
    let epsilon = axial_tilt(d);
    let gmst = sidereal_time(d);
    let theta_l = local_sidereal_angle(gmst, location.longitude);
    let (v_s, epsilon_s, zeta_s) = direction_cosines(location.latitude, theta_l, lambda_s, epsilon);

    SunCoordinates {
        day_offset: d,
        mean_longitude: q,
        mean_anomaly: g,
        ecliptic_longitude: lambda_s,
        axial_tilt: epsilon,
        sidereal_time: gmst,
        local_sidereal_angle: theta_l,
        v_s,
        epsilon_s,
        zeta_s,
        azimuth: resolve_azimuth(v_s, epsilon_s),
        elevation: clamp_elevation(zeta_s),
    }
}

pub fn solar_angle(
    instant: NaiveDateTime,
    location: &GeoLocation,
    dst: Option<&DstWindow>,
) -> SolarAngle {
    sun_coordinates(instant, location, dst).angle()
}
