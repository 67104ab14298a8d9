use chrono::{Duration, NaiveDateTime};

use crate::angles;
use crate::civil_time::{add_days, date_time, first_of_month, month_name};
use crate::error::{Error, Result};
use crate::types::{
    AnalemmaSeries, DstWindow, GeoLocation, MonthlyTrace, PointLabel, SolarAngle, SunPath,
    SunPathConfig,
};

pub const HOUR_STEP: usize = 2;
pub const DAYS_PER_ANALEMMA: i64 = 365;
pub const SAMPLES_PER_TRACE: usize = 100;
pub const TRACE_STEP_DAYS: f64 = 0.01;
/// Elevation offset of the low-point hour label, in degrees.
pub const LOW_LABEL_OFFSET: f64 = 2.0;

pub fn hourly_instants(year: i32, hour: u32) -> Result<Vec<NaiveDateTime>> {
    let first = date_time(year, 1, 1, 0)? + Duration::hours(i64::from(hour));
    Ok((0..DAYS_PER_ANALEMMA)
        .map(|day| first + Duration::days(day))
        .collect())
}

pub fn monthly_instants(year: i32, month: u32) -> Result<Vec<NaiveDateTime>> {
    let first = first_of_month(year, month)?;
    Ok((0..SAMPLES_PER_TRACE)
        .map(|k| add_days(first, k as f64 * TRACE_STEP_DAYS))
        .collect())
}

pub fn sample_angles(
    instants: &[NaiveDateTime],
    location: &GeoLocation,
    dst: Option<&DstWindow>,
) -> Vec<SolarAngle> {
    instants
        .iter()
        .map(|&t| angles::solar_angle(t, location, dst))
        .collect()
}

/// First sample with the highest elevation.
pub fn peak_index(samples: &[SolarAngle]) -> Option<usize> {
    extreme_index(samples, |candidate, best| candidate > best)
}

/// First sample with the lowest elevation.
pub fn trough_index(samples: &[SolarAngle]) -> Option<usize> {
    extreme_index(samples, |candidate, best| candidate < best)
}

fn extreme_index<F>(samples: &[SolarAngle], better: F) -> Option<usize>
where
    F: Fn(f64, f64) -> bool,
{
    let mut best: Option<usize> = None;
    for (i, s) in samples.iter().enumerate() {
        match best {
            Some(b) if !better(s.elevation, samples[b].elevation) => {}
            _ => best = Some(i),
        }
    }
    best
}

fn rises(samples: &[SolarAngle]) -> Option<usize> {
    peak_index(samples).filter(|&i| samples[i].elevation > 0.0)
}

fn label_at(text: String, sample: &SolarAngle, elevation_offset: f64) -> PointLabel {
    PointLabel {
        text,
        azimuth: sample.azimuth,
        elevation: sample.elevation + elevation_offset,
    }
}

/// Low-point labels go on hours strictly between 7 and 17.
pub fn labels_low_point(hour: u32) -> bool {
    hour > 7 && hour < 17
}

/// Year-long trace at one clock hour, or `None` when the sun never rises then.
pub fn analemma(config: &SunPathConfig, hour: u32) -> Result<Option<AnalemmaSeries>> {
    let instants = hourly_instants(config.year, hour)?;
    let samples = sample_angles(&instants, &config.location, config.dst.as_ref());

    let Some(peak) = rises(&samples) else {
        log::debug!("hour {hour}: sun stays below the horizon all year, skipped");
        return Ok(None);
    };

    let text = format!("{hour}h");
    let mut labels = vec![label_at(text.clone(), &samples[peak], 0.0)];
    if labels_low_point(hour) {
        if let Some(trough) = trough_index(&samples) {
            labels.push(label_at(text, &samples[trough], -LOW_LABEL_OFFSET));
        }
    }

    Ok(Some(AnalemmaSeries {
        hour,
        color_index: hour as usize / HOUR_STEP,
        samples,
        labels,
    }))
}

pub fn generate_analemmas(config: &SunPathConfig) -> Result<Vec<AnalemmaSeries>> {
    let mut series = Vec::new();
    for hour in (0..24).step_by(HOUR_STEP) {
        if let Some(s) = analemma(config, hour)? {
            series.push(s);
        }
    }
    Ok(series)
}

/// Day-long trace from the first of `month`, or `None` when the sun stays down.
pub fn monthly_trace(config: &SunPathConfig, month: u32) -> Result<Option<MonthlyTrace>> {
    let instants = monthly_instants(config.year, month)?;
    let samples = sample_angles(&instants, &config.location, config.dst.as_ref());

    let Some(peak) = rises(&samples) else {
        log::debug!("month {month}: sun stays below the horizon on day 1, skipped");
        return Ok(None);
    };

    let name = month_name(month, config.language).ok_or(Error::InvalidMonth(month))?;
    let label = label_at(name.to_string(), &samples[peak], 0.0);
    Ok(Some(MonthlyTrace {
        month,
        samples,
        label,
    }))
}

pub fn generate_monthly_traces(config: &SunPathConfig) -> Result<Vec<MonthlyTrace>> {
    let mut traces = Vec::with_capacity(12);
    for month in 1..=12 {
        if let Some(t) = monthly_trace(config, month)? {
            traces.push(t);
        }
    }
    Ok(traces)
}

pub fn generate_sun_path(config: &SunPathConfig) -> Result<SunPath> {
    let analemmas = generate_analemmas(config)?;
    let traces = generate_monthly_traces(config)?;
    log::debug!(
        "sun path for {:.4}/{:.4} in {}: {} analemmas, {} monthly traces",
        config.location.latitude,
        config.location.longitude,
        config.year,
        analemmas.len(),
        traces.len()
    );
    Ok(SunPath {
        location: config.location,
        year: config.year,
        language: config.language,
        analemmas,
        traces,
    })
}
