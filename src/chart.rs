use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::civil_time::compass_label;
use crate::error::{Error, Result};
use crate::types::{Language, SolarAngle, SunPath};

pub const WIDTH: i32 = 1000;
pub const HEIGHT: i32 = 800;
const LEFT_MARGIN: i32 = 90;
const RIGHT_MARGIN: i32 = 40;
const TOP_MARGIN: i32 = 70;
const BOTTOM_MARGIN: i32 = 80;

/// Below-zero headroom so low-point labels stay visible.
pub const ELEVATION_FLOOR: f64 = -5.0;
pub const COMPASS_STEP: f64 = 45.0;

const SERIES_COLORS: [&str; 2] = ["#1f3fbf", "#1a8a2e"];
const TRACE_COLOR: &str = "#111111";
const DOTTED: &str = "2,4";
const DASHED: &str = "9,5";

struct Captions {
    title: &'static str,
    x_axis: &'static str,
    y_axis: &'static str,
}

fn captions(language: Language) -> Captions {
    match language {
        Language::English => Captions {
            title: "Sun position",
            x_axis: "Compass direction",
            y_axis: "Elevation in °",
        },
        Language::German => Captions {
            title: "Sonnenstand",
            x_axis: "Himmelsrichtung",
            y_axis: "Einfallswinkel in °",
        },
    }
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn series_color(color_index: usize) -> &'static str {
    SERIES_COLORS[color_index % SERIES_COLORS.len()]
}

/// Upper end of the elevation axis: the highest sample rounded up to ten degrees.
pub fn elevation_ceiling(sun_path: &SunPath) -> f64 {
    let highest = sun_path
        .analemmas
        .iter()
        .flat_map(|s| s.samples.iter())
        .chain(sun_path.traces.iter().flat_map(|t| t.samples.iter()))
        .map(|s| s.elevation)
        .fold(0.0_f64, f64::max);
    ((highest + 5.0) / 10.0).ceil().max(1.0) * 10.0
}

/// Maps (azimuth, elevation) degrees onto pixel coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    y_max: f64,
}

impl Frame {
    pub fn new(y_max: f64) -> Self {
        Self { y_max }
    }

    fn plot_w(&self) -> f64 {
        f64::from(WIDTH - LEFT_MARGIN - RIGHT_MARGIN)
    }

    fn plot_h(&self) -> f64 {
        f64::from(HEIGHT - TOP_MARGIN - BOTTOM_MARGIN)
    }

    pub fn x(&self, azimuth: f64) -> f64 {
        f64::from(LEFT_MARGIN) + (azimuth / 360.0).clamp(0.0, 1.0) * self.plot_w()
    }

    pub fn y(&self, elevation: f64) -> f64 {
        let t = (elevation - ELEVATION_FLOOR) / (self.y_max - ELEVATION_FLOOR);
        f64::from(TOP_MARGIN) + (1.0 - t.clamp(0.0, 1.0)) * self.plot_h()
    }
}

fn visible(samples: &[SolarAngle]) -> impl Iterator<Item = &SolarAngle> {
    samples.iter().filter(|s| s.elevation > 0.0)
}

pub fn render_svg<W: Write>(w: &mut W, sun_path: &SunPath) -> io::Result<()> {
    let frame = Frame::new(elevation_ceiling(sun_path));
    let text = captions(sun_path.language);
    let bottom = HEIGHT - BOTTOM_MARGIN;
    let right = WIDTH - RIGHT_MARGIN;

    writeln!(
        w,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{WIDTH}' height='{HEIGHT}' viewBox='0 0 {WIDTH} {HEIGHT}'>"
    )?;
    writeln!(w, "<rect x='0' y='0' width='{WIDTH}' height='{HEIGHT}' fill='#ffffff'/>")?;
    writeln!(
        w,
        "<text x='{}' y='40' text-anchor='middle' font-family='sans-serif' font-size='22' fill='#111827'>{} {:.4}°, {:.4}° ({})</text>",
        WIDTH / 2,
        text.title,
        sun_path.location.latitude,
        sun_path.location.longitude,
        sun_path.year
    )?;

    // Grid and compass ticks.
    for i in 0..=8 {
        let azimuth = i as f64 * COMPASS_STEP;
        let x = frame.x(azimuth);
        writeln!(
            w,
            "<line x1='{x:.2}' y1='{TOP_MARGIN}' x2='{x:.2}' y2='{bottom}' stroke='#d1d5db' stroke-width='1'/>"
        )?;
        if let Some(label) = compass_label(i, sun_path.language) {
            writeln!(
                w,
                "<text x='{x:.2}' y='{}' text-anchor='middle' font-family='sans-serif' font-size='13' fill='#374151'>{}</text>",
                bottom + 22,
                xml_escape(label)
            )?;
        }
    }
    let mut elevation = 0.0;
    while elevation <= frame.y_max {
        let y = frame.y(elevation);
        let stroke = if elevation == 0.0 { "#6b7280" } else { "#d1d5db" };
        writeln!(
            w,
            "<line x1='{LEFT_MARGIN}' y1='{y:.2}' x2='{right}' y2='{y:.2}' stroke='{stroke}' stroke-width='1'/>"
        )?;
        writeln!(
            w,
            "<text x='{}' y='{:.2}' text-anchor='end' font-family='sans-serif' font-size='13' fill='#374151'>{elevation:.0}</text>",
            LEFT_MARGIN - 8,
            y + 4.0
        )?;
        elevation += 10.0;
    }
    writeln!(
        w,
        "<text x='{}' y='{}' text-anchor='middle' font-family='sans-serif' font-size='15' fill='#111827'>{}</text>",
        (LEFT_MARGIN + right) / 2,
        HEIGHT - 25,
        xml_escape(text.x_axis)
    )?;
    writeln!(
        w,
        "<text x='25' y='{0}' transform='rotate(-90 25 {0})' text-anchor='middle' font-family='sans-serif' font-size='15' fill='#111827'>{1}</text>",
        (TOP_MARGIN + bottom) / 2,
        xml_escape(text.y_axis)
    )?;

    for series in &sun_path.analemmas {
        let color = series_color(series.color_index);
        writeln!(w, "<g fill='{color}'>")?;
        for s in visible(&series.samples) {
            writeln!(
                w,
                "<circle cx='{:.2}' cy='{:.2}' r='1.8'/>",
                frame.x(s.azimuth),
                frame.y(s.elevation)
            )?;
        }
        writeln!(w, "</g>")?;
        for label in &series.labels {
            writeln!(
                w,
                "<text x='{:.2}' y='{:.2}' text-anchor='middle' font-family='sans-serif' font-size='12' fill='{color}'>{}</text>",
                frame.x(label.azimuth),
                frame.y(label.elevation) - 4.0,
                xml_escape(&label.text)
            )?;
        }
    }

    for trace in &sun_path.traces {
        let dash = if trace.is_dotted() { DOTTED } else { DASHED };
        let points: Vec<String> = visible(&trace.samples)
            .map(|s| format!("{:.2},{:.2}", frame.x(s.azimuth), frame.y(s.elevation)))
            .collect();
        writeln!(
            w,
            "<polyline points='{}' fill='none' stroke='{TRACE_COLOR}' stroke-width='1.2' stroke-dasharray='{dash}'/>",
            points.join(" ")
        )?;
        writeln!(
            w,
            "<text x='{:.2}' y='{:.2}' font-family='sans-serif' font-size='12' fill='{TRACE_COLOR}'>{}</text>",
            frame.x(trace.label.azimuth),
            frame.y(trace.label.elevation) - 4.0,
            xml_escape(&trace.label.text)
        )?;
    }

    writeln!(w, "</svg>")?;
    Ok(())
}

pub fn write_svg(sun_path: &SunPath, path: &Path) -> Result<()> {
    let wrap = |source: io::Error| Error::ChartWrite {
        path: path.to_path_buf(),
        source,
    };
    let file = fs::File::create(path).map_err(wrap)?;
    let mut out = BufWriter::new(file);
    render_svg(&mut out, sun_path).map_err(wrap)?;
    out.flush().map_err(wrap)?;
    log::info!(
        "wrote {} ({} analemmas, {} monthly traces)",
        path.display(),
        sun_path.analemmas.len(),
        sun_path.traces.len()
    );
    Ok(())
}
