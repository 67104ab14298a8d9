use std::fs;

use sunpath::chart::*;
use sunpath::sun_path::generate_sun_path;
use sunpath::types::{Language, SunPathConfig};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn render(config: &SunPathConfig) -> String {
    let path = generate_sun_path(config).unwrap();
    let mut out = Vec::new();
    render_svg(&mut out, &path).unwrap();
    String::from_utf8(out).unwrap()
}

// ── Frame ──

#[test]
fn test_frame_mapping() {
    let frame = Frame::new(70.0);
    assert_approx!(frame.x(0.0), 90.0, 1e-9);
    assert_approx!(frame.x(180.0), 525.0, 1e-9);
    assert_approx!(frame.x(360.0), 960.0, 1e-9);
    assert_approx!(frame.y(ELEVATION_FLOOR), 720.0, 1e-9);
    assert_approx!(frame.y(70.0), 70.0, 1e-9);
    assert!(frame.y(10.0) < frame.y(0.0));
}

#[test]
fn test_elevation_ceiling_darmstadt() {
    let path = generate_sun_path(&SunPathConfig::default()).unwrap();
    assert_approx!(elevation_ceiling(&path), 70.0, 1e-12);
}

#[test]
fn test_series_colors_alternate() {
    assert_eq!(series_color(3), series_color(5));
    assert_ne!(series_color(3), series_color(6));
}

// ── SVG ──

#[test]
fn test_svg_structure() {
    let svg = render(&SunPathConfig::default());
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>\n"));
    assert_eq!(svg.matches("<polyline").count(), 12);
    assert_eq!(svg.matches("stroke-dasharray='2,4'").count(), 6);
    assert_eq!(svg.matches("stroke-dasharray='9,5'").count(), 6);
    assert_eq!(svg.matches("<g fill=").count(), 8);
}

#[test]
fn test_svg_english_text() {
    let svg = render(&SunPathConfig::default());
    for label in ["North-East", "South-West", "Compass direction", "Elevation in °", "12h", "July"] {
        assert!(svg.contains(label), "missing {}", label);
    }
    assert!(!svg.contains(">0h<"));
}

#[test]
fn test_svg_german_text() {
    let config = SunPathConfig {
        language: Language::German,
        ..SunPathConfig::default()
    };
    let svg = render(&config);
    for label in ["Süd-West", "Himmelsrichtung", "Einfallswinkel in °", "März", "Sonnenstand"] {
        assert!(svg.contains(label), "missing {}", label);
    }
}

#[test]
fn test_write_svg_to_file() {
    let path = generate_sun_path(&SunPathConfig::default()).unwrap();
    let target = std::env::temp_dir().join(format!("sunpath-test-{}.svg", std::process::id()));
    write_svg(&path, &target).unwrap();
    let written = fs::read_to_string(&target).unwrap();
    fs::remove_file(&target).unwrap();
    assert!(written.contains("<polyline"));
}

#[test]
fn test_write_svg_missing_directory() {
    let path = generate_sun_path(&SunPathConfig::default()).unwrap();
    let target = std::env::temp_dir().join("sunpath-no-such-dir").join("chart.svg");
    let err = write_svg(&path, &target).unwrap_err();
    assert!(err.to_string().contains("could not write chart"));
}
