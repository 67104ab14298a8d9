use sunpath::{date_time, sun_coordinates, DstWindow, DEFAULT_LOCATION};

fn main() -> sunpath::Result<()> {
    let location = DEFAULT_LOCATION;
    let dst = DstWindow::central_european(2023)?;
    let instant = date_time(2023, 6, 21, 13)?;

    let c = sun_coordinates(instant, &location, Some(&dst));

    println!("=== Sun Position Calculation Example ===");
    println!(
        "Location: Darmstadt ({:.4}°N, {:.4}°E)",
        location.latitude, location.longitude
    );
    println!("Clock time: {}", instant);
    println!("Daylight saving: {} to {}", dst.start, dst.end);
    println!();
    println!("--- Intermediates ---");
    println!("Day offset D: {:.5}", c.day_offset);
    println!("Mean longitude: {:.4}°", c.mean_longitude);
    println!("Mean anomaly: {:.4}°", c.mean_anomaly);
    println!("Ecliptic longitude: {:.4}°", c.ecliptic_longitude);
    println!("Axial tilt: {:.5}°", c.axial_tilt);
    println!("GMST: {:.4} h", c.sidereal_time);
    println!("Local sidereal angle: {:.4}°", c.local_sidereal_angle);
    println!();
    println!("--- Sun ---");
    println!("Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", c.azimuth);
    println!("Elevation: {:.2}°", c.elevation);
    Ok(())
}
