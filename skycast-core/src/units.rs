//! Unit conversions used by the dashboard

/// Meters per second to kilometers per hour
pub fn mps_to_kmh(mps: f64) -> f64 {
    mps * 3600.0 / 1000.0
}

pub fn meters_to_km(meters: f64) -> f64 {
    meters / 1000.0
}

/// Drop the fractional part, rounding toward zero (`21.9` → `21`, `-3.7` → `-3`)
pub fn whole_degrees(value: f64) -> i64 {
    value.trunc() as i64
}

/// Arrow pointing where the wind blows to, given the meteorological
/// direction it comes from
pub fn wind_arrow(deg: f64) -> &'static str {
    const ARROWS: [&str; 8] = ["↓", "↙", "←", "↖", "↑", "↗", "→", "↘"];
    let sector = ((deg.rem_euclid(360.0) + 22.5) / 45.0) as usize % 8;
    ARROWS[sector]
}
