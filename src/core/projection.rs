//! Projektion WGS84-Grad ↔ Web-Mercator-Meter (EPSG:3857).

use glam::DVec2;

/// Erdradius der sphaerischen Mercator-Projektion in Metern.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Breiten-Grenze, jenseits derer Web Mercator nicht definiert ist.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Geografische Koordinate in WGS84-Grad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Baut eine Koordinate nur aus einem vollstaendigen, endlichen Paar.
    pub fn from_parts(lat: Option<f64>, lon: Option<f64>) -> Option<Self> {
        match (lat, lon) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some(Self::new(lat, lon))
            }
            _ => None,
        }
    }

    /// Position in projizierten Metern.
    pub fn projected(&self) -> DVec2 {
        lon_lat_to_meters(self.lon, self.lat)
    }
}

/// Projiziert Laenge/Breite (Grad) auf Meter.
pub fn lon_lat_to_meters(lon: f64, lat: f64) -> DVec2 {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = EARTH_RADIUS_M * lon.to_radians();
    let y = EARTH_RADIUS_M * (std::f64::consts::FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
    DVec2::new(x, y)
}

/// Rueckprojektion Meter → (Laenge, Breite) in Grad.
pub fn meters_to_lon_lat(meters: DVec2) -> (f64, f64) {
    let lon = (meters.x / EARTH_RADIUS_M).to_degrees();
    let lat = (2.0 * (meters.y / EARTH_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2)
        .to_degrees();
    (lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn origin_maps_to_zero() {
        let p = lon_lat_to_meters(0.0, 0.0);
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn antimeridian_maps_to_half_circumference() {
        let p = lon_lat_to_meters(180.0, 0.0);
        assert_relative_eq!(p.x, 20_037_508.342_789_244, epsilon = 1e-6);
    }

    #[test]
    fn roundtrip_keeps_coordinates() {
        let p = lon_lat_to_meters(32.8597, 39.9334);
        let (lon, lat) = meters_to_lon_lat(p);
        assert_relative_eq!(lon, 32.8597, epsilon = 1e-9);
        assert_relative_eq!(lat, 39.9334, epsilon = 1e-9);
    }
}
