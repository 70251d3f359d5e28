//! Karten-Kamera (Web Mercator, Zoomstufen) und animiertes Zentrieren.

use glam::DVec2;

/// Aufloesung bei Zoomstufe 0 in Metern pro Pixel (256er Kacheln).
pub const BASE_RESOLUTION: f64 = 156_543.033_928_040_97;

/// 2D-Kamera mit Mittelpunkt in projizierten Metern und Zoomstufe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCamera {
    /// Bildmitte in projizierten Metern
    pub center: DVec2,
    /// Zoomstufe (0 = ganze Welt, 19 = Gebaeudeebene)
    pub zoom: f64,
}

impl MapCamera {
    /// Minimale Zoomstufe.
    pub const ZOOM_MIN: f64 = 2.0;
    /// Maximale Zoomstufe.
    pub const ZOOM_MAX: f64 = 21.0;

    pub fn new(center: DVec2, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Meter pro Pixel bei aktueller Zoomstufe.
    pub fn resolution(&self) -> f64 {
        BASE_RESOLUTION / 2f64.powf(self.zoom)
    }

    /// Verschiebt die Kamera um ein Pixel-Delta (Bildschirm-Y zeigt nach unten).
    pub fn pan_pixels(&mut self, delta_px: DVec2) {
        let res = self.resolution();
        self.center += DVec2::new(-delta_px.x * res, delta_px.y * res);
    }

    /// Aendert die Zoomstufe um `delta`, der Weltpunkt unter `focus_px` bleibt stehen.
    pub fn zoom_around(&mut self, delta: f64, focus_px: DVec2, viewport: DVec2) {
        let focus_world = self.pixel_to_world(focus_px, viewport);
        self.zoom = (self.zoom + delta).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        let after = self.pixel_to_world(focus_px, viewport);
        self.center += focus_world - after;
    }

    /// Pixel (Ursprung oben links) → projizierte Meter.
    pub fn pixel_to_world(&self, pixel: DVec2, viewport: DVec2) -> DVec2 {
        let res = self.resolution();
        let offset = pixel - viewport * 0.5;
        self.center + DVec2::new(offset.x * res, -offset.y * res)
    }

    /// Projizierte Meter → Pixel (Ursprung oben links).
    pub fn world_to_pixel(&self, world: DVec2, viewport: DVec2) -> DVec2 {
        let res = self.resolution();
        let offset = world - self.center;
        viewport * 0.5 + DVec2::new(offset.x / res, -offset.y / res)
    }
}

/// Laufende Kamerafahrt zu einem Ziel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewAnimation {
    from: MapCamera,
    to: MapCamera,
    duration_s: f64,
    elapsed_s: f64,
}

impl ViewAnimation {
    pub fn new(from: MapCamera, to: MapCamera, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_s: f64::from(duration_ms) / 1000.0,
            elapsed_s: 0.0,
        }
    }

    /// Zielkamera der Fahrt.
    pub fn target(&self) -> MapCamera {
        self.to
    }

    /// `true`, wenn die Fahrt abgeschlossen ist.
    pub fn is_finished(&self) -> bool {
        self.elapsed_s >= self.duration_s
    }

    /// Schreitet um `dt` Sekunden fort und liefert die Zwischenkamera.
    pub fn advance(&mut self, dt: f64) -> MapCamera {
        self.elapsed_s = (self.elapsed_s + dt.max(0.0)).min(self.duration_s);
        if self.duration_s <= 0.0 {
            return self.to;
        }
        let t = ease_in_out(self.elapsed_s / self.duration_s);
        MapCamera {
            center: self.from.center.lerp(self.to.center, t),
            zoom: self.from.zoom + (self.to.zoom - self.from.zoom) * t,
        }
    }
}

fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: DVec2 = DVec2::new(800.0, 600.0);

    #[test]
    fn pixel_world_roundtrip() {
        let camera = MapCamera::new(DVec2::new(1000.0, -500.0), 16.0);
        let pixel = DVec2::new(123.0, 456.0);
        let back = camera.world_to_pixel(camera.pixel_to_world(pixel, VIEWPORT), VIEWPORT);
        assert_relative_eq!(back.x, pixel.x, epsilon = 1e-6);
        assert_relative_eq!(back.y, pixel.y, epsilon = 1e-6);
    }

    #[test]
    fn viewport_center_is_camera_center() {
        let camera = MapCamera::new(DVec2::new(42.0, 7.0), 10.0);
        let world = camera.pixel_to_world(VIEWPORT * 0.5, VIEWPORT);
        assert_relative_eq!(world.x, 42.0);
        assert_relative_eq!(world.y, 7.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let camera = MapCamera::new(DVec2::ZERO, 40.0);
        assert_relative_eq!(camera.zoom, MapCamera::ZOOM_MAX);
    }

    #[test]
    fn zoom_around_keeps_focus_point() {
        let mut camera = MapCamera::new(DVec2::ZERO, 15.0);
        let focus = DVec2::new(100.0, 100.0);
        let before = camera.pixel_to_world(focus, VIEWPORT);
        camera.zoom_around(1.0, focus, VIEWPORT);
        let after = camera.pixel_to_world(focus, VIEWPORT);
        assert_relative_eq!(before.x, after.x, epsilon = 1e-6);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-6);
    }

    #[test]
    fn animation_reaches_target_after_duration() {
        let from = MapCamera::new(DVec2::ZERO, 15.0);
        let to = MapCamera::new(DVec2::new(100.0, 200.0), 19.0);
        let mut animation = ViewAnimation::new(from, to, 500);

        let mid = animation.advance(0.25);
        assert!(!animation.is_finished());
        assert_relative_eq!(mid.center.x, 50.0, epsilon = 1e-9);

        let end = animation.advance(1.0);
        assert!(animation.is_finished());
        assert_eq!(end, to);
    }
}
