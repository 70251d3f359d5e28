use crate::core::LatLon;

/// Kamera-Anforderung an den Render-Adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewRequest {
    /// Animiert auf eine Koordinate bei fester Zoomstufe
    AnimateTo {
        center: LatLon,
        zoom: f64,
        duration_ms: u32,
    },
}

/// View-bezogener Anwendungszustand.
///
/// Die Kamera selbst gehoert dem Render-Adapter; die App haelt nur die
/// noch nicht abgeholte Anforderung.
#[derive(Debug, Default)]
pub struct ViewState {
    pending_request: Option<ViewRequest>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt eine Anforderung. Eine noch offene wird ersetzt.
    pub fn request(&mut self, request: ViewRequest) {
        self.pending_request = Some(request);
    }

    /// Offene Anforderung ohne sie abzuholen.
    pub fn pending(&self) -> Option<&ViewRequest> {
        self.pending_request.as_ref()
    }

    /// Holt die offene Anforderung ab.
    pub fn take_request(&mut self) -> Option<ViewRequest> {
        self.pending_request.take()
    }
}
