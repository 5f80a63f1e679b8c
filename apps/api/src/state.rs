use crate::horoscope::service::HoroscopeService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub horoscope: HoroscopeService,
}
