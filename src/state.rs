use crate::middleware::RateLimiter;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    /// Artificial pause between validation and insight delivery, so the
    /// page's "analyzing" indicator is visible. Zero in tests.
    pub processing_delay: Duration,
    pub limiter: RateLimiter,
}

pub type SharedState = Arc<AppState>;
