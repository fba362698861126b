//! In-memory fixed-window rate limiting for the anonymous insight endpoint.
use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

struct Window {
    started: Instant,
    count: u32,
}

#[derive(Clone)]
pub struct RateLimiter {
    windows: Arc<RwLock<HashMap<String, Window>>>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: Arc::new(RwLock::new(HashMap::new())),
            max_requests,
            window,
        }
    }

    /// Whether another request from `client` fits in its current window.
    /// Counting it is part of the check, so callers must not double-call.
    pub async fn allow(&self, client: &str) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.write().await;
        let entry = windows.entry(client.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(entry.started) >= self.window {
            entry.started = now;
            entry.count = 0;
        }

        if entry.count < self.max_requests {
            entry.count += 1;
            true
        } else {
            false
        }
    }

    /// Drop clients whose window has fully elapsed. Run periodically so the
    /// map does not grow with one-off visitors.
    pub async fn evict_stale(&self) {
        let now = Instant::now();
        let mut windows = self.windows.write().await;
        windows.retain(|_, entry| now.duration_since(entry.started) < self.window);
        tracing::debug!("rate limiter eviction done, {} active clients", windows.len());
    }
}

pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiter>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let client = addr.ip().to_string();

    if !limiter.allow(&client).await {
        tracing::warn!("Rate limit exceeded for {}", client);
        return (
            StatusCode::TOO_MANY_REQUESTS,
            "Too many requests. Please try again later.",
        )
            .into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blocks_after_limit_reached() {
        let limiter = RateLimiter::new(3, Duration::from_secs(60));

        assert!(limiter.allow("10.0.0.1").await);
        assert!(limiter.allow("10.0.0.1").await);
        assert!(limiter.allow("10.0.0.1").await);
        assert!(!limiter.allow("10.0.0.1").await);

        // Other clients have their own window
        assert!(limiter.allow("10.0.0.2").await);
    }

    #[tokio::test]
    async fn test_window_resets() {
        let limiter = RateLimiter::new(1, Duration::from_millis(50));

        assert!(limiter.allow("10.0.0.1").await);
        assert!(!limiter.allow("10.0.0.1").await);

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(limiter.allow("10.0.0.1").await);
    }

    #[tokio::test]
    async fn test_eviction_drops_stale_clients() {
        let limiter = RateLimiter::new(5, Duration::from_millis(50));

        limiter.allow("10.0.0.1").await;
        limiter.allow("10.0.0.2").await;

        tokio::time::sleep(Duration::from_millis(80)).await;
        limiter.evict_stale().await;

        let windows = limiter.windows.read().await;
        assert_eq!(windows.len(), 0);
    }
}
