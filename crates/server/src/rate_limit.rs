use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared_types::AppError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{Duration, Instant};

/// Login attempts allowed per client within [`LOGIN_WINDOW`].
pub const LOGIN_MAX_ATTEMPTS: u32 = 10;
pub const LOGIN_WINDOW: Duration = Duration::from_secs(60);

/// Sliding window rate limit state shared across requests.
#[derive(Clone)]
pub struct RateLimitState {
    inner: Arc<Mutex<RateLimitInner>>,
}

struct RateLimitInner {
    /// Map from client key -> list of request timestamps.
    requests: HashMap<String, Vec<Instant>>,
    max_requests: u32,
    window: Duration,
}

impl RateLimitState {
    /// Create rate limiter allowing `max_requests` per `window`.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RateLimitInner {
                requests: HashMap::new(),
                max_requests,
                window,
            })),
        }
    }

    /// Limiter with the login defaults.
    pub fn for_login() -> Self {
        Self::new(LOGIN_MAX_ATTEMPTS, LOGIN_WINDOW)
    }

    /// Record a request from `key`. Returns false when the key is over its
    /// budget; rejected requests do not consume budget.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Rate limit lock poisoned; recovering state");
            poisoned.into_inner()
        });
        let window = inner.window;
        let max = inner.max_requests;

        // Drop clients whose whole window has lapsed.
        inner.requests.retain(|_, timestamps| {
            timestamps.retain(|t| now.saturating_duration_since(*t) < window);
            !timestamps.is_empty()
        });

        let timestamps = inner.requests.entry(key.to_string()).or_default();
        if timestamps.len() as u32 >= max {
            return false;
        }

        timestamps.push(now);
        true
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.inner.lock().map(|inner| inner.requests.len()).unwrap_or_default()
    }
}

/// Limiter shared by the login server function.
pub fn login_limiter() -> &'static RateLimitState {
    static LIMITER: OnceLock<RateLimitState> = OnceLock::new();
    LIMITER.get_or_init(RateLimitState::for_login)
}

/// Client key: the first `x-forwarded-for` hop, or `anonymous`.
pub fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("anonymous")
        .to_string()
}

pub fn rate_limited() -> AppError {
    AppError::rate_limited("Too many login attempts. Please try again later.")
}

/// Axum middleware that enforces the login rate limit per client.
pub async fn rate_limit_middleware(
    axum::extract::State(state): axum::extract::State<RateLimitState>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(request.headers());

    if !state.check(&key) {
        tracing::warn!(client = %key, "Login rate limit exceeded");
        return rate_limited().into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn allows_up_to_limit_then_rejects() {
        let state = RateLimitState::new(3, Duration::from_secs(60));
        assert!(state.check("a"));
        assert!(state.check("a"));
        assert!(state.check("a"));
        assert!(!state.check("a"));
        assert!(state.check("b"));
    }

    #[test]
    fn window_slides() {
        let state = RateLimitState::new(1, Duration::from_secs(60));
        let start = Instant::now();
        assert!(state.check_at("a", start));
        assert!(!state.check_at("a", start + Duration::from_secs(30)));
        assert!(state.check_at("a", start + Duration::from_secs(61)));
    }

    #[test]
    fn expired_clients_are_forgotten() {
        let state = RateLimitState::new(2, Duration::from_secs(60));
        let start = Instant::now();
        for key in ["10.0.0.1", "10.0.0.2", "10.0.0.3"] {
            assert!(state.check_at(key, start));
        }
        assert_eq!(state.tracked_clients(), 3);

        assert!(state.check_at("10.0.0.9", start + Duration::from_secs(61)));
        assert_eq!(state.tracked_clients(), 1);
    }

    #[test]
    fn poisoned_lock_keeps_limiting() {
        let state = RateLimitState::new(1, Duration::from_secs(60));
        assert!(state.check("a"));
        let inner = state.inner.clone();
        let _ = std::thread::spawn(move || {
            let _guard = inner.lock().unwrap();
            panic!("poison the limiter");
        })
        .join();
        assert!(state.inner.is_poisoned());
        assert!(!state.check("a"));
    }

    #[test]
    fn client_key_uses_first_forwarded_hop() {
        let mut headers = HeaderMap::new();
        assert_eq!(client_key(&headers), "anonymous");
        headers.insert("x-forwarded-for", HeaderValue::from_static(" 10.0.0.7 , 172.16.0.1"));
        assert_eq!(client_key(&headers), "10.0.0.7");
    }
}
