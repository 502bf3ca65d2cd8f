use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

const WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug)]
struct Counter {
    window_start: Instant,
    served: u32,
}

/// Fixed-window request budget shared by one route group.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    budget: u32,
    counter: Arc<Mutex<Counter>>,
}

impl RateLimiter {
    fn new(budget: u32) -> Self {
        Self {
            budget: budget.max(1),
            counter: Arc::new(Mutex::new(Counter {
                window_start: Instant::now(),
                served: 0,
            })),
        }
    }

    fn try_acquire(&self) -> bool {
        let mut counter = self.counter.lock().expect("rate limiter mutex poisoned");
        let now = Instant::now();
        if now.duration_since(counter.window_start) >= WINDOW {
            counter.window_start = now;
            counter.served = 0;
        }
        if counter.served < self.budget {
            counter.served += 1;
            true
        } else {
            false
        }
    }
}

pub async fn rps_middleware(
    State(limiter): State<RateLimiter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !limiter.try_acquire() {
        let body = Json(json!({ "error": "rate limit exceeded" }));
        return (StatusCode::TOO_MANY_REQUESTS, body).into_response();
    }
    next.run(req).await
}

pub fn new_rps_state(rps: u32) -> RateLimiter {
    RateLimiter::new(rps)
}
