//! Platform Helpers
//!
//! Small shims over browser APIs with native fallbacks so the headless core
//! also runs under `cargo test`.

use chrono::{Datelike, Local};
use std::time::Duration;

/// Wait for `duration` on the current task
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

/// Wait for `duration` on the current task
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Current calendar year in local time, for the page footer
pub fn current_year() -> i32 {
    Local::now().year()
}
