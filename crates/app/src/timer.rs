use std::time::Duration;

/// Suspend the calling task for `ms` milliseconds.
///
/// The browser build waits on a `setTimeout` future; native builds use the
/// tokio timer the desktop and mobile renderers already run on.
pub async fn sleep_ms(ms: u64) {
    let delay = Duration::from_millis(ms);
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(delay).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(delay).await;
}
