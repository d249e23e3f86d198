//! Periodic refresh for data pages.
//!
//! The loop lives as long as the view that started it: `on_cleanup` clears
//! the alive flag and the next wake-up exits. SSR renders never poll.

use std::time::Duration;

pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Run `tick` now, then every `POLL_INTERVAL` until the owning view unmounts.
#[cfg(feature = "hydrate")]
pub fn poll_every<F, Fut>(tick: F)
where
    F: Fn() -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    let alive = Arc::new(AtomicBool::new(true));
    let alive_task = alive.clone();
    leptos::task::spawn_local(async move {
        loop {
            tick().await;
            gloo_timers::future::sleep(POLL_INTERVAL).await;
            if !alive_task.load(Ordering::Relaxed) {
                break;
            }
        }
    });
    leptos::prelude::on_cleanup(move || alive.store(false, Ordering::Relaxed));
}

#[cfg(not(feature = "hydrate"))]
pub fn poll_every<F, Fut>(_tick: F)
where
    F: Fn() -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
}

/// Run `task` once in the browser.
#[cfg(feature = "hydrate")]
pub fn spawn_once<Fut>(task: Fut)
where
    Fut: std::future::Future<Output = ()> + 'static,
{
    leptos::task::spawn_local(task);
}

#[cfg(not(feature = "hydrate"))]
pub fn spawn_once<Fut>(_task: Fut)
where
    Fut: std::future::Future<Output = ()> + 'static,
{
}
