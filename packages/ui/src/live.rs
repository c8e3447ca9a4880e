//! Live refresh without a realtime channel: each screen polls its
//! collection's revision counter and reloads when it moves. A
//! [`liststate::ReloadGate`] coalesces the reloads so a burst of remote
//! writes triggers one fetch, not one per write.

use dioxus::prelude::*;
use liststate::{ReloadGate, Trigger};

const POLL_INTERVAL_SECS: u64 = 5;

/// Milliseconds since an arbitrary epoch, monotonic enough for gating.
pub fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

async fn sleep_secs(secs: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
}

/// Watch a collection's revision counter and call `on_change` when it moves.
///
/// The returned signal also exposes the gate so callers can route their own
/// direct reloads (after a local mutation) through the same coalescing
/// window.
pub fn use_collection_watch(
    collection: &'static str,
    on_change: EventHandler<()>,
) -> Signal<ReloadGate> {
    let gate = use_signal(ReloadGate::default);

    use_effect(move || {
        let mut gate = gate;
        spawn(async move {
            let mut last_seen: Option<i64> = None;
            loop {
                sleep_secs(POLL_INTERVAL_SECS).await;

                let revision = match api::collection_revision(collection.to_string()).await {
                    Ok(rev) => rev,
                    Err(e) => {
                        tracing::debug!(collection, "revision poll failed: {e}");
                        continue;
                    }
                };

                match last_seen {
                    None => last_seen = Some(revision),
                    Some(seen) if revision != seen => {
                        last_seen = Some(revision);
                        if gate.write().begin(now_millis(), Trigger::Notification) {
                            on_change.call(());
                            // The handler runs detached; closing the window
                            // here still swallows the echo of our own write.
                            gate.write().finish(now_millis());
                        }
                    }
                    Some(_) => {}
                }
            }
        });
    });

    gate
}
