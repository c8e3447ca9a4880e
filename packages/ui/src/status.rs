//! Transient inline status messages. Every screen surfaces mutation results
//! the same way: a banner that clears itself after three seconds.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleCheck, FaCircleExclamation};
use dioxus_free_icons::Icon;

const DISMISS_AFTER_SECS: u64 = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

/// Handle for showing a transient status message.
#[derive(Clone, Copy)]
pub struct StatusHandle {
    current: Signal<Option<Status>>,
    epoch: Signal<u64>,
}

impl StatusHandle {
    pub fn current(&self) -> Option<Status> {
        (self.current)()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(StatusKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(StatusKind::Error, message.into());
    }

    fn show(&mut self, kind: StatusKind, message: String) {
        let mut current = self.current;
        let mut epoch = self.epoch;
        let token = epoch() + 1;
        epoch.set(token);
        current.set(Some(Status { kind, message }));

        // A newer message bumps the epoch and the stale timer backs off.
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;

            if epoch() == token {
                current.set(None);
            }
        });
    }
}

/// Per-screen status slot with auto-dismissal.
pub fn use_status() -> StatusHandle {
    let current = use_signal(|| Option::<Status>::None);
    let epoch = use_signal(|| 0u64);
    StatusHandle { current, epoch }
}

/// Renders the current status message, or nothing.
#[component]
pub fn StatusBanner(status: Option<Status>) -> Element {
    match status {
        Some(Status {
            kind: StatusKind::Success,
            message,
        }) => rsx! {
            div { class: "status status-success",
                Icon { icon: FaCircleCheck, width: 14, height: 14 }
                span { "{message}" }
            }
        },
        Some(Status {
            kind: StatusKind::Error,
            message,
        }) => rsx! {
            div { class: "status status-error",
                Icon { icon: FaCircleExclamation, width: 14, height: 14 }
                span { "{message}" }
            }
        },
        None => rsx! {},
    }
}
