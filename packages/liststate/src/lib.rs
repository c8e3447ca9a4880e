//! # liststate — snapshot list state for remote-owned collections
//!
//! Every list screen in Flock holds a disposable local snapshot of a remote
//! collection and reconciles it by full reload after each mutation or change
//! notification. This crate is that pattern, extracted:
//!
//! - [`SnapshotList`] — the ordered local copy plus the single-slot
//!   "pending delete confirmation" marker that drives the two-step
//!   destructive-action flow.
//! - [`ReloadGate`] — coalesces redundant reloads, so a client's own write
//!   echoing back through the change-notification channel does not trigger a
//!   second fetch right after the explicit post-write one.
//!
//! The crate is framework-free: time enters as millisecond ticks supplied by
//! the caller, and nothing here performs I/O. The screens wire these types to
//! server calls and signals.

mod reload;
mod snapshot;

pub use reload::{ReloadGate, Trigger};
pub use snapshot::{HasId, SnapshotList};
