//! Desktop system facilities behind one small interface.
//!
//! The [`Platform`] trait bundles the handful of things a desktop
//! application needs from its host: modal dialogs, a monotonic clock,
//! a per-user save directory, environment lookups, and handing paths or
//! URLs to the desktop shell. [`native`] picks the adapter for the build
//! target. Nothing here returns an error; failures degrade to fallback
//! answers and log entries.

pub mod dialog;
pub mod platform;
pub mod timestamp;

#[cfg(target_os = "linux")]
mod error;

pub use dialog::{console_dialog, DialogKind, DialogResult};
pub use platform::{native, AppId, NativePlatform, Platform};
pub use timestamp::{TimeUnit, Timestamp};
