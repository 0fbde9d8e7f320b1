//! Platform adapters behind the [`Platform`] trait.
//!
//! Keep OS quirks here to avoid leaking them into the application's core
//! logic. One adapter per operating system; [`generic`] covers everything
//! without a dedicated one.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::dialog::{DialogKind, DialogResult};
use crate::timestamp::Timestamp;

#[cfg(target_os = "linux")]
pub mod linux;

pub mod generic;

/// Directory name used when no per-user data directory can be resolved.
pub(crate) const DEFAULT_SAVE_DIR: &str = "saves";

/// Identity of the running application, used to derive per-user paths.
#[derive(Debug, Clone)]
pub struct AppId {
    /// Reverse-domain qualifier, e.g. `"com"`.
    pub qualifier: &'static str,
    /// Organization segment, e.g. `"epsitec"`.
    pub organization: &'static str,
    /// Application name; the save directory's final path segment derives
    /// from it.
    pub name: &'static str,
}

impl AppId {
    pub const fn new(
        qualifier: &'static str,
        organization: &'static str,
        name: &'static str,
    ) -> Self {
        Self { qualifier, organization, name }
    }

    /// Directory component derived from the application name.
    #[cfg(target_os = "linux")]
    pub(crate) fn dir_name(&self) -> String {
        self.name.to_ascii_lowercase()
    }
}

/// Desktop facilities the application needs from its host system.
///
/// Every operation resolves synchronously and absorbs its own failures;
/// callers never see an error, only a fallback answer and a log entry.
pub trait Platform: Send + Sync {
    /// Shows a modal dialog and blocks until the user answers it.
    fn dialog(&self, kind: DialogKind, title: &str, message: &str) -> DialogResult;

    /// Captures the current instant of the monotonic clock.
    fn now(&self) -> Timestamp;

    /// Resolves the directory where the application keeps saved data.
    fn save_dir(&self) -> PathBuf;

    /// Opens `path` with the desktop's associated application.
    ///
    /// Returns whether the launcher reported success.
    fn open_path(&self, path: &Path) -> bool;

    /// Opens `url` in the desktop's preferred browser.
    ///
    /// Returns whether the launcher reported success.
    fn open_website(&self, url: &str) -> bool;

    /// Reads an environment variable, or an empty string when it is unset
    /// or not valid Unicode.
    fn env_var(&self, name: &str) -> String {
        match std::env::var(name) {
            Ok(value) => {
                tracing::trace!("Environment variable {}={}", name, value);
                value
            }
            Err(_) => String::new(),
        }
    }

    /// Suspends the calling thread for at least `usec` microseconds.
    fn sleep_us(&self, usec: u64) {
        std::thread::sleep(Duration::from_micros(usec));
    }
}

/// The adapter this build targets.
#[cfg(target_os = "linux")]
pub type NativePlatform = linux::LinuxPlatform;

/// The adapter this build targets.
#[cfg(not(target_os = "linux"))]
pub type NativePlatform = generic::GenericPlatform;

/// Builds the adapter for the current operating system.
pub fn native(app: AppId) -> NativePlatform {
    NativePlatform::new(app)
}
