//! Fallback adapter for targets without a dedicated one.
//!
//! Dialogs stay on the text console, launches go through the `open` crate,
//! and the save directory follows the conventions of `directories`. The
//! monotonic clock is measured against a process-wide anchor taken on
//! first use.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Instant;

use directories::ProjectDirs;

use crate::dialog::{console_dialog, DialogKind, DialogResult};
use crate::timestamp::Timestamp;

use super::{AppId, Platform, DEFAULT_SAVE_DIR};

static CLOCK_ANCHOR: OnceLock<Instant> = OnceLock::new();

fn clock_anchor() -> Instant {
    *CLOCK_ANCHOR.get_or_init(Instant::now)
}

/// Adapter relying only on cross-platform facilities.
pub struct GenericPlatform {
    app: AppId,
}

impl GenericPlatform {
    pub fn new(app: AppId) -> Self {
        Self { app }
    }

    fn user_save_dir(&self) -> PathBuf {
        let dirs = ProjectDirs::from(self.app.qualifier, self.app.organization, self.app.name)
            .map(|proj_dirs| proj_dirs.data_dir().to_path_buf());
        match dirs {
            Some(dir) => dir,
            None => {
                tracing::warn!(
                    "Unable to find directory for saves, will use the working directory"
                );
                PathBuf::from(DEFAULT_SAVE_DIR)
            }
        }
    }
}

impl Platform for GenericPlatform {
    fn dialog(&self, kind: DialogKind, title: &str, message: &str) -> DialogResult {
        console_dialog(kind, title, message)
    }

    fn now(&self) -> Timestamp {
        let elapsed = clock_anchor().elapsed();
        Timestamp::new(elapsed.as_secs() as i64, i64::from(elapsed.subsec_nanos()))
    }

    fn save_dir(&self) -> PathBuf {
        let dir = if cfg!(feature = "portable-saves") {
            PathBuf::from(DEFAULT_SAVE_DIR)
        } else {
            self.user_save_dir()
        };
        tracing::trace!("Saved data goes to {}", dir.display());
        dir
    }

    fn open_path(&self, path: &Path) -> bool {
        match open::that(path) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to open path {}: {}", path.display(), e);
                false
            }
        }
    }

    fn open_website(&self, url: &str) -> bool {
        match open::that(url) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to open website {}: {}", url, e);
                false
            }
        }
    }
}
