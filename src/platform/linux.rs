//! Linux adapter: zenity dialogs, XDG save paths, `xdg-open` launches.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use nix::time::ClockId;

use crate::dialog::{console_dialog, DialogKind, DialogResult};
use crate::error::ShellError;
use crate::timestamp::Timestamp;

use super::{AppId, Platform, DEFAULT_SAVE_DIR};

const ZENITY: &str = "zenity";
const OPENER: &str = "xdg-open";

/// Adapter for Linux desktops.
///
/// Dialogs go through `zenity` when the construction-time probe found it,
/// otherwise through the text console. The probe result is fixed for the
/// adapter's lifetime.
pub struct LinuxPlatform {
    app: AppId,
    zenity_available: bool,
}

impl LinuxPlatform {
    pub fn new(app: AppId) -> Self {
        let zenity_available = probe(ZENITY);
        if !zenity_available {
            tracing::warn!("zenity not found, will fallback to console-based dialogs");
        }
        Self { app, zenity_available }
    }

    /// Shows a zenity dialog and maps its exit status to an answer.
    fn zenity_dialog(
        &self,
        kind: DialogKind,
        title: &str,
        message: &str,
    ) -> Result<DialogResult, ShellError> {
        let mut command = Command::new(ZENITY);
        command
            .args(zenity_flags(kind))
            .arg("--title")
            .arg(title)
            .arg("--text")
            .arg(message);
        let status = run(ZENITY, &mut command)?;
        Ok(map_exit(kind, status.success()))
    }

    /// XDG lookup for the per-user save location.
    fn user_save_dir(&self) -> PathBuf {
        let data_home = self.env_var("XDG_DATA_HOME");
        if !data_home.is_empty() {
            return Path::new(&data_home).join(self.app.dir_name());
        }
        let home = self.env_var("HOME");
        if !home.is_empty() {
            return Path::new(&home).join(".local/share").join(self.app.dir_name());
        }
        tracing::warn!("Unable to find directory for saves, will use the working directory");
        PathBuf::from(DEFAULT_SAVE_DIR)
    }
}

impl Platform for LinuxPlatform {
    fn dialog(&self, kind: DialogKind, title: &str, message: &str) -> DialogResult {
        if self.zenity_available {
            match self.zenity_dialog(kind, title, message) {
                Ok(result) => return result,
                Err(e) => {
                    tracing::warn!("Dialog tool failed ({}), falling back to the console", e);
                }
            }
        }
        console_dialog(kind, title, message)
    }

    fn now(&self) -> Timestamp {
        // MONOTONIC_RAW has been part of the kernel ABI since 2.6.28.
        let ts = nix::time::clock_gettime(ClockId::CLOCK_MONOTONIC_RAW)
            .expect("clock_gettime(CLOCK_MONOTONIC_RAW) failed. This should not happen.");
        Timestamp::new(ts.tv_sec() as i64, ts.tv_nsec() as i64)
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
        match run_checked(OPENER, Command::new(OPENER).arg(path)) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to open path {}: {}", path.display(), e);
                false
            }
        }
    }

    fn open_website(&self, url: &str) -> bool {
        match run_checked(OPENER, Command::new(OPENER).arg(url)) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to open website {}: {}", url, e);
                false
            }
        }
    }
}

/// Checks whether `program` answers `--version` with a success exit.
fn probe(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// zenity arguments selecting the dialog flavor and its button labels.
fn zenity_flags(kind: DialogKind) -> &'static [&'static str] {
    match kind {
        DialogKind::Info => &["--info"],
        DialogKind::Warning => &["--warning"],
        DialogKind::Error => &["--error"],
        DialogKind::YesNo => &["--question", "--ok-label=Yes", "--cancel-label=No"],
        DialogKind::OkCancel => &["--question", "--ok-label=OK", "--cancel-label=Cancel"],
    }
}

/// Maps a dialog tool's exit to the answer it stands for. Message dialogs
/// resolve to `Ok` no matter how the window was closed.
fn map_exit(kind: DialogKind, success: bool) -> DialogResult {
    match kind {
        DialogKind::YesNo => {
            if success {
                DialogResult::Yes
            } else {
                DialogResult::No
            }
        }
        DialogKind::OkCancel => {
            if success {
                DialogResult::Ok
            } else {
                DialogResult::Cancel
            }
        }
        _ => DialogResult::Ok,
    }
}

/// Runs `command` to completion, tagging launch failures with `tool`.
fn run(tool: &'static str, command: &mut Command) -> Result<ExitStatus, ShellError> {
    command
        .status()
        .map_err(|source| ShellError::Spawn { tool, source })
}

/// Like [`run`], but a nonzero exit status is an error too.
fn run_checked(tool: &'static str, command: &mut Command) -> Result<(), ShellError> {
    let status = run(tool, command)?;
    if status.success() {
        Ok(())
    } else {
        Err(ShellError::Failed { tool, status })
    }
}
