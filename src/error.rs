//! Defines the error type for launching desktop helper programs.

use std::process::ExitStatus;
use thiserror::Error;

/// Failure modes of the helper programs the Linux adapter shells out to.
///
/// These never cross the crate boundary; callers see a fallback result or
/// a boolean while the error itself goes to the log.
#[derive(Debug, Error)]
pub(crate) enum ShellError {
    /// The helper program could not be started or waited on.
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The helper program ran but reported failure.
    #[error("{tool} exited with {status}")]
    Failed {
        tool: &'static str,
        status: ExitStatus,
    },
}
