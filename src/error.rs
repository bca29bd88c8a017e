//! Crate-level error taxonomy and process exit codes.
//!
//! Every failure is returned to the direct caller with context attached at
//! construction; nothing in the core recovers or retries.  `main` prints
//! the error and maps its category to a shell-style exit code.

use crate::slot::{DecodeError, RangeError};
use crate::traits::ExternalError;

/// Successful execution.
pub const EXIT_SUCCESS: i32 = 0;
/// General failure.
pub const EXIT_FAILURE: i32 = 1;
/// Invalid command-line input (also clap's own error code).
pub const EXIT_USAGE: i32 = 2;
/// A compositor call missed its deadline (like GNU timeout).
pub const EXIT_TIMEOUT: i32 = 124;
/// The compositor socket could not be found.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Any failure an action can surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No monitor is focused and none could be inferred.
    #[error("no focused monitor found")]
    NoFocusedMonitor,

    /// The compositor reported no active workspace.
    #[error("no active workspace found")]
    NoActiveWorkspace,

    /// The active workspace is missing from its own monitor's local list —
    /// the compositor's focus pointer and the workspace listing disagree.
    #[error("active workspace {name:?} (id {id}) is not in monitor {monitor_id}'s local list")]
    ActiveWorkspaceNotLocal {
        id: i32,
        name: String,
        monitor_id: i32,
    },

    /// A workspace name could not be decoded where the policy required it.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A monitor id fell outside the encodable range.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// A compositor query or dispatch failed.
    #[error(transparent)]
    External(#[from] ExternalError),

    /// A rename failed mid-compaction.  Slots renumbered before this point
    /// keep their new names; the numbering is non-contiguous but valid.
    #[error("compaction: rename {from:?} -> {to:?}: {source}")]
    Compaction {
        from: String,
        to: String,
        source: ExternalError,
    },
}

impl Error {
    /// Shell-style exit code for this error's category.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::External(e) | Error::Compaction { source: e, .. } => match e {
                ExternalError::NotFound(_) => EXIT_NOT_FOUND,
                ExternalError::Timeout(_) => EXIT_TIMEOUT,
                _ => EXIT_FAILURE,
            },
            _ => EXIT_FAILURE,
        }
    }
}

//  Tests
