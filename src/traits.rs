//! Capability ports that decouple the navigation core from Hyprland.
//!
//! Every action is handed two capabilities: a [`Query`] port for read-only
//! snapshots of compositor state and a [`Dispatch`] port for the mutating
//! calls (switch, rename, move, focus).  The concrete implementation in
//! [`hyprland`](crate::hyprland) speaks the IPC socket; tests substitute
//! in-memory doubles.
//!
//! The split matters: the compactor and the navigation policy can be read
//! off their signatures — what they may observe and what they may change.

use crate::snapshot::{Client, Monitor, Workspace};

/// A collaborator call that failed.
///
/// The variants mirror the process exit codes the tool reports: a missing
/// compositor socket and a deadline overrun get their own categories, all
/// other failures are general.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExternalError {
    /// The compositor's socket (or the environment locating it) is absent.
    #[error("compositor not reachable: {0}")]
    NotFound(String),

    /// A read or write missed its deadline.
    #[error("compositor request timed out: {0}")]
    Timeout(String),

    /// Transport failure other than a timeout.
    #[error("compositor io error: {0}")]
    Io(String),

    /// The compositor answered with JSON this tool cannot interpret.
    #[error("compositor response unparseable: {0}")]
    Parse(String),

    /// A dispatch went through but the compositor rejected it.
    #[error("dispatch rejected: {0}")]
    Rejected(String),
}

/// Read-only snapshot queries against the compositor.
///
/// Each call is an independent, blocking request with its own deadline.
/// `active_workspace` / `active_window` return `None` when the compositor
/// reports nothing focused.
pub trait Query {
    fn monitors(&self) -> Result<Vec<Monitor>, ExternalError>;
    fn workspaces(&self) -> Result<Vec<Workspace>, ExternalError>;
    fn clients(&self) -> Result<Vec<Client>, ExternalError>;
    fn active_workspace(&self) -> Result<Option<Workspace>, ExternalError>;
    fn active_window(&self) -> Result<Option<Client>, ExternalError>;
}

/// Mutating dispatches against the compositor.
///
/// All four rely on the compositor's own semantics being atomic from this
/// tool's point of view; in particular `focus_workspace` switches to an
/// existing workspace of that name or creates one.
pub trait Dispatch {
    /// Switch the focused monitor to the workspace with the given name.
    fn focus_workspace(&self, name: &str) -> Result<(), ExternalError>;

    /// Rename the workspace with the given id.
    fn rename_workspace(&self, id: i32, new_name: &str) -> Result<(), ExternalError>;

    /// Focus the monitor with the given id.
    fn focus_monitor(&self, id: i32) -> Result<(), ExternalError>;

    /// Move the window at `address` to the workspace with the given name.
    fn move_to_workspace(&self, name: &str, address: &str) -> Result<(), ExternalError>;
}
