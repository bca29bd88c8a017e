//! Point-in-time views of compositor state.
//!
//! Every action starts by taking a [`Snapshot`] — an immutable bundle of
//! whichever of {monitors, workspaces, clients, active workspace, active
//! window} it needs, selected by a [`FetchMask`].  Nothing here is cached
//! across invocations; a fresh snapshot is the only source of truth each
//! run, and the window between reading it and dispatching on it is an
//! accepted race.
//!
//! The DTOs double as the serde targets for Hyprland's `j/` JSON replies;
//! unknown fields are ignored so compositor upgrades do not break parsing.

use crate::traits::{ExternalError, Query};
use bitflags::bitflags;
use serde::Deserialize;

/// A monitor as reported by `j/monitors`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Monitor {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub focused: bool,
    #[serde(rename = "activeWorkspace")]
    pub active_workspace: WorkspaceRef,
}

/// A workspace as reported by `j/workspaces` / `j/activeworkspace`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Workspace {
    pub id: i32,
    pub name: String,
    /// Name of the owning monitor.
    pub monitor: String,
    #[serde(rename = "monitorID")]
    pub monitor_id: i32,
    /// Number of windows currently on the workspace.
    pub windows: u32,
}

/// A window as reported by `j/clients` / `j/activewindow`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Client {
    pub address: String,
    #[serde(default)]
    pub monitor: i32,
    pub workspace: WorkspaceRef,
}

/// The `{id, name}` workspace stub Hyprland embeds in other objects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkspaceRef {
    pub id: i32,
    pub name: String,
}

bitflags! {
    /// Which queries a [`Snapshot`] should perform.
    ///
    /// Actions declare exactly what they read so an invocation never pays
    /// for compositor round trips it does not use.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FetchMask: u8 {
        const MONITORS         = 1 << 0;
        const WORKSPACES       = 1 << 1;
        const CLIENTS          = 1 << 2;
        const ACTIVE_WORKSPACE = 1 << 3;
        const ACTIVE_WINDOW    = 1 << 4;
    }
}

impl FetchMask {
    /// For `goto <n>`.
    pub const GOTO: FetchMask = FetchMask::MONITORS
        .union(FetchMask::WORKSPACES)
        .union(FetchMask::ACTIVE_WORKSPACE);

    /// For `move <n> [--all]` — also needs the focused window and the
    /// client list for `--all`.
    pub const MOVE: FetchMask = FetchMask::GOTO
        .union(FetchMask::CLIENTS)
        .union(FetchMask::ACTIVE_WINDOW);

    /// For `cycle <next|prev>`.
    pub const CYCLE: FetchMask = FetchMask::GOTO;
}

/// An immutable bundle of compositor state, read once per action.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub monitors: Vec<Monitor>,
    pub workspaces: Vec<Workspace>,
    pub clients: Vec<Client>,
    pub active_workspace: Option<Workspace>,
    pub active_window: Option<Client>,
}

impl Snapshot {
    /// Perform the queries selected by `mask`, in a fixed order, aborting
    /// on the first failure.
    pub fn take<Q: Query>(query: &Q, mask: FetchMask) -> Result<Self, ExternalError> {
        let mut snapshot = Snapshot::default();

        if mask.contains(FetchMask::MONITORS) {
            snapshot.monitors = query.monitors()?;
        }
        if mask.contains(FetchMask::WORKSPACES) {
            snapshot.workspaces = query.workspaces()?;
        }
        if mask.contains(FetchMask::CLIENTS) {
            snapshot.clients = query.clients()?;
        }
        if mask.contains(FetchMask::ACTIVE_WORKSPACE) {
            snapshot.active_workspace = query.active_workspace()?;
        }
        if mask.contains(FetchMask::ACTIVE_WINDOW) {
            snapshot.active_window = query.active_window()?;
        }

        Ok(snapshot)
    }

    /// The monitor the user is working on.
    ///
    /// A single monitor is trivially focused.  Otherwise trust Hyprland's
    /// `focused` flag, and if that is stale, fall back to the monitor that
    /// hosts the active workspace.
    pub fn focused_monitor(&self) -> Option<&Monitor> {
        if self.monitors.len() == 1 {
            return self.monitors.first();
        }

        if let Some(monitor) = self.monitors.iter().find(|m| m.focused) {
            return Some(monitor);
        }

        let active = self.active_workspace.as_ref()?;
        self.monitors.iter().find(|m| m.name == active.monitor)
    }

    /// All clients sitting on the workspace with the given id.
    pub fn clients_on(&self, workspace_id: i32) -> Vec<&Client> {
        self.clients
            .iter()
            .filter(|c| c.workspace.id == workspace_id)
            .collect()
    }
}

//  Tests
