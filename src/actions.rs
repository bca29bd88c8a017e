//! The four user-facing actions: goto, move, cycle, init.
//!
//! All of them share one shape: take a snapshot → locate the focused
//! monitor → sort its local list → locate the current index → resolve the
//! target → act → optionally compact.  [`Actions`] is constructed once per
//! invocation and holds the two injected capability ports; there is no
//! process-wide state.
//!
//! Compaction placement differs per action.  Switches compact *before*
//! dispatching, so the canonical target name is guaranteed to be correct
//! even for a slot that does not exist yet.  Moves compact *after*
//! dispatching, because the source's vacancy only becomes observable once
//! the window is gone — the compactor's internal re-fetch provides that
//! post-move view.

use crate::compact::compact;
use crate::error::Error;
use crate::ordering::{position_of, sorted_local};
use crate::resolve::{resolve, Resolution};
use crate::slot::encode;
use crate::snapshot::{FetchMask, Monitor, Snapshot, Workspace};
use crate::traits::{Dispatch, Query};
use log::{debug, info, warn};
use std::fmt;

/// Direction for [`Actions::cycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Next,
    Prev,
}

impl CycleDirection {
    fn step(self) -> i64 {
        match self {
            CycleDirection::Next => 1,
            CycleDirection::Prev => -1,
        }
    }
}

impl fmt::Display for CycleDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleDirection::Next => write!(f, "next"),
            CycleDirection::Prev => write!(f, "prev"),
        }
    }
}

/// Where the user currently is: focused monitor, its sorted local list,
/// and the active workspace's position within it.
struct Located {
    monitor: Monitor,
    locals: Vec<Workspace>,
    current: usize,
}

/// Per-invocation action runner over the two capability ports.
pub struct Actions<'a, Q: Query, D: Dispatch> {
    query: &'a Q,
    dispatch: &'a D,
}

impl<'a, Q: Query, D: Dispatch> Actions<'a, Q, D> {
    pub fn new(query: &'a Q, dispatch: &'a D) -> Self {
        Self { query, dispatch }
    }

    /// Focus the 1-based local `slot` on the focused monitor.
    pub fn goto(&self, slot: u8, compact_enabled: bool) -> Result<(), Error> {
        let snapshot = Snapshot::take(self.query, FetchMask::GOTO)?;
        let located = self.locate(&snapshot)?;
        self.switch(&located, i64::from(slot) - 1, compact_enabled)
    }

    /// Focus the local slot adjacent to the current one.
    pub fn cycle(&self, direction: CycleDirection, compact_enabled: bool) -> Result<(), Error> {
        let snapshot = Snapshot::take(self.query, FetchMask::CYCLE)?;
        let located = self.locate(&snapshot)?;
        let requested = located.current as i64 + direction.step();
        debug!("cycle {} from local index {}", direction, located.current);
        self.switch(&located, requested, compact_enabled)
    }

    /// Move the focused window (or, with `move_all`, every window on the
    /// current workspace) to the 1-based local `slot`.
    pub fn move_to(&self, slot: u8, move_all: bool, compact_enabled: bool) -> Result<(), Error> {
        let snapshot = Snapshot::take(self.query, FetchMask::MOVE)?;
        let located = self.locate(&snapshot)?;
        let source = snapshot
            .active_workspace
            .as_ref()
            .ok_or(Error::NoActiveWorkspace)?;

        let resolution = resolve(Some(located.current), i64::from(slot) - 1, &located.locals);
        if resolution.target == located.current {
            debug!("move target equals current slot, nothing to do");
            return Ok(());
        }

        let target_name = self.target_name(&located, resolution, compact_enabled)?;

        if move_all && source.windows > 1 {
            let clients = snapshot.clients_on(source.id);
            info!(
                "moving {} window(s) from {:?} to slot {}",
                clients.len(),
                source.name,
                resolution.target + 1
            );
            for client in clients {
                self.dispatch.move_to_workspace(&target_name, &client.address)?;
            }
        } else {
            let Some(window) = snapshot.active_window.as_ref() else {
                debug!("no active window, nothing to move");
                return Ok(());
            };
            info!("moving window {} to slot {}", window.address, resolution.target + 1);
            self.dispatch.move_to_workspace(&target_name, &window.address)?;
        }

        // The source is only observably empty after the move; the compactor
        // re-fetches the workspace list itself.
        if compact_enabled && (move_all || source.windows == 1) {
            compact(self.query, self.dispatch, located.monitor.id, false)?;
        }

        Ok(())
    }

    /// Force every monitor's local workspaces into the canonical contiguous
    /// numbering, absorbing arbitrary pre-existing names, then restore the
    /// monitor focus.  The only action that repairs foreign names.
    pub fn init(&self) -> Result<(), Error> {
        let monitors = self.query.monitors()?;
        let Some(first) = monitors.first() else {
            debug!("no monitors, nothing to initialize");
            return Ok(());
        };

        let focused = monitors.iter().find(|m| m.focused).unwrap_or(first).id;

        for monitor in &monitors {
            compact(self.query, self.dispatch, monitor.id, true)?;
        }

        self.dispatch.focus_monitor(focused)?;
        Ok(())
    }

    //  Shared steps

    fn locate(&self, snapshot: &Snapshot) -> Result<Located, Error> {
        let monitor = snapshot
            .focused_monitor()
            .ok_or(Error::NoFocusedMonitor)?
            .clone();
        let active = snapshot
            .active_workspace
            .as_ref()
            .ok_or(Error::NoActiveWorkspace)?;

        let locals = sorted_local(&snapshot.workspaces, monitor.id);
        let current = position_of(&locals, active.id).ok_or_else(|| {
            Error::ActiveWorkspaceNotLocal {
                id: active.id,
                name: active.name.clone(),
                monitor_id: monitor.id,
            }
        })?;

        Ok(Located {
            monitor,
            locals,
            current,
        })
    }

    /// Resolve and dispatch a workspace switch (goto and cycle).
    fn switch(&self, located: &Located, requested: i64, compact_enabled: bool) -> Result<(), Error> {
        let resolution = resolve(Some(located.current), requested, &located.locals);
        if resolution.target == located.current {
            debug!("already on slot {}, nothing to do", located.current + 1);
            return Ok(());
        }

        if compact_enabled {
            compact(self.query, self.dispatch, located.monitor.id, false)?;
        }

        let name = self.target_name(located, resolution, compact_enabled)?;
        info!(
            "switch monitor {} to slot {}",
            located.monitor.id,
            resolution.target + 1
        );
        self.dispatch.focus_workspace(&name)?;
        Ok(())
    }

    /// The workspace name to dispatch against.
    ///
    /// With compaction the canonical name is correct by construction.
    /// Without it, reuse the existing name at the target (the compositor's
    /// switch-to-or-create semantics), encoding only for the synthetic
    /// new-slot index.
    fn target_name(
        &self,
        located: &Located,
        resolution: Resolution,
        compact_enabled: bool,
    ) -> Result<String, Error> {
        if compact_enabled {
            return Ok(encode(located.monitor.id, resolution.target)?);
        }

        if resolution.must_compact {
            warn!("an empty slot is being left behind (compaction disabled)");
        }
        match located.locals.get(resolution.target) {
            Some(workspace) => Ok(workspace.name.clone()),
            None => Ok(encode(located.monitor.id, resolution.target)?),
        }
    }
}

//  Tests
