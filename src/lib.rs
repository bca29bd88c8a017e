//! **hyprlocal** — per-monitor local workspaces for Hyprland.
//!
//! Hyprland has one flat set of arbitrarily named workspaces shared across
//! all monitors.  hyprlocal layers a dense, per-monitor `1..N` numbering on
//! top of it: each monitor gets its own local slots, and an empty slot left
//! behind by navigation or a window move is closed by renumbering, so the
//! numbering never shows permanent gaps.
//!
//! The trick is in the names: [`slot`] multiplexes a monitor identity and
//! an ordinal into a single workspace name whose visible prefix is the
//! human-readable slot number and whose real identity hides in a suffix of
//! invisible characters.
//!
//! # Architecture
//!
//! The crate is organised around two capability ports:
//!
//! * [`traits::Query`] — read-only snapshots of compositor state.
//! * [`traits::Dispatch`] — the mutating calls (switch, rename, move,
//!   focus).
//!
//! The navigation core ([`ordering`] → [`resolve`] → [`compact`] →
//! [`actions`]) only depends on these abstractions; the concrete
//! implementation in [`hyprland`] speaks the IPC socket.  One CLI
//! invocation constructs one [`actions::Actions`], performs one action,
//! and exits — no state survives between runs.

pub mod actions;
pub mod compact;
pub mod config;
pub mod error;
pub mod hyprland;
pub mod ordering;
pub mod resolve;
pub mod slot;
pub mod snapshot;
pub mod traits;
