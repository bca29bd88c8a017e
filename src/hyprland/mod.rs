//! Hyprland-specific implementations.
//!
//! This module provides the concrete backend for the
//! [`Query`](crate::traits::Query) and [`Dispatch`](crate::traits::Dispatch)
//! ports, powered by Hyprland's IPC socket.
//!
//! Nothing outside this module should reference Hyprland directly.

pub mod client;

pub use client::HyprlandClient;
