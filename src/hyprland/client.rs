//! [`Query`] and [`Dispatch`] ports backed by Hyprland IPC.
//!
//! Communicates directly with Hyprland through its Unix socket at
//! `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket.sock`,
//! avoiding any shell command invocation or third-party crate for socket
//! discovery.
//!
//! Every method opens a short-lived connection carrying its own read and
//! write deadline; a missed deadline surfaces as
//! [`ExternalError::Timeout`], a missing socket or instance signature as
//! [`ExternalError::NotFound`].  There are no retries.

use crate::snapshot::{Client, Monitor, Workspace};
use crate::traits::{Dispatch, ExternalError, Query};
use serde::de::DeserializeOwned;
use std::io::{ErrorKind, Read, Write};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;
use std::time::Duration;

/// Hyprland-backed port implementation.
///
/// No connection is opened eagerly; each call is an independent IPC
/// request against a fresh stream.
#[derive(Debug, Clone, Copy)]
pub struct HyprlandClient {
    timeout: Duration,
}

impl HyprlandClient {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Resolve the Hyprland command socket path.
    ///
    /// Hyprland ≥ 0.40 stores its sockets at
    /// `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket.sock`.
    fn socket_path() -> Result<PathBuf, ExternalError> {
        let runtime_dir = std::env::var("XDG_RUNTIME_DIR")
            .map_err(|_| ExternalError::NotFound("XDG_RUNTIME_DIR not set".into()))?;
        let instance = std::env::var("HYPRLAND_INSTANCE_SIGNATURE").map_err(|_| {
            ExternalError::NotFound(
                "HYPRLAND_INSTANCE_SIGNATURE not set (is Hyprland running?)".into(),
            )
        })?;
        Ok(PathBuf::from(format!(
            "{}/hypr/{}/.socket.sock",
            runtime_dir, instance
        )))
    }

    /// Send a raw command and return the response as a string.
    fn request(&self, command: &str) -> Result<String, ExternalError> {
        let path = Self::socket_path()?;
        let mut stream = UnixStream::connect(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ExternalError::NotFound(format!("{}: {}", path.display(), e))
            } else {
                ExternalError::Io(format!("connect to {}: {}", path.display(), e))
            }
        })?;

        stream
            .set_read_timeout(Some(self.timeout))
            .and_then(|_| stream.set_write_timeout(Some(self.timeout)))
            .map_err(|e| ExternalError::Io(format!("set deadline: {}", e)))?;

        stream
            .write_all(command.as_bytes())
            .map_err(|e| classify_io("write", command, &e))?;

        let mut response = Vec::new();
        stream
            .read_to_end(&mut response)
            .map_err(|e| classify_io("read", command, &e))?;

        String::from_utf8(response).map_err(|e| ExternalError::Parse(format!("utf-8: {}", e)))
    }

    /// Send a JSON data query (`j/<command>`) and deserialize the reply.
    fn json<T: DeserializeOwned>(&self, data_command: &str) -> Result<T, ExternalError> {
        let raw = self.request(&format!("j/{}", data_command))?;
        serde_json::from_str(&raw)
            .map_err(|e| ExternalError::Parse(format!("{}: {}", data_command, e)))
    }

    /// Like [`json`](Self::json), but Hyprland answers `{}` (or nothing)
    /// when no object is focused.
    fn json_or_none<T: DeserializeOwned>(
        &self,
        data_command: &str,
    ) -> Result<Option<T>, ExternalError> {
        let raw = self.request(&format!("j/{}", data_command))?;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "{}" || trimmed == "null" {
            return Ok(None);
        }
        serde_json::from_str(trimmed)
            .map(Some)
            .map_err(|e| ExternalError::Parse(format!("{}: {}", data_command, e)))
    }

    /// Send a dispatch command and check for `"ok"`.
    fn dispatch(&self, args: &str) -> Result<(), ExternalError> {
        let response = self.request(&format!("/dispatch {}", args))?;
        if response.trim() == "ok" {
            Ok(())
        } else {
            Err(ExternalError::Rejected(format!(
                "dispatch {}: {}",
                args, response
            )))
        }
    }
}

fn classify_io(op: &str, command: &str, e: &std::io::Error) -> ExternalError {
    match e.kind() {
        // A socket deadline overrun reports WouldBlock on Unix.
        ErrorKind::TimedOut | ErrorKind::WouldBlock => {
            ExternalError::Timeout(format!("{} {}: {}", op, command, e))
        }
        _ => ExternalError::Io(format!("{} {}: {}", op, command, e)),
    }
}

//  Port implementations

impl Query for HyprlandClient {
    fn monitors(&self) -> Result<Vec<Monitor>, ExternalError> {
        self.json("monitors")
    }

    fn workspaces(&self) -> Result<Vec<Workspace>, ExternalError> {
        self.json("workspaces")
    }

    fn clients(&self) -> Result<Vec<Client>, ExternalError> {
        self.json("clients")
    }

    fn active_workspace(&self) -> Result<Option<Workspace>, ExternalError> {
        self.json_or_none("activeworkspace")
    }

    fn active_window(&self) -> Result<Option<Client>, ExternalError> {
        self.json_or_none("activewindow")
    }
}

impl Dispatch for HyprlandClient {
    fn focus_workspace(&self, name: &str) -> Result<(), ExternalError> {
        self.dispatch(&format!("workspace name:{}", name))
    }

    fn rename_workspace(&self, id: i32, new_name: &str) -> Result<(), ExternalError> {
        self.dispatch(&format!("renameworkspace {} {}", id, new_name))
    }

    fn focus_monitor(&self, id: i32) -> Result<(), ExternalError> {
        self.dispatch(&format!("focusmonitor {}", id))
    }

    fn move_to_workspace(&self, name: &str, address: &str) -> Result<(), ExternalError> {
        // name:...,address:... must be a single argument
        self.dispatch(&format!("movetoworkspace name:{},address:{}", name, address))
    }
}
