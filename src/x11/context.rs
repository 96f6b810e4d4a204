//! Application context and cached X11 state

use anyhow::{Context, Result};
use x11rb::protocol::xproto::*;
use x11rb::rust_connection::RustConnection;

/// Application context holding immutable shared state
pub struct AppContext<'a> {
    pub conn: &'a RustConnection,
    pub screen: &'a Screen,
    pub atoms: &'a CachedAtoms,
}

/// Pre-cached X11 atoms to avoid repeated roundtrips
#[derive(Debug)]
pub struct CachedAtoms {
    pub utf8_string: Atom,
    pub net_wm_name: Atom,
    pub net_wm_pid: Atom,
    pub net_wm_desktop: Atom,
    pub net_wm_window_type: Atom,
    pub net_wm_window_type_dock: Atom,
    pub net_wm_state: Atom,
    pub net_wm_state_sticky: Atom,
    pub net_wm_state_skip_taskbar: Atom,
    pub net_wm_state_skip_pager: Atom,
    pub net_wm_state_above: Atom,
    pub net_wm_allowed_actions: Atom,
}

impl CachedAtoms {
    pub fn new(conn: &RustConnection) -> Result<Self> {
        Ok(Self {
            utf8_string: conn
                .intern_atom(false, b"UTF8_STRING")
                .context("Failed to intern UTF8_STRING atom")?
                .reply()
                .context("Failed to get reply for UTF8_STRING atom")?
                .atom,
            net_wm_name: conn
                .intern_atom(false, b"_NET_WM_NAME")
                .context("Failed to intern _NET_WM_NAME atom")?
                .reply()
                .context("Failed to get reply for _NET_WM_NAME atom")?
                .atom,
            net_wm_pid: conn
                .intern_atom(false, b"_NET_WM_PID")
                .context("Failed to intern _NET_WM_PID atom")?
                .reply()
                .context("Failed to get reply for _NET_WM_PID atom")?
                .atom,
            net_wm_desktop: conn
                .intern_atom(false, b"_NET_WM_DESKTOP")
                .context("Failed to intern _NET_WM_DESKTOP atom")?
                .reply()
                .context("Failed to get reply for _NET_WM_DESKTOP atom")?
                .atom,
            net_wm_window_type: conn
                .intern_atom(false, b"_NET_WM_WINDOW_TYPE")
                .context("Failed to intern _NET_WM_WINDOW_TYPE atom")?
                .reply()
                .context("Failed to get reply for _NET_WM_WINDOW_TYPE atom")?
                .atom,
            net_wm_window_type_dock: conn
                .intern_atom(false, b"_NET_WM_WINDOW_TYPE_DOCK")
                .context("Failed to intern _NET_WM_WINDOW_TYPE_DOCK atom")?
                .reply()
                .context("Failed to get reply for _NET_WM_WINDOW_TYPE_DOCK atom")?
                .atom,
            net_wm_state: conn
                .intern_atom(false, b"_NET_WM_STATE")
                .context("Failed to intern _NET_WM_STATE atom")?
                .reply()
                .context("Failed to get reply for _NET_WM_STATE atom")?
                .atom,
            net_wm_state_sticky: conn
                .intern_atom(false, b"_NET_WM_STATE_STICKY")
                .context("Failed to intern _NET_WM_STATE_STICKY atom")?
                .reply()
                .context("Failed to get reply for _NET_WM_STATE_STICKY atom")?
                .atom,
            net_wm_state_skip_taskbar: conn
                .intern_atom(false, b"_NET_WM_STATE_SKIP_TASKBAR")
                .context("Failed to intern _NET_WM_STATE_SKIP_TASKBAR atom")?
                .reply()
                .context("Failed to get reply for _NET_WM_STATE_SKIP_TASKBAR atom")?
                .atom,
            net_wm_state_skip_pager: conn
                .intern_atom(false, b"_NET_WM_STATE_SKIP_PAGER")
                .context("Failed to intern _NET_WM_STATE_SKIP_PAGER atom")?
                .reply()
                .context("Failed to get reply for _NET_WM_STATE_SKIP_PAGER atom")?
                .atom,
            net_wm_state_above: conn
                .intern_atom(false, b"_NET_WM_STATE_ABOVE")
                .context("Failed to intern _NET_WM_STATE_ABOVE atom")?
                .reply()
                .context("Failed to get reply for _NET_WM_STATE_ABOVE atom")?
                .atom,
            net_wm_allowed_actions: conn
                .intern_atom(false, b"_NET_WM_ALLOWED_ACTIONS")
                .context("Failed to intern _NET_WM_ALLOWED_ACTIONS atom")?
                .reply()
                .context("Failed to get reply for _NET_WM_ALLOWED_ACTIONS atom")?
                .atom,
        })
    }
}
