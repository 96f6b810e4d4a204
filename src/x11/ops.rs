//! X11 trigger window operations

use anyhow::{Context, Result};
use x11rb::COPY_DEPTH_FROM_PARENT;
use x11rb::connection::Connection;
use x11rb::properties::WmSizeHints;
use x11rb::protocol::randr::{ConnectionExt as RandrConnectionExt, NotifyMask};
use x11rb::protocol::xproto::*;
use x11rb::wrapper::ConnectionExt as WrapperConnectionExt;

use super::AppContext;
use crate::common::constants::{window, x11};
use crate::common::types::{Dimensions, Position};

/// Creates the corner trigger window: black, practically invisible at its
/// default 1x1 size, listening for pointer crossing and button events
pub fn create_trigger_window(ctx: &AppContext, dims: Dimensions) -> Result<Window> {
    let win = ctx
        .conn
        .generate_id()
        .context("Failed to allocate an id for the trigger window")?;

    let values = CreateWindowAux::new()
        .background_pixel(ctx.screen.black_pixel)
        .event_mask(
            EventMask::BUTTON_PRESS
                | EventMask::BUTTON_RELEASE
                | EventMask::ENTER_WINDOW
                | EventMask::LEAVE_WINDOW,
        );

    ctx.conn
        .create_window(
            COPY_DEPTH_FROM_PARENT,
            win,
            ctx.screen.root,
            0,
            0,
            dims.width,
            dims.height,
            0,
            WindowClass::INPUT_OUTPUT,
            ctx.screen.root_visual,
            &values,
        )
        .context("Failed to create the trigger window")?;

    Ok(win)
}

/// Sets WM_NAME and _NET_WM_NAME so the window is identifiable in window lists
pub fn set_window_title(ctx: &AppContext, win: Window, title: &str) -> Result<()> {
    ctx.conn
        .change_property8(
            PropMode::REPLACE,
            win,
            AtomEnum::WM_NAME,
            AtomEnum::STRING,
            title.as_bytes(),
        )
        .context("Failed to set WM_NAME")?;
    ctx.conn
        .change_property8(
            PropMode::REPLACE,
            win,
            ctx.atoms.net_wm_name,
            ctx.atoms.utf8_string,
            title.as_bytes(),
        )
        .context("Failed to set _NET_WM_NAME")?;
    Ok(())
}

/// Sets WM_CLASS (instance and class strings) for WM rule matching
pub fn set_window_class(ctx: &AppContext, win: Window) -> Result<()> {
    let mut class =
        Vec::with_capacity(window::CLASS_INSTANCE.len() + window::CLASS_NAME.len() + 2);
    class.extend_from_slice(window::CLASS_INSTANCE.as_bytes());
    class.push(0);
    class.extend_from_slice(window::CLASS_NAME.as_bytes());
    class.push(0);

    ctx.conn
        .change_property8(
            PropMode::REPLACE,
            win,
            AtomEnum::WM_CLASS,
            AtomEnum::STRING,
            &class,
        )
        .context("Failed to set WM_CLASS")?;
    Ok(())
}

/// Pins the window geometry by publishing identical minimum and maximum sizes.
/// The hints live in the WM_NORMAL_HINTS property, whose type is WM_SIZE_HINTS.
pub fn set_fixed_size_hints(ctx: &AppContext, win: Window, dims: Dimensions) -> Result<()> {
    let mut hints = WmSizeHints::new();
    hints.min_size = Some((i32::from(dims.width), i32::from(dims.height)));
    hints.max_size = Some((i32::from(dims.width), i32::from(dims.height)));
    hints
        .set_normal_hints(ctx.conn, win)
        .context("Failed to set WM_NORMAL_HINTS")?;
    Ok(())
}

/// Publishes the EWMH hints that keep the trigger out of the user's way:
/// dock window type, sticky/skip-taskbar/skip-pager/above state, and an
/// empty allowed-actions list
pub fn set_dock_hints(ctx: &AppContext, win: Window) -> Result<()> {
    let atoms = ctx.atoms;

    ctx.conn
        .change_property32(
            PropMode::REPLACE,
            win,
            atoms.net_wm_window_type,
            AtomEnum::ATOM,
            &[atoms.net_wm_window_type_dock],
        )
        .context("Failed to set _NET_WM_WINDOW_TYPE")?;

    ctx.conn
        .change_property32(
            PropMode::REPLACE,
            win,
            atoms.net_wm_state,
            AtomEnum::ATOM,
            &[
                atoms.net_wm_state_sticky,
                atoms.net_wm_state_skip_taskbar,
                atoms.net_wm_state_skip_pager,
                atoms.net_wm_state_above,
            ],
        )
        .context("Failed to set _NET_WM_STATE")?;

    ctx.conn
        .change_property32(
            PropMode::REPLACE,
            win,
            atoms.net_wm_allowed_actions,
            AtomEnum::ATOM,
            &[],
        )
        .context("Failed to set _NET_WM_ALLOWED_ACTIONS")?;

    Ok(())
}

/// Publishes _NET_WM_PID so the WM can associate the window with this process
pub fn set_window_pid(ctx: &AppContext, win: Window) -> Result<()> {
    ctx.conn
        .change_property32(
            PropMode::REPLACE,
            win,
            ctx.atoms.net_wm_pid,
            AtomEnum::CARDINAL,
            &[std::process::id()],
        )
        .context("Failed to set _NET_WM_PID")?;
    Ok(())
}

/// Subscribes to RandR screen change notifications so the trigger window can
/// follow resolution and orientation changes
pub fn select_screen_change_events(ctx: &AppContext, win: Window) -> Result<()> {
    ctx.conn
        .randr_select_input(win, NotifyMask::SCREEN_CHANGE)
        .context("Failed to select RandR screen change notifications")?;
    Ok(())
}

/// Requests presence on every desktop via a _NET_WM_DESKTOP client message.
/// Window managers only honor this once the window is mapped.
pub fn pin_to_all_desktops(ctx: &AppContext, win: Window) -> Result<()> {
    let event = ClientMessageEvent {
        response_type: CLIENT_MESSAGE_EVENT,
        format: 32,
        sequence: 0,
        window: win,
        type_: ctx.atoms.net_wm_desktop,
        data: ClientMessageData::from([x11::ALL_DESKTOPS, x11::SOURCE_INDICATION_NORMAL, 0, 0, 0]),
    };

    ctx.conn
        .send_event(
            false,
            ctx.screen.root,
            EventMask::SUBSTRUCTURE_NOTIFY | EventMask::SUBSTRUCTURE_REDIRECT,
            event,
        )
        .context(format!(
            "Failed to send _NET_WM_DESKTOP event for window {}",
            win
        ))?;
    Ok(())
}

/// Moves the window to the given root coordinates
pub fn move_to(ctx: &AppContext, win: Window, pos: Position) -> Result<()> {
    ctx.conn
        .configure_window(win, &ConfigureWindowAux::new().x(pos.x).y(pos.y))
        .context(format!(
            "Failed to move window {} to ({}, {})",
            win, pos.x, pos.y
        ))?;
    Ok(())
}
