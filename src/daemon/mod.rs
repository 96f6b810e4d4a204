//! Daemon lifecycle: trigger window setup and the blocking event loop

mod dispatcher;

use anyhow::{Context, Result};
use tracing::{info, warn};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::ConnectionExt;

use crate::common::types::Dimensions;
use crate::config::Settings;
use crate::x11::{self, AppContext, CachedAtoms};
use dispatcher::EventContext;

/// Connects to the X server, parks the trigger window in the configured
/// corner, and services events until the connection goes away
pub fn run(settings: &Settings) -> Result<()> {
    let (conn, screen_num) =
        x11rb::connect(None).context("Failed to open connection to the X server")?;
    let screen = &conn.setup().roots[screen_num];
    let atoms = CachedAtoms::new(&conn).context("Failed to intern atoms")?;
    let ctx = AppContext {
        conn: &conn,
        screen,
        atoms: &atoms,
    };

    let dims = Dimensions::square(settings.size);
    let win = x11::create_trigger_window(&ctx, dims)?;
    x11::set_window_title(&ctx, win, &settings.title)?;
    x11::set_window_class(&ctx, win)?;
    x11::set_fixed_size_hints(&ctx, win, dims)?;
    x11::set_dock_hints(&ctx, win)?;
    x11::set_window_pid(&ctx, win)?;
    x11::select_screen_change_events(&ctx, win)?;

    conn.map_window(win)
        .context("Failed to map the trigger window")?;
    conn.flush()
        .context("Failed to flush X11 connection after map")?;

    // _NET_WM_DESKTOP is only honored once the window is mapped
    x11::pin_to_all_desktops(&ctx, win)?;

    let pos = settings
        .corner
        .position(screen.width_in_pixels, screen.height_in_pixels, dims);
    x11::move_to(&ctx, win, pos)?;
    conn.flush()
        .context("Failed to flush X11 connection after positioning")?;

    info!(
        window = win,
        corner = ?settings.corner,
        x = pos.x,
        y = pos.y,
        width = dims.width,
        height = dims.height,
        "Trigger window mapped"
    );

    let event_ctx = EventContext {
        app_ctx: &ctx,
        trigger_window: win,
        settings,
    };
    event_loop(&event_ctx)
}

/// Blocks on the event stream forever; only a dead connection ends the loop
fn event_loop(ctx: &EventContext) -> Result<()> {
    loop {
        let event = match ctx.app_ctx.conn.wait_for_event() {
            Ok(event) => event,
            Err(err) => {
                println!("X connection lost while waiting for events: {err}");
                warn!(error = %err, "Connection to the X server lost, shutting down");
                return Ok(());
            }
        };
        dispatcher::dispatch(ctx, &event)?;
    }
}
