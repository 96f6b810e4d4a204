//! Event classification and handlers for the trigger window

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use x11rb::connection::Connection;
use x11rb::protocol::Event;
use x11rb::protocol::randr::ScreenChangeNotifyEvent;
use x11rb::protocol::xproto::Window;

use crate::common::types::Dimensions;
use crate::config::Settings;
use crate::x11::{self, AppContext};

/// State shared by all event handlers
pub struct EventContext<'a> {
    pub app_ctx: &'a AppContext<'a>,
    pub trigger_window: Window,
    pub settings: &'a Settings,
}

/// Handles one event: prints the label for recognized input events and runs
/// the side effects for protocol housekeeping events
pub fn dispatch(ctx: &EventContext, event: &Event) -> Result<()> {
    match event {
        Event::ButtonPress(ev) => {
            debug!(
                x = ev.root_x,
                y = ev.root_y,
                detail = ev.detail,
                "ButtonPress received"
            );
        }
        Event::ButtonRelease(ev) => {
            debug!(
                x = ev.root_x,
                y = ev.root_y,
                detail = ev.detail,
                "ButtonRelease received"
            );
        }
        Event::EnterNotify(ev) => {
            debug!(x = ev.root_x, y = ev.root_y, "Pointer entered the corner");
        }
        Event::LeaveNotify(ev) => {
            debug!(x = ev.root_x, y = ev.root_y, "Pointer left the corner");
        }
        Event::RandrScreenChangeNotify(ev) => {
            return handle_screen_change(ctx, ev);
        }
        Event::Error(err) => {
            // Hint requests the WM rejects come back as asynchronous errors
            warn!(
                error_kind = ?err.error_kind,
                sequence = err.sequence,
                "Ignoring asynchronous X11 error"
            );
            return Ok(());
        }
        _ => {}
    }

    if let Some(label) = event_label(event) {
        println!("{label}");
    }
    Ok(())
}

/// Line printed to stdout for a received event, or None for events that are
/// handled silently
fn event_label(event: &Event) -> Option<String> {
    let label = match event {
        Event::Expose(_) => "Expose".to_string(),
        Event::KeyPress(_) => "KeyPress".to_string(),
        Event::ButtonPress(_) => "ButtonPress".to_string(),
        Event::ButtonRelease(_) => "ButtonRelease".to_string(),
        Event::EnterNotify(_) => "EnterNotify".to_string(),
        Event::LeaveNotify(_) => "LeaveNotify".to_string(),
        Event::RandrScreenChangeNotify(_) | Event::Error(_) => return None,
        other => format!("Ignoring event response_type {}", other.response_type()),
    };
    Some(label)
}

/// Repositions the trigger window after a resolution or orientation change
#[tracing::instrument(skip_all, fields(window = ctx.trigger_window))]
fn handle_screen_change(ctx: &EventContext, event: &ScreenChangeNotifyEvent) -> Result<()> {
    let dims = Dimensions::square(ctx.settings.size);
    let pos = ctx.settings.corner.position(event.width, event.height, dims);

    x11::move_to(ctx.app_ctx, ctx.trigger_window, pos)?;
    ctx.app_ctx
        .conn
        .flush()
        .context("Failed to flush X11 connection after repositioning")?;

    info!(
        width = event.width,
        height = event.height,
        x = pos.x,
        y = pos.y,
        "Screen geometry changed, trigger window repositioned"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use x11rb::protocol::xproto::{
        ButtonPressEvent, EnterNotifyEvent, ExposeEvent, KeyButMask, MapNotifyEvent, NotifyDetail,
        NotifyMode,
    };

    #[test]
    fn test_recognized_events_get_their_own_label() {
        let expose = Event::Expose(ExposeEvent {
            response_type: 12,
            sequence: 0,
            window: 42,
            x: 0,
            y: 0,
            width: 1,
            height: 1,
            count: 0,
        });
        assert_eq!(event_label(&expose).as_deref(), Some("Expose"));

        let press = Event::ButtonPress(ButtonPressEvent {
            response_type: 4,
            detail: 1,
            sequence: 0,
            time: 0,
            root: 1,
            event: 42,
            child: 0,
            root_x: 0,
            root_y: 0,
            event_x: 0,
            event_y: 0,
            state: KeyButMask::default(),
            same_screen: true,
        });
        assert_eq!(event_label(&press).as_deref(), Some("ButtonPress"));

        let enter = Event::EnterNotify(EnterNotifyEvent {
            response_type: 7,
            detail: NotifyDetail::ANCESTOR,
            sequence: 0,
            time: 0,
            root: 1,
            event: 42,
            child: 0,
            root_x: 0,
            root_y: 0,
            event_x: 0,
            event_y: 0,
            state: KeyButMask::default(),
            mode: NotifyMode::NORMAL,
            same_screen_focus: 0,
        });
        assert_eq!(event_label(&enter).as_deref(), Some("EnterNotify"));
    }

    #[test]
    fn test_unrecognized_event_falls_back_to_numeric_type() {
        let map = Event::MapNotify(MapNotifyEvent {
            response_type: 19,
            sequence: 0,
            event: 1,
            window: 42,
            override_redirect: false,
        });
        assert_eq!(
            event_label(&map).as_deref(),
            Some("Ignoring event response_type 19")
        );
    }

    #[test]
    fn test_fallback_reports_the_raw_response_type() {
        // Bit 7 marks events delivered via SendEvent and stays in the raw type
        let map = Event::MapNotify(MapNotifyEvent {
            response_type: 19 | 0x80,
            sequence: 0,
            event: 1,
            window: 42,
            override_redirect: false,
        });
        assert_eq!(
            event_label(&map).as_deref(),
            Some("Ignoring event response_type 147")
        );
    }
}
