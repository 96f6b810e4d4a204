//! Shared constants and domain types used by the X11 layer and the daemon

pub mod constants;
pub mod types;
