//! Centralized constants

/// Identity of the trigger window as presented to the window manager
pub mod window {
    pub const TITLE: &str = "xhotcorners";
    pub const CLASS_INSTANCE: &str = "xhotcorners";
    pub const CLASS_NAME: &str = "Xhotcorners";

    /// Default edge length of the trigger window in pixels
    pub const TRIGGER_SIZE: u16 = 1;
}

/// Protocol values from the EWMH specification
pub mod x11 {
    /// `_NET_WM_DESKTOP` value requesting presence on every desktop
    pub const ALL_DESKTOPS: u32 = 0xFFFF_FFFF;

    /// Source indication for client messages sent by a normal application
    pub const SOURCE_INDICATION_NORMAL: u32 = 1;
}
