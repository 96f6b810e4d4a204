//! Domain types for type safety and clarity

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Screen corner hosting the trigger window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Top-left coordinate of a `dims`-sized window parked in this corner of
    /// a `screen_width` x `screen_height` screen
    pub fn position(self, screen_width: u16, screen_height: u16, dims: Dimensions) -> Position {
        let right = i32::from(screen_width.saturating_sub(dims.width));
        let bottom = i32::from(screen_height.saturating_sub(dims.height));
        match self {
            Corner::TopLeft => Position::new(0, 0),
            Corner::TopRight => Position::new(right, 0),
            Corner::BottomLeft => Position::new(0, bottom),
            Corner::BottomRight => Position::new(right, bottom),
        }
    }
}

/// Window position in root coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Window dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

impl Dimensions {
    /// Square dimensions, as used by the corner trigger
    pub fn square(edge: u16) -> Self {
        Self {
            width: edge,
            height: edge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_left_is_origin() {
        let pos = Corner::TopLeft.position(1920, 1080, Dimensions::square(1));
        assert_eq!(pos, Position::new(0, 0));
    }

    #[test]
    fn test_right_corners_account_for_width() {
        let dims = Dimensions::square(1);
        assert_eq!(
            Corner::TopRight.position(1920, 1080, dims),
            Position::new(1919, 0)
        );
        assert_eq!(
            Corner::BottomRight.position(1920, 1080, dims),
            Position::new(1919, 1079)
        );
    }

    #[test]
    fn test_bottom_left_accounts_for_height() {
        let pos = Corner::BottomLeft.position(1920, 1080, Dimensions::square(1));
        assert_eq!(pos, Position::new(0, 1079));
    }

    #[test]
    fn test_larger_trigger_sizes() {
        let pos = Corner::BottomRight.position(2560, 1440, Dimensions::square(4));
        assert_eq!(pos, Position::new(2556, 1436));
    }

    #[test]
    fn test_trigger_larger_than_screen_saturates() {
        let pos = Corner::BottomRight.position(10, 10, Dimensions::square(20));
        assert_eq!(pos, Position::new(0, 0));
    }
}
