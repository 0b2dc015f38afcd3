//! Ephemeral overlay views a mouse-aware page renders over its content.
//!
//! These are view models, not pixels: the host's renderer draws them
//! wherever it draws the page. Each page holds at most one cursor sprite
//! and one drag badge at a time.

mod drag_badge;
mod marquee;

pub use drag_badge::DragBadge;
pub use marquee::MarqueeLabel;

use crate::constants::CURSOR_SPRITE_SIZE;
use crate::geometry::{Point, Rect};

/// The pointer image a cursor sprite shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorIcon {
    Arrow,
    PointingHand,
    OpenHand,
    ClosedHand,
    IBeam,
}

/// The synthetic pointer drawn inside the strip while the real pointer is
/// down in the sensor band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorSprite {
    icon: CursorIcon,
    frame: Rect,
}

impl CursorSprite {
    pub fn new(icon: CursorIcon) -> Self {
        Self {
            icon,
            frame: Rect::new(0.0, 0.0, CURSOR_SPRITE_SIZE, CURSOR_SPRITE_SIZE),
        }
    }

    pub fn move_to(&mut self, origin: Point) {
        self.frame.origin = origin;
    }

    pub fn icon(&self) -> CursorIcon {
        self.icon
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }
}
