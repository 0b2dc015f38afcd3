use std::path::PathBuf;

use crate::geometry::Point;

/// A raw event delivered to an edge overlay window.
///
/// Locations are overlay-window-local (bottom-left origin) and are
/// forwarded to the delegate untouched. File paths are opaque strings from
/// the OS drag session; the crate neither parses nor validates them.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeEvent {
    PointerEntered { location: Point },
    PointerMoved { location: Point },
    PointerExited { location: Point },
    Scrolled { delta_x: f64, location: Point },
    Clicked { location: Point },
    DragEntered { filepath: PathBuf, location: Point },
    DragUpdated { filepath: PathBuf, location: Point },
    /// The drag left the band. The session may not know a location, in
    /// which case the controller falls back to the last pointer location.
    DragExited { location: Option<Point> },
    Dropped { filepath: PathBuf, location: Point },
    DragEnded,
}

/// A delegate's answer to a drag question. `None` rejects the drag; any
/// other variant advertises the operation the drop would perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragOperation {
    #[default]
    None,
    Copy,
    Link,
    Generic,
    Move,
}

impl DragOperation {
    pub fn accepts(self) -> bool {
        !matches!(self, DragOperation::None)
    }
}

/// What dispatching one event produced, for the host to relay to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeReply {
    /// Nothing consumed the event (no delegate, or no page tracks input).
    Ignored,
    /// The event was forwarded; there is no answer to relay.
    Handled,
    /// The delegate's accept/reject answer for a drag enter/update.
    Drag(DragOperation),
    /// Whether the delegate handled a drop.
    Drop(bool),
}

impl EdgeReply {
    pub fn is_ignored(self) -> bool {
        matches!(self, EdgeReply::Ignored)
    }
}
