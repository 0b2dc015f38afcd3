use std::path::Path;

use crate::edge::DragOperation;
use crate::geometry::Point;
use crate::page::PageContext;

/// The pointer/drag callback contract an edge overlay forwards into.
///
/// The first four methods are the required core. Everything after them is
/// a capability a delegate may choose to carry: the defaults reject drags,
/// ignore drops, and do nothing on scroll, so an implementation only
/// overrides the interactions it actually supports.
pub trait EdgeMouseDelegate {
    /// Pointer entered the sensor band at `location`.
    fn mouse_entered(&mut self, location: Point, cx: &mut PageContext<'_>);

    /// Pointer moved inside the band.
    fn mouse_moved(&mut self, location: Point, cx: &mut PageContext<'_>);

    /// Primary click inside the band.
    fn mouse_clicked(&mut self, location: Point, cx: &mut PageContext<'_>);

    /// Pointer left the band (or a drag left it) at `location`.
    fn mouse_exited(&mut self, location: Point, cx: &mut PageContext<'_>);

    fn mouse_scrolled(&mut self, _delta_x: f64, _location: Point, _cx: &mut PageContext<'_>) {}

    fn dragging_entered(
        &mut self,
        _filepath: &Path,
        _location: Point,
        _cx: &mut PageContext<'_>,
    ) -> DragOperation {
        DragOperation::None
    }

    fn dragging_updated(
        &mut self,
        _filepath: &Path,
        _location: Point,
        _cx: &mut PageContext<'_>,
    ) -> DragOperation {
        DragOperation::None
    }

    fn perform_drag_operation(
        &mut self,
        _filepath: &Path,
        _location: Point,
        _cx: &mut PageContext<'_>,
    ) -> bool {
        false
    }

    fn dragging_ended(&mut self, _cx: &mut PageContext<'_>) {}
}
