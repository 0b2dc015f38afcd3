//! The screen-edge overlay: an always-on-top window pinned to the bottom
//! screen edge that turns raw pointer and file-drag activity inside the
//! sensor band into delegate callbacks.

mod delegate;
mod events;

pub use delegate::EdgeMouseDelegate;
pub use events::{DragOperation, EdgeEvent, EdgeReply};

use crate::constants::{OVERLAY_CORNER_RADIUS, SENSOR_BAND_HEIGHT};
use crate::error::OverlayError;
use crate::geometry::{self, Point, Rect};
use crate::host::{Color, OverlayWindowSpec, TrackingHandle, TrackingOptions, WindowHandle};
use crate::page::PageContext;

/// Bridges one overlay window to one page's pointer/drag contract.
///
/// The controller owns the window and its single hit-tracking registration
/// exclusively. It does not own its delegate: the page that owns the
/// controller passes itself into [`dispatch`](Self::dispatch), and the
/// controller keeps only an attached/invalidated flag so a torn-down
/// bridge goes silent instead of forwarding into a dying page.
#[derive(Debug)]
pub struct EdgeOverlayController {
    window: WindowHandle,
    tracking: Option<TrackingHandle>,
    delegate_attached: bool,
    content_width: f64,
    last_pointer: Option<Point>,
    drag_session: bool,
    closed: bool,
}

impl EdgeOverlayController {
    /// Open the overlay window for a page whose visible content is
    /// `content_width` points wide and install the band registration.
    ///
    /// A zero content width opens a zero-width window: it exists but can
    /// never receive events, which is a valid inert state.
    pub fn new(
        content_width: f64,
        background: Option<Color>,
        cx: &mut PageContext<'_>,
    ) -> Result<Self, OverlayError> {
        let band = geometry::bottom_edge_band(
            content_width,
            cx.overlay.screen_size(),
            SENSOR_BAND_HEIGHT,
        );
        let spec = OverlayWindowSpec {
            frame: band,
            accepts_file_drops: true,
            background,
            corner_radius: OVERLAY_CORNER_RADIUS,
        };
        let window = cx.overlay.open_overlay(&spec)?;
        let tracking = cx.overlay.add_tracking(
            window,
            Rect::new(0.0, 0.0, content_width.max(0.0), SENSOR_BAND_HEIGHT),
            TrackingOptions::SENSOR_BAND,
        );
        tracing::debug!(window = ?window, width = content_width, "edge overlay ready");
        Ok(Self {
            window,
            tracking: Some(tracking),
            delegate_attached: true,
            content_width,
            last_pointer: None,
            drag_session: false,
            closed: false,
        })
    }

    pub fn window(&self) -> WindowHandle {
        self.window
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate_attached
    }

    pub fn is_torn_down(&self) -> bool {
        self.closed
    }

    /// Re-register tracking for a new content width, e.g. after the page's
    /// content view resized. The old registration comes out before the new
    /// one goes in; two live registrations never coexist.
    pub fn retrack(&mut self, content_width: f64, cx: &mut PageContext<'_>) {
        if self.closed {
            return;
        }
        if let Some(tracking) = self.tracking.take() {
            cx.overlay.remove_tracking(self.window, tracking);
        }
        self.content_width = content_width;
        let band = geometry::bottom_edge_band(
            content_width,
            cx.overlay.screen_size(),
            SENSOR_BAND_HEIGHT,
        );
        cx.overlay.set_window_frame(self.window, band);
        self.tracking = Some(cx.overlay.add_tracking(
            self.window,
            Rect::new(0.0, 0.0, content_width.max(0.0), SENSOR_BAND_HEIGHT),
            TrackingOptions::SENSOR_BAND,
        ));
    }

    /// Mirror the owning page's visibility onto the overlay window.
    pub fn set_window_visible(&mut self, visible: bool, cx: &mut PageContext<'_>) {
        if !self.closed {
            cx.overlay.set_window_visible(self.window, visible);
        }
    }

    /// Translate one raw event into delegate callbacks.
    ///
    /// Silent no-op after teardown or invalidation. The real system pointer
    /// is hidden for the duration of a drag session so the page's own drag
    /// affordances stand in for it.
    pub fn dispatch(
        &mut self,
        event: EdgeEvent,
        delegate: &mut dyn EdgeMouseDelegate,
        cx: &mut PageContext<'_>,
    ) -> EdgeReply {
        if self.closed || !self.delegate_attached {
            return EdgeReply::Ignored;
        }
        match event {
            EdgeEvent::PointerEntered { location } => {
                self.last_pointer = Some(location);
                delegate.mouse_entered(location, cx);
                EdgeReply::Handled
            }
            EdgeEvent::PointerMoved { location } => {
                self.last_pointer = Some(location);
                delegate.mouse_moved(location, cx);
                EdgeReply::Handled
            }
            EdgeEvent::PointerExited { location } => {
                self.last_pointer = None;
                delegate.mouse_exited(location, cx);
                EdgeReply::Handled
            }
            EdgeEvent::Scrolled { delta_x, location } => {
                delegate.mouse_scrolled(delta_x, location, cx);
                EdgeReply::Handled
            }
            EdgeEvent::Clicked { location } => {
                delegate.mouse_clicked(location, cx);
                EdgeReply::Handled
            }
            EdgeEvent::DragEntered { filepath, location } => {
                cx.overlay.set_pointer_hidden(true);
                self.drag_session = true;
                EdgeReply::Drag(delegate.dragging_entered(&filepath, location, cx))
            }
            EdgeEvent::DragUpdated { filepath, location } => {
                EdgeReply::Drag(delegate.dragging_updated(&filepath, location, cx))
            }
            EdgeEvent::DragExited { location } => {
                cx.overlay.set_pointer_hidden(false);
                self.drag_session = false;
                match location.or(self.last_pointer) {
                    Some(location) => {
                        delegate.mouse_exited(location, cx);
                        EdgeReply::Handled
                    }
                    None => EdgeReply::Ignored,
                }
            }
            EdgeEvent::Dropped { filepath, location } => {
                EdgeReply::Drop(delegate.perform_drag_operation(&filepath, location, cx))
            }
            EdgeEvent::DragEnded => {
                if self.drag_session {
                    cx.overlay.set_pointer_hidden(false);
                    self.drag_session = false;
                }
                delegate.dragging_ended(cx);
                EdgeReply::Handled
            }
        }
    }

    /// Remove the tracking registration and close the window. Safe to call
    /// any number of times. With `invalidate` the delegate slot is cleared
    /// too, breaking the back-reference before the owning page goes away.
    pub fn tear_down(&mut self, invalidate: bool, cx: &mut PageContext<'_>) {
        if invalidate {
            self.delegate_attached = false;
        }
        if let Some(tracking) = self.tracking.take() {
            cx.overlay.remove_tracking(self.window, tracking);
        }
        if !self.closed {
            self.closed = true;
            if self.drag_session {
                cx.overlay.set_pointer_hidden(false);
                self.drag_session = false;
            }
            cx.overlay.close_window(self.window);
            tracing::debug!(window = ?self.window, "edge overlay closed");
        }
    }
}
