//! In-memory hosts that record every call.
//!
//! The same idea as driving a terminal UI against a test backend: the
//! integration tests (and the demo's window plumbing) run the real
//! controllers against these and assert on the recorded operations.

use std::collections::BTreeMap;

use crate::error::OverlayError;
use crate::geometry::{Rect, Size};
use crate::host::{
    OverlayHost, OverlayWindowSpec, PresentationHost, SurfaceId, TrackingHandle, TrackingOptions,
    WindowHandle,
};

/// One recorded strip operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripOp {
    Present(SurfaceId),
    Dismiss(SurfaceId),
    Minimize(SurfaceId),
}

/// Recording [`PresentationHost`].
#[derive(Debug, Default)]
pub struct HeadlessPresenter {
    ops: Vec<StripOp>,
}

impl HeadlessPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[StripOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<StripOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn present_count(&self, surface: SurfaceId) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, StripOp::Present(s) if *s == surface))
            .count()
    }

    pub fn dismiss_count(&self, surface: SurfaceId) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, StripOp::Dismiss(s) if *s == surface))
            .count()
    }
}

impl PresentationHost for HeadlessPresenter {
    fn present_on_top(&mut self, surface: SurfaceId) {
        self.ops.push(StripOp::Present(surface));
    }

    fn dismiss_from_top(&mut self, surface: SurfaceId) {
        self.ops.push(StripOp::Dismiss(surface));
    }

    fn minimize_from_top(&mut self, surface: SurfaceId) {
        self.ops.push(StripOp::Minimize(surface));
    }
}

/// One recorded windowing operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayOp {
    OpenWindow(WindowHandle),
    SetFrame(WindowHandle, Rect),
    SetVisible(WindowHandle, bool),
    CloseWindow(WindowHandle),
    AddTracking(WindowHandle, TrackingHandle),
    RemoveTracking(WindowHandle, TrackingHandle),
    SetPointerHidden(bool),
}

#[derive(Debug, Clone)]
struct WindowRecord {
    spec: OverlayWindowSpec,
    frame: Rect,
    visible: bool,
}

#[derive(Debug, Clone, Copy)]
struct TrackingRecord {
    window: WindowHandle,
    region: Rect,
    options: TrackingOptions,
}

/// Recording [`OverlayHost`] with live window/tracking bookkeeping.
#[derive(Debug)]
pub struct HeadlessOverlay {
    screen: Size,
    next_handle: u64,
    refuse_windows: bool,
    ops: Vec<OverlayOp>,
    windows: BTreeMap<WindowHandle, WindowRecord>,
    trackings: BTreeMap<TrackingHandle, TrackingRecord>,
    pointer_hidden: bool,
}

impl HeadlessOverlay {
    pub fn new(screen: Size) -> Self {
        Self {
            screen,
            next_handle: 0,
            refuse_windows: false,
            ops: Vec::new(),
            windows: BTreeMap::new(),
            trackings: BTreeMap::new(),
            pointer_hidden: false,
        }
    }

    /// Make every subsequent `open_overlay` fail, for exercising the
    /// backend-refusal path.
    pub fn refuse_windows(&mut self, refuse: bool) {
        self.refuse_windows = refuse;
    }

    pub fn ops(&self) -> &[OverlayOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<OverlayOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn live_windows(&self) -> Vec<WindowHandle> {
        self.windows.keys().copied().collect()
    }

    pub fn live_trackings(&self) -> Vec<TrackingHandle> {
        self.trackings.keys().copied().collect()
    }

    pub fn tracking_count(&self) -> usize {
        self.trackings.len()
    }

    pub fn window_frame(&self, window: WindowHandle) -> Option<Rect> {
        self.windows.get(&window).map(|record| record.frame)
    }

    pub fn window_visible(&self, window: WindowHandle) -> Option<bool> {
        self.windows.get(&window).map(|record| record.visible)
    }

    pub fn window_spec(&self, window: WindowHandle) -> Option<&OverlayWindowSpec> {
        self.windows.get(&window).map(|record| &record.spec)
    }

    pub fn tracking_region(&self, tracking: TrackingHandle) -> Option<Rect> {
        self.trackings.get(&tracking).map(|record| record.region)
    }

    pub fn tracking_options(&self, tracking: TrackingHandle) -> Option<TrackingOptions> {
        self.trackings.get(&tracking).map(|record| record.options)
    }

    pub fn pointer_hidden(&self) -> bool {
        self.pointer_hidden
    }

    fn next(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl OverlayHost for HeadlessOverlay {
    fn screen_size(&self) -> Size {
        self.screen
    }

    fn open_overlay(&mut self, spec: &OverlayWindowSpec) -> Result<WindowHandle, OverlayError> {
        if self.refuse_windows {
            return Err(OverlayError::OpenWindow(
                "headless host configured to refuse windows".to_string(),
            ));
        }
        let handle = WindowHandle(self.next());
        self.windows.insert(
            handle,
            WindowRecord {
                spec: spec.clone(),
                frame: spec.frame,
                visible: true,
            },
        );
        self.ops.push(OverlayOp::OpenWindow(handle));
        Ok(handle)
    }

    fn set_window_frame(&mut self, window: WindowHandle, frame: Rect) {
        if let Some(record) = self.windows.get_mut(&window) {
            record.frame = frame;
            self.ops.push(OverlayOp::SetFrame(window, frame));
        }
    }

    fn set_window_visible(&mut self, window: WindowHandle, visible: bool) {
        if let Some(record) = self.windows.get_mut(&window) {
            record.visible = visible;
            self.ops.push(OverlayOp::SetVisible(window, visible));
        }
    }

    fn close_window(&mut self, window: WindowHandle) {
        if self.windows.remove(&window).is_some() {
            // registrations die with their window's content view
            self.trackings.retain(|_, record| record.window != window);
            self.ops.push(OverlayOp::CloseWindow(window));
        }
    }

    fn add_tracking(
        &mut self,
        window: WindowHandle,
        region: Rect,
        options: TrackingOptions,
    ) -> TrackingHandle {
        let handle = TrackingHandle(self.next());
        self.trackings.insert(
            handle,
            TrackingRecord {
                window,
                region,
                options,
            },
        );
        self.ops.push(OverlayOp::AddTracking(window, handle));
        handle
    }

    fn remove_tracking(&mut self, window: WindowHandle, tracking: TrackingHandle) {
        if self.trackings.remove(&tracking).is_some() {
            self.ops.push(OverlayOp::RemoveTracking(window, tracking));
        }
    }

    fn set_pointer_hidden(&mut self, hidden: bool) {
        self.pointer_hidden = hidden;
        self.ops.push(OverlayOp::SetPointerHidden(hidden));
    }
}
