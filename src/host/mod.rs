//! The platform boundary.
//!
//! Everything the crate needs from the embedding application arrives
//! through two injected capabilities: a [`PresentationHost`] that puts bar
//! surfaces on and off the strip, and an [`OverlayHost`] that owns real
//! overlay windows, hit-tracking registrations, and the system pointer.
//! The crate never resolves either by name at runtime.

pub mod headless;

use crate::error::OverlayError;
use crate::geometry::{Rect, Size};

/// Opaque token naming a page's strip surface. Allocated by the host when
/// the page's content is built; the crate only passes it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

/// Handle to an overlay window owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowHandle(pub u64);

/// Handle to a live hit-tracking registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackingHandle(pub u64);

/// Straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Flags for a hit-tracking registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingOptions {
    /// Report pointer enter and exit.
    pub enter_exit: bool,
    /// Report motion while the pointer is inside the region.
    pub motion: bool,
    /// Stay active regardless of window key/focus state.
    pub active_always: bool,
}

impl TrackingOptions {
    /// The full set the sensor band registers with.
    pub const SENSOR_BAND: TrackingOptions = TrackingOptions {
        enter_exit: true,
        motion: true,
        active_always: true,
    };
}

/// Everything the backend needs to open one edge overlay window.
///
/// The window is implicitly borderless, non-activating, always on top, and
/// joins every space; those are the backend's contract, not options.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayWindowSpec {
    /// Screen-space frame, bottom-left origin.
    pub frame: Rect,
    /// Register the window as a destination for dragged-file payloads.
    pub accepts_file_drops: bool,
    /// Background fill; `None` means fully transparent.
    pub background: Option<Color>,
    /// Radius applied to the two top corners only.
    pub corner_radius: f64,
}

/// Presents bar surfaces on the strip.
pub trait PresentationHost {
    fn present_on_top(&mut self, surface: SurfaceId);
    fn dismiss_from_top(&mut self, surface: SurfaceId);
    fn minimize_from_top(&mut self, surface: SurfaceId);
}

/// Owns overlay windows and hit-tracking registrations.
///
/// Operations on unknown handles are silent no-ops; only opening a window
/// can fail.
pub trait OverlayHost {
    fn screen_size(&self) -> Size;

    fn open_overlay(&mut self, spec: &OverlayWindowSpec) -> Result<WindowHandle, OverlayError>;

    fn set_window_frame(&mut self, window: WindowHandle, frame: Rect);

    fn set_window_visible(&mut self, window: WindowHandle, visible: bool);

    fn close_window(&mut self, window: WindowHandle);

    /// Install a hit-tracking registration over `region` (window-local
    /// coordinates) of `window`.
    fn add_tracking(
        &mut self,
        window: WindowHandle,
        region: Rect,
        options: TrackingOptions,
    ) -> TrackingHandle;

    fn remove_tracking(&mut self, window: WindowHandle, tracking: TrackingHandle);

    /// Hide or reveal the real system pointer, used while a synthetic
    /// cursor or drag badge stands in for it.
    fn set_pointer_hidden(&mut self, hidden: bool);

    /// Rendered width of `text` at `font_size`, in points.
    ///
    /// Text metrics are an optional capability; the default is a glyph-box
    /// estimate good enough for badge layout.
    fn measure_text(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * 0.6
    }
}
