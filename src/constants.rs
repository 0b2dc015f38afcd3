//! Shared crate-wide constants.

use std::time::Duration;

/// Height (in points) of the sensor band tracked at the bottom screen edge.
///
/// The overlay window and its hit-tracking registration both use this
/// height; the band's width follows the delegate page's visible content
/// width instead.
pub const SENSOR_BAND_HEIGHT: f64 = 10.0;

/// Delay before a freshly presented page (re)creates its edge overlay
/// controller.
///
/// Creation is deferred by one short turn of the UI event queue so the
/// page's content view can finish its own layout pass and report a settled
/// width. Advisory, not exact-time.
pub const EDGE_RELOAD_DELAY: Duration = Duration::from_millis(10);

/// Delay applied to drag-badge repositions after the first placement.
///
/// The lag produces the trailing-slide effect while a file is dragged along
/// the band. The very first placement is immediate to avoid an initial
/// flicker.
pub const BADGE_SLIDE_DELAY: Duration = Duration::from_millis(128);

/// Rounded top-corner radius of the overlay window.
pub const OVERLAY_CORNER_RADIUS: f64 = 6.0;

/// Square edge length (in points) of the synthetic pointer sprite.
pub const CURSOR_SPRITE_SIZE: f64 = 20.0;

/// Total height (in points) of the drag-info badge.
pub const BADGE_HEIGHT: f64 = 15.0;

/// Width (in points) of the badge's file-icon cell.
pub const BADGE_ICON_WIDTH: f64 = 20.0;

/// Cap (in points) on the badge's filename label. Longer names scroll.
pub const BADGE_LABEL_MAX_WIDTH: f64 = 200.0;

/// Horizontal padding (in points) the label pill adds around its text.
pub const BADGE_LABEL_PADDING: f64 = 12.0;

/// Inset (in points) between the badge's right edge and the drag location,
/// so the badge trails slightly behind the pointer.
pub const BADGE_TRAILING_INSET: f64 = 8.0;

/// Font size (in points) used to measure the badge's filename label.
pub const BADGE_LABEL_FONT_SIZE: f64 = 9.0;

/// Hold time before an overflowing marquee label starts to scroll.
pub const MARQUEE_START_DELAY: Duration = Duration::from_secs(2);

/// Marquee scroll speed in points per second.
pub const MARQUEE_SPEED: f64 = 25.0;

/// Gap (in points) between the tail and head of a wrapping marquee pass.
pub const MARQUEE_SPACING: f64 = 20.0;
