//! Navigation stack and screen-edge pointer bridge for auxiliary bar
//! displays.
//!
//! A host application presents a stack of interactive bar pages on a
//! secondary hardware strip. The strip reports item taps but no raw
//! pointer coordinates, so any page that wants real pointer or file-drag
//! input tracks a thin sensor band at the bottom screen edge through an
//! always-on-top overlay window and receives the activity as synthesized
//! delegate callbacks.
//!
//! The two halves collaborate: [`nav::NavigationStack`] manages page
//! lifecycle and ordering with strict single-visible-page semantics, and
//! [`edge::EdgeOverlayController`] bridges the overlay window to whichever
//! page is on top. [`mouse_page::MouseAwarePage`] composes the two and adds
//! the transient cursor sprite and drag-info badge.
//!
//! The platform itself is injected: implement [`host::PresentationHost`]
//! and [`host::OverlayHost`] for the real strip and windowing system, feed
//! raw [`edge::EdgeEvent`]s into the stack from the host event loop, and
//! pump `tick`/`run_pending` once per loop turn.

pub mod constants;
pub mod edge;
pub mod error;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod mouse_page;
pub mod nav;
pub mod page;
pub mod scheduler;
pub mod views;

pub use edge::{DragOperation, EdgeEvent, EdgeMouseDelegate, EdgeOverlayController, EdgeReply};
pub use error::OverlayError;
pub use geometry::{Point, Rect, Size};
pub use host::{
    Color, OverlayHost, OverlayWindowSpec, PresentationHost, SurfaceId, TrackingHandle,
    TrackingOptions, WindowHandle,
};
pub use mouse_page::{MouseAwarePage, MouseWidget};
pub use nav::{NavigationStack, StackCommand, StackLink};
pub use page::{Page, PageContext, PageCore};
pub use views::{CursorIcon, CursorSprite, DragBadge, MarqueeLabel};
