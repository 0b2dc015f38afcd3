use thiserror::Error;

/// Failures surfaced by the overlay windowing backend.
///
/// No-op conditions (dispatching with an invalidated delegate, tearing down
/// twice, popping an empty stack) are not errors and stay silent; this
/// covers the one thing the backend can genuinely refuse to do.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("overlay backend refused to open a window: {0}")]
    OpenWindow(String),
}
