use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::constants::{
    BADGE_HEIGHT, BADGE_ICON_WIDTH, BADGE_LABEL_MAX_WIDTH, BADGE_LABEL_PADDING,
    BADGE_TRAILING_INSET,
};
use crate::geometry::{Point, Rect};
use crate::views::MarqueeLabel;

/// The drag-affordance badge: a file-icon cell plus a pill container with a
/// scrolling filename label, shown while a file is dragged along the band.
#[derive(Debug, Clone, PartialEq)]
pub struct DragBadge {
    filepath: PathBuf,
    file_name: String,
    frame: Rect,
    label_width: f64,
    label: MarqueeLabel,
}

impl DragBadge {
    /// Lay out a badge for `filepath`. `text_width` is the measured width
    /// of the file name; names wider than the label cap get a single
    /// marquee pass, shorter ones sit still.
    pub fn new(filepath: &Path, text_width: f64, now: Instant) -> Self {
        let file_name = filepath
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let label_width = text_width.min(BADGE_LABEL_MAX_WIDTH);
        let label = MarqueeLabel::new(file_name.clone(), text_width, label_width, now);
        let width = BADGE_ICON_WIDTH + label_width + BADGE_LABEL_PADDING;
        Self {
            filepath: filepath.to_path_buf(),
            file_name,
            frame: Rect::new(0.0, 0.0, width, BADGE_HEIGHT),
            label_width,
            label,
        }
    }

    /// Anchor the badge so its right edge trails the drag location by the
    /// trailing inset.
    pub fn place(&mut self, location: Point) {
        self.frame.origin = Point::new(
            location.x - self.frame.size.width + BADGE_TRAILING_INSET,
            location.y,
        );
    }

    pub fn advance_marquee(&mut self, now: Instant) {
        self.label.advance(now);
    }

    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn label(&self) -> &MarqueeLabel {
        &self.label
    }

    /// The file-icon cell, in badge-local coordinates.
    pub fn icon_cell(&self) -> Rect {
        Rect::new(0.0, 0.0, BADGE_ICON_WIDTH, BADGE_HEIGHT)
    }

    /// The label pill, in badge-local coordinates.
    pub fn label_cell(&self) -> Rect {
        Rect::new(
            BADGE_ICON_WIDTH,
            0.0,
            self.label_width + BADGE_LABEL_PADDING,
            BADGE_HEIGHT,
        )
    }
}
