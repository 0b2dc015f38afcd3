//! A page that owns an edge overlay and reacts to pointer/drag input.

use std::path::Path;

use crate::constants::{BADGE_LABEL_FONT_SIZE, BADGE_SLIDE_DELAY, EDGE_RELOAD_DELAY};
use crate::edge::{DragOperation, EdgeEvent, EdgeMouseDelegate, EdgeOverlayController, EdgeReply};
use crate::geometry::Point;
use crate::host::{Color, SurfaceId};
use crate::nav::StackLink;
use crate::page::{Page, PageContext, PageCore};
use crate::scheduler::DeferredTasks;
use crate::views::{CursorIcon, CursorSprite, DragBadge};

/// Host customization surface for a [`MouseAwarePage`].
///
/// `visible_rect_width` has no sensible default — the tracked band is
/// exactly as wide as the widget's content, and only the widget knows that
/// — so it is a required method. Every reaction hook is defaulted; a
/// widget overrides the interactions it supports and the rest reject or
/// do nothing.
pub trait MouseWidget {
    /// Width in points of the widget's visible content, which becomes the
    /// tracked band's width.
    fn visible_rect_width(&self) -> f64;

    fn pointer_entered(&mut self, _location: Point) {}

    fn pointer_moved(&mut self, _location: Point) {}

    fn pointer_clicked(&mut self, _location: Point) {}

    fn pointer_exited(&mut self, _location: Point) {}

    fn scrolled(&mut self, _delta_x: f64, _location: Point) {}

    fn drag_entered(&mut self, _filepath: &Path, _location: Point) -> DragOperation {
        DragOperation::None
    }

    fn drag_updated(&mut self, _filepath: &Path, _location: Point) -> DragOperation {
        DragOperation::None
    }

    fn drag_dropped(&mut self, _filepath: &Path, _location: Point) -> bool {
        false
    }

    fn drag_ended(&mut self) {}
}

/// A deferred piece of page work, pumped by `tick`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum MouseTask {
    /// Recreate the edge overlay controller once layout has settled.
    ReloadEdge,
    /// Apply a delayed badge reposition, if still the latest.
    PlaceBadge { location: Point, generation: u64 },
}

/// A [`Page`] that composes a host widget with an [`EdgeOverlayController`]
/// and the two transient overlays: the synthetic cursor sprite and the
/// drag-info badge.
pub struct MouseAwarePage<W: MouseWidget> {
    core: PageCore,
    widget: W,
    background: Option<Color>,
    edge: Option<EdgeOverlayController>,
    cursor: Option<CursorSprite>,
    badge: Option<DragBadge>,
    tasks: DeferredTasks<MouseTask>,
    badge_generation: u64,
}

impl<W: MouseWidget> MouseAwarePage<W> {
    pub fn new(surface: SurfaceId, widget: W) -> Self {
        Self {
            core: PageCore::new(surface),
            widget,
            background: None,
            edge: None,
            cursor: None,
            badge: None,
            tasks: DeferredTasks::new(),
            badge_generation: 0,
        }
    }

    /// Tint the overlay window instead of leaving it transparent.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    pub fn surface(&self) -> SurfaceId {
        self.core.surface()
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn edge_controller(&self) -> Option<&EdgeOverlayController> {
        self.edge.as_ref()
    }

    pub fn cursor_sprite(&self) -> Option<&CursorSprite> {
        self.cursor.as_ref()
    }

    pub fn drag_badge(&self) -> Option<&DragBadge> {
        self.badge.as_ref()
    }

    /// Tear down and re-create the edge overlay controller at the widget's
    /// current width. A backend refusal leaves the page without tracking,
    /// which every forwarding path treats as a silent no-op.
    pub fn reload_edge_controller(&mut self, cx: &mut PageContext<'_>) {
        if let Some(mut edge) = self.edge.take() {
            edge.tear_down(true, cx);
        }
        match EdgeOverlayController::new(self.widget.visible_rect_width(), self.background, cx) {
            Ok(mut edge) => {
                edge.set_window_visible(self.core.is_visible(), cx);
                self.edge = Some(edge);
            }
            Err(error) => tracing::warn!(%error, "edge overlay unavailable"),
        }
    }

    /// Keep the tracked region in sync after the widget's content resized.
    pub fn refresh_tracking(&mut self, cx: &mut PageContext<'_>) {
        let width = self.widget.visible_rect_width();
        if let Some(edge) = self.edge.as_mut() {
            edge.retrack(width, cx);
        }
    }

    fn schedule_edge_reload(&mut self, cx: &mut PageContext<'_>) {
        if self
            .tasks
            .is_scheduled(|task| matches!(task, MouseTask::ReloadEdge))
        {
            return;
        }
        self.tasks
            .schedule(cx.now + EDGE_RELOAD_DELAY, MouseTask::ReloadEdge);
    }

    fn show_cursor(&mut self, icon: Option<CursorIcon>, location: Option<Point>) {
        self.cursor = None;
        let (Some(icon), Some(location)) = (icon, location) else {
            return;
        };
        let mut sprite = CursorSprite::new(icon);
        sprite.move_to(location);
        self.cursor = Some(sprite);
    }

    fn update_cursor_location(&mut self, location: Point) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.move_to(location);
        }
    }

    fn show_badge(&mut self, filepath: &Path, location: Point, cx: &mut PageContext<'_>) {
        self.badge_generation = self.badge_generation.wrapping_add(1);
        self.tasks
            .cancel_if(|task| matches!(task, MouseTask::PlaceBadge { .. }));
        let name = filepath
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let text_width = cx.overlay.measure_text(&name, BADGE_LABEL_FONT_SIZE);
        let mut badge = DragBadge::new(filepath, text_width, cx.now);
        // first placement is immediate; only subsequent slides lag
        badge.place(location);
        tracing::debug!(file = %badge.file_name(), "drag badge shown");
        self.badge = Some(badge);
    }

    fn slide_badge(&mut self, location: Point, cx: &mut PageContext<'_>) {
        if self.badge.is_none() {
            return;
        }
        self.badge_generation = self.badge_generation.wrapping_add(1);
        self.tasks.schedule(
            cx.now + BADGE_SLIDE_DELAY,
            MouseTask::PlaceBadge {
                location,
                generation: self.badge_generation,
            },
        );
    }

    fn clear_badge(&mut self) {
        if self.badge.take().is_some() {
            tracing::debug!("drag badge removed");
        }
        self.badge_generation = self.badge_generation.wrapping_add(1);
        self.tasks
            .cancel_if(|task| matches!(task, MouseTask::PlaceBadge { .. }));
    }

    fn sync_overlay_window(&mut self, cx: &mut PageContext<'_>) {
        let visible = self.core.is_visible();
        if let Some(edge) = self.edge.as_mut() {
            edge.set_window_visible(visible, cx);
        }
    }

    fn run_task(&mut self, task: MouseTask, cx: &mut PageContext<'_>) {
        match task {
            MouseTask::ReloadEdge => self.reload_edge_controller(cx),
            MouseTask::PlaceBadge {
                location,
                generation,
            } => {
                if generation != self.badge_generation {
                    return; // superseded by a newer drag update
                }
                if let Some(badge) = self.badge.as_mut() {
                    badge.place(location);
                }
            }
        }
    }
}

impl<W: MouseWidget> Page for MouseAwarePage<W> {
    fn present(&mut self, cx: &mut PageContext<'_>) {
        let first_presentation = !self.core.is_visible();
        self.core.present(cx);
        self.sync_overlay_window(cx);
        if first_presentation {
            self.schedule_edge_reload(cx);
        }
    }

    fn dismiss(&mut self, cx: &mut PageContext<'_>) {
        self.show_cursor(None, None);
        self.clear_badge();
        self.tasks.clear();
        if let Some(mut edge) = self.edge.take() {
            edge.tear_down(true, cx);
        }
        self.core.dismiss(cx);
    }

    fn minimize(&mut self, cx: &mut PageContext<'_>) {
        self.core.minimize(cx);
        self.sync_overlay_window(cx);
    }

    fn is_visible(&self) -> bool {
        self.core.is_visible()
    }

    fn set_visible(&mut self, visible: bool, cx: &mut PageContext<'_>) {
        self.core.set_visible(visible);
        self.sync_overlay_window(cx);
    }

    fn attach_stack(&mut self, link: StackLink) {
        self.core.attach_stack(link);
    }

    fn detach_stack(&mut self) {
        self.core.detach_stack();
    }

    fn handle_edge_event(&mut self, event: EdgeEvent, cx: &mut PageContext<'_>) -> EdgeReply {
        let Some(mut edge) = self.edge.take() else {
            return EdgeReply::Ignored;
        };
        let reply = edge.dispatch(event, self, cx);
        if self.edge.is_none() {
            self.edge = Some(edge);
        } else {
            // a callback replaced the controller; retire the one we held
            edge.tear_down(true, cx);
        }
        reply
    }

    fn tick(&mut self, cx: &mut PageContext<'_>) {
        for task in self.tasks.due(cx.now) {
            self.run_task(task, cx);
        }
        if let Some(badge) = self.badge.as_mut() {
            badge.advance_marquee(cx.now);
        }
    }
}

impl<W: MouseWidget> EdgeMouseDelegate for MouseAwarePage<W> {
    fn mouse_entered(&mut self, location: Point, _cx: &mut PageContext<'_>) {
        self.show_cursor(Some(CursorIcon::Arrow), Some(location));
        self.widget.pointer_entered(location);
    }

    fn mouse_moved(&mut self, location: Point, _cx: &mut PageContext<'_>) {
        self.update_cursor_location(location);
        self.widget.pointer_moved(location);
    }

    fn mouse_clicked(&mut self, location: Point, _cx: &mut PageContext<'_>) {
        self.widget.pointer_clicked(location);
    }

    fn mouse_exited(&mut self, location: Point, _cx: &mut PageContext<'_>) {
        self.show_cursor(None, None);
        self.clear_badge();
        self.widget.pointer_exited(location);
    }

    fn mouse_scrolled(&mut self, delta_x: f64, location: Point, _cx: &mut PageContext<'_>) {
        self.widget.scrolled(delta_x, location);
    }

    fn dragging_entered(
        &mut self,
        filepath: &Path,
        location: Point,
        cx: &mut PageContext<'_>,
    ) -> DragOperation {
        self.show_badge(filepath, location, cx);
        self.widget.drag_entered(filepath, location)
    }

    fn dragging_updated(
        &mut self,
        filepath: &Path,
        location: Point,
        cx: &mut PageContext<'_>,
    ) -> DragOperation {
        self.slide_badge(location, cx);
        self.widget.drag_updated(filepath, location)
    }

    fn perform_drag_operation(
        &mut self,
        filepath: &Path,
        location: Point,
        _cx: &mut PageContext<'_>,
    ) -> bool {
        self.widget.drag_dropped(filepath, location)
    }

    fn dragging_ended(&mut self, _cx: &mut PageContext<'_>) {
        self.clear_badge();
        self.widget.drag_ended();
    }
}
