//! The page lifecycle contract consumed by the navigation stack.

use std::time::Instant;

use crate::edge::{EdgeEvent, EdgeReply};
use crate::host::{OverlayHost, PresentationHost, SurfaceId};
use crate::nav::StackLink;

/// Borrowed host services for one dispatch.
///
/// All mutation in the crate happens on the single UI-event thread in
/// response to host calls; the context carries that thread's view of the
/// world down into whatever is being operated on. `now` is the host loop's
/// clock for this turn, which is what deferred work schedules against.
pub struct PageContext<'a> {
    pub presenter: &'a mut dyn PresentationHost,
    pub overlay: &'a mut dyn OverlayHost,
    pub now: Instant,
}

impl<'a> PageContext<'a> {
    pub fn new(
        presenter: &'a mut dyn PresentationHost,
        overlay: &'a mut dyn OverlayHost,
        now: Instant,
    ) -> Self {
        Self {
            presenter,
            overlay,
            now,
        }
    }
}

/// A presentable unit of strip content.
///
/// The stack drives the four lifecycle methods; the defaulted hooks exist
/// so pages that track pointer input can receive routed events and pump
/// their deferred work without the stack knowing which pages those are.
pub trait Page {
    fn present(&mut self, cx: &mut PageContext<'_>);

    fn dismiss(&mut self, cx: &mut PageContext<'_>);

    fn minimize(&mut self, cx: &mut PageContext<'_>);

    fn is_visible(&self) -> bool;

    /// Visibility bookkeeping without re-presentation: the stack uses this
    /// to cover a page on push and restore it on pop.
    fn set_visible(&mut self, visible: bool, cx: &mut PageContext<'_>);

    fn attach_stack(&mut self, _link: StackLink) {}

    fn detach_stack(&mut self) {}

    fn handle_edge_event(&mut self, _event: EdgeEvent, _cx: &mut PageContext<'_>) -> EdgeReply {
        EdgeReply::Ignored
    }

    fn tick(&mut self, _cx: &mut PageContext<'_>) {}
}

/// Reusable base state for a page: its strip surface, its visibility flag,
/// and the non-owning link back to the stack that holds it.
#[derive(Debug)]
pub struct PageCore {
    surface: SurfaceId,
    visible: bool,
    stack: Option<StackLink>,
}

impl PageCore {
    pub fn new(surface: SurfaceId) -> Self {
        Self {
            surface,
            visible: false,
            stack: None,
        }
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn present(&mut self, cx: &mut PageContext<'_>) {
        cx.presenter.present_on_top(self.surface);
        self.visible = true;
    }

    pub fn dismiss(&mut self, cx: &mut PageContext<'_>) {
        cx.presenter.dismiss_from_top(self.surface);
        self.visible = false;
    }

    pub fn minimize(&mut self, cx: &mut PageContext<'_>) {
        cx.presenter.minimize_from_top(self.surface);
        self.visible = false;
    }

    pub fn attach_stack(&mut self, link: StackLink) {
        self.stack = Some(link);
    }

    pub fn detach_stack(&mut self) {
        self.stack = None;
    }

    pub fn stack(&self) -> Option<&StackLink> {
        self.stack.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::host::headless::{HeadlessOverlay, HeadlessPresenter, StripOp};

    #[test]
    fn core_lifecycle_flags_and_strip_calls() {
        let mut presenter = HeadlessPresenter::new();
        let mut overlay = HeadlessOverlay::new(Size::new(1000.0, 500.0));
        let mut cx = PageContext::new(&mut presenter, &mut overlay, Instant::now());

        let surface = SurfaceId(7);
        let mut core = PageCore::new(surface);
        assert!(!core.is_visible());

        core.present(&mut cx);
        assert!(core.is_visible());
        core.minimize(&mut cx);
        assert!(!core.is_visible());
        core.present(&mut cx);
        core.dismiss(&mut cx);
        assert!(!core.is_visible());

        assert_eq!(
            presenter.ops(),
            [
                StripOp::Present(surface),
                StripOp::Minimize(surface),
                StripOp::Present(surface),
                StripOp::Dismiss(surface),
            ]
        );
    }
}
