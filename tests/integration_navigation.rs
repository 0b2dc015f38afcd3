use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

use edgebar::geometry::Size;
use edgebar::host::headless::{HeadlessOverlay, HeadlessPresenter};
use edgebar::{EdgeEvent, EdgeReply, NavigationStack, Page, PageContext, PageCore, Point, StackLink, SurfaceId};

#[derive(Default)]
struct PageStats {
    presents: Cell<usize>,
    dismisses: Cell<usize>,
    minimizes: Cell<usize>,
    visible: Cell<bool>,
}

/// A plain host page that mirrors every lifecycle call into shared stats.
struct TestPage {
    core: PageCore,
    name: &'static str,
    stats: Rc<PageStats>,
    dismiss_order: Rc<RefCell<Vec<&'static str>>>,
    pop_self_on_click: bool,
}

impl TestPage {
    fn new(
        name: &'static str,
        surface: u64,
        dismiss_order: &Rc<RefCell<Vec<&'static str>>>,
    ) -> (Box<Self>, Rc<PageStats>) {
        let stats = Rc::new(PageStats::default());
        let page = Box::new(Self {
            core: PageCore::new(SurfaceId(surface)),
            name,
            stats: Rc::clone(&stats),
            dismiss_order: Rc::clone(dismiss_order),
            pop_self_on_click: false,
        });
        (page, stats)
    }
}

impl Page for TestPage {
    fn present(&mut self, cx: &mut PageContext<'_>) {
        self.core.present(cx);
        self.stats.presents.set(self.stats.presents.get() + 1);
        self.stats.visible.set(true);
    }

    fn dismiss(&mut self, cx: &mut PageContext<'_>) {
        self.core.dismiss(cx);
        self.stats.dismisses.set(self.stats.dismisses.get() + 1);
        self.stats.visible.set(false);
        self.dismiss_order.borrow_mut().push(self.name);
    }

    fn minimize(&mut self, cx: &mut PageContext<'_>) {
        self.core.minimize(cx);
        self.stats.minimizes.set(self.stats.minimizes.get() + 1);
        self.stats.visible.set(false);
    }

    fn is_visible(&self) -> bool {
        self.core.is_visible()
    }

    fn set_visible(&mut self, visible: bool, _cx: &mut PageContext<'_>) {
        self.core.set_visible(visible);
        self.stats.visible.set(visible);
    }

    fn attach_stack(&mut self, link: StackLink) {
        self.core.attach_stack(link);
    }

    fn detach_stack(&mut self) {
        self.core.detach_stack();
    }

    fn handle_edge_event(&mut self, event: EdgeEvent, _cx: &mut PageContext<'_>) -> EdgeReply {
        if self.pop_self_on_click
            && matches!(event, EdgeEvent::Clicked { .. })
            && let Some(link) = self.core.stack()
        {
            link.pop_last();
            return EdgeReply::Handled;
        }
        EdgeReply::Ignored
    }
}

struct Harness {
    presenter: HeadlessPresenter,
    overlay: HeadlessOverlay,
    now: Instant,
}

impl Harness {
    fn new() -> Self {
        Self {
            presenter: HeadlessPresenter::new(),
            overlay: HeadlessOverlay::new(Size::new(1000.0, 500.0)),
            now: Instant::now(),
        }
    }

    fn cx(&mut self) -> PageContext<'_> {
        PageContext::new(&mut self.presenter, &mut self.overlay, self.now)
    }
}

#[test]
fn push_sequence_keeps_exactly_top_visible() {
    let mut harness = Harness::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let (root, root_stats) = TestPage::new("root", 1, &order);
    let (a, a_stats) = TestPage::new("a", 2, &order);
    let (b, b_stats) = TestPage::new("b", 3, &order);

    let mut stack = NavigationStack::new(root, &mut harness.cx());
    assert!(root_stats.visible.get());

    stack.push(a, &mut harness.cx());
    stack.push(b, &mut harness.cx());

    assert_eq!(stack.len(), 3);
    assert!(b_stats.visible.get());
    assert!(!a_stats.visible.get());
    assert!(!root_stats.visible.get());
    assert!(stack.visible_controller().is_some_and(|page| page.is_visible()));

    // exactly one present per push
    assert_eq!(root_stats.presents.get(), 1);
    assert_eq!(a_stats.presents.get(), 1);
    assert_eq!(b_stats.presents.get(), 1);
}

#[test]
fn pop_restores_previous_page_without_second_present() {
    let mut harness = Harness::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let (root, _) = TestPage::new("root", 1, &order);
    let (a, a_stats) = TestPage::new("a", 2, &order);
    let (b, b_stats) = TestPage::new("b", 3, &order);

    let mut stack = NavigationStack::new(root, &mut harness.cx());
    stack.push(a, &mut harness.cx());
    stack.push(b, &mut harness.cx());

    let popped = stack.pop_last_controller(&mut harness.cx());
    assert!(popped.is_some());
    assert_eq!(b_stats.dismisses.get(), 1);
    assert!(a_stats.visible.get());
    // visibility restoration, not re-presentation
    assert_eq!(a_stats.presents.get(), 1);
}

#[test]
fn push_three_pop_twice_leaves_only_root() {
    let mut harness = Harness::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let (root, root_stats) = TestPage::new("root", 1, &order);
    let (a, a_stats) = TestPage::new("a", 2, &order);
    let (b, b_stats) = TestPage::new("b", 3, &order);

    let mut stack = NavigationStack::new(root, &mut harness.cx());
    stack.push(a, &mut harness.cx());
    stack.push(b, &mut harness.cx());
    let _ = stack.pop_last_controller(&mut harness.cx());
    let _ = stack.pop_last_controller(&mut harness.cx());

    assert_eq!(stack.len(), 1);
    assert!(root_stats.visible.get());
    assert_eq!(a_stats.dismisses.get(), 1);
    assert_eq!(b_stats.dismisses.get(), 1);
}

#[test]
fn dismiss_unwinds_innermost_first_and_is_idempotent() {
    let mut harness = Harness::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let (root, _) = TestPage::new("root", 1, &order);
    let (a, _) = TestPage::new("a", 2, &order);
    let (b, _) = TestPage::new("b", 3, &order);

    let mut stack = NavigationStack::new(root, &mut harness.cx());
    stack.push(a, &mut harness.cx());
    stack.push(b, &mut harness.cx());

    stack.dismiss(&mut harness.cx());
    assert!(stack.is_empty());
    assert!(stack.visible_controller().is_none());
    assert!(stack.root_controller().is_none());
    assert_eq!(*order.borrow(), ["b", "a", "root"]);

    // second dismissal finds nothing to do
    stack.dismiss(&mut harness.cx());
    assert_eq!(order.borrow().len(), 3);
}

#[test]
fn dismissed_pages_received_one_dismiss_even_if_covered() {
    let mut harness = Harness::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let (root, _) = TestPage::new("root", 1, &order);
    let (a, a_stats) = TestPage::new("a", 2, &order);

    let mut stack = NavigationStack::new(root, &mut harness.cx());
    stack.push(a, &mut harness.cx());
    stack.dismiss(&mut harness.cx());
    assert_eq!(a_stats.dismisses.get(), 1);
}

#[test]
fn pop_on_empty_stack_is_noop() {
    let mut harness = Harness::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let (root, _) = TestPage::new("root", 1, &order);

    let mut stack = NavigationStack::new(root, &mut harness.cx());
    stack.dismiss(&mut harness.cx());
    assert!(stack.pop_last_controller(&mut harness.cx()).is_none());
    stack.pop_to_root_controller(&mut harness.cx());
    assert!(stack.is_empty());
}

#[test]
fn pop_to_root_stops_at_the_root() {
    let mut harness = Harness::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let (root, root_stats) = TestPage::new("root", 1, &order);
    let (a, _) = TestPage::new("a", 2, &order);
    let (b, _) = TestPage::new("b", 3, &order);

    let mut stack = NavigationStack::new(root, &mut harness.cx());
    stack.push(a, &mut harness.cx());
    stack.push(b, &mut harness.cx());
    stack.pop_to_root_controller(&mut harness.cx());
    assert_eq!(stack.len(), 1);
    assert!(root_stats.visible.get());

    // already at the root: nothing happens
    stack.pop_to_root_controller(&mut harness.cx());
    assert_eq!(stack.len(), 1);
}

#[test]
fn toggle_twice_restores_root_visibility() {
    let mut harness = Harness::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let (root, root_stats) = TestPage::new("root", 1, &order);
    let (a, a_stats) = TestPage::new("a", 2, &order);

    let mut stack = NavigationStack::new(root, &mut harness.cx());
    stack.push(a, &mut harness.cx());

    stack.toggle(&mut harness.cx());
    assert!(!root_stats.visible.get());
    assert_eq!(root_stats.minimizes.get(), 1);
    assert_eq!(a_stats.minimizes.get(), 1);

    stack.toggle(&mut harness.cx());
    assert!(root_stats.visible.get());
    // stack order untouched by the session-wide pair
    assert_eq!(stack.len(), 2);
}

#[test]
fn page_pops_itself_through_its_stack_link() {
    let mut harness = Harness::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let (root, root_stats) = TestPage::new("root", 1, &order);
    let (mut a, a_stats) = TestPage::new("a", 2, &order);
    a.pop_self_on_click = true;

    let mut stack = NavigationStack::new(root, &mut harness.cx());
    stack.push(a, &mut harness.cx());

    let reply = stack.route_edge_event(
        EdgeEvent::Clicked {
            location: Point::new(10.0, 5.0),
        },
        &mut harness.cx(),
    );
    assert_eq!(reply, EdgeReply::Handled);
    // the request is queued, not executed mid-dispatch
    assert_eq!(stack.len(), 2);

    stack.run_pending(&mut harness.cx());
    assert_eq!(stack.len(), 1);
    assert_eq!(a_stats.dismisses.get(), 1);
    assert!(root_stats.visible.get());
}

#[test]
fn detached_link_requests_go_nowhere() {
    let mut harness = Harness::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let (root, _) = TestPage::new("root", 1, &order);
    let (mut a, _) = TestPage::new("a", 2, &order);
    a.pop_self_on_click = true;

    let mut stack = NavigationStack::new(root, &mut harness.cx());
    stack.push(a, &mut harness.cx());
    let mut popped = stack
        .pop_last_controller(&mut harness.cx())
        .expect("a was on top");

    // ownership came back to us; the page's link is now detached and its
    // requests are silent no-ops
    let reply = popped.handle_edge_event(
        EdgeEvent::Clicked {
            location: Point::new(1.0, 1.0),
        },
        &mut harness.cx(),
    );
    assert_eq!(reply, EdgeReply::Ignored);
    stack.run_pending(&mut harness.cx());
    assert_eq!(stack.len(), 1);
}
