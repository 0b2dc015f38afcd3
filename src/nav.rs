//! A container that defines a stack-based scheme for navigating
//! hierarchical bar content.
//!
//! The stack owns its pages outright; pages hold only a [`StackLink`] back,
//! a weak handle onto the stack's command queue. A page that wants to pop
//! itself enqueues the request and the host loop executes it on the next
//! [`NavigationStack::run_pending`], outside any page borrow.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::edge::{EdgeEvent, EdgeReply};
use crate::page::{Page, PageContext};

/// A navigation request a page may enqueue through its [`StackLink`].
pub enum StackCommand {
    Push(Box<dyn Page>),
    PopLast,
    PopToRoot,
    Dismiss,
}

impl fmt::Debug for StackCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackCommand::Push(_) => f.write_str("Push(..)"),
            StackCommand::PopLast => f.write_str("PopLast"),
            StackCommand::PopToRoot => f.write_str("PopToRoot"),
            StackCommand::Dismiss => f.write_str("Dismiss"),
        }
    }
}

type CommandQueue = Rc<RefCell<VecDeque<StackCommand>>>;

/// Non-owning link from a page back to the stack that holds it.
///
/// Submitting through a link whose stack is gone is a silent no-op, which
/// is exactly what a dangling weak back-pointer would have meant.
#[derive(Clone)]
pub struct StackLink {
    queue: Weak<RefCell<VecDeque<StackCommand>>>,
}

impl StackLink {
    pub fn push(&self, page: Box<dyn Page>) {
        self.submit(StackCommand::Push(page));
    }

    pub fn pop_last(&self) {
        self.submit(StackCommand::PopLast);
    }

    pub fn pop_to_root(&self) {
        self.submit(StackCommand::PopToRoot);
    }

    pub fn dismiss(&self) {
        self.submit(StackCommand::Dismiss);
    }

    pub fn is_attached(&self) -> bool {
        self.queue.strong_count() > 0
    }

    fn submit(&self, command: StackCommand) {
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().push_back(command);
        }
    }
}

impl fmt::Debug for StackLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackLink")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// An ordered stack of pages with exactly one visible at a time: the top.
pub struct NavigationStack {
    children: Vec<Box<dyn Page>>,
    commands: CommandQueue,
}

impl NavigationStack {
    /// Build a stack around `root`, pushing (and so presenting) it
    /// immediately.
    pub fn new(root: Box<dyn Page>, cx: &mut PageContext<'_>) -> Self {
        let mut stack = Self {
            children: Vec::new(),
            commands: Rc::new(RefCell::new(VecDeque::new())),
        };
        stack.push(root, cx);
        stack
    }

    /// Pushes a page onto the stack and updates the display. The covered
    /// page keeps its state but loses visibility; the new page gets exactly
    /// one `present` call.
    pub fn push(&mut self, mut page: Box<dyn Page>, cx: &mut PageContext<'_>) {
        if let Some(top) = self.children.last_mut() {
            top.set_visible(false, cx);
        }
        page.attach_stack(StackLink {
            queue: Rc::downgrade(&self.commands),
        });
        let index = self.children.len();
        self.children.push(page);
        tracing::debug!(depth = index + 1, "pushed bar page");
        if let Some(page) = self.children.get_mut(index) {
            page.present(cx);
        }
    }

    /// Pops the top page and updates the display, returning ownership of
    /// the popped page to the caller. The uncovered page is restored via
    /// visibility bookkeeping, not re-presented. No-op on an empty stack.
    pub fn pop_last_controller(&mut self, cx: &mut PageContext<'_>) -> Option<Box<dyn Page>> {
        let mut page = self.children.pop()?;
        page.detach_stack();
        if page.is_visible() {
            page.dismiss(cx);
        }
        if let Some(top) = self.children.last_mut() {
            top.set_visible(true, cx);
        }
        tracing::debug!(depth = self.children.len(), "popped bar page");
        Some(page)
    }

    /// Pops every page above the root. No-op when only the root remains.
    pub fn pop_to_root_controller(&mut self, cx: &mut PageContext<'_>) {
        while self.children.len() > 1 {
            let _ = self.pop_last_controller(cx);
        }
    }

    /// Fully unwinds the stack: children innermost-first, then the root.
    /// Idempotent.
    pub fn dismiss(&mut self, cx: &mut PageContext<'_>) {
        self.pop_to_root_controller(cx);
        let _ = self.pop_last_controller(cx);
        self.children.clear();
        // requests queued by pages that no longer exist
        self.commands.borrow_mut().clear();
    }

    /// Session-wide hide: minimizes every stacked page, top to bottom.
    /// Stack order and the stack's own bookkeeping are untouched.
    pub fn minimize(&mut self, cx: &mut PageContext<'_>) {
        for page in self.children.iter_mut().rev() {
            page.minimize(cx);
        }
    }

    /// Session-wide show: re-presents every stacked page, bottom to top,
    /// so the top ends up presented last.
    pub fn deminimize(&mut self, cx: &mut PageContext<'_>) {
        for page in self.children.iter_mut() {
            page.present(cx);
        }
    }

    /// Minimize when the root is visible, deminimize otherwise. Derived
    /// purely from root visibility; holds no state of its own.
    pub fn toggle(&mut self, cx: &mut PageContext<'_>) {
        if self.root_visible() {
            self.minimize(cx);
        } else {
            self.deminimize(cx);
        }
    }

    pub fn root_controller(&self) -> Option<&dyn Page> {
        self.children.first().map(|page| page.as_ref())
    }

    /// The page at the top of the stack, or `None` once the stack is empty.
    pub fn visible_controller(&self) -> Option<&dyn Page> {
        self.children.last().map(|page| page.as_ref())
    }

    pub fn visible_controller_mut(&mut self) -> Option<&mut (dyn Page + 'static)> {
        self.children.last_mut().map(|page| page.as_mut())
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Forward a raw sensor-band event to the visible page.
    pub fn route_edge_event(&mut self, event: EdgeEvent, cx: &mut PageContext<'_>) -> EdgeReply {
        match self.children.last_mut() {
            Some(page) => page.handle_edge_event(event, cx),
            None => EdgeReply::Ignored,
        }
    }

    /// Pump every page's deferred work for this turn of the host loop.
    pub fn tick(&mut self, cx: &mut PageContext<'_>) {
        for page in self.children.iter_mut() {
            page.tick(cx);
        }
    }

    /// Execute navigation requests pages have enqueued since the last turn.
    pub fn run_pending(&mut self, cx: &mut PageContext<'_>) {
        loop {
            let command = self.commands.borrow_mut().pop_front();
            match command {
                Some(StackCommand::Push(page)) => self.push(page, cx),
                Some(StackCommand::PopLast) => {
                    let _ = self.pop_last_controller(cx);
                }
                Some(StackCommand::PopToRoot) => self.pop_to_root_controller(cx),
                Some(StackCommand::Dismiss) => self.dismiss(cx),
                None => break,
            }
        }
    }

    fn root_visible(&self) -> bool {
        self.children
            .first()
            .map(|page| page.is_visible())
            .unwrap_or(false)
    }
}
