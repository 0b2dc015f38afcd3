//! Terminal simulation of the strip and its sensor band.
//!
//! The top line stands in for the hardware strip, the bottom line for the
//! sensor band at the screen's bottom edge. Mouse activity on the bottom
//! line is translated into raw edge events and routed through the
//! navigation stack exactly the way a real host loop would do it.
//!
//! Keys: p push · o pop · r pop-to-root · m toggle · d/f/x/e simulate a
//! file drag (enter/update/drop/exit) · q quit.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect as UiRect;
use ratatui::widgets::Paragraph;

use edgebar::geometry::Size;
use edgebar::host::headless::HeadlessOverlay;
use edgebar::{
    DragOperation, EdgeEvent, EdgeReply, MouseAwarePage, MouseWidget, NavigationStack,
    PageContext, Point, PresentationHost, SurfaceId,
};

/// Points per terminal cell, for mapping columns into band coordinates.
const PX_PER_CELL: f64 = 8.0;

#[derive(Parser)]
#[command(about = "Simulate the strip and sensor band in a terminal")]
struct Args {
    /// Poll interval for the event loop, in milliseconds.
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,

    /// Visible content width of each demo page, in points.
    #[arg(long, default_value_t = 480.0)]
    page_width: f64,
}

/// Strip presenter that keeps the presented surfaces in order.
#[derive(Default)]
struct StripPresenter {
    titles: HashMap<SurfaceId, String>,
    presented: Vec<SurfaceId>,
    minimized: HashSet<SurfaceId>,
}

impl StripPresenter {
    fn register(&mut self, surface: SurfaceId, title: &str) {
        self.titles.insert(surface, title.to_string());
    }

    fn top_title(&self) -> &str {
        self.presented
            .iter()
            .rev()
            .find(|surface| !self.minimized.contains(surface))
            .and_then(|surface| self.titles.get(surface))
            .map(String::as_str)
            .unwrap_or("(strip empty)")
    }
}

impl PresentationHost for StripPresenter {
    fn present_on_top(&mut self, surface: SurfaceId) {
        self.presented.retain(|s| *s != surface);
        self.presented.push(surface);
        self.minimized.remove(&surface);
    }

    fn dismiss_from_top(&mut self, surface: SurfaceId) {
        self.presented.retain(|s| *s != surface);
        self.minimized.remove(&surface);
    }

    fn minimize_from_top(&mut self, surface: SurfaceId) {
        self.minimized.insert(surface);
    }
}

/// What the band currently shows, shared with the page's widget hooks.
#[derive(Default)]
struct BandState {
    cursor_x: Option<f64>,
    drag: Option<(String, f64)>,
    clicks: usize,
    drops: Vec<String>,
}

struct DemoWidget {
    width: f64,
    state: Rc<RefCell<BandState>>,
}

impl MouseWidget for DemoWidget {
    fn visible_rect_width(&self) -> f64 {
        self.width
    }

    fn pointer_entered(&mut self, location: Point) {
        self.state.borrow_mut().cursor_x = Some(location.x);
    }

    fn pointer_moved(&mut self, location: Point) {
        self.state.borrow_mut().cursor_x = Some(location.x);
    }

    fn pointer_clicked(&mut self, _location: Point) {
        self.state.borrow_mut().clicks += 1;
    }

    fn pointer_exited(&mut self, _location: Point) {
        let mut state = self.state.borrow_mut();
        state.cursor_x = None;
        state.drag = None;
    }

    fn drag_entered(&mut self, filepath: &Path, location: Point) -> DragOperation {
        self.state.borrow_mut().drag = Some((filepath.display().to_string(), location.x));
        DragOperation::Copy
    }

    fn drag_updated(&mut self, filepath: &Path, location: Point) -> DragOperation {
        self.state.borrow_mut().drag = Some((filepath.display().to_string(), location.x));
        DragOperation::Copy
    }

    fn drag_dropped(&mut self, filepath: &Path, _location: Point) -> bool {
        self.state
            .borrow_mut()
            .drops
            .push(filepath.display().to_string());
        true
    }

    fn drag_ended(&mut self) {
        self.state.borrow_mut().drag = None;
    }
}

struct App {
    presenter: StripPresenter,
    overlay: HeadlessOverlay,
    stack: NavigationStack,
    band: Rc<RefCell<BandState>>,
    page_width: f64,
    next_surface: u64,
    pointer_inside: bool,
    drag_x: f64,
    last_reply: Option<EdgeReply>,
}

impl App {
    fn new(page_width: f64, screen: Size) -> Self {
        let band = Rc::new(RefCell::new(BandState::default()));
        let mut presenter = StripPresenter::default();
        let mut overlay = HeadlessOverlay::new(screen);
        let root_surface = SurfaceId(1);
        presenter.register(root_surface, "root");
        let root = MouseAwarePage::new(
            root_surface,
            DemoWidget {
                width: page_width,
                state: Rc::clone(&band),
            },
        );
        let stack = NavigationStack::new(
            Box::new(root),
            &mut PageContext::new(&mut presenter, &mut overlay, Instant::now()),
        );
        Self {
            presenter,
            overlay,
            stack,
            band,
            page_width,
            next_surface: 1,
            pointer_inside: false,
            drag_x: 0.0,
            last_reply: None,
        }
    }

    fn route(&mut self, event: EdgeEvent) {
        let mut cx = PageContext::new(&mut self.presenter, &mut self.overlay, Instant::now());
        self.last_reply = Some(self.stack.route_edge_event(event, &mut cx));
    }

    fn with_cx(&mut self, run: impl FnOnce(&mut NavigationStack, &mut PageContext<'_>)) {
        let mut cx = PageContext::new(&mut self.presenter, &mut self.overlay, Instant::now());
        run(&mut self.stack, &mut cx);
    }

    fn push_child(&mut self) {
        self.next_surface += 1;
        let surface = SurfaceId(self.next_surface);
        let title = format!("page {}", self.next_surface);
        self.presenter.register(surface, &title);
        let page = MouseAwarePage::new(
            surface,
            DemoWidget {
                width: self.page_width,
                state: Rc::clone(&self.band),
            },
        );
        self.with_cx(|stack, cx| stack.push(Box::new(page), cx));
    }

    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('p') => self.push_child(),
            KeyCode::Char('o') => self.with_cx(|stack, cx| {
                let _ = stack.pop_last_controller(cx);
            }),
            KeyCode::Char('r') => self.with_cx(|stack, cx| stack.pop_to_root_controller(cx)),
            KeyCode::Char('m') => self.with_cx(|stack, cx| stack.toggle(cx)),
            KeyCode::Char('d') => {
                self.drag_x = self.page_width / 3.0;
                self.route(EdgeEvent::DragEntered {
                    filepath: "/tmp/dropped-file.txt".into(),
                    location: Point::new(self.page_width / 3.0, 5.0),
                });
            }
            KeyCode::Char('f') => {
                self.drag_x += 4.0 * PX_PER_CELL;
                self.route(EdgeEvent::DragUpdated {
                    filepath: "/tmp/dropped-file.txt".into(),
                    location: Point::new(self.drag_x, 5.0),
                });
            }
            KeyCode::Char('x') => {
                self.route(EdgeEvent::Dropped {
                    filepath: "/tmp/dropped-file.txt".into(),
                    location: Point::new(self.drag_x, 5.0),
                });
                self.route(EdgeEvent::DragEnded);
            }
            KeyCode::Char('e') => self.route(EdgeEvent::DragExited { location: None }),
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, kind: MouseEventKind, column: u16, row: u16, band_row: u16) {
        let location = Point::new(column as f64 * PX_PER_CELL, 5.0);
        match kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if row == band_row {
                    if self.pointer_inside {
                        self.route(EdgeEvent::PointerMoved { location });
                    } else {
                        self.pointer_inside = true;
                        self.route(EdgeEvent::PointerEntered { location });
                    }
                } else if self.pointer_inside {
                    self.pointer_inside = false;
                    self.route(EdgeEvent::PointerExited { location });
                }
            }
            MouseEventKind::Down(MouseButton::Left) if row == band_row => {
                self.route(EdgeEvent::Clicked { location });
            }
            MouseEventKind::ScrollLeft if row == band_row => {
                self.route(EdgeEvent::Scrolled {
                    delta_x: -PX_PER_CELL,
                    location,
                });
            }
            MouseEventKind::ScrollRight if row == band_row => {
                self.route(EdgeEvent::Scrolled {
                    delta_x: PX_PER_CELL,
                    location,
                });
            }
            _ => {}
        }
    }

    fn pump(&mut self) {
        let mut cx = PageContext::new(&mut self.presenter, &mut self.overlay, Instant::now());
        self.stack.tick(&mut cx);
        self.stack.run_pending(&mut cx);
    }

    fn band_line(&self, columns: u16) -> String {
        let mut line: Vec<char> = std::iter::repeat_n('─', columns as usize).collect();
        let state = self.band.borrow();
        if let Some((_, x)) = &state.drag {
            let cell = (*x / PX_PER_CELL) as usize;
            if cell < line.len() {
                line[cell] = '▼';
            }
        } else if let Some(x) = state.cursor_x {
            let cell = (x / PX_PER_CELL) as usize;
            if cell < line.len() {
                line[cell] = '●';
            }
        }
        line.into_iter().collect()
    }

    fn strip_line(&self) -> String {
        let state = self.band.borrow();
        let mut line = format!("[ {} ]  clicks: {}", self.presenter.top_title(), state.clicks);
        if let Some((file, _)) = &state.drag {
            line.push_str(&format!("  dragging: {file}"));
        }
        if let Some(dropped) = state.drops.last() {
            line.push_str(&format!("  last drop: {dropped}"));
        }
        line
    }

    fn status_line(&self) -> String {
        format!(
            "depth: {}  reply: {:?}  |  p push · o pop · r root · m toggle · d/f/x/e drag · q quit",
            self.stack.len(),
            self.last_reply,
        )
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    edgebar::logging::init_default();

    let (columns, rows) = terminal::size()?;
    let screen = Size::new(columns as f64 * PX_PER_CELL, rows as f64 * PX_PER_CELL);
    let mut app = App::new(args.page_width, screen);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, Duration::from_millis(args.tick_ms));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    poll_interval: Duration,
) -> io::Result<()> {
    loop {
        app.pump();

        terminal.draw(|frame| {
            let area = frame.area();
            if area.height < 3 || area.width == 0 {
                return;
            }
            let band_row = area.height - 1;
            frame.render_widget(
                Paragraph::new(app.strip_line()),
                UiRect::new(0, 0, area.width, 1),
            );
            frame.render_widget(
                Paragraph::new(app.status_line()),
                UiRect::new(0, 1, area.width, 1),
            );
            frame.render_widget(
                Paragraph::new(app.band_line(area.width)),
                UiRect::new(0, band_row, area.width, 1),
            );
        })?;

        if !event::poll(poll_interval)? {
            continue;
        }
        let band_row = terminal.size()?.height.saturating_sub(1);
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key.code) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                app.handle_mouse(mouse.kind, mouse.column, mouse.row, band_row);
            }
            _ => {}
        }
    }
}
