mod input;
mod logging;
mod page;
mod view;

use std::io::stdout;
use std::time::{Duration, Instant};

use chrono::{Datelike, Local, Timelike};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use folio_background::{ParticleField, TerminalCanvas};
use folio_config::Config;
use folio_core::{Rect as PageRect, Vec2};
use folio_effects::counter::{Counter, CounterTimer};
use folio_effects::konami::{KonamiDetector, Rainbow};
use folio_effects::nav::{self, MenuState};
use folio_effects::reveal::VisibilityWatch;
use folio_effects::scroll::{self, Focus, Shortcut, SmoothScroll};
use folio_effects::tilt::{card_tilt, cursor_glow, project_tilt};
use folio_effects::typewriter::Typewriter;
use folio_effects::{Transform, a11y};
use ratatui::{DefaultTerminal, Frame, layout::Rect};
use tracing::{debug, info, warn};

use page::{Hover, NAV_ROWS, Page};
use view::{BlockContext, NavHit, Palette};

/// Rows scrolled per wheel notch.
const WHEEL_ROWS: f32 = 3.0;

/// Radius of the cursor glow in cells.
const GLOW_RADIUS: i32 = 2;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let log_path = logging::init(&config.logging)?;
    info!(log = ?log_path, "starting folio");

    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;
    let result = App::new(config).run(terminal);
    if let Err(err) = execute!(stdout(), DisableMouseCapture) {
        warn!(%err, "failed to disable mouse capture");
    }
    ratatui::restore();
    result
}

/// Paces `update` and `draw` to the configured frame rate regardless of
/// how many input events arrive in between.
#[derive(Debug, Clone, Copy)]
struct FrameClock {
    interval: Duration,
    next: Instant,
}

impl FrameClock {
    fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now,
        }
    }

    /// Whether a frame is due at `now`. Consumes the deadline when it is.
    fn due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next = now + self.interval;
        true
    }

    /// Time left until the next frame.
    fn timeout(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }
}

/// Counter state of one stat.
#[derive(Debug)]
struct StatState {
    /// Value as written in the profile.
    value: String,
    /// Fires once when the stat scrolls into view.
    watch: VisibilityWatch,
    /// Running or finished counter once triggered.
    timer: Option<CounterTimer>,
}

impl StatState {
    fn label(&self) -> String {
        match &self.timer {
            Some(timer) => timer.counter().label().to_string(),
            None => self.value.clone(),
        }
    }
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    page: Page,
    /// Animated particle background.
    field: ParticleField<TerminalCanvas>,
    /// Time the page was opened.
    started: Instant,
    /// Time of the previous update in milliseconds since start.
    last_update_ms: u64,
    /// Whether the load time has been logged.
    load_logged: bool,
    /// Terminal size in cells.
    cols: u16,
    rows: u16,
    /// Document scroll offset in page pixels.
    scroll_y: f32,
    /// In-flight smooth scroll.
    smooth: Option<SmoothScroll>,
    /// Section whose nav link is highlighted.
    active: Option<String>,
    menu: MenuState,
    /// One reveal watch per section.
    reveals: Vec<VisibilityWatch>,
    stats: Vec<StatState>,
    konami: KonamiDetector,
    rainbow: Rainbow,
    typewriter: Option<Typewriter>,
    /// Pointer position in viewport pixels.
    pointer: Option<Vec2>,
    /// Clickable nav regions from the last frame.
    nav_hits: Vec<(u16, NavHit)>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let display = &config.display;
        let page = Page::build(&config.profile, display.cell_width, display.cell_height);
        let canvas = TerminalCanvas::new(display.cell_width, display.cell_height, display.background);
        let field = ParticleField::new(config.particles.clone(), canvas);

        let reveals = page
            .sections()
            .iter()
            .map(|_| VisibilityWatch::reveal())
            .collect();
        let stats = config
            .profile
            .stats
            .iter()
            .map(|stat| StatState {
                value: stat.value.clone(),
                watch: VisibilityWatch::stats(),
                timer: None,
            })
            .collect();
        let typewriter = config
            .effects
            .typewriter
            .then(|| Typewriter::new(config.profile.tagline.clone(), config.effects.typewriter_speed_ms));

        Self {
            running: false,
            page,
            field,
            started: Instant::now(),
            last_update_ms: 0,
            load_logged: false,
            cols: 0,
            rows: 0,
            scroll_y: 0.0,
            smooth: None,
            active: None,
            menu: MenuState::default(),
            reveals,
            stats,
            konami: KonamiDetector::new(),
            rainbow: Rainbow::default(),
            typewriter,
            pointer: None,
            nav_hits: Vec::new(),
            config,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.on_resize(size.width, size.height);
        self.field.initialize(self.config.particles.count);
        self.log_welcome();

        let interval = Duration::from_millis(self.config.frame_interval_ms());
        let mut clock = FrameClock::new(interval, Instant::now());
        self.running = true;
        while self.running {
            if clock.due(Instant::now()) {
                self.update();
                terminal.draw(|frame| self.render(frame))?;
                if !self.load_logged {
                    self.load_logged = true;
                    info!(elapsed_ms = self.now_ms(), "page loaded");
                }
            }
            self.handle_crossterm_events(clock.timeout(Instant::now()))?;
        }
        info!("exiting");
        Ok(())
    }

    fn log_welcome(&self) {
        info!("welcome to {}'s portfolio", self.config.profile.name);
        if let Some(overrides) = a11y::motion_overrides(self.config.accessibility.motion) {
            info!(?overrides, "reduced motion enabled");
        }
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Content viewport size in page pixels (below the nav bar).
    fn viewport_px(&self) -> (f32, f32) {
        let display = &self.config.display;
        let width = self.cols as f32 * display.cell_width as f32;
        let height = self.rows.saturating_sub(NAV_ROWS) as f32 * display.cell_height as f32;
        (width, height)
    }

    fn nav_height_px(&self) -> f32 {
        NAV_ROWS as f32 * self.config.display.cell_height as f32
    }

    /// First page row drawn at the top of the content area.
    fn first_row(&self) -> usize {
        (self.scroll_y / self.page.row_height()).floor() as usize
    }

    /// The part of the page currently drawn, in page pixels.
    fn visible_rect(&self) -> PageRect {
        let (width, height) = self.viewport_px();
        let top = self.first_row() as f32 * self.page.row_height();
        PageRect::new(0.0, top, width, height)
    }

    fn max_scroll(&self) -> f32 {
        let (_, height) = self.viewport_px();
        (self.page.height() - height).max(0.0)
    }

    /// Advance timers and effects by one frame.
    fn update(&mut self) {
        let now = self.now_ms();
        let delta_ms = now.saturating_sub(self.last_update_ms);
        self.last_update_ms = now;

        if let Some(smooth) = self.smooth {
            self.scroll_y = smooth.offset_at(now).clamp(0.0, self.max_scroll());
            if smooth.is_finished(now) {
                self.smooth = None;
            }
        }

        let bounds = self.page.section_bounds();
        if let Some(id) = nav::active_section(self.scroll_y, &bounds) {
            if self.active.as_deref() != Some(id) {
                debug!(section = id, "active section changed");
                self.active = Some(id.to_string());
            }
        }

        for stat in &mut self.stats {
            if let Some(timer) = &mut stat.timer {
                timer.advance(delta_ms);
            }
        }
        self.check_visibility();

        if let Some(typewriter) = &mut self.typewriter {
            typewriter.advance(delta_ms);
        }

        let hue = self.rainbow.hue_at(now).unwrap_or(0.0);
        self.field.set_hue_rotation(hue);
        self.field.tick();
    }

    /// Fire reveal and counter watches for elements now in view.
    fn check_visibility(&mut self) {
        let viewport = self.visible_rect();
        let width = viewport.width;

        for (index, watch) in self.reveals.iter_mut().enumerate() {
            let Some(rect) = self.page.section_rect(index, width) else {
                continue;
            };
            if watch.check(rect, viewport) {
                debug!(section = self.page.sections()[index].id, "section revealed");
            }
        }

        let reduced = self.config.accessibility.motion.is_reduced();
        for (index, stat) in self.stats.iter_mut().enumerate() {
            let Some(rect) = self.page.stat_rect(index) else {
                continue;
            };
            if stat.watch.check(rect, viewport) && !reduced {
                debug!(value = %stat.value, "starting counter");
                stat.timer = Some(CounterTimer::new(Counter::from_label(&stat.value)));
            }
        }
    }

    /// Document-space point under the pointer, if it is over the content.
    fn pointer_on_page(&self) -> Option<Vec2> {
        let pointer = self.pointer?;
        let nav_px = self.nav_height_px();
        if pointer.y < nav_px {
            return None;
        }
        let top = self.visible_rect().top;
        Some(Vec2::new(pointer.x, top + pointer.y - nav_px))
    }

    /// Element under the pointer with the transform it should show.
    fn hover(&self) -> Option<(Hover, Transform)> {
        let point = self.pointer_on_page()?;
        let hover = self.page.hover_at(point, self.cols)?;
        let transform = match hover {
            Hover::AboutCard(rect) => card_tilt(rect, point),
            Hover::Project(_, rect) => project_tilt(rect, point),
            Hover::Skill(_) | Hover::Memory(_) => Transform::IDENTITY,
        };
        Some((hover, transform))
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let now = self.now_ms();
        let hue = self.rainbow.hue_at(now).unwrap_or(0.0);
        let palette = Palette::new(&self.config.display, hue);

        self.field.surface().render(frame, area);
        self.render_glow(frame, palette);
        self.render_content(frame, area, palette);
        self.render_nav(frame, area, palette);
    }

    fn render_glow(&self, frame: &mut Frame, palette: Palette) {
        let Some(pointer) = self.pointer else {
            return;
        };
        let display = &self.config.display;
        let glow = cursor_glow(pointer);
        let col = (glow.x / display.cell_width as f32) as i32;
        let row = (glow.y / display.cell_height as f32) as i32;
        let color = palette.highlight.with_alpha(0.12).over(display.background);

        let buf = frame.buffer_mut();
        for dy in -1..=1 {
            for dx in -GLOW_RADIUS..=GLOW_RADIUS {
                let (x, y) = (col + dx, row + dy);
                if x < 0 || y < 0 {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
                    cell.set_bg(color.color());
                }
            }
        }
    }

    fn render_content(&self, frame: &mut Frame, area: Rect, palette: Palette) {
        let now = Local::now();
        let greeting = match now.hour() {
            5..=11 => "Good morning,",
            12..=17 => "Good afternoon,",
            _ => "Good evening,",
        };
        let tagline = match &self.typewriter {
            Some(typewriter) => typewriter.visible(),
            None => self.config.profile.tagline.as_str(),
        };
        let stat_labels: Vec<String> = self.stats.iter().map(StatState::label).collect();

        let mut ctx = BlockContext {
            profile: &self.config.profile,
            palette,
            cols: area.width,
            revealed: true,
            stat_labels: &stat_labels,
            tagline,
            greeting,
            year: now.year(),
            hover: self.hover(),
        };

        let first_row = self.first_row();
        let content_rows = area.height.saturating_sub(NAV_ROWS);
        for offset in 0..content_rows {
            let row = first_row + offset as usize;
            let Some(block) = self.page.blocks().get(row) else {
                break;
            };
            ctx.revealed = self
                .page
                .section_of(row)
                .is_none_or(|s| !self.page.sections()[s].reveal || self.reveals[s].has_fired());
            let Some((x, line)) = ctx.line(block) else {
                continue;
            };
            if x >= area.width {
                continue;
            }
            let rect = Rect::new(area.x + x, area.y + NAV_ROWS + offset, area.width - x, 1);
            frame.render_widget(line, rect);
        }
    }

    fn render_nav(&mut self, frame: &mut Frame, area: Rect, palette: Palette) {
        let (width_px, _) = self.viewport_px();
        let bar = view::nav_bar(
            &self.page,
            &self.config.profile.name,
            self.active.as_deref(),
            nav::is_scrolled(self.scroll_y),
            width_px <= nav::MOBILE_BREAKPOINT,
            &self.menu,
            palette,
        );
        for (row, line) in bar.lines.into_iter().enumerate().take(area.height as usize) {
            let rect = Rect::new(area.x, area.y + row as u16, area.width, 1);
            frame.render_widget(line, rect);
        }
        self.nav_hits = bar.hits;
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most `timeout`, then drains whatever is queued.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if self.konami.push(input::konami_key(&key)) {
            let now = self.now_ms();
            self.rainbow.activate(now);
        }

        if let Some(index) = input::nav_index(&key) {
            self.follow_link(index);
            return;
        }

        let row = self.page.row_height();
        let (_, page_height) = self.viewport_px();
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('m')) => self.menu.toggle(),
            (_, KeyCode::Up | KeyCode::Char('k')) => self.scroll_by(-row),
            (_, KeyCode::Down | KeyCode::Char('j')) => self.scroll_by(row),
            (_, KeyCode::PageUp) => self.scroll_by(-page_height),
            (_, KeyCode::PageDown | KeyCode::Char(' ')) => self.scroll_by(page_height),
            (_, KeyCode::Home) => self.scroll_to(0.0),
            (_, KeyCode::End) => self.scroll_to(self.max_scroll()),
            (_, KeyCode::Char(c)) => {
                match scroll::shortcut(c, input::modifiers(&key), Focus::Page) {
                    Some(Shortcut::Home) => self.scroll_to(0.0),
                    Some(Shortcut::Contact) => self.follow_anchor("#contact"),
                    None => {}
                }
            }
            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let display = &self.config.display;
        let row = self.page.row_height();
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer = Some(Vec2::new(
                    (mouse.column as f32 + 0.5) * display.cell_width as f32,
                    (mouse.row as f32 + 0.5) * display.cell_height as f32,
                ));
            }
            MouseEventKind::ScrollUp => self.scroll_by(-row * WHEEL_ROWS),
            MouseEventKind::ScrollDown => self.scroll_by(row * WHEEL_ROWS),
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self.nav_hits.iter().find(|(r, (col, width, _))| {
                    *r == mouse.row && mouse.column >= *col && mouse.column < col + width
                });
                if let Some(&(_, (_, _, index))) = hit {
                    self.follow_link(index);
                }
            }
            _ => {}
        }
    }

    /// Viewport resized: match the particle surface to the new size.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        let (width, height) = self.field.surface().pixel_size(cols, rows);
        self.field.resize(width, height);
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll());
    }

    /// Follow the nav link of section `index`.
    fn follow_link(&mut self, index: usize) {
        let Some(section) = self.page.sections().get(index) else {
            return;
        };
        let href = format!("#{}", section.id);
        self.follow_anchor(&href);
        let (width_px, _) = self.viewport_px();
        self.menu.on_link_click(width_px);
    }

    fn follow_anchor(&mut self, href: &str) {
        let bounds = self.page.section_bounds();
        // The content area already starts below the nav bar
        if let Some(target) = scroll::anchor_target(href, &bounds, 0.0) {
            debug!(href, target, "scrolling to anchor");
            self.scroll_to(target);
        }
    }

    /// Start a smooth scroll to `target`.
    fn scroll_to(&mut self, target: f32) {
        let target = target.clamp(0.0, self.max_scroll());
        self.smooth = Some(SmoothScroll::new(
            self.scroll_y,
            target,
            self.now_ms(),
            self.config.accessibility.motion,
        ));
    }

    /// Scroll immediately by `delta` pixels, cancelling any smooth scroll.
    fn scroll_by(&mut self, delta: f32) {
        self.smooth = None;
        self.scroll_y = (self.scroll_y + delta).clamp(0.0, self.max_scroll());
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::MotionPreference;

    fn app() -> App {
        let mut config = Config::default();
        config.particles.seed = Some(1);
        let mut app = App::new(config);
        app.on_resize(100, 30);
        app.field.initialize(app.config.particles.count);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent::from(code));
    }

    #[test]
    fn test_resize_sizes_particle_surface() {
        let app = app();
        assert_eq!(app.field.size(), (800, 480));
        assert_eq!(app.field.particles().len(), 80);
        assert_eq!(app.viewport_px(), (800.0, 28.0 * 16.0));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll_y, 0.0);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.scroll_y, 16.0);
        app.scroll_by(1_000_000.0);
        assert_eq!(app.scroll_y, app.max_scroll());
    }

    #[test]
    fn test_contact_shortcut_scrolls_to_contact() {
        let mut app = app();
        app.config.accessibility.motion = MotionPreference::Reduce;
        press(&mut app, KeyCode::Char('c'));
        let contact = app.page.section_bounds()[4].offset_top;
        let expected = contact.clamp(0.0, app.max_scroll());
        assert_eq!(app.smooth.map(|s| s.target()), Some(expected));
        app.update();
        assert_eq!(app.scroll_y, expected);
        assert!(app.smooth.is_none());
    }

    #[test]
    fn test_nav_key_lands_on_section_heading() {
        let mut app = app();
        app.config.accessibility.motion = MotionPreference::Reduce;
        app.on_resize(100, 20);
        press(&mut app, KeyCode::Char('3'));
        app.update();
        assert_eq!(
            app.page.blocks()[app.first_row()],
            page::Block::Heading("Skills".to_string())
        );
    }

    #[test]
    fn test_frame_clock_ignores_event_bursts() {
        let start = Instant::now();
        let mut clock = FrameClock::new(Duration::from_millis(16), start);
        let frames = [0, 2, 3, 5, 9, 14, 15]
            .into_iter()
            .filter(|&ms| clock.due(start + Duration::from_millis(ms)))
            .count();
        assert_eq!(frames, 1);
        assert_eq!(
            clock.timeout(start + Duration::from_millis(10)),
            Duration::from_millis(6)
        );
        assert!(clock.due(start + Duration::from_millis(16)));
        assert_eq!(clock.timeout(start + Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn test_input_events_do_not_advance_particles() {
        let mut app = app();
        let before = app.field.particles().to_vec();
        for column in 0..20 {
            app.on_mouse_event(MouseEvent {
                kind: MouseEventKind::Moved,
                column,
                row: 5,
                modifiers: KeyModifiers::NONE,
            });
        }
        press(&mut app, KeyCode::Down);
        assert_eq!(app.field.particles(), &before[..]);
    }

    #[test]
    fn test_visible_rect_snaps_to_drawn_rows() {
        let mut app = app();
        app.scroll_y = 3.0 * 16.0 + 10.0;
        assert_eq!(app.first_row(), 3);
        let visible = app.visible_rect();
        assert_eq!(visible.top, 48.0);
        assert_eq!(visible.height, 28.0 * 16.0);

        app.pointer = Some(Vec2::new(8.0, 2.5 * 16.0));
        assert_eq!(app.pointer_on_page(), Some(Vec2::new(8.0, 56.0)));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.running = true;
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);

        app.running = true;
        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_konami_starts_rainbow() {
        let mut app = app();
        for code in [
            KeyCode::Up,
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Char('b'),
            KeyCode::Char('a'),
        ] {
            press(&mut app, code);
        }
        assert!(app.rainbow.is_active());
    }

    #[test]
    fn test_menu_key_toggles() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        assert!(app.menu.is_open());
        // 800px wide is a narrow viewport, following a link closes the menu
        press(&mut app, KeyCode::Char('2'));
        assert!(!app.menu.is_open());
    }

    #[test]
    fn test_stats_start_counting_when_visible() {
        let mut app = app();
        app.update();
        assert!(app.stats.iter().all(|s| s.watch.has_fired()));
        assert_eq!(app.stats[0].label(), "0%");
        assert_eq!(app.stats[1].label(), "0");
        // labels the counter cannot animate stay as written
        assert_eq!(app.stats[2].label(), "24/7");
    }

    #[test]
    fn test_reduced_motion_skips_counters() {
        let mut config = Config::default();
        config.accessibility.motion = MotionPreference::Reduce;
        let mut app = App::new(config);
        app.on_resize(100, 30);
        app.update();
        assert!(app.stats[0].watch.has_fired());
        assert_eq!(app.stats[0].label(), "40%");
    }

    #[test]
    fn test_hover_over_project_card_tilts() {
        let mut app = app();
        let row = app
            .page
            .blocks()
            .iter()
            .position(|b| matches!(b, page::Block::Project { .. }))
            .unwrap();
        // first project row at the top of the content area
        app.scroll_y = row as f32 * app.page.row_height();
        app.on_mouse_event(MouseEvent {
            kind: MouseEventKind::Moved,
            column: page::INDENT + 1,
            row: NAV_ROWS,
            modifiers: KeyModifiers::NONE,
        });
        match app.hover() {
            Some((Hover::Project(0, _), transform)) => {
                assert_eq!(transform.translate, (0.0, -10.0));
                assert!(transform.rotate_y > 0.0);
            }
            other => panic!("unexpected hover {other:?}"),
        }
    }
}
