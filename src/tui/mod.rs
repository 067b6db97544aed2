//! TUI module for miadash
//!
//! Terminal rendition of the dashboard shell over the same core as the
//! desktop window. Input arrives through the threaded `EventHandler`; all
//! state lives on the main thread.

mod event;
mod terminal;

pub use event::{Event, EventHandler};
pub use terminal::Tui;

use crate::DashResult;
use crate::animation::Animation;
use crate::config::Config;
use crate::content::{StatusInfo, chart_series};
use crate::dashboard::Dashboard;
use crate::enhance::{ChartPanel, ChartPeriod};
use crate::format::{format_clock_seconds, format_datetime};
use crate::modules::{MODULES, ModuleId};
use crate::notify::Notification;
use crate::shell::{Key, KeyPress, ShellAction, ShellState};
use crate::themes::{ThemeTokens, palette};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Sparkline, Wrap},
};
use std::time::{Duration, Instant};

const SIDEBAR_WIDTH: u16 = 34;
const SIDEBAR_COLLAPSED_WIDTH: u16 = 8;
const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Keyboard input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum InputMode {
    Normal,
    /// Typing into the sidebar search
    Search,
}

pub struct TuiApp {
    shell: ShellState,
    dashboard: Dashboard,
    status: StatusInfo,
    running: bool,
    show_help: bool,
    input_mode: InputMode,
    /// Terminal sends Ctrl+digit as raw control bytes
    legacy_keys: bool,
}

impl TuiApp {
    pub fn new(config: &Config, now: Instant) -> Self {
        let shell = ShellState::from_config(config);
        let dashboard = Dashboard::new(config, shell.active(), now);
        Self {
            shell,
            dashboard,
            status: StatusInfo::default(),
            running: true,
            show_help: false,
            input_mode: InputMode::Normal,
            legacy_keys: false,
        }
    }

    /// Run the TUI main loop
    pub fn run(&mut self) -> DashResult<()> {
        let mut tui = Tui::init()?;
        self.legacy_keys = !tui.keyboard_enhanced();
        let events = EventHandler::new(100); // 100ms tick rate
        tracing::info!(module = self.shell.active().as_str(), "terminal dashboard started");

        while self.running {
            if let Some(event) = events.next_timeout(Duration::from_millis(16)) {
                self.handle_event(event, Instant::now());
                while let Some(event) = events.try_next() {
                    self.handle_event(event, Instant::now());
                }
            }

            let now = Instant::now();
            self.tick(now);
            tui.terminal().draw(|f| self.draw(f, now))?;
        }

        tui.exit()?;
        tracing::info!("terminal dashboard closed");
        Ok(())
    }

    fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Tick | Event::Resize(_, _) => {}
        }
    }

    fn tick(&mut self, now: Instant) {
        self.shell.tick(now);
        self.dashboard.tick(now);
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.running = false;
            return;
        }

        if self.input_mode == InputMode::Search {
            self.handle_search_input(key.code, now);
            return;
        }

        // Esc doubles as legacy Ctrl+3, so an open help popup takes it first
        if self.show_help && key.code == KeyCode::Esc {
            self.show_help = false;
            return;
        }

        if let Some(action) = self.shell.handle_key(to_key_press(key, self.legacy_keys)) {
            if let ShellAction::Selected(id) = action {
                self.dashboard.sync_module(id);
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') | KeyCode::F(1) => self.show_help = !self.show_help,
            KeyCode::Char('b') => {
                self.shell.toggle_sidebar();
            }
            KeyCode::Char('t') => {
                self.shell.toggle_theme();
            }
            KeyCode::Char('x') => {
                self.dashboard.notifications.dismiss_oldest(now);
            }
            KeyCode::Char('r') => self.dashboard.start_refresh(now),
            KeyCode::Char('p') => self.cycle_chart_period(now),
            KeyCode::Char('/') => self.input_mode = InputMode::Search,
            KeyCode::Tab => self.step_module(1),
            KeyCode::BackTab => self.step_module(MODULES.len() - 1),
            _ => {}
        }
    }

    fn handle_search_input(&mut self, code: KeyCode, now: Instant) {
        let mut text = self.shell.search_input().to_string();
        match code {
            KeyCode::Esc => {
                text.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                text.pop();
            }
            KeyCode::Char(c) => text.push(c),
            _ => {}
        }
        self.shell.set_search_input(text, now);
    }

    /// Move the selection `step` places forward through the eight modules
    fn step_module(&mut self, step: usize) {
        let next = ModuleId::ALL[(self.shell.active().index() + step) % ModuleId::ALL.len()];
        self.shell.select(next);
        self.dashboard.sync_module(next);
    }

    /// Advance every chart on the page to the next period
    fn cycle_chart_period(&mut self, now: Instant) {
        let targets: Vec<(String, ChartPeriod)> = self
            .dashboard
            .panel()
            .page
            .charts()
            .iter()
            .map(|chart| (chart.id.clone(), next_period(chart.period())))
            .collect();
        for (id, period) in targets {
            self.dashboard.select_chart_period(&id, period, now);
        }
    }

    fn draw(&self, f: &mut Frame, now: Instant) {
        let area = f.area();
        let tokens = self.shell.tokens();
        f.render_widget(Block::default().style(base_style(&tokens)), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(10),   // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        self.draw_header(f, chunks[0], &tokens);

        let sidebar_width = if self.shell.sidebar_collapsed() {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            SIDEBAR_WIDTH
        };
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(20)])
            .split(chunks[1]);
        self.draw_sidebar(f, body[0], &tokens);
        self.draw_content(f, body[1], &tokens);
        self.draw_status_bar(f, chunks[2], &tokens);

        self.draw_toasts(f, area, &tokens, now);
        if let Some(since) = self.dashboard.loader.shown_since() {
            self.draw_loader(f, area, &tokens, now.saturating_duration_since(since));
        }
        if self.show_help {
            self.draw_help(f, area, &tokens);
        }
    }

    fn draw_header(&self, f: &mut Frame, area: Rect, tokens: &ThemeTokens) {
        let module = self.shell.active_descriptor();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(tokens.border.to_ratatui()));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", module.title),
                Style::default()
                    .fg(module.color.from.to_ratatui())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(module.subtitle, Style::default().fg(tokens.text.muted.to_ratatui())),
        ]);
        f.render_widget(Paragraph::new(title), inner);

        let search = match (self.input_mode, self.shell.search_input()) {
            (InputMode::Search, text) => format!("/{}_", text),
            (InputMode::Normal, "") => String::new(),
            (InputMode::Normal, text) => format!("/{}", text),
        };
        let status = Line::from(vec![
            Span::styled(search, Style::default().fg(tokens.text.secondary.to_ratatui())),
            Span::raw("  "),
            Span::styled(
                format!("🔔 {}", self.dashboard.feed.len()),
                Style::default().fg(palette::BADGE.to_ratatui()),
            ),
            Span::raw("  "),
            Span::styled("● Online", Style::default().fg(palette::ONLINE.to_ratatui())),
            Span::raw("  "),
            Span::styled(
                if self.shell.is_fullscreen() { "[fullscreen] " } else { "" },
                Style::default().fg(tokens.text.muted.to_ratatui()),
            ),
            Span::styled(
                format!("{} ", self.shell.theme().name()),
                Style::default().fg(tokens.text.muted.to_ratatui()),
            ),
        ]);
        f.render_widget(Paragraph::new(status).alignment(Alignment::Right), inner);
    }

    fn draw_sidebar(&self, f: &mut Frame, area: Rect, tokens: &ThemeTokens) {
        let collapsed = self.shell.sidebar_collapsed();
        let items: Vec<ListItem> = self
            .shell
            .sidebar_modules()
            .map(|module| {
                let active = self.shell.is_active(module.id);
                let marker = if active { "▌" } else { " " };
                let title_style = if active {
                    Style::default()
                        .fg(module.color.from.to_ratatui())
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(tokens.text.secondary.to_ratatui())
                };

                let mut spans = vec![
                    Span::styled(marker, Style::default().fg(module.color.from.to_ratatui())),
                    Span::styled(format!("{} ", module.shortcut), Style::default().fg(tokens.text.muted.to_ratatui())),
                ];
                if !collapsed {
                    spans.push(Span::styled(module.title, title_style));
                }
                if let Some(badge) = module.badge_label() {
                    spans.push(Span::styled(
                        format!(" {}", badge),
                        Style::default().fg(palette::BADGE.to_ratatui()).add_modifier(Modifier::BOLD),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let title = if collapsed { " MIA " } else { " MIA Dashboard " };
        let list = List::new(items).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(tokens.border.to_ratatui())),
        );
        f.render_widget(list, area);
    }

    fn draw_content(&self, f: &mut Frame, area: Rect, tokens: &ThemeTokens) {
        let panel = self.dashboard.panel();
        let block = Block::default()
            .title(format!(" {} {} ", panel.emoji, panel.heading))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(tokens.accent.from.to_ratatui()));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let metrics = panel.page.metrics();
        let charts = panel.page.charts();
        let mut constraints = vec![Constraint::Length(3)];
        if !metrics.is_empty() {
            constraints.push(Constraint::Length(5));
        }
        constraints.extend(charts.iter().map(|_| Constraint::Length(8)));
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let description = Paragraph::new(panel.description)
            .style(Style::default().fg(tokens.text.secondary.to_ratatui()))
            .wrap(Wrap { trim: true });
        f.render_widget(description, rows[0]);

        let mut row = 1;
        if !metrics.is_empty() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(metrics.iter().map(|_| Constraint::Ratio(1, metrics.len() as u32)))
                .split(rows[row]);
            for (metric, column) in metrics.iter().zip(columns.iter()) {
                let accent = metric.theme().map(|t| t.color()).unwrap_or(tokens.border);
                let change = if metric.is_positive() {
                    palette::SUCCESS
                } else {
                    palette::DANGER
                };
                let text = vec![
                    Line::from(Span::styled(
                        metric.value.clone(),
                        Style::default()
                            .fg(tokens.text.primary.to_ratatui())
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(metric.change.clone(), Style::default().fg(change.to_ratatui()))),
                ];
                let card = Paragraph::new(text).block(
                    Block::default()
                        .title(format!(" {} ", metric.display_label()))
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(accent.to_ratatui())),
                );
                f.render_widget(card, *column);
            }
            row += 1;
        }

        for chart in charts {
            draw_chart(f, rows[row], chart, tokens);
            row += 1;
        }
    }

    fn draw_status_bar(&self, f: &mut Frame, area: Rect, tokens: &ThemeTokens) {
        let info = &self.status;
        let text = format!(
            " {} · Last update: {} · Server: {} · Latency: {}ms · Memory: {}% · {} ",
            info.product,
            format_datetime(self.dashboard.last_update()),
            info.server,
            info.latency_ms,
            info.memory_percent,
            format_clock_seconds(&chrono::Local::now()),
        );
        let bar = Paragraph::new(text).style(
            Style::default()
                .fg(tokens.text.muted.to_ratatui())
                .bg(tokens.surface.to_ratatui()),
        );
        f.render_widget(bar, area);
    }

    fn draw_toasts(&self, f: &mut Frame, area: Rect, tokens: &ThemeTokens, now: Instant) {
        for (i, toast) in self.dashboard.notifications.visible().enumerate() {
            let y = area.y + 3 + i as u16 * TOAST_HEIGHT;
            if y + TOAST_HEIGHT > area.bottom() {
                break;
            }
            let frame = toast.frame(now, f32::from(TOAST_WIDTH));
            let shift = frame.offset_x.round().max(0.0) as u16;
            let x = area.right().saturating_sub(TOAST_WIDTH + 1).saturating_add(shift);
            let rect = Rect::new(x, y, TOAST_WIDTH, TOAST_HEIGHT).intersection(area);
            if rect.width < 4 {
                continue;
            }
            f.render_widget(Clear, rect);
            f.render_widget(toast_widget(toast, tokens, now), rect);
        }
    }

    fn draw_loader(&self, f: &mut Frame, area: Rect, tokens: &ThemeTokens, elapsed: Duration) {
        let rotation = Animation::Spin.frame(elapsed).rotation;
        let step = (rotation / std::f32::consts::TAU * SPINNER.len() as f32) as usize % SPINNER.len();
        let popup = centered(area, 36, 5);
        f.render_widget(Clear, popup);

        let mut lines = vec![Line::from(Span::styled(
            SPINNER[step],
            Style::default().fg(palette::PRIMARY.to_ratatui()).add_modifier(Modifier::BOLD),
        ))];
        if let Some(message) = self.dashboard.loader.message() {
            lines.push(Line::from(message.to_string()));
        }
        let loader = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette::PRIMARY.to_ratatui()))
                .style(Style::default().bg(tokens.surface.to_ratatui())),
        );
        f.render_widget(loader, popup);
    }

    fn draw_help(&self, f: &mut Frame, area: Rect, tokens: &ThemeTokens) {
        let popup = centered(area, 52, 18);
        f.render_widget(Clear, popup);

        let help_text = r#"
 Keyboard Shortcuts

   Ctrl+1..8    Jump to module
                (Ctrl+1 needs a kitty-protocol terminal)
   Tab          Next module
   Shift+Tab    Previous module
   F11          Toggle fullscreen
   b            Collapse sidebar
   t            Toggle theme
   /            Search modules
   p            Next chart period
   r            Refresh data
   x            Dismiss oldest notification
   q, Ctrl+C    Quit
"#;

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(tokens.accent.from.to_ratatui())),
            )
            .style(base_style(tokens));
        f.render_widget(help, popup);
    }
}

fn base_style(tokens: &ThemeTokens) -> Style {
    Style::default()
        .fg(tokens.text.primary.to_ratatui())
        .bg(tokens.background.to_ratatui())
}

fn draw_chart(f: &mut Frame, area: Rect, chart: &ChartPanel, tokens: &ThemeTokens) {
    let mut title = vec![Span::styled(
        format!(" {} ", chart.title),
        Style::default().fg(tokens.text.primary.to_ratatui()),
    )];
    if let Some(toolbar) = chart.toolbar() {
        for period in ChartPeriod::ALL {
            let style = if period == toolbar.active {
                Style::default()
                    .fg(tokens.accent.from.to_ratatui())
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(tokens.text.muted.to_ratatui())
            };
            title.push(Span::styled(format!(" {} ", period.label()), style));
        }
    }

    let series = chart_series(&chart.id, chart.period());
    let floor = series.iter().map(|p| p[1]).fold(f64::INFINITY, f64::min);
    let data: Vec<u64> = series.iter().map(|p| (p[1] - floor + 1.0).round() as u64).collect();
    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .title(Line::from(title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(tokens.border.to_ratatui())),
        )
        .data(&data)
        .style(Style::default().fg(tokens.accent.from.to_ratatui()));
    f.render_widget(sparkline, area);
}

fn toast_widget<'a>(toast: &'a Notification, tokens: &ThemeTokens, now: Instant) -> Paragraph<'a> {
    let accent = toast.kind.color().to_ratatui();
    let filled = (toast.remaining_fraction(now) * f32::from(TOAST_WIDTH - 2)).round() as usize;
    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", toast.kind.emoji())),
            Span::styled(
                toast.title.as_str(),
                Style::default()
                    .fg(tokens.text.primary.to_ratatui())
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "▁".repeat(filled),
            Style::default().fg(accent),
        )),
    ];
    Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", toast.message))
            .title_position(ratatui::widgets::block::Position::Bottom)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(tokens.surface.to_ratatui())),
    )
}

/// Rect of at most `width` x `height` centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn next_period(period: ChartPeriod) -> ChartPeriod {
    let index = ChartPeriod::ALL.iter().position(|p| *p == period).unwrap_or(0);
    ChartPeriod::ALL[(index + 1) % ChartPeriod::ALL.len()]
}

/// Translate a crossterm key into a shell key press.
///
/// On `legacy` terminals Ctrl+2, Ctrl+3 and Ctrl+8 come in as NUL, ESC and
/// DEL, which crossterm reports as Ctrl+Space, Esc and Backspace; those are
/// mapped back to their digits. Ctrl+4..7 already arrive as Ctrl+'4'..'7'.
/// Ctrl+1 is sent as a plain '1' and cannot be recovered.
fn to_key_press(key: KeyEvent, legacy: bool) -> KeyPress {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if legacy {
        let digit = match key.code {
            KeyCode::Char(' ') if ctrl => Some(2),
            KeyCode::Esc => Some(3),
            KeyCode::Backspace | KeyCode::Char('\x7f') => Some(8),
            _ => None,
        };
        if let Some(d) = digit {
            return KeyPress::ctrl(Key::Digit(d));
        }
    }

    let shell_key = match key.code {
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(d) => Key::Digit(d as u8),
            None => Key::Char(c),
        },
        KeyCode::F(11) => Key::F11,
        _ => Key::Other,
    };
    KeyPress { key: shell_key, ctrl }
}

/// Launch the terminal dashboard
pub fn launch(config: &Config) -> DashResult<()> {
    let mut app = TuiApp::new(config, Instant::now());
    app.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_app(now: Instant) -> TuiApp {
        let mut config = Config::default();
        config.notifications.welcome = false;
        config.notifications.live_feed = false;
        TuiApp::new(&config, now)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_key_translation() {
        assert_eq!(to_key_press(ctrl(KeyCode::Char('3')), false), KeyPress::ctrl(Key::Digit(3)));
        assert_eq!(to_key_press(press(KeyCode::F(11)), false), KeyPress::plain(Key::F11));
        assert_eq!(to_key_press(press(KeyCode::Char('b')), false), KeyPress::plain(Key::Char('b')));
        assert_eq!(to_key_press(press(KeyCode::Enter), false), KeyPress::plain(Key::Other));
        // Enhanced terminals report these keys as themselves
        assert_eq!(to_key_press(press(KeyCode::Esc), false), KeyPress::plain(Key::Other));
        assert_eq!(to_key_press(press(KeyCode::Backspace), false), KeyPress::plain(Key::Other));
    }

    #[test]
    fn test_legacy_control_bytes_map_to_digits() {
        // Ctrl+2 (NUL)
        assert_eq!(to_key_press(ctrl(KeyCode::Char(' ')), true), KeyPress::ctrl(Key::Digit(2)));
        // Ctrl+3 (ESC)
        assert_eq!(to_key_press(press(KeyCode::Esc), true), KeyPress::ctrl(Key::Digit(3)));
        // Ctrl+4..7 (FS, GS, RS, US)
        for d in 4..=7u8 {
            let c = char::from(b'0' + d);
            assert_eq!(to_key_press(ctrl(KeyCode::Char(c)), true), KeyPress::ctrl(Key::Digit(d)));
        }
        // Ctrl+8 (DEL)
        assert_eq!(to_key_press(press(KeyCode::Backspace), true), KeyPress::ctrl(Key::Digit(8)));
        assert_eq!(to_key_press(press(KeyCode::Char('\x7f')), true), KeyPress::ctrl(Key::Digit(8)));
        // Plain keys pass through
        assert_eq!(to_key_press(press(KeyCode::Char('b')), true), KeyPress::plain(Key::Char('b')));
    }

    #[test]
    fn test_legacy_terminal_reaches_every_recoverable_module() {
        let now = Instant::now();
        let mut app = quiet_app(now);
        app.legacy_keys = true;

        app.handle_key(ctrl(KeyCode::Char(' ')), now);
        assert_eq!(app.shell.active(), ModuleId::ALL[1]);
        app.handle_key(press(KeyCode::Esc), now);
        assert_eq!(app.shell.active(), ModuleId::ALL[2]);
        app.handle_key(press(KeyCode::Backspace), now);
        assert_eq!(app.shell.active(), ModuleId::Settings);
        assert_eq!(app.dashboard.panel().module, ModuleId::Settings);
    }

    #[test]
    fn test_esc_closes_help_before_switching() {
        let now = Instant::now();
        let mut app = quiet_app(now);
        app.legacy_keys = true;
        app.handle_key(press(KeyCode::Char('?')), now);
        assert!(app.show_help);

        app.handle_key(press(KeyCode::Esc), now);
        assert!(!app.show_help);
        assert_eq!(app.shell.active(), ModuleId::Overview);
    }

    #[test]
    fn test_legacy_backspace_still_edits_search() {
        let now = Instant::now();
        let mut app = quiet_app(now);
        app.legacy_keys = true;
        for code in [KeyCode::Char('/'), KeyCode::Char('o'), KeyCode::Char('r'), KeyCode::Backspace] {
            app.handle_key(press(code), now);
        }
        assert_eq!(app.shell.search_input(), "o");
        assert_eq!(app.shell.active(), ModuleId::Overview);
    }

    #[test]
    fn test_ctrl_digit_switches_panel() {
        let now = Instant::now();
        let mut app = quiet_app(now);
        app.handle_key(ctrl(KeyCode::Char('6')), now);
        assert_eq!(app.shell.active(), ModuleId::Alerts);
        assert_eq!(app.dashboard.panel().module, ModuleId::Alerts);

        // Plain digits are not shortcuts
        app.handle_key(press(KeyCode::Char('2')), now);
        assert_eq!(app.shell.active(), ModuleId::Alerts);
    }

    #[test]
    fn test_quit_keys() {
        let now = Instant::now();
        let mut app = quiet_app(now);
        app.handle_key(ctrl(KeyCode::Char('c')), now);
        assert!(!app.running);

        let mut app = quiet_app(now);
        app.handle_key(press(KeyCode::Char('q')), now);
        assert!(!app.running);
    }

    #[test]
    fn test_toggles_and_dismiss() {
        let now = Instant::now();
        let mut app = quiet_app(now);
        app.handle_key(press(KeyCode::Char('b')), now);
        app.handle_key(press(KeyCode::Char('t')), now);
        assert!(app.shell.sidebar_collapsed());
        assert!(!app.shell.is_dark());

        app.dashboard.show_warning("Dock 3", "Truck delayed", now);
        app.handle_key(press(KeyCode::Char('x')), now);
        assert_eq!(app.dashboard.notifications.active_count(), 0);
    }

    #[test]
    fn test_search_mode_captures_letters() {
        let now = Instant::now();
        let mut app = quiet_app(now);
        for code in [KeyCode::Char('/'), KeyCode::Char('q'), KeyCode::Char('t')] {
            app.handle_key(press(code), now);
        }
        assert!(app.running);
        assert!(app.shell.is_dark());
        assert_eq!(app.shell.search_input(), "qt");

        app.handle_key(press(KeyCode::Esc), now);
        assert_eq!(app.shell.search_input(), "");
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_tab_wraps_around() {
        let now = Instant::now();
        let mut app = quiet_app(now);
        app.handle_key(press(KeyCode::BackTab), now);
        assert_eq!(app.shell.active(), ModuleId::Settings);
        app.handle_key(press(KeyCode::Tab), now);
        assert_eq!(app.shell.active(), ModuleId::Overview);
    }

    #[test]
    fn test_period_key_cycles_charts() {
        let now = Instant::now();
        let mut app = quiet_app(now);
        app.handle_key(press(KeyCode::Char('p')), now);
        let charts = app.dashboard.panel().page.charts();
        assert!(charts.iter().all(|c| c.period() == ChartPeriod::Month));
        // Two charts changed, one throttled toast
        assert_eq!(app.dashboard.notifications.active_count(), 1);
    }

    #[test]
    fn test_centered_fits_small_area() {
        let area = Rect::new(0, 0, 10, 6);
        let popup = centered(area, 36, 5);
        assert!(popup.width <= area.width && popup.height <= area.height);
    }
}
