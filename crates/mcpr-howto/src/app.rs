//! Interactive terminal app hosting the how-to-use widget.

use std::io::{self, Write};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};

use mcpr_tui_core::{is_quit, Catalog, Event, EventHandler, Locale, Theme, Translate};
use mcpr_tui_dialog::{HowToUse, HowToUseAction, ShowDialog};

use crate::error::{AppError, AppResult};

/// Restore terminal to normal state.
///
/// Called on panic and on normal exit so the terminal is left usable.
pub fn restore_terminal() {
    // Best effort - ignore errors since we may be in a panic
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        crossterm::cursor::Show
    );
    let _ = io::stdout().flush();
}

/// Install a panic hook that restores the terminal before printing the panic.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));
}

/// Everything the app needs to start.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub token: Option<String>,
    pub theme: Theme,
    pub locale: Locale,
    pub start_open: bool,
    pub scroll_step: u16,
    pub mouse: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            token: None,
            theme: Theme::default(),
            locale: Locale::default(),
            start_open: false,
            scroll_step: mcpr_tui_dialog::DEFAULT_SCROLL_STEP,
            mouse: true,
        }
    }
}

/// App lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Running,
    Quit,
}

/// The interactive app.
pub struct App {
    how_to_use: HowToUse,
    theme: Theme,
    i18n: Catalog,
    events: EventHandler,
    mouse: bool,
    state: AppState,
    needs_redraw: bool,
}

impl App {
    /// Create the app. Nothing touches the terminal until [`App::run`].
    pub fn new(settings: AppSettings) -> Self {
        let mut how_to_use = HowToUse::new(settings.token).with_scroll_step(settings.scroll_step);
        if settings.start_open {
            open_instructions(&mut how_to_use);
        }

        Self {
            how_to_use,
            theme: settings.theme,
            i18n: Catalog::new(settings.locale),
            events: EventHandler::new(),
            mouse: settings.mouse,
            state: AppState::Running,
            needs_redraw: true,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    /// The hosted widget.
    pub fn how_to_use(&self) -> &HowToUse {
        &self.how_to_use
    }

    /// Route one event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                if self.how_to_use.handle_mouse(mouse) != HowToUseAction::Ignored {
                    self.needs_redraw = true;
                }
            }
            Event::Resize(_, _) => self.needs_redraw = true,
            Event::Tick => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.needs_redraw = true;

        if is_quit(&key) {
            self.state = AppState::Quit;
            return;
        }

        if self.how_to_use.handle_key(key) != HowToUseAction::Ignored {
            return;
        }

        match key.code {
            KeyCode::Char('?') | KeyCode::Char('d') => open_instructions(&mut self.how_to_use),
            KeyCode::Char('q') => self.state = AppState::Quit,
            _ => self.needs_redraw = false,
        }
    }

    /// Draw one frame.
    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Min(1),    // Instructions
                Constraint::Length(1), // Hints
            ])
            .split(frame.area());

        let title = Line::from(vec![
            Span::styled(self.i18n.t("tui.title"), self.theme.heading_style()),
            Span::styled(" · ", self.theme.dim_style()),
            Span::styled(self.i18n.t("mcpApps.howToUse"), self.theme.text_style()),
        ]);
        frame.render_widget(Paragraph::new(title), chunks[0]);

        self.render_hints(frame, chunks[2]);

        // Drawn last so an open dialog sits above the hints.
        self.how_to_use
            .render(frame, chunks[1], &self.theme, &self.i18n);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let hint = |keys: &str, label: String| {
            vec![
                Span::styled(keys.to_string(), self.theme.highlight_style()),
                Span::styled(format!(" {label}  "), self.theme.dim_style()),
            ]
        };

        let mut spans = Vec::new();
        if self.how_to_use.is_open() {
            spans.extend(hint("Esc", self.i18n.t("tui.hintClose")));
        } else {
            spans.extend(hint("?", self.i18n.t("tui.hintShow")));
        }
        spans.extend(hint("←↑↓→", self.i18n.t("tui.hintScroll")));
        if !self.how_to_use.is_open() {
            spans.extend(hint("q", self.i18n.t("tui.hintQuit")));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Run the TUI until the user quits.
    pub async fn run(&mut self) -> AppResult<()> {
        install_panic_hook();

        enable_raw_mode().map_err(AppError::Terminal)?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(AppError::Terminal)?;
        if self.mouse {
            execute!(stdout, EnableMouseCapture).map_err(AppError::Terminal)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(AppError::Terminal)?;

        let event_loop = self.events.start();
        tracing::info!(
            locale = %self.i18n.locale(),
            theme = %self.theme.name,
            has_token = mcpr_tui_dialog::has_token(self.how_to_use().token()),
            "Started how-to-use TUI"
        );

        let result = self.main_loop(&mut terminal).await;

        event_loop.shutdown().await;
        restore_terminal();
        tracing::info!("Exited how-to-use TUI");
        result
    }

    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> AppResult<()> {
        while self.state() != AppState::Quit {
            if self.needs_redraw {
                terminal
                    .draw(|frame| self.draw(frame))
                    .map_err(AppError::Terminal)?;
                self.needs_redraw = false;
            }

            match self.events.next().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }
        Ok(())
    }
}

/// Callers that only open the instructions get the show capability, nothing more.
fn open_instructions(target: &mut dyn ShowDialog) {
    target.show_dialog();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_question_mark_opens_dialog() {
        let mut app = App::new(AppSettings::default());
        assert!(!app.how_to_use().is_open());
        app.handle_event(key(KeyCode::Char('?')));
        assert!(app.how_to_use().is_open());
    }

    #[test]
    fn test_q_quits_only_when_closed() {
        let mut app = App::new(AppSettings {
            start_open: true,
            ..Default::default()
        });
        app.handle_event(key(KeyCode::Char('q')));
        assert_eq!(app.state(), AppState::Running);

        app.handle_event(key(KeyCode::Esc));
        app.handle_event(key(KeyCode::Char('q')));
        assert_eq!(app.state(), AppState::Quit);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = App::new(AppSettings {
            start_open: true,
            ..Default::default()
        });
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(app.state(), AppState::Quit);
    }

    #[test]
    fn test_draw_inline() {
        let mut app = App::new(AppSettings {
            token: Some("abc123".to_string()),
            ..Default::default()
        });
        let text = screen(&mut app);
        assert!(text.contains("MCP Router"));
        assert!(text.contains("export MCPR_TOKEN=\"abc123\""));
        assert!(text.contains("open dialog"));
    }

    #[test]
    fn test_draw_dialog_in_japanese() {
        let mut app = App::new(AppSettings {
            locale: Locale::Ja,
            start_open: true,
            ..Default::default()
        });
        let text = screen(&mut app);
        assert!(text.contains("Esc"));
        assert!(text.contains("\"MCPR_TOKEN\": \"undefined\""));
    }

    #[test]
    fn test_tick_does_not_request_redraw() {
        let mut app = App::new(AppSettings::default());
        app.needs_redraw = false;
        app.handle_event(Event::Tick);
        assert!(!app.needs_redraw);
        app.handle_event(Event::Resize(80, 24));
        assert!(app.needs_redraw);
    }
}
