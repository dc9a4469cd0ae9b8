//! The "How to Use" widget: inline instructions plus an on-demand dialog.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

use mcpr_tui_core::{Theme, Translate};

use crate::common::{centered_rect, contains, ScrollState};
use crate::content::HowToUseContent;

/// Default columns moved per horizontal scroll step.
pub const DEFAULT_SCROLL_STEP: u16 = 4;

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: u16 = 3;

/// Share of the screen height the dialog body may take.
const BODY_MAX_PERCENT: u16 = 70;

/// Widest the dialog grows on large terminals.
const DIALOG_MAX_WIDTH: u16 = 120;

/// Capability handed to code that may open the dialog but not close it.
pub trait ShowDialog {
    /// Open the dialog. Does nothing if it is already open.
    fn show_dialog(&mut self);
}

/// Whether the dialog is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogVisibility {
    #[default]
    Closed,
    Open,
}

/// Result of routing an input event to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HowToUseAction {
    /// The widget consumed the event.
    Handled,
    /// The event closed the dialog.
    Closed,
    /// The widget did not use the event.
    Ignored,
}

/// Connection instructions shown inline, or inside a modal dialog once
/// [`ShowDialog::show_dialog`] is called.
#[derive(Debug, Clone)]
pub struct HowToUse {
    token: Option<String>,
    visibility: DialogVisibility,
    inline_scroll: ScrollState,
    dialog_scroll: ScrollState,
    scroll_step: u16,
    // Layout of the last draw, for mouse hit testing.
    inline_area: Rect,
    dialog_area: Option<Rect>,
    close_button: Option<Rect>,
}

impl HowToUse {
    /// Create the widget for `token`. The dialog starts closed.
    pub fn new(token: Option<String>) -> Self {
        Self {
            token,
            visibility: DialogVisibility::Closed,
            inline_scroll: ScrollState::new(),
            dialog_scroll: ScrollState::new(),
            scroll_step: DEFAULT_SCROLL_STEP,
            inline_area: Rect::default(),
            dialog_area: None,
            close_button: None,
        }
    }

    /// Set the horizontal scroll step in columns.
    pub fn with_scroll_step(mut self, step: u16) -> Self {
        self.scroll_step = step.max(1);
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn visibility(&self) -> DialogVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == DialogVisibility::Open
    }

    /// The inline block shows exactly when the dialog does not.
    pub fn inline_visible(&self) -> bool {
        !self.is_open()
    }

    /// Scroll offsets of the inline view.
    pub fn inline_scroll(&self) -> ScrollState {
        self.inline_scroll
    }

    /// Scroll offsets of the dialog body.
    pub fn dialog_scroll(&self) -> ScrollState {
        self.dialog_scroll
    }

    /// Open-state change reported by the dialog chrome (Esc, outside click).
    pub fn on_open_change(&mut self, open: bool) {
        if open {
            self.show_dialog();
        } else {
            self.set_open(false);
        }
    }

    /// Footer close action.
    pub fn close(&mut self) {
        self.set_open(false);
    }

    fn set_open(&mut self, open: bool) {
        let next = if open {
            DialogVisibility::Open
        } else {
            DialogVisibility::Closed
        };
        if next == self.visibility {
            return;
        }
        if next == DialogVisibility::Open {
            // The dialog body starts fresh on every open.
            self.dialog_scroll.home();
        } else {
            self.dialog_area = None;
            self.close_button = None;
        }
        self.visibility = next;
        tracing::debug!(
            open,
            has_token = crate::content::has_token(self.token()),
            "How-to-use dialog visibility changed"
        );
    }

    /// Handle a key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> HowToUseAction {
        if !self.is_open() {
            return if scroll_with_key(&mut self.inline_scroll, key, self.scroll_step) {
                HowToUseAction::Handled
            } else {
                HowToUseAction::Ignored
            };
        }

        match key.code {
            KeyCode::Esc => {
                self.on_open_change(false);
                HowToUseAction::Closed
            }
            // The close button is the only focusable control.
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('c') => {
                self.close();
                HowToUseAction::Closed
            }
            _ => {
                scroll_with_key(&mut self.dialog_scroll, key, self.scroll_step);
                HowToUseAction::Handled
            }
        }
    }

    /// Handle a mouse event.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> HowToUseAction {
        let (column, row) = (mouse.column, mouse.row);

        if !self.is_open() {
            if !contains(self.inline_area, column, row) {
                return HowToUseAction::Ignored;
            }
            return if scroll_with_wheel(&mut self.inline_scroll, mouse.kind, self.scroll_step) {
                HowToUseAction::Handled
            } else {
                HowToUseAction::Ignored
            };
        }

        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            if self.close_button.is_some_and(|b| contains(b, column, row)) {
                self.close();
                return HowToUseAction::Closed;
            }
            if self.dialog_area.is_some_and(|d| !contains(d, column, row)) {
                self.on_open_change(false);
                return HowToUseAction::Closed;
            }
            return HowToUseAction::Handled;
        }

        // Pointer moves and other buttons leave the dialog unchanged.
        if scroll_with_wheel(&mut self.dialog_scroll, mouse.kind, self.scroll_step) {
            HowToUseAction::Handled
        } else {
            HowToUseAction::Ignored
        }
    }

    /// Render the widget.
    ///
    /// Closed, the instructions fill `area`. Open, `area` is left alone and
    /// the dialog is drawn centered over the whole frame.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, i18n: &dyn Translate) {
        let content = HowToUseContent::new(self.token(), i18n);
        match self.visibility {
            DialogVisibility::Closed => self.render_inline(frame, area, theme, &content),
            DialogVisibility::Open => self.render_dialog(frame, theme, i18n, &content),
        }
    }

    fn render_inline(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        content: &HowToUseContent,
    ) {
        self.inline_area = area;
        let lines = layout_body(content, theme, area.width, area.height, &mut self.inline_scroll);
        let paragraph = Paragraph::new(lines).scroll((self.inline_scroll.vertical(), 0));
        frame.render_widget(paragraph, area);
    }

    fn render_dialog(
        &mut self,
        frame: &mut Frame,
        theme: &Theme,
        i18n: &dyn Translate,
        content: &HowToUseContent,
    ) {
        let screen = frame.area();

        // Borders and padding take two columns each side; one more for the scrollbar.
        let dialog_width = screen.width.saturating_sub(4).min(DIALOG_MAX_WIDTH);
        let body_width = dialog_width.saturating_sub(5).max(1);
        let body_max = (u32::from(screen.height) * u32::from(BODY_MAX_PERCENT) / 100).max(3) as u16;
        let wanted = content.to_lines(theme, body_width, 0).len();
        let body_height = (wanted.min(body_max as usize) as u16).max(1);
        // Body, spacer, footer, and two border rows.
        let dialog_height = body_height + 4;

        let dialog_area = centered_rect(dialog_width, dialog_height, screen);
        self.dialog_area = Some(dialog_area);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", i18n.t("mcpApps.howToUse")))
            .borders(Borders::ALL)
            .border_style(theme.border_active_style())
            .style(theme.panel_style())
            .padding(Padding::horizontal(1));

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Body
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        // Body
        let body = chunks[0];
        let text_width = body.width.saturating_sub(1).max(1);
        let lines = layout_body(content, theme, text_width, body.height, &mut self.dialog_scroll);
        let paragraph = Paragraph::new(lines).scroll((self.dialog_scroll.vertical(), 0));
        frame.render_widget(paragraph, Rect::new(body.x, body.y, text_width, body.height));

        let max_scroll = self.dialog_scroll.max_vertical();
        if max_scroll > 0 {
            let scrollbar = Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .track_symbol(Some("│"))
                .thumb_symbol("█");

            let mut scrollbar_state = ScrollbarState::new(max_scroll as usize)
                .position(self.dialog_scroll.vertical() as usize);
            frame.render_stateful_widget(
                scrollbar,
                Rect::new(body.x + body.width.saturating_sub(1), body.y, 1, body.height),
                &mut scrollbar_state,
            );
        }

        // Footer
        let footer = chunks[2];
        let label = format!(" {} ", i18n.t("common.close"));
        let button_width = (label.width() as u16).min(footer.width);
        self.close_button = Some(Rect::new(
            footer.x + footer.width.saturating_sub(button_width),
            footer.y,
            button_width,
            footer.height,
        ));
        let button = Paragraph::new(Line::from(Span::styled(label, theme.button_focused_style())))
            .alignment(Alignment::Right);
        frame.render_widget(button, footer);
    }
}

impl ShowDialog for HowToUse {
    fn show_dialog(&mut self) {
        self.set_open(true);
    }
}

/// Lay out the content for a viewport and clamp `scroll` to it.
fn layout_body(
    content: &HowToUseContent,
    theme: &Theme,
    width: u16,
    height: u16,
    scroll: &mut ScrollState,
) -> Vec<Line<'static>> {
    let max_horizontal = content.max_horizontal_scroll(width);
    let lines = content.to_lines(theme, width, scroll.horizontal().min(max_horizontal));
    let max_vertical = (lines.len().min(u16::MAX as usize) as u16).saturating_sub(height);
    scroll.set_extent(max_vertical, max_horizontal, height);
    lines
}

/// Apply a scroll key. Returns false for keys that do not scroll.
fn scroll_with_key(scroll: &mut ScrollState, key: KeyEvent, step: u16) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => scroll.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => scroll.scroll_down(1),
        KeyCode::Left | KeyCode::Char('h') => scroll.scroll_left(step),
        KeyCode::Right | KeyCode::Char('l') => scroll.scroll_right(step),
        KeyCode::PageUp => scroll.page_up(),
        KeyCode::PageDown => scroll.page_down(),
        KeyCode::Home => scroll.home(),
        KeyCode::End => scroll.end(),
        _ => return false,
    }
    true
}

fn scroll_with_wheel(scroll: &mut ScrollState, kind: MouseEventKind, step: u16) -> bool {
    match kind {
        MouseEventKind::ScrollUp => scroll.scroll_up(WHEEL_ROWS),
        MouseEventKind::ScrollDown => scroll.scroll_down(WHEEL_ROWS),
        MouseEventKind::ScrollLeft => scroll.scroll_left(step),
        MouseEventKind::ScrollRight => scroll.scroll_right(step),
        _ => return false,
    }
    true
}
