//! Connection instructions for the MCP Router CLI.
//!
//! [`HowToUseContent`] is a pure function of an optional token: it builds the
//! "CLI Usage" and "Config File Usage" sections and lays them out as
//! ratatui lines. It holds no state and is rebuilt on every draw.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use mcpr_tui_core::{Theme, Translate};

/// Command that connects the CLI to a running router.
pub const CONNECT_COMMAND: &str = "npx -y @mcp_router/cli@latest connect";

/// Environment variable the CLI reads the token from.
pub const TOKEN_ENV_VAR: &str = "MCPR_TOKEN";

/// Text interpolated into the config block when no token was supplied.
pub const ABSENT_TOKEN_PLACEHOLDER: &str = "undefined";

/// Columns of padding on each side of a code block.
const CODE_PADDING: usize = 2;

/// Whether a token selects the "with token" CLI variant.
///
/// An empty string counts as absent.
pub fn has_token(token: Option<&str>) -> bool {
    matches!(token, Some(t) if !t.is_empty())
}

/// Shell snippet for the CLI section.
pub fn cli_snippet(token: Option<&str>, i18n: &dyn Translate) -> String {
    match token {
        Some(token) if has_token(Some(token)) => format!(
            "{comment}\nexport {TOKEN_ENV_VAR}=\"{token}\"\n\n{CONNECT_COMMAND}",
            comment = i18n.t("mcpApps.howToUseDialog.exportTokenComment"),
        ),
        _ => CONNECT_COMMAND.to_string(),
    }
}

/// JSON snippet for the config file section.
///
/// The token is substituted literally. `None` becomes
/// [`ABSENT_TOKEN_PLACEHOLDER`]; an empty token stays empty.
pub fn config_snippet(token: Option<&str>) -> String {
    let token = token.unwrap_or(ABSENT_TOKEN_PLACEHOLDER);
    format!(
        r#"{{
  "mcpServers": {{
    "mcp-router": {{
      "command": "npx",
      "args": [
        "-y",
        "@mcp_router/cli@latest",
        "connect"
      ],
      "env": {{
        "{TOKEN_ENV_VAR}": "{token}"
      }}
    }}
  }}
}}"#
    )
}

/// Highlighting rules for a code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetKind {
    Shell,
    Json,
}

/// One titled block of instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub description: String,
    pub code: String,
    pub kind: SnippetKind,
}

impl Section {
    /// Display width of the padded code block.
    fn block_width(&self) -> usize {
        self.code
            .lines()
            .map(|line| line.width())
            .max()
            .unwrap_or(0)
            + CODE_PADDING * 2
    }
}

/// Both instruction sections, resolved for one token and locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HowToUseContent {
    pub cli: Section,
    pub config: Section,
}

impl HowToUseContent {
    /// Build the content for `token`.
    pub fn new(token: Option<&str>, i18n: &dyn Translate) -> Self {
        let cli_description = if has_token(token) {
            i18n.t("mcpApps.howToUseDialog.cliUsageDescriptionWithToken")
        } else {
            i18n.t("mcpApps.howToUseDialog.cliUsageDescriptionNoToken")
        };

        Self {
            cli: Section {
                title: i18n.t("mcpApps.howToUseDialog.cliUsageTitle"),
                description: cli_description,
                code: cli_snippet(token, i18n),
                kind: SnippetKind::Shell,
            },
            config: Section {
                title: i18n.t("mcpApps.howToUseDialog.configUsageTitle"),
                description: i18n.t("mcpApps.howToUseDialog.configUsageDescription"),
                code: config_snippet(token),
                kind: SnippetKind::Json,
            },
        }
    }

    /// Sections in display order.
    pub fn sections(&self) -> [&Section; 2] {
        [&self.cli, &self.config]
    }

    /// Plain-text rendering, used by non-interactive output.
    pub fn to_plain_text(&self) -> String {
        self.sections()
            .iter()
            .map(|s| format!("{}\n{}\n\n{}\n", s.title, s.description, s.code))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// How far the code blocks can scroll horizontally inside `width` columns.
    pub fn max_horizontal_scroll(&self, width: u16) -> u16 {
        let widest = self
            .sections()
            .iter()
            .map(|s| s.block_width())
            .max()
            .unwrap_or(0);
        widest.saturating_sub(width as usize).min(u16::MAX as usize) as u16
    }

    /// Lay out both sections for a viewport `width` columns wide.
    ///
    /// Headings and descriptions wrap to `width`. Code blocks never wrap and
    /// are shifted left by `horizontal` columns.
    pub fn to_lines(&self, theme: &Theme, width: u16, horizontal: u16) -> Vec<Line<'static>> {
        let width = width.max(1) as usize;
        let mut lines = Vec::new();

        for (i, section) in self.sections().iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            for row in wrap_text(&section.title, width) {
                lines.push(Line::from(Span::styled(row, theme.heading_style())));
            }
            for row in wrap_text(&section.description, width) {
                lines.push(Line::from(Span::styled(row, theme.muted_style())));
            }
            lines.push(Line::from(""));
            push_code_block(&mut lines, section, theme, horizontal as usize);
        }

        lines
    }
}

fn push_code_block(lines: &mut Vec<Line<'static>>, section: &Section, theme: &Theme, skip: usize) {
    let block_width = section.block_width();
    let blank = || {
        let visible = block_width.saturating_sub(skip);
        Line::from(Span::styled(" ".repeat(visible), theme.code_style()))
    };

    lines.push(blank());
    for code_line in section.code.lines() {
        let mut segments = vec![(" ".repeat(CODE_PADDING), theme.code_style())];
        segments.extend(highlight(code_line, section.kind, theme));
        let used = CODE_PADDING + code_line.width();
        segments.push((" ".repeat(block_width - used), theme.code_style()));

        let spans = skip_columns(segments, skip)
            .into_iter()
            .map(|(text, style)| Span::styled(text, style))
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }
    lines.push(blank());
}

/// Split one code line into styled segments.
fn highlight(line: &str, kind: SnippetKind, theme: &Theme) -> Vec<(String, Style)> {
    let plain = theme.code_style();
    if kind == SnippetKind::Shell && line.trim_start().starts_with('#') {
        return vec![(line.to_string(), theme.code_comment_style())];
    }

    let mut segments = Vec::new();
    let mut rest = line;

    if kind == SnippetKind::Shell {
        let word_end = rest.find(' ').unwrap_or(rest.len());
        let (word, tail) = rest.split_at(word_end);
        if matches!(word, "export" | "npx") {
            segments.push((word.to_string(), theme.code_keyword_style()));
            rest = tail;
        }
    }

    while let Some(start) = rest.find('"') {
        let Some(len) = rest[start + 1..].find('"') else {
            break;
        };
        let end = start + len + 2;
        if start > 0 {
            segments.push((rest[..start].to_string(), plain));
        }
        let quoted = &rest[start..end];
        let is_key = kind == SnippetKind::Json && rest[end..].trim_start().starts_with(':');
        let style = if is_key {
            theme.code_keyword_style()
        } else {
            theme.code_string_style()
        };
        segments.push((quoted.to_string(), style));
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        segments.push((rest.to_string(), plain));
    }

    segments
}

/// Drop the first `skip` display columns from a run of segments.
fn skip_columns(segments: Vec<(String, Style)>, mut skip: usize) -> Vec<(String, Style)> {
    let mut out = Vec::with_capacity(segments.len());
    for (text, style) in segments {
        if skip == 0 {
            out.push((text, style));
            continue;
        }
        let mut kept = String::new();
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if skip == 0 {
                kept.push(ch);
            } else if w > skip {
                // Half of a wide char scrolled off.
                kept.push(' ');
                skip = 0;
            } else {
                skip -= w;
            }
        }
        if !kept.is_empty() {
            out.push((kept, style));
        }
    }
    out
}

/// Greedy wrap on display width, preferring to break at spaces.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if row_width + w > width && !row.is_empty() {
            if ch == ' ' {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
                continue;
            }
            match row.rfind(' ') {
                Some(pos) if pos > 0 => {
                    let carry = row.split_off(pos + 1);
                    rows.push(row.trim_end().to_string());
                    row = carry;
                }
                _ => rows.push(std::mem::take(&mut row)),
            }
            row_width = row.width();
        }
        row.push(ch);
        row_width += w;
    }
    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }

    rows
}
