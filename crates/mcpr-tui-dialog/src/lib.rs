//! "How to Use" widgets for connecting the MCP Router CLI.
//!
//! - [`HowToUseContent`] - The two instruction sections for a token
//! - [`HowToUse`] - Inline instructions with an on-demand modal dialog
//! - [`ScrollState`] - Clamped scroll offsets shared by both views

mod common;
mod content;
mod host;

pub use common::{centered_rect, ScrollState};
pub use content::{
    cli_snippet, config_snippet, has_token, HowToUseContent, Section, SnippetKind,
    ABSENT_TOKEN_PLACEHOLDER, CONNECT_COMMAND, TOKEN_ENV_VAR,
};
pub use host::{DialogVisibility, HowToUse, HowToUseAction, ShowDialog, DEFAULT_SCROLL_STEP};
