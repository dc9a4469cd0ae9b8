//! Non-interactive output of the instructions.

use std::io::Write;

use clap::ValueEnum;
use mcpr_tui_core::Translate;
use mcpr_tui_dialog::HowToUseContent;

/// Which part of the instructions to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PrintSection {
    /// Both sections with headings.
    #[default]
    All,
    /// Only the shell snippet.
    Cli,
    /// Only the JSON config snippet.
    Config,
}

/// Render the requested section as plain text.
pub fn render(token: Option<&str>, section: PrintSection, i18n: &dyn Translate) -> String {
    let content = HowToUseContent::new(token, i18n);
    match section {
        PrintSection::All => content.to_plain_text(),
        PrintSection::Cli => format!("{}\n", content.cli.code),
        PrintSection::Config => format!("{}\n", content.config.code),
    }
}

/// Write the requested section to `out`.
pub fn write_to(
    out: &mut impl Write,
    token: Option<&str>,
    section: PrintSection,
    i18n: &dyn Translate,
) -> std::io::Result<()> {
    out.write_all(render(token, section, i18n).as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpr_tui_core::{Catalog, Locale};

    #[test]
    fn test_print_cli_only() {
        let text = render(None, PrintSection::Cli, &Catalog::new(Locale::En));
        assert_eq!(text, "npx -y @mcp_router/cli@latest connect\n");
    }

    #[test]
    fn test_print_config_is_valid_json() {
        let text = render(Some("abc123"), PrintSection::Config, &Catalog::new(Locale::En));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["mcpServers"]["mcp-router"]["env"]["MCPR_TOKEN"], "abc123");
    }

    #[test]
    fn test_print_all_has_headings() {
        let text = render(Some("abc123"), PrintSection::All, &Catalog::new(Locale::En));
        assert!(text.starts_with("CLI Usage\n"));
        assert!(text.contains("\nConfig File Usage\n"));
    }

    #[test]
    fn test_write_to_buffer() {
        let mut out = Vec::new();
        write_to(&mut out, None, PrintSection::Cli, &Catalog::new(Locale::En)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "npx -y @mcp_router/cli@latest connect\n");
    }
}
