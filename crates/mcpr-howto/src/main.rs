//! mcpr-howto - instructions for connecting the MCP Router CLI.
//!
//! Shows the shell and config snippets for `@mcp_router/cli` inline, with
//! an on-demand dialog, or prints them for scripting.

mod app;
mod config;
mod error;
mod logging;
mod print;

use std::path::PathBuf;

use app::{App, AppSettings};
use clap::{Parser, Subcommand};
use config::Config;
use error::{AppResult, ConfigError};
use logging::LogTarget;
use mcpr_tui_core::{Catalog, Locale, Theme};
use print::PrintSection;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "mcpr-howto")]
#[command(author, version, about = "Instructions for connecting the MCP Router CLI", long_about = None)]
struct Cli {
    /// Token to show in the instructions
    #[arg(long)]
    token: Option<String>,

    /// UI language (en, ja, zh)
    #[arg(long)]
    locale: Option<String>,

    /// Theme name (router, light, dracula, nord)
    #[arg(long)]
    theme: Option<String>,

    /// Start with the dialog open
    #[arg(long)]
    dialog: bool,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,

    /// Config file to load after the global one
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the instructions and exit
    Print {
        /// Section to print
        #[arg(long, value_enum, default_value_t = PrintSection::All)]
        section: PrintSection,
    },
    /// Print version information
    Version,
}

/// Settings after merging the config file with command-line flags.
struct Resolved {
    token: Option<String>,
    locale: Locale,
    theme: Theme,
    start_open: bool,
    scroll_step: u16,
    mouse: bool,
}

fn resolve(cli: &Cli, config: Config) -> Result<Resolved, ConfigError> {
    let tui = config.tui();

    let locale = match cli.locale.as_deref() {
        Some(tag) => Locale::parse(tag).ok_or_else(|| ConfigError::UnknownLocale(tag.to_string()))?,
        None => config.locale()?,
    };

    let theme_name = cli.theme.clone().or(config.theme);
    if let Some(name) = theme_name.as_deref() {
        if !Theme::available().contains(&name.to_lowercase().as_str()) {
            warn!("Unknown theme {:?}, using default", name);
        }
    }
    let theme = theme_name
        .as_deref()
        .map(Theme::by_name)
        .unwrap_or_default();

    Ok(Resolved {
        token: cli.token.clone().or(config.token),
        locale,
        theme,
        start_open: cli.dialog || tui.start_open.unwrap_or(false),
        scroll_step: tui
            .scroll_step
            .unwrap_or(mcpr_tui_dialog::DEFAULT_SCROLL_STEP),
        mouse: !cli.no_mouse && tui.mouse.unwrap_or(true),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Version) = cli.command {
        println!("mcpr-howto {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let target = match cli.command {
        Some(Commands::Print { .. }) => LogTarget::Stderr,
        _ => LogTarget::File,
    };
    let log_file = logging::init_logging(cli.verbose, target);

    let (config, sources) = Config::load(cli.config.as_deref()).await?;
    for source in &sources {
        info!("Using config {}", source.display());
    }
    let resolved = resolve(&cli, config)?;

    match cli.command {
        Some(Commands::Print { section }) => {
            let i18n = Catalog::new(resolved.locale);
            print::write_to(
                &mut std::io::stdout().lock(),
                resolved.token.as_deref(),
                section,
                &i18n,
            )?;
        }
        _ => {
            if let Some(path) = log_file {
                info!("Logging to {}", path.display());
            }
            run_tui(resolved).await?;
        }
    }

    Ok(())
}

async fn run_tui(resolved: Resolved) -> AppResult<()> {
    let mut app = App::new(AppSettings {
        token: resolved.token,
        theme: resolved.theme,
        locale: resolved.locale,
        start_open: resolved.start_open,
        scroll_step: resolved.scroll_step,
        mouse: resolved.mouse,
    });
    app.run().await
}
