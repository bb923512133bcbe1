use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use credit_engine::{IconStyle, LayoutMode, ViewerConfig, load_config};
use credit_tui::{app::App, ui};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Browse the CRediT contributor roles in the terminal",
    long_about = None
)]
struct Args {
    /// Path to a JSON config file (missing file means defaults)
    #[arg(short, long, default_value = "credit-viewer.json")]
    config: PathBuf,

    /// Force a layout instead of choosing by terminal width
    #[arg(long, value_enum)]
    layout: Option<LayoutArg>,

    /// Use ASCII glyphs instead of Unicode symbols
    #[arg(long)]
    ascii: bool,

    /// Terminal width (columns) at which the desktop layout takes over
    #[arg(long)]
    breakpoint: Option<u16>,

    /// Write logs to this file (logging is off without one)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum LayoutArg {
    Auto,
    Desktop,
    Mobile,
}

impl From<LayoutArg> for LayoutMode {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Auto => LayoutMode::Auto,
            LayoutArg::Desktop => LayoutMode::Desktop,
            LayoutArg::Mobile => LayoutMode::Mobile,
        }
    }
}

impl Args {
    fn apply(&self, config: &mut ViewerConfig) {
        if let Some(layout) = self.layout {
            config.layout = layout.into();
        }
        if self.ascii {
            config.icons = IconStyle::Ascii;
        }
        if let Some(breakpoint) = self.breakpoint {
            config.breakpoint = breakpoint;
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
    }
}

// The terminal owns stdout, so logs only go to a file.
fn setup_logging(debug: bool, log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("info,credit_tui=debug,credit_engine=debug")
        } else {
            EnvFilter::new("warn,credit_tui=info,credit_engine=info")
        }
    });

    fmt::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install the log subscriber")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Configuration: file, then flags on top
    let mut config = load_config(&args.config).await?;
    args.apply(&mut config);
    config.validate().context("Invalid command line options")?;

    // 2. Logging
    setup_logging(args.debug, config.log_file.as_deref())?;
    info!(layout = ?config.layout, icons = ?config.icons, "starting viewer");

    let tick = Duration::from_millis(config.tick_ms);
    let mut app = App::new(config)?;

    // 3. Terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, tick);

    // Dropping the mobile view releases any scroll lock before we leave.
    app.shutdown();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("viewer closed");
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => app.on_key(key),
                Event::Mouse(mouse) => app.on_mouse(mouse),
                Event::Resize(columns, rows) => {
                    debug!(columns, rows, "terminal resized");
                }
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "credit-tui",
            "--layout",
            "mobile",
            "--ascii",
            "--breakpoint",
            "90",
        ]);
        let mut config = ViewerConfig::default();
        args.apply(&mut config);
        assert_eq!(config.layout, LayoutMode::Mobile);
        assert_eq!(config.icons, IconStyle::Ascii);
        assert_eq!(config.breakpoint, 90);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_defaults_leave_config_alone() {
        let args = Args::parse_from(["credit-tui"]);
        assert_eq!(args.config, PathBuf::from("credit-viewer.json"));
        let mut config = ViewerConfig::default();
        args.apply(&mut config);
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_setup_logging_writes_to_file_once() -> Result<()> {
        assert!(setup_logging(false, None).is_ok());

        let dir = tempdir()?;
        let path = dir.path().join("viewer.log");
        setup_logging(true, Some(&path))?;
        assert!(path.exists());

        // A second subscriber cannot be installed in the same process.
        let err = setup_logging(false, Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to install the log subscriber"));
        Ok(())
    }

    #[test]
    fn test_bad_breakpoint_flag_fails_validation() {
        let args = Args::parse_from(["credit-tui", "--breakpoint", "12"]);
        let mut config = ViewerConfig::default();
        args.apply(&mut config);
        assert!(config.validate().is_err());
    }
}
