use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tabtop::app::{App, Tab};
use tabtop::config;
use tabtop::core::Message;
use tabtop::infrastructure::{RuntimeBridge, RuntimeCommand, SystemCollector};
use tabtop::ui::{self, Theme};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TabArg {
    Cpu,
    Memory,
    Disk,
    Network,
    Host,
}

impl From<TabArg> for Tab {
    fn from(arg: TabArg) -> Self {
        match arg {
            TabArg::Cpu => Tab::Cpu,
            TabArg::Memory => Tab::Memory,
            TabArg::Disk => Tab::Disk,
            TabArg::Network => Tab::Network,
            TabArg::Host => Tab::Host,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tabtop",
    version,
    about = "tabtop: a tabbed terminal dashboard for CPU, memory, disk and network metrics"
)]
struct Args {
    /// Tab shown at startup
    #[arg(long, value_enum, default_value = "cpu")]
    tab: TabArg,

    /// Config file (defaults to ~/.config/tabtop/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (also TABTOP_LOG). Nothing is logged otherwise.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("tabtop: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let log_file = args
        .log_file
        .clone()
        .or_else(|| std::env::var_os("TABTOP_LOG").map(PathBuf::from));
    if let Some(path) = log_file.as_deref() {
        init_logging(path)?;
    }

    let config = config::load(args.config.as_deref());
    let theme = Theme::from_config(&config.theme);

    let (tx, rx) = mpsc::channel::<Message>();
    let runtime = RuntimeBridge::new(Arc::new(SystemCollector::new()), tx.clone())?;

    enable_raw_mode().context("failed to enable raw mode")?;
    let res = execute!(io::stdout(), EnterAlternateScreen)
        .context("failed to enter alternate screen")
        .and_then(|()| {
            let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
            let res = run_app(&mut terminal, App::new(args.tab.into()), &theme, &runtime, tx, rx);
            terminal.show_cursor()?;
            res
        });

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    theme: &Theme,
    runtime: &RuntimeBridge,
    tx: Sender<Message>,
    rx: Receiver<Message>,
) -> Result<()> {
    let size = terminal.size()?;
    app.update(Message::Resize {
        width: size.width,
        height: size.height,
    });
    spawn_input_reader(tx)?;

    for cmd in app.start() {
        runtime.send(cmd)?;
    }
    info!(tab = app.current_tab().title(), "dashboard started");

    terminal.draw(|f| ui::draw(f, &app, theme))?;
    loop {
        let msg = rx.recv().context("event channel closed")?;
        for cmd in app.update(msg) {
            runtime.send(cmd)?;
        }
        if app.should_quit {
            let _ = runtime.send(RuntimeCommand::Shutdown);
            info!("quitting");
            return Ok(());
        }
        terminal.draw(|f| ui::draw(f, &app, theme))?;
    }
}

/// Forward key presses and resizes into the event channel
fn spawn_input_reader(tx: Sender<Message>) -> Result<()> {
    thread::Builder::new()
        .name("tabtop-input".to_string())
        .spawn(move || loop {
            let msg = match event::read() {
                Ok(Event::Key(key)) => Message::Key(key),
                Ok(Event::Resize(width, height)) => Message::Resize { width, height },
                Ok(_) => continue,
                Err(err) => {
                    warn!(error = %err, "terminal input failed");
                    let _ = tx.send(Message::InputClosed);
                    return;
                }
            };
            if tx.send(msg).is_err() {
                return;
            }
        })
        .context("failed to spawn input thread")?;
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tabtop=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
