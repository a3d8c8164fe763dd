use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use kilo::app::{App, HELP_MESSAGE};
use kilo::config::{Config, DEFAULT_QUIT_TIMES};
use kilo::terminal::{self, RawMode, TerminalInput};
use kilo::text::row::DEFAULT_TAB_STOP;
use kilo::{keys, logging};

#[derive(Parser)]
#[command(name = "kilo", version, about = "A small terminal text editor")]
struct Cli {
    /// File to open for editing (created on first save if missing)
    file: Option<PathBuf>,

    /// Columns between tab stops
    #[arg(long, default_value_t = DEFAULT_TAB_STOP)]
    tab_stop: usize,

    /// Ctrl-Q presses needed to quit with unsaved changes
    #[arg(long, default_value_t = DEFAULT_QUIT_TIMES)]
    quit_times: u32,

    /// Write diagnostics to this file (filter with KILO_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            tab_stop: self.tab_stop,
            quit_times: self.quit_times,
            log_file: self.log_file.clone(),
            ..Config::default()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config().validate() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("kilo: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::init(config.log_file.as_deref()) {
        eprintln!("kilo: cannot open log file: {e}");
        return ExitCode::FAILURE;
    }

    match run_editor(cli.file, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Raw mode is already restored: the guard lived inside run_editor.
            let _ = terminal::clear_screen(&mut io::stdout());
            tracing::error!("fatal: {e}");
            eprintln!("kilo: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Sets up the terminal, runs the editor until quit, and restores the
/// terminal on every way out.
fn run_editor(file: Option<PathBuf>, config: Config) -> kilo::Result<()> {
    let raw_mode = RawMode::enable()?;
    raw_mode.install_panic_hook();
    raw_mode.install_signal_handlers()?;

    let mut input = TerminalInput::new();
    let mut stdout = io::stdout();
    let (rows, cols) = terminal::window_size(&mut input, &mut stdout)?;
    tracing::info!(rows, cols, "terminal size");

    let mut app = App::new(config, rows, cols);
    if let Some(path) = file {
        app.open(&path)?;
    }
    app.set_status(HELP_MESSAGE);

    loop {
        if let Ok((cols, rows)) = crossterm::terminal::size() {
            if cols > 0 {
                app.resize(usize::from(rows), usize::from(cols));
            }
        }
        app.refresh_screen(&mut stdout)?;

        let key = keys::read_key(&mut input)?;
        app.handle_key(key);
        if app.should_quit {
            break;
        }
    }

    terminal::clear_screen(&mut stdout)?;
    drop(raw_mode);
    Ok(())
}
