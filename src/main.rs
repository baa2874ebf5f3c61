use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use courier_desk::app::App;
use courier_desk::config::load_config;
use courier_desk::directory::{Courier, load_directory, resolve_source};

/// Book couriers from the terminal with destination autocomplete
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory JSON file (branches, users, departments, couriers)
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Base URL of the back-office API
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Bearer token for the back-office API
    #[arg(long, value_name = "TOKEN")]
    token: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let args = Args::parse();

    // Load everything before the terminal switches to the alternate screen
    let config = load_config()?;
    let source = resolve_source(args.data, args.api_url, args.token, &config)?;
    let directory = load_directory(source)?;
    log::info!(
        "Loaded {} branches, {} users, {} departments",
        directory.branches.len(),
        directory.users.len(),
        directory.departments.len()
    );

    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let result = run(terminal, App::new(directory));

    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    if let Some(courier) = result? {
        println!("{}", serde_json::to_string_pretty(&courier)?);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<Option<Courier>> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;
    }

    Ok(app.output.take())
}

#[cfg(debug_assertions)]
fn init_logging() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("courier-desk-debug.log");
    let Ok(file) = File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
