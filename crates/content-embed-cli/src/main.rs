mod app;
mod args;
mod batch;
mod setup;
mod terminal;

use anyhow::Result;
use app::App;
use args::{Args, Mode};
use clap::Parser;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io::stdout, process};

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();

    if args.mode() == Mode::InitConfig {
        let path = setup::init_config(args.config.as_deref())?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = setup::load_config(args.config.as_deref())?;
    let registry = setup::build_registry(&config)?;

    match args.mode() {
        Mode::Batch => {
            let format = args.format.unwrap_or(config.default_format);
            let output = batch::run(&registry, format, &args.inputs)?;
            for message in &output.rejected {
                eprintln!("Rejected {message}");
            }
            println!("{}", output.rendered);
            if !output.all_inserted() {
                process::exit(1);
            }
            Ok(())
        }
        Mode::Interactive => run_interactive(App::new(registry)),
        Mode::InitConfig => Ok(()),
    }
}

fn run_interactive(mut app: App) -> Result<()> {
    // Setup terminal; the guard restores it on every exit path
    let guard = terminal::enter()?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = app::run_app(&mut terminal, &mut app);

    drop(guard);
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    let inserted = app.document().len();
    log::info!("Editor closed with {inserted} nodes");
    Ok(())
}
