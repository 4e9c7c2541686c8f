//! Binary entry point. A parsed subcommand dispatches to its handler against
//! an explicitly opened store; no subcommand launches the interactive
//! carousel. Handler errors become a message on stderr and exit code 1.

use clap::Parser;

use banner_manager::cli::Cli;
use banner_manager::{commands, logging, run_app, App, BannerStore};

fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();
    let store = BannerStore::open()?;

    match cli.command {
        Some(command) => {
            if let Err(err) = commands::run(command, &store) {
                eprintln!("{err}");
                std::process::exit(1);
            }
            Ok(())
        }
        None => {
            let mut app = App::new(store)?;
            run_app(&mut app)
        }
    }
}
