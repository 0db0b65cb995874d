use clap::Parser;
use taskscan::cli::commands::Cli;
use taskscan::cli::handlers;
use taskscan::io::{config_io, logging};

fn main() {
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("error: cannot read current directory: {}", e);
            std::process::exit(1);
        }
    };
    let config = match config_io::load_config(cli.config.as_deref(), &cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = taskscan::tui::run(&config) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            logging::init_stderr();
            if let Err(e) = handlers::dispatch(cli, &config) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
