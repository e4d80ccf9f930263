//! gamelist-tools CLI
//!
//! Command-line interface for converting emulator front-end gamelists.

mod cli_types;
mod commands;
mod error;
mod logger;
mod spinner;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e
        );
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let quiet = cli.quiet;
    match cli.command {
        Commands::Convert(args) => commands::convert::run_convert(args, quiet),
        Commands::Scan { source, from } => commands::scan::run_scan(&source, from),
        Commands::Generate {
            dir,
            extension,
            to,
            output,
        } => commands::generate::run_generate(&dir, extension.as_deref(), to, output),
        Commands::Skeleton {
            source,
            destination,
        } => commands::skeleton::run_skeleton(&source, &destination),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::Init => commands::config::run_config_init(),
        },
    }
}
