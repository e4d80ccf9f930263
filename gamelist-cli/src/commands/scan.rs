use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::settings::DEFAULT_SOURCE_DIALECT;
use gamelist_lib::{Dialect, LibError, import_all};

use crate::error::CliError;

pub(crate) fn run_scan(source: &Path, from: Option<Dialect>) -> Result<(), CliError> {
    if !source.is_dir() {
        return Err(LibError::not_a_directory(source).into());
    }
    let settings = super::load_settings()?.convert;
    let dialect = super::resolve_dialect(
        from,
        settings.source_dialect.as_deref(),
        DEFAULT_SOURCE_DIALECT,
    )?;
    let frontend = dialect.frontend();
    let gamelist_dir = frontend.gamelist_dir(source);

    log::info!(
        "Scanning {} gamelists in: {}",
        dialect.if_supports_color(Stdout, |t| t.bold()),
        gamelist_dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("");

    let imported = import_all(&gamelist_dir, frontend);
    if imported.is_empty() {
        log::warn!(
            "  {} No gamelists found",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
        );
        return Ok(());
    }

    let mut total_games = 0usize;
    let mut errors = 0usize;
    for system in &imported {
        match &system.result {
            Ok(gamelist) => {
                total_games += gamelist.len();
                log::info!(
                    "  {} {:<16} {:>6} games  {}",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    system.location.system.if_supports_color(Stdout, |t| t.bold()),
                    gamelist.len(),
                    system
                        .location
                        .path
                        .display()
                        .if_supports_color(Stdout, |t| t.dimmed()),
                );
                if let Some(ref label) = gamelist.alt_emulator {
                    log::info!("      alternative emulator: {}", label);
                }
            }
            Err(e) => {
                errors += 1;
                log::warn!(
                    "  {} {:<16} {}",
                    "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                    system.location.system,
                    e,
                );
            }
        }
    }

    log::info!("");
    log::info!("{}", "Summary:".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  {} {} gamelists, {} games",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        imported.len() - errors,
        total_games,
    );
    if errors > 0 {
        log::warn!(
            "  {} {} unreadable",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            errors,
        );
    }
    Ok(())
}
