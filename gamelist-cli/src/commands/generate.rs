use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_frontend::GAMELIST_FILE;
use gamelist_lib::settings::DEFAULT_TARGET_DIALECT;
use gamelist_lib::{Dialect, Gamelist, generate_from_directory};

use crate::error::CliError;

pub(crate) fn run_generate(
    dir: &Path,
    extension: Option<&str>,
    to: Option<Dialect>,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let settings = super::load_settings()?.convert;
    let dialect = super::resolve_dialect(
        to,
        settings.target_dialect.as_deref(),
        DEFAULT_TARGET_DIALECT,
    )?;

    let (written, gamelist) = write_generated(dir, extension, dialect, output)?;
    log::info!(
        "  {} {} games for {} written to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        gamelist.len(),
        gamelist.system.if_supports_color(Stdout, |t| t.bold()),
        written.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Build the gamelist for `dir` and write it in `dialect`, either next to the
/// ROMs or under `<output>/<system>`.
fn write_generated(
    dir: &Path,
    extension: Option<&str>,
    dialect: Dialect,
    output: Option<PathBuf>,
) -> Result<(PathBuf, Gamelist), CliError> {
    let gamelist = generate_from_directory(dir, extension)?;
    let target_dir = match output {
        Some(out) => out.join(&gamelist.system),
        None => dir.to_path_buf(),
    };
    if target_dir.join(GAMELIST_FILE).exists() {
        log::warn!(
            "  {} Replacing existing gamelist in {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            target_dir.display(),
        );
    }

    let written = dialect.frontend().write_gamelist(&gamelist, &target_dir)?;
    Ok((written, gamelist))
}
