use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::build_skeleton;

use crate::error::CliError;

pub(crate) fn run_skeleton(source: &Path, destination: &Path) -> Result<(), CliError> {
    log::info!(
        "Copying structure of {} to {}",
        source.display().if_supports_color(Stdout, |t| t.cyan()),
        destination.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    let summary = build_skeleton(source, destination)?;

    log::info!(
        "  {} {} directories, {} XML files copied, {} placeholders",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.directories,
        summary.copied,
        summary.placeholders,
    );
    Ok(())
}
