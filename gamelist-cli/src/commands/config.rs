use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::settings::{
    DEFAULT_MEDIA_PREFIX, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_DIALECT, DEFAULT_TARGET_DIALECT,
    init_settings, settings_path,
};

use crate::error::CliError;

/// Show the effective settings and where each value comes from.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();
    let settings = super::load_settings()?.convert;

    log::info!(
        "{}",
        "gamelist-tools Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");
    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let fields: [(&str, Option<String>, String); 5] = [
        (
            "source_dialect",
            settings.source_dialect,
            DEFAULT_SOURCE_DIALECT.to_string(),
        ),
        (
            "target_dialect",
            settings.target_dialect,
            DEFAULT_TARGET_DIALECT.to_string(),
        ),
        (
            "output_dir",
            settings.output_dir.map(|p| p.display().to_string()),
            DEFAULT_OUTPUT_DIR.to_string(),
        ),
        (
            "media_prefix",
            settings.media_prefix,
            DEFAULT_MEDIA_PREFIX.to_string(),
        ),
        (
            "fill_images",
            settings.fill_images.map(|b| b.to_string()),
            true.to_string(),
        ),
    ];

    log::info!("{}", "[convert]".if_supports_color(Stdout, |t| t.bold()));
    for (name, value, default) in fields {
        match value {
            Some(v) => log::info!(
                "  {:<16} {} {}",
                name,
                v,
                "(settings)".if_supports_color(Stdout, |t| t.green()),
            ),
            None => log::info!(
                "  {:<16} {} {}",
                name,
                default,
                "(default)".if_supports_color(Stdout, |t| t.dimmed()),
            ),
        }
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}

/// Write a default settings file if none exists.
pub(crate) fn run_config_init() -> Result<(), CliError> {
    let path = settings_path();
    if init_settings(&path)? {
        log::info!(
            "  {} Wrote default settings to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    } else {
        log::info!(
            "  Settings file already exists: {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    Ok(())
}
