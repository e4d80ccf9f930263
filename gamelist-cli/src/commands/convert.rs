use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::settings::{
    DEFAULT_MEDIA_PREFIX, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_DIALECT, DEFAULT_TARGET_DIALECT,
};
use gamelist_lib::{ConversionReport, ConvertOptions, ConvertProgress, SystemOutcome, convert};

use crate::cli_types::ConvertArgs;
use crate::error::CliError;

pub(crate) fn run_convert(args: ConvertArgs, quiet: bool) -> Result<(), CliError> {
    let started = Instant::now();
    let settings = super::load_settings()?.convert;

    let from = super::resolve_dialect(
        args.from,
        settings.source_dialect.as_deref(),
        DEFAULT_SOURCE_DIALECT,
    )?;
    let to = super::resolve_dialect(
        args.to,
        settings.target_dialect.as_deref(),
        DEFAULT_TARGET_DIALECT,
    )?;
    let output = args
        .output
        .or(settings.output_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    let media_prefix = if args.keep_media_paths {
        None
    } else {
        Some(
            args.media_prefix
                .or(settings.media_prefix)
                .unwrap_or_else(|| DEFAULT_MEDIA_PREFIX.to_string()),
        )
    };
    let fill_images = !args.no_fill_images && settings.fill_images.unwrap_or(true);

    let options = ConvertOptions {
        source: args.source,
        output,
        from,
        to,
        media_dir: args.media_dir,
        associate_media: !args.no_media,
        media_prefix,
        fill_images,
    };

    log::info!(
        "Converting {} gamelists to {}",
        from.if_supports_color(Stdout, |t| t.bold()),
        to.if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  Source: {}",
        options.source.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "  Output: {}",
        options.output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    match &options.media_prefix {
        Some(prefix) => log::info!(
            "{}",
            format!("  Media paths: ./{prefix}/<media folder>/<file>")
                .if_supports_color(Stdout, |t| t.dimmed()),
        ),
        None => log::info!(
            "{}",
            "  Media paths: kept as found".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }

    let pb = crate::spinner::new_spinner(quiet);
    let progress = |p: ConvertProgress| match p {
        ConvertProgress::Scanned { count } => {
            pb.set_message(format!("Found {count} gamelists"));
        }
        ConvertProgress::System {
            system,
            index,
            total,
        } => {
            pb.set_message(format!("[{}/{}] Converting {}", index + 1, total, system));
        }
        ConvertProgress::Done => crate::spinner::finish(&pb),
    };

    let result = convert(&options, &progress);
    crate::spinner::finish(&pb);
    let report = result?;

    match &report.media_root {
        Some(root) => log::info!(
            "  Media: {}",
            root.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::info!(
            "{}",
            "  Media: not scanned".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
    log::info!("");

    print_report(&report);
    log::info!(
        "{}",
        format!("Finished in {:.2?}", started.elapsed()).if_supports_color(Stdout, |t| t.dimmed()),
    );

    let failed = report.failed().count();
    if args.strict && failed > 0 {
        return Err(CliError::SystemsFailed(failed));
    }
    Ok(())
}

fn print_report(report: &ConversionReport) {
    if report.outcomes.is_empty() {
        log::warn!(
            "  {} No gamelists found",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
        );
        return;
    }

    for outcome in &report.outcomes {
        match outcome {
            SystemOutcome::Converted {
                system,
                output,
                games,
                media,
                ..
            } => {
                log::info!(
                    "  {} {}: {} games, {} media files -> {}",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    system.if_supports_color(Stdout, |t| t.bold()),
                    games,
                    media,
                    output.display().if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
            SystemOutcome::Failed {
                system,
                source,
                error,
            } => {
                log::error!(
                    "  {} {}: {} error",
                    "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                    system.if_supports_color(Stdout, |t| t.bold()),
                    error.kind(),
                );
                log::error!("      file: {}", source.display());
                log::error!("      {}", error);
                let mut cause = error.source();
                while let Some(e) = cause {
                    log::error!("      caused by: {}", e);
                    cause = e.source();
                }
            }
        }
    }

    log::info!("");
    log::info!("{}", "Summary:".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  {} {} systems converted, {} games, {} media files",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        report.converted().count(),
        report.total_games(),
        report.total_media(),
    );
    let failed = report.failed().count();
    if failed > 0 {
        log::warn!(
            "  {} {} systems failed",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            failed,
        );
    }
}
