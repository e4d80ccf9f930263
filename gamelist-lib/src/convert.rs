//! The conversion pipeline: scan, load, associate media, normalize, sort and
//! write every system of a front-end tree in another dialect.

use std::path::{Path, PathBuf};

use gamelist_core::Gamelist;
use gamelist_frontend::Dialect;
use gamelist_frontend::esde::normalize_release_date;

use crate::LibError;
use crate::import::import_system;
use crate::media::MediaIndex;
use crate::scanner::{GamelistLocation, find_gamelists};

/// Options for a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Front-end home directory to read from
    pub source: PathBuf,
    /// Directory receiving `<system>/gamelist.xml`
    pub output: PathBuf,
    pub from: Dialect,
    pub to: Dialect,
    /// Media root override; otherwise the source front-end's layout decides
    pub media_dir: Option<PathBuf>,
    /// Scan the media tree and attach matching files to games
    pub associate_media: bool,
    /// Rewrite media paths as `./<prefix>/<subdir>/<file>`; `None` keeps them
    pub media_prefix: Option<String>,
    /// Fill empty `image`/`thumbnail` from other scraped media
    pub fill_images: bool,
}

impl ConvertOptions {
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            from: Dialect::EsDe,
            to: Dialect::EmulationStation,
            media_dir: None,
            associate_media: true,
            media_prefix: Some("images".to_string()),
            fill_images: true,
        }
    }
}

/// Progress updates sent during [`convert`].
#[derive(Debug, Clone)]
pub enum ConvertProgress {
    /// Gamelists discovered under the source
    Scanned { count: usize },
    /// Starting one system
    System {
        system: String,
        index: usize,
        total: usize,
    },
    /// Finished all systems
    Done,
}

/// What happened to one system.
#[derive(Debug)]
pub enum SystemOutcome {
    Converted {
        system: String,
        source: PathBuf,
        output: PathBuf,
        games: usize,
        media: usize,
    },
    Failed {
        system: String,
        source: PathBuf,
        error: LibError,
    },
}

impl SystemOutcome {
    pub fn system(&self) -> &str {
        match self {
            Self::Converted { system, .. } | Self::Failed { system, .. } => system,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Per-system outcomes of a conversion run, in discovery order.
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub media_root: Option<PathBuf>,
    pub outcomes: Vec<SystemOutcome>,
}

impl ConversionReport {
    pub fn converted(&self) -> impl Iterator<Item = &SystemOutcome> {
        self.outcomes.iter().filter(|o| !o.is_failure())
    }

    pub fn failed(&self) -> impl Iterator<Item = &SystemOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(SystemOutcome::is_failure)
    }

    pub fn total_games(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o {
                SystemOutcome::Converted { games, .. } => *games,
                SystemOutcome::Failed { .. } => 0,
            })
            .sum()
    }

    pub fn total_media(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o {
                SystemOutcome::Converted { media, .. } => *media,
                SystemOutcome::Failed { .. } => 0,
            })
            .sum()
    }
}

/// Convert every gamelist under the source front-end's gamelist directory.
///
/// Fails only when the run cannot start (source missing, media root
/// unresolvable, output not creatable). Errors inside a system are recorded
/// in its [`SystemOutcome`] and the remaining systems still run.
pub fn convert(
    options: &ConvertOptions,
    progress: &dyn Fn(ConvertProgress),
) -> Result<ConversionReport, LibError> {
    if !options.source.is_dir() {
        return Err(LibError::not_a_directory(&options.source));
    }

    let source_frontend = options.from.frontend();
    let gamelist_dir = source_frontend.gamelist_dir(&options.source);
    let media_root = if options.associate_media {
        Some(match &options.media_dir {
            Some(dir) => dir.clone(),
            None => source_frontend.media_dir(&options.source)?,
        })
    } else {
        None
    };
    std::fs::create_dir_all(&options.output)?;

    log::debug!(
        "Converting {} -> {}: gamelists in {}, media in {}",
        options.from,
        options.to,
        gamelist_dir.display(),
        media_root
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not used)".to_string()),
    );

    let locations = find_gamelists(&gamelist_dir);
    progress(ConvertProgress::Scanned {
        count: locations.len(),
    });

    let total = locations.len();
    let mut report = ConversionReport {
        media_root: media_root.clone(),
        outcomes: Vec::with_capacity(total),
    };
    for (index, location) in locations.into_iter().enumerate() {
        progress(ConvertProgress::System {
            system: location.system.clone(),
            index,
            total,
        });

        let outcome = match convert_system(&location, options, media_root.as_deref()) {
            Ok((output, games, media)) => SystemOutcome::Converted {
                system: location.system,
                source: location.path,
                output,
                games,
                media,
            },
            Err(error) => {
                log::debug!("{} failed: {:?}", location.system, error);
                SystemOutcome::Failed {
                    system: location.system,
                    source: location.path,
                    error,
                }
            }
        };
        report.outcomes.push(outcome);
    }
    progress(ConvertProgress::Done);

    Ok(report)
}

/// Run the pipeline for one system, returning the written file, the number
/// of games and the number of media assignments.
fn convert_system(
    location: &GamelistLocation,
    options: &ConvertOptions,
    media_root: Option<&Path>,
) -> Result<(PathBuf, usize, usize), LibError> {
    let mut gamelist = import_system(location, options.from.frontend())?;

    let media = match media_root {
        Some(root) => {
            let system_media = root.join(&gamelist.system);
            attach_media(&mut gamelist, &system_media)
        }
        None => 0,
    };

    for game in &mut gamelist.games {
        game.release_date = normalize_release_date(&game.release_date);
        if options.fill_images {
            game.fill_missing_images();
        }
        if let Some(prefix) = &options.media_prefix {
            game.rebase_media_paths(prefix);
        }
    }
    gamelist.sort();

    let target_dir = options.output.join(&gamelist.system);
    let written = options.to.frontend().write_gamelist(&gamelist, &target_dir)?;
    Ok((written, gamelist.len(), media))
}

fn attach_media(gamelist: &mut Gamelist, system_media: &Path) -> usize {
    if !system_media.is_dir() {
        log::debug!("No media directory at {}", system_media.display());
        return 0;
    }
    let index = MediaIndex::build(system_media);
    log::debug!(
        "Indexed {} media files for {}",
        index.len(),
        gamelist.system
    );
    gamelist
        .games
        .iter_mut()
        .map(|game| index.associate(game))
        .sum()
}
