//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use gamelist_lib::Dialect;

#[derive(Parser)]
#[command(name = "gamelist-tools")]
#[command(about = "Convert emulator front-end gamelists between ES-DE, Batocera and EmulationStation", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments of the `convert` command.
#[derive(Args, Clone)]
pub(crate) struct ConvertArgs {
    /// Front-end home directory to read gamelists from
    #[arg(short, long)]
    pub source: PathBuf,

    /// Directory receiving <system>/gamelist.xml (default: settings or ./output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Source front-end (esde, batocera, emulationstation)
    #[arg(long)]
    pub from: Option<Dialect>,

    /// Target front-end (esde, batocera, emulationstation)
    #[arg(long)]
    pub to: Option<Dialect>,

    /// Scraped media root, overriding the source front-end's own location
    #[arg(long)]
    pub media_dir: Option<PathBuf>,

    /// Rewrite media paths as ./<prefix>/<media folder>/<file>
    #[arg(long, conflicts_with = "keep_media_paths")]
    pub media_prefix: Option<String>,

    /// Keep media paths exactly as found
    #[arg(long)]
    pub keep_media_paths: bool,

    /// Don't fill empty image/thumbnail entries from other media
    #[arg(long)]
    pub no_fill_images: bool,

    /// Don't scan the media directory
    #[arg(long)]
    pub no_media: bool,

    /// Exit with an error if any system fails to convert
    #[arg(long)]
    pub strict: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Convert every gamelist of a front-end into another front-end's dialect
    Convert(ConvertArgs),

    /// List the gamelists found under a front-end directory
    Scan {
        /// Front-end home directory
        #[arg(short, long)]
        source: PathBuf,

        /// Front-end dialect of the gamelists
        #[arg(long)]
        from: Option<Dialect>,
    },

    /// Build a gamelist from the files in a ROM directory
    Generate {
        /// ROM directory for one system
        dir: PathBuf,

        /// Only include files with this extension (e.g. sfc)
        #[arg(short, long)]
        extension: Option<String>,

        /// Dialect to write
        #[arg(long)]
        to: Option<Dialect>,

        /// Write <output>/<system>/gamelist.xml instead of <dir>/gamelist.xml
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Copy a directory tree keeping XML files and emptying everything else
    Skeleton {
        /// Tree to copy
        source: PathBuf,

        /// Where to create the copy
        destination: PathBuf,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings and where each value comes from
    Show,

    /// Print the settings file path
    Path,

    /// Write a settings file with the defaults (if none exists)
    Init,
}
