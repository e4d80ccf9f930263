//! Gamelist discovery, media association and dialect conversion.
//!
//! Builds on `gamelist-core` (the canonical model) and `gamelist-frontend`
//! (dialect readers and writers) to run the whole pipeline over a front-end's
//! directory tree.

pub mod convert;
pub mod error;
pub mod generate;
pub mod import;
pub mod media;
pub mod scanner;
pub mod settings;
pub mod skeleton;

pub use convert::{
    ConversionReport, ConvertOptions, ConvertProgress, SystemOutcome, convert,
};
pub use error::LibError;
pub use generate::generate_from_directory;
pub use import::{ImportedSystem, import_all, import_system};
pub use media::{MediaIndex, associate_media, find_media_files};
pub use scanner::{GamelistLocation, find_gamelists};
pub use skeleton::{SkeletonSummary, build_skeleton};

pub use gamelist_core::{Field, Game, Gamelist};
pub use gamelist_frontend::{Dialect, DialectParseError, Frontend};
