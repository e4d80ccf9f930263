//! Canonical gamelist model shared by every front-end dialect.

pub mod error;
pub mod field;
pub mod game;
pub mod gamelist;

pub use error::CoreError;
pub use field::{Field, FieldParseError};
pub use game::{DEFAULT_RELEASE_DATE, Game, split_genres};
pub use gamelist::{DEFAULT_PROLOG, Gamelist};
