pub(crate) mod config;
pub(crate) mod convert;
pub(crate) mod generate;
pub(crate) mod scan;
pub(crate) mod skeleton;

use gamelist_lib::Dialect;
use gamelist_lib::settings::{AppSettings, settings_path};

use crate::error::CliError;

/// Load the settings file, naming it in the error when it can't be used.
pub(crate) fn load_settings() -> Result<AppSettings, CliError> {
    let path = settings_path();
    AppSettings::load_from(&path).map_err(|e| CliError::config(format!("{}: {e}", path.display())))
}

/// Pick a dialect: command-line value, then settings value, then `default`.
pub(crate) fn resolve_dialect(
    flag: Option<Dialect>,
    setting: Option<&str>,
    default: &str,
) -> Result<Dialect, CliError> {
    if let Some(dialect) = flag {
        return Ok(dialect);
    }
    Ok(setting.unwrap_or(default).parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_dialect_priority() {
        assert_eq!(
            resolve_dialect(Some(Dialect::Batocera), Some("esde"), "emulationstation").unwrap(),
            Dialect::Batocera
        );
        assert_eq!(
            resolve_dialect(None, Some("esde"), "emulationstation").unwrap(),
            Dialect::EsDe
        );
        assert_eq!(
            resolve_dialect(None, None, "emulationstation").unwrap(),
            Dialect::EmulationStation
        );
    }

    #[test]
    fn test_resolve_dialect_rejects_bad_setting() {
        let err = resolve_dialect(None, Some("pegasus"), "esde").unwrap_err();
        assert!(matches!(err, CliError::Dialect(_)));
    }
}
