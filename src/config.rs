use std::collections::BTreeSet;

use camino::{Utf8Path, Utf8PathBuf};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{InspectError, InspectResult};

pub const DEFAULT_CONFIG_FILE: &str = "zcl-inspect.yaml";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Clusters whose frames are not reported
    pub suppress: BTreeSet<u16>,

    /// Append the raw payload (hex) to every described frame
    pub show_payload: bool,

    /// Used when RUST_LOG is not set
    pub log_filters: Option<String>,
}

impl InspectConfig {
    #[must_use]
    pub fn is_suppressed(&self, cluster: u16) -> bool {
        self.suppress.contains(&cluster)
    }
}

/// Parse config from `filename`.
///
/// With `explicit` unset, a missing file yields the default configuration.
pub fn parse(filename: &Utf8Path, explicit: bool) -> InspectResult<InspectConfig> {
    if !filename.exists() {
        if explicit {
            return Err(InspectError::ConfigNotFound(filename.to_path_buf()));
        }
        log::debug!("No config file at {filename}, using defaults");
        return Ok(InspectConfig::default());
    }

    let settings = Config::builder()
        .add_source(File::new(filename.as_str(), FileFormat::Yaml))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Parse config from an in-memory yaml document
pub fn parse_str(yaml: &str) -> InspectResult<InspectConfig> {
    let settings = Config::builder()
        .add_source(File::from_str(yaml, FileFormat::Yaml))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[must_use]
pub fn default_path() -> Utf8PathBuf {
    Utf8PathBuf::from(DEFAULT_CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;

    use crate::config::{parse, parse_str, InspectConfig};
    use crate::error::InspectError;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(parse_str("").unwrap(), InspectConfig::default());
    }

    #[test]
    fn suppress_list() {
        let conf = parse_str("suppress: [25, 1030]\nshow_payload: true\n").unwrap();

        assert!(conf.is_suppressed(0x0019));
        assert!(conf.is_suppressed(0x0406));
        assert!(!conf.is_suppressed(0x0006));
        assert!(conf.show_payload);
        assert_eq!(conf.log_filters, None);
    }

    #[test]
    fn log_filters() {
        let conf = parse_str("log_filters: info,zcl=debug").unwrap();
        assert_eq!(conf.log_filters.as_deref(), Some("info,zcl=debug"));
    }

    #[test]
    fn missing_file() {
        let path = Utf8Path::new("/nonexistent/zcl-inspect.yaml");

        assert_eq!(parse(path, false).unwrap(), InspectConfig::default());
        assert!(matches!(
            parse(path, true),
            Err(InspectError::ConfigNotFound(_))
        ));
    }
}
