//! Runtime configuration for the demo.

use std::env::VarError;
use std::path::Path;

use pixgrid_core::BrightnessClip;
use serde::{Deserialize, Serialize};

use crate::error::DemoError;

/// Environment variable naming an optional JSON config file.
const CONFIG_PATH_VAR: &str = "PIXGRID_CONFIG";
/// Environment variable overriding the brightness clip policy.
const BRIGHTNESS_CLIP_VAR: &str = "PIXGRID_BRIGHTNESS_CLIP";

/// Runtime configuration for the pixgrid demo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Policy applied by every brightness adjustment in the walkthrough.
    pub brightness_clip: BrightnessClip,
}

impl DemoConfig {
    /// Build the config from `PIXGRID_CONFIG` and `PIXGRID_BRIGHTNESS_CLIP`.
    pub fn from_env() -> Result<Self, DemoError> {
        let config = match std::env::var_os(CONFIG_PATH_VAR) {
            Some(path) => Self::load(Path::new(&path))?,
            None => Self::default(),
        };
        let clip = read_override(BRIGHTNESS_CLIP_VAR, std::env::var(BRIGHTNESS_CLIP_VAR))?;
        config.apply_overrides(clip.as_deref())
    }

    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| DemoError::Config(format!("{}: {e}", path.display())))?;
        Self::parse(&text).map_err(|e| match e {
            DemoError::Config(msg) => DemoError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Parse config JSON. Missing fields keep their defaults.
    pub fn parse(json: &str) -> Result<Self, DemoError> {
        serde_json::from_str(json).map_err(|e| DemoError::Config(e.to_string()))
    }

    /// Apply environment overrides on top of file or default values.
    pub fn apply_overrides(mut self, clip: Option<&str>) -> Result<Self, DemoError> {
        if let Some(value) = clip {
            self.brightness_clip = value
                .parse()
                .map_err(|e| DemoError::Config(format!("{BRIGHTNESS_CLIP_VAR}: {e}")))?;
        }
        Ok(self)
    }
}

/// Turn an environment lookup into an optional value. Unset is `None`;
/// a value that is not valid UTF-8 is a config error.
fn read_override(
    name: &str,
    value: Result<String, VarError>,
) -> Result<Option<String>, DemoError> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e @ VarError::NotUnicode(_)) => Err(DemoError::Config(format!("{name}: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::io::Write;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(DemoConfig::parse("{}").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_parse_policy() {
        let config = DemoConfig::parse(r#"{ "brightness_clip": "upper_only" }"#).unwrap();
        assert_eq!(config.brightness_clip, BrightnessClip::UpperOnly);
    }

    #[test]
    fn test_unknown_policy_is_config_error() {
        let err = DemoConfig::parse(r#"{ "brightness_clip": "lower" }"#).unwrap_err();
        assert!(matches!(err, DemoError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = DemoConfig::load(Path::new("/nonexistent/pixgrid.json")).unwrap_err();
        assert!(matches!(err, DemoError::Config(msg) if msg.contains("pixgrid.json")));
    }

    #[test]
    fn test_load_file_then_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "brightness_clip": "upper_only" }}"#).unwrap();
        file.flush().unwrap();

        let loaded = DemoConfig::load(file.path()).unwrap();
        assert_eq!(loaded.brightness_clip, BrightnessClip::UpperOnly);

        let unchanged = loaded.clone().apply_overrides(None).unwrap();
        assert_eq!(unchanged.brightness_clip, BrightnessClip::UpperOnly);

        let overridden = loaded.clone().apply_overrides(Some("both")).unwrap();
        assert_eq!(overridden.brightness_clip, BrightnessClip::Both);

        let err = loaded.apply_overrides(Some("sideways")).unwrap_err();
        assert!(
            matches!(&err, DemoError::Config(msg) if msg.starts_with(BRIGHTNESS_CLIP_VAR)),
            "{err}"
        );
    }

    #[test]
    fn test_malformed_file_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        file.flush().unwrap();

        let err = DemoConfig::load(file.path()).unwrap_err();
        let path = file.path().display().to_string();
        assert!(matches!(err, DemoError::Config(msg) if msg.starts_with(&path)));
    }

    #[test]
    fn test_read_override() {
        assert_eq!(read_override("X", Err(VarError::NotPresent)).unwrap(), None);
        assert_eq!(
            read_override("X", Ok("both".to_string())).unwrap(),
            Some("both".to_string())
        );
        let not_unicode = Err(VarError::NotUnicode(OsString::from("bad")));
        let err = read_override("X", not_unicode).unwrap_err();
        assert!(matches!(err, DemoError::Config(msg) if msg.starts_with("X: ")));
    }
}
