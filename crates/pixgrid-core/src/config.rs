//! Clipping policy knobs for color arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How [`Color::adjust_brightness_with`](crate::Color::adjust_brightness_with)
/// treats channels that leave the valid range after scaling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrightnessClip {
    /// Clamp only when some channel overflows the maximum.
    ///
    /// A negative factor with no overflowing channel leaves the negative
    /// values in place. This is the legacy behavior with an
    /// unclamped lower bound.
    UpperOnly,
    /// Clamp whenever any channel leaves `[MIN_COLOR_VALUE, MAX_COLOR_VALUE]`.
    #[default]
    Both,
}

impl BrightnessClip {
    /// Config-file spelling of the policy.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::UpperOnly => "upper_only",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for BrightnessClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown brightness clip policy: {0:?} (expected \"both\" or \"upper_only\")")]
pub struct UnknownPolicy(pub String);

impl FromStr for BrightnessClip {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "upper_only" => Ok(Self::UpperOnly),
            "both" => Ok(Self::Both),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_clips_both_bounds() {
        assert_eq!(BrightnessClip::default(), BrightnessClip::Both);
    }

    #[test]
    fn test_parse_labels() {
        for policy in [BrightnessClip::UpperOnly, BrightnessClip::Both] {
            assert_eq!(policy.label().parse::<BrightnessClip>(), Ok(policy));
        }
        assert_eq!(
            "sideways".parse::<BrightnessClip>(),
            Err(UnknownPolicy("sideways".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&BrightnessClip::UpperOnly).unwrap();
        assert_eq!(json, "\"upper_only\"");
        let back: BrightnessClip = serde_json::from_str("\"both\"").unwrap();
        assert_eq!(back, BrightnessClip::Both);
    }
}
