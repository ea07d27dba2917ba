//! Platform heuristic profiles — how each job board weights title, recency and keywords.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported job boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linkedin,
    Indeed,
    Dice,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Linkedin, Platform::Indeed, Platform::Dice];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linkedin => "linkedin",
            Platform::Indeed => "indeed",
            Platform::Dice => "dice",
        }
    }

    pub fn profile(&self) -> PlatformProfile {
        match self {
            Platform::Linkedin => LINKEDIN,
            Platform::Indeed => INDEED,
            Platform::Dice => DICE,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    /// Strict parse for boundary validation. Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linkedin" => Ok(Platform::Linkedin),
            "indeed" => Ok(Platform::Indeed),
            "dice" => Ok(Platform::Dice),
            other => Err(format!(
                "Platform must be one of: linkedin, indeed, dice (got '{other}')"
            )),
        }
    }
}

/// Weight triple for one platform. Weights are non-negative and need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformProfile {
    pub title_weight: f64,
    pub recency_weight: f64,
    pub keyword_weight: f64,
}

const LINKEDIN: PlatformProfile = PlatformProfile {
    title_weight: 0.35,
    recency_weight: 0.25,
    keyword_weight: 0.40,
};

const INDEED: PlatformProfile = PlatformProfile {
    title_weight: 0.20,
    recency_weight: 0.15,
    keyword_weight: 0.65,
};

const DICE: PlatformProfile = PlatformProfile {
    title_weight: 0.15,
    recency_weight: 0.10,
    keyword_weight: 0.75,
};

/// Unknown identifiers fall back to this platform's weights.
pub const DEFAULT_PLATFORM: Platform = Platform::Indeed;

/// Looks up the weight profile for a platform id.
///
/// Lower-cases before lookup. Unrecognised ids get the `indeed` profile rather than an error;
/// validation belongs at the API boundary.
pub fn profile_for(platform_id: &str) -> PlatformProfile {
    platform_id
        .parse::<Platform>()
        .unwrap_or(DEFAULT_PLATFORM)
        .profile()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_profiles() {
        assert_eq!(profile_for("linkedin"), LINKEDIN);
        assert_eq!(profile_for("indeed"), INDEED);
        assert_eq!(profile_for("dice"), DICE);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(profile_for("LinkedIn"), LINKEDIN);
        assert_eq!(profile_for("DICE"), DICE);
    }

    #[test]
    fn test_unknown_platform_falls_back_to_indeed() {
        assert_eq!(profile_for("monster"), INDEED);
        assert_eq!(profile_for(""), INDEED);
    }

    #[test]
    fn test_weights_non_negative() {
        for platform in Platform::ALL {
            let p = platform.profile();
            assert!(p.title_weight >= 0.0);
            assert!(p.recency_weight >= 0.0);
            assert!(p.keyword_weight >= 0.0);
        }
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert!("glassdoor".parse::<Platform>().is_err());
        assert_eq!(" Indeed ".parse::<Platform>().unwrap(), Platform::Indeed);
    }

    #[test]
    fn test_platform_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Platform::Linkedin).unwrap(),
            r#""linkedin""#
        );
    }
}
