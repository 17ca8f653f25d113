//! Fixed vocabularies: canonical tags and the coarse bands used by kits and preferences.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A domain concept that several raw keyword variants normalize to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalTag {
    /// Shooting outside.
    Outdoor,
    /// Shooting inside.
    Indoor,
    /// Mixed indoor and outdoor.
    Hybrid,
    /// Travel content.
    Travel,
    /// Vlogging.
    Vlog,
    /// Podcasts and voice recording.
    Podcast,
    /// Interviews.
    Interview,
    /// Action and sport.
    Action,
    /// Cinematic footage.
    Cinematic,
    /// Tutorials and reviews.
    Tutorial,
    /// Weddings.
    Wedding,
    /// Studio setups.
    Studio,
    /// Low-light shooting.
    Lowlight,
}

impl CanonicalTag {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Outdoor,
        Self::Indoor,
        Self::Hybrid,
        Self::Travel,
        Self::Vlog,
        Self::Podcast,
        Self::Interview,
        Self::Action,
        Self::Cinematic,
        Self::Tutorial,
        Self::Wedding,
        Self::Studio,
        Self::Lowlight,
    ];

    /// Returns the tag's canonical token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Outdoor => "outdoor",
            Self::Indoor => "indoor",
            Self::Hybrid => "hybrid",
            Self::Travel => "travel",
            Self::Vlog => "vlog",
            Self::Podcast => "podcast",
            Self::Interview => "interview",
            Self::Action => "action",
            Self::Cinematic => "cinematic",
            Self::Tutorial => "tutorial",
            Self::Wedding => "wedding",
            Self::Studio => "studio",
            Self::Lowlight => "lowlight",
        }
    }

    /// Looks up a tag by its canonical token.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == token)
    }

    /// True for the environment tags `outdoor`, `indoor` and `hybrid`.
    pub fn is_environment(self) -> bool {
        matches!(self, Self::Outdoor | Self::Indoor | Self::Hybrid)
    }

    /// Environment that content of this kind happens in, if it implies one.
    pub fn implied_environment(self) -> Option<Self> {
        match self {
            Self::Travel => Some(Self::Outdoor),
            Self::Studio => Some(Self::Indoor),
            _ => None,
        }
    }
}

impl fmt::Display for CanonicalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A three-level band used for price, portability, mobility and quality.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    /// Low.
    Low,
    /// Medium.
    #[default]
    Medium,
    /// High.
    High,
}

impl Band {
    /// Ordinal used for band distance: low 1, medium 2, high 3.
    pub fn order(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Returns the band name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Band {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "rendah" => Ok(Self::Low),
            "medium" | "mid" | "sedang" => Ok(Self::Medium),
            "high" | "tinggi" => Ok(Self::High),
            other => Err(format!("unknown band: {other}")),
        }
    }
}

/// Experience level of a creator, or the level a kit is suited to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expertise {
    /// New to the gear.
    #[default]
    Beginner,
    /// Some experience.
    Intermediate,
    /// Professional.
    Pro,
}

impl Expertise {
    /// Returns the level name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Pro => "pro",
        }
    }
}

impl fmt::Display for Expertise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Expertise {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "pemula" => Ok(Self::Beginner),
            "intermediate" | "menengah" => Ok(Self::Intermediate),
            "pro" | "professional" | "profesional" | "expert" => Ok(Self::Pro),
            other => Err(format!("unknown experience level: {other}")),
        }
    }
}

/// Lighting conditions a request leans toward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lighting {
    /// Bright daylight.
    Daylight,
    /// Night or dim interiors.
    Lowlight,
    /// No lighting cue.
    #[default]
    Neutral,
}

impl Lighting {
    /// Returns the lighting name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daylight => "daylight",
            Self::Lowlight => "lowlight",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Lighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_tokens_round_trip() {
        for tag in CanonicalTag::ALL {
            assert_eq!(CanonicalTag::parse(tag.as_str()), Some(tag));
        }
        assert_eq!(CanonicalTag::parse("kamera"), None);
    }

    #[test]
    fn environment_partition() {
        let envs: Vec<_> = CanonicalTag::ALL
            .into_iter()
            .filter(|t| t.is_environment())
            .collect();
        assert_eq!(
            envs,
            vec![CanonicalTag::Outdoor, CanonicalTag::Indoor, CanonicalTag::Hybrid]
        );
    }

    #[test]
    fn implications() {
        assert_eq!(
            CanonicalTag::Travel.implied_environment(),
            Some(CanonicalTag::Outdoor)
        );
        assert_eq!(
            CanonicalTag::Studio.implied_environment(),
            Some(CanonicalTag::Indoor)
        );
        assert_eq!(CanonicalTag::Vlog.implied_environment(), None);
    }

    #[test]
    fn band_order_and_parse() {
        assert_eq!(Band::Low.order(), 1);
        assert_eq!(Band::default(), Band::Medium);
        assert_eq!(Band::High.order(), 3);
        assert_eq!(" HIGH ".parse::<Band>(), Ok(Band::High));
        assert!("huge".parse::<Band>().is_err());
    }

    #[test]
    fn expertise_parse_accepts_indonesian() {
        assert_eq!("pemula".parse::<Expertise>(), Ok(Expertise::Beginner));
        assert_eq!("Pro".parse::<Expertise>(), Ok(Expertise::Pro));
        assert_eq!(Expertise::default(), Expertise::Beginner);
    }

    #[test]
    fn lighting_default_is_neutral() {
        assert_eq!(Lighting::default(), Lighting::Neutral);
        assert_eq!(Lighting::Daylight.to_string(), "daylight");
    }
}
