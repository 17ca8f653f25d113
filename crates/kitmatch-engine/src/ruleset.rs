//! Keyword tables.
//!
//! Each ruleset is plain data: the ordered canonical variant table, compound rules, ordered
//! keyword rules for budget, mobility and expertise, and the keyword sets behind the boolean
//! priorities and lighting. Rule lists are evaluated first-match-wins in the order written
//! here, and canonical lookup walks the table in declaration order.

use kitmatch_config::RulesetVersion;

use crate::{Band, CanonicalTag, Expertise};

/// Ruleset used when nothing else is configured.
pub const RULESET_VERSION: RulesetVersion = RulesetVersion::V3;

/// Ordered `(label, keywords)` rules; the first rule whose keywords intersect the tokens wins.
pub type KeywordRules<L> = &'static [(L, &'static [&'static str])];

/// Ordered canonical variant table.
pub type CanonicalTable = &'static [(CanonicalTag, &'static [&'static str])];

/// A complete keyword ruleset.
#[derive(Debug)]
pub struct Ruleset {
    /// Revision this table belongs to.
    pub version: RulesetVersion,
    /// Canonical tags with their variants, in lookup order.
    pub canonical: CanonicalTable,
    /// Adjacent token pairs joined into one token before lookup.
    pub compounds: &'static [(&'static str, &'static str, &'static str)],
    /// Environments implied by content tags when extracting preferences.
    pub implied_environments: bool,
    /// Budget band rules.
    pub budget: KeywordRules<Band>,
    /// Mobility band rules.
    pub mobility: KeywordRules<Band>,
    /// Expertise rules.
    pub expertise: KeywordRules<Expertise>,
    /// Tokens that make audio a priority.
    pub audio: &'static [&'static str],
    /// Tokens that make stabilization a priority.
    pub stabilization: &'static [&'static str],
    /// Daylight tokens; checked before lowlight.
    pub daylight: &'static [&'static str],
    /// Lowlight tokens.
    pub lowlight: &'static [&'static str],
    /// Normalized tokens that flag a text as low-light oriented.
    pub lowlight_cues: &'static [&'static str],
}

impl Ruleset {
    /// Returns the ruleset for a version.
    pub fn for_version(version: RulesetVersion) -> &'static Self {
        match version {
            RulesetVersion::V1 => &V1,
            RulesetVersion::V2 => &V2,
            RulesetVersion::V3 => &V3,
        }
    }
}

// Written so that the first match reproduces the older "last label wins" scans.
static BUDGET_RULES: KeywordRules<Band> = &[
    (Band::High, &["mahal", "premium", "pro"]),
    (Band::Low, &["murah", "hemat", "budget", "entry"]),
];

static MOBILITY_RULES: KeywordRules<Band> = &[
    (Band::Low, &["studio", "tetap", "statis", "rig"]),
    (Band::High, &["ringan", "travel", "portable", "mobile", "compact"]),
];

static EXPERTISE_RULES: KeywordRules<Expertise> = &[
    (Expertise::Pro, &["profesional", "expert", "pro", "mahir"]),
    (Expertise::Intermediate, &["menengah", "intermediate"]),
    (Expertise::Beginner, &["pemula", "beginner", "baru", "awal"]),
];

static AUDIO: &[&str] = &["audio", "mic", "suara", "podcast", "voice"];
static STABILIZATION: &[&str] = &["stabil", "gimbal", "steady", "aksi", "action", "stabilizer"];
static DAYLIGHT: &[&str] = &["siang", "terang", "cerah", "matahari"];
static LOWLIGHT: &[&str] = &["malam", "gelap", "lowlight", "night"];

/// Table of the first web flow. `ruangan` appears under both outdoor and indoor; lookup
/// order resolves it to outdoor.
static V1: Ruleset = Ruleset {
    version: RulesetVersion::V1,
    canonical: &[
        (
            CanonicalTag::Travel,
            &["travel", "jalan", "jalan2", "trip", "liburan", "backpacker"],
        ),
        (
            CanonicalTag::Outdoor,
            &[
                "outdoor", "luar", "ruangan", "alam", "nature", "hiking", "camping", "siang",
                "terang", "matahari", "cerah",
            ],
        ),
        (CanonicalTag::Indoor, &["indoor", "studio", "ruangan", "setup"]),
        (CanonicalTag::Action, &["action", "sport", "olahraga", "trail"]),
        (CanonicalTag::Wedding, &["wedding", "nikah", "married", "pengantin"]),
        (
            CanonicalTag::Podcast,
            &["podcast", "talkshow", "interview", "talking", "head"],
        ),
        (CanonicalTag::Interview, &["interview", "wawancara"]),
        (CanonicalTag::Studio, &["studio", "indoor"]),
        (CanonicalTag::Vlog, &["vlog", "konten", "harian", "daily"]),
        (
            CanonicalTag::Lowlight,
            &["low", "light", "lowlight", "gelap", "malam"],
        ),
    ],
    compounds: &[],
    implied_environments: false,
    budget: BUDGET_RULES,
    mobility: MOBILITY_RULES,
    expertise: EXPERTISE_RULES,
    audio: AUDIO,
    stabilization: STABILIZATION,
    daylight: DAYLIGHT,
    lowlight: LOWLIGHT,
    lowlight_cues: &["low", "light", "lowlight", "gelap", "malam"],
};

/// Richer parser table. `ruangan` again resolves to outdoor by lookup order, and `qna` is
/// stored lowercase so it can match lowercased tokens at all.
static V2: Ruleset = Ruleset {
    version: RulesetVersion::V2,
    canonical: &[
        (
            CanonicalTag::Outdoor,
            &[
                "outdoor", "luar", "alam", "nature", "ruangan", "siang", "terang", "cerah",
                "matahari", "sunny", "sunlight", "jalan", "jalan2", "travel", "trip", "liburan",
                "explore", "petualangan", "pantai", "gunung", "pegunungan", "bukit", "hiking",
                "camping", "adventure",
            ],
        ),
        (
            CanonicalTag::Indoor,
            &[
                "indoor", "studio", "ruangan", "setup", "kelas", "dalam", "indoorstudio",
                "podcastroom",
            ],
        ),
        (CanonicalTag::Hybrid, &["hybrid", "flex", "campuran"]),
        (
            CanonicalTag::Travel,
            &[
                "travel", "liburan", "jalan", "trip", "vlog", "backpacking", "keliling", "solo",
                "adventure", "hiking", "explore",
            ],
        ),
        (
            CanonicalTag::Podcast,
            &["podcast", "audio", "mic", "suara", "record", "talk", "talking", "voiceover"],
        ),
        (
            CanonicalTag::Interview,
            &["interview", "wawancara", "narasumber", "bicara", "qna"],
        ),
        (
            CanonicalTag::Action,
            &["action", "aksi", "sport", "olahraga", "extreme", "lari", "balap", "skate"],
        ),
        (
            CanonicalTag::Cinematic,
            &["cinematic", "sinematik", "bokeh", "estetik", "blur", "slowmo", "film"],
        ),
        (
            CanonicalTag::Tutorial,
            &["tutorial", "review", "unboxing", "howto", "demo"],
        ),
        (
            CanonicalTag::Lowlight,
            &["lowlight", "malam", "gelap", "noise", "noisy", "night"],
        ),
    ],
    compounds: &[],
    implied_environments: false,
    budget: BUDGET_RULES,
    mobility: MOBILITY_RULES,
    expertise: EXPERTISE_RULES,
    audio: AUDIO,
    stabilization: STABILIZATION,
    daylight: DAYLIGHT,
    lowlight: LOWLIGHT,
    lowlight_cues: &["lowlight", "malam", "gelap", "night"],
};

/// Unified table: every variant belongs to exactly one tag, so lookup order never decides the
/// outcome. `ruangan` ("room") is indoor; travel and studio imply their environments instead
/// of sharing variants with them.
static V3: Ruleset = Ruleset {
    version: RulesetVersion::V3,
    canonical: &[
        (
            CanonicalTag::Outdoor,
            &[
                "outdoor", "luar", "alam", "nature", "siang", "terang", "cerah", "matahari",
                "sunny", "sunlight", "pantai", "gunung", "pegunungan", "bukit", "camping",
                "petualangan", "adventure",
            ],
        ),
        (
            CanonicalTag::Indoor,
            &["indoor", "ruangan", "setup", "kelas", "indoorstudio", "podcastroom"],
        ),
        (CanonicalTag::Hybrid, &["hybrid", "flex", "campuran"]),
        (
            CanonicalTag::Travel,
            &[
                "travel", "jalan", "jalan2", "trip", "liburan", "backpacking", "backpacker",
                "keliling", "explore", "hiking", "solo",
            ],
        ),
        (CanonicalTag::Vlog, &["vlog", "harian", "daily"]),
        (
            CanonicalTag::Podcast,
            &[
                "podcast", "audio", "mic", "suara", "record", "talk", "talking", "talkshow",
                "voiceover",
            ],
        ),
        (
            CanonicalTag::Interview,
            &["interview", "wawancara", "narasumber", "bicara", "qna"],
        ),
        (
            CanonicalTag::Action,
            &[
                "action", "aksi", "sport", "olahraga", "extreme", "lari", "balap", "skate",
                "trail",
            ],
        ),
        (
            CanonicalTag::Cinematic,
            &["cinematic", "sinematik", "bokeh", "estetik", "blur", "slowmo", "film"],
        ),
        (
            CanonicalTag::Tutorial,
            &["tutorial", "review", "unboxing", "howto", "demo"],
        ),
        (CanonicalTag::Wedding, &["wedding", "nikah", "married", "pengantin"]),
        (CanonicalTag::Studio, &["studio"]),
        (
            CanonicalTag::Lowlight,
            &["lowlight", "malam", "gelap", "night", "noise", "noisy"],
        ),
    ],
    compounds: &[("low", "light", "lowlight"), ("how", "to", "howto")],
    implied_environments: true,
    budget: BUDGET_RULES,
    mobility: MOBILITY_RULES,
    expertise: EXPERTISE_RULES,
    audio: AUDIO,
    stabilization: STABILIZATION,
    daylight: DAYLIGHT,
    lowlight: LOWLIGHT,
    lowlight_cues: &["lowlight", "malam", "gelap", "night"],
};

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn default_is_v3() {
        assert_eq!(RULESET_VERSION, RulesetVersion::default());
        assert_eq!(Ruleset::for_version(RULESET_VERSION).version, RulesetVersion::V3);
    }

    #[test]
    fn versions_resolve() {
        for version in [RulesetVersion::V1, RulesetVersion::V2, RulesetVersion::V3] {
            assert_eq!(Ruleset::for_version(version).version, version);
        }
    }

    #[test]
    fn v3_variants_are_disjoint() {
        let mut owner: HashMap<&str, CanonicalTag> = HashMap::new();
        for (tag, variants) in V3.canonical {
            for variant in *variants {
                if let Some(previous) = owner.insert(variant, *tag) {
                    panic!("{variant} belongs to both {previous} and {tag}");
                }
            }
        }
    }

    #[test]
    fn v3_covers_every_tag() {
        for tag in CanonicalTag::ALL {
            assert!(
                V3.canonical.iter().any(|(t, _)| *t == tag),
                "{tag} missing from v3"
            );
        }
    }

    #[test]
    fn variants_are_lowercase() {
        for ruleset in [&V1, &V2, &V3] {
            for (_, variants) in ruleset.canonical {
                for variant in *variants {
                    assert_eq!(*variant, variant.to_lowercase());
                }
            }
        }
    }

    #[test]
    fn legacy_tables_keep_ruangan_ambiguity() {
        for ruleset in [&V1, &V2] {
            let owners: Vec<_> = ruleset
                .canonical
                .iter()
                .filter(|(_, variants)| variants.contains(&"ruangan"))
                .map(|(tag, _)| *tag)
                .collect();
            assert_eq!(owners, vec![CanonicalTag::Outdoor, CanonicalTag::Indoor]);
        }
    }
}
