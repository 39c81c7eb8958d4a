use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest score of each band, checked from the top down.
const CRITICAL_FLOOR: i32 = 19;
const HIGH_FLOOR: i32 = 13;
const MEDIUM_FLOOR: i32 = 6;

/// Qualitative severity derived from a likelihood x impact score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
    Critical,
}

impl Level {
    /// All levels in ascending severity.
    pub const ALL: [Level; 4] = [Level::Low, Level::Medium, Level::High, Level::Critical];

    pub fn from_score(score: i32) -> Self {
        if score >= CRITICAL_FLOOR {
            Level::Critical
        } else if score >= HIGH_FLOOR {
            Level::High
        } else if score >= MEDIUM_FLOOR {
            Level::Medium
        } else {
            Level::Low
        }
    }

    /// Parses the canonical label (`"Low"`, `"Medium"`, `"High"`, `"Critical"`).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(Level::Low),
            "Medium" => Some(Level::Medium),
            "High" => Some(Level::High),
            "Critical" => Some(Level::Critical),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
            Level::Critical => "Critical",
        }
    }

    /// Sort rank used by the table projection (Low = 1 .. Critical = 4).
    pub fn rank(&self) -> u8 {
        match self {
            Level::Low => 1,
            Level::Medium => 2,
            Level::High => 3,
            Level::Critical => 4,
        }
    }

    /// High and Critical risks count towards the "High / Critical" summary.
    pub fn is_elevated(&self) -> bool {
        matches!(self, Level::High | Level::Critical)
    }

    pub fn mitigation_hint(&self) -> &'static str {
        match self {
            Level::Low => "Accept / Monitor",
            Level::Medium => "Plan mitigation",
            Level::High => "Prioritize action (NIST PR.AC)",
            Level::Critical => "Immediate mitigation + escalation",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    /// Case-insensitive variant of [`Level::from_label`] for command-line input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Level::Low),
            "medium" | "med" => Ok(Level::Medium),
            "high" => Ok(Level::High),
            "critical" => Ok(Level::Critical),
            _ => Err(format!(
                "Unknown level '{}' (expected Low, Medium, High or Critical)",
                s
            )),
        }
    }
}

/// Looks up the hint for a raw level label. Unknown labels get the Low hint.
pub fn mitigation_hint(label: &str) -> &'static str {
    match Level::from_label(label) {
        Some(level) => level.mitigation_hint(),
        None => Level::Low.mitigation_hint(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub score: i32,
    pub level: Level,
}

/// Scores a likelihood/impact pair. Both inputs are expected in `1..=5`;
/// larger values saturate rather than overflow.
pub fn classify(likelihood: i32, impact: i32) -> Classification {
    let score = likelihood.saturating_mul(impact);
    Classification {
        score,
        level: Level::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_partition_score_range() {
        for score in 1..=5 {
            assert_eq!(Level::from_score(score), Level::Low, "score {}", score);
        }
        for score in 6..=12 {
            assert_eq!(Level::from_score(score), Level::Medium, "score {}", score);
        }
        for score in 13..=18 {
            assert_eq!(Level::from_score(score), Level::High, "score {}", score);
        }
        for score in 19..=25 {
            assert_eq!(Level::from_score(score), Level::Critical, "score {}", score);
        }
    }

    #[test]
    fn test_level_is_monotonic_in_score() {
        let mut previous = Level::from_score(1);
        for score in 2..=25 {
            let level = Level::from_score(score);
            assert!(level >= previous, "level dropped at score {}", score);
            previous = level;
        }
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(5, 5), Classification { score: 25, level: Level::Critical });
        assert_eq!(classify(2, 3), Classification { score: 6, level: Level::Medium });
        assert_eq!(classify(3, 4), Classification { score: 12, level: Level::Medium });
        assert_eq!(classify(1, 5).level, Level::Low);
        assert_eq!(classify(3, 5).level, Level::High);
        assert_eq!(classify(4, 5).level, Level::Critical);
    }

    #[test]
    fn test_oversized_ratings_saturate() {
        assert_eq!(classify(i32::MAX, 2), Classification { score: i32::MAX, level: Level::Critical });
        assert_eq!(classify(i32::MIN, 2).score, i32::MIN);
        assert_eq!(classify(i32::MIN, 2).level, Level::Low);
    }

    #[test]
    fn test_mitigation_hints() {
        assert_eq!(Level::Low.mitigation_hint(), "Accept / Monitor");
        assert_eq!(Level::Medium.mitigation_hint(), "Plan mitigation");
        assert_eq!(Level::High.mitigation_hint(), "Prioritize action (NIST PR.AC)");
        assert_eq!(
            Level::Critical.mitigation_hint(),
            "Immediate mitigation + escalation"
        );
    }

    #[test]
    fn test_unknown_label_falls_back_to_low_hint() {
        assert_eq!(mitigation_hint("Severe"), "Accept / Monitor");
        assert_eq!(mitigation_hint(""), "Accept / Monitor");
        assert_eq!(mitigation_hint("High"), "Prioritize action (NIST PR.AC)");
    }

    #[test]
    fn test_label_round_trip_and_rank() {
        for level in Level::ALL {
            assert_eq!(Level::from_label(level.label()), Some(level));
        }
        assert_eq!(Level::from_label("high"), None);
        let ranks: Vec<u8> = Level::ALL.iter().map(Level::rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_parse_from_cli_input() {
        assert_eq!("critical".parse::<Level>(), Ok(Level::Critical));
        assert_eq!(" Med ".parse::<Level>(), Ok(Level::Medium));
        assert!("extreme".parse::<Level>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_labels() {
        let json = serde_json::to_string(&Level::High).unwrap();
        assert_eq!(json, "\"High\"");
        let level: Level = serde_json::from_str("\"Critical\"").unwrap();
        assert_eq!(level, Level::Critical);
    }
}
