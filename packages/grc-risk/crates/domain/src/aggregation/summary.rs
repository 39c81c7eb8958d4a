use crate::entities::RiskRecord;
use crate::scoring::Level;
use serde::{Serialize, Serializer};
use std::fmt;

/// Mean score kept in hundredths so the two-decimal rendering is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AverageScore {
    hundredths: i64,
}

impl AverageScore {
    /// Rounds `sum / count` to two decimals, half away from zero.
    pub fn from_totals(sum: i64, count: usize) -> Self {
        if count == 0 {
            return Self::default();
        }
        let count = count as i64;
        let scaled = sum * 100;
        let mut hundredths = scaled / count;
        let remainder = scaled % count;
        if remainder.abs() * 2 >= count {
            hundredths += scaled.signum();
        }
        Self { hundredths }
    }

    pub fn hundredths(&self) -> i64 {
        self.hundredths
    }

    pub fn as_f64(&self) -> f64 {
        self.hundredths as f64 / 100.0
    }
}

impl fmt::Display for AverageScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.hundredths < 0 { "-" } else { "" };
        let abs = self.hundredths.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for AverageScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub high_critical: usize,
    pub average_score: AverageScore,
}

impl Summary {
    pub fn from_records(records: &[RiskRecord]) -> Self {
        let total = records.len();
        let high_critical = records.iter().filter(|r| r.level.is_elevated()).count();
        let sum: i64 = records.iter().map(|r| i64::from(r.score)).sum();

        Self {
            total,
            high_critical,
            average_score: AverageScore::from_totals(sum, total),
        }
    }
}

/// Record counts per level, in ascending severity.
pub fn level_breakdown(records: &[RiskRecord]) -> [(Level, usize); 4] {
    Level::ALL.map(|level| (level, records.iter().filter(|r| r.level == level).count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(pairs: &[(i32, i32)]) -> Vec<RiskRecord> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, (l, im))| RiskRecord::from_ratings(i as i64 + 1, "asset", "threat", *l, *im))
            .collect()
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::from_records(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.high_critical, 0);
        assert_eq!(summary.average_score.to_string(), "0.00");
        assert_eq!(summary.average_score.as_f64(), 0.0);
    }

    #[test]
    fn test_counts_high_and_critical() {
        // scores 25 (Critical), 15 (High), 6 (Medium), 1 (Low)
        let summary = Summary::from_records(&records(&[(5, 5), (3, 5), (2, 3), (1, 1)]));
        assert_eq!(summary.total, 4);
        assert_eq!(summary.high_critical, 2);
        // 47 / 4 = 11.75
        assert_eq!(summary.average_score.to_string(), "11.75");
    }

    #[test]
    fn test_average_rounds_half_away_from_zero() {
        // 1/3 -> 0.33, 2/3 -> 0.67, 1/8 -> 0.125 -> 0.13
        assert_eq!(AverageScore::from_totals(1, 3).to_string(), "0.33");
        assert_eq!(AverageScore::from_totals(2, 3).to_string(), "0.67");
        assert_eq!(AverageScore::from_totals(1, 8).to_string(), "0.13");
        assert_eq!(AverageScore::from_totals(-1, 8).to_string(), "-0.13");
        assert_eq!(AverageScore::from_totals(50, 2).to_string(), "25.00");
    }

    #[test]
    fn test_average_serializes_as_number() {
        let json = serde_json::to_value(AverageScore::from_totals(47, 4)).unwrap();
        assert_eq!(json, serde_json::json!(11.75));
    }

    #[test]
    fn test_level_breakdown() {
        let breakdown = level_breakdown(&records(&[(5, 5), (1, 1), (1, 2), (3, 4)]));
        assert_eq!(
            breakdown,
            [
                (Level::Low, 2),
                (Level::Medium, 1),
                (Level::High, 0),
                (Level::Critical, 1)
            ]
        );
    }
}
