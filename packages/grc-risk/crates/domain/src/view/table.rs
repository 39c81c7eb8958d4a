use crate::entities::RiskRecord;
use crate::scoring::Level;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Column the risk table can be ordered by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SortKey {
    Id,
    Score,
    Level,
    /// A column name the table does not know; projection leaves order untouched.
    Other(String),
}

impl SortKey {
    pub fn parse(column: &str) -> Self {
        match column.trim().to_ascii_lowercase().as_str() {
            "id" => SortKey::Id,
            "score" => SortKey::Score,
            "level" => SortKey::Level,
            _ => SortKey::Other(column.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SortKey::Id => "id",
            SortKey::Score => "score",
            SortKey::Level => "level",
            SortKey::Other(name) => name,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub key: SortKey,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Id,
            ascending: true,
        }
    }
}

impl SortState {
    pub fn new(key: SortKey, ascending: bool) -> Self {
        Self { key, ascending }
    }

    /// Header-click semantics: the active column flips direction, a newly
    /// chosen column starts ascending for `id` and descending otherwise.
    pub fn select(&self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                ascending: !self.ascending,
            }
        } else {
            let ascending = key == SortKey::Id;
            Self { key, ascending }
        }
    }

    /// Arrow shown next to the active column header.
    pub fn indicator(&self) -> &'static str {
        if self.ascending {
            "↑"
        } else {
            "↓"
        }
    }
}

/// Filters by level and stably sorts a copy of `records`.
pub fn project(records: &[RiskRecord], filter: Option<Level>, sort: &SortState) -> Vec<RiskRecord> {
    let mut rows: Vec<RiskRecord> = match filter {
        Some(level) => records.iter().filter(|r| r.level == level).cloned().collect(),
        None => records.to_vec(),
    };

    let compare: fn(&RiskRecord, &RiskRecord) -> Ordering = match sort.key {
        SortKey::Id => |a, b| a.id.cmp(&b.id),
        SortKey::Score => |a, b| a.score.cmp(&b.score),
        SortKey::Level => |a, b| a.level.rank().cmp(&b.level.rank()),
        SortKey::Other(_) => return rows,
    };

    if sort.ascending {
        rows.sort_by(compare);
    } else {
        rows.sort_by(|a, b| compare(b, a));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, likelihood: i32, impact: i32) -> RiskRecord {
        RiskRecord::from_ratings(id, format!("asset-{}", id), "threat", likelihood, impact)
    }

    fn ids(rows: &[RiskRecord]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    fn sample() -> Vec<RiskRecord> {
        vec![
            record(3, 2, 3), // 6 Medium
            record(1, 5, 5), // 25 Critical
            record(4, 1, 1), // 1 Low
            record(2, 3, 2), // 6 Medium
            record(5, 4, 4), // 16 High
        ]
    }

    #[test]
    fn test_default_is_id_ascending() {
        let rows = project(&sample(), None, &SortState::default());
        assert_eq!(ids(&rows), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_keeps_matching_level_only() {
        let rows = project(&sample(), Some(Level::Medium), &SortState::default());
        assert_eq!(ids(&rows), vec![2, 3]);
        assert!(project(&sample(), Some(Level::Critical), &SortState::default())
            .iter()
            .all(|r| r.level == Level::Critical));
    }

    #[test]
    fn test_score_ties_keep_source_order_in_both_directions() {
        let asc = project(&sample(), None, &SortState::new(SortKey::Score, true));
        assert_eq!(ids(&asc), vec![4, 3, 2, 5, 1]);

        let desc = project(&sample(), None, &SortState::new(SortKey::Score, false));
        assert_eq!(ids(&desc), vec![1, 5, 3, 2, 4]);
    }

    #[test]
    fn test_level_sort_uses_rank() {
        let desc = project(&sample(), None, &SortState::new(SortKey::Level, false));
        let levels: Vec<Level> = desc.iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![Level::Critical, Level::High, Level::Medium, Level::Medium, Level::Low]
        );
    }

    #[test]
    fn test_unknown_key_passes_through() {
        let source = sample();
        let rows = project(&source, None, &SortState::new(SortKey::parse("asset"), false));
        assert_eq!(rows, source);
    }

    #[test]
    fn test_projection_does_not_touch_source() {
        let source = sample();
        let before = source.clone();
        let _ = project(&source, Some(Level::Low), &SortState::new(SortKey::Score, false));
        assert_eq!(source, before);
    }

    #[test]
    fn test_select_toggles_and_resets_direction() {
        let state = SortState::default();

        let flipped = state.select(SortKey::Id);
        assert_eq!(flipped, SortState::new(SortKey::Id, false));

        let score = flipped.select(SortKey::Score);
        assert_eq!(score, SortState::new(SortKey::Score, false));
        assert_eq!(score.select(SortKey::Score), SortState::new(SortKey::Score, true));

        let back_to_id = score.select(SortKey::Id);
        assert_eq!(back_to_id, SortState::new(SortKey::Id, true));
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!(SortKey::parse("Score"), SortKey::Score);
        assert_eq!(SortKey::parse(" level "), SortKey::Level);
        assert_eq!(SortKey::parse("asset"), SortKey::Other("asset".to_string()));
        assert_eq!(SortKey::Other("asset".to_string()).name(), "asset");
    }
}
