//! Summary statistics and heatmap derived from a risk collection.
//!
//! Everything here is rebuilt from scratch for every change to the
//! collection; nothing is cached between calls.

pub mod heatmap;
pub mod summary;

pub use heatmap::{Heatmap, HeatmapCell, GRID_SIZE};
pub use summary::{level_breakdown, AverageScore, Summary};

use crate::entities::RiskRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateView {
    pub summary: Summary,
    pub heatmap: Heatmap,
}

pub fn aggregate(records: &[RiskRecord]) -> AggregateView {
    AggregateView {
        summary: Summary::from_records(records),
        heatmap: Heatmap::from_records(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_sum_matches_in_range_records() {
        let records: Vec<RiskRecord> = (0..12)
            .map(|i| RiskRecord::from_ratings(i, format!("asset-{}", i), "t", (i % 7) as i32, 3))
            .collect();
        let view = aggregate(&records);

        let in_range = records.iter().filter(|r| r.in_matrix()).count();
        assert_eq!(view.heatmap.total(), in_range);
        assert_eq!(view.summary.total, records.len());
    }
}
