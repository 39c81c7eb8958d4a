use crate::entities::RiskRecord;
use crate::scoring::{classify, Level};
use serde::Serialize;

pub const GRID_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub likelihood: i32,
    pub impact: i32,
    /// Level implied by the cell's coordinates, not by its contents.
    pub level: Level,
    pub count: usize,
    /// Asset names in the order their records were encountered.
    pub assets: Vec<String>,
}

impl HeatmapCell {
    fn empty(li: usize, im: usize) -> Self {
        let likelihood = li as i32 + 1;
        let impact = im as i32 + 1;
        Self {
            likelihood,
            impact,
            level: classify(likelihood, impact).level,
            count: 0,
            assets: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// 5x5 likelihood (rows) by impact (columns) frequency grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    cells: [[HeatmapCell; GRID_SIZE]; GRID_SIZE],
}

impl Heatmap {
    pub fn from_records(records: &[RiskRecord]) -> Self {
        let mut cells: [[HeatmapCell; GRID_SIZE]; GRID_SIZE] =
            std::array::from_fn(|li| std::array::from_fn(|im| HeatmapCell::empty(li, im)));

        for record in records {
            let Some((li, im)) = grid_index(record.likelihood, record.impact) else {
                tracing::debug!(
                    id = record.id,
                    likelihood = record.likelihood,
                    impact = record.impact,
                    "Record outside the matrix, left out of the heatmap"
                );
                continue;
            };
            let cell = &mut cells[li][im];
            cell.count += 1;
            cell.assets.push(record.asset.clone());
        }

        Self { cells }
    }

    /// Cell at 1-based `(likelihood, impact)`, or `None` off the grid.
    pub fn cell(&self, likelihood: i32, impact: i32) -> Option<&HeatmapCell> {
        grid_index(likelihood, impact).map(|(li, im)| &self.cells[li][im])
    }

    pub fn count(&self, likelihood: i32, impact: i32) -> usize {
        self.cell(likelihood, impact).map_or(0, |c| c.count)
    }

    pub fn assets(&self, likelihood: i32, impact: i32) -> &[String] {
        self.cell(likelihood, impact)
            .map(|c| c.assets.as_slice())
            .unwrap_or(&[])
    }

    /// Rows ordered by likelihood 1..=5, each row ordered by impact 1..=5.
    pub fn rows(&self) -> impl Iterator<Item = &[HeatmapCell; GRID_SIZE]> {
        self.cells.iter()
    }

    pub fn cells(&self) -> impl Iterator<Item = &HeatmapCell> {
        self.cells.iter().flatten()
    }

    /// Number of records placed on the grid.
    pub fn total(&self) -> usize {
        self.cells().map(|c| c.count).sum()
    }

    pub fn populated_cells(&self) -> usize {
        self.cells().filter(|c| !c.is_empty()).count()
    }
}

fn grid_index(likelihood: i32, impact: i32) -> Option<(usize, usize)> {
    let li = usize::try_from(likelihood.checked_sub(1)?).ok()?;
    let im = usize::try_from(impact.checked_sub(1)?).ok()?;
    (li < GRID_SIZE && im < GRID_SIZE).then_some((li, im))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let heatmap = Heatmap::from_records(&[]);
        assert_eq!(heatmap.total(), 0);
        assert_eq!(heatmap.populated_cells(), 0);
        assert_eq!(heatmap.cells().count(), 25);
    }

    #[test]
    fn test_cell_level_comes_from_coordinates() {
        let heatmap = Heatmap::from_records(&[]);
        assert_eq!(heatmap.cell(1, 1).unwrap().level, Level::Low);
        assert_eq!(heatmap.cell(2, 3).unwrap().level, Level::Medium);
        assert_eq!(heatmap.cell(3, 5).unwrap().level, Level::High);
        assert_eq!(heatmap.cell(5, 4).unwrap().level, Level::Critical);
    }

    #[test]
    fn test_out_of_range_records_are_excluded() {
        let records = vec![
            RiskRecord::from_ratings(1, "A", "t", 0, 3),
            RiskRecord::from_ratings(2, "B", "t", 3, 6),
            RiskRecord::from_ratings(3, "C", "t", -2, 1),
            RiskRecord::from_ratings(4, "D", "t", 5, 5),
        ];
        let heatmap = Heatmap::from_records(&records);

        assert_eq!(heatmap.total(), 1);
        assert_eq!(heatmap.assets(5, 5), ["D".to_string()]);
        assert!(heatmap.cell(0, 3).is_none());
        assert_eq!(heatmap.count(3, 6), 0);
    }

    #[test]
    fn test_rows_are_likelihood_major() {
        let records = vec![RiskRecord::from_ratings(1, "Edge", "DDoS", 2, 4)];
        let heatmap = Heatmap::from_records(&records);

        let row = heatmap.rows().nth(1).unwrap();
        assert_eq!(row[3].count, 1);
        assert_eq!(row[3].likelihood, 2);
        assert_eq!(row[3].impact, 4);
    }
}
