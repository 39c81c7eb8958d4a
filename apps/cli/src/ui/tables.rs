//! comfy-table renderings of the register, the summary cards and the heatmap.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use grc_risk::domain::aggregation::{level_breakdown, GRID_SIZE};
use grc_risk::domain::{Heatmap, Level, RiskRecord, SortKey, SortState, Summary};

fn level_color(level: Level) -> Color {
    match level {
        Level::Low => Color::Green,
        Level::Medium => Color::Yellow,
        Level::High => Color::AnsiValue(208),
        Level::Critical => Color::Red,
    }
}

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header(label: &str, key: SortKey, sort: &SortState) -> Cell {
    let text = if sort.key == key {
        format!("{} {}", label, sort.indicator())
    } else {
        label.to_string()
    };
    Cell::new(text).add_attribute(Attribute::Bold)
}

/// Register rows in the order given; the active sort column carries an arrow.
pub fn risk_table(rows: &[RiskRecord], sort: &SortState) -> Table {
    let mut table = base_table();
    table.set_header(vec![
        header("ID", SortKey::Id, sort),
        Cell::new("Asset").add_attribute(Attribute::Bold),
        Cell::new("Threat").add_attribute(Attribute::Bold),
        Cell::new("L").add_attribute(Attribute::Bold),
        Cell::new("I").add_attribute(Attribute::Bold),
        header("Score", SortKey::Score, sort),
        header("Level", SortKey::Level, sort),
        Cell::new("Mitigation").add_attribute(Attribute::Bold),
    ]);

    for risk in rows {
        table.add_row(vec![
            Cell::new(risk.id),
            Cell::new(&risk.asset),
            Cell::new(&risk.threat),
            Cell::new(risk.likelihood).set_alignment(CellAlignment::Center),
            Cell::new(risk.impact).set_alignment(CellAlignment::Center),
            Cell::new(risk.score).set_alignment(CellAlignment::Right),
            Cell::new(risk.level)
                .fg(level_color(risk.level))
                .add_attribute(Attribute::Bold),
            Cell::new(&risk.mitigation_hint),
        ]);
    }

    table
}

/// The three headline cards plus a per-level count.
pub fn summary_table(summary: &Summary, records: &[RiskRecord]) -> Table {
    let mut table = base_table();
    table.set_header(vec![
        Cell::new("Total Risks").add_attribute(Attribute::Bold),
        Cell::new("High / Critical").add_attribute(Attribute::Bold),
        Cell::new("Average Score").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(summary.total).set_alignment(CellAlignment::Center),
        Cell::new(summary.high_critical)
            .fg(if summary.high_critical > 0 {
                Color::Red
            } else {
                Color::Reset
            })
            .set_alignment(CellAlignment::Center),
        Cell::new(summary.average_score).set_alignment(CellAlignment::Center),
    ]);

    let breakdown = level_breakdown(records)
        .iter()
        .map(|(level, count)| format!("{}: {}", level, count))
        .collect::<Vec<_>>()
        .join("  ");
    table.add_row(vec![Cell::new(breakdown), Cell::new(""), Cell::new("")]);

    table
}

/// Likelihood rows (1 at the top) by impact columns. Cells are tinted with
/// the level their coordinates imply; empty cells stay plain.
pub fn heatmap_table(heatmap: &Heatmap, show_assets: bool) -> Table {
    let mut table = base_table();

    let mut head = vec![Cell::new("Likelihood \\ Impact").add_attribute(Attribute::Bold)];
    head.extend((1..=GRID_SIZE).map(|i| {
        Cell::new(format!("Impact {}", i))
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Center)
    }));
    table.set_header(head);

    for (li, row) in heatmap.rows().enumerate() {
        let mut cells = vec![Cell::new(format!("Likelihood {}", li + 1)).add_attribute(Attribute::Bold)];
        for cell in row.iter() {
            let text = if show_assets && !cell.is_empty() {
                format!("{}\n{}", cell.count, cell.assets.join(", "))
            } else {
                cell.count.to_string()
            };
            let mut rendered = Cell::new(text).set_alignment(CellAlignment::Center);
            if cell.is_empty() {
                rendered = rendered.add_attribute(Attribute::Dim);
            } else {
                rendered = rendered
                    .fg(level_color(cell.level))
                    .add_attribute(Attribute::Bold);
            }
            cells.push(rendered);
        }
        table.add_row(cells);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, asset: &str, likelihood: i32, impact: i32) -> RiskRecord {
        RiskRecord::from_ratings(id, asset, "threat", likelihood, impact)
    }

    #[test]
    fn test_risk_table_marks_active_sort_column() {
        let rows = vec![record(1, "DB", 5, 5)];
        let sort = SortState::default().select(SortKey::Score);
        let rendered = risk_table(&rows, &sort).to_string();

        assert!(rendered.contains("Score ↓"));
        assert!(rendered.contains("DB"));
        assert!(rendered.contains("Immediate mitigation + escalation"));
    }

    #[test]
    fn test_heatmap_lists_assets_when_asked() {
        let records = vec![record(1, "Mail", 1, 1), record(2, "Wiki", 1, 1)];
        let heatmap = Heatmap::from_records(&records);

        assert!(heatmap_table(&heatmap, true).to_string().contains("Mail, Wiki"));
        assert!(!heatmap_table(&heatmap, false).to_string().contains("Mail"));
    }

    #[test]
    fn test_summary_shows_average_with_two_decimals() {
        let records = vec![record(1, "A", 2, 3), record(2, "B", 3, 4)];
        let summary = Summary::from_records(&records);
        let rendered = summary_table(&summary, &records).to_string();

        assert!(rendered.contains("9.00"));
        assert!(rendered.contains("Medium: 2"));
    }
}
