//! Monthly income/expense rollup.
//!
//! The ledger repository sums each month with entries in SQL. Every month between the
//! earliest and the latest of those is reported, so a quiet month shows up as zeros
//! instead of disappearing from the series.

use std::collections::BTreeMap;

use crate::server::model::ledger::MonthlyReportRow;

/// Fills the months missing between the first and last row, latest month first.
pub fn fill_month_gaps(
    rows: impl IntoIterator<Item = MonthlyReportRow>,
) -> Vec<MonthlyReportRow> {
    let mut months: BTreeMap<(i32, u32), MonthlyReportRow> = rows
        .into_iter()
        .map(|row| ((row.year, row.month), row))
        .collect();

    let (Some(&first), Some(&last)) = (months.keys().next(), months.keys().next_back()) else {
        return Vec::new();
    };

    let mut cursor = first;
    while cursor < last {
        cursor = next_month(cursor);
        months
            .entry(cursor)
            .or_insert_with(|| MonthlyReportRow::empty(cursor.0, cursor.1));
    }

    months.into_values().rev().collect()
}

fn next_month((year, month): (i32, u32)) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i32, month: u32, total_revenue: f64, total_expenses: f64) -> MonthlyReportRow {
        MonthlyReportRow {
            year,
            month,
            total_revenue,
            total_expenses,
        }
    }

    #[test]
    fn empty_ledger_has_no_rows() {
        assert!(fill_month_gaps(Vec::new()).is_empty());
    }

    #[test]
    fn single_month_is_kept_as_is() {
        let rows = fill_month_gaps(vec![row(2024, 3, 2000.0, 800.0)]);

        assert_eq!(rows, vec![row(2024, 3, 2000.0, 800.0)]);
        assert_eq!(rows[0].profit(), 1200.0);
    }

    #[test]
    fn fills_gaps_and_sorts_latest_first_across_years() {
        let rows = fill_month_gaps(vec![row(2023, 11, 100.0, 0.0), row(2024, 2, 300.0, 0.0)]);

        let months: Vec<(i32, u32)> = rows.iter().map(|row| (row.year, row.month)).collect();
        assert_eq!(months, vec![(2024, 2), (2024, 1), (2023, 12), (2023, 11)]);
        assert_eq!(rows[1], MonthlyReportRow::empty(2024, 1));
    }

    #[test]
    fn profit_matches_revenue_minus_expenses_for_every_month() {
        let rows = fill_month_gaps(vec![row(2024, 1, 120.5, 20.25), row(2024, 3, 0.0, 40.0)]);

        assert_eq!(rows.len(), 3);
        for row in rows {
            assert_eq!(row.profit(), row.total_revenue - row.total_expenses);
        }
    }
}
