//! The filtered categorical/numeric summarizer.
//!
//! Every report section funnels through [`summarize`]: drop nulls, optionally
//! restrict to a sub-population, aggregate into a descending-frequency
//! distribution (or a mean), and emit one templated interpretive sentence.
//!
//! Missing columns and empty sub-populations yield `None`, never an error.
//! The dashboard degrades gracefully over heterogeneous datasets by skipping
//! whatever a dataset cannot support.

use serde::Serialize;

use super::format;
use super::table::DataTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode {
    Count,
    Percentage,
    Mean,
}

/// Restricts analysis to rows whose `column` equals `answer`, compared
/// trimmed and case-insensitive (e.g. participation = "yes").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    pub column: &'static str,
    pub answer: &'static str,
}

impl Gate {
    pub fn matches(&self, cell_display: &str) -> bool {
        cell_display.trim().eq_ignore_ascii_case(self.answer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Category label → count or percentage, ordered by descending frequency
    /// (ties broken by label so captions are deterministic).
    pub distribution: Vec<(String, f64)>,
    pub top_label: String,
    pub top_share: f64,
    pub caption: String,
}

/// Summarize one column of an (already filtered) table.
///
/// Count/Percentage modes group non-null display values; Mean computes the
/// arithmetic mean over numeric cells. Returns `None` when the column is
/// absent or nothing survives the null drop and the gate.
pub fn summarize(
    table: &DataTable,
    column: &str,
    mode: SummaryMode,
    gate: Option<&Gate>,
) -> Option<Summary> {
    table.column_index(column)?;
    let scoped = match gate {
        Some(gate) => restrict(table, gate)?,
        None => table.clone(),
    };

    match mode {
        SummaryMode::Count | SummaryMode::Percentage => {
            let counts = value_counts(&scoped, column);
            let total: f64 = counts.iter().map(|(_, c)| *c).sum();
            if counts.is_empty() || total == 0.0 {
                return None;
            }

            let (top_label, top_count) = counts[0].clone();
            let top_pct = top_count / total * 100.0;
            let caption = format!(
                "Most respondents fall in the '{top_label}' category ({} of {} respondents, {}).",
                top_count as u64,
                total as u64,
                format::format_percent(top_pct),
            );

            let distribution = match mode {
                SummaryMode::Count => counts,
                _ => counts
                    .into_iter()
                    .map(|(label, count)| (label, count / total * 100.0))
                    .collect(),
            };
            let top_share = match mode {
                SummaryMode::Count => top_count,
                _ => top_pct,
            };

            Some(Summary {
                distribution,
                top_label,
                top_share,
                caption,
            })
        }
        SummaryMode::Mean => {
            let values: Vec<f64> = scoped
                .column_values(column)
                .filter_map(|v| v.as_number())
                .collect();
            if values.is_empty() {
                return None;
            }
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            let caption = format!(
                "The average {column} is {}.",
                format::format_decimal(mean, 2)
            );
            Some(Summary {
                distribution: vec![(column.to_string(), mean)],
                top_label: column.to_string(),
                top_share: mean,
                caption,
            })
        }
    }
}

/// Per-group arithmetic means of a numeric column, ordered descending, with a
/// comparative caption naming the highest and lowest groups.
pub fn summarize_group_means(
    table: &DataTable,
    group_column: &str,
    value_column: &str,
) -> Option<Summary> {
    let group_idx = table.column_index(group_column)?;
    let value_idx = table.column_index(value_column)?;

    let mut groups: Vec<(String, f64, usize)> = Vec::new();
    for row in table.rows() {
        let label = &row[group_idx];
        let value = row[value_idx].as_number();
        if label.is_null() {
            continue;
        }
        if let Some(v) = value {
            let label = label.display();
            match groups.iter_mut().find(|(l, _, _)| *l == label) {
                Some((_, sum, n)) => {
                    *sum += v;
                    *n += 1;
                }
                None => groups.push((label, v, 1)),
            }
        }
    }
    if groups.is_empty() {
        return None;
    }

    let mut distribution: Vec<(String, f64)> = groups
        .into_iter()
        .map(|(label, sum, n)| (label, sum / n as f64))
        .collect();
    distribution.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    let (top_label, top_share) = distribution[0].clone();
    let caption = if distribution.len() > 1 {
        let (low_label, low_mean) = distribution[distribution.len() - 1].clone();
        format!(
            "Respondents who answered '{top_label}' average {} hours, compared with {} for '{low_label}'.",
            format::format_decimal(top_share, 2),
            format::format_decimal(low_mean, 2),
        )
    } else {
        format!(
            "Respondents who answered '{top_label}' average {} hours.",
            format::format_decimal(top_share, 2),
        )
    };

    Some(Summary {
        distribution,
        top_label,
        top_share,
        caption,
    })
}

fn restrict(table: &DataTable, gate: &Gate) -> Option<DataTable> {
    let idx = table.column_index(gate.column)?;
    let scoped = table.filtered(|row| gate.matches(&row[idx].display()));
    if scoped.is_empty() {
        None
    } else {
        Some(scoped)
    }
}

/// Group non-null display values, count occurrences, sort by descending count
/// (label ascending on ties).
fn value_counts(table: &DataTable, column: &str) -> Vec<(String, f64)> {
    let mut counts: Vec<(String, f64)> = Vec::new();
    for value in table.column_values(column) {
        if value.is_null() {
            continue;
        }
        let label = value.display();
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, c)) => *c += 1.0,
            None => counts.push((label, 1.0)),
        }
    }
    counts.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participation_table() -> DataTable {
        DataTable::from_csv_str(
            "Joins Campus Activities,GPA,Hours\n\
             Ya,3.5,4\n\
             Ya,3.0,6\n\
             Tidak,2.5,2\n",
        )
        .unwrap()
    }

    #[test]
    fn percentage_distribution_matches_value_counts() {
        let table = participation_table();
        let summary = summarize(
            &table,
            "Joins Campus Activities",
            SummaryMode::Percentage,
            None,
        )
        .unwrap();

        assert_eq!(summary.top_label, "Ya");
        let rounded: Vec<(String, f64)> = summary
            .distribution
            .iter()
            .map(|(l, p)| (l.clone(), (p * 10.0).round() / 10.0))
            .collect();
        assert_eq!(
            rounded,
            vec![("Ya".to_string(), 66.7), ("Tidak".to_string(), 33.3)]
        );
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let table = DataTable::from_csv_str("Answer\na\nb\nb\nc\nc\nc\n").unwrap();
        let summary = summarize(&table, "Answer", SummaryMode::Percentage, None).unwrap();
        let total: f64 = summary.distribution.iter().map(|(_, p)| p).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn count_mode_orders_by_descending_frequency() {
        let table = DataTable::from_csv_str("Answer\nb\na\nb\na\nb\n").unwrap();
        let summary = summarize(&table, "Answer", SummaryMode::Count, None).unwrap();
        assert_eq!(
            summary.distribution,
            vec![("b".to_string(), 3.0), ("a".to_string(), 2.0)]
        );
        assert_eq!(summary.top_share, 3.0);
        assert!(summary.caption.contains("'b'"));
        assert!(summary.caption.contains("60.0%"));
    }

    #[test]
    fn ties_break_by_label() {
        let table = DataTable::from_csv_str("Answer\nz\na\n").unwrap();
        let summary = summarize(&table, "Answer", SummaryMode::Count, None).unwrap();
        assert_eq!(summary.top_label, "a");
    }

    #[test]
    fn absent_column_yields_none() {
        let table = participation_table();
        assert!(summarize(&table, "Ghost", SummaryMode::Count, None).is_none());
    }

    #[test]
    fn nulls_are_dropped_before_aggregation() {
        let table = DataTable::from_csv_str("Answer\nyes\n\nyes\n\n").unwrap();
        let summary = summarize(&table, "Answer", SummaryMode::Percentage, None).unwrap();
        assert_eq!(summary.distribution.len(), 1);
        assert!((summary.top_share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn gate_restricts_to_sub_population() {
        let table = participation_table();
        let gate = Gate {
            column: "Joins Campus Activities",
            answer: "ya",
        };
        let summary = summarize(&table, "GPA", SummaryMode::Mean, Some(&gate)).unwrap();
        assert!((summary.top_share - 3.25).abs() < 1e-9);
        assert!(summary.caption.contains("3.25"));
    }

    #[test]
    fn empty_sub_population_is_skipped() {
        let table = participation_table();
        let gate = Gate {
            column: "Joins Campus Activities",
            answer: "maybe",
        };
        assert!(summarize(&table, "GPA", SummaryMode::Mean, Some(&gate)).is_none());
    }

    #[test]
    fn gate_comparison_trims_and_ignores_case() {
        let table =
            DataTable::from_csv_str("Joins Campus Activities,GPA\n  YA ,3.0\n").unwrap();
        let gate = Gate {
            column: "Joins Campus Activities",
            answer: "ya",
        };
        assert!(summarize(&table, "GPA", SummaryMode::Mean, Some(&gate)).is_some());
    }

    #[test]
    fn group_means_compare_highest_and_lowest() {
        let table = participation_table();
        let summary =
            summarize_group_means(&table, "Joins Campus Activities", "Hours").unwrap();
        assert_eq!(
            summary.distribution,
            vec![("Ya".to_string(), 5.0), ("Tidak".to_string(), 2.0)]
        );
        assert!(summary.caption.contains("'Ya'"));
        assert!(summary.caption.contains("'Tidak'"));
    }

    #[test]
    fn group_means_require_both_columns() {
        let table = participation_table();
        assert!(summarize_group_means(&table, "Ghost", "Hours").is_none());
        assert!(summarize_group_means(&table, "Joins Campus Activities", "Ghost").is_none());
    }
}
