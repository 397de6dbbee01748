//! Declarative report catalog and the driver that evaluates it.
//!
//! Each section declares the columns it needs, how to compute it, and how to
//! chart it. One driver loop walks the catalog against the filtered table and
//! silently skips sections whose columns are missing or whose sub-population
//! is empty. Adding a report section means adding a descriptor here, not a
//! new hand-written conditional block.

use serde::Serialize;

use crate::core::columns;
use crate::core::format;
use crate::core::summary::{self, Gate, SummaryMode};
use crate::core::table::DataTable;

/// Sub-population gate shared by most sections: respondents who participate
/// in campus activities.
pub const PARTICIPANT_GATE: Gate = Gate {
    column: columns::JOINS_ACTIVITIES,
    answer: columns::PARTICIPATION_YES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Bar,
    BarHorizontal,
    Donut,
    Cards,
    Metric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    ByCount,
    ByLabel,
}

#[derive(Debug, Clone, Copy)]
pub enum SectionKind {
    /// Absolute value counts of one categorical column.
    CategoryCount {
        column: &'static str,
        sort: SortOrder,
    },
    /// Percentage shares of one categorical column, optionally gated.
    CategoryShare {
        column: &'static str,
        gate: Option<Gate>,
    },
    /// Arithmetic mean of one numeric column, optionally gated.
    NumericMean {
        column: &'static str,
        label: &'static str,
        gate: Option<Gate>,
    },
    /// Per-group means of a numeric column.
    GroupMeans {
        group: &'static str,
        value: &'static str,
    },
}

pub struct SectionDescriptor {
    pub key: &'static str,
    pub title: &'static str,
    pub required_columns: &'static [&'static str],
    pub kind: SectionKind,
    pub chart: ChartKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueUnit {
    Count,
    Percent,
    Mean,
}

/// One evaluated report section, ready to chart and caption.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    pub key: &'static str,
    pub title: &'static str,
    pub chart: ChartKind,
    pub unit: ValueUnit,
    pub entries: Vec<(String, f64)>,
    pub caption: String,
}

static CATALOG: [SectionDescriptor; 11] = [
    SectionDescriptor {
        key: "semester-count",
        title: "Respondents per Semester",
        required_columns: &[columns::SEMESTER],
        kind: SectionKind::CategoryCount {
            column: columns::SEMESTER,
            sort: SortOrder::ByLabel,
        },
        chart: ChartKind::Bar,
    },
    SectionDescriptor {
        key: "participation",
        title: "Participation in Campus Activities",
        required_columns: &[columns::JOINS_ACTIVITIES],
        kind: SectionKind::CategoryCount {
            column: columns::JOINS_ACTIVITIES,
            sort: SortOrder::ByCount,
        },
        chart: ChartKind::Donut,
    },
    SectionDescriptor {
        key: "participant-gpa",
        title: "GPA of Active Respondents",
        required_columns: &[columns::JOINS_ACTIVITIES, columns::GPA],
        kind: SectionKind::NumericMean {
            column: columns::GPA,
            label: "GPA of active respondents",
            gate: Some(PARTICIPANT_GATE),
        },
        chart: ChartKind::Metric,
    },
    SectionDescriptor {
        key: "activity-level",
        title: "Activity Level",
        required_columns: &[columns::ACTIVITY_LEVEL],
        kind: SectionKind::CategoryCount {
            column: columns::ACTIVITY_LEVEL,
            sort: SortOrder::ByCount,
        },
        chart: ChartKind::Cards,
    },
    SectionDescriptor {
        key: "disruption",
        title: "Do Activities Disrupt Coursework?",
        required_columns: &[columns::DISRUPTS_COURSEWORK],
        kind: SectionKind::CategoryShare {
            column: columns::DISRUPTS_COURSEWORK,
            gate: None,
        },
        chart: ChartKind::Donut,
    },
    SectionDescriptor {
        key: "deadline-habit",
        title: "Assignment Timeliness of Active Respondents",
        required_columns: &[columns::JOINS_ACTIVITIES, columns::DEADLINE_HABIT],
        kind: SectionKind::CategoryShare {
            column: columns::DEADLINE_HABIT,
            gate: Some(PARTICIPANT_GATE),
        },
        chart: ChartKind::Bar,
    },
    SectionDescriptor {
        key: "motivation",
        title: "Activity Impact on Assignment Motivation",
        required_columns: &[columns::JOINS_ACTIVITIES, columns::MOTIVATION_IMPACT],
        kind: SectionKind::CategoryShare {
            column: columns::MOTIVATION_IMPACT,
            gate: Some(PARTICIPANT_GATE),
        },
        chart: ChartKind::BarHorizontal,
    },
    SectionDescriptor {
        key: "work-hours",
        title: "Average Assignment Hours by Participation",
        required_columns: &[columns::JOINS_ACTIVITIES, columns::AVG_WORK_HOURS],
        kind: SectionKind::GroupMeans {
            group: columns::JOINS_ACTIVITIES,
            value: columns::AVG_WORK_HOURS,
        },
        chart: ChartKind::BarHorizontal,
    },
    SectionDescriptor {
        key: "postponement",
        title: "Assignment Postponement among Active Respondents",
        required_columns: &[columns::JOINS_ACTIVITIES, columns::POSTPONEMENT],
        kind: SectionKind::CategoryShare {
            column: columns::POSTPONEMENT,
            gate: Some(PARTICIPANT_GATE),
        },
        chart: ChartKind::Bar,
    },
    SectionDescriptor {
        key: "diligence",
        title: "Diligence on Assignments among Active Respondents",
        required_columns: &[columns::JOINS_ACTIVITIES, columns::DILIGENCE],
        kind: SectionKind::CategoryShare {
            column: columns::DILIGENCE,
            gate: Some(PARTICIPANT_GATE),
        },
        chart: ChartKind::Bar,
    },
    SectionDescriptor {
        key: "pressure",
        title: "Activity Impact on Working Under Pressure",
        required_columns: &[columns::JOINS_ACTIVITIES, columns::PRESSURE_IMPACT],
        kind: SectionKind::CategoryShare {
            column: columns::PRESSURE_IMPACT,
            gate: Some(PARTICIPANT_GATE),
        },
        chart: ChartKind::BarHorizontal,
    },
];

pub fn section_catalog() -> &'static [SectionDescriptor] {
    &CATALOG
}

/// Evaluate the whole catalog against an (already filtered) table.
pub fn build_report(table: &DataTable) -> Vec<SectionReport> {
    section_catalog()
        .iter()
        .filter_map(|descriptor| compute_section(descriptor, table))
        .collect()
}

fn compute_section(descriptor: &SectionDescriptor, table: &DataTable) -> Option<SectionReport> {
    if !descriptor
        .required_columns
        .iter()
        .all(|column| table.has_column(column))
    {
        return None;
    }

    let (unit, entries, caption) = match descriptor.kind {
        SectionKind::CategoryCount { column, sort } => {
            let summary = summary::summarize(table, column, SummaryMode::Count, None)?;
            let mut entries = summary.distribution;
            if sort == SortOrder::ByLabel {
                sort_by_label(&mut entries);
            }
            (ValueUnit::Count, entries, summary.caption)
        }
        SectionKind::CategoryShare { column, gate } => {
            let summary =
                summary::summarize(table, column, SummaryMode::Percentage, gate.as_ref())?;
            let caption = if gate.is_some() {
                format!(
                    "Among active respondents, most fall in the '{}' category (~{}).",
                    summary.top_label,
                    format::format_percent(summary.top_share),
                )
            } else {
                summary.caption
            };
            (ValueUnit::Percent, summary.distribution, caption)
        }
        SectionKind::NumericMean {
            column,
            label,
            gate,
        } => {
            let summary = summary::summarize(table, column, SummaryMode::Mean, gate.as_ref())?;
            let caption = format!(
                "The average {label} is {}.",
                format::format_decimal(summary.top_share, 2)
            );
            (
                ValueUnit::Mean,
                vec![(label.to_string(), summary.top_share)],
                caption,
            )
        }
        SectionKind::GroupMeans { group, value } => {
            let summary = summary::summarize_group_means(table, group, value)?;
            (ValueUnit::Mean, summary.distribution, summary.caption)
        }
    };

    Some(SectionReport {
        key: descriptor.key,
        title: descriptor.title,
        chart: descriptor.chart,
        unit,
        entries,
        caption,
    })
}

/// Numeric-aware label ordering so semester charts run 1, 2, … 10.
fn sort_by_label(entries: &mut [(String, f64)]) {
    entries.sort_by(|a, b| match (a.0.parse::<f64>(), b.0.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
        _ => a.0.cmp(&b.0),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survey() -> DataTable {
        DataTable::from_csv_str(
            "Semester,Joins Campus Activities,GPA,Average Hours on Assignments\n\
             3,Yes,3.2,5\n\
             5,Yes,3.6,4\n\
             3,No,2.9,2\n\
             10,No,3.1,3\n",
        )
        .unwrap()
    }

    #[test]
    fn catalog_sections_with_missing_columns_are_skipped() {
        let table = DataTable::from_csv_str("Semester\n3\n5\n").unwrap();
        let report = build_report(&table);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].key, "semester-count");
    }

    #[test]
    fn semester_chart_is_ordered_numerically_by_label() {
        let report = build_report(&survey());
        let semester = report.iter().find(|r| r.key == "semester-count").unwrap();
        let labels: Vec<&str> = semester.entries.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["3", "5", "10"]);
        // Caption still names the most frequent semester.
        assert!(semester.caption.contains("'3'"));
    }

    #[test]
    fn gated_sections_cover_only_participants() {
        let report = build_report(&survey());
        let gpa = report.iter().find(|r| r.key == "participant-gpa").unwrap();
        assert_eq!(gpa.unit, ValueUnit::Mean);
        assert!((gpa.entries[0].1 - 3.4).abs() < 1e-9);
    }

    #[test]
    fn group_means_section_compares_participation_groups() {
        let report = build_report(&survey());
        let hours = report.iter().find(|r| r.key == "work-hours").unwrap();
        assert_eq!(
            hours.entries,
            vec![("Yes".to_string(), 4.5), ("No".to_string(), 2.5)]
        );
    }

    #[test]
    fn empty_sub_population_skips_the_section() {
        let table = DataTable::from_csv_str(
            "Joins Campus Activities,GPA\nNo,3.0\nNo,2.5\n",
        )
        .unwrap();
        let report = build_report(&table);
        assert!(report.iter().all(|r| r.key != "participant-gpa"));
        // The ungated participation section still renders.
        assert!(report.iter().any(|r| r.key == "participation"));
    }

    #[test]
    fn empty_table_produces_no_sections() {
        assert!(build_report(&DataTable::empty()).is_empty());
    }
}
