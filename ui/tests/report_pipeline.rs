//! End-to-end pipeline: raw CSV text through masking, filtering, and report
//! assembly, the same path the dashboard view takes on every render.

use std::collections::BTreeSet;

use ui::core::columns;
use ui::core::filter::{self, FilterState};
use ui::core::mask;
use ui::core::table::DataTable;
use ui::dashboard::sections::{build_report, ValueUnit};

const RAW_CSV: &str = "\
Full Name,Student ID,WhatsApp Number,Faculty,Semester,GPA,Joins Campus Activities,Average Hours on Assignments
Aisha Rahman,2310150042,081234567801,Engineering,3,3.62,Yes,9
Bram Santoso,2310150118,081234567802,Engineering,3,3.41,Yes,11
Citra Dewi,2210140077,081234567803,Economics,5,3.78,No,7
Daniel Wijaya,2210140102,081234567804,Economics,5,3.12,Yes,6
Eka Putri,2110130015,081234567805,Law,7,3.55,No,8
";

fn loaded_table() -> DataTable {
    let mut table = DataTable::from_csv_str(RAW_CSV).unwrap();
    mask::apply_masking(&mut table);
    table
}

#[test]
fn identity_fields_are_masked_before_anything_else() {
    let table = loaded_table();

    let name_idx = table.column_index(columns::FULL_NAME).unwrap();
    let id_idx = table.column_index(columns::STUDENT_ID).unwrap();
    let phone_idx = table.column_index(columns::WHATSAPP).unwrap();

    for row in table.rows() {
        let name = row[name_idx].display();
        assert!(name.contains('*'), "unmasked name: {name}");

        let id = row[id_idx].display();
        assert!(id.ends_with("*****"), "unmasked id: {id}");

        let phone = row[phone_idx].display();
        assert!(phone.starts_with("081"), "phone prefix lost: {phone}");
        assert!(phone[3..].chars().all(|c| c == '*'), "unmasked phone: {phone}");
    }

    // Non-identity columns are untouched.
    assert_eq!(table.rows()[0][table.column_index(columns::FACULTY).unwrap()].display(), "Engineering");
}

#[test]
fn filters_narrow_the_table_before_reporting() {
    let table = loaded_table();

    let filters = FilterState {
        faculties: BTreeSet::from(["Engineering".to_string(), "Economics".to_string()]),
        semesters: filter::semester_options(&table).into_iter().collect(),
        gpa_range: Some((3.2, 4.0)),
    };
    let filtered = filter::apply_filters(&table, &filters);

    // Engineering 3.62, 3.41 and Economics 3.78 survive; Economics 3.12
    // falls below the range and Law is unselected.
    assert_eq!(filtered.len(), 3);

    let report = build_report(&filtered);
    let semester = report
        .iter()
        .find(|section| section.key == "semester-count")
        .expect("semester section present");
    assert_eq!(
        semester.entries,
        vec![("3".to_string(), 2.0), ("5".to_string(), 1.0)]
    );
}

#[test]
fn gated_mean_covers_only_active_respondents() {
    let table = loaded_table();
    let report = build_report(&table);

    let gpa = report
        .iter()
        .find(|section| section.key == "participant-gpa")
        .expect("participant GPA section present");
    assert_eq!(gpa.unit, ValueUnit::Mean);

    // Mean of 3.62, 3.41, 3.12 (the three "Yes" rows).
    let expected = (3.62 + 3.41 + 3.12) / 3.0;
    assert!((gpa.entries[0].1 - expected).abs() < 1e-9);
    assert!(gpa.caption.contains("3.38"));
}

#[test]
fn full_domain_filters_are_a_no_op() {
    let table = loaded_table();
    let filters = FilterState::full_domain(&table);
    let filtered = filter::apply_filters(&table, &filters);
    assert_eq!(filtered, table);
}

#[test]
fn empty_filter_result_yields_no_sections() {
    let table = loaded_table();
    let filters = FilterState {
        faculties: BTreeSet::from(["Dentistry".to_string()]),
        semesters: filter::semester_options(&table).into_iter().collect(),
        gpa_range: None,
    };
    let filtered = filter::apply_filters(&table, &filters);
    assert!(filtered.is_empty());
    assert!(build_report(&filtered).is_empty());
}

#[test]
fn sections_with_missing_columns_are_dropped_not_errored() {
    let mut table = DataTable::from_csv_str("Faculty,GPA\nLaw,3.0\nLaw,3.4\n").unwrap();
    mask::apply_masking(&mut table);

    let report = build_report(&table);
    // No survey-answer columns at all: nothing to report, nothing to panic on.
    assert!(report.is_empty());
}
