//! Cohort aggregation: one pass over the fetched records.

use std::collections::BTreeSet;

use crate::model::{PatientRecord, SubmissionPayload};
use crate::scoring::{composite_risk, has_data_issue, is_feverish, is_high_risk, parse_vitals};

/// Classify every record into the three cohorts.
///
/// Records without a usable identifier are skipped outright; they appear in
/// no list, not even data-quality. The sets dedupe repeated identifiers and
/// `BTreeSet` iteration yields them already sorted.
pub fn aggregate(patients: &[PatientRecord]) -> SubmissionPayload {
    let mut high_risk = BTreeSet::new();
    let mut fever = BTreeSet::new();
    let mut data_quality = BTreeSet::new();

    for record in patients {
        let Some(id) = record.id() else { continue };

        let vitals = parse_vitals(record);
        if is_high_risk(composite_risk(&vitals)) {
            high_risk.insert(id.clone());
        }
        // Fever uses the parsed temperature directly, through the same
        // threshold the classifier uses.
        if vitals.temperature.is_some_and(is_feverish) {
            fever.insert(id.clone());
        }
        if has_data_issue(record) {
            data_quality.insert(id);
        }
    }

    SubmissionPayload {
        high_risk_patients: high_risk.into_iter().collect(),
        fever_patients: fever.into_iter().collect(),
        data_quality_issues: data_quality.into_iter().collect(),
    }
}
