//! Data-quality detection.
//!
//! Deliberately stricter than the risk classifiers: the classifiers score
//! bad data charitably as zero, so this predicate exists to surface the
//! records that would otherwise pass as "low risk".

use crate::model::{PatientRecord, RawField};

use super::parse::{parse_age, parse_blood_pressure, parse_temperature};

/// True when a required field is absent, null, or a blank string.
fn field_missing(field: Option<&RawField>) -> bool {
    match field {
        None => true,
        Some(f) => f.is_blank(),
    }
}

/// Flag a record whose required fields are missing or unusable.
///
/// Any of: a missing/blank required field; a blood pressure that does not
/// recover both components; a present temperature that fails numeric parse;
/// a present age that fails integer parse or is non-positive.
pub fn has_data_issue(record: &PatientRecord) -> bool {
    if field_missing(record.patient_id.as_ref())
        || field_missing(record.blood_pressure.as_ref())
        || field_missing(record.temperature.as_ref())
        || field_missing(record.age.as_ref())
    {
        return true;
    }

    let (systolic, diastolic) = parse_blood_pressure(record.blood_pressure.as_ref());
    if systolic.is_none() || diastolic.is_none() {
        return true;
    }

    // All four fields are present past this point.
    if parse_temperature(record.temperature.as_ref()).is_none() {
        return true;
    }

    !matches!(parse_age(record.age.as_ref()), Some(a) if a > 0)
}
