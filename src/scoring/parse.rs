//! Field parsers: raw feed scalars → typed vitals.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{ParsedVitals, PatientRecord, RawField};

/// Strict blood-pressure form: "<int>/<int>", spaces around the slash allowed.
static BP_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*/\s*(\d+)$").unwrap());

/// Lenient recovery: a leading integer is taken as systolic.
static BP_LEADING_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)").unwrap());

/// Lenient recovery: an integer after a slash anywhere is taken as diastolic.
static BP_AFTER_SLASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/(\d+)").unwrap());

/// Parse a blood-pressure field into (systolic, diastolic).
///
/// Two tiers: the strict form wins when it matches; otherwise each half is
/// recovered independently and may stay `None`. Non-string input (numbers,
/// objects) is unparseable by definition; blood pressure only ever arrives
/// as text in this feed.
pub fn parse_blood_pressure(raw: Option<&RawField>) -> (Option<u32>, Option<u32>) {
    let Some(text) = raw.and_then(RawField::as_text) else {
        return (None, None);
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return (None, None);
    }

    if let Some(caps) = BP_EXACT.captures(trimmed) {
        if let (Ok(sys), Ok(dia)) = (caps[1].parse(), caps[2].parse()) {
            return (Some(sys), Some(dia));
        }
    }

    let systolic = BP_LEADING_INT
        .captures(trimmed)
        .and_then(|c| c[1].parse().ok());
    let diastolic = BP_AFTER_SLASH
        .captures(trimmed)
        .and_then(|c| c[1].parse().ok());
    (systolic, diastolic)
}

/// Parse a temperature field into degrees Fahrenheit.
///
/// Strings are trimmed and parsed as floats; numbers pass through after a
/// NaN check. Anything else is unparseable.
pub fn parse_temperature(raw: Option<&RawField>) -> Option<f64> {
    match raw? {
        RawField::Text(s) => {
            let t: f64 = s.trim().parse().ok()?;
            (!t.is_nan()).then_some(t)
        }
        RawField::Int(n) => Some(*n as f64),
        RawField::Float(x) => (!x.is_nan()).then_some(*x),
        RawField::Other(_) => None,
    }
}

/// Parse an age field into whole years.
///
/// Non-positive values survive parsing; the classifier and the data-quality
/// detector decide what a zero or negative age means.
pub fn parse_age(raw: Option<&RawField>) -> Option<i64> {
    match raw? {
        RawField::Text(s) => s.trim().parse().ok(),
        RawField::Int(n) => Some(*n),
        RawField::Float(x) => x.is_finite().then_some(*x as i64),
        RawField::Other(_) => None,
    }
}

/// Parse everything scoring needs out of one record.
pub fn parse_vitals(record: &PatientRecord) -> ParsedVitals {
    let (systolic, diastolic) = parse_blood_pressure(record.blood_pressure.as_ref());
    ParsedVitals {
        systolic,
        diastolic,
        temperature: parse_temperature(record.temperature.as_ref()),
        age: parse_age(record.age.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<RawField> {
        Some(RawField::Text(s.to_string()))
    }

    #[test]
    fn bp_strict_form_returns_both_values() {
        assert_eq!(parse_blood_pressure(text("120/80").as_ref()), (Some(120), Some(80)));
        assert_eq!(parse_blood_pressure(text("145 / 95").as_ref()), (Some(145), Some(95)));
        assert_eq!(parse_blood_pressure(text("  135/88  ").as_ref()), (Some(135), Some(88)));
    }

    #[test]
    fn bp_lenient_recovers_each_half_independently() {
        assert_eq!(parse_blood_pressure(text("150/").as_ref()), (Some(150), None));
        assert_eq!(parse_blood_pressure(text("/90").as_ref()), (None, Some(90)));
        assert_eq!(parse_blood_pressure(text("140-90").as_ref()), (Some(140), None));
        assert_eq!(parse_blood_pressure(text("120/80 mmHg").as_ref()), (Some(120), Some(80)));
    }

    #[test]
    fn bp_without_slash_pair_has_a_missing_half() {
        for bad in ["abc", "high", "150", "", "   "] {
            let (sys, dia) = parse_blood_pressure(text(bad).as_ref());
            assert!(sys.is_none() || dia.is_none(), "{bad:?} parsed to ({sys:?}, {dia:?})");
        }
    }

    #[test]
    fn bp_non_string_is_unparseable() {
        assert_eq!(parse_blood_pressure(Some(&RawField::Int(120))), (None, None));
        assert_eq!(parse_blood_pressure(None), (None, None));
    }

    #[test]
    fn temperature_accepts_strings_and_numbers() {
        assert_eq!(parse_temperature(text("98.6").as_ref()), Some(98.6));
        assert_eq!(parse_temperature(text(" 99.1 ").as_ref()), Some(99.1));
        assert_eq!(parse_temperature(Some(&RawField::Float(100.4))), Some(100.4));
        assert_eq!(parse_temperature(Some(&RawField::Int(99))), Some(99.0));
    }

    #[test]
    fn temperature_rejects_garbage() {
        assert_eq!(parse_temperature(text("warm").as_ref()), None);
        assert_eq!(parse_temperature(text("NaN").as_ref()), None);
        assert_eq!(parse_temperature(text("").as_ref()), None);
        assert_eq!(parse_temperature(None), None);
    }

    #[test]
    fn age_parses_integers_and_keeps_non_positive_values() {
        assert_eq!(parse_age(text("45").as_ref()), Some(45));
        assert_eq!(parse_age(text("-1").as_ref()), Some(-1));
        assert_eq!(parse_age(Some(&RawField::Int(0))), Some(0));
        assert_eq!(parse_age(Some(&RawField::Float(45.7))), Some(45));
    }

    #[test]
    fn age_rejects_non_numeric_text() {
        assert_eq!(parse_age(text("forty").as_ref()), None);
        assert_eq!(parse_age(text("45.5").as_ref()), None);
        assert_eq!(parse_age(None), None);
    }

    #[test]
    fn parse_vitals_never_fabricates_a_component() {
        let record = PatientRecord {
            patient_id: Some(RawField::Text("P1".into())),
            blood_pressure: Some(RawField::Text("bad".into())),
            temperature: None,
            age: Some(RawField::Text("70".into())),
        };
        let vitals = parse_vitals(&record);
        assert_eq!(vitals.systolic, None);
        assert_eq!(vitals.diastolic, None);
        assert_eq!(vitals.temperature, None);
        assert_eq!(vitals.age, Some(70));
    }
}
