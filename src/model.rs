//! Ingestion schema for the assessment API.
//!
//! The patient feed is deliberately noisy: the same column arrives as a
//! string on one row and a number on the next, and fields go missing
//! entirely. Every field is therefore decoded once into a tagged scalar
//! (`RawField`) at ingestion, and the parsers in `scoring::parse` decide
//! what each value actually means.

use serde::{Deserialize, Serialize};

/// A scalar exactly as the feed sent it.
///
/// Variant order matters for `untagged`: strings are tried first so a quoted
/// number stays text, and integers are tried before floats so whole numbers
/// keep their type. Anything non-scalar (objects, arrays, booleans) lands in
/// `Other` and is unparseable everywhere downstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Text(String),
    Int(i64),
    Float(f64),
    Other(serde_json::Value),
}

impl RawField {
    /// The string content, if this field is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawField::Text(s) => Some(s),
            _ => None,
        }
    }

    /// True for a string that is empty after trimming.
    pub fn is_blank(&self) -> bool {
        matches!(self, RawField::Text(s) if s.trim().is_empty())
    }
}

/// One patient row from the feed. All fields optional at the wire level;
/// absence versus malformation is distinguished later by the data-quality
/// detector. Never mutated after receipt.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PatientRecord {
    #[serde(default)]
    pub patient_id: Option<RawField>,
    #[serde(default)]
    pub blood_pressure: Option<RawField>,
    #[serde(default)]
    pub temperature: Option<RawField>,
    #[serde(default)]
    pub age: Option<RawField>,
}

impl PatientRecord {
    /// The usable identifier: trimmed non-empty text, or a numeric id
    /// rendered as text. `None` means the record is skipped entirely by
    /// the aggregator.
    pub fn id(&self) -> Option<String> {
        match self.patient_id.as_ref()? {
            RawField::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            RawField::Int(n) => Some(n.to_string()),
            RawField::Float(x) => Some(x.to_string()),
            RawField::Other(_) => None,
        }
    }
}

/// Per-record parse result, rebuilt on every scoring pass.
///
/// A component is `None` iff its source field was absent, empty, or failed
/// numeric parsing, never a placeholder value. A parsed-but-invalid age
/// (≤ 0) stays `Some` here; the classifier and detector handle it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParsedVitals {
    pub systolic: Option<u32>,
    pub diastolic: Option<u32>,
    pub temperature: Option<f64>,
    pub age: Option<i64>,
}

/// Body of `GET /patients`.
#[derive(Debug, Clone, Deserialize)]
pub struct PatientsPage {
    #[serde(default)]
    pub data: Vec<PatientRecord>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    #[serde(rename = "hasNext", default)]
    pub has_next: bool,
}

/// Body of `POST /submit-assessment`: three duplicate-free identifier lists,
/// each sorted ascending. Built once per run and sent exactly once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub high_risk_patients: Vec<String>,
    pub fever_patients: Vec<String>,
    pub data_quality_issues: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_from(json: &str) -> PatientRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn mixed_field_types_decode() {
        let r = record_from(
            r#"{"patient_id":"P1","blood_pressure":"120/80","temperature":"98.6","age":45}"#,
        );
        assert_eq!(r.patient_id, Some(RawField::Text("P1".into())));
        assert_eq!(r.temperature, Some(RawField::Text("98.6".into())));
        assert_eq!(r.age, Some(RawField::Int(45)));
    }

    #[test]
    fn numeric_temperature_stays_numeric() {
        let r = record_from(r#"{"patient_id":"P1","temperature":99.1}"#);
        assert_eq!(r.temperature, Some(RawField::Float(99.1)));
        assert_eq!(r.blood_pressure, None);
    }

    #[test]
    fn null_and_absent_both_decode_to_none() {
        let r = record_from(r#"{"patient_id":"P1","age":null}"#);
        assert_eq!(r.age, None);
        assert_eq!(r.temperature, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let r = record_from(r#"{"patient_id":"P1","ward":"B2","age":30}"#);
        assert_eq!(r.id().as_deref(), Some("P1"));
    }

    #[test]
    fn non_scalar_field_lands_in_other() {
        let r = record_from(r#"{"patient_id":"P1","age":{"value":30}}"#);
        assert!(matches!(r.age, Some(RawField::Other(_))));
    }

    #[test]
    fn id_trims_and_rejects_blank() {
        let r = record_from(r#"{"patient_id":"  P7  "}"#);
        assert_eq!(r.id().as_deref(), Some("P7"));

        let blank = record_from(r#"{"patient_id":"   "}"#);
        assert_eq!(blank.id(), None);

        let numeric = record_from(r#"{"patient_id":42}"#);
        assert_eq!(numeric.id().as_deref(), Some("42"));
    }

    #[test]
    fn page_without_pagination_decodes() {
        let page: PatientsPage =
            serde_json::from_str(r#"{"data":[{"patient_id":"P1"}]}"#).unwrap();
        assert_eq!(page.data.len(), 1);
        assert!(page.pagination.is_none());
    }

    #[test]
    fn payload_serializes_with_exact_keys() {
        let payload = SubmissionPayload {
            high_risk_patients: vec!["A".into()],
            fever_patients: vec![],
            data_quality_issues: vec!["C".into()],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["high_risk_patients"][0], "A");
        assert_eq!(json["fever_patients"].as_array().unwrap().len(), 0);
        assert_eq!(json["data_quality_issues"][0], "C");
    }
}
