//! Risk classifiers over parsed vitals.
//!
//! Each classifier is total: an unparseable component contributes 0, never
//! a penalty. Thresholds follow the AHA blood-pressure stages and the
//! clinical fever cutoffs used by the assessment.

use crate::model::ParsedVitals;

/// Fever cutoff in °F, shared by the temperature classifier and the fever
/// cohort so the two call sites cannot drift apart.
pub const FEVER_THRESHOLD: f64 = 99.6;

/// High-fever cutoff in °F.
pub const HIGH_FEVER_THRESHOLD: f64 = 101.0;

/// Composite score at or above which a patient is high-risk.
pub const HIGH_RISK_CUTOFF: u32 = 4;

/// Blood-pressure contribution. Evaluated in strict priority order, worst
/// stage first, so the higher of systolic/diastolic always wins. Either
/// component missing → 0.
pub fn bp_risk(systolic: Option<u32>, diastolic: Option<u32>) -> u32 {
    let (Some(sys), Some(dia)) = (systolic, diastolic) else {
        return 0;
    };
    if sys >= 140 || dia >= 90 {
        return 4; // Stage 2
    }
    if sys >= 130 || dia >= 80 {
        return 3; // Stage 1
    }
    if (120..=129).contains(&sys) && dia < 80 {
        return 2; // Elevated
    }
    if sys < 120 && dia < 80 {
        return 1; // Normal
    }
    0
}

/// True at or above the fever cutoff.
pub fn is_feverish(temperature: f64) -> bool {
    temperature >= FEVER_THRESHOLD
}

/// Temperature contribution.
pub fn temperature_risk(temperature: Option<f64>) -> u32 {
    match temperature {
        Some(t) if t >= HIGH_FEVER_THRESHOLD => 2,
        Some(t) if is_feverish(t) => 1,
        _ => 0,
    }
}

/// Age contribution. The under-40 band deliberately scores the same as the
/// 40–65 band; only seniors get a distinct tier.
pub fn age_risk(age: Option<i64>) -> u32 {
    match age {
        None => 0,
        Some(a) if a <= 0 => 0,
        Some(a) if a > 65 => 2,
        Some(_) => 1,
    }
}

/// Composite risk: sum of the three independent contributions.
pub fn composite_risk(vitals: &ParsedVitals) -> u32 {
    bp_risk(vitals.systolic, vitals.diastolic)
        + temperature_risk(vitals.temperature)
        + age_risk(vitals.age)
}

/// High-risk classification over a composite score.
pub fn is_high_risk(score: u32) -> bool {
    score >= HIGH_RISK_CUTOFF
}
