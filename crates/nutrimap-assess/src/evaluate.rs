//! Assessment orchestration: raw visit-record inputs in, one combined
//! nutrition/risk result out.

use jiff::Unit;
use jiff::civil::Date;
use nutrimap_core::models::{NutritionLevel, RiskLevel, Sex};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::classify::classify;
use crate::error::AssessError;
use crate::risk::score_risk;
use crate::zscore::whz_z_score;

/// Age assumed when the birth or visit date is missing or malformed, months.
/// A heuristic stand-in, not a corrected value; callers needing precise age
/// must validate dates upstream.
pub const AGE_FALLBACK_MONTHS: i32 = 36;

/// Conservative MUAC substitute for risk scoring when MUAC was not
/// measured, centimeters. Sits above both borderline bands, so an
/// unmeasured MUAC never adds band points on its own.
pub const DEFAULT_SCORING_MUAC_CM: f64 = 13.0;

/// Raw inputs for one visit assessment, in their stored units.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentInput {
    /// ISO-8601 birth date as stored on the child record.
    pub birth_date: String,
    /// ISO-8601 visit date; `None` or unparsable falls back to the default age.
    pub visit_date: Option<String>,
    /// Free-text gender as stored; normalized internally.
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// MUAC in millimeters; `<= 0` means not measured.
    pub muac_mm: i64,
    /// Previous visit's MUAC in millimeters, when one exists and was measured.
    pub prev_muac_mm: Option<i64>,
    /// Previous visit's weight in kilograms.
    pub prev_weight_kg: Option<f64>,
}

/// The complete assessment of one visit. Produced fresh per call and never
/// persisted by the engine; identical inputs give bit-identical results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub nutrition_level: NutritionLevel,
    pub risk_level: RiskLevel,
    /// Weight-for-height z-score, or `None` when sex, height, or weight made
    /// it uncomputable.
    pub z_score: Option<f64>,
    /// True when a missing or malformed date forced the age fallback. The
    /// original system swallowed this silently; the flag lets callers tell a
    /// real 36-month age from an approximated one.
    pub age_defaulted: bool,
}

/// Age in completed calendar months between two ISO date strings.
pub fn age_in_months(birth_date: &str, visit_date: &str) -> Result<i32, AssessError> {
    let birth: Date = birth_date.trim().parse()?;
    let visit: Date = visit_date.trim().parse()?;
    if visit < birth {
        return Err(AssessError::VisitBeforeBirth { birth, visit });
    }
    let span = birth.until((Unit::Month, visit))?;
    Ok(span.get_months())
}

/// Evaluate one visit.
///
/// Total over its whole input space: malformed dates default the age,
/// unknown sex or out-of-range height drop the z-score, unmeasured MUAC
/// falls back to z-only classification and a conservative scoring MUAC.
/// No input makes this return an error.
pub fn evaluate(input: &AssessmentInput) -> Assessment {
    let (age_months, age_defaulted) = match input.visit_date.as_deref() {
        Some(visit_date) => match age_in_months(&input.birth_date, visit_date) {
            Ok(age) => (age, false),
            Err(err) => {
                tracing::debug!(%err, "age not computable, assuming {AGE_FALLBACK_MONTHS} months");
                (AGE_FALLBACK_MONTHS, true)
            }
        },
        None => (AGE_FALLBACK_MONTHS, true),
    };

    let sex = Sex::from_gender(&input.gender);
    let z_score = whz_z_score(sex, input.height_cm, input.weight_kg);
    if z_score.is_none() {
        tracing::debug!(
            gender = %input.gender,
            height_cm = input.height_cm,
            "z-score not computable, classifying from MUAC alone"
        );
    }

    let muac_cm = if input.muac_mm > 0 {
        input.muac_mm as f64 / 10.0
    } else {
        0.0
    };
    let nutrition_level = classify(muac_cm, z_score);

    let scoring_muac_cm = if muac_cm > 0.0 {
        muac_cm
    } else {
        DEFAULT_SCORING_MUAC_CM
    };
    let prev_muac_cm = input
        .prev_muac_mm
        .filter(|mm| *mm > 0)
        .map(|mm| mm as f64 / 10.0);
    let prev_weight_kg = input.prev_weight_kg.filter(|kg| *kg > 0.0);

    let risk_level = score_risk(
        nutrition_level,
        age_months,
        scoring_muac_cm,
        prev_muac_cm,
        input.weight_kg,
        prev_weight_kg,
    );

    Assessment {
        nutrition_level,
        risk_level,
        z_score,
        age_defaulted,
    }
}
