//! Nutrition classification from MUAC and the weight-for-height z-score.

use nutrimap_core::models::NutritionLevel;

/// MUAC below this is severe acute malnutrition, in centimeters.
pub const MUAC_SEVERE_CM: f64 = 11.5;
/// MUAC below this (and at or above severe) is moderate, in centimeters.
pub const MUAC_MODERATE_CM: f64 = 12.5;
/// WHZ below this is severe.
pub const WHZ_SEVERE: f64 = -3.0;
/// WHZ below this is moderate.
pub const WHZ_MODERATE: f64 = -2.0;

/// Classify a visit from MUAC (cm) and an optional WHZ z-score.
///
/// All cut points are strict lower bounds: a MUAC of exactly 11.5 cm is
/// Moderate, exactly 12.5 cm is Normal. When MUAC was not measured
/// (`muac_cm <= 0`) the z-score alone decides, and with both unavailable
/// the classification defaults to Normal.
pub fn classify(muac_cm: f64, z_score: Option<f64>) -> NutritionLevel {
    if muac_cm <= 0.0 {
        return match z_score {
            Some(z) if z < WHZ_SEVERE => NutritionLevel::Severe,
            Some(z) if z < WHZ_MODERATE => NutritionLevel::Moderate,
            _ => NutritionLevel::Normal,
        };
    }

    if muac_cm < MUAC_SEVERE_CM || z_score.is_some_and(|z| z < WHZ_SEVERE) {
        return NutritionLevel::Severe;
    }
    if muac_cm < MUAC_MODERATE_CM || z_score.is_some_and(|z| z < WHZ_MODERATE) {
        return NutritionLevel::Moderate;
    }
    NutritionLevel::Normal
}
