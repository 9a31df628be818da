//! Point-based risk scoring with trend signals.

use nutrimap_core::models::{NutritionLevel, RiskLevel};

/// MUAC decline from the previous visit that counts as deterioration, cm.
pub const MUAC_DROP_CM: f64 = 0.5;
/// Fractional weight loss from the previous visit that counts, 5%.
pub const WEIGHT_LOSS_FRACTION: f64 = 0.05;

/// Legacy MUAC-mm severe cut, kept for parity with pre-trend callers.
pub const MUAC_SEVERE_MM: i64 = 115;
/// Legacy MUAC-mm moderate cut.
pub const MUAC_MODERATE_MM: i64 = 125;

/// Accumulate risk points and map them to an operational risk level.
///
/// Base points come from the nutrition level (Severe 3, Moderate 2,
/// Normal 1). One extra point each for: age under 24 months, MUAC in the
/// borderline-severe band [11.5, 11.9), MUAC in the borderline-moderate
/// band [12.5, 12.9), a MUAC drop of at least 0.5 cm since the previous
/// visit, and a weight loss of at least 5% since the previous visit. The
/// two borderline bands are disjoint, but nothing caps the total.
/// 4+ points → High, 2–3 → Medium, otherwise Low.
pub fn score_risk(
    nutrition: NutritionLevel,
    age_months: i32,
    muac_cm: f64,
    prev_muac_cm: Option<f64>,
    weight_kg: f64,
    prev_weight_kg: Option<f64>,
) -> RiskLevel {
    let mut points = match nutrition {
        NutritionLevel::Severe => 3,
        NutritionLevel::Moderate => 2,
        NutritionLevel::Normal => 1,
    };

    if age_months < 24 {
        points += 1;
    }
    if (11.5..11.9).contains(&muac_cm) {
        points += 1;
    }
    if (12.5..12.9).contains(&muac_cm) {
        points += 1;
    }
    if let Some(prev) = prev_muac_cm
        && prev > 0.0
        && prev - muac_cm >= MUAC_DROP_CM
    {
        points += 1;
    }
    if let Some(prev) = prev_weight_kg
        && prev > 0.0
        && (prev - weight_kg) / prev >= WEIGHT_LOSS_FRACTION
    {
        points += 1;
    }

    match points {
        4.. => RiskLevel::High,
        2..=3 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}

/// Legacy single-input risk from MUAC in millimeters.
///
/// Predates the trend-aware scorer: < 115 mm High, 115–124 mm Medium,
/// otherwise Low; unmeasured MUAC has no risk. Not part of the assessment
/// pipeline — kept only for callers that still show the simplified label.
pub fn risk_from_muac_mm(muac_mm: i64) -> Option<RiskLevel> {
    if muac_mm <= 0 {
        return None;
    }
    Some(if muac_mm < MUAC_SEVERE_MM {
        RiskLevel::High
    } else if muac_mm < MUAC_MODERATE_MM {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    })
}
