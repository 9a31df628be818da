use nutrimap_assess::risk::{risk_from_muac_mm, score_risk};
use nutrimap_core::models::{NutritionLevel, RiskLevel};

#[test]
fn severe_under_two_years_is_high() {
    // 3 (severe) + 1 (age < 24 months) = 4.
    let risk = score_risk(NutritionLevel::Severe, 12, 11.0, None, 8.0, None);
    assert_eq!(risk, RiskLevel::High);
}

#[test]
fn normal_with_a_muac_drop_is_medium() {
    // 1 (normal) + 1 (MUAC drop 0.6 >= 0.5) = 2.
    let risk = score_risk(NutritionLevel::Normal, 36, 13.0, Some(13.6), 10.0, Some(10.0));
    assert_eq!(risk, RiskLevel::Medium);
}

#[test]
fn healthy_older_child_is_low() {
    let risk = score_risk(NutritionLevel::Normal, 36, 13.5, None, 12.0, None);
    assert_eq!(risk, RiskLevel::Low);
}

#[test]
fn borderline_bands_add_a_point_each_side() {
    // 2 (moderate) + 1 (band [11.5, 11.9)) = 3.
    let risk = score_risk(NutritionLevel::Moderate, 30, 11.7, None, 9.0, None);
    assert_eq!(risk, RiskLevel::Medium);

    // Band edges: 11.9 and 12.9 are outside their bands.
    assert_eq!(
        score_risk(NutritionLevel::Moderate, 30, 11.9, None, 9.0, None),
        RiskLevel::Medium
    );
    // 1 (normal) + 1 (band [12.5, 12.9)) = 2.
    assert_eq!(
        score_risk(NutritionLevel::Normal, 30, 12.5, None, 10.0, None),
        RiskLevel::Medium
    );
    assert_eq!(
        score_risk(NutritionLevel::Normal, 30, 12.9, None, 10.0, None),
        RiskLevel::Low
    );
}

#[test]
fn trend_points_stack_with_base_and_age() {
    // 2 (moderate) + 1 (age) + 1 (band) + 1 (MUAC drop) + 1 (weight loss) = 6.
    let risk = score_risk(NutritionLevel::Moderate, 18, 11.6, Some(12.4), 9.0, Some(9.6));
    assert_eq!(risk, RiskLevel::High);
}

#[test]
fn trend_thresholds_are_inclusive() {
    // Exactly 0.5 cm MUAC drop counts; 0.4 cm does not.
    assert_eq!(
        score_risk(NutritionLevel::Normal, 36, 13.0, Some(13.5), 10.0, None),
        RiskLevel::Medium
    );
    assert_eq!(
        score_risk(NutritionLevel::Normal, 36, 13.0, Some(13.4), 10.0, None),
        RiskLevel::Low
    );

    // Exactly 5% weight loss counts.
    assert_eq!(
        score_risk(NutritionLevel::Normal, 36, 13.5, None, 9.5, Some(10.0)),
        RiskLevel::Medium
    );
}

#[test]
fn nonpositive_previous_values_carry_no_trend() {
    let risk = score_risk(NutritionLevel::Normal, 36, 13.0, Some(0.0), 10.0, Some(-1.0));
    assert_eq!(risk, RiskLevel::Low);
}

#[test]
fn legacy_muac_mm_mapping_is_preserved() {
    assert_eq!(risk_from_muac_mm(0), None);
    assert_eq!(risk_from_muac_mm(-10), None);
    assert_eq!(risk_from_muac_mm(114), Some(RiskLevel::High));
    assert_eq!(risk_from_muac_mm(115), Some(RiskLevel::Medium));
    assert_eq!(risk_from_muac_mm(124), Some(RiskLevel::Medium));
    assert_eq!(risk_from_muac_mm(125), Some(RiskLevel::Low));
}
