use nutrimap_assess::classify::classify;
use nutrimap_core::models::NutritionLevel;

#[test]
fn muac_boundaries_are_strict_lower_bounds() {
    assert_eq!(classify(11.4, None), NutritionLevel::Severe);
    assert_eq!(classify(11.5, None), NutritionLevel::Moderate);
    assert_eq!(classify(12.4, None), NutritionLevel::Moderate);
    assert_eq!(classify(12.5, None), NutritionLevel::Normal);
}

#[test]
fn z_score_alone_can_escalate_a_healthy_muac() {
    assert_eq!(classify(13.5, Some(-3.1)), NutritionLevel::Severe);
    assert_eq!(classify(13.5, Some(-2.5)), NutritionLevel::Moderate);
    assert_eq!(classify(13.5, Some(-1.9)), NutritionLevel::Normal);
}

#[test]
fn z_boundaries_are_strict_too() {
    assert_eq!(classify(13.5, Some(-3.0)), NutritionLevel::Moderate);
    assert_eq!(classify(13.5, Some(-2.0)), NutritionLevel::Normal);
}

#[test]
fn unmeasured_muac_falls_back_to_z_score() {
    assert_eq!(classify(0.0, Some(-3.2)), NutritionLevel::Severe);
    assert_eq!(classify(0.0, Some(-2.1)), NutritionLevel::Moderate);
    assert_eq!(classify(0.0, Some(-0.4)), NutritionLevel::Normal);
    assert_eq!(classify(-1.0, Some(-3.2)), NutritionLevel::Severe);
}

#[test]
fn nothing_measured_defaults_to_normal() {
    assert_eq!(classify(0.0, None), NutritionLevel::Normal);
}

#[test]
fn severe_muac_wins_over_a_good_z_score() {
    assert_eq!(classify(11.0, Some(0.5)), NutritionLevel::Severe);
}
