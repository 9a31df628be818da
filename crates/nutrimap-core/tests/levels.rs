use nutrimap_core::models::{NutritionLevel, RiskLevel};

#[test]
fn display_labels_match_the_stored_strings() {
    assert_eq!(RiskLevel::High.to_string(), "High");
    assert_eq!(RiskLevel::Medium.to_string(), "Medium");
    assert_eq!(RiskLevel::Low.to_string(), "Low");
    assert_eq!(NutritionLevel::Severe.to_string(), "Severe");
    assert_eq!(NutritionLevel::Moderate.to_string(), "Moderate");
    assert_eq!(NutritionLevel::Normal.to_string(), "Normal");
}

#[test]
fn serde_uses_snake_case_tags() {
    assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
    assert_eq!(
        serde_json::from_str::<NutritionLevel>("\"moderate\"").unwrap(),
        NutritionLevel::Moderate
    );
}

#[test]
fn style_classes_cover_every_level() {
    assert_eq!(RiskLevel::High.style_class(), "status-high");
    assert_eq!(RiskLevel::Medium.style_class(), "status-medium");
    assert_eq!(RiskLevel::Low.style_class(), "status-low");
    assert_eq!(NutritionLevel::Severe.style_class(), "status-severe");
}

#[test]
fn descriptions_are_nonempty_for_every_level() {
    for level in [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low] {
        assert!(!level.description().is_empty());
    }
}
