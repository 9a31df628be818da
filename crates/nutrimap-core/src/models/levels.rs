use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinical nutrition classification of a single visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NutritionLevel {
    Severe,
    Moderate,
    Normal,
}

impl NutritionLevel {
    /// Clinical phrase shown next to the classification.
    pub fn description(&self) -> &'static str {
        match self {
            NutritionLevel::Severe => "Severe Acute Malnutrition - Urgent attention needed",
            NutritionLevel::Moderate => "Moderate Acute Malnutrition - Monitoring required",
            NutritionLevel::Normal => "Normal nutrition status",
        }
    }

    /// CSS class used by the table and chart views.
    pub fn style_class(&self) -> &'static str {
        match self {
            NutritionLevel::Severe => "status-severe",
            NutritionLevel::Moderate => "status-moderate",
            NutritionLevel::Normal => "status-normal",
        }
    }
}

impl fmt::Display for NutritionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NutritionLevel::Severe => "Severe",
            NutritionLevel::Moderate => "Moderate",
            NutritionLevel::Normal => "Normal",
        };
        f.write_str(label)
    }
}

/// Operational follow-up priority derived from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::High => "Severe Acute Malnutrition - Urgent attention needed",
            RiskLevel::Medium => "Moderate Acute Malnutrition - Monitoring required",
            RiskLevel::Low => "Normal nutrition status",
        }
    }

    pub fn style_class(&self) -> &'static str {
        match self {
            RiskLevel::High => "status-high",
            RiskLevel::Medium => "status-medium",
            RiskLevel::Low => "status-low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
        };
        f.write_str(label)
    }
}
