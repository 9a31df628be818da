use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::levels::RiskLevel;

/// One field-visit measurement record for a child.
///
/// `visit_date` stays in its stored ISO-8601 string form; ISO dates compare
/// lexicographically in chronological order, which the history resolver
/// depends on. A missing date is legal input and sorts before any dated
/// visit. `muac_mm <= 0` means MUAC was not measured at this visit.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Visit {
    pub id: i64,
    pub child_id: i64,
    pub visit_date: Option<String>,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub muac_mm: i64,
    /// Risk label written back by a previous assessment, if any. The engine
    /// never trusts this for recomputation; it is only a display fallback.
    pub risk_level: Option<RiskLevel>,
    pub notes: Option<String>,
}

impl Visit {
    /// MUAC in centimeters, or `None` when not measured.
    pub fn muac_cm(&self) -> Option<f64> {
        (self.muac_mm > 0).then(|| self.muac_mm as f64 / 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn muac_converts_to_cm_only_when_measured() {
        let mut visit = Visit {
            id: 1,
            child_id: 1,
            visit_date: Some("2024-01-01".to_string()),
            height_cm: 85.0,
            weight_kg: 9.0,
            muac_mm: 118,
            risk_level: None,
            notes: None,
        };
        assert_eq!(visit.muac_cm(), Some(11.8));

        visit.muac_mm = 0;
        assert_eq!(visit.muac_cm(), None);
        visit.muac_mm = -3;
        assert_eq!(visit.muac_cm(), None);
    }
}
