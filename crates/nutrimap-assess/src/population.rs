//! Population-wide reassessment for dashboard statistics.
//!
//! The dashboard never trusts stored risk labels: it recomputes every
//! child's risk from the raw latest visit so the pie chart and the profile
//! view always agree.

use std::collections::HashMap;

use nutrimap_core::models::{Child, RiskLevel, Visit};
use serde::Serialize;
use ts_rs::TS;

use crate::evaluate::{AssessmentInput, evaluate};
use crate::history::latest_per_child;

/// Tally of per-child risk labels for the dashboard pie chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct RiskBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub not_assessed: usize,
}

/// Recompute each child's risk from their latest visit.
///
/// One entry per child that has at least one visit. Trend inputs come from
/// the second-latest visit when it exists and its measurements were taken.
/// A visit whose child record is missing keeps its stored label (`None`
/// when it never had one) rather than being dropped from the counts.
pub fn assess_population(children: &[Child], visits: &[Visit]) -> HashMap<i64, Option<RiskLevel>> {
    let child_by_id: HashMap<i64, &Child> = children.iter().map(|c| (c.id, c)).collect();
    let histories = latest_per_child(visits);

    let mut risks = HashMap::with_capacity(histories.len());
    for (child_id, history) in histories {
        let latest = history.latest;
        let Some(child) = child_by_id.get(&child_id) else {
            tracing::warn!(
                child_id,
                visit_id = latest.id,
                "visit references unknown child, keeping stored risk label"
            );
            risks.insert(child_id, latest.risk_level);
            continue;
        };

        let (prev_muac_mm, prev_weight_kg) = match history.previous {
            Some(prev) => (
                (prev.muac_mm > 0).then_some(prev.muac_mm),
                (prev.weight_kg > 0.0).then_some(prev.weight_kg),
            ),
            None => (None, None),
        };

        let input = AssessmentInput {
            birth_date: child.date_of_birth.clone(),
            visit_date: latest.visit_date.clone(),
            gender: child.gender.clone(),
            height_cm: latest.height_cm,
            weight_kg: latest.weight_kg,
            muac_mm: latest.muac_mm,
            prev_muac_mm,
            prev_weight_kg,
        };
        risks.insert(child_id, Some(evaluate(&input).risk_level));
    }

    risks
}

/// Count risk labels into dashboard buckets.
pub fn risk_breakdown(risks: impl IntoIterator<Item = Option<RiskLevel>>) -> RiskBreakdown {
    let mut breakdown = RiskBreakdown::default();
    for risk in risks {
        match risk {
            Some(RiskLevel::High) => breakdown.high += 1,
            Some(RiskLevel::Medium) => breakdown.medium += 1,
            Some(RiskLevel::Low) => breakdown.low += 1,
            None => breakdown.not_assessed += 1,
        }
    }
    breakdown
}
