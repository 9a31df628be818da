//! nutrimap-assess
//!
//! The Nutrition Risk Assessment Engine: WHO weight-for-height reference
//! lookup, LMS z-scores, MUAC/WHZ classification, trend-aware risk scoring,
//! and visit-history resolution. Pure computation — no storage or UI
//! dependency. Every public entry point is total (degraded inputs map to
//! documented fallbacks, never errors) and safe to call concurrently.

pub mod classify;
pub mod error;
pub mod evaluate;
pub mod history;
pub mod population;
pub mod reference;
pub mod risk;
pub mod zscore;

pub use classify::classify;
pub use evaluate::{Assessment, AssessmentInput, evaluate};
pub use history::{VisitHistory, history_for_child, latest_per_child};
pub use population::{RiskBreakdown, assess_population, risk_breakdown};
pub use reference::{LmsParams, weight_for_height_lms};
pub use risk::score_risk;
pub use zscore::{lms_z_score, whz_z_score};
