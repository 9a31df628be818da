//! LMS z-score transform.
//!
//! z = [ (X/M)^L − 1 ] / (L·S), or ln(X/M)/S when L = 0, where X is the
//! measurement and L, M, S come from the reference table.

use nutrimap_core::models::Sex;

use crate::reference::{self, LmsParams};

/// Standardized score for a measurement against an LMS triple.
///
/// `None` for a non-positive measurement. `S == 0` would mean a malformed
/// reference row, not bad caller input; it is debug-asserted and treated as
/// not computable.
pub fn lms_z_score(measurement: f64, lms: LmsParams) -> Option<f64> {
    if measurement <= 0.0 {
        return None;
    }
    if lms.s == 0.0 {
        debug_assert!(false, "malformed reference row: S == 0");
        return None;
    }

    let ratio = measurement / lms.m;
    let z = if lms.l == 0.0 {
        ratio.ln() / lms.s
    } else {
        (ratio.powf(lms.l) - 1.0) / (lms.l * lms.s)
    };
    Some(z)
}

/// Weight-for-height z-score (WHZ) against the WHO standards.
///
/// `None` when the sex is unknown, a measurement is non-positive, or the
/// height falls outside the tabulated 45–120 cm range.
pub fn whz_z_score(sex: Option<Sex>, height_cm: f64, weight_kg: f64) -> Option<f64> {
    let sex = sex?;
    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return None;
    }
    let lms = reference::weight_for_height_lms(sex, height_cm)?;
    lms_z_score(weight_kg, lms)
}
