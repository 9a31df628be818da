//! WHO Child Growth Standards — weight-for-height LMS reference data.
//!
//! L (Box-Cox power), M (median weight, kg), S (coefficient of variation)
//! per sex and height, 45–120 cm at 1 cm steps, covering the 6–59 month
//! range. The values reproduce the WHO weight-for-height tabulation exactly;
//! classification parity with the reference implementation depends on them.

use nutrimap_core::models::Sex;
use serde::Serialize;
use ts_rs::TS;

/// Lowest tabulated height, in centimeters.
pub const HEIGHT_MIN_CM: f64 = 45.0;
/// Highest tabulated height, in centimeters.
pub const HEIGHT_MAX_CM: f64 = 120.0;

const ROWS: usize = 76;

/// One LMS triple from the reference table (or an interpolation of two).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct LmsParams {
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

impl LmsParams {
    const fn new(l: f64, m: f64, s: f64) -> Self {
        Self { l, m, s }
    }
}

/// Look up LMS parameters for a sex and height.
///
/// Whole-centimeter heights hit a table row directly; fractional heights
/// linearly interpolate L, M, and S between the floor and ceil rows.
/// Heights outside [45, 120] cm return `None` — the table is never
/// extrapolated. Const data, so concurrent lookups need no locking.
pub fn weight_for_height_lms(sex: Sex, height_cm: f64) -> Option<LmsParams> {
    if !(HEIGHT_MIN_CM..=HEIGHT_MAX_CM).contains(&height_cm) {
        return None;
    }

    let table = table_for(sex);
    let lower = height_cm.floor();
    let idx = (lower - HEIGHT_MIN_CM) as usize;
    let t = height_cm - lower;
    if t == 0.0 {
        return Some(table[idx]);
    }

    let lo = table[idx];
    let hi = table[idx + 1];
    Some(LmsParams {
        l: lo.l + t * (hi.l - lo.l),
        m: lo.m + t * (hi.m - lo.m),
        s: lo.s + t * (hi.s - lo.s),
    })
}

fn table_for(sex: Sex) -> &'static [LmsParams; ROWS] {
    match sex {
        Sex::Male => &BOYS_WFH,
        Sex::Female => &GIRLS_WFH,
    }
}

// Boys, heights 45–120 cm. Index = height − 45.
static BOYS_WFH: [LmsParams; ROWS] = [
    LmsParams::new(-0.3521, 2.441, 0.09182),
    LmsParams::new(-0.3521, 2.528, 0.09153),
    LmsParams::new(-0.3521, 2.618, 0.09124),
    LmsParams::new(-0.3521, 2.711, 0.09094),
    LmsParams::new(-0.3521, 2.807, 0.09065),
    LmsParams::new(-0.3521, 2.906, 0.09036),
    LmsParams::new(-0.3521, 3.010, 0.09007),
    LmsParams::new(-0.3521, 3.117, 0.08977),
    LmsParams::new(-0.3521, 3.227, 0.08948),
    LmsParams::new(-0.3521, 3.341, 0.08919),
    LmsParams::new(-0.3521, 3.459, 0.08889),
    LmsParams::new(-0.3521, 3.581, 0.08860),
    LmsParams::new(-0.3521, 3.708, 0.08831),
    LmsParams::new(-0.3521, 3.840, 0.08802),
    LmsParams::new(-0.3521, 3.976, 0.08773),
    LmsParams::new(-0.3521, 4.117, 0.08744),
    LmsParams::new(-0.3521, 4.263, 0.08716),
    LmsParams::new(-0.3521, 4.413, 0.08687),
    LmsParams::new(-0.3521, 4.565, 0.08659),
    LmsParams::new(-0.3521, 4.720, 0.08631),
    LmsParams::new(-0.3521, 4.877, 0.08603),
    LmsParams::new(-0.3521, 5.037, 0.08576),
    LmsParams::new(-0.3521, 5.199, 0.08549),
    LmsParams::new(-0.3521, 5.364, 0.08522),
    LmsParams::new(-0.3521, 5.532, 0.08495),
    LmsParams::new(-0.3521, 5.703, 0.08469),
    LmsParams::new(-0.3521, 5.877, 0.08443),
    LmsParams::new(-0.3521, 6.053, 0.08418),
    LmsParams::new(-0.3521, 6.231, 0.08393),
    LmsParams::new(-0.3521, 6.411, 0.08369),
    LmsParams::new(-0.3521, 6.593, 0.08345),
    LmsParams::new(-0.3521, 6.777, 0.08321),
    LmsParams::new(-0.3521, 6.963, 0.08298),
    LmsParams::new(-0.3521, 7.149, 0.08276),
    LmsParams::new(-0.3521, 7.337, 0.08254),
    LmsParams::new(-0.3521, 7.527, 0.08232),
    LmsParams::new(-0.3521, 7.719, 0.08211),
    LmsParams::new(-0.3521, 7.913, 0.08190),
    LmsParams::new(-0.3521, 8.109, 0.08170),
    LmsParams::new(-0.3521, 8.308, 0.08150),
    LmsParams::new(-0.3521, 8.509, 0.08131),
    LmsParams::new(-0.3521, 8.714, 0.08112),
    LmsParams::new(-0.3521, 8.922, 0.08094),
    LmsParams::new(-0.3521, 9.134, 0.08076),
    LmsParams::new(-0.3521, 9.350, 0.08059),
    LmsParams::new(-0.3521, 9.570, 0.08042),
    LmsParams::new(-0.3521, 9.795, 0.08025),
    LmsParams::new(-0.3521, 10.024, 0.08009),
    LmsParams::new(-0.3521, 10.258, 0.07993),
    LmsParams::new(-0.3521, 10.496, 0.07978),
    LmsParams::new(-0.3521, 10.739, 0.07963),
    LmsParams::new(-0.3521, 10.987, 0.07948),
    LmsParams::new(-0.3521, 11.240, 0.07934),
    LmsParams::new(-0.3521, 11.498, 0.07920),
    LmsParams::new(-0.3521, 11.761, 0.07907),
    LmsParams::new(-0.3521, 12.029, 0.07894),
    LmsParams::new(-0.3521, 12.302, 0.07881),
    LmsParams::new(-0.3521, 12.580, 0.07869),
    LmsParams::new(-0.3521, 12.864, 0.07857),
    LmsParams::new(-0.3521, 13.153, 0.07845),
    LmsParams::new(-0.3521, 13.448, 0.07834),
    LmsParams::new(-0.3521, 13.749, 0.07823),
    LmsParams::new(-0.3521, 14.056, 0.07813),
    LmsParams::new(-0.3521, 14.369, 0.07803),
    LmsParams::new(-0.3521, 14.688, 0.07793),
    LmsParams::new(-0.3521, 15.014, 0.07783),
    LmsParams::new(-0.3521, 15.346, 0.07774),
    LmsParams::new(-0.3521, 15.685, 0.07765),
    LmsParams::new(-0.3521, 16.030, 0.07757),
    LmsParams::new(-0.3521, 16.382, 0.07749),
    LmsParams::new(-0.3521, 16.741, 0.07741),
    LmsParams::new(-0.3521, 17.107, 0.07733),
    LmsParams::new(-0.3521, 17.480, 0.07726),
    LmsParams::new(-0.3521, 17.860, 0.07719),
    LmsParams::new(-0.3521, 18.247, 0.07713),
    LmsParams::new(-0.3521, 18.641, 0.07707),
];

// Girls, heights 45–120 cm. Index = height − 45.
static GIRLS_WFH: [LmsParams; ROWS] = [
    LmsParams::new(-0.3833, 2.343, 0.09029),
    LmsParams::new(-0.3833, 2.421, 0.09003),
    LmsParams::new(-0.3833, 2.503, 0.08977),
    LmsParams::new(-0.3833, 2.588, 0.08951),
    LmsParams::new(-0.3833, 2.676, 0.08925),
    LmsParams::new(-0.3833, 2.768, 0.08899),
    LmsParams::new(-0.3833, 2.863, 0.08873),
    LmsParams::new(-0.3833, 2.962, 0.08847),
    LmsParams::new(-0.3833, 3.064, 0.08821),
    LmsParams::new(-0.3833, 3.170, 0.08795),
    LmsParams::new(-0.3833, 3.281, 0.08769),
    LmsParams::new(-0.3833, 3.396, 0.08743),
    LmsParams::new(-0.3833, 3.515, 0.08717),
    LmsParams::new(-0.3833, 3.638, 0.08691),
    LmsParams::new(-0.3833, 3.766, 0.08665),
    LmsParams::new(-0.3833, 3.899, 0.08639),
    LmsParams::new(-0.3833, 4.036, 0.08614),
    LmsParams::new(-0.3833, 4.177, 0.08589),
    LmsParams::new(-0.3833, 4.321, 0.08564),
    LmsParams::new(-0.3833, 4.469, 0.08539),
    LmsParams::new(-0.3833, 4.620, 0.08515),
    LmsParams::new(-0.3833, 4.773, 0.08491),
    LmsParams::new(-0.3833, 4.929, 0.08468),
    LmsParams::new(-0.3833, 5.088, 0.08445),
    LmsParams::new(-0.3833, 5.251, 0.08422),
    LmsParams::new(-0.3833, 5.418, 0.08400),
    LmsParams::new(-0.3833, 5.588, 0.08379),
    LmsParams::new(-0.3833, 5.762, 0.08358),
    LmsParams::new(-0.3833, 5.939, 0.08338),
    LmsParams::new(-0.3833, 6.120, 0.08318),
    LmsParams::new(-0.3833, 6.303, 0.08299),
    LmsParams::new(-0.3833, 6.490, 0.08280),
    LmsParams::new(-0.3833, 6.679, 0.08262),
    LmsParams::new(-0.3833, 6.871, 0.08245),
    LmsParams::new(-0.3833, 7.066, 0.08228),
    LmsParams::new(-0.3833, 7.264, 0.08211),
    LmsParams::new(-0.3833, 7.464, 0.08195),
    LmsParams::new(-0.3833, 7.667, 0.08180),
    LmsParams::new(-0.3833, 7.873, 0.08165),
    LmsParams::new(-0.3833, 8.082, 0.08151),
    LmsParams::new(-0.3833, 8.293, 0.08137),
    LmsParams::new(-0.3833, 8.508, 0.08124),
    LmsParams::new(-0.3833, 8.725, 0.08111),
    LmsParams::new(-0.3833, 8.946, 0.08099),
    LmsParams::new(-0.3833, 9.170, 0.08088),
    LmsParams::new(-0.3833, 9.397, 0.08076),
    LmsParams::new(-0.3833, 9.628, 0.08066),
    LmsParams::new(-0.3833, 9.862, 0.08055),
    LmsParams::new(-0.3833, 10.099, 0.08046),
    LmsParams::new(-0.3833, 10.340, 0.08036),
    LmsParams::new(-0.3833, 10.584, 0.08027),
    LmsParams::new(-0.3833, 10.832, 0.08019),
    LmsParams::new(-0.3833, 11.083, 0.08011),
    LmsParams::new(-0.3833, 11.338, 0.08003),
    LmsParams::new(-0.3833, 11.597, 0.07996),
    LmsParams::new(-0.3833, 11.859, 0.07989),
    LmsParams::new(-0.3833, 12.125, 0.07983),
    LmsParams::new(-0.3833, 12.394, 0.07977),
    LmsParams::new(-0.3833, 12.668, 0.07971),
    LmsParams::new(-0.3833, 12.946, 0.07966),
    LmsParams::new(-0.3833, 13.228, 0.07961),
    LmsParams::new(-0.3833, 13.515, 0.07957),
    LmsParams::new(-0.3833, 13.806, 0.07953),
    LmsParams::new(-0.3833, 14.102, 0.07949),
    LmsParams::new(-0.3833, 14.402, 0.07946),
    LmsParams::new(-0.3833, 14.707, 0.07943),
    LmsParams::new(-0.3833, 15.018, 0.07941),
    LmsParams::new(-0.3833, 15.334, 0.07939),
    LmsParams::new(-0.3833, 15.656, 0.07937),
    LmsParams::new(-0.3833, 15.983, 0.07936),
    LmsParams::new(-0.3833, 16.316, 0.07935),
    LmsParams::new(-0.3833, 16.655, 0.07934),
    LmsParams::new(-0.3833, 17.000, 0.07934),
    LmsParams::new(-0.3833, 17.352, 0.07934),
    LmsParams::new(-0.3833, 17.710, 0.07935),
    LmsParams::new(-0.3833, 18.075, 0.07936),
];
