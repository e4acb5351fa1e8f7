//! Angle and profile math for one tooth pitch.
//!
//! A pitch spans `2π / teeth` and is split into four equal quarters:
//!
//! ```text
//!     b__c
//!     /  \
//!    /    \__
//!   a     d  e
//! ```
//!
//! The tooth rises from the root at `a` to the tip at `b`, runs along the tip
//! to `c`, falls back to the root at `d`, and the gap follows the root to `e`,
//! which is where the next pitch starts.
use nalgebra::Point3;
use std::f64::consts::PI;

use crate::params::{GearParameters, Radii};

/// Profile slot of the bore point at angle `a`.
pub const INNER_A: usize = 0;
/// Profile slot of the tooth root at angle `a`.
pub const ROOT_A: usize = 1;
/// Profile slot of the tooth tip at angle `b`.
pub const TIP_B: usize = 2;
/// Profile slot of the tooth tip at angle `c`.
pub const TIP_C: usize = 3;
/// Profile slot of the tooth root at angle `d`.
pub const ROOT_D: usize = 4;
/// Profile slot of the tooth root at angle `e`.
pub const ROOT_E: usize = 5;
/// Profile slot of the bore point at angle `e`.
pub const INNER_E: usize = 6;

/// Number of profile points on each face of a pitch.
pub const PROFILE_POINTS: usize = 7;

/// The five angles (radians) bounding the quarters of one pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchAngles {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
}

impl PitchAngles {
    /// Angles for pitch `index` of a gear with `teeth` teeth.
    ///
    /// `teeth` must be non-zero; the generator validates this before
    /// reaching any pitch.
    pub fn new(index: u32, teeth: u32) -> Self {
        let teeth = f64::from(teeth);
        let quarter = 2.0 * PI / teeth / 4.0;
        let a = f64::from(index) * 2.0 * PI / teeth;
        let b = a + quarter;
        let c = b + quarter;
        let d = c + quarter;
        let e = d + quarter;
        Self { a, b, c, d, e }
    }

    pub fn quarter(&self) -> f64 {
        self.b - self.a
    }
}

/// Point at `radius` along `angle` in the xy plane, lifted to `z`.
#[inline]
pub fn polar_point(radius: f64, angle: f64, z: f64) -> Point3<f64> {
    Point3::new(radius * angle.cos(), radius * angle.sin(), z)
}

/// The outline of one pitch on both faces of the gear.
///
/// Both faces hold the same seven points in the same order (see the slot
/// constants); only z differs.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchProfile {
    pub front: [Point3<f64>; PROFILE_POINTS],
    pub back: [Point3<f64>; PROFILE_POINTS],
}

impl PitchProfile {
    pub fn new(radii: &Radii, angles: &PitchAngles, half_width: f64) -> Self {
        Self {
            front: Self::face(radii, angles, half_width),
            back: Self::face(radii, angles, -half_width),
        }
    }

    /// Profile of pitch `index` for the given gear.
    pub fn for_pitch(params: &GearParameters, index: u32) -> Self {
        let angles = PitchAngles::new(index, params.teeth);
        Self::new(&params.radii(), &angles, params.half_width())
    }

    fn face(radii: &Radii, angles: &PitchAngles, z: f64) -> [Point3<f64>; PROFILE_POINTS] {
        [
            polar_point(radii.inner, angles.a, z),
            polar_point(radii.root, angles.a, z),
            polar_point(radii.tip, angles.b, z),
            polar_point(radii.tip, angles.c, z),
            polar_point(radii.root, angles.d, z),
            polar_point(radii.root, angles.e, z),
            polar_point(radii.inner, angles.e, z),
        ]
    }
}
