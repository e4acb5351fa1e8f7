//! Gear parameters and the radii derived from them.

use crate::error::ValidationError;

/// Largest integer an `f64` represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Input record describing one gear.
///
/// The gear is centered on the origin and extruded along z, spanning
/// `-width / 2..=width / 2`. Only `teeth` is validated; every other
/// combination of values produces a mesh, degenerate or not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearParameters {
    /// Radius of the bore (r0).
    pub inner_radius: f32,
    /// Nominal outer radius before the teeth protrude.
    pub outer_radius: f32,
    /// Axial thickness.
    pub width: f32,
    /// Number of teeth around the circumference.
    pub teeth: u32,
    /// Radial depth of a tooth, split evenly around `outer_radius`.
    pub tooth_depth: f32,
}

impl GearParameters {
    pub fn new(
        inner_radius: f32,
        outer_radius: f32,
        width: f32,
        teeth: u32,
        tooth_depth: f32,
    ) -> Self {
        Self {
            inner_radius,
            outer_radius,
            width,
            teeth,
            tooth_depth,
        }
    }

    /// Build parameters from an untyped tooth count, such as a JavaScript
    /// number or a value read from text.
    pub fn try_new(
        inner_radius: f32,
        outer_radius: f32,
        width: f32,
        teeth: f64,
        tooth_depth: f32,
    ) -> Result<Self, ValidationError> {
        let teeth = Self::teeth_from_f64(teeth)?;
        Ok(Self::new(inner_radius, outer_radius, width, teeth, tooth_depth))
    }

    /// Convert an untyped tooth count into a `u32`.
    ///
    /// Accepts only finite, positive, safe integers that fit in `u32`.
    pub fn teeth_from_f64(teeth: f64) -> Result<u32, ValidationError> {
        if !teeth.is_finite() {
            return Err(ValidationError::NonFiniteTeeth);
        }
        if teeth.fract() != 0.0 {
            return Err(ValidationError::FractionalTeeth(teeth));
        }
        if teeth.abs() > MAX_SAFE_INTEGER {
            return Err(ValidationError::UnsafeTeeth(teeth));
        }
        if teeth <= 0.0 {
            return Err(ValidationError::NonPositiveTeeth);
        }
        if teeth > f64::from(u32::MAX) {
            return Err(ValidationError::TooManyTeeth(teeth as u64));
        }
        Ok(teeth as u32)
    }

    pub fn radii(&self) -> Radii {
        let inner = f64::from(self.inner_radius);
        let outer = f64::from(self.outer_radius);
        let depth = f64::from(self.tooth_depth);
        Radii {
            inner,
            root: outer - depth / 2.0,
            tip: outer + depth / 2.0,
        }
    }

    pub fn half_width(&self) -> f64 {
        f64::from(self.width) * 0.5
    }
}

impl Default for GearParameters {
    fn default() -> Self {
        crate::presets::RED
    }
}

/// The three radii a gear profile is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radii {
    /// Bore radius (r0).
    pub inner: f64,
    /// Tooth root radius (r1).
    pub root: f64,
    /// Tooth tip radius (r2).
    pub tip: f64,
}

impl Radii {
    /// Teeth are inverted when the root lies outside the tip.
    pub fn is_inverted(&self) -> bool {
        self.root > self.tip
    }
}
