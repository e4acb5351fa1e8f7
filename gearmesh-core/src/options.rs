//! Generation options.

/// How normals are written to the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalStyle {
    /// Side normals keep their raw cross-product or radial length.
    #[default]
    Raw,
    /// Every normal is scaled to unit length after generation.
    Unit,
}

/// How many pitches the generator walks around the gear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PitchCoverage {
    /// `teeth + 1` pitches. The last one repeats the first a full turn later.
    #[default]
    Inclusive,
    /// Exactly `teeth` pitches, one per tooth.
    Exact,
}

impl PitchCoverage {
    pub fn pitch_count(self, teeth: u32) -> u64 {
        match self {
            PitchCoverage::Inclusive => u64::from(teeth) + 1,
            PitchCoverage::Exact => u64::from(teeth),
        }
    }
}

/// Knobs for `generate_with`. The default reproduces the classic gear
/// buffers: raw normals and the inclusive pitch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GearOptions {
    pub normals: NormalStyle,
    pub coverage: PitchCoverage,
}

impl GearOptions {
    pub fn with_unit_normals(mut self) -> Self {
        self.normals = NormalStyle::Unit;
        self
    }

    pub fn with_exact_pitches(mut self) -> Self {
        self.coverage = PitchCoverage::Exact;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GearOptions::default();
        assert_eq!(options.normals, NormalStyle::Raw);
        assert_eq!(options.coverage, PitchCoverage::Inclusive);
    }

    #[test]
    fn test_pitch_count() {
        assert_eq!(PitchCoverage::Inclusive.pitch_count(4), 5);
        assert_eq!(PitchCoverage::Exact.pitch_count(4), 4);
        assert_eq!(PitchCoverage::Inclusive.pitch_count(u32::MAX), 1 << 32);
    }

    #[test]
    fn test_builders() {
        let options = GearOptions::default().with_unit_normals().with_exact_pitches();
        assert_eq!(options.normals, NormalStyle::Unit);
        assert_eq!(options.coverage, PitchCoverage::Exact);
    }
}
