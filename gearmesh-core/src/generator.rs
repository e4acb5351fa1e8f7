//! Gear mesh assembly.
use crate::emitter::{emit_pitch, PitchNormals};
use crate::error::{Result, ValidationError};
use crate::geometry::{PitchAngles, PitchProfile};
use crate::mesh::GearMesh;
use crate::options::{GearOptions, NormalStyle};
use crate::params::GearParameters;
use crate::topology::{push_pitch_indices, INDICES_PER_PITCH, VERTICES_PER_PITCH};

/// Generate a gear mesh with the default options.
///
/// # Examples
///
/// ```
/// use gearmesh_core::{generate, GearParameters};
///
/// let mesh = generate(&GearParameters::new(1.0, 2.0, 1.0, 4, 0.4)).unwrap();
/// assert_eq!(mesh.positions.len(), 510);
/// assert_eq!(mesh.indices.len(), 300);
/// ```
pub fn generate(params: &GearParameters) -> Result<GearMesh> {
    generate_with(params, &GearOptions::default())
}

/// Generate a gear mesh.
///
/// Fails only when `params.teeth` is zero or too large for `u32` indices;
/// any other parameters produce a mesh, even when the teeth are inverted.
pub fn generate_with(params: &GearParameters, options: &GearOptions) -> Result<GearMesh> {
    let pitches = pitch_count(params, options)?;

    let radii = params.radii();
    let half_width = params.half_width();
    if radii.is_inverted() {
        log::warn!(
            "tooth depth {} inverts the teeth (root {} > tip {})",
            params.tooth_depth,
            radii.root,
            radii.tip
        );
    }

    let mut mesh = GearMesh::with_capacity(
        pitches as usize * VERTICES_PER_PITCH,
        pitches as usize * INDICES_PER_PITCH,
    );
    for index in 0..pitches {
        let angles = PitchAngles::new(index, params.teeth);
        let profile = PitchProfile::new(&radii, &angles, half_width);
        let normals = PitchNormals::new(&profile, &radii, &angles);

        let base = mesh.vertex_count() as u32;
        emit_pitch(&mut mesh, &profile, &normals);
        push_pitch_indices(&mut mesh.indices, base);
        log::trace!("pitch {} spans {:.4}..{:.4} rad", index, angles.a, angles.e);
    }

    if options.normals == NormalStyle::Unit {
        mesh.normalize_normals();
    }

    log::debug!(
        "generated gear mesh: {} teeth, {} vertices, {} triangles",
        params.teeth,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Number of pitches to emit, checked so every vertex stays addressable by
/// a `u32` index.
fn pitch_count(params: &GearParameters, options: &GearOptions) -> Result<u32> {
    if params.teeth == 0 {
        return Err(ValidationError::NonPositiveTeeth.into());
    }
    let pitches = options.coverage.pitch_count(params.teeth);
    let vertices = pitches * VERTICES_PER_PITCH as u64;
    if vertices > u64::from(u32::MAX) {
        return Err(ValidationError::TooManyTeeth(u64::from(params.teeth)).into());
    }
    Ok(pitches as u32)
}
