//! Per-pitch vertices and their flat face normals.
//!
//! Every face group gets its own copy of the profile points it touches, so a
//! triangle never shares a vertex (and therefore a normal) with a triangle of
//! another face. Side normals are raw cross products or radial vectors and
//! are not unit length.
use nalgebra::{Point3, Vector3};

use crate::geometry::{
    PitchAngles, PitchProfile, INNER_A, INNER_E, ROOT_A, ROOT_D, ROOT_E, TIP_B, TIP_C,
};
use crate::mesh::GearMesh;
use crate::params::Radii;

/// Normals of the seven face groups of a pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchNormals {
    pub front: Vector3<f64>,
    pub back: Vector3<f64>,
    pub tooth_left: Vector3<f64>,
    pub tooth_top: Vector3<f64>,
    pub tooth_right: Vector3<f64>,
    pub gap_top: Vector3<f64>,
    pub inner_bottom: Vector3<f64>,
}

impl PitchNormals {
    pub fn new(profile: &PitchProfile, radii: &Radii, angles: &PitchAngles) -> Self {
        let (f, b) = (&profile.front, &profile.back);
        let radial = |radius: f64, angle: f64| {
            Vector3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
        };
        let gap_top = radial(radii.root, angles.e);

        Self {
            front: Vector3::z(),
            back: -Vector3::z(),
            tooth_left: flank_normal(&f[ROOT_A], &b[ROOT_A], &f[TIP_B]),
            tooth_top: radial(radii.tip, angles.b),
            tooth_right: flank_normal(&f[ROOT_D], &b[ROOT_D], &f[TIP_C]),
            gap_top,
            // the bore reuses the gap direction at `e`
            inner_bottom: gap_top,
        }
    }
}

/// `(back_root - front_root) × (front_root - front_tip)`
fn flank_normal(
    front_root: &Point3<f64>,
    back_root: &Point3<f64>,
    front_tip: &Point3<f64>,
) -> Vector3<f64> {
    (back_root - front_root).cross(&(front_root - front_tip))
}

/// Append the 34 vertices of one pitch to `mesh`, grouped by face in the
/// order the index table expects.
pub fn emit_pitch(mesh: &mut GearMesh, profile: &PitchProfile, normals: &PitchNormals) {
    let (f, b) = (&profile.front, &profile.back);

    push_group(mesh, f, &normals.front);
    push_group(mesh, b, &normals.back);
    push_group(mesh, &[f[ROOT_A], b[ROOT_A], f[TIP_B], b[TIP_B]], &normals.tooth_left);
    push_group(mesh, &[f[TIP_B], b[TIP_B], f[TIP_C], b[TIP_C]], &normals.tooth_top);
    push_group(mesh, &[f[TIP_C], b[TIP_C], f[ROOT_D], b[ROOT_D]], &normals.tooth_right);
    push_group(mesh, &[f[ROOT_D], b[ROOT_D], f[ROOT_E], b[ROOT_E]], &normals.gap_top);
    push_group(mesh, &[f[INNER_A], b[INNER_A], f[INNER_E], b[INNER_E]], &normals.inner_bottom);
}

fn push_group(mesh: &mut GearMesh, points: &[Point3<f64>], normal: &Vector3<f64>) {
    for point in points {
        mesh.push_vertex(point, normal);
    }
}
