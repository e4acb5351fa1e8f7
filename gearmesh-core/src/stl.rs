//! STL export for binary and ASCII formats
use nalgebra::{Point3, Vector3};
use std::io::Write;

use crate::error::{GearError, Result};
use crate::mesh::GearMesh;

/// Write `mesh` as binary STL.
///
/// Layout: 80-byte header, little-endian u32 facet count, then 50 bytes per
/// facet (normal, three vertices, u16 attribute count).
pub fn write_binary_stl<W: Write>(mesh: &GearMesh, writer: &mut W) -> Result<()> {
    use stl_io::{Normal, Triangle, Vertex};

    mesh.validate()?;
    if u32::try_from(mesh.triangle_count()).is_err() {
        return Err(GearError::MalformedMesh("too many triangles for STL".to_string()));
    }

    let triangles: Vec<Triangle> = facets(mesh)
        .map(|(n, corners)| Triangle {
            normal: Normal::new([n.x, n.y, n.z]),
            vertices: corners.map(|p| Vertex::new([p.x, p.y, p.z])),
        })
        .collect();

    stl_io::write_stl(writer, triangles.iter())?;
    Ok(())
}

/// Write `mesh` as ASCII STL under the solid name `name`.
pub fn write_ascii_stl<W: Write>(mesh: &GearMesh, name: &str, writer: &mut W) -> Result<()> {
    mesh.validate()?;
    writeln!(writer, "solid {}", name)?;
    for (n, corners) in facets(mesh) {
        writeln!(writer, "  facet normal {:e} {:e} {:e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for p in &corners {
            writeln!(writer, "      vertex {:e} {:e} {:e}", p.x, p.y, p.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid {}", name)?;
    Ok(())
}

/// Triangles with their geometric unit normals. STL readers expect the facet
/// normal to agree with the winding, so the mesh's stored normals are not
/// used here.
fn facets(mesh: &GearMesh) -> impl Iterator<Item = (Vector3<f32>, [Point3<f32>; 3])> + '_ {
    mesh.triangles().filter_map(move |[i0, i1, i2]| {
        let corners = [
            mesh.position(i0 as usize)?,
            mesh.position(i1 as usize)?,
            mesh.position(i2 as usize)?,
        ];
        Some((facet_normal(&corners), corners))
    })
}

/// Unit normal of a counter-clockwise triangle, zero when degenerate.
pub fn facet_normal(corners: &[Point3<f32>; 3]) -> Vector3<f32> {
    let edge1 = corners[1] - corners[0];
    let edge2 = corners[2] - corners[0];
    edge1
        .cross(&edge2)
        .try_normalize(f32::EPSILON)
        .unwrap_or_else(Vector3::zeros)
}
