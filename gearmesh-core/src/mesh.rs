//! Flat, GPU-ready mesh buffers.
use nalgebra::{Point3, Vector3};

use crate::error::{GearError, Result};

/// Triangulated mesh stored as three parallel flat buffers.
///
/// `positions` and `normals` hold xyz triples; the normal at triple `i`
/// belongs to the vertex at triple `i`. `indices` holds counter-clockwise
/// triangles, three entries each. Vertices are never shared between faces
/// with different normals, so the buffers can be uploaded as-is for flat
/// shading.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GearMesh {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
}

impl GearMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices * 3),
            normals: Vec::with_capacity(vertices * 3),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Append one vertex, narrowing to `f32`.
    pub fn push_vertex(&mut self, position: &Point3<f64>, normal: &Vector3<f64>) {
        self.positions
            .extend_from_slice(&[position.x as f32, position.y as f32, position.z as f32]);
        self.normals
            .extend_from_slice(&[normal.x as f32, normal.y as f32, normal.z as f32]);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn position(&self, index: usize) -> Option<Point3<f32>> {
        let xyz = self.positions.get(index * 3..index * 3 + 3)?;
        Some(Point3::new(xyz[0], xyz[1], xyz[2]))
    }

    pub fn normal(&self, index: usize) -> Option<Vector3<f32>> {
        let xyz = self.normals.get(index * 3..index * 3 + 3)?;
        Some(Vector3::new(xyz[0], xyz[1], xyz[2]))
    }

    /// Index triples, one per triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Axis-aligned bounds of all positions, `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        let mut points = self.positions.chunks_exact(3);
        let first = points.next()?;
        let mut min = Point3::new(first[0], first[1], first[2]);
        let mut max = min;
        for p in points {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        Some((min, max))
    }

    /// Scale every normal to unit length.
    ///
    /// Zero-length normals, which degenerate gears can produce, are left as
    /// zero rather than turned into NaN.
    pub fn normalize_normals(&mut self) {
        for n in self.normals.chunks_exact_mut(3) {
            if let Some(unit) = Vector3::new(n[0], n[1], n[2]).try_normalize(f32::EPSILON) {
                n.copy_from_slice(unit.as_slice());
            }
        }
    }

    /// Check the buffer contract: aligned xyz triples, whole triangles, and
    /// every index inside the vertex range.
    pub fn validate(&self) -> Result<()> {
        if self.positions.len() % 3 != 0 {
            return Err(GearError::MalformedMesh(format!(
                "positions length {} is not a multiple of 3",
                self.positions.len()
            )));
        }
        if self.positions.len() != self.normals.len() {
            return Err(GearError::MalformedMesh(format!(
                "{} position components but {} normal components",
                self.positions.len(),
                self.normals.len()
            )));
        }
        if self.indices.len() % 3 != 0 {
            return Err(GearError::MalformedMesh(format!(
                "indices length {} is not a multiple of 3",
                self.indices.len()
            )));
        }
        let vertex_count = self.vertex_count();
        if let Some(&bad) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(GearError::MalformedMesh(format!(
                "index {} out of range for {} vertices",
                bad, vertex_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle() -> GearMesh {
        let mut mesh = GearMesh::new();
        mesh.push_vertex(&Point3::new(0.0, 0.0, 0.0), &Vector3::new(0.0, 0.0, 2.0));
        mesh.push_vertex(&Point3::new(1.0, 0.0, 0.0), &Vector3::new(0.0, 0.0, 2.0));
        mesh.push_vertex(&Point3::new(0.0, 1.0, -1.0), &Vector3::new(0.0, 0.0, 0.0));
        mesh.indices.extend_from_slice(&[0, 1, 2]);
        mesh
    }

    #[test]
    fn test_accessors() {
        let mesh = triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.position(1), Some(Point3::new(1.0, 0.0, 0.0)));
        assert_eq!(mesh.normal(0), Some(Vector3::new(0.0, 0.0, 2.0)));
        assert_eq!(mesh.position(3), None);
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_bounds() {
        let (min, max) = triangle().bounds().unwrap();
        assert_eq!(min, Point3::new(0.0, 0.0, -1.0));
        assert_eq!(max, Point3::new(1.0, 1.0, 0.0));
        assert!(GearMesh::new().bounds().is_none());
    }

    #[test]
    fn test_normalize_keeps_zero_normals() {
        let mut mesh = triangle();
        mesh.normalize_normals();
        assert_relative_eq!(mesh.normal(0).unwrap().z, 1.0);
        assert_eq!(mesh.normal(2), Some(Vector3::zeros()));
        assert!(mesh.normals.iter().all(|n| n.is_finite()));
    }

    #[test]
    fn test_validate_rejects_out_of_range_index() {
        let mut mesh = triangle();
        assert!(mesh.validate().is_ok());
        mesh.indices.extend_from_slice(&[0, 2, 3]);
        assert!(matches!(mesh.validate(), Err(GearError::MalformedMesh(_))));
    }

    #[test]
    fn test_validate_rejects_mismatched_normals() {
        let mut mesh = triangle();
        mesh.normals.truncate(6);
        assert!(matches!(mesh.validate(), Err(GearError::MalformedMesh(_))));
    }
}
