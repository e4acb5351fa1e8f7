//! ASCII rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use gearmesh_core::stl::facet_normal;
use gearmesh_core::GearMesh;
use nalgebra::{Matrix3, Matrix4, Vector3};
use std::io::Write;

use crate::scene::{project, Camera};

/// Character luminosity ramp for shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Directional light with an ambient floor.
#[derive(Debug, Clone, Copy)]
pub struct Lighting {
    /// Direction toward the light, world space.
    pub direction: Vector3<f32>,
    pub ambient: f32,
}

impl Lighting {
    pub fn new(toward_light: Vector3<f32>, ambient: f32) -> Self {
        Self {
            direction: toward_light.try_normalize(f32::EPSILON).unwrap_or_else(Vector3::z),
            ambient: ambient.clamp(0.0, 1.0),
        }
    }

    /// Character for a face with world-space unit normal `normal`.
    pub fn shade(&self, normal: &Vector3<f32>) -> char {
        let diffuse = normal.dot(&self.direction).max(0.0);
        let brightness = self.ambient + (1.0 - self.ambient) * diffuse;
        // index 0 is reserved for empty cells
        let steps = (LUMINOSITY_RAMP.len() - 2) as f32;
        let index = 1 + (brightness * steps).round() as usize;
        LUMINOSITY_RAMP[index.min(LUMINOSITY_RAMP.len() - 1)]
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self::new(Vector3::new(1.0, 8.0, 10.0), 0.15)
    }
}

/// ASCII renderer that converts gear meshes to terminal characters
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
    lighting: Lighting,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize, lighting: Lighting) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
            lighting,
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.depth_buffer = vec![f32::INFINITY; width * height];
        self.char_buffer = vec![' '; width * height];
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.char_buffer.fill(' ');
    }

    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.char_buffer[y * self.width + x])
    }

    /// Number of cells covered by geometry.
    pub fn covered_cells(&self) -> usize {
        self.depth_buffer.iter().filter(|d| d.is_finite()).count()
    }

    /// Draw every triangle of `mesh`, flat shaded by its stored normal, or by
    /// the facet normal where the stored one points into the solid.
    pub fn render_mesh(&mut self, mesh: &GearMesh, model_matrix: &Matrix4<f32>, camera: &Camera) {
        let mvp = camera.view_projection() * model_matrix;
        let rotation: Matrix3<f32> = model_matrix.fixed_view::<3, 3>(0, 0).into_owned();

        for tri in mesh.triangles() {
            let Some(corners) = tri
                .iter()
                .map(|&i| mesh.position(i as usize))
                .collect::<Option<Vec<_>>>()
            else {
                continue;
            };

            let mut screen = [(0.0, 0.0, 0.0); 3];
            let mut visible = true;
            for (slot, corner) in screen.iter_mut().zip(&corners) {
                match project(&mvp, corner, self.width, self.height) {
                    Some(p) => *slot = p,
                    None => {
                        visible = false;
                        break;
                    }
                }
            }
            if !visible || !faces_viewer(&screen) {
                continue;
            }

            // all three corners of a face share its normal; the facet normal
            // replaces one that opposes the winding
            let facet = facet_normal(&[corners[0], corners[1], corners[2]]);
            let stored = mesh
                .normal(tri[0] as usize)
                .filter(|n| n.dot(&facet) > 0.0)
                .unwrap_or(facet);
            let normal = (rotation * stored)
                .try_normalize(f32::EPSILON)
                .unwrap_or_else(|| rotation * facet);

            let character = self.lighting.shade(&normal);
            self.rasterize_triangle(&screen, character);
        }
    }

    fn rasterize_triangle(&mut self, coords: &[(f32, f32, f32); 3], character: char) {
        let (v0, v1, v2) = (coords[0], coords[1], coords[2]);

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i32;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i32;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                let Some((w0, w1, w2)) =
                    barycentric((v0.0, v0.1), (v1.0, v1.1), (v2.0, v2.1), (px, py))
                else {
                    continue;
                };
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;
                let idx = y as usize * self.width + x as usize;
                if depth < self.depth_buffer[idx] {
                    self.depth_buffer[idx] = depth;
                    self.char_buffer[idx] = character;
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.char_buffer[y * self.width + x];

                // Color based on character intensity
                let color = match c {
                    ' ' | '.' | ':' => Color::DarkGrey,
                    '-' | '=' => Color::Grey,
                    '+' | '*' => Color::White,
                    '#' | '%' | '@' => Color::Yellow,
                    _ => Color::White,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Counter-clockwise triangles face the viewer. Screen y points down, so
/// they have negative signed area here.
fn faces_viewer(coords: &[(f32, f32, f32); 3]) -> bool {
    let (v0, v1, v2) = (coords[0], coords[1], coords[2]);
    let area = (v1.0 - v0.0) * (v2.1 - v0.1) - (v2.0 - v0.0) * (v1.1 - v0.1);
    area < 0.0
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}
