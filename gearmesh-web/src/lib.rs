//! WASM bindings for the gear mesh generator.
//!
//! Exposes the flat `position`, `normal` and `indices` arrays a WebGL buffer
//! builder consumes. Tooth counts arrive as JS numbers and are checked for
//! being exact positive integers before generation.

use gearmesh_core::{generate_with, GearError, GearOptions, GearParameters};
use wasm_bindgen::prelude::*;

/// Generated gear buffers for JavaScript.
#[wasm_bindgen]
pub struct GearArrays {
    position: Vec<f32>,
    normal: Vec<f32>,
    indices: Vec<u32>,
}

#[wasm_bindgen]
impl GearArrays {
    /// Flat vertex positions as a Float32Array.
    #[wasm_bindgen(getter)]
    pub fn position(&self) -> Vec<f32> {
        self.position.clone()
    }

    /// Flat vertex normals as a Float32Array.
    #[wasm_bindgen(getter)]
    pub fn normal(&self) -> Vec<f32> {
        self.normal.clone()
    }

    /// Triangle indices as a Uint32Array.
    #[wasm_bindgen(getter)]
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    #[wasm_bindgen(getter, js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.position.len() / 3
    }
}

/// Build the arrays without touching any JS API.
pub fn build_arrays(
    inner_radius: f32,
    outer_radius: f32,
    width: f32,
    teeth: f64,
    tooth_depth: f32,
    normalize: bool,
    exact_pitches: bool,
) -> Result<GearArrays, GearError> {
    let params = GearParameters::try_new(inner_radius, outer_radius, width, teeth, tooth_depth)?;
    let mut options = GearOptions::default();
    if normalize {
        options = options.with_unit_normals();
    }
    if exact_pitches {
        options = options.with_exact_pitches();
    }
    let mesh = generate_with(&params, &options)?;
    Ok(GearArrays {
        position: mesh.positions,
        normal: mesh.normals,
        indices: mesh.indices,
    })
}

/// Generate a gear with raw normals and the closing repeat pitch.
#[wasm_bindgen(js_name = createGearVertices)]
pub fn create_gear_vertices(
    inner_radius: f32,
    outer_radius: f32,
    width: f32,
    teeth: f64,
    tooth_depth: f32,
) -> Result<GearArrays, JsError> {
    create_gear_vertices_with(inner_radius, outer_radius, width, teeth, tooth_depth, false, false)
}

/// Generate a gear, optionally with unit normals or one pitch per tooth.
#[wasm_bindgen(js_name = createGearVerticesWith)]
pub fn create_gear_vertices_with(
    inner_radius: f32,
    outer_radius: f32,
    width: f32,
    teeth: f64,
    tooth_depth: f32,
    normalize: bool,
    exact_pitches: bool,
) -> Result<GearArrays, JsError> {
    match build_arrays(
        inner_radius,
        outer_radius,
        width,
        teeth,
        tooth_depth,
        normalize,
        exact_pitches,
    ) {
        Ok(arrays) => Ok(arrays),
        Err(e) => {
            web_sys::console::log_1(&format!("[gearmesh] {}", e).into());
            Err(JsError::new(&e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gearmesh_core::ValidationError;

    #[test]
    fn test_build_arrays_sizes() {
        let arrays = build_arrays(1.0, 2.0, 1.0, 4.0, 0.4, false, false).unwrap();
        assert_eq!(arrays.vertex_count(), 170);
        assert_eq!(arrays.position().len(), 510);
        assert_eq!(arrays.normal().len(), 510);
        assert_eq!(arrays.indices().len(), 300);

        let exact = build_arrays(1.0, 2.0, 1.0, 4.0, 0.4, false, true).unwrap();
        assert_eq!(exact.vertex_count(), 136);
        assert_eq!(exact.indices().len(), 240);
    }

    #[test]
    fn test_build_arrays_normalized() {
        let arrays = build_arrays(0.5, 2.0, 2.0, 10.0, 0.7, true, false).unwrap();
        for n in arrays.normal().chunks_exact(3) {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_build_arrays_rejects_bad_teeth() {
        assert!(matches!(
            build_arrays(1.0, 2.0, 1.0, 4.5, 0.4, false, false),
            Err(GearError::Validation(ValidationError::FractionalTeeth(_)))
        ));
        assert!(matches!(
            build_arrays(1.0, 2.0, 1.0, f64::NAN, 0.4, false, false),
            Err(GearError::Validation(ValidationError::NonFiniteTeeth))
        ));
        assert!(matches!(
            build_arrays(1.0, 2.0, 1.0, -3.0, 0.4, false, false),
            Err(GearError::Validation(ValidationError::NonPositiveTeeth))
        ));
    }
}
