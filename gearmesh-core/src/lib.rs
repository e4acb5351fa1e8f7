//! gearmesh core: procedural gear meshes.
//!
//! Turns a handful of gear parameters into flat position, normal and index
//! buffers ready for a vertex-buffer builder. Generation is pure: the same
//! parameters always give the same buffers.

pub mod emitter;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod mesh;
pub mod options;
pub mod params;
pub mod presets;
pub mod stl;
pub mod topology;

// Re-export commonly used types
pub use error::{GearError, Result, ValidationError};
pub use generator::{generate, generate_with};
pub use mesh::GearMesh;
pub use options::{GearOptions, NormalStyle, PitchCoverage};
pub use params::GearParameters;
