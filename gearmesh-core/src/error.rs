//! Error types for gear mesh generation.

use thiserror::Error;

/// A gear parameter that cannot produce a mesh.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Tooth count is NaN or infinite.
    #[error("number of teeth must be finite")]
    NonFiniteTeeth,

    /// Tooth count has a fractional part.
    #[error("number of teeth must be an integer, got {0}")]
    FractionalTeeth(f64),

    /// Tooth count is an integer too large to be represented exactly.
    #[error("number of teeth {0} is not a safe integer")]
    UnsafeTeeth(f64),

    /// Tooth count is zero or negative.
    #[error("number of teeth must be positive")]
    NonPositiveTeeth,

    /// The mesh would hold more vertices than `u32` indices can address.
    #[error("{0} teeth produce more vertices than u32 indices can address")]
    TooManyTeeth(u64),
}

/// Errors that can occur while generating or exporting a gear mesh.
#[derive(Error, Debug)]
pub enum GearError {
    /// Gear parameters were rejected before generation.
    #[error("invalid gear parameters: {0}")]
    Validation(#[from] ValidationError),

    /// A mesh breaks the positions/normals/indices contract.
    #[error("malformed mesh: {0}")]
    MalformedMesh(String),

    /// Writing an exported mesh failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for gear mesh operations.
pub type Result<T> = std::result::Result<T, GearError>;
