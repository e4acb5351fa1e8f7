//! Fixed triangulation of the vertices emitted for one pitch.
//!
//! Local vertex layout (see `emitter`):
//!
//! | slots   | group             |
//! |---------|-------------------|
//! | 0..=6   | front cap         |
//! | 7..=13  | back cap          |
//! | 14..=17 | tooth left flank  |
//! | 18..=21 | tooth top         |
//! | 22..=25 | tooth right flank |
//! | 26..=29 | gap top           |
//! | 30..=33 | inner bottom      |
//!
//! Each four-vertex group is ordered front, back, front, back along the
//! outline, so one quad pattern covers all of them.

/// Vertices emitted per pitch.
pub const VERTICES_PER_PITCH: usize = 34;
/// Triangles per pitch.
pub const TRIANGLES_PER_PITCH: usize = 20;
/// Index entries per pitch.
pub const INDICES_PER_PITCH: usize = TRIANGLES_PER_PITCH * 3;

/// Triangles of one pitch, counter-clockwise seen from outside the gear.
pub const PITCH_TRIANGLES: [[u32; 3]; TRIANGLES_PER_PITCH] = [
    // front cap, facing +z
    [0, 1, 4],
    [0, 4, 6],
    [4, 5, 6],
    [1, 2, 4],
    [2, 3, 4],
    // back cap, same footprint facing -z
    [7, 11, 8],
    [7, 13, 11],
    [11, 13, 12],
    [8, 11, 9],
    [9, 11, 10],
    // tooth left flank
    [14, 15, 16],
    [16, 15, 17],
    // tooth top
    [18, 19, 20],
    [20, 19, 21],
    // tooth right flank
    [22, 23, 24],
    [24, 23, 25],
    // gap top
    [26, 27, 28],
    [28, 27, 29],
    // inner bottom, facing the axis
    [30, 32, 31],
    [32, 33, 31],
];

/// Append the pitch triangles to `indices`, shifted to start at `base`.
pub fn push_pitch_indices(indices: &mut Vec<u32>, base: u32) {
    indices.extend(PITCH_TRIANGLES.iter().flatten().map(|&local| local + base));
}
