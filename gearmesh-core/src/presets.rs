//! The three gears of the classic gears demo.
use crate::params::GearParameters;

pub const RED: GearParameters = GearParameters {
    inner_radius: 1.0,
    outer_radius: 4.0,
    width: 1.0,
    teeth: 20,
    tooth_depth: 0.7,
};

pub const GREEN: GearParameters = GearParameters {
    inner_radius: 0.5,
    outer_radius: 2.0,
    width: 2.0,
    teeth: 10,
    tooth_depth: 0.7,
};

pub const BLUE: GearParameters = GearParameters {
    inner_radius: 1.3,
    outer_radius: 2.0,
    width: 0.5,
    teeth: 10,
    tooth_depth: 0.7,
};

/// Look up a preset by name, ignoring case.
pub fn by_name(name: &str) -> Option<GearParameters> {
    match name.to_ascii_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        _ => None,
    }
}
