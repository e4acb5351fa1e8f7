//! Command-line options for the viewer.
use std::path::PathBuf;

use clap::Parser;
use gearmesh_core::{presets, GearOptions, GearParameters, ValidationError};

use crate::scene::Scene;

/// Spinning gears in the terminal
#[derive(Parser, Debug)]
#[command(name = "gearmesh-terminal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start from a named gear: red, green or blue
    #[arg(long, value_parser = ["red", "green", "blue"])]
    pub preset: Option<String>,

    /// Number of teeth
    #[arg(long)]
    pub teeth: Option<f64>,

    /// Bore radius
    #[arg(long)]
    pub inner: Option<f32>,

    /// Outer radius before tooth depth
    #[arg(long)]
    pub outer: Option<f32>,

    /// Axial thickness
    #[arg(long)]
    pub width: Option<f32>,

    /// Radial tooth depth
    #[arg(long)]
    pub depth: Option<f32>,

    /// Scatter randomized gears instead of the classic three
    #[arg(long, conflicts_with_all = ["preset", "teeth", "inner", "outer", "width", "depth"])]
    pub random: bool,

    /// Number of gears in a random scene
    #[arg(long, default_value_t = 12)]
    pub count: usize,

    /// Seed for a random scene
    #[arg(long, default_value_t = 1)]
    pub seed: u32,

    /// Scale every normal to unit length
    #[arg(long)]
    pub unit_normals: bool,

    /// Emit one pitch per tooth instead of closing the loop with a repeat
    #[arg(long)]
    pub exact_pitches: bool,

    /// Write the gear as STL to this path and exit
    #[arg(long, conflicts_with = "random")]
    pub export: Option<PathBuf>,

    /// Write ASCII STL instead of binary
    #[arg(long, requires = "export")]
    pub ascii: bool,
}

impl Cli {
    /// True when any single-gear option was given.
    pub fn customizes_gear(&self) -> bool {
        self.preset.is_some()
            || self.teeth.is_some()
            || self.inner.is_some()
            || self.outer.is_some()
            || self.width.is_some()
            || self.depth.is_some()
    }

    /// The selected preset (red by default) with any overrides applied.
    pub fn gear_parameters(&self) -> Result<GearParameters, ValidationError> {
        let base = self
            .preset
            .as_deref()
            .and_then(presets::by_name)
            .unwrap_or(presets::RED);
        let teeth = match self.teeth {
            Some(teeth) => GearParameters::teeth_from_f64(teeth)?,
            None => base.teeth,
        };
        Ok(GearParameters {
            inner_radius: self.inner.unwrap_or(base.inner_radius),
            outer_radius: self.outer.unwrap_or(base.outer_radius),
            width: self.width.unwrap_or(base.width),
            teeth,
            tooth_depth: self.depth.unwrap_or(base.tooth_depth),
        })
    }

    pub fn options(&self) -> GearOptions {
        let mut options = GearOptions::default();
        if self.unit_normals {
            options = options.with_unit_normals();
        }
        if self.exact_pitches {
            options = options.with_exact_pitches();
        }
        options
    }

    pub fn scene(&self) -> anyhow::Result<Scene> {
        let options = self.options();
        let scene = if self.random {
            Scene::random(self.count, self.seed, &options)?
        } else if self.customizes_gear() {
            Scene::single(self.gear_parameters()?, &options)?
        } else {
            Scene::classic(&options)?
        };
        Ok(scene)
    }
}
