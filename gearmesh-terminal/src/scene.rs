//! Camera, gear placement and motion for the spinning gears viewer.
use gearmesh_core::{generate_with, presets, GearMesh, GearOptions, GearParameters, Result};
use nalgebra::{Matrix4, Point3, Unit, Vector3, Vector4};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 0.5;

/// Perspective camera looking at the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 20.0),
            target: Point3::origin(),
            up: Vector3::y(),
            fov: 30f32.to_radians(),
            aspect: Self::aspect_for(width, height),
            near: 0.5,
            far: 100.0,
        }
    }

    fn aspect_for(width: u32, height: u32) -> f32 {
        width.max(1) as f32 * CELL_ASPECT / height.max(1) as f32
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = Self::aspect_for(width, height);
    }

    /// Move the eye along the view direction until a sphere of `radius`
    /// around the target fits the narrower field of view.
    pub fn frame(&mut self, radius: f32) {
        let half_fov = (self.fov * 0.5).min((self.aspect * (self.fov * 0.5).tan()).atan());
        let distance = radius / half_fov.sin();
        let direction = (self.position - self.target)
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(Vector3::z);
        self.position = self.target + direction * distance;
        self.far = self.far.max(distance + radius * 2.0);
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

/// Project `point` through `mvp` to screen cells plus NDC depth.
///
/// Returns `None` for points behind the eye or outside the depth range.
/// Points left or right of the screen are kept so partially visible
/// triangles still rasterize.
pub fn project(
    mvp: &Matrix4<f32>,
    point: &Point3<f32>,
    width: usize,
    height: usize,
) -> Option<(f32, f32, f32)> {
    let clip = mvp * Vector4::new(point.x, point.y, point.z, 1.0);
    if clip.w <= 1e-6 {
        return None;
    }
    let ndc = clip.xyz() / clip.w;
    if !(-1.0..=1.0).contains(&ndc.z) {
        return None;
    }
    let screen_x = (ndc.x + 1.0) * 0.5 * width as f32;
    let screen_y = (1.0 - ndc.y) * 0.5 * height as f32;
    Some((screen_x, screen_y, ndc.z))
}

/// User-controlled rotation of the whole scene, in radians.
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Rotations applied in order X, then Y, then Z.
    pub fn matrix(&self) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new(self.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, self.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, self.z));
        rz * ry * rx
    }
}

/// How a gear moves over time.
///
/// The world matrix is `Ry(t·tumble_y) · Rz(t·tumble_z) · T(translation) ·
/// R_axis(phase + t·spin_speed)`: the gear spins in place, then is carried
/// around the origin by the tumble.
#[derive(Debug, Clone, Copy)]
pub struct Motion {
    pub translation: Vector3<f32>,
    pub tumble_y: f32,
    pub tumble_z: f32,
    pub spin_axis: Unit<Vector3<f32>>,
    pub spin_speed: f32,
    pub phase: f32,
}

impl Motion {
    /// Spin about the gear's own axle at `translation`.
    pub fn axle(translation: Vector3<f32>, spin_speed: f32, phase: f32) -> Self {
        Self {
            translation,
            tumble_y: 0.0,
            tumble_z: 0.0,
            spin_axis: Vector3::z_axis(),
            spin_speed,
            phase,
        }
    }

    pub fn model_matrix(&self, time: f32) -> Matrix4<f32> {
        let tumble_y = Matrix4::new_rotation(Vector3::y() * (time * self.tumble_y));
        let tumble_z = Matrix4::new_rotation(Vector3::z() * (time * self.tumble_z));
        let translate = Matrix4::new_translation(&self.translation);
        let spin = Matrix4::from_axis_angle(&self.spin_axis, self.phase + time * self.spin_speed);
        tumble_y * tumble_z * translate * spin
    }
}

/// A generated gear and where it goes.
#[derive(Debug, Clone)]
pub struct SceneGear {
    pub params: GearParameters,
    pub mesh: GearMesh,
    pub motion: Motion,
}

impl SceneGear {
    pub fn new(params: GearParameters, options: &GearOptions, motion: Motion) -> Result<Self> {
        let mesh = generate_with(&params, options)?;
        Ok(Self { params, mesh, motion })
    }

    /// Radius of a sphere around the gear center that holds the whole gear.
    pub fn extent(&self) -> f32 {
        let tip = self.params.outer_radius + self.params.tooth_depth.abs() / 2.0;
        tip.max(self.params.inner_radius).hypot(self.params.width / 2.0)
    }
}

/// Everything the viewer draws.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub gears: Vec<SceneGear>,
}

impl Scene {
    /// One gear spinning at the origin.
    pub fn single(params: GearParameters, options: &GearOptions) -> Result<Self> {
        let gear = SceneGear::new(params, options, Motion::axle(Vector3::zeros(), 1.0, 0.0))?;
        Ok(Self { gears: vec![gear] })
    }

    /// The red, green and blue gears meshing with each other.
    pub fn classic(options: &GearOptions) -> Result<Self> {
        let gears = vec![
            SceneGear::new(
                presets::RED,
                options,
                Motion::axle(Vector3::new(-3.0, -2.0, 0.0), 1.0, 0.0),
            )?,
            SceneGear::new(
                presets::GREEN,
                options,
                Motion::axle(Vector3::new(3.1, -2.0, 0.0), -2.0, (-9f32).to_radians()),
            )?,
            SceneGear::new(
                presets::BLUE,
                options,
                Motion::axle(Vector3::new(-3.1, 4.2, 0.0), -2.0, (-25f32).to_radians()),
            )?,
        ];
        Ok(Self { gears })
    }

    /// `count` randomized gears scattered and tumbling through a 20-unit cube.
    pub fn random(count: usize, seed: u32, options: &GearOptions) -> Result<Self> {
        let mut rng = HashRng::new(seed);
        let mut gears = Vec::with_capacity(count);
        for _ in 0..count {
            let params = GearParameters::new(
                rng.range(0.5, 1.0),
                rng.range(1.1, 2.0),
                rng.range(0.2, 1.0),
                rng.range(5.0, 15.0) as u32,
                rng.range(0.2, 0.5),
            );
            let motion = Motion {
                translation: Vector3::new(
                    rng.range(-10.0, 10.0),
                    rng.range(-10.0, 10.0),
                    rng.range(-10.0, 10.0),
                ),
                tumble_y: rng.range(0.1, 0.3),
                tumble_z: rng.range(0.1, 0.3),
                spin_axis: Vector3::x_axis(),
                spin_speed: 1.0,
                phase: 0.0,
            };
            gears.push(SceneGear::new(params, options, motion)?);
        }
        log::debug!("random scene: {} gears from seed {}", count, seed);
        Ok(Self { gears })
    }

    /// Radius around the origin that holds every gear at any time.
    ///
    /// Tumbling only rotates about the origin, so the distance of each
    /// gear's center never changes.
    pub fn radius(&self) -> f32 {
        self.gears
            .iter()
            .map(|gear| gear.motion.translation.norm() + gear.extent())
            .fold(1.0, f32::max)
    }
}

/// GLSL-style `hash11`: a float hashed into `[0, 1)`.
fn hash11(p: f32) -> f32 {
    let mut p = (p * 0.1031).fract();
    p *= p + 33.33;
    p *= p + p;
    p.fract()
}

/// Small deterministic sequence used to scatter demo gears.
#[derive(Debug, Clone)]
pub struct HashRng {
    seed: f32,
    counter: u32,
}

impl HashRng {
    pub fn new(seed: u32) -> Self {
        Self {
            seed: (seed % 4096) as f32 * 0.7310 + 0.5,
            counter: 0,
        }
    }

    pub fn next_f32(&mut self) -> f32 {
        self.counter += 1;
        hash11(self.seed + self.counter as f32 * 1.618).abs()
    }

    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}
