//! Terminal viewer for spinning gear meshes.
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use nalgebra::Vector3;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod cli;
pub mod renderer;
pub mod scene;

pub use cli::Cli;
pub use renderer::{AsciiRenderer, Lighting};
pub use scene::{Camera, Motion, RotationState, Scene, SceneGear};

const KEY_HELP: &str = "WASD/Arrows=Rotate E/R=Roll Space=Pause Q=Quit";

/// Viewer settings.
#[derive(Debug, Clone, Copy)]
pub struct ViewerConfig {
    pub target_fps: u32,
    /// Direction toward the light, world space.
    pub light: Vector3<f32>,
    pub ambient: f32,
    /// Initial tilt of the whole scene.
    pub rotation: RotationState,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            target_fps: 30,
            light: Vector3::new(1.0, 8.0, 10.0),
            ambient: 0.15,
            rotation: RotationState::new(-0.35, 0.3, 0.0),
        }
    }
}

/// Main application struct for the terminal gears viewer
pub struct TerminalApp {
    scene: Scene,
    config: ViewerConfig,
    rotation: RotationState,
    camera: Camera,
    renderer: AsciiRenderer,
    running: bool,
    paused: bool,
    time: f32,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(scene: Scene, config: ViewerConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let mut camera = Camera::new(width as u32, height as u32);
        camera.frame(scene.radius());

        Ok(Self {
            scene,
            config,
            rotation: config.rotation,
            camera,
            renderer: AsciiRenderer::new(
                width as usize,
                height as usize,
                Lighting::new(config.light, config.ambient),
            ),
            running: true,
            paused: false,
            time: 0.0,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let fps = u64::from(self.config.target_fps.max(1));
        let target_frame_time = Duration::from_millis(1000 / fps);
        let mut previous = Instant::now();

        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            self.update((frame_start - previous).as_secs_f32());
            previous = frame_start;

            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent { code, .. }) => self.handle_key(code),
            Event::Resize(width, height) => {
                log::debug!("terminal resized to {}x{}", width, height);
                self.camera.resize(width as u32, height as u32);
                self.camera.frame(self.scene.radius());
                self.renderer.resize(width as usize, height as usize);
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('w') | KeyCode::Up => self.rotation.rotate(0.1, 0.0, 0.0),
            KeyCode::Char('s') | KeyCode::Down => self.rotation.rotate(-0.1, 0.0, 0.0),
            KeyCode::Char('a') | KeyCode::Left => self.rotation.rotate(0.0, -0.1, 0.0),
            KeyCode::Char('d') | KeyCode::Right => self.rotation.rotate(0.0, 0.1, 0.0),
            KeyCode::Char('e') => self.rotation.rotate(0.0, 0.0, 0.1),
            KeyCode::Char('r') => self.rotation.rotate(0.0, 0.0, -0.1),
            _ => {}
        }
    }

    fn update(&mut self, dt: f32) {
        if !self.paused {
            self.time += dt;
        }
    }

    /// Draw the scene at the current time into the renderer's buffers.
    pub fn compose(&mut self) {
        let orbit = self.rotation.matrix();
        self.renderer.clear();
        for gear in &self.scene.gears {
            let model = orbit * gear.motion.model_matrix(self.time);
            self.renderer.render_mesh(&gear.mesh, &model, &self.camera);
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.compose();

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut stdout)?;

        let triangles: usize = self.scene.gears.iter().map(|g| g.mesh.triangle_count()).sum();
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "gearmesh | {} gears, {} triangles | FPS: {:.1}{} | {}",
                self.scene.gears.len(),
                triangles,
                self.fps,
                if self.paused { " (paused)" } else { "" },
                KEY_HELP,
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
