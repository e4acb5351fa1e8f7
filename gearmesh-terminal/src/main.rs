/// gearmesh terminal demo
///
/// Spins the classic red, green and blue gears as shaded ASCII, or a single
/// customized gear, or a random scatter. `--export` writes STL instead.
/// Controls:
///   - WASD / Arrow Keys: Rotate the scene
///   - E/R: Roll rotation
///   - Space: Pause
///   - Q/ESC: Quit
use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use gearmesh_core::{generate_with, stl};
use gearmesh_terminal::{Cli, TerminalApp, ViewerConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(path) = &cli.export {
        let params = cli.gear_parameters()?;
        let mesh = generate_with(&params, &cli.options())?;
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        if cli.ascii {
            stl::write_ascii_stl(&mesh, "gear", &mut writer)?;
        } else {
            stl::write_binary_stl(&mesh, &mut writer)?;
        }
        writer.flush()?;
        log::info!(
            "wrote {} triangles to {}",
            mesh.triangle_count(),
            path.display()
        );
        return Ok(());
    }

    let scene = cli.scene()?;
    println!("gearmesh - building {} gear(s)...", scene.gears.len());
    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(scene, ViewerConfig::default())?;
    app.run()?;

    Ok(())
}
