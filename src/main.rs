use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gridgen::config::Params;
use gridgen::render;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(42);
    let width: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(64);
    let height: usize = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(32);
    let out_dir: PathBuf = args
        .get(4)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("artifacts"));

    if let Err(e) = std::fs::create_dir_all(&out_dir) {
        error!("failed to create {}: {}", out_dir.display(), e);
        return ExitCode::FAILURE;
    }

    let params = Params {
        width,
        height,
        ..Params::default()
    };

    let (config, timings) = match gridgen::generate(seed, &params) {
        Ok(out) => out,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    for t in &timings {
        info!("  {:20} {:8.3} ms", t.name, t.ms);
    }

    let grid = config.grid();
    let save = |name: &str, rgba: &[u8]| {
        let path = out_dir.join(name);
        match image::save_buffer(
            &path,
            rgba,
            grid.w() as u32,
            grid.h() as u32,
            image::ColorType::Rgba8,
        ) {
            Ok(()) => {
                info!("saved {}", path.display());
                true
            }
            Err(e) => {
                error!("failed to save {}: {}", path.display(), e);
                false
            }
        }
    };

    let ok = save("heightmap.png", &render::render_heightmap(grid))
        & save("terrain.png", &render::render_terrain(grid));

    print!("{}", config);

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
