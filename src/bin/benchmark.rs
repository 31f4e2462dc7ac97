//! Headless benchmark of ticking and drawing

use std::time::Instant;
use rand::Rng;
use toroidal_life::{FrameBuffer, LifeConfig, Pixel, Rasterizer, SeedMask, SeedPlacement, Grid};

/// Board of `size` x `size` cells, roughly 30% alive
fn random_grid(size: usize) -> Grid {
    let mut rng = rand::rng();
    let config = LifeConfig {
        seed_placement: SeedPlacement::Centered,
        ..LifeConfig::with_grid(size, size)
    };
    let bytes: Vec<u8> = (0..size * size)
        .map(|_| if rng.random_bool(0.3) { config.alive_symbol } else { b' ' })
        .collect();
    let seed = SeedMask::new(bytes, size, size)
        .unwrap_or_else(|_| SeedMask::empty())
        .named("Random", "30% alive");
    match Grid::new(&config, &seed) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Cannot build {size}x{size} board: {err}");
            std::process::exit(1);
        }
    }
}

fn benchmark_tick(size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.tick();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_draw(size: usize, frame_size: usize, iterations: u32) -> f64 {
    let grid = random_grid(size);
    let mut rasterizer = Rasterizer::seeded(&LifeConfig::default(), 0);
    let mut pixels = vec![Pixel::CLEAR; frame_size * frame_size];
    let Ok(mut frame) = FrameBuffer::new(&mut pixels, frame_size, frame_size) else {
        return f64::NAN;
    };

    let start = Instant::now();
    for _ in 0..iterations {
        rasterizer.draw_frame(&grid, &mut frame);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::init();
    println!("=== Toroidal Life Benchmark ===\n");

    let sizes = [40, 100, 250, 500, 1000];
    let frame_size = 640;
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>14}", "Board", "Tick ms", "Draw ms", "Cells/sec");
    println!("{:-<52}", "");

    for size in sizes {
        let tick_ms = benchmark_tick(size, iterations);
        let draw_ms = benchmark_draw(size, frame_size, iterations);
        let cells_per_sec = (size * size) as f64 / (tick_ms / 1000.0);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>13.1}M",
            format!("{}x{}", size, size),
            tick_ms,
            draw_ms,
            cells_per_sec / 1_000_000.0
        );
    }
}
