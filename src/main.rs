use macroquad::prelude::*;
use toroidal_life::{FrameBuffer, LifeConfig, Pixel, Simulation, input, presets};

fn window_conf() -> Conf {
    let config = LifeConfig::default();
    Conf {
        window_title: config.window_title,
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

/// Copy the frame into an RGBA image, bottom row first: the frame's row 0
/// is the bottom of the window.
fn present(pixels: &[Pixel], width: usize, image: &mut Image) {
    let row_bytes = width * 4;
    for (y, row) in pixels.chunks_exact(width).enumerate() {
        let start = image.bytes.len() - (y + 1) * row_bytes;
        let dest = &mut image.bytes[start..start + row_bytes];
        for (chunk, pixel) in dest.chunks_exact_mut(4).zip(row) {
            chunk.copy_from_slice(&pixel.to_rgba8());
        }
    }
}

fn render(
    simulation: &mut Simulation,
    pixels: &mut [Pixel],
    (width, height): (usize, usize),
    image: &mut Image,
) -> toroidal_life::Result<()> {
    let mut frame = FrameBuffer::new(pixels, width, height)?;
    simulation.draw(&mut frame);
    present(pixels, width, image);
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = LifeConfig::default();
    let mut simulation = match Simulation::new(&config, &presets::glider()) {
        Ok(simulation) => simulation,
        Err(err) => {
            log::error!("Failed to start simulation: {err}");
            return;
        }
    };

    // The frame keeps the window's initial size and is stretched on resize
    let size = (config.window_width, config.window_height);
    let mut pixels = vec![Pixel::CLEAR; size.0 * size.1];
    let mut image = Image::gen_image_color(size.0 as u16, size.1 as u16, BLACK);
    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Nearest);

    if let Err(err) = render(&mut simulation, &mut pixels, size, &mut image) {
        log::error!("Failed to draw frame: {err}");
        return;
    }
    texture.update(&image);
    log::info!(
        "Running {}x{} board at {} ticks/s",
        config.grid_width,
        config.grid_height,
        config.ticks_per_second
    );

    loop {
        if input::quit_requested() {
            break;
        }

        if simulation.update(get_frame_time()) > 0 {
            if let Err(err) = render(&mut simulation, &mut pixels, size, &mut image) {
                log::error!("Failed to draw frame: {err}");
                break;
            }
            texture.update(&image);
        }

        clear_background(BLACK);
        draw_texture_ex(
            &texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                ..Default::default()
            },
        );

        next_frame().await;
    }

    log::info!("Stopped after {} generations", simulation.generation());
}
