use super::{output_film, NaiveRenderer, Renderer};

use crate::math::rgba_to_0rgb;
use crate::parsing::config::Config;
use crate::world::World;

use anyhow::{Context, Result};
use minifb::{Key, Scale, Window, WindowOptions};

/// Renders like [`NaiveRenderer`], then keeps the result on screen until the
/// window is closed or Escape is pressed.
#[derive(Default)]
pub struct PreviewRenderer {}

impl PreviewRenderer {
    pub fn new() -> Self {
        PreviewRenderer {}
    }
}

impl Renderer for PreviewRenderer {
    fn render(&self, world: &World, config: &Config) -> Result<()> {
        let settings = &config.render_settings;
        let (film, _) = NaiveRenderer::render_film(world, settings);
        output_film(settings, &film)?;

        let (width, height) = (film.width, film.height);
        let buffer: Vec<u32> = film.buffer.iter().map(|&pixel| rgba_to_0rgb(pixel)).collect();

        let mut window = Window::new(
            "rust_raycaster - ESC to exit",
            width,
            height,
            WindowOptions {
                scale: Scale::X1,
                ..WindowOptions::default()
            },
        )
        .context("failed to open preview window")?;
        window.set_target_fps(60);

        while window.is_open() && !window.is_key_down(Key::Escape) {
            window
                .update_with_buffer(&buffer, width, height)
                .context("failed to update preview window")?;
        }
        info!("preview window closed");
        Ok(())
    }
}
