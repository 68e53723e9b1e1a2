mod naive;
#[cfg(feature = "preview")]
mod preview;

pub use naive::NaiveRenderer;
#[cfg(feature = "preview")]
pub use preview::PreviewRenderer;

use crate::math::unpack;
use crate::parsing::config::{Config, RenderSettings};
use crate::vec2d::Vec2D;
use crate::world::World;

use anyhow::{Context, Result};
use image::RgbaImage;

use std::fs;
use std::path::PathBuf;

/// Packed `R G B A` pixels, `0` where no surface was hit.
pub type Film = Vec2D<u32>;

/// Unpacks the film into an 8-bit RGBA image.
pub fn film_to_image(film: &Film) -> RgbaImage {
    let mut img: RgbaImage = image::ImageBuffer::new(film.width as u32, film.height as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = image::Rgba(unpack(film.at(x as usize, y as usize)));
    }
    img
}

pub fn output_film(render_settings: &RenderSettings, film: &Film) -> Result<PathBuf> {
    let png_filename = render_settings.output_path();
    fs::create_dir_all(&render_settings.output_directory).with_context(|| {
        format!(
            "failed to create output directory {}",
            render_settings.output_directory.display()
        )
    })?;
    film_to_image(film)
        .save(&png_filename)
        .with_context(|| format!("failed to write {}", png_filename.display()))?;
    info!("wrote {}", png_filename.display());
    Ok(png_filename)
}

pub trait Renderer {
    fn render(&self, world: &World, config: &Config) -> Result<()>;
}
