use super::{output_film, Film, Renderer};

use crate::integrator::DirectLightingIntegrator;
use crate::parsing::config::{Config, RenderSettings};
use crate::profile::Profile;
use crate::world::World;

use anyhow::Result;
#[cfg(feature = "pbr")]
use pbr::ProgressBar;

use std::time::Instant;

#[derive(Default)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }

    /// Casts one primary ray per pixel, rows top to bottom.
    pub fn render_film(world: &World, settings: &RenderSettings) -> (Film, Profile) {
        let (width, height) = (settings.resolution.width, settings.resolution.height);
        info!("starting render with film resolution {}x{}", width, height);
        let now = Instant::now();

        let mut film = Film::new(width, height, 0u32);
        let integrator = DirectLightingIntegrator::new(world, settings);
        let camera = world
            .camera
            .with_resolution(width, height, settings.world_up);
        let mut profile = Profile::default();

        #[cfg(feature = "pbr")]
        let mut pb = ProgressBar::new(height as u64);

        for y in 0..height {
            for x in 0..width {
                let pixel = integrator.color(camera.get_ray(x, y), &mut profile);
                film.write_at(x, y, pixel);
            }
            #[cfg(feature = "pbr")]
            pb.inc();
        }
        #[cfg(feature = "pbr")]
        pb.finish();

        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        info!("took {}s", elapsed);
        profile.pretty_print(elapsed.max(f32::EPSILON));
        (film, profile)
    }
}

impl Renderer for NaiveRenderer {
    fn render(&self, world: &World, config: &Config) -> Result<()> {
        let (film, _) = NaiveRenderer::render_film(world, &config.render_settings);
        output_film(&config.render_settings, &film)?;
        Ok(())
    }
}
