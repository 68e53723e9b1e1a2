use crate::math::Vec3;

use anyhow::bail;
use serde::Deserialize;

use std::path::PathBuf;

pub const DEFAULT_SCENE_FILE: &str = "data/scenes/spheres.rt";
pub const DEFAULT_FILENAME: &str = "render";
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "output";
pub const DEFAULT_SHADOW_BIAS: f32 = 0.005;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            width: 1024,
            height: 1024,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub filename: String,
    pub output_directory: PathBuf,
    pub resolution: Resolution,
    /// Offset along the surface normal applied to shadow ray origins.
    pub shadow_bias: f32,
    pub world_up: Vec3,
    pub exact_cylinder_normals: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            filename: DEFAULT_FILENAME.to_string(),
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
            resolution: Resolution::default(),
            shadow_bias: DEFAULT_SHADOW_BIAS,
            world_up: Vec3::Y,
            exact_cylinder_normals: false,
        }
    }
}

impl RenderSettings {
    pub fn output_path(&self) -> PathBuf {
        self.output_directory.join(format!("{}.png", self.filename))
    }
}

/// On-disk form of the render configuration. Every key is optional.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct TOMLRenderSettings {
    pub scene_file: Option<String>,
    pub filename: Option<String>,
    pub output_directory: Option<String>,
    pub resolution: Option<Resolution>,
    pub shadow_bias: Option<f32>,
    pub world_up: Option<[f32; 3]>,
    pub exact_cylinder_normals: Option<bool>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub scene_file: String,
    pub render_settings: RenderSettings,
}

impl TryFrom<TOMLRenderSettings> for Config {
    type Error = anyhow::Error;
    fn try_from(data: TOMLRenderSettings) -> anyhow::Result<Self> {
        let defaults = RenderSettings::default();
        let resolution = data.resolution.unwrap_or(defaults.resolution);
        if resolution.width == 0 || resolution.height == 0 {
            bail!(
                "resolution must be non-zero, got {}x{}",
                resolution.width,
                resolution.height
            );
        }
        let world_up = data.world_up.map(Vec3::from).unwrap_or(defaults.world_up);
        if !world_up.is_finite() || world_up.norm() == 0.0 {
            bail!("world_up must be a finite non-zero vector, got {}", world_up);
        }
        let shadow_bias = data.shadow_bias.unwrap_or(defaults.shadow_bias);
        if !shadow_bias.is_finite() || shadow_bias < 0.0 {
            bail!("shadow_bias must be finite and non-negative, got {}", shadow_bias);
        }
        Ok(Config {
            scene_file: data
                .scene_file
                .unwrap_or_else(|| DEFAULT_SCENE_FILE.to_string()),
            render_settings: RenderSettings {
                filename: data.filename.unwrap_or(defaults.filename),
                output_directory: data
                    .output_directory
                    .map(PathBuf::from)
                    .unwrap_or(defaults.output_directory),
                resolution,
                shadow_bias,
                world_up: world_up.normalized(),
                exact_cylinder_normals: data
                    .exact_cylinder_normals
                    .unwrap_or(defaults.exact_cylinder_normals),
            },
        })
    }
}
