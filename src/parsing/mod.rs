pub mod config;

use config::{Config, TOMLRenderSettings};

use crate::camera::Camera;
use crate::math::*;
use crate::world::*;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;

use std::fs;
use std::path::Path;

fn load_arbitrary<T>(filepath: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    info!("loading file at {}", filepath.display());
    let input = fs::read_to_string(filepath)
        .with_context(|| format!("failed to read {}", filepath.display()))?;
    let data: T = toml::from_str(&input)
        .with_context(|| format!("failed to parse {}", filepath.display()))?;
    Ok(data)
}

pub fn get_settings(filepath: impl AsRef<Path>) -> Result<TOMLRenderSettings> {
    load_arbitrary(filepath.as_ref())
}

pub fn load_config(filepath: impl AsRef<Path>) -> Result<Config> {
    let filepath = filepath.as_ref();
    Config::try_from(get_settings(filepath)?)
        .with_context(|| format!("invalid render settings in {}", filepath.display()))
}

/// Reads and parses a `.rt` scene description.
pub fn construct_world(scene_file: impl AsRef<Path>) -> Result<World> {
    let scene_file = scene_file.as_ref();
    info!("loading scene file {}", scene_file.display());
    let input = fs::read_to_string(scene_file)
        .with_context(|| format!("failed to read scene file {}", scene_file.display()))?;
    info!("done: {} bytes", input.len());
    parse_scene(&input, &scene_file.display().to_string())
}

/// Parses scene text. `source` only appears in error messages.
pub fn parse_scene(input: &str, source: &str) -> Result<World> {
    let mut builder = SceneBuilder::default();
    for (index, line) in input.lines().enumerate() {
        builder
            .parse_line(line)
            .with_context(|| format!("{}:{}: invalid line {:?}", source, index + 1, line.trim()))?;
    }
    builder
        .finish()
        .with_context(|| format!("{}: incomplete scene", source))
}

#[derive(Default)]
struct SceneBuilder {
    ambient: Option<Ambient>,
    camera: Option<Camera>,
    lights: Vec<Light>,
    instances: Vec<Instance>,
}

impl SceneBuilder {
    fn parse_line(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let (id, args) = (fields[0], &fields[1..]);
        match id {
            "A" => {
                expect_fields(id, args, 2)?;
                if self.ambient.is_some() {
                    bail!("ambient light declared more than once");
                }
                self.ambient = Some(Ambient::new(parse_ratio(args[0])?, parse_color(args[1])?));
            }
            "C" => {
                expect_fields(id, args, 3)?;
                if self.camera.is_some() {
                    bail!("camera declared more than once");
                }
                let fov = parse_float(args[2], "fov")?;
                if !(fov > 0.0 && fov < 180.0) {
                    bail!("fov must lie strictly between 0 and 180 degrees, got {}", fov);
                }
                self.camera = Some(Camera::new(
                    parse_vec3(args[0], "position")?,
                    parse_orientation(args[1])?,
                    fov,
                ));
            }
            "L" => {
                expect_fields(id, args, 3)?;
                self.lights.push(Light::new(
                    parse_vec3(args[0], "position")?,
                    parse_ratio(args[1])?,
                    parse_color(args[2])?,
                ));
            }
            "sp" => {
                expect_fields(id, args, 3)?;
                let sphere = Sphere::new(
                    parse_positive(args[1], "diameter")? / 2.0,
                    parse_vec3(args[0], "center")?,
                    parse_color(args[2])?,
                );
                self.push(sphere.into());
            }
            "pl" => {
                expect_fields(id, args, 3)?;
                let plane = Plane::new(
                    parse_vec3(args[0], "point")?,
                    parse_orientation(args[1])?,
                    parse_color(args[2])?,
                );
                self.push(plane.into());
            }
            "cy" => {
                expect_fields(id, args, 5)?;
                let cylinder = Cylinder::new(
                    parse_vec3(args[0], "center")?,
                    parse_orientation(args[1])?,
                    parse_positive(args[2], "diameter")? / 2.0,
                    parse_positive(args[3], "height")?,
                    parse_color(args[4])?,
                );
                self.push(cylinder.into());
            }
            _ => bail!("unknown element identifier {:?}", id),
        }
        Ok(())
    }

    fn push(&mut self, aggregate: Aggregate) {
        let instance_id = self.instances.len() as InstanceId;
        debug!("parsed {} with instance id {}", aggregate.kind(), instance_id);
        self.instances.push(Instance::new(aggregate, instance_id));
    }

    fn finish(self) -> Result<World> {
        let Some(ambient) = self.ambient else {
            bail!("missing ambient light (A)");
        };
        let Some(camera) = self.camera else {
            bail!("missing camera (C)");
        };
        if self.lights.is_empty() {
            warn!("scene has no lights, every visible surface will be black");
        }
        Ok(World::new(self.instances, self.lights, camera, ambient))
    }
}

fn expect_fields(id: &str, args: &[&str], count: usize) -> Result<()> {
    if args.len() != count {
        bail!("{} expects {} fields, got {}", id, count, args.len());
    }
    Ok(())
}

fn parse_float(field: &str, what: &str) -> Result<f32> {
    let value: f32 = field
        .parse()
        .with_context(|| format!("malformed {} {:?}", what, field))?;
    if !value.is_finite() {
        bail!("{} must be finite, got {}", what, field);
    }
    Ok(value)
}

fn parse_vec3(field: &str, what: &str) -> Result<Vec3> {
    let parts: Vec<&str> = field.split(',').collect();
    if parts.len() != 3 {
        bail!("{} must be an x,y,z triple, got {:?}", what, field);
    }
    Ok(Vec3::new(
        parse_float(parts[0], what)?,
        parse_float(parts[1], what)?,
        parse_float(parts[2], what)?,
    ))
}

fn parse_orientation(field: &str) -> Result<Vec3> {
    let v = parse_vec3(field, "orientation")?;
    if v.norm() == 0.0 {
        bail!("orientation must not be the zero vector");
    }
    Ok(v.normalized())
}

fn parse_color(field: &str) -> Result<RGBColor> {
    let v = parse_vec3(field, "color")?;
    for channel in [v.x, v.y, v.z] {
        if !(0.0..=255.0).contains(&channel) {
            bail!("color channels must lie in [0, 255], got {}", field);
        }
    }
    Ok(RGBColor::new(v.x, v.y, v.z))
}

fn parse_ratio(field: &str) -> Result<f32> {
    let ratio = parse_float(field, "ratio")?;
    if ratio < 0.0 {
        bail!("ratio must not be negative, got {}", ratio);
    }
    Ok(ratio.min(1.0))
}

fn parse_positive(field: &str, what: &str) -> Result<f32> {
    let value = parse_float(field, what)?;
    if value <= 0.0 {
        bail!("{} must be positive, got {}", what, value);
    }
    Ok(value)
}
