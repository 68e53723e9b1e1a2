use crate::hittable::{HitRecord, Hittable};
use crate::math::*;
use crate::parsing::config::RenderSettings;
use crate::profile::Profile;
use crate::world::{Light, World};

/// Darkest factor a shadow can apply, occluded points never go fully black.
pub const MAX_SHADOW_INTENSITY: f32 = 0.999;

/// Attenuation for a point whose shadow ray hit an occluder `occluder_distance`
/// away while the light sits `light_distance` away. Occluders close to the
/// surface darken more.
pub fn shadow_intensity(occluder_distance: f32, light_distance: f32) -> f32 {
    (occluder_distance / light_distance).min(MAX_SHADOW_INTENSITY)
}

/// Lambertian cosine term, clamped at zero for surfaces facing away.
pub fn diffuse(normal: Vec3, point: Vec3, light: &Light) -> f32 {
    let to_light = (light.origin - point).normalized();
    (normal * to_light).max(0.0)
}

/// First-light diffuse shading with a single shadow ray per visible point.
pub struct DirectLightingIntegrator<'a> {
    pub world: &'a World,
    pub shadow_bias: f32,
    pub exact_cylinder_normals: bool,
}

impl<'a> DirectLightingIntegrator<'a> {
    pub fn new(world: &'a World, settings: &RenderSettings) -> Self {
        DirectLightingIntegrator {
            world,
            shadow_bias: settings.shadow_bias,
            exact_cylinder_normals: settings.exact_cylinder_normals,
        }
    }

    /// Packed RGBA for a primary ray, `0` when it escapes the scene.
    pub fn color(&self, r: Ray, profile: &mut Profile) -> u32 {
        profile.camera_rays += 1;
        match self.world.hit(r) {
            Some(hit) => {
                profile.primary_hits += 1;
                self.shade(&hit, profile).pack()
            }
            None => 0,
        }
    }

    pub fn shade(&self, hit: &HitRecord<'_>, profile: &mut Profile) -> RGBColor {
        let Some(light) = self.world.primary_light() else {
            return RGBColor::ZERO;
        };
        let normal = hit
            .instance
            .shading_normal(hit.point, self.exact_cylinder_normals);
        let mut color = hit.instance.color() * diffuse(normal, hit.point, light) * light.ratio;
        color *= self.shadow(hit.point, normal, light, profile) * self.world.ambient.ratio;
        color
    }

    /// Casts the shadow ray toward `light` and returns the factor to scale by,
    /// `1.0` when nothing is in the way.
    pub fn shadow(&self, point: Vec3, normal: Vec3, light: &Light, profile: &mut Profile) -> f32 {
        profile.shadow_rays += 1;
        let origin = point + normal * self.shadow_bias;
        let shadow_ray = Ray::new(origin, (light.origin - point).normalized());
        match self.world.hit(shadow_ray) {
            Some(occluder) => {
                profile.occluded += 1;
                shadow_intensity(occluder.time, (light.origin - point).norm())
            }
            None => 1.0,
        }
    }
}
