use crate::camera::Camera;
use crate::hittable::*;
use crate::math::*;

pub use crate::geometry::*;

/// Point light. Only the ratio takes part in shading.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub origin: Vec3,
    pub ratio: f32,
    pub color: RGBColor,
}

impl Light {
    pub fn new(origin: Vec3, ratio: f32, color: RGBColor) -> Self {
        Light {
            origin,
            ratio,
            color,
        }
    }
}

/// Global ambient term, applied as a plain multiplier.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ambient {
    pub ratio: f32,
    pub color: RGBColor,
}

impl Ambient {
    pub fn new(ratio: f32, color: RGBColor) -> Self {
        Ambient { ratio, color }
    }
}

#[derive(Clone, Debug)]
pub struct World {
    pub instances: Vec<Instance>,
    pub lights: Vec<Light>,
    pub camera: Camera,
    pub ambient: Ambient,
}

impl World {
    pub fn new(
        instances: Vec<Instance>,
        lights: Vec<Light>,
        camera: Camera,
        ambient: Ambient,
    ) -> Self {
        info!(
            "constructing world with {} instances and {} lights",
            instances.len(),
            lights.len()
        );
        if lights.len() > 1 {
            warn!(
                "world has {} lights, only the first one is used for shading",
                lights.len()
            );
        }
        World {
            instances,
            lights,
            camera,
            ambient,
        }
    }

    /// Light used for diffuse shading and shadow rays.
    pub fn primary_light(&self) -> Option<&Light> {
        self.lights.first()
    }

    /// Nearest hit strictly closer than `r.tmax`. Ties keep the instance that
    /// comes first in scene order.
    pub fn hit(&self, r: Ray) -> Option<HitRecord<'_>> {
        let mut closest_so_far = r.tmax;
        let mut hit_record: Option<HitRecord<'_>> = None;
        for instance in &self.instances {
            if let Some(time) = instance.hit(r.with_tmax(closest_so_far)) {
                closest_so_far = time;
                hit_record = Some(HitRecord::new(time, r.point_at_parameter(time), instance));
            }
        }
        hit_record
    }

    /// Like [`World::hit`], but commits the winning distance to `r.tmax`.
    /// `r.tmax` is left untouched when nothing was hit.
    pub fn resolve(&self, r: &mut Ray) -> Option<&Instance> {
        let hit = self.hit(*r)?;
        r.tmax = hit.time;
        Some(hit.instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with(aggregates: Vec<Aggregate>) -> World {
        let instances = aggregates
            .into_iter()
            .enumerate()
            .map(|(id, aggregate)| Instance::new(aggregate, id as InstanceId))
            .collect();
        World::new(
            instances,
            vec![Light::new(Vec3::new(0.0, 10.0, 0.0), 1.0, RGBColor::WHITE)],
            Camera::new(Vec3::ZERO, Vec3::Z, 60.0),
            Ambient::new(1.0, RGBColor::WHITE),
        )
    }

    #[test]
    fn test_nearer_of_two_stacked_spheres() {
        let far = Sphere::new(1.0, Vec3::new(0.0, 0.0, 10.0), RGBColor::WHITE);
        let near = Sphere::new(1.0, Vec3::new(0.0, 0.0, 5.0), RGBColor::WHITE);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        for world in [
            world_with(vec![far.into(), near.into()]),
            world_with(vec![near.into(), far.into()]),
        ] {
            let hit = world.hit(ray).unwrap();
            assert!((hit.time - 4.0).abs() < 1e-5);
            assert_eq!(hit.instance.aggregate, Aggregate::Sphere(near));
            assert!((hit.point - Vec3::new(0.0, 0.0, 4.0)).norm() < 1e-5);
        }
    }

    #[test]
    fn test_first_instance_wins_ties() {
        let a = Plane::new(Vec3::new(0.0, 0.0, 3.0), -Vec3::Z, RGBColor::new(255.0, 0.0, 0.0));
        let b = Plane::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Z, RGBColor::new(0.0, 255.0, 0.0));
        let world = world_with(vec![a.into(), b.into()]);
        let hit = world.hit(Ray::new(Vec3::ZERO, Vec3::Z)).unwrap();
        assert_eq!(hit.instance.instance_id, 0);
    }

    #[test]
    fn test_miss_and_resolve() {
        let world = world_with(vec![Sphere::new(1.0, Vec3::new(0.0, 0.0, 5.0), RGBColor::WHITE).into()]);
        let mut away = Ray::new(Vec3::ZERO, -Vec3::Z);
        assert!(world.resolve(&mut away).is_none());
        assert_eq!(away.tmax, INFINITY);

        let mut toward = Ray::new(Vec3::ZERO, Vec3::Z);
        let instance = world.resolve(&mut toward).unwrap();
        assert_eq!(instance.instance_id, 0);
        assert!((toward.tmax - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_world_never_hits() {
        let world = world_with(vec![]);
        assert!(world.hit(Ray::new(Vec3::ZERO, Vec3::X)).is_none());
        assert_eq!(world.primary_light().map(|l| l.ratio), Some(1.0));
    }
}
