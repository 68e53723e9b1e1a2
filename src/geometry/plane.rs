use super::PARALLEL_EPSILON;
use crate::hittable::Hittable;
use crate::math::*;

/// Infinite plane through `origin`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub color: RGBColor,
}

impl Plane {
    pub fn new(origin: Vec3, normal: Vec3, color: RGBColor) -> Plane {
        Plane {
            origin,
            normal,
            color,
        }
    }
}

impl Hittable for Plane {
    fn hit(&self, r: Ray) -> Option<f32> {
        let denom = self.normal * r.direction;
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let time = ((self.origin - r.origin) * self.normal) / denom;
        if time < 0.0 || time >= r.tmax {
            return None;
        }
        Some(time)
    }
    fn normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
    fn color(&self) -> RGBColor {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn xy_plane() -> Plane {
        Plane::new(Vec3::ZERO, Vec3::Z, RGBColor::WHITE)
    }

    #[test]
    fn test_ray_plane_perpendicular() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);
        let t = xy_plane().hit(ray).unwrap();
        assert!((t - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_ray_plane_from_back_side() {
        let ray = Ray::new(Vec3::new(3.0, 4.0, -10.0), Vec3::Z);
        let t = xy_plane().hit(ray).unwrap();
        assert!((t - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_ray_plane_angled() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(1.0, 0.0, -1.0).normalized());
        let t = xy_plane().hit(ray).unwrap();
        assert!((t - 10.0 * 2.0f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_ray_plane_behind() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), -Vec3::Z);
        assert!(xy_plane().hit(ray).is_none());
    }

    #[test]
    fn test_parallel_rays_never_hit() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let normal = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            )
            .normalized();
            let plane = Plane::new(Vec3::ZERO, normal, RGBColor::WHITE);
            // any vector orthogonal to the normal is parallel to the plane
            let seed = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let direction = normal.cross(seed);
            if direction.norm() < 0.1 {
                continue;
            }
            let direction = direction.normalized();
            let origin = Vec3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            assert!(plane.hit(Ray::new(origin, direction)).is_none());
        }
    }
}
