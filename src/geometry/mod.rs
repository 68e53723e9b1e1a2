mod cylinder;
mod plane;
mod sphere;

pub use cylinder::Cylinder;
pub use plane::Plane;
pub use sphere::Sphere;

use crate::hittable::Hittable;
use crate::math::*;

/// Below this `|n·d|` a ray counts as parallel to a plane.
pub const PARALLEL_EPSILON: f32 = 1e-5;
/// Below this `|axis·d|` a ray counts as parallel to a cylinder cap.
pub const CAP_PARALLEL_EPSILON: f32 = 1e-6;
/// Distance along a cylinder axis within which a point is considered on a cap.
pub const SURFACE_TOLERANCE: f32 = 1e-4;

pub type InstanceId = u32;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Aggregate {
    Sphere(Sphere),
    Plane(Plane),
    Cylinder(Cylinder),
}

impl From<Sphere> for Aggregate {
    fn from(data: Sphere) -> Self {
        Aggregate::Sphere(data)
    }
}

impl From<Plane> for Aggregate {
    fn from(data: Plane) -> Self {
        Aggregate::Plane(data)
    }
}

impl From<Cylinder> for Aggregate {
    fn from(data: Cylinder) -> Self {
        Aggregate::Cylinder(data)
    }
}

impl Aggregate {
    pub fn kind(&self) -> &'static str {
        match self {
            Aggregate::Sphere(_) => "sphere",
            Aggregate::Plane(_) => "plane",
            Aggregate::Cylinder(_) => "cylinder",
        }
    }
}

impl Hittable for Aggregate {
    fn hit(&self, r: Ray) -> Option<f32> {
        match self {
            Aggregate::Sphere(sphere) => sphere.hit(r),
            Aggregate::Plane(plane) => plane.hit(r),
            Aggregate::Cylinder(cylinder) => cylinder.hit(r),
        }
    }
    fn normal(&self, point: Vec3) -> Vec3 {
        match self {
            Aggregate::Sphere(sphere) => sphere.normal(point),
            Aggregate::Plane(plane) => plane.normal(point),
            Aggregate::Cylinder(cylinder) => cylinder.normal(point),
        }
    }
    fn color(&self) -> RGBColor {
        match self {
            Aggregate::Sphere(sphere) => sphere.color(),
            Aggregate::Plane(plane) => plane.color(),
            Aggregate::Cylinder(cylinder) => cylinder.color(),
        }
    }
}

/// A primitive placed in the scene. `instance_id` follows scene order.
#[derive(Copy, Clone, Debug)]
pub struct Instance {
    pub aggregate: Aggregate,
    pub instance_id: InstanceId,
}

impl PartialEq for Instance {
    fn eq(&self, other: &Instance) -> bool {
        self.instance_id == other.instance_id
    }
}

impl Instance {
    pub fn new(aggregate: Aggregate, instance_id: InstanceId) -> Self {
        Instance {
            aggregate,
            instance_id,
        }
    }

    /// Surface normal, optionally replacing the cylinder approximation with
    /// the geometric one.
    pub fn shading_normal(&self, point: Vec3, exact_cylinder_normals: bool) -> Vec3 {
        match &self.aggregate {
            Aggregate::Cylinder(cylinder) if exact_cylinder_normals => {
                cylinder.exact_normal(point)
            }
            aggregate => aggregate.normal(point),
        }
    }
}

impl Hittable for Instance {
    fn hit(&self, r: Ray) -> Option<f32> {
        debug_assert!(r.origin.is_finite());
        debug_assert!(r.direction.is_finite());
        self.aggregate.hit(r)
    }
    fn normal(&self, point: Vec3) -> Vec3 {
        self.aggregate.normal(point)
    }
    fn color(&self) -> RGBColor {
        self.aggregate.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_primitive() {
        let sphere = Sphere::new(1.0, Vec3::new(0.0, 0.0, 5.0), RGBColor::new(255.0, 0.0, 0.0));
        let instance = Instance::new(sphere.into(), 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(instance.hit(ray), sphere.hit(ray));
        assert_eq!(instance.color(), sphere.color);
        assert_eq!(instance.aggregate.kind(), "sphere");
    }

    #[test]
    fn test_shading_normal_switch() {
        let cylinder = Cylinder::new(Vec3::ZERO, Vec3::Y, 1.0, 2.0, RGBColor::WHITE);
        let instance = Instance::new(cylinder.into(), 3);
        let p = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(instance.shading_normal(p, false), cylinder.normal(p));
        assert!((instance.shading_normal(p, true) - Vec3::X).norm() < 1e-6);

        let plane = Instance::new(Plane::new(Vec3::ZERO, Vec3::Y, RGBColor::WHITE).into(), 4);
        assert_eq!(plane.shading_normal(p, true), Vec3::Y);
    }
}
