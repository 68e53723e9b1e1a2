use crate::geometry::Instance;
use crate::math::*;

/// Nearest hit found by the scene resolver.
#[derive(Copy, Clone, Debug)]
pub struct HitRecord<'a> {
    pub time: f32,
    pub point: Vec3,
    pub instance: &'a Instance,
}

impl<'a> HitRecord<'a> {
    pub fn new(time: f32, point: Vec3, instance: &'a Instance) -> Self {
        HitRecord {
            time,
            point,
            instance,
        }
    }
}

pub trait Hittable {
    /// Distance along `r` to the nearest valid intersection, if it is
    /// strictly closer than `r.tmax`.
    fn hit(&self, r: Ray) -> Option<f32>;
    /// Shading normal at a point on the surface.
    fn normal(&self, point: Vec3) -> Vec3;
    fn color(&self) -> RGBColor;
}
