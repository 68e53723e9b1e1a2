use crate::hittable::Hittable;
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub origin: Vec3,
    pub color: RGBColor,
}

impl Sphere {
    pub fn new(radius: f32, origin: Vec3, color: RGBColor) -> Sphere {
        Sphere {
            radius,
            origin,
            color,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: Ray) -> Option<f32> {
        let oc: Vec3 = r.origin - self.origin;
        let a = r.direction * r.direction;
        let b = 2.0 * (oc * r.direction);
        let c = oc * oc - self.radius * self.radius;
        let (t1, t2) = Quadratic::solve(a, b, c).roots?;
        // front face first, the far root only when the origin is inside
        let time = match (t1 >= 0.0, t2 >= 0.0) {
            (false, false) => return None,
            (true, false) => t1,
            (false, true) => t2,
            (true, true) => t1.min(t2),
        };
        if time < r.tmax {
            Some(time)
        } else {
            None
        }
    }
    fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.origin).normalized()
    }
    fn color(&self) -> RGBColor {
        self.color
    }
}
