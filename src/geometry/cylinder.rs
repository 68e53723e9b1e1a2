use super::{CAP_PARALLEL_EPSILON, SURFACE_TOLERANCE};
use crate::hittable::Hittable;
use crate::math::*;

/// Finite cylinder centered on `origin`, capped by two disks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cylinder {
    pub origin: Vec3,
    pub axis: Vec3,
    pub radius: f32,
    pub height: f32,
    pub color: RGBColor,
    /// Bottom cap center, `origin - axis * height / 2`.
    pub cap1: Vec3,
    /// Top cap center, `origin + axis * height / 2`.
    pub cap2: Vec3,
}

impl Cylinder {
    pub fn new(origin: Vec3, axis: Vec3, radius: f32, height: f32, color: RGBColor) -> Self {
        Cylinder {
            origin,
            axis,
            radius,
            height,
            color,
            cap1: origin - axis * (height / 2.0),
            cap2: origin + axis * (height / 2.0),
        }
    }

    fn between_caps(&self, point: Vec3) -> bool {
        ((point - self.cap1) * self.axis) * ((point - self.cap2) * self.axis) <= 0.0
    }

    /// Nearest non-negative hit on the side wall, ignoring `tmax`.
    fn hit_lateral(&self, r: Ray) -> Option<f32> {
        let oc = r.origin - self.origin;
        let d_axis = r.direction * self.axis;
        let oc_axis = oc * self.axis;
        let a = r.direction * r.direction - d_axis * d_axis;
        let b = 2.0 * (r.direction * oc - d_axis * oc_axis);
        let c = oc * oc - oc_axis * oc_axis - self.radius * self.radius;
        let (t1, t2) = Quadratic::solve(a, b, c).roots?;
        [t2, t1]
            .into_iter()
            .filter(|&t| t >= 0.0 && self.between_caps(r.point_at_parameter(t)))
            .reduce(f32::min)
    }

    /// Ray against the disk of `radius` at `center`, both caps share the axis as plane normal.
    fn hit_cap(&self, r: Ray, center: Vec3) -> Option<f32> {
        let denom = r.direction * self.axis;
        if denom.abs() <= CAP_PARALLEL_EPSILON {
            return None;
        }
        let t = ((center - r.origin) * self.axis) / denom;
        if t < 0.0 {
            return None;
        }
        if (r.point_at_parameter(t) - center).norm() <= self.radius {
            Some(t)
        } else {
            None
        }
    }

    /// Radial normal on the wall, `±axis` on the caps.
    pub fn exact_normal(&self, point: Vec3) -> Vec3 {
        let h = (point - self.cap1) * self.axis;
        if h <= SURFACE_TOLERANCE {
            -self.axis
        } else if h >= self.height - SURFACE_TOLERANCE {
            self.axis
        } else {
            (point - (self.cap1 + self.axis * h)).normalized()
        }
    }
}

impl Hittable for Cylinder {
    fn hit(&self, r: Ray) -> Option<f32> {
        [
            self.hit_lateral(r),
            self.hit_cap(r, self.cap1),
            self.hit_cap(r, self.cap2),
        ]
        .into_iter()
        .flatten()
        .reduce(f32::min)
        .filter(|&t| t < r.tmax)
    }
    /// Direction from the bottom cap center to the point. Only a rough
    /// stand-in for the true normal, see [`Cylinder::exact_normal`].
    /// The bottom cap center itself has no such direction and gets `-axis`.
    fn normal(&self, point: Vec3) -> Vec3 {
        let offset = point - self.cap1;
        if offset.norm_squared() == 0.0 {
            return -self.axis;
        }
        offset.normalized()
    }
    fn color(&self) -> RGBColor {
        self.color
    }
}
