mod color;
mod quadratic;
mod vec;

pub use color::{rgba_to_0rgb, unpack, RGBColor};
pub use quadratic::Quadratic;
pub use std::f32::INFINITY;
pub use vec::Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    /// Nearest accepted hit distance so far. Intersectors only report hits
    /// strictly closer than this.
    pub tmax: f32,
}

impl Ray {
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Ray {
            origin,
            direction,
            tmax: INFINITY,
        }
    }
    pub fn with_tmax(mut self, tmax: f32) -> Self {
        self.tmax = tmax;
        self
    }
    pub fn point_at_parameter(&self, time: f32) -> Vec3 {
        self.origin + self.direction * time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_at_parameter() {
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::Y);
        assert_eq!(ray.tmax, INFINITY);
        assert_eq!(ray.point_at_parameter(2.5), Vec3::new(1.0, 2.5, 0.0));
        assert_eq!(ray.with_tmax(3.0).tmax, 3.0);
    }
}
