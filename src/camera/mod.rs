use crate::math::*;

/// Fallback reference up vectors, tried in order when the view direction is
/// parallel to the configured one.
const FALLBACK_UP: [Vec3; 2] = [Vec3::Z, Vec3::X];

/// Pinhole camera. `fov` is the vertical field of view in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub origin: Vec3,
    pub direction: Vec3,
    pub fov: f32,
}

impl Camera {
    pub fn new(origin: Vec3, direction: Vec3, fov: f32) -> Self {
        Camera {
            origin,
            direction,
            fov,
        }
    }

    /// Viewport `(width, height)` at unit distance in front of the camera.
    pub fn viewport_size(&self, width: usize, height: usize) -> (f32, f32) {
        let viewport_height = 2.0 * (self.fov.to_radians() / 2.0).tan();
        let aspect_ratio = width as f32 / height as f32;
        (viewport_height * aspect_ratio, viewport_height)
    }

    /// Orthonormal `(right, up)` pair for the view direction.
    pub fn basis(&self, world_up: Vec3) -> (Vec3, Vec3) {
        let forward = self.direction.normalized();
        let reference = std::iter::once(world_up)
            .chain(FALLBACK_UP)
            .find(|up| forward.cross(*up).norm() > 1e-6)
            .unwrap_or(world_up);
        if reference != world_up {
            debug!(
                "view direction {} is parallel to {}, using {} as up",
                forward, world_up, reference
            );
        }
        let right = forward.cross(reference).normalized();
        let up = right.cross(forward).normalized();
        (right, up)
    }

    /// Fixes the film size and up vector, precomputing everything per-pixel
    /// rays need.
    pub fn with_resolution(&self, width: usize, height: usize, world_up: Vec3) -> CameraRays {
        let (viewport_width, viewport_height) = self.viewport_size(width, height);
        let (right, up) = self.basis(world_up);
        CameraRays {
            origin: self.origin,
            forward: self.direction.normalized(),
            half_horizontal: right * (viewport_width / 2.0),
            half_vertical: up * (viewport_height / 2.0),
            width: width as f32,
            height: height as f32,
        }
    }

    pub fn get_ray(&self, x: usize, y: usize, width: usize, height: usize, world_up: Vec3) -> Ray {
        self.with_resolution(width, height, world_up).get_ray(x, y)
    }
}

/// Primary ray generator for one film size.
#[derive(Copy, Clone, Debug)]
pub struct CameraRays {
    origin: Vec3,
    forward: Vec3,
    half_horizontal: Vec3,
    half_vertical: Vec3,
    width: f32,
    height: f32,
}

impl CameraRays {
    /// Ray through the center of pixel `(x, y)`, `y` growing downwards.
    pub fn get_ray(&self, x: usize, y: usize) -> Ray {
        let ndc_x = (x as f32 + 0.5) / self.width * 2.0 - 1.0;
        let ndc_y = 1.0 - (y as f32 + 0.5) / self.height * 2.0;
        let direction =
            (self.half_horizontal * ndc_x + self.half_vertical * ndc_y + self.forward).normalized();
        debug_assert!(direction.is_finite());
        Ray::new(self.origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn looking_down_z() -> Camera {
        Camera::new(Vec3::ZERO, -Vec3::Z, 90.0)
    }

    #[test]
    fn test_viewport_size() {
        let (w, h) = looking_down_z().viewport_size(200, 100);
        assert!((h - 2.0).abs() < 1e-5);
        assert!((w - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_basis_is_right_handed() {
        let (right, up) = looking_down_z().basis(Vec3::Y);
        assert!((right - Vec3::X).norm() < 1e-6);
        assert!((up - Vec3::Y).norm() < 1e-6);
    }

    #[test]
    fn test_center_pixel_looks_forward() {
        let ray = looking_down_z().get_ray(50, 50, 101, 101, Vec3::Y);
        assert_eq!(ray.origin, Vec3::ZERO);
        assert_eq!(ray.tmax, INFINITY);
        assert!((ray.direction + Vec3::Z).norm() < 1e-5);
    }

    #[test]
    fn test_top_left_pixel_points_up_and_left() {
        let ray = looking_down_z().get_ray(0, 0, 100, 100, Vec3::Y);
        assert!(ray.direction.x < 0.0);
        assert!(ray.direction.y > 0.0);
        // square film, so the corner is symmetric in x and y
        assert!((ray.direction.x + ray.direction.y).abs() < 1e-5);
    }

    #[test]
    fn test_direction_length_does_not_change_rays() {
        let unit = looking_down_z();
        let long = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -7.5), 90.0);
        for (x, y) in [(0, 0), (13, 42), (99, 99)] {
            let a = unit.get_ray(x, y, 100, 100, Vec3::Y);
            let b = long.get_ray(x, y, 100, 100, Vec3::Y);
            assert!((a.direction - b.direction).norm() < 1e-6);
        }
    }

    #[test]
    fn test_degenerate_basis_stays_finite() {
        let camera = Camera::new(Vec3::ZERO, -Vec3::Y, 70.0);
        let (right, up) = camera.basis(Vec3::Y);
        assert!(right.is_finite() && up.is_finite());
        assert!((right.norm() - 1.0).abs() < 1e-5);
        let ray = camera.get_ray(3, 7, 16, 16, Vec3::Y);
        assert!(ray.direction.is_finite());
    }

    #[test]
    fn test_random_rays_normalized_and_deterministic() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let direction = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if direction.norm() < 0.1 {
                continue;
            }
            let camera = Camera::new(
                Vec3::new(rng.gen_range(-5.0..5.0), 1.0, 2.0),
                direction.normalized(),
                rng.gen_range(10.0..170.0),
            );
            let (width, height) = (rng.gen_range(1..300), rng.gen_range(1..300));
            let rays = camera.with_resolution(width, height, Vec3::Y);
            let (x, y) = (rng.gen_range(0..width), rng.gen_range(0..height));
            let ray = rays.get_ray(x, y);
            assert!((ray.direction.norm() - 1.0).abs() < 1e-5);
            assert_eq!(ray, camera.get_ray(x, y, width, height, Vec3::Y));
        }
    }
}
