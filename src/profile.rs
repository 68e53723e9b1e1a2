/// Ray counters gathered while rendering.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Profile {
    pub camera_rays: usize, // primary rays, one per pixel
    pub shadow_rays: usize, // rays used to test visibility of the light
    pub primary_hits: usize,
    pub occluded: usize,
}

impl Profile {
    pub fn new(camera_rays: usize, shadow_rays: usize, primary_hits: usize, occluded: usize) -> Self {
        Profile {
            camera_rays,
            shadow_rays,
            primary_hits,
            occluded,
        }
    }
    pub fn total_rays(&self) -> usize {
        self.camera_rays + self.shadow_rays
    }

    pub fn pretty_print(&self, elapsed: f32) {
        let &Profile {
            camera_rays,
            shadow_rays,
            primary_hits,
            occluded,
        } = self;
        info!(
            "{} total camera rays at {} per second",
            camera_rays,
            camera_rays as f32 / elapsed
        );
        info!(
            "{} total shadow rays at {} per second",
            shadow_rays,
            shadow_rays as f32 / elapsed
        );
        info!(
            "{} primary hits, {} of them in shadow",
            primary_hits, occluded
        );
        let sum = self.total_rays();
        info!("{} total rays at {} per second", sum, sum as f32 / elapsed);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn test_default_macro() {
        let empty = Profile::default();
        assert_eq!(empty.total_rays(), 0);
    }

    #[test]
    fn test_total_rays() {
        assert_eq!(Profile::new(4, 2, 3, 1).total_rays(), 6);
    }
}
