use glam::Vec2;

/// 2D camera that fits the game world into a viewport.
///
/// The world spans `[0, world_width] x [0, world_height]`, Y-down like screen
/// pixels. It is scaled uniformly to fit the viewport and centered, leaving
/// letterbox bars on the longer axis.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Viewport width in screen pixels.
    pub viewport_width: f32,
    /// Viewport height in screen pixels.
    pub viewport_height: f32,
}

impl Camera2D {
    /// A camera whose viewport matches the world 1:1 until the first resize.
    pub fn new(world_width: f32, world_height: f32) -> Self {
        Self {
            world_width,
            world_height,
            viewport_width: world_width,
            viewport_height: world_height,
        }
    }

    /// Resize the viewport (e.g. on window resize).
    /// Degenerate sizes are ignored so the transform stays invertible.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        if viewport_width <= 0.0 || viewport_height <= 0.0 {
            log::warn!("ignoring degenerate viewport {}x{}", viewport_width, viewport_height);
            return;
        }
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
    }

    /// Screen pixels per world unit.
    pub fn scale(&self) -> f32 {
        let horiz_ratio = self.viewport_width / self.world_width;
        let vert_ratio = self.viewport_height / self.world_height;
        horiz_ratio.min(vert_ratio)
    }

    /// Screen-space offset of the world origin (the letterbox bar size).
    pub fn offset(&self) -> Vec2 {
        let scale = self.scale();
        Vec2::new(
            (self.viewport_width - self.world_width * scale) / 2.0,
            (self.viewport_height - self.world_height * scale) / 2.0,
        )
    }

    /// Convert a screen position (pixels) to world coordinates.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset()) / self.scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_before_resize() {
        let cam = Camera2D::new(800.0, 600.0);
        let p = cam.screen_to_world(Vec2::new(123.0, 456.0));
        assert!((p - Vec2::new(123.0, 456.0)).length() < 1e-4);
    }

    #[test]
    fn wide_viewport_letterboxes_horizontally() {
        let mut cam = Camera2D::new(800.0, 600.0);
        cam.resize(1600.0, 600.0);
        assert!((cam.scale() - 1.0).abs() < 1e-6);
        assert!((cam.offset().x - 400.0).abs() < 1e-4);
        assert_eq!(cam.offset().y, 0.0);

        let p = cam.screen_to_world(Vec2::new(400.0, 0.0));
        assert!(p.length() < 1e-4, "left bar edge maps to world origin: {p}");
    }

    #[test]
    fn tall_viewport_letterboxes_vertically() {
        let mut cam = Camera2D::new(800.0, 600.0);
        cam.resize(400.0, 900.0);
        assert!((cam.scale() - 0.5).abs() < 1e-6);
        assert!((cam.offset().y - 300.0).abs() < 1e-4);

        let p = cam.screen_to_world(Vec2::new(200.0, 450.0));
        assert!((p - Vec2::new(400.0, 300.0)).length() < 1e-3, "center maps to center: {p}");
    }

    #[test]
    fn degenerate_resize_is_ignored() {
        let mut cam = Camera2D::new(800.0, 600.0);
        cam.resize(0.0, 300.0);
        assert_eq!(cam.viewport_width, 800.0);
        assert_eq!(cam.viewport_height, 600.0);
    }
}
