use glam::Vec2;

/// Parameters for the fractal branch generator.
///
/// Coordinates follow the screen convention: `y` grows downward, so the
/// trunk of an upright tree has `trunk_top.y < trunk_base.y`.
#[derive(Clone, Copy, Debug)]
pub struct GrowthConfig {
    pub trunk_base: Vec2,
    pub trunk_top: Vec2,
    pub trunk_thickness: f32,
    pub max_depth: u8,
    pub min_thickness: f32,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        // An upright tree centered in an 800x600 scene with the ground
        // at y = 420.
        Self {
            trunk_base: Vec2::new(400.0, 420.0),
            trunk_top: Vec2::new(400.0, 240.0),
            trunk_thickness: 25.0,
            max_depth: 5,
            min_thickness: 1.0,
        }
    }
}
