use glam::Vec2;

/// Canvas dimensions in pixels, as last reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Largest top-left coordinate that keeps a rectangle of `size` on screen.
    /// Never negative, so a viewport smaller than the rectangle pins it at 0.
    #[inline]
    pub fn max_position(&self, size: Vec2) -> Vec2 {
        (self.size() - size).max(Vec2::ZERO)
    }

    #[inline]
    pub fn clamp_position(&self, position: Vec2, size: Vec2) -> Vec2 {
        position.clamp(Vec2::ZERO, self.max_position(size))
    }

    pub fn contains_rect(&self, position: Vec2, size: Vec2) -> bool {
        let max = self.max_position(size);
        position.x >= 0.0 && position.y >= 0.0 && position.x <= max.x && position.y <= max.y
    }
}

/// Resolve an edge hit on one axis: clamp to the touched boundary and send the
/// velocity back with `damping` of its speed. Returns true on a hit.
#[inline]
pub fn reflect_axis(position: &mut f32, velocity: &mut f32, max: f32, damping: f32) -> bool {
    if *position <= 0.0 {
        *position = 0.0;
        *velocity *= -damping;
        true
    } else if *position >= max {
        *position = max;
        *velocity *= -damping;
        true
    } else {
        false
    }
}
