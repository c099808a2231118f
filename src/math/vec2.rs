use std::ops::Sub;

/// 2D vector for canvas positions and velocities
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether the point lies inside `[0, width] x [0, height]`
    #[cfg(test)]
    pub fn within(&self, width: f64, height: f64) -> bool {
        (0.0..=width).contains(&self.x) && (0.0..=height).contains(&self.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}
