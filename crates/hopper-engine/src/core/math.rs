//! Small 2D helpers on top of glam.

use glam::Vec2;

/// `pos + vel * dt`, the one integration step shared by the integrator and
/// self-driven platforms.
#[inline]
pub fn advance(pos: Vec2, vel: Vec2, dt: f32) -> Vec2 {
    pos + vel * dt
}

/// Axis-aligned box with a top-left origin (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Penetration depth on each axis, or `None` if the boxes are apart.
    /// Touching edges (zero depth) do not count as overlap.
    pub fn overlap(&self, other: &Aabb) -> Option<Vec2> {
        let dx = self.max.x.min(other.max.x) - self.min.x.max(other.min.x);
        let dy = self.max.y.min(other.max.y) - self.min.y.max(other.min.y);
        if dx > 0.0 && dy > 0.0 {
            Some(Vec2::new(dx, dy))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_scales_velocity_by_dt() {
        let p = advance(Vec2::new(10.0, 20.0), Vec2::new(100.0, -50.0), 0.5);
        assert_eq!(p, Vec2::new(60.0, -5.0));
    }

    #[test]
    fn overlap_reports_depth_per_axis() {
        let a = Aabb::from_pos_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Aabb::from_pos_size(Vec2::new(8.0, 5.0), Vec2::new(10.0, 10.0));
        assert_eq!(a.overlap(&b), Some(Vec2::new(2.0, 5.0)));
        assert_eq!(b.overlap(&a), Some(Vec2::new(2.0, 5.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Aabb::from_pos_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Aabb::from_pos_size(Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0));
        assert_eq!(a.overlap(&b), None);
    }
}
