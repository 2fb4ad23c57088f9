//! Bounded play area
//!
//! The host re-reads the arena size every frame; nothing here caches layout.

use glam::Vec2;

/// Rectangular play region with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Arena {
    width: f32,
    height: f32,
}

impl Arena {
    /// Create an arena; negative or NaN dimensions collapse to zero
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// True when layout is missing or collapsed (zero width or height)
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Largest top-left coordinate a box of `size` may take and stay inside
    pub fn max_pos(&self, size: Vec2) -> Vec2 {
        (self.size() - size.max(Vec2::ZERO)).max(Vec2::ZERO)
    }

    /// Clamp a top-left position so the box stays within the arena.
    /// Boxes wider than the arena pin to 0.
    pub fn clamp(&self, pos: Vec2, size: Vec2) -> Vec2 {
        let max = self.max_pos(size);
        Vec2::new(pos.x.max(0.0).min(max.x), pos.y.max(0.0).min(max.y))
    }

    /// Top-left position that centers a box of `size`
    pub fn center_for(&self, size: Vec2) -> Vec2 {
        crate::centered_in(self.size(), size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamp_inside_is_identity() {
        let arena = Arena::new(800.0, 600.0);
        let pos = Vec2::new(100.0, 200.0);
        assert_eq!(arena.clamp(pos, Vec2::splat(40.0)), pos);
    }

    #[test]
    fn test_clamp_edges() {
        let arena = Arena::new(800.0, 600.0);
        let size = Vec2::splat(40.0);
        assert_eq!(arena.clamp(Vec2::new(-5.0, -1.0), size), Vec2::ZERO);
        assert_eq!(
            arena.clamp(Vec2::new(900.0, 700.0), size),
            Vec2::new(760.0, 560.0)
        );
    }

    #[test]
    fn test_degenerate_arena_pins_to_origin() {
        let arena = Arena::new(0.0, 0.0);
        assert!(arena.is_degenerate());
        assert_eq!(
            arena.clamp(Vec2::new(50.0, 50.0), Vec2::splat(40.0)),
            Vec2::ZERO
        );

        // Narrower than the entity
        let narrow = Arena::new(20.0, 600.0);
        assert!(!narrow.is_degenerate());
        assert_eq!(
            narrow.clamp(Vec2::new(10.0, 10.0), Vec2::splat(40.0)),
            Vec2::new(0.0, 10.0)
        );
    }

    #[test]
    fn test_negative_dimensions_collapse() {
        let arena = Arena::new(-10.0, 300.0);
        assert_eq!(arena.width(), 0.0);
        assert!(arena.is_degenerate());
    }

    proptest! {
        #[test]
        fn clamped_position_stays_in_bounds(
            w in 0.0f32..2000.0,
            h in 0.0f32..2000.0,
            x in -5000.0f32..5000.0,
            y in -5000.0f32..5000.0,
            size in 0.0f32..200.0,
        ) {
            let arena = Arena::new(w, h);
            let size = Vec2::splat(size);
            let pos = arena.clamp(Vec2::new(x, y), size);
            let max = arena.max_pos(size);
            prop_assert!(pos.x >= 0.0 && pos.x <= max.x);
            prop_assert!(pos.y >= 0.0 && pos.y <= max.y);
        }
    }
}
