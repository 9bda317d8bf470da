//! Axis-aligned collision detection
//!
//! Everything in the playfield is a screen-space rectangle (+y down): the
//! player, the ground strip and the two barriers of each obstacle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacles::{Obstacle, ObstacleGeometry};

/// Sprite art has a 1px transparent border, so the player visually lands a
/// pixel before its box reaches the ground.
pub const GROUND_CONTACT_TOLERANCE: f32 = 1.0;

/// Axis-aligned rectangle: top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        rects_overlap(self.pos, self.size, other.pos, other.size)
    }
}

/// Strict AABB overlap; touching edges do not count
#[inline]
pub fn rects_overlap(p1: Vec2, s1: Vec2, p2: Vec2, s2: Vec2) -> bool {
    p1.x < p2.x + s2.x && p1.x + s1.x > p2.x && p1.y < p2.y + s2.y && p1.y + s1.y > p2.y
}

/// What the player ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    Ground,
    Obstacle,
}

/// Player's bottom edge at (or past) the ground's top edge
pub fn touches_ground(player: &Rect, ground_top: f32) -> bool {
    player.bottom() >= ground_top - GROUND_CONTACT_TOLERANCE
}

/// Player overlapping either barrier of `obstacle`
pub fn hits_obstacle(player: &Rect, obstacle: &Obstacle, geom: &ObstacleGeometry) -> bool {
    player.overlaps(&obstacle.bottom_barrier(geom)) || player.overlaps(&obstacle.top_barrier(geom))
}

/// Full collision pass: ground first, then every obstacle
pub fn detect<'a>(
    player: &Rect,
    ground_top: f32,
    obstacles: impl IntoIterator<Item = &'a Obstacle>,
    geom: &ObstacleGeometry,
) -> Option<CollisionKind> {
    if touches_ground(player, ground_top) {
        return Some(CollisionKind::Ground);
    }
    obstacles
        .into_iter()
        .any(|o| hits_obstacle(player, o, geom))
        .then_some(CollisionKind::Obstacle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GEOM: ObstacleGeometry = ObstacleGeometry {
        width: 52.0,
        gap: 150.0,
        height: 512.0,
    };

    fn unit_at(center: Vec2) -> Rect {
        Rect::new(center - Vec2::splat(0.5), Vec2::ONE)
    }

    #[test]
    fn test_coincident_unit_boxes_overlap() {
        let a = unit_at(Vec2::new(3.0, 4.0));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_separated_boxes_do_not_overlap() {
        let a = unit_at(Vec2::ZERO);
        assert!(!a.overlaps(&unit_at(Vec2::new(1.01, 0.0))));
        assert!(!a.overlaps(&unit_at(Vec2::new(0.0, -1.01))));
        // Touching edges only
        assert!(!a.overlaps(&unit_at(Vec2::new(1.0, 0.0))));
        assert!(a.overlaps(&unit_at(Vec2::new(0.99, 0.99))));
    }

    #[test]
    fn test_ground_contact() {
        let player = Rect::new(Vec2::new(80.0, 370.0), Vec2::new(34.0, 24.0));
        assert!(!touches_ground(&player, 400.0));
        assert!(touches_ground(&player, 394.5));
        assert!(touches_ground(&player, 380.0));
    }

    #[test]
    fn test_player_in_gap_is_safe() {
        let obstacle = Obstacle { x: 90.0, gap_center: 200.0 };
        let player = Rect::new(Vec2::new(100.0, 188.0), Vec2::new(34.0, 24.0));
        assert!(!hits_obstacle(&player, &obstacle, &GEOM));

        // Drop into the bottom barrier (starts at y = 275)
        let low = Rect::new(Vec2::new(100.0, 260.0), Vec2::new(34.0, 24.0));
        assert!(hits_obstacle(&low, &obstacle, &GEOM));

        // Rise into the top barrier (ends at y = 125)
        let high = Rect::new(Vec2::new(100.0, 110.0), Vec2::new(34.0, 24.0));
        assert!(hits_obstacle(&high, &obstacle, &GEOM));

        // Far above the screen still hits the mirrored barrier
        let above = Rect::new(Vec2::new(100.0, -200.0), Vec2::new(34.0, 24.0));
        assert!(hits_obstacle(&above, &obstacle, &GEOM));
    }

    #[test]
    fn test_detect_reports_kind() {
        let obstacles = [Obstacle { x: 90.0, gap_center: 200.0 }];
        let in_gap = Rect::new(Vec2::new(100.0, 188.0), Vec2::new(34.0, 24.0));
        assert_eq!(detect(&in_gap, 400.0, &obstacles, &GEOM), None);

        let on_ground = Rect::new(Vec2::new(10.0, 380.0), Vec2::new(34.0, 24.0));
        assert_eq!(detect(&on_ground, 400.0, &obstacles, &GEOM), Some(CollisionKind::Ground));

        let in_barrier = Rect::new(Vec2::new(100.0, 300.0), Vec2::new(34.0, 24.0));
        assert_eq!(
            detect(&in_barrier, 400.0, &obstacles, &GEOM),
            Some(CollisionKind::Obstacle)
        );
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.0f32..100.0, ah in 0.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.0f32..100.0, bh in 0.0f32..100.0,
        ) {
            let a = Rect::new(Vec2::new(ax, ay), Vec2::new(aw, ah));
            let b = Rect::new(Vec2::new(bx, by), Vec2::new(bw, bh));
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_far_apart_unit_boxes_never_overlap(
            cx in -100.0f32..100.0, cy in -100.0f32..100.0,
            gap in 1.001f32..50.0, horizontal in any::<bool>(),
        ) {
            let a = unit_at(Vec2::new(cx, cy));
            let offset = if horizontal { Vec2::new(gap, 0.0) } else { Vec2::new(0.0, gap) };
            let b = unit_at(Vec2::new(cx, cy) + offset);
            prop_assert!(!a.overlaps(&b));
        }
    }
}
