//! Collision detection between the player circle and the axe square
//!
//! The axe is an axis-aligned box, so the test reduces to finding the
//! point of the box nearest the circle center and comparing its distance
//! against the radius. Touching counts as a hit.

use glam::Vec2;

use super::state::{Obstacle, Player};

/// Coarse edge test between a circle's bounding box and a rectangle
///
/// Rejects trivial separation on either axis. Boundary contact is a hit.
#[inline]
pub fn aabb_overlap(center: Vec2, radius: f32, rect_min: Vec2, rect_size: Vec2) -> bool {
    let circle_min = center - Vec2::splat(radius);
    let circle_max = center + Vec2::splat(radius);
    let rect_max = rect_min + rect_size;

    rect_max.x >= circle_min.x
        && rect_min.x <= circle_max.x
        && rect_max.y >= circle_min.y
        && rect_min.y <= circle_max.y
}

/// Exact circle vs axis-aligned rectangle overlap (inclusive)
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect_min: Vec2, rect_size: Vec2) -> bool {
    if !aabb_overlap(center, radius, rect_min, rect_size) {
        return false;
    }

    // Nearest point on the rectangle to the circle center
    let nearest = center.clamp(rect_min, rect_min + rect_size);
    nearest.distance_squared(center) <= radius * radius
}

/// Check whether the player currently touches the axe
#[inline]
pub fn collides(player: &Player, obstacle: &Obstacle) -> bool {
    circle_rect_overlap(
        player.pos,
        player.radius,
        obstacle.pos,
        Vec2::splat(obstacle.size),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player_at(x: f32, y: f32) -> Player {
        Player {
            pos: Vec2::new(x, y),
            radius: 25.0,
        }
    }

    fn axe_at(x: f32, y: f32) -> Obstacle {
        Obstacle {
            pos: Vec2::new(x, y),
            size: 50.0,
            vel: Vec2::ZERO,
        }
    }

    #[test]
    fn test_clear_miss() {
        assert!(!collides(&player_at(400.0, 225.0), &axe_at(300.0, 0.0)));
    }

    #[test]
    fn test_center_inside_rect() {
        assert!(collides(&player_at(320.0, 20.0), &axe_at(300.0, 0.0)));
    }

    #[test]
    fn test_edge_touch_is_hit() {
        // Circle left edge exactly at rect right edge
        assert!(collides(&player_at(375.0, 25.0), &axe_at(300.0, 0.0)));
        // Circle top exactly at rect bottom
        assert!(collides(&player_at(325.0, 75.0), &axe_at(300.0, 0.0)));
    }

    #[test]
    fn test_center_on_boundary_is_hit() {
        assert!(collides(&player_at(350.0, 25.0), &axe_at(300.0, 0.0)));
        assert!(collides(&player_at(300.0, 0.0), &axe_at(300.0, 0.0)));
    }

    #[test]
    fn test_corner_gap_is_miss() {
        // Bounding boxes overlap but the circle misses the corner:
        // nearest point (350, 50), distance sqrt(2) * 20 > 25
        let player = player_at(370.0, 70.0);
        let axe = axe_at(300.0, 0.0);
        assert!(aabb_overlap(player.pos, player.radius, axe.pos, Vec2::splat(axe.size)));
        assert!(!collides(&player, &axe));
    }

    #[test]
    fn test_corner_hit() {
        // Distance from corner (350, 50) is sqrt(2) * 15 < 25
        assert!(collides(&player_at(365.0, 65.0), &axe_at(300.0, 0.0)));
    }

    proptest! {
        #[test]
        fn prop_symmetric_under_reflection(
            cx in -200i32..1000,
            cy in -200i32..700,
            radius in 1i32..80,
            rx in 0i32..800,
            ry in 0i32..450,
            size in 1i32..120,
        ) {
            // Whole-pixel inputs keep the mirrored arithmetic exact
            let (cx, cy, radius) = (cx as f32, cy as f32, radius as f32);
            let (rx, ry, size) = (rx as f32, ry as f32, size as f32);
            let rect = Vec2::splat(size);
            let hit = circle_rect_overlap(Vec2::new(cx, cy), radius, Vec2::new(rx, ry), rect);

            // Mirror across x = 0: the rectangle's min corner moves to -(rx + size)
            let mirrored_x = circle_rect_overlap(
                Vec2::new(-cx, cy),
                radius,
                Vec2::new(-(rx + size), ry),
                rect,
            );
            let mirrored_y = circle_rect_overlap(
                Vec2::new(cx, -cy),
                radius,
                Vec2::new(rx, -(ry + size)),
                rect,
            );

            prop_assert_eq!(hit, mirrored_x);
            prop_assert_eq!(hit, mirrored_y);
        }

        #[test]
        fn prop_center_inside_always_hits(
            rx in 0.0f32..800.0,
            ry in 0.0f32..450.0,
            size in 1.0f32..120.0,
            tx in 0.0f32..=1.0,
            ty in 0.0f32..=1.0,
            radius in 0.5f32..80.0,
        ) {
            let center = Vec2::new(rx + tx * size, ry + ty * size);
            prop_assert!(circle_rect_overlap(center, radius, Vec2::new(rx, ry), Vec2::splat(size)));
        }
    }
}
