//! Insect motion, expiry and spider-vs-insect collisions
//!
//! Hitboxes are axis-aligned and closed: boxes that merely touch overlap.

use glam::IVec2;

use super::actor::Actor;
use super::state::InsectRegistry;

/// Closed axis-aligned box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Aabb {
    pub fn from_center(center: IVec2, half_extents: IVec2) -> Self {
        Self {
            left: center.x - half_extents.x,
            right: center.x + half_extents.x,
            top: center.y - half_extents.y,
            bottom: center.y + half_extents.y,
        }
    }

    /// Inclusive on every side
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right >= other.left
            && self.left <= other.right
            && self.bottom >= other.top
            && self.top <= other.bottom
    }
}

/// Move every insect right by `speed`
pub fn advance_insects(insects: &mut InsectRegistry, speed: i32) {
    for insect in insects.iter_mut() {
        insect.pos.x += speed;
    }
}

/// Drop insects that left the right edge. Returns how many expired.
pub fn expire_insects(insects: &mut InsectRegistry, screen_width: i32) -> usize {
    let expired = insects.retain(|i| i.pos.x < screen_width);
    if expired > 0 {
        log::trace!("{} insect(s) flew off screen", expired);
    }
    expired
}

/// Collide the spider against every insect.
///
/// Flags hits in one pass, then removes them in a second. On any hit the
/// spider is sent back up. Returns the number of insects caught.
pub fn resolve_catches(
    actor: &mut Actor,
    insects: &mut InsectRegistry,
    actor_half_extents: IVec2,
    insect_half_extents: IVec2,
) -> u32 {
    let spider_box = Aabb::from_center(actor.pos, actor_half_extents);

    let hits: Vec<bool> = insects
        .iter()
        .map(|insect| spider_box.overlaps(&Aabb::from_center(insect.pos, insect_half_extents)))
        .collect();

    let caught = insects.remove_flagged(&hits) as u32;
    if caught > 0 {
        actor.force_ascend();
    }
    caught
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::actor::ActorMode;
    use crate::sim::state::Insect;

    const HALF: IVec2 = IVec2::splat(4);

    fn registry(points: &[(i32, i32)]) -> InsectRegistry {
        let mut registry = InsectRegistry::new();
        for &(x, y) in points {
            registry.push(Insect::new(x, y));
        }
        registry
    }

    #[test]
    fn test_aabb_same_center_overlaps() {
        let a = Aabb::from_center(IVec2::new(80, 50), HALF);
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_aabb_touching_edges_overlap() {
        let spider = Aabb::from_center(IVec2::new(80, 50), HALF);
        // 8 apart: right edge 84 meets left edge 84
        assert!(spider.overlaps(&Aabb::from_center(IVec2::new(88, 50), HALF)));
        assert!(spider.overlaps(&Aabb::from_center(IVec2::new(72, 50), HALF)));
        assert!(spider.overlaps(&Aabb::from_center(IVec2::new(80, 58), HALF)));
        assert!(spider.overlaps(&Aabb::from_center(IVec2::new(88, 42), HALF)));
    }

    #[test]
    fn test_aabb_one_pixel_gap_misses() {
        let spider = Aabb::from_center(IVec2::new(80, 50), HALF);
        assert!(!spider.overlaps(&Aabb::from_center(IVec2::new(89, 50), HALF)));
        assert!(!spider.overlaps(&Aabb::from_center(IVec2::new(71, 50), HALF)));
        assert!(!spider.overlaps(&Aabb::from_center(IVec2::new(80, 59), HALF)));
        assert!(!spider.overlaps(&Aabb::from_center(IVec2::new(80, 41), HALF)));
    }

    #[test]
    fn test_advance_and_expire() {
        let mut insects = registry(&[(0, 80), (158, 90), (159, 100)]);
        advance_insects(&mut insects, 1);
        let xs: Vec<i32> = insects.iter().map(|i| i.pos.x).collect();
        assert_eq!(xs, vec![1, 159, 160]);

        assert_eq!(expire_insects(&mut insects, 160), 1);
        let xs: Vec<i32> = insects.iter().map(|i| i.pos.x).collect();
        assert_eq!(xs, vec![1, 159]);
    }

    #[test]
    fn test_catch_removes_and_ascends() {
        let mut actor = Actor::new(80);
        actor.pos.y = 90;
        actor.mode = ActorMode::Descending;
        let mut insects = registry(&[(10, 90), (80, 90), (40, 90)]);

        let caught = resolve_catches(&mut actor, &mut insects, HALF, HALF);

        assert_eq!(caught, 1);
        assert_eq!(actor.mode, ActorMode::Ascending);
        assert_eq!(actor.pos.y, 90);
        let xs: Vec<i32> = insects.iter().map(|i| i.pos.x).collect();
        assert_eq!(xs, vec![10, 40]);
    }

    #[test]
    fn test_simultaneous_catches_all_count() {
        let mut actor = Actor::new(80);
        actor.pos.y = 90;
        actor.mode = ActorMode::Descending;
        let mut insects = registry(&[(76, 88), (20, 90), (84, 94), (80, 90)]);

        let caught = resolve_catches(&mut actor, &mut insects, HALF, HALF);

        assert_eq!(caught, 3);
        assert_eq!(insects.len(), 1);
        assert_eq!(insects.as_slice()[0].pos.x, 20);
        assert_eq!(actor.mode, ActorMode::Ascending);
    }

    #[test]
    fn test_miss_leaves_descending() {
        let mut actor = Actor::new(80);
        actor.pos.y = 30;
        actor.mode = ActorMode::Descending;
        let mut insects = registry(&[(80, 90)]);

        assert_eq!(resolve_catches(&mut actor, &mut insects, HALF, HALF), 0);
        assert_eq!(actor.mode, ActorMode::Descending);
        assert_eq!(insects.len(), 1);
    }
}
