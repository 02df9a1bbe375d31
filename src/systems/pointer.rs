//! Pointer-following decorative orb.

use glam::Vec2;
use hecs::{Entity, World};

use crate::components::FollowOrb;
use crate::constants::*;

/// Ease the orb toward the pointer so it trails with a soft lag.
///
/// The pointer position is explicit input sampled by the caller each
/// frame; the orb owns its screen position and nothing else mutates it.
/// The orb is drawn centered on `pos`, so converging on the pointer
/// centers it under the cursor.
pub fn follow_pointer(world: &mut World, orb: Entity, pointer: Vec2, dt: f32) {
    puffin::profile_function!();
    let Ok(mut follow) = world.get::<&mut FollowOrb>(orb) else {
        return;
    };
    let blend = 1.0 - ORB_FOLLOW_SMOOTHING.powf(dt * 60.0);
    let delta = (pointer - follow.pos) * blend;
    follow.pos += delta;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orb_converges_on_pointer() {
        let mut world = World::new();
        let orb = world.spawn((FollowOrb { pos: Vec2::ZERO },));
        let pointer = Vec2::new(400.0, 300.0);

        for _ in 0..300 {
            follow_pointer(&mut world, orb, pointer, 1.0 / 60.0);
        }
        let pos = world.get::<&FollowOrb>(orb).unwrap().pos;
        assert!((pos - pointer).length() < 1.0);
    }

    #[test]
    fn test_orb_moves_partially_per_frame() {
        let mut world = World::new();
        let orb = world.spawn((FollowOrb { pos: Vec2::ZERO },));
        follow_pointer(&mut world, orb, Vec2::new(100.0, 0.0), 1.0 / 60.0);

        let pos = world.get::<&FollowOrb>(orb).unwrap().pos;
        assert!(pos.x > 0.0);
        assert!(pos.x < 100.0);
    }

    #[test]
    fn test_missing_orb_is_noop() {
        let mut world = World::new();
        let bare = world.spawn(());
        follow_pointer(&mut world, bare, Vec2::ONE, 1.0 / 60.0);
    }
}
