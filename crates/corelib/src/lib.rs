//! Game core: math re-exports, camera, world state, simulation step,
//! input mapping and the render seam. No windowing or GPU code here.

pub use glam::{EulerRot, Mat4, Quat, Vec3, vec3};

pub mod camera;
pub mod config;
pub mod entities;
pub mod error;
pub mod game;
pub mod input;
pub mod math;
pub mod scene;
pub mod sim;
pub mod transform;
pub mod world;

pub use error::{CoreError, CoreResult};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::GameState;
    use crate::world::WorldState;

    #[test]
    fn identity_transform_is_identity_matrix() {
        let t = transform::Transform::identity();
        assert_eq!(t.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn translate_then_scale_matrix() {
        let t = transform::Transform::from_trs(
            vec3(1.0, 2.0, 3.0),
            vec3(0.0, 0.0, 0.0),
            vec3(2.0, 2.0, 2.0),
        );
        // Last column is the translation, diagonal the scale.
        let m = t.matrix().to_cols_array();
        assert!((m[12] - 1.0).abs() < 1e-6);
        assert!((m[13] - 2.0).abs() < 1e-6);
        assert!((m[14] - 3.0).abs() < 1e-6);
        assert!((m[0] - 2.0).abs() < 1e-6);
        assert!((m[5] - 2.0).abs() < 1e-6);
        assert!((m[10] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn oxygen_runs_out() {
        let mut w = WorldState::default();
        assert_eq!(w.oxygen_remaining(), 60.0);
        w.advance(61.0);
        assert_eq!(w.oxygen_remaining(), 0.0);
        assert_eq!(w.state, GameState::Lose);
    }

    #[test]
    fn touching_goal_with_oxygen_left_wins() {
        let mut w = WorldState::default();
        w.player.pos = vec3(1.9, 0.6, 2.0);
        w.player.radius = 0.4;
        w.goal.pos = vec3(2.0, 0.6, 2.0);
        w.goal.radius = 0.5;
        w.clock.oxygen_remaining = 10.0;
        assert!(w.check_goal_collision());
        assert!(w.goal.collected());
        assert_eq!(w.state, GameState::Win);
    }

    #[test]
    fn player_clamped_to_arena_wall() {
        let mut w = WorldState::default();
        w.player.pos.x = 6.0;
        w.clamp_player();
        assert!((w.player.pos.x - 4.6).abs() < 1e-6);
    }

    #[test]
    fn prop_toggle_and_animation() {
        let mut w = WorldState::default();
        let original = w.props[2].anim_running;
        w.toggle_prop(2);
        w.toggle_prop(2);
        assert_eq!(w.props[2].anim_running, original);

        w.toggle_prop(2);
        assert!(w.props[2].anim_running);
        let phase = w.props[2].anim_phase;
        w.advance(1.0);
        assert!((w.props[2].anim_phase - (phase + 60.0)).abs() < 1e-4);
    }

    #[test]
    fn swimming_tilts_and_floor_levels() {
        let mut w = WorldState::default();
        w.player.pos.y = 0.5;
        w.clamp_player();
        assert!(!w.player.grounded());
        assert_eq!(w.player.tilt_pitch, 25.0);

        w.player.pos.y = 0.0;
        w.clamp_player();
        assert!(w.player.grounded());
        assert_eq!(w.player.tilt_pitch, 0.0);
    }

    #[test]
    fn game_over_freezes_simulation() {
        let mut w = WorldState::default();
        w.props[0].toggle();
        w.advance(1.0);
        w.state = GameState::Win;
        let (o2, spin, phase) = (w.oxygen_remaining(), w.goal.spin_angle, w.props[0].anim_phase);
        for dt in [0.5, 10.0, 100.0] {
            w.advance(dt);
        }
        assert_eq!(w.oxygen_remaining(), o2);
        assert_eq!(w.goal.spin_angle, spin);
        assert_eq!(w.props[0].anim_phase, phase);
    }

    #[test]
    fn collected_stays_collected() {
        let mut w = WorldState::default();
        w.player.pos = w.goal.pos;
        w.check_goal_collision();
        for _ in 0..5 {
            w.advance(30.0);
            w.check_goal_collision();
            assert!(w.goal.collected());
        }
    }
}
