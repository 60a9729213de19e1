//! The whole mutable game world, owned by one controller.

use crate::camera::Camera;
use crate::config::{NUM_PROPS, WorldConfig};
use crate::entities::{EnvironmentProp, GameState, Goal, Player};
use crate::input::{Command, Direction, step_offset};
use crate::math::dist_squared;
use crate::sim::SimClock;

/// What the host should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// Terminate the process now.
    Exit,
}

#[derive(Clone, Debug)]
pub struct WorldState {
    pub config: WorldConfig,
    pub camera: Camera,
    pub player: Player,
    pub goal: Goal,
    pub props: [EnvironmentProp; NUM_PROPS],
    pub state: GameState,
    pub clock: SimClock,
    /// Radians in `[0, 2pi)`; drives the wall light pulse.
    pub wall_phase: f32,
}

impl WorldState {
    pub fn new(config: WorldConfig) -> Self {
        Self {
            camera: Camera::default(),
            player: Player::new(&config),
            goal: Goal::new(&config),
            props: config.props.map(EnvironmentProp::new),
            state: GameState::Playing,
            clock: SimClock::new(config.oxygen_budget),
            wall_phase: 0.0,
            config,
        }
    }

    /// Full re-initialization, keeping the config.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    #[inline]
    pub fn oxygen_remaining(&self) -> f32 {
        self.clock.oxygen_remaining
    }

    /// Dispatch one mapped command.
    pub fn apply(&mut self, cmd: Command) -> Control {
        if cmd.is_gameplay() && self.state.is_terminal() {
            log::debug!("Ignoring {cmd:?} in state {:?}", self.state);
            return Control::Continue;
        }
        match cmd {
            Command::Exit => return Control::Exit,
            Command::Camera(c) => self.camera.apply(c),
            Command::Move(dir) => self.move_player(dir),
            Command::ToggleProp(i) => self.toggle_prop(i),
            Command::PresetView(p) => self.camera.set_pose(p.pose()),
            Command::Restart => {
                log::info!("Restarting: oxygen budget {:.1}s", self.config.oxygen_budget);
                self.reset();
            }
        }
        Control::Continue
    }

    /// One discrete movement step, then clamp and goal check.
    pub fn move_player(&mut self, dir: Direction) {
        if self.state != GameState::Playing {
            return;
        }
        self.player.pos += step_offset(dir, self.config.move_step);
        if let Some(yaw) = dir.facing_yaw() {
            self.player.facing_yaw = yaw;
        }
        self.clamp_player();
        self.check_goal_collision();
    }

    pub fn clamp_player(&mut self) {
        self.player.clamp_to_world(&self.config);
    }

    /// Sphere-sphere test against the goal. Returns `true` on a hit.
    ///
    /// A hit always marks the goal collected; it only wins while still
    /// `Playing` with oxygen left.
    pub fn check_goal_collision(&mut self) -> bool {
        if self.goal.collected() {
            return false;
        }
        let r = self.player.radius + self.goal.radius;
        if dist_squared(self.player.pos, self.goal.pos) > r * r {
            return false;
        }
        self.goal.collect();
        if self.state == GameState::Playing && self.clock.oxygen_remaining > 0.0 {
            self.state = GameState::Win;
            log::info!(
                "Oxygen core reached with {:.1}s left: GAME WIN",
                self.clock.oxygen_remaining
            );
        } else {
            log::info!("Oxygen core reached too late");
        }
        true
    }

    /// Flip one prop's animation; out-of-range indices are ignored.
    pub fn toggle_prop(&mut self, index: usize) {
        if self.state != GameState::Playing {
            return;
        }
        if let Some(prop) = self.props.get_mut(index) {
            prop.toggle();
            log::debug!("{:?} animation running={}", prop.kind, prop.anim_running);
        }
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraCommand, ViewPreset};
    use crate::vec3;

    #[test]
    fn move_sets_facing_and_steps() {
        let mut w = WorldState::default();
        w.move_player(Direction::Right);
        assert!((w.player.pos.x - 0.2).abs() < 1e-6);
        assert_eq!(w.player.facing_yaw, -90.0);
        w.move_player(Direction::Up);
        // vertical move keeps facing, tilts while swimming
        assert_eq!(w.player.facing_yaw, -90.0);
        assert!(!w.player.grounded());
        assert_eq!(w.player.tilt_pitch, 25.0);
    }

    #[test]
    fn walking_into_goal_wins() {
        let mut w = WorldState::default();
        w.player.pos = vec3(2.0, 0.6, 1.0);
        w.move_player(Direction::Forward);
        assert!(w.goal.collected());
        assert_eq!(w.state, GameState::Win);
    }

    #[test]
    fn collision_without_oxygen_collects_but_no_win() {
        let mut w = WorldState::default();
        w.clock.oxygen_remaining = 0.0;
        w.player.pos = w.goal.pos;
        assert!(w.check_goal_collision());
        assert!(w.goal.collected());
        assert_eq!(w.state, GameState::Playing);
        // already collected: no second hit
        assert!(!w.check_goal_collision());
    }

    #[test]
    fn gameplay_commands_ignored_after_game_over() {
        let mut w = WorldState::default();
        w.state = GameState::Lose;
        let before = w.player.pos;
        w.apply(Command::Move(Direction::Forward));
        w.apply(Command::ToggleProp(0));
        w.apply(Command::PresetView(ViewPreset::Side));
        assert_eq!(w.player.pos, before);
        assert!(!w.props[0].anim_running);
        assert_eq!(w.camera, Camera::default());
    }

    #[test]
    fn camera_commands_work_after_game_over() {
        let mut w = WorldState::default();
        w.state = GameState::Win;
        w.apply(Command::Camera(CameraCommand::Lift(1.0)));
        assert!((w.camera.eye.y - 5.0).abs() < 1e-6);
    }

    #[test]
    fn exit_and_restart() {
        let mut w = WorldState::default();
        assert_eq!(w.apply(Command::Exit), Control::Exit);
        w.state = GameState::Lose;
        w.goal.collect();
        w.clock.oxygen_remaining = 0.0;
        assert_eq!(w.apply(Command::Restart), Control::Continue);
        assert_eq!(w.state, GameState::Playing);
        assert!(!w.goal.collected());
        assert_eq!(w.oxygen_remaining(), 60.0);
    }

    #[test]
    fn toggle_out_of_range_is_ignored() {
        let mut w = WorldState::default();
        w.toggle_prop(NUM_PROPS);
        assert!(w.props.iter().all(|p| !p.anim_running));
    }

    #[test]
    fn preset_view_replaces_camera() {
        let mut w = WorldState::default();
        w.apply(Command::PresetView(ViewPreset::Front));
        assert_eq!(w.camera.pose(), ViewPreset::Front.pose());
    }
}
