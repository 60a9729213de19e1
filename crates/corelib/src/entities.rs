//! Game entities: the diver, the oxygen core and the scenery props.

use crate::Vec3;
use crate::config::{PropSpec, WorldConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Win,
    Lose,
}

impl GameState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

/// Player-controlled diver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec3,
    /// Collision radius.
    pub radius: f32,
    /// Degrees; faces the last movement direction.
    pub facing_yaw: f32,
    /// Degrees; forward tilt while swimming.
    pub tilt_pitch: f32,
    grounded: bool,
}

impl Player {
    pub fn new(cfg: &WorldConfig) -> Self {
        let mut player = Self {
            pos: cfg.player_start,
            radius: cfg.player_radius,
            facing_yaw: 0.0,
            tilt_pitch: 0.0,
            grounded: true,
        };
        player.clamp_to_world(cfg);
        player
    }

    /// Only updated by [`Player::clamp_to_world`].
    #[inline]
    pub fn grounded(&self) -> bool {
        self.grounded
    }

    /// Keep the diver inside the arena and refresh `grounded`/`tilt_pitch`.
    pub fn clamp_to_world(&mut self, cfg: &WorldConfig) {
        let lim = cfg.half_size - self.radius;
        self.pos.x = self.pos.x.clamp(-lim, lim);
        self.pos.z = self.pos.z.clamp(-lim, lim);
        self.pos.y = self.pos.y.clamp(cfg.ground_y, cfg.max_height);
        self.grounded = (self.pos.y - cfg.ground_y).abs() < cfg.grounded_epsilon;
        self.tilt_pitch = if self.grounded { 0.0 } else { cfg.swim_tilt };
    }
}

/// The oxygen core the diver has to reach.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Goal {
    pub pos: Vec3,
    pub radius: f32,
    /// Degrees in `[0, 360)`.
    pub spin_angle: f32,
    collected: bool,
}

impl Goal {
    pub fn new(cfg: &WorldConfig) -> Self {
        Self {
            pos: cfg.goal_pos,
            radius: cfg.goal_radius,
            spin_angle: 0.0,
            collected: false,
        }
    }

    #[inline]
    pub fn collected(&self) -> bool {
        self.collected
    }

    /// One-way: there is no way to un-collect.
    #[inline]
    pub fn collect(&mut self) {
        self.collected = true;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropKind {
    FloodlightTower,
    SonarArray,
    SupplyCrates,
    RepairDrone,
    OxygenTankCluster,
}

impl PropKind {
    pub const ALL: [PropKind; 5] = [
        PropKind::FloodlightTower,
        PropKind::SonarArray,
        PropKind::SupplyCrates,
        PropKind::RepairDrone,
        PropKind::OxygenTankCluster,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvironmentProp {
    pub kind: PropKind,
    pub pos: Vec3,
    /// Degrees in `[0, 360)`.
    pub anim_phase: f32,
    pub anim_running: bool,
}

impl EnvironmentProp {
    pub fn new(spec: PropSpec) -> Self {
        Self {
            kind: spec.kind,
            pos: spec.pos,
            anim_phase: 0.0,
            anim_running: false,
        }
    }

    #[inline]
    pub fn toggle(&mut self) {
        self.anim_running = !self.anim_running;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3;

    #[test]
    fn new_player_starts_grounded() {
        let p = Player::new(&WorldConfig::default());
        assert!(p.grounded());
        assert_eq!(p.tilt_pitch, 0.0);
        assert_eq!(p.pos, Vec3::ZERO);
    }

    #[test]
    fn clamp_limits_every_axis() {
        let cfg = WorldConfig::default();
        let mut p = Player::new(&cfg);
        p.pos = vec3(-9.0, 10.0, 9.0);
        p.clamp_to_world(&cfg);
        assert!((p.pos.x + 4.6).abs() < 1e-6);
        assert!((p.pos.z - 4.6).abs() < 1e-6);
        assert_eq!(p.pos.y, cfg.max_height);
        assert!(!p.grounded());

        p.pos.y = -1.0;
        p.clamp_to_world(&cfg);
        assert_eq!(p.pos.y, cfg.ground_y);
        assert!(p.grounded());
    }

    #[test]
    fn goal_collect_is_sticky() {
        let mut g = Goal::new(&WorldConfig::default());
        assert!(!g.collected());
        g.collect();
        g.collect();
        assert!(g.collected());
    }

    #[test]
    fn terminal_states() {
        assert!(!GameState::Playing.is_terminal());
        assert!(GameState::Win.is_terminal());
        assert!(GameState::Lose.is_terminal());
    }
}
