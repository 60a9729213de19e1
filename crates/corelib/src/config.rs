//! Static world configuration: arena bounds, tuning constants, prop layout.

use crate::entities::PropKind;
use crate::error::{CoreError, CoreResult};
use crate::{Vec3, vec3};

pub const NUM_PROPS: usize = 5;

/// Placement of one environment prop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropSpec {
    pub kind: PropKind,
    pub pos: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldConfig {
    /// Walls sit at +-half_size on x and z.
    pub half_size: f32,
    pub ground_y: f32,
    /// Highest the player can swim above the floor.
    pub max_height: f32,
    /// Seconds of oxygen at start.
    pub oxygen_budget: f32,

    pub move_step: f32,
    pub camera_step: f32,
    /// Degrees per arrow-key press.
    pub rotate_step: f32,

    pub player_start: Vec3,
    pub player_radius: f32,
    /// Forward tilt (degrees) while off the floor.
    pub swim_tilt: f32,
    pub grounded_epsilon: f32,

    pub goal_pos: Vec3,
    pub goal_radius: f32,

    /// Degrees per second.
    pub goal_spin_rate: f32,
    /// Degrees per second.
    pub prop_anim_rate: f32,
    /// Radians per second.
    pub wall_phase_rate: f32,

    pub props: [PropSpec; NUM_PROPS],
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            half_size: 5.0,
            ground_y: 0.0,
            max_height: 3.0,
            oxygen_budget: 60.0,
            move_step: 0.2,
            camera_step: 0.1,
            rotate_step: 2.0,
            player_start: Vec3::ZERO,
            player_radius: 0.4,
            swim_tilt: 25.0,
            grounded_epsilon: 0.001,
            goal_pos: vec3(2.0, 0.6, 2.0),
            goal_radius: 0.5,
            goal_spin_rate: 60.0,
            prop_anim_rate: 60.0,
            wall_phase_rate: 1.5,
            props: [
                PropSpec { kind: PropKind::FloodlightTower, pos: vec3(-3.0, 0.0, -2.0) },
                PropSpec { kind: PropKind::SonarArray, pos: vec3(3.0, 0.0, -3.0) },
                PropSpec { kind: PropKind::SupplyCrates, pos: vec3(-2.0, 0.0, 3.0) },
                PropSpec { kind: PropKind::RepairDrone, pos: vec3(2.5, 0.2, 0.0) },
                PropSpec { kind: PropKind::OxygenTankCluster, pos: vec3(0.0, 0.0, -3.0) },
            ],
        }
    }
}

impl WorldConfig {
    pub fn with_oxygen_budget(mut self, seconds: f32) -> Self {
        self.oxygen_budget = seconds;
        self
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.oxygen_budget.is_finite() || self.oxygen_budget <= 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "oxygen budget must be a positive number of seconds, got {}",
                self.oxygen_budget
            )));
        }
        for (name, v) in [
            ("move_step", self.move_step),
            ("camera_step", self.camera_step),
            ("rotate_step", self.rotate_step),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} must be positive, got {v}"
                )));
            }
        }
        for (name, v) in [
            ("half_size", self.half_size),
            ("ground_y", self.ground_y),
            ("max_height", self.max_height),
            ("player_radius", self.player_radius),
        ] {
            if !v.is_finite() {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} must be finite, got {v}"
                )));
            }
        }
        if self.player_radius <= 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "player radius must be positive, got {}",
                self.player_radius
            )));
        }
        if self.max_height < self.ground_y {
            return Err(CoreError::InvalidConfig(format!(
                "max height {} is below ground {}",
                self.max_height, self.ground_y
            )));
        }
        if self.half_size <= self.player_radius {
            return Err(CoreError::InvalidConfig(format!(
                "arena half-size {} leaves no room for player radius {}",
                self.half_size, self.player_radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(WorldConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_oxygen_budget() {
        for s in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let cfg = WorldConfig::default().with_oxygen_budget(s);
            assert!(matches!(cfg.validate(), Err(CoreError::InvalidConfig(_))), "{s}");
        }
    }

    #[test]
    fn rejects_arena_smaller_than_player() {
        let cfg = WorldConfig {
            half_size: 0.3,
            ..WorldConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let bad = [
            WorldConfig { half_size: f32::NAN, ..WorldConfig::default() },
            WorldConfig { max_height: f32::NAN, ..WorldConfig::default() },
            WorldConfig { ground_y: f32::NEG_INFINITY, ..WorldConfig::default() },
            WorldConfig { player_radius: f32::NAN, ..WorldConfig::default() },
            WorldConfig { player_radius: 0.0, ..WorldConfig::default() },
        ];
        for cfg in bad {
            assert!(matches!(cfg.validate(), Err(CoreError::InvalidConfig(_))), "{cfg:?}");
        }
    }

    #[test]
    fn one_prop_of_each_kind() {
        let cfg = WorldConfig::default();
        for (i, kind) in PropKind::ALL.iter().enumerate() {
            assert_eq!(cfg.props[i].kind, *kind);
        }
    }
}
