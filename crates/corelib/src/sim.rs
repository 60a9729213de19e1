//! Per-tick simulation: oxygen depletion, animation phases, auto-lose.

use std::f32::consts::TAU;
use std::time::Duration;

use crate::entities::GameState;
use crate::math::wrap_degrees;
use crate::world::WorldState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimClock {
    /// Seconds, never below zero.
    pub oxygen_remaining: f32,
    /// Host time of the previous tick; `None` until the first one.
    pub last_tick: Option<Duration>,
}

impl SimClock {
    pub fn new(oxygen_budget: f32) -> Self {
        Self {
            oxygen_remaining: oxygen_budget.max(0.0),
            last_tick: None,
        }
    }

    /// Seconds since the previous tick. Time going backwards counts as zero.
    pub fn delta(&mut self, now: Duration) -> f32 {
        let dt = match self.last_tick {
            Some(last) => now.saturating_sub(last).as_secs_f32(),
            None => 0.0,
        };
        self.last_tick = Some(now);
        dt
    }
}

impl WorldState {
    /// Tick against a monotonic host clock (time since start).
    pub fn tick(&mut self, now: Duration) {
        let dt = self.clock.delta(now);
        self.advance(dt);
    }

    /// Advance the simulation by `dt` seconds. No-op once the game is over.
    pub fn advance(&mut self, dt: f32) {
        if self.state != GameState::Playing {
            return;
        }
        let dt = dt.max(0.0);

        self.clock.oxygen_remaining = (self.clock.oxygen_remaining - dt).max(0.0);
        if self.clock.oxygen_remaining <= 0.0 && !self.goal.collected() {
            self.state = GameState::Lose;
            log::info!("Oxygen depleted: GAME LOSE");
        }

        let cfg = &self.config;
        let spin = phase_step(cfg.goal_spin_rate, dt, 360.0);
        self.goal.spin_angle = wrap_degrees(self.goal.spin_angle + spin);
        let wall = phase_step(cfg.wall_phase_rate, dt, TAU);
        self.wall_phase = (self.wall_phase + wall).rem_euclid(TAU);

        let anim = phase_step(cfg.prop_anim_rate, dt, 360.0);
        for prop in self.props.iter_mut().filter(|p| p.anim_running) {
            prop.anim_phase = wrap_degrees(prop.anim_phase + anim);
        }
    }
}

/// `rate * dt` folded into one period. An overflowing product counts as no motion.
#[inline]
fn phase_step(rate: f32, dt: f32, period: f32) -> f32 {
    let step = rate * dt;
    if step.is_finite() { step.rem_euclid(period) } else { 0.0 }
}
