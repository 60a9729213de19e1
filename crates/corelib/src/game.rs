//! Simulation controller: owns the world and the key bindings.

use std::time::Duration;

use crate::config::WorldConfig;
use crate::error::CoreResult;
use crate::input::{Key, KeyMap};
use crate::scene::{RenderSink, draw_world};
use crate::world::{Control, WorldState};

pub struct Game {
    world: WorldState,
    keymap: KeyMap,
}

impl Game {
    pub fn new(config: WorldConfig) -> CoreResult<Self> {
        config.validate()?;
        let keymap = KeyMap::new(&config);
        log::debug!("Key map ready: {} bindings", keymap.len());
        Ok(Self {
            world: WorldState::new(config),
            keymap,
        })
    }

    #[inline]
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// Unbound keys are ignored.
    pub fn handle_key(&mut self, key: Key) -> Control {
        match self.keymap.lookup(key) {
            Some(cmd) => self.world.apply(cmd),
            None => {
                log::debug!("Unbound key {key:?}");
                Control::Continue
            }
        }
    }

    #[inline]
    pub fn tick(&mut self, now: Duration) {
        self.world.tick(now);
    }

    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        draw_world(&self.world, sink);
    }
}
