//! Key symbols and the key -> command table.
//!
//! The platform layer translates window events into [`Key`]s; everything
//! after that is a table lookup producing a [`Command`].

use std::collections::HashMap;

use crate::camera::{CameraCommand, ViewPreset};
use crate::config::{NUM_PROPS, WorldConfig};
use crate::Vec3;

/// Renderer-agnostic key identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Diver movement directions (compass on the xz plane plus vertical).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit displacement for one step.
    pub fn axis(self) -> Vec3 {
        match self {
            Direction::Forward => Vec3::Z,
            Direction::Backward => Vec3::NEG_Z,
            Direction::Left => Vec3::NEG_X,
            Direction::Right => Vec3::X,
            Direction::Up => Vec3::Y,
            Direction::Down => Vec3::NEG_Y,
        }
    }

    /// Facing (degrees) the diver snaps to; vertical moves keep the old one.
    pub fn facing_yaw(self) -> Option<f32> {
        match self {
            Direction::Forward => Some(0.0),
            Direction::Backward => Some(180.0),
            Direction::Left => Some(90.0),
            Direction::Right => Some(-90.0),
            Direction::Up | Direction::Down => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Always available, whatever the game state.
    Camera(CameraCommand),
    Move(Direction),
    ToggleProp(usize),
    PresetView(ViewPreset),
    /// Re-initialize the whole world.
    Restart,
    Exit,
}

impl Command {
    /// Commands that only act while the game is `Playing`.
    pub fn is_gameplay(&self) -> bool {
        matches!(
            self,
            Command::Move(_) | Command::ToggleProp(_) | Command::PresetView(_)
        )
    }
}

const TOGGLE_KEYS: [char; NUM_PROPS] = ['z', 'x', 'c', 'v', 'b'];

#[derive(Clone, Debug)]
pub struct KeyMap {
    bindings: HashMap<Key, Command>,
}

impl KeyMap {
    /// Default bindings, step sizes taken from `cfg`.
    pub fn new(cfg: &WorldConfig) -> Self {
        let d = cfg.camera_step;
        let a = cfg.rotate_step;
        let mut bindings = HashMap::new();

        let camera = [
            (Key::Char('w'), CameraCommand::Lift(d)),
            (Key::Char('s'), CameraCommand::Lift(-d)),
            (Key::Char('a'), CameraCommand::Strafe(d)),
            (Key::Char('d'), CameraCommand::Strafe(-d)),
            (Key::Char('q'), CameraCommand::Dolly(d)),
            (Key::Char('e'), CameraCommand::Dolly(-d)),
            (Key::ArrowUp, CameraCommand::Pitch(a)),
            (Key::ArrowDown, CameraCommand::Pitch(-a)),
            (Key::ArrowLeft, CameraCommand::Yaw(a)),
            (Key::ArrowRight, CameraCommand::Yaw(-a)),
        ];
        for (key, cmd) in camera {
            bindings.insert(key, Command::Camera(cmd));
        }

        let moves = [
            ('i', Direction::Forward),
            ('k', Direction::Backward),
            ('j', Direction::Left),
            ('l', Direction::Right),
            ('u', Direction::Up),
            ('o', Direction::Down),
        ];
        for (c, dir) in moves {
            bindings.insert(Key::Char(c), Command::Move(dir));
        }

        for (i, c) in TOGGLE_KEYS.iter().enumerate() {
            bindings.insert(Key::Char(*c), Command::ToggleProp(i));
        }

        bindings.insert(Key::Char('1'), Command::PresetView(ViewPreset::Front));
        bindings.insert(Key::Char('2'), Command::PresetView(ViewPreset::Side));
        bindings.insert(Key::Char('3'), Command::PresetView(ViewPreset::Top));
        bindings.insert(Key::Char('r'), Command::Restart);
        bindings.insert(Key::Escape, Command::Exit);

        Self { bindings }
    }

    #[inline]
    pub fn lookup(&self, key: Key) -> Option<Command> {
        self.bindings.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new(&WorldConfig::default())
    }
}

/// Displacement for one movement step.
#[inline]
pub fn step_offset(dir: Direction, step: f32) -> Vec3 {
    dir.axis() * step
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3;

    #[test]
    fn camera_keys_use_config_steps() {
        let map = KeyMap::default();
        assert_eq!(
            map.lookup(Key::Char('a')),
            Some(Command::Camera(CameraCommand::Strafe(0.1)))
        );
        assert_eq!(
            map.lookup(Key::ArrowRight),
            Some(Command::Camera(CameraCommand::Yaw(-2.0)))
        );
    }

    #[test]
    fn gameplay_keys_are_flagged() {
        let map = KeyMap::default();
        for c in ['i', 'k', 'j', 'l', 'u', 'o', 'z', 'b', '1', '3'] {
            let cmd = map.lookup(Key::Char(c)).unwrap();
            assert!(cmd.is_gameplay(), "{c}");
        }
        for key in [Key::Char('w'), Key::ArrowUp, Key::Escape, Key::Char('r')] {
            assert!(!map.lookup(key).unwrap().is_gameplay(), "{key:?}");
        }
    }

    #[test]
    fn toggle_keys_cover_every_prop() {
        let map = KeyMap::default();
        let mut seen = [false; NUM_PROPS];
        for key in TOGGLE_KEYS {
            if let Some(Command::ToggleProp(i)) = map.lookup(Key::Char(key)) {
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn unknown_keys_are_unbound() {
        let map = KeyMap::default();
        assert_eq!(map.lookup(Key::Char('W')), None);
        assert_eq!(map.lookup(Key::Char('#')), None);
    }

    #[test]
    fn facing_follows_compass() {
        assert_eq!(Direction::Forward.facing_yaw(), Some(0.0));
        assert_eq!(Direction::Left.facing_yaw(), Some(90.0));
        assert_eq!(Direction::Up.facing_yaw(), None);
        assert_eq!(step_offset(Direction::Backward, 0.2), vec3(0.0, 0.0, -0.2));
    }
}
