//! Render seam: the core describes a frame as primitive draws plus text,
//! a backend turns them into pixels.

use crate::camera::Camera;
use crate::entities::{EnvironmentProp, GameState, Goal, Player, PropKind};
use crate::transform::Transform;
use crate::world::WorldState;
use crate::{Mat4, Vec3, vec3};

pub type Rgb = [f32; 3];

/// Unit shapes; size comes from the transform.
///
/// - `Cube`: side 1, centered.
/// - `Sphere`: radius 1, centered.
/// - `Cylinder`: radius 1, open, from z=0 to z=1.
/// - `Torus`: ring radius 1 in the XY plane, tube radius `tube_ratio`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Cube,
    Sphere,
    Cylinder,
    Torus { tube_ratio: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub primitive: Primitive,
    pub transform: Mat4,
    pub color: Rgb,
}

/// `x`/`y` are normalized screen coordinates, origin bottom-left.
#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// What the core needs from a presentation backend.
pub trait RenderSink {
    fn apply_view(&mut self, eye: Vec3, center: Vec3, up: Vec3);
    fn draw_primitive(&mut self, primitive: Primitive, transform: Mat4, color: Rgb);
    fn draw_text(&mut self, text: &str, x: f32, y: f32);
}

/// Records one frame for a backend to replay.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    /// Backends take the view matrix from [`Camera::look_transform`].
    pub view: Option<Camera>,
    pub draws: Vec<DrawCommand>,
    pub texts: Vec<TextItem>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse allocations between frames.
    pub fn clear(&mut self) {
        self.view = None;
        self.draws.clear();
        self.texts.clear();
    }
}

impl RenderSink for DrawList {
    fn apply_view(&mut self, eye: Vec3, center: Vec3, up: Vec3) {
        self.view = Some(Camera::new(eye, center, up));
    }

    fn draw_primitive(&mut self, primitive: Primitive, transform: Mat4, color: Rgb) {
        self.draws.push(DrawCommand {
            primitive,
            transform,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        self.texts.push(TextItem {
            text: text.to_owned(),
            x,
            y,
        });
    }
}

const WALL_THICKNESS: f32 = 0.2;
const WALL_HEIGHT: f32 = 2.5;
const RING_TUBE_RATIO: f32 = 0.02 / 0.35;

const SUIT: Rgb = [0.15, 0.4, 0.8];
const VISOR: Rgb = [0.8, 0.9, 1.0];
const BOOTS: Rgb = [0.05, 0.2, 0.5];
const CORE_GLOW: Rgb = [0.1, 1.0, 0.9];
const CORE_RING: Rgb = [0.2, 0.8, 0.9];
const LAMP: Rgb = [0.9, 0.95, 1.0];
const DISH: Rgb = [0.1, 0.5, 0.8];
const CRATE: Rgb = [0.6, 0.45, 0.3];
const TANK: Rgb = [0.1, 0.6, 0.3];

/// Push-matrix style helper: a parent frame plus primitive-level draws.
struct Painter<'a, S: RenderSink + ?Sized> {
    sink: &'a mut S,
    parent: Mat4,
}

impl<'a, S: RenderSink + ?Sized> Painter<'a, S> {
    fn new(sink: &'a mut S, parent: Mat4) -> Self {
        Self { sink, parent }
    }

    fn cube(&mut self, at: Vec3, size: Vec3, color: Rgb) {
        let m = self.parent * Transform::from_ts(at, size).matrix();
        self.sink.draw_primitive(Primitive::Cube, m, color);
    }

    fn sphere(&mut self, at: Vec3, radius: f32, color: Rgb) {
        let m = self.parent * Transform::from_ts(at, Vec3::splat(radius)).matrix();
        self.sink.draw_primitive(Primitive::Sphere, m, color);
    }

    fn cylinder(&mut self, base: Vec3, radius: f32, length: f32, color: Rgb) {
        let m = self.parent * Transform::from_ts(base, vec3(radius, radius, length)).matrix();
        self.sink.draw_primitive(Primitive::Cylinder, m, color);
    }

    fn ring(&mut self, rotation: Transform, radius: f32, color: Rgb) {
        let m = self.parent * rotation.matrix() * Mat4::from_scale(Vec3::splat(radius));
        self.sink.draw_primitive(
            Primitive::Torus {
                tube_ratio: RING_TUBE_RATIO,
            },
            m,
            color,
        );
    }
}

/// Build the frame for the current world state.
pub fn draw_world<S: RenderSink + ?Sized>(world: &WorldState, sink: &mut S) {
    match world.state {
        GameState::Win => return draw_end_screen(sink, "GAME WIN"),
        GameState::Lose => return draw_end_screen(sink, "GAME LOSE"),
        GameState::Playing => {}
    }

    let cam = &world.camera;
    sink.apply_view(cam.eye, cam.center, cam.up);

    draw_floor(world, sink);
    draw_walls(world, sink);
    for prop in &world.props {
        draw_prop(prop, sink);
    }
    draw_goal(&world.goal, sink);
    draw_player(&world.player, sink);

    let o2 = world.oxygen_remaining().max(0.0);
    sink.draw_text(&format!("O2 Left: {o2:.1}"), 0.02, 0.95);
}

fn draw_end_screen<S: RenderSink + ?Sized>(sink: &mut S, msg: &str) {
    sink.draw_text(msg, 0.4, 0.5);
}

fn draw_floor<S: RenderSink + ?Sized>(world: &WorldState, sink: &mut S) {
    let cfg = &world.config;
    let span = cfg.half_size * 2.0;
    Painter::new(sink, Mat4::IDENTITY).cube(
        vec3(0.0, cfg.ground_y - 0.01, 0.0),
        vec3(span, 0.02, span),
        [0.1, 0.2, 0.25],
    );
}

/// Pulsing perimeter lights.
pub fn wall_color(phase: f32) -> Rgb {
    [
        0.2 + 0.2 * phase.sin(),
        0.4 + 0.3 * (phase + 2.0).sin(),
        0.7 + 0.3 * (phase + 4.0).sin(),
    ]
}

fn draw_walls<S: RenderSink + ?Sized>(world: &WorldState, sink: &mut S) {
    let h = world.config.half_size;
    let color = wall_color(world.wall_phase);
    let y = WALL_HEIGHT / 2.0;
    let along_x = vec3(h * 2.0, WALL_HEIGHT, WALL_THICKNESS);
    let along_z = vec3(WALL_THICKNESS, WALL_HEIGHT, h * 2.0);

    let mut p = Painter::new(sink, Mat4::IDENTITY);
    p.cube(vec3(0.0, y, h), along_x, color);
    p.cube(vec3(0.0, y, -h), along_x, color);
    p.cube(vec3(h, y, 0.0), along_z, color);
    p.cube(vec3(-h, y, 0.0), along_z, color);
}

fn draw_player<S: RenderSink + ?Sized>(player: &Player, sink: &mut S) {
    let base = Mat4::from_translation(player.pos)
        * Mat4::from_rotation_y(player.facing_yaw.to_radians())
        * Mat4::from_rotation_x(player.tilt_pitch.to_radians());
    let mut p = Painter::new(sink, base);

    p.cube(vec3(0.0, 0.5, 0.0), vec3(0.4, 0.6, 0.25), SUIT);
    p.sphere(vec3(0.0, 0.95, 0.05), 0.18, VISOR);
    let limb = vec3(0.15, 0.5, 0.15);
    p.cube(vec3(-0.3, 0.5, 0.0), limb, SUIT);
    p.cube(vec3(0.3, 0.5, 0.0), limb, SUIT);
    p.cube(vec3(-0.12, 0.15, 0.0), limb, BOOTS);
    p.cube(vec3(0.12, 0.15, 0.0), limb, BOOTS);
}

fn draw_goal<S: RenderSink + ?Sized>(goal: &Goal, sink: &mut S) {
    if goal.collected() {
        return;
    }
    let base = Mat4::from_translation(goal.pos) * Mat4::from_rotation_y(goal.spin_angle.to_radians());
    let mut p = Painter::new(sink, base);

    p.sphere(Vec3::ZERO, 0.25, CORE_GLOW);
    p.ring(Transform::from_rotation_deg(90.0, 0.0, 0.0), 0.35, CORE_RING);
    p.ring(Transform::from_rotation_deg(0.0, 0.0, 90.0), 0.35, CORE_RING);
}

/// Bob height for props that float; continuous across the phase wrap.
#[inline]
fn bob(phase_deg: f32, amplitude: f32) -> f32 {
    amplitude * (2.0 * phase_deg.to_radians()).sin()
}

fn draw_prop<S: RenderSink + ?Sized>(prop: &EnvironmentProp, sink: &mut S) {
    let phase = prop.anim_phase;
    let spin = Mat4::from_rotation_y(phase.to_radians());
    let at = Mat4::from_translation(prop.pos);

    match prop.kind {
        PropKind::FloodlightTower => {
            let mut p = Painter::new(sink, at * spin);
            p.cube(Vec3::ZERO, vec3(0.7, 0.1, 0.7), [0.2, 0.6, 0.7]);
            p.cube(vec3(0.0, 0.7, 0.0), vec3(0.15, 1.4, 0.15), [0.15, 0.4, 0.5]);
            p.cube(vec3(0.0, 1.2, 0.2), vec3(0.8, 0.1, 0.15), [0.3, 0.7, 0.9]);
            p.sphere(vec3(-0.25, 1.2, 0.35), 0.09, LAMP);
            p.sphere(vec3(0.25, 1.2, 0.35), 0.09, LAMP);
        }
        PropKind::SonarArray => {
            let mut p = Painter::new(sink, at * spin);
            p.cube(vec3(0.0, 0.6, 0.0), vec3(0.15, 1.2, 0.15), [0.4, 0.4, 0.5]);
            p.cube(vec3(0.0, 1.1, 0.0), vec3(1.4, 0.08, 0.15), [0.2, 0.3, 0.4]);
            p.cube(vec3(-0.55, 1.1, 0.0), vec3(0.6, 0.2, 0.4), DISH);
            p.cube(vec3(0.55, 1.1, 0.0), vec3(0.6, 0.2, 0.4), DISH);
            p.cube(vec3(0.0, 0.3, 0.0), vec3(0.5, 0.25, 0.5), [0.5, 0.6, 0.7]);
        }
        PropKind::SupplyCrates => {
            let lift = Mat4::from_translation(vec3(0.0, bob(phase, 0.08), 0.0));
            let mut p = Painter::new(sink, at * lift);
            p.cube(Vec3::ZERO, vec3(0.5, 0.4, 0.5), [0.45, 0.3, 0.2]);
            p.cube(vec3(0.4, 0.2, 0.2), Vec3::splat(0.3), CRATE);
            p.cube(vec3(-0.4, 0.2, -0.2), Vec3::splat(0.3), CRATE);
        }
        PropKind::RepairDrone => {
            let hover = Mat4::from_translation(vec3(0.0, 0.4, 0.0));
            let mut p = Painter::new(sink, at * hover * spin);
            p.cube(Vec3::ZERO, vec3(0.4, 0.15, 0.4), [0.7, 0.7, 0.9]);
            p.sphere(vec3(0.0, 0.0, 0.25), 0.07, [0.1, 0.9, 0.9]);
            p.cube(vec3(0.2, 0.1, 0.2), vec3(0.2, 0.02, 0.2), [0.4, 0.4, 0.4]);
        }
        PropKind::OxygenTankCluster => {
            let lift = Mat4::from_translation(vec3(0.0, bob(phase, 0.05), 0.0));
            let mut p = Painter::new(sink, at * lift * spin);
            p.cube(Vec3::ZERO, vec3(0.7, 0.05, 0.7), [0.2, 0.2, 0.25]);
            for (x, color) in [(-0.2, TANK), (0.0, [0.1, 0.7, 0.4]), (0.2, TANK)] {
                p.cylinder(vec3(x, 0.3, 0.0), 0.12, 0.8, color);
                p.sphere(vec3(x, 0.3, 0.8), 0.12, color);
            }
        }
    }
}
