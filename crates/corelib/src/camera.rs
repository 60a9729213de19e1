use crate::math::unit;
use crate::{Mat4, Vec3, vec3};

/// Relative camera motion. Distances in world units, angles in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraCommand {
    Strafe(f32),
    Lift(f32),
    Dolly(f32),
    Pitch(f32),
    Yaw(f32),
}

/// A complete eye/center/up configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
}

/// Fixed "security camera" views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewPreset {
    Front,
    Side,
    Top,
}

impl ViewPreset {
    pub fn pose(self) -> CameraPose {
        match self {
            ViewPreset::Front => CameraPose {
                eye: vec3(0.0, 3.0, 10.0),
                center: vec3(0.0, 0.5, 0.0),
                up: Vec3::Y,
            },
            ViewPreset::Side => CameraPose {
                eye: vec3(10.0, 3.0, 0.0),
                center: vec3(0.0, 0.5, 0.0),
                up: Vec3::Y,
            },
            // Tiny z offset keeps the view vector off the up axis.
            ViewPreset::Top => CameraPose {
                eye: vec3(0.0, 15.0, 0.01),
                center: Vec3::ZERO,
                up: Vec3::NEG_Z,
            },
        }
    }
}

/// Free-flying look-at camera (right-handed).
///
/// All moves are relative to the current view axes:
/// `view = unit(center - eye)`, `right = unit(up x view)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
}

impl Camera {
    pub fn new(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        Self { eye, center, up }
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            eye: self.eye,
            center: self.center,
            up: self.up,
        }
    }

    pub fn set_pose(&mut self, pose: CameraPose) {
        self.eye = pose.eye;
        self.center = pose.center;
        self.up = pose.up;
    }

    pub fn apply(&mut self, cmd: CameraCommand) {
        match cmd {
            CameraCommand::Strafe(d) => self.strafe(d),
            CameraCommand::Lift(d) => self.lift(d),
            CameraCommand::Dolly(d) => self.dolly(d),
            CameraCommand::Pitch(a) => self.pitch(a),
            CameraCommand::Yaw(a) => self.yaw(a),
        }
    }

    #[inline]
    fn translate(&mut self, offset: Vec3) {
        self.eye += offset;
        self.center += offset;
    }

    /// Slide sideways along the right axis.
    pub fn strafe(&mut self, delta: f32) {
        let right = unit(self.up.cross(self.center - self.eye));
        self.translate(right * delta);
    }

    /// Slide along the up axis.
    pub fn lift(&mut self, delta: f32) {
        let up = unit(self.up);
        self.translate(up * delta);
    }

    /// Move forward/backward along the view axis.
    pub fn dolly(&mut self, delta: f32) {
        let view = unit(self.center - self.eye);
        self.translate(view * delta);
    }

    /// Tilt the view toward `up` by `degrees`. Eye stays put and the
    /// eye-to-center distance is kept.
    pub fn pitch(&mut self, degrees: f32) {
        let offset = self.center - self.eye;
        let radius = offset.length();
        let view = unit(offset);
        let right = unit(self.up.cross(view));
        let (s, c) = degrees.to_radians().sin_cos();
        let view = unit(view * c + self.up * s);
        self.up = view.cross(right);
        self.center = self.eye + view * radius;
    }

    /// Turn the view toward `right` by `degrees`; `up` is unchanged.
    pub fn yaw(&mut self, degrees: f32) {
        let offset = self.center - self.eye;
        let radius = offset.length();
        let view = unit(offset);
        let right = unit(self.up.cross(view));
        let (s, c) = degrees.to_radians().sin_cos();
        let view = unit(view * c + right * s);
        self.center = self.eye + view * radius;
    }

    #[inline]
    pub fn look_transform(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.center, self.up)
    }
}

impl Default for Camera {
    /// External view looking into the base.
    fn default() -> Self {
        Self::new(vec3(0.0, 4.0, 12.0), vec3(0.0, 0.5, 0.0), Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn strafe_there_and_back() {
        let start = Camera::default();
        for d in [0.1, -2.5, 7.0, 1e-3] {
            let mut cam = start;
            cam.strafe(d);
            cam.strafe(-d);
            assert!(close(cam.eye, start.eye), "d={d}");
            assert!(close(cam.center, start.center), "d={d}");
        }
    }

    #[test]
    fn strafe_moves_along_right_axis() {
        let mut cam = Camera::new(vec3(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        cam.strafe(1.0);
        // up x view = Y x -Z = -X
        assert!(close(cam.eye, vec3(-1.0, 0.0, 5.0)));
        assert!(close(cam.center, vec3(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn strafe_with_zero_view_is_noop() {
        let mut cam = Camera::new(Vec3::ONE, Vec3::ONE, Vec3::Y);
        cam.strafe(3.0);
        assert_eq!(cam.eye, Vec3::ONE);
        assert_eq!(cam.center, Vec3::ONE);
    }

    #[test]
    fn lift_and_dolly_translate_both_points() {
        let mut cam = Camera::new(vec3(0.0, 0.0, 5.0), Vec3::ZERO, vec3(0.0, 2.0, 0.0));
        cam.lift(0.5);
        assert!(close(cam.eye, vec3(0.0, 0.5, 5.0)));
        cam.dolly(1.0);
        assert!(close(cam.eye, vec3(0.0, 0.5, 4.0)));
        assert!(close(cam.center, vec3(0.0, 0.5, -1.0)));
    }

    #[test]
    fn pitch_keeps_orbit_radius() {
        let mut cam = Camera::default();
        let radius = (cam.center - cam.eye).length();
        for _ in 0..10 {
            cam.pitch(2.0);
        }
        assert!(((cam.center - cam.eye).length() - radius).abs() < 1e-3);
        assert!(cam.eye == Camera::default().eye);
    }

    #[test]
    fn pitch_up_raises_center() {
        let mut cam = Camera::new(Vec3::ZERO, vec3(0.0, 0.0, -1.0), Vec3::Y);
        cam.pitch(90.0);
        assert!(close(cam.center, Vec3::Y));
        // view rotated onto old up, new up points back toward +Z.
        assert!(close(cam.up, Vec3::Z));
    }

    #[test]
    fn yaw_turns_toward_right_and_keeps_up() {
        let mut cam = Camera::new(Vec3::ZERO, vec3(0.0, 0.0, -2.0), Vec3::Y);
        cam.yaw(90.0);
        // right = Y x -Z = -X, radius 2 preserved
        assert!(close(cam.center, vec3(-2.0, 0.0, 0.0)));
        assert_eq!(cam.up, Vec3::Y);
    }

    #[test]
    fn preset_overwrites_pose() {
        let mut cam = Camera::default();
        cam.set_pose(ViewPreset::Top.pose());
        assert_eq!(cam.eye, vec3(0.0, 15.0, 0.01));
        assert_eq!(cam.center, Vec3::ZERO);
        assert_eq!(cam.up, Vec3::NEG_Z);
        assert!(cam.look_transform().to_cols_array().iter().all(|f| f.is_finite()));
    }

    #[test]
    fn look_transform_maps_eye_to_origin() {
        let cam = Camera::default();
        let p = cam.look_transform().transform_point3(cam.eye);
        assert!(p.length() < 1e-4);
    }
}
