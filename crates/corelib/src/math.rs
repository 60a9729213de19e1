//! Small helpers on top of `glam::Vec3`.

use crate::Vec3;

/// Unit vector in the direction of `v`; the zero vector stays zero.
#[inline]
pub fn unit(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

#[inline]
pub fn dist_squared(a: Vec3, b: Vec3) -> f32 {
    (a - b).length_squared()
}

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn wrap_degrees(deg: f32) -> f32 {
    let w = deg.rem_euclid(360.0);
    // rem_euclid may round up to exactly 360 for tiny negative inputs.
    if w >= 360.0 { 0.0 } else { w }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3;

    #[test]
    fn unit_has_length_one() {
        for v in [
            vec3(3.0, 4.0, 0.0),
            vec3(-0.001, 0.0, 0.002),
            vec3(120.0, -7.5, 33.0),
        ] {
            assert!((unit(v).length() - 1.0).abs() < 1e-5, "{v:?}");
        }
    }

    #[test]
    fn unit_of_zero_is_zero() {
        assert_eq!(unit(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
    }

    #[test]
    fn wrap_degrees_stays_in_range() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert!((wrap_degrees(725.0) - 5.0).abs() < 1e-4);
        assert!((wrap_degrees(-30.0) - 330.0).abs() < 1e-4);
        let w = wrap_degrees(-1e-9);
        assert!((0.0..360.0).contains(&w));
    }

    #[test]
    fn dist_squared_matches_length() {
        let a = vec3(1.9, 0.6, 2.0);
        let b = vec3(2.0, 0.6, 2.0);
        assert!((dist_squared(a, b) - 0.01).abs() < 1e-6);
    }
}
