use std::ops::{AddAssign, Index, IndexMut, MulAssign, Neg, SubAssign};

use tracing::trace;

use crate::error::{Result, ThreedError};

use super::{Vector3, Vector4};

/// A vector in 2D space with integer cartesian coordinates `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vec2(nalgebra::Vector2<i64>);

impl Vec2 {
    #[must_use]
    pub fn new(x: i64, y: i64) -> Self {
        Self(nalgebra::Vector2::new(x, y))
    }

    #[must_use]
    pub fn x(&self) -> i64 {
        self.0.x
    }

    #[must_use]
    pub fn y(&self) -> i64 {
        self.0.y
    }
}

impl Default for Vec2 {
    fn default() -> Self {
        Self(nalgebra::Vector2::zeros())
    }
}

impl From<[i64; 2]> for Vec2 {
    fn from([x, y]: [i64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for [i64; 2] {
    fn from(v: Vec2) -> Self {
        [v.0.x, v.0.y]
    }
}

impl Index<usize> for Vec2 {
    type Output = i64;

    fn index(&self, i: usize) -> &i64 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Vec2 {
    fn index_mut(&mut self, i: usize) -> &mut i64 {
        &mut self.0[i]
    }
}

/// A vector in 3D space with cartesian coordinates `(x, y, z)`.
///
/// Mutating operations work in place through `&mut self`; the compound
/// assignment operators (`+=`, `-=`, `*=`) are the add, subtract and scale
/// operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3(Vector3);

impl Vec3 {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Returns the Euclidean length `sqrt(x² + y² + z²)`.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.0.norm()
    }

    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.0.dot(&other.0)
    }

    /// Normalizes the vector to length 1 keeping its direction.
    ///
    /// The zero vector is left unchanged. A NaN component makes every
    /// component NaN. The squared length is not rescaled, so components
    /// beyond roughly `1e154` overflow it to infinity and the vector
    /// collapses to zero.
    pub fn normalize(&mut self) {
        let len = self.0.norm();
        if len == 0.0 {
            trace!("zero-length vector left unnormalized");
            return;
        }
        self.0 /= len;
    }

    /// Flips the sign of every component.
    pub fn negate(&mut self) {
        self.0 = -self.0;
    }

    /// Multiplies every component by `s`.
    pub fn scale(&mut self, s: f64) {
        self.0 *= s;
    }

    /// Returns the right-handed cross product `self × other`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self(self.0.cross(&other.0))
    }

    /// Returns `true` if every component differs from `other` by less than `tol`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() < tol)
    }
}

/// Returns a new vector that is the cross product of `v` and `w`.
#[must_use]
pub fn cross(v: &Vec3, w: &Vec3) -> Vec3 {
    v.cross(w)
}

impl Default for Vec3 {
    fn default() -> Self {
        Self(Vector3::zeros())
    }
}

impl AddAssign<&Vec3> for Vec3 {
    fn add_assign(&mut self, w: &Vec3) {
        self.0 += w.0;
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, w: Vec3) {
        self.0 += w.0;
    }
}

impl SubAssign<&Vec3> for Vec3 {
    fn sub_assign(&mut self, w: &Vec3) {
        self.0 -= w.0;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, w: Vec3) {
        self.0 -= w.0;
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, s: f64) {
        self.scale(s);
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Self(-self.0)
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.0[i]
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        [v.0.x, v.0.y, v.0.z]
    }
}

impl TryFrom<&[f64]> for Vec3 {
    type Error = ThreedError;

    fn try_from(components: &[f64]) -> Result<Self> {
        if components.len() != 3 {
            return Err(ThreedError::LengthMismatch {
                expected: 3,
                actual: components.len(),
            });
        }
        Ok(Self(Vector3::from_column_slice(components)))
    }
}

impl From<Vec3> for Vector3 {
    fn from(v: Vec3) -> Self {
        v.0
    }
}

impl From<Vector3> for Vec3 {
    fn from(v: Vector3) -> Self {
        Self(v)
    }
}

/// A vector in 3D space with homogeneous coordinates `(x, y, z, w)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec4(Vector4);

impl Vec4 {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self(Vector4::new(x, y, z, w))
    }

    /// Returns the homogeneous vector for the cartesian point `(x, y, z)`,
    /// with `w` set to 1.
    #[must_use]
    pub fn from_cartesian(x: f64, y: f64, z: f64) -> Self {
        Self(Vector4::new(x, y, z, 1.0))
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    #[must_use]
    pub fn w(&self) -> f64 {
        self.0.w
    }

    /// Divides `x`, `y` and `z` by `w`, then sets `w` to exactly 1.
    ///
    /// There is no guard for `w == 0`: the division follows IEEE 754 and
    /// leaves infinities or NaN in the cartesian part, which is how points
    /// at infinity come out of a projective transform.
    pub fn normalize(&mut self) {
        let w = self.0.w;
        if w == 0.0 {
            trace!(
                x = self.0.x,
                y = self.0.y,
                z = self.0.z,
                "normalizing point at infinity"
            );
        }
        self.0.x /= w;
        self.0.y /= w;
        self.0.z /= w;
        self.0.w = 1.0;
    }

    /// Returns the cartesian point this homogeneous vector represents.
    #[must_use]
    pub fn to_cartesian(&self) -> Vec3 {
        let mut p = *self;
        p.normalize();
        Vec3(p.0.xyz())
    }

    /// Returns `true` if every component differs from `other` by less than `tol`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() < tol)
    }
}

impl Default for Vec4 {
    fn default() -> Self {
        Self(Vector4::zeros())
    }
}

impl Index<usize> for Vec4 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Vec4 {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.0[i]
    }
}

impl From<[f64; 4]> for Vec4 {
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vec4> for [f64; 4] {
    fn from(v: Vec4) -> Self {
        [v.0.x, v.0.y, v.0.z, v.0.w]
    }
}

impl TryFrom<&[f64]> for Vec4 {
    type Error = ThreedError;

    fn try_from(components: &[f64]) -> Result<Self> {
        if components.len() != 4 {
            return Err(ThreedError::LengthMismatch {
                expected: 4,
                actual: components.len(),
            });
        }
        Ok(Self(Vector4::from_column_slice(components)))
    }
}

impl From<Vec4> for Vector4 {
    fn from(v: Vec4) -> Self {
        v.0
    }
}

impl From<Vector4> for Vec4 {
    fn from(v: Vector4) -> Self {
        Self(v)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = crate::math::TOLERANCE;

    // ── Vec3 ──

    #[test]
    fn normalize_one_two_two() {
        let mut v = Vec3::new(1.0, 2.0, 2.0);
        v.normalize();
        let expected = Vec3::new(1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        assert!(v.approx_eq(&expected, TOL), "v={v:?}");
        assert!((v.norm() - 1.0).abs() < TOL, "norm={}", v.norm());
    }

    #[test]
    fn normalize_zero_vector_is_noop() {
        let mut v = Vec3::default();
        v.normalize();
        assert_eq!(v, Vec3::new(0.0, 0.0, 0.0));
        assert!(!v.x().is_nan());
    }

    #[test]
    fn normalize_propagates_nan() {
        let mut v = Vec3::new(f64::NAN, 0.0, 0.0);
        v.normalize();
        assert!(v.x().is_nan() && v.y().is_nan() && v.z().is_nan(), "v={v:?}");
    }

    #[test]
    fn normalize_huge_components_collapse_to_zero() {
        // x² + y² + z² overflows to infinity, and c / inf == 0.
        let mut v = Vec3::new(1e200, 1e200, 1e200);
        v.normalize();
        assert_eq!(v, Vec3::default());
    }

    #[test]
    fn normalize_keeps_direction() {
        let original = Vec3::new(-3.0, 0.5, 7.25);
        let mut v = original;
        v.normalize();
        // Positive multiple: original = norm * v.
        let mut back = v;
        back.scale(original.norm());
        assert!(back.approx_eq(&original, 1e-9), "back={back:?}");
    }

    #[test]
    fn negate_twice_is_exact() {
        let original = Vec3::new(1.5, -0.0, 1e300);
        let mut v = original;
        v.negate();
        assert_eq!(v, Vec3::new(-1.5, 0.0, -1e300));
        v.negate();
        assert_eq!(v, original);
    }

    #[test]
    fn neg_operator_matches_negate() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(-v, Vec3::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn add_then_sub_restores() {
        let original = Vec3::new(0.1, 0.2, 0.3);
        let w = Vec3::new(10.0, -4.5, 0.7);
        let mut v = original;
        v += &w;
        assert!(v.approx_eq(&Vec3::new(10.1, -4.3, 1.0), TOL), "v={v:?}");
        v -= &w;
        assert!(v.approx_eq(&original, TOL), "v={v:?}");
        assert_eq!(w, Vec3::new(10.0, -4.5, 0.7));
    }

    #[test]
    fn scale_by_negative_and_zero() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v *= -2.0;
        assert_eq!(v, Vec3::new(-2.0, -4.0, -6.0));
        v.scale(0.0);
        assert!(v.approx_eq(&Vec3::default(), TOL));
    }

    #[test]
    fn cross_unit_axes() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(cross(&x, &y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(cross(&y, &x), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn cross_is_anticommutative() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let w = Vec3::new(-4.0, 0.5, 2.0);
        assert_eq!(v.cross(&w), -w.cross(&v));
    }

    #[test]
    fn cross_with_self_is_zero() {
        let v = Vec3::new(1.25, -7.0, 3.5);
        assert!(v.cross(&v).approx_eq(&Vec3::default(), TOL));
    }

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let w = Vec3::new(4.0, 5.0, 6.0);
        let c = v.cross(&w);
        assert!(c.dot(&v).abs() < TOL);
        assert!(c.dot(&w).abs() < TOL);
    }

    #[test]
    fn vec3_try_from_slice() {
        let v = Vec3::try_from(&[1.0, 2.0, 3.0][..]).unwrap();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));

        let err = Vec3::try_from(&[1.0, 2.0][..]).unwrap_err();
        assert_eq!(
            err,
            ThreedError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn vec3_nalgebra_round_trip() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        let n: nalgebra::Vector3<f64> = v.into();
        assert!((n.norm() - v.norm()).abs() < TOL);
        assert_eq!(Vec3::from(n), v);
    }

    // ── Vec4 ──

    #[test]
    fn from_cartesian_sets_w() {
        let v = Vec4::from_cartesian(1.0, 2.0, 3.0);
        assert_eq!(<[f64; 4]>::from(v), [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn normalize_with_unit_w_is_identity() {
        let mut v = Vec4::from_cartesian(0.3, -1.7, 42.0);
        v.normalize();
        assert_eq!(v, Vec4::new(0.3, -1.7, 42.0, 1.0));
        v.normalize();
        assert_eq!(v, Vec4::new(0.3, -1.7, 42.0, 1.0));
    }

    #[test]
    fn normalize_divides_by_w() {
        let mut v = Vec4::new(2.0, 4.0, -6.0, 2.0);
        v.normalize();
        assert_eq!(v, Vec4::new(1.0, 2.0, -3.0, 1.0));
    }

    #[test]
    fn normalize_zero_w_is_unguarded() {
        let mut v = Vec4::new(1.0, -1.0, 0.0, 0.0);
        v.normalize();
        assert!(v.x().is_infinite() && v.x() > 0.0, "x={}", v.x());
        assert!(v.y().is_infinite() && v.y() < 0.0, "y={}", v.y());
        assert!(v.z().is_nan());
        assert!((v.w() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn to_cartesian_projects() {
        let v = Vec4::new(3.0, 6.0, 9.0, 3.0);
        assert_eq!(v.to_cartesian(), Vec3::new(1.0, 2.0, 3.0));
        assert!((v.w() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn vec4_try_from_slice_rejects_wrong_length() {
        let err = Vec4::try_from(&[0.0; 5][..]).unwrap_err();
        assert_eq!(
            err,
            ThreedError::LengthMismatch {
                expected: 4,
                actual: 5
            }
        );
    }

    // ── Vec2 ──

    #[test]
    fn vec2_components() {
        let mut v = Vec2::new(3, -4);
        assert_eq!((v.x(), v.y()), (3, -4));
        v[0] = 7;
        assert_eq!(<[i64; 2]>::from(v), [7, -4]);
    }
}
