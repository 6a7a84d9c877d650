use std::ops::{Index, IndexMut, Mul, MulAssign};

use rand::Rng;
use tracing::debug;

use crate::error::{Result, ThreedError};

use super::{Matrix4, Vector4, Vec4};

/// A 4x4 matrix with homogeneous coordinates used to transform [`Vec4`]s.
///
/// Flat views (`From<[f64; 16]>`, [`Mat4::to_array`], [`Mat4::random`]) are
/// row-major: the first 4 components make up the first row from left to
/// right, and so on, so row `i`, column `j` is at index `i * 4 + j`.
/// `m[(i, j)]` indexes by row and column directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4(Matrix4);

impl Mat4 {
    /// Returns a new matrix with all values set to zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(Matrix4::zeros())
    }

    #[must_use]
    pub fn identity() -> Self {
        Self(Matrix4::identity())
    }

    /// Returns a new matrix filled with uniform values in `[0, 1)` drawn
    /// from `rng`.
    ///
    /// Exactly one value is drawn per element, in row-major index order
    /// `0..16`, so a seeded generator always produces the same matrix.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut components = [0.0; 16];
        for c in &mut components {
            *c = rng.gen::<f64>();
        }
        debug!("filled random 4x4 matrix");
        Self(Matrix4::from_row_slice(&components))
    }

    /// Builds a matrix from its four rows.
    #[must_use]
    pub fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self(Matrix4::from_fn(|i, j| rows[i][j]))
    }

    /// Returns the 16 components in row-major order.
    #[must_use]
    pub fn to_array(&self) -> [f64; 16] {
        let mut components = [0.0; 16];
        components.copy_from_slice(self.0.transpose().as_slice());
        components
    }

    /// Returns a new vector obtained by multiplying the matrix with `v`.
    ///
    /// The result is not normalized; its `w` may differ from 1.
    #[must_use]
    pub fn transform(&self, v: &Vec4) -> Vec4 {
        Vec4::from(self.0 * Vector4::from(*v))
    }

    /// Returns `true` if every element differs from `other` by less than `tol`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() < tol)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::zero()
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f64;

    fn index(&self, ij: (usize, usize)) -> &f64 {
        &self.0[ij]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    fn index_mut(&mut self, ij: (usize, usize)) -> &mut f64 {
        &mut self.0[ij]
    }
}

impl MulAssign<&Mat4> for Mat4 {
    /// `m *= n` sets `m` to `m × n`. The product is a new value before it is
    /// stored, so `m *= m` squares the matrix correctly.
    fn mul_assign(&mut self, n: &Mat4) {
        self.0 = self.0 * n.0;
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, n: Mat4) {
        *self *= &n;
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, n: Mat4) -> Mat4 {
        Self(self.0 * n.0)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Vec4 {
        self.transform(&v)
    }
}

impl From<[f64; 16]> for Mat4 {
    fn from(components: [f64; 16]) -> Self {
        Self(Matrix4::from_row_slice(&components))
    }
}

impl From<Mat4> for [f64; 16] {
    fn from(m: Mat4) -> Self {
        m.to_array()
    }
}

impl TryFrom<&[f64]> for Mat4 {
    type Error = ThreedError;

    fn try_from(components: &[f64]) -> Result<Self> {
        if components.len() != 16 {
            return Err(ThreedError::LengthMismatch {
                expected: 16,
                actual: components.len(),
            });
        }
        Ok(Self(Matrix4::from_row_slice(components)))
    }
}

impl From<Mat4> for Matrix4 {
    fn from(m: Mat4) -> Self {
        m.0
    }
}

impl From<Matrix4> for Mat4 {
    fn from(m: Matrix4) -> Self {
        Self(m)
    }
}
