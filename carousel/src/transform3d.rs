//! Minimal column-major 4×4 transform for the 3-D page effects.
//!
//! Cover-flow and cubic need perspective rotations that a 2-D affine cannot
//! express. This type covers exactly the subset those effects use (identity,
//! translation, X/Y rotation, a perspective element, multiply) without
//! pulling in a full linear-algebra crate.

use core::ops::Mul;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// A column-major 4×4 transform stored as `[[f64; 4]; 4]`.
///
/// Each inner array is one *column* of the matrix, matching the memory
/// layout used by GPU APIs. Points are column vectors: `p' = M * p`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform3d {
    /// Four columns, each a 4-element array `[x, y, z, w]`.
    pub cols: [[f64; 4]; 4],
}

impl Transform3d {
    /// The 4×4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// A pure translation.
    #[inline]
    #[must_use]
    pub const fn from_translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [x, y, z, 1.0],
            ],
        }
    }

    /// A rotation around the X axis (radians).
    #[inline]
    #[must_use]
    pub fn from_rotation_x(radians: f64) -> Self {
        let (s, c) = (radians.sin(), radians.cos());
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, c, s, 0.0],
                [0.0, -s, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// A rotation around the Y axis (radians).
    #[inline]
    #[must_use]
    pub fn from_rotation_y(radians: f64) -> Self {
        let (s, c) = (radians.sin(), radians.cos());
        Self {
            cols: [
                [c, 0.0, -s, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [s, 0.0, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Identity with a perspective element: `w' = w + d·z`.
    ///
    /// `d` is the equivalent of Core Animation's `m34` (typically a small
    /// negative value such as `-1/500`).
    #[inline]
    #[must_use]
    pub const fn perspective(d: f64) -> Self {
        let mut t = Self::IDENTITY;
        t.cols[2][3] = d;
        t
    }

    /// Returns column `i` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    #[must_use]
    pub const fn col(self, i: usize) -> [f64; 4] {
        self.cols[i]
    }

    /// Applies the transform to a point, performing the perspective divide.
    #[must_use]
    pub fn apply(self, p: [f64; 3]) -> [f64; 3] {
        let c = &self.cols;
        let x = c[0][0] * p[0] + c[1][0] * p[1] + c[2][0] * p[2] + c[3][0];
        let y = c[0][1] * p[0] + c[1][1] * p[1] + c[2][1] * p[2] + c[3][1];
        let z = c[0][2] * p[0] + c[1][2] * p[1] + c[2][2] * p[2] + c[3][2];
        let w = c[0][3] * p[0] + c[1][3] * p[1] + c[2][3] * p[2] + c[3][3];
        if w != 0.0 && w != 1.0 {
            [x / w, y / w, z / w]
        } else {
            [x, y, z]
        }
    }
}

impl Default for Transform3d {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform3d {
    type Output = Self;

    /// Matrix product: `(a * b).apply(p) == a.apply(b.apply(p))` (ignoring
    /// the perspective divide).
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = &self.cols;
        let b = &rhs.cols;
        let mut out = [[0.0_f64; 4]; 4];
        let mut j = 0;
        while j < 4 {
            let mut i = 0;
            while i < 4 {
                out[j][i] =
                    a[0][i] * b[j][0] + a[1][i] * b[j][1] + a[2][i] * b[j][2] + a[3][i] * b[j][3];
                i += 1;
            }
            j += 1;
        }
        Self { cols: out }
    }
}
