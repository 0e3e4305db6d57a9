//! 2D geometry for clock transforms
//!
//! [`Vector2`] carries points, pivots and interpolated animation values;
//! [`AffineMatrix`] is the 2×3 matrix applied to a clock's visual container.
//! Both are immutable values: every operation returns a new instance.

use std::ops::Mul;

use crate::diagnostics::{Axis, Diagnostic, DiagnosticSink, TracingSink};

// ─────────────────────────────────────────────────────────────────────────────
// Vector2
// ─────────────────────────────────────────────────────────────────────────────

/// 2D vector with finite components
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    x: f64,
    y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    pub const ONE: Vector2 = Vector2 { x: 1.0, y: 1.0 };

    /// Create a vector, logging a warning for each non-finite component
    /// (which is replaced by 0).
    pub fn new(x: f64, y: f64) -> Self {
        Self::with_sink(x, y, &TracingSink)
    }

    /// Create a vector, reporting each non-finite component to `sink`
    /// (the component is replaced by 0).
    pub fn with_sink(x: f64, y: f64, sink: &dyn DiagnosticSink) -> Self {
        Self {
            x: finite_or_zero(x, Axis::X, sink),
            y: finite_or_zero(y, Axis::Y, sink),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Componentwise linear interpolation, `t` in [0, 1]
    pub fn lerp(&self, other: &Vector2, t: f64) -> Vector2 {
        Vector2 {
            x: (1.0 - t) * self.x + t * other.x,
            y: (1.0 - t) * self.y + t * other.y,
        }
    }
}

fn finite_or_zero(value: f64, axis: Axis, sink: &dyn DiagnosticSink) -> f64 {
    if value.is_finite() {
        value
    } else {
        sink.report(&Diagnostic::InvalidVectorComponent { axis, value });
        0.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AffineMatrix
// ─────────────────────────────────────────────────────────────────────────────

/// 2D affine transformation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineMatrix {
    /// Rows of the matrix
    /// | a  b  tx |
    /// | c  d  ty |
    rows: [[f64; 3]; 2],
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineMatrix {
    pub const IDENTITY: AffineMatrix = AffineMatrix {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            rows: [[1.0, 0.0, dx], [0.0, 1.0, dy]],
        }
    }

    /// Scale by `(sx, sy)` about `pivot`
    pub fn homothety(sx: f64, sy: f64, pivot: Vector2) -> Self {
        Self {
            rows: [
                [sx, 0.0, (1.0 - sx) * pivot.x],
                [0.0, sy, (1.0 - sy) * pivot.y],
            ],
        }
    }

    /// Rotate by `theta` degrees about `pivot`
    pub fn rotation(theta: f64, pivot: Vector2) -> Self {
        let (sin, cos) = theta.to_radians().sin_cos();
        Self {
            rows: [
                [cos, -sin, (1.0 - cos) * pivot.x + sin * pivot.y],
                [sin, cos, (1.0 - cos) * pivot.y - sin * pivot.x],
            ],
        }
    }

    /// Orbit by `theta` degrees about `pivot` without turning the content:
    /// the translation of [`AffineMatrix::rotation`] with an identity linear part.
    pub fn circular_translation(theta: f64, pivot: Vector2) -> Self {
        let [[_, _, tx], [_, _, ty]] = Self::rotation(theta, pivot).rows;
        Self::translation(tx, ty)
    }

    /// Compose `self ∘ other`: the result applies `other` first, then `self`.
    pub fn multiply(&self, other: &AffineMatrix) -> AffineMatrix {
        let [[a1, b1, tx1], [c1, d1, ty1]] = self.rows;
        let [[a2, b2, tx2], [c2, d2, ty2]] = other.rows;

        AffineMatrix {
            rows: [
                [
                    a1 * a2 + b1 * c2,
                    a1 * b2 + b1 * d2,
                    a1 * tx2 + b1 * ty2 + tx1,
                ],
                [
                    c1 * a2 + d1 * c2,
                    c1 * b2 + d1 * d2,
                    c1 * tx2 + d1 * ty2 + ty1,
                ],
            ],
        }
    }

    /// The six components in 2D transform-matrix order `(a, c, b, d, tx, ty)`
    pub fn to_css_matrix(&self) -> [f64; 6] {
        let [[a, b, tx], [c, d, ty]] = self.rows;
        [a, c, b, d, tx, ty]
    }

    /// `matrix(a, c, b, d, tx, ty)` as a transform property value
    pub fn css_transform(&self) -> String {
        let [a, c, b, d, tx, ty] = self.to_css_matrix();
        format!("matrix({a}, {c}, {b}, {d}, {tx}, {ty})")
    }

    pub fn rows(&self) -> [[f64; 3]; 2] {
        self.rows
    }

    /// Translation column `(tx, ty)`
    pub fn translation_part(&self) -> (f64, f64) {
        (self.rows[0][2], self.rows[1][2])
    }

    pub fn transform_point(&self, point: Vector2) -> Vector2 {
        let [[a, b, tx], [c, d, ty]] = self.rows;
        Vector2 {
            x: a * point.x + b * point.y + tx,
            y: c * point.x + d * point.y + ty,
        }
    }

    pub fn approx_eq(&self, other: &AffineMatrix, epsilon: f64) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(l, r)| (l - r).abs() < epsilon)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Mul for AffineMatrix {
    type Output = AffineMatrix;

    fn mul(self, rhs: AffineMatrix) -> AffineMatrix {
        self.multiply(&rhs)
    }
}
