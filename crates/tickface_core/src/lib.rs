//! Tickface Core
//!
//! Foundational value types shared by every Tickface crate:
//!
//! - **Geometry**: [`Vector2`] and the 2×3 [`AffineMatrix`] (translation,
//!   circular translation, homothety, rotation, composition)
//! - **Diagnostics**: the [`DiagnosticSink`] through which recoverable input
//!   problems are reported instead of aborting
//!
//! # Example
//!
//! ```rust
//! use tickface_core::{AffineMatrix, Vector2};
//!
//! let pivot = Vector2::new(50.0, 50.0);
//! let half_turn = AffineMatrix::rotation(180.0, pivot);
//! let back = half_turn.multiply(&AffineMatrix::rotation(-180.0, pivot));
//! assert!(back.approx_eq(&AffineMatrix::IDENTITY, 1e-9));
//! ```

pub mod diagnostics;
pub mod geometry;

pub use diagnostics::{Axis, CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use geometry::{AffineMatrix, Vector2};
