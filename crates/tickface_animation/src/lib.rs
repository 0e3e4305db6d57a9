//! Tickface Animation System
//!
//! Timed, looping 2D transform animations and their composition.
//!
//! # Features
//!
//! - **Animation kinds**: translation, circular translation, homothety and
//!   rotation about a pivot
//! - **Infinite looping**: progress wraps in both time directions around the
//!   animation's time offset
//! - **Stacks**: ordered composition of any number of animations into one matrix
//!
//! # Example
//!
//! ```rust
//! use tickface_animation::{Animation, AnimationKind};
//! use tickface_core::{AffineMatrix, Vector2};
//!
//! let slide = Animation::new(
//!     AnimationKind::Translation,
//!     Vector2::ZERO,
//!     Vector2::ZERO,
//!     Vector2::new(100.0, 0.0),
//!     0.0,
//!     10.0,
//! );
//! let m = slide.sample(5.0).unwrap();
//! assert!(m.approx_eq(&AffineMatrix::translation(50.0, 0.0), 1e-9));
//! ```

pub mod animation;
pub mod error;
pub mod kind;
pub mod stack;

pub use animation::Animation;
pub use error::{AnimationError, Result};
pub use kind::AnimationKind;
pub use stack::{compose, AnimationStack};
