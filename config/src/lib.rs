//! # Config Crate
//!
//! Centralized configuration constants for the OpenSCAD polygon kernel.
//! Tessellation minimums, float tolerances and the layout of the emitted
//! `polygon(...)` text all live here so that the kernel never scatters
//! literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{COORDINATE_DECIMALS, EPSILON, POINTS_PER_LINE};
//!
//! let value: f64 = 1e-12;
//! assert!(value.abs() < EPSILON);
//!
//! let text = format!("{:.*}", COORDINATE_DECIMALS, 1.5);
//! assert_eq!(text, "1.500");
//! assert_eq!(POINTS_PER_LINE, 4);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **OpenSCAD Compatible**: Output layout matches what OpenSCAD accepts

pub mod constants;
