// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests lean on unwrap and exact float comparisons
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::float_cmp))]

//! Arcball rotation control: turn 2D pointer drags into 3D orientation.
//!
//! A virtual sphere is placed over the object on screen. Pressing the pointer
//! grabs a point on that sphere and dragging rotates the sphere so the point
//! follows the pointer. The accumulated rotation is exposed as a unit
//! quaternion for the owner to apply to its object or camera.
//!
//! # Key entry points
//!
//! - [`ArcballController`] - the rotation state and drag mapping
//! - [`input::ArcballInput`] - routes pointer events into a controller
//! - [`options::Options`] - TOML presets for constraint, orientation and
//!   bindings
//!
//! # Coordinates
//!
//! Pointer positions are integer screen pixels. Sphere points use a frame
//! where +x follows screen x, +y follows screen y and +z faces the viewer.
//! Rotations may be restricted to a single axis with
//! [`ArcballController::set_constraint_axis`].

pub mod controller;
pub mod error;
pub mod input;
pub mod options;

pub use controller::ArcballController;
pub use error::ArcballError;
