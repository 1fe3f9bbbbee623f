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
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Headless core of a 360° virtual campus tour.
//!
//! Panotour owns everything between the tour's REST backend and the
//! panorama-rendering library: fetching scene records, turning hotspots into
//! clickable markers, animating the camera for the "little planet" intro,
//! and sequencing scene-to-scene navigation.
//!
//! # Key entry points
//!
//! - [`navigation::NavigationController`] - owns the current scene and all
//!   transient UI state, and orchestrates transitions
//! - [`camera::CameraAnimation`] - one fov/pitch/yaw tween, ticked per frame
//! - [`marker::build_markers`] - hotspot records to marker descriptors
//! - [`editor::HotspotEditor`] - the admin-side hotspot placement editor
//! - [`api`] - the scene data client (`SceneSource` / `HotspotStore`)
//! - [`options::TourOptions`] - runtime configuration with TOML support
//!
//! # Architecture
//!
//! The panorama library is reached only through the
//! [`viewer::PanoramaViewer`] trait, and the backend only through the
//! [`api::SceneSource`] and [`api::HotspotStore`] traits. The controller is a
//! single owned value: views read its state through accessors and subscribe
//! to transitions with `on_transition_*` handlers. Per-frame work (the intro
//! animation, delayed auto-rotation) runs from
//! [`navigation::NavigationController::tick`], one call per display frame.

pub mod api;
pub mod camera;
pub mod editor;
pub mod error;
pub mod input;
pub mod marker;
pub mod navigation;
pub mod options;
pub mod scene;
pub mod util;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::TourError;
