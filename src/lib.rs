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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
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

//! Multi-mode camera rig for interactive 3D viewers.
//!
//! Vantage turns raw pointer, wheel, keyboard, touch and gamepad events into
//! a smoothed camera pose every frame. Three controllers share the work: an
//! orbit camera circling a focus point, a free-flying first-person camera,
//! and a scripted camera playing back keyframed tracks. Switching between
//! them eases from the pose on screen, so the view never jumps.
//!
//! # Key entry points
//!
//! - [`rig::CameraRig`] - per-frame driver owning every camera and input
//!   source
//! - [`options::Options`] - tuning (smoothing, transitions, device speeds,
//!   key bindings), loadable from TOML presets
//! - [`settings::Settings`] - per-scene camera placement and animation
//!   tracks, loaded from JSON
//! - [`state::ViewerState`] - observable mode and playback state for UIs
//!
//! # Architecture
//!
//! Events go to an [`input::InputProcessor`], which routes pointers to the
//! source matching the camera and input mode and turns bound keys and
//! double taps into [`rig::RigCommand`]s. Once per frame the rig drains every
//! source into an [`input::FusionController`] that weighs the deltas for the
//! active mode and writes one [`input::InputFrame`]. The active
//! [`camera::CameraController`] consumes that frame, smooths toward its
//! target state, and the rig blends its pose with the pose captured at the
//! last mode switch.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod rig;
pub mod settings;
pub mod state;
pub mod util;

pub use error::VantageError;
