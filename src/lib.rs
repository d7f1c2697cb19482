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

//! Proximity-driven shader-parameter fade for standalone renderers.
//!
//! Computes a visibility factor in `[0, 1]` from the distance between a
//! viewer and a set of spatial proxies (colliders and/or bounding volumes),
//! smooths it over time with a critically-damped spring filter, and writes
//! it as a named scalar into a per-target override table that the host
//! merges with each target's shared material at draw time.
//!
//! # Key entry points
//!
//! - [`effect::ProximityFadeEffect`] - the per-frame fade computation
//! - [`scene::Scene`] - minimal node storage (drawables, colliders, viewer)
//! - [`scene::OverrideTable`] - per-target shader-parameter overrides
//! - [`options::FadeOptions`] - runtime configuration with TOML presets
//!
//! # Driving the effect
//!
//! The crate has no lifecycle hooks of its own. An external render loop
//! calls [`effect::ProximityFadeEffect::update`] once per rendered frame,
//! after scene transforms are final for that frame, passing the frame's
//! delta time. The update is single-threaded and runs to completion; the
//! only state carried across frames is the current factor and the filter
//! velocity.

pub mod effect;
pub mod error;
pub mod geometry;
pub mod math;
pub mod options;
pub mod scene;
