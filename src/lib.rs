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

//! Frame-paced animation engine for bar charts that visualize array
//! sorting.
//!
//! A producer (the sorting algorithm) emits [`chart::snapshot::Snapshot`]s
//! describing the array and the compare, swap, or partition in progress. The
//! chart queues them, applies at most one per display frame, and animates
//! swaps by sliding detached "ghost" copies of the two bars past each other
//! while the real bars stay hidden.
//!
//! # Key entry points
//!
//! - [`chart::BarChart`] - queue, renderer, and swap animator behind a
//!   once-per-frame [`frame`](chart::BarChart::frame) call
//! - [`surface`] - the [`surface::BarSurface`] / [`surface::OverlaySurface`]
//!   traits a host implements to draw bars and ghosts
//! - [`feed`] - channel and JSON-lines reader delivering snapshots from
//!   another thread
//! - [`options::ChartOptions`] - layout, palette, and timing (TOML presets)
//!
//! # Frame model
//!
//! Time is always passed in explicitly as a [`web_time::Instant`]. Each
//! frame first advances running swap animations, then applies the next
//! queued snapshot. Swaps exchange bars immediately, so later snapshots
//! address post-swap positions while the motion is still on screen. A bar
//! reappears only once every animation holding it has settled.

pub mod animation;
pub mod chart;
pub mod error;
pub mod feed;
pub mod layout;
pub mod options;
pub mod surface;
pub mod util;

pub use chart::BarChart;
pub use error::ChartError;
