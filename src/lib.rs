//! Core 2-D seasonal tree generation library.
//!
//! Main components:
//! - [`skeleton`] — branch segments and the tree skeleton.
//! - [`branches`] — recursive fractal branch generation.
//! - [`leaves`] — leaf anchor placement over the skeleton.
//! - [`season`] — seasonal foliage profiles.
//! - [`canopy`] — selection of visible leaves from the fixed anchor pool.
//! - [`config`] — growth configuration for the branch generator.
//! - [`types`] — shared type aliases and IDs.
//!
//! The typical setup sequence is:
//! 1. [`branches::generate_skeleton`] — build the branch skeleton once.
//! 2. [`leaves::place_leaves`] — scatter a fixed pool of leaf anchors
//!    over the finished skeleton.
//! 3. [`canopy::Canopy`] — pick which anchors are visible for the
//!    current [`season::Season`]; the pool itself never changes.

pub mod branches;
pub mod canopy;
pub mod config;
pub mod leaves;
pub mod season;
pub mod skeleton;
pub mod types;
