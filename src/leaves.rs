//! Leaf anchor placement over a finished branch skeleton.
//!
//! [`place_leaves`] builds one dense, fixed pool of candidate leaf
//! positions. Seasonal display logic never regenerates this pool; it
//! only selects a visible subset of it by index (see [`crate::canopy`]),
//! which keeps leaf positions stable across season changes.

use crate::skeleton::{BranchSegment, Skeleton};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::FRAC_PI_2;

/// Visual shape category of a leaf, assigned at generation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafVariant {
    Round,
    Oval,
    Cluster,
}

/// A fixed candidate point where a leaf may be drawn.
///
/// Anchors are addressed by their index in the pool; whether a leaf is
/// actually visible at an anchor is decided elsewhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafAnchor {
    pub position: Vec2,
    pub variant: LeafVariant,
}

/// Number of base positions along a branch of the given thickness.
fn base_positions(thickness: f32) -> usize {
    thickness.floor() as usize + 3
}

/// Number of anchors spawned around each base position.
///
/// Thin branches get an extra offshoot so the fine outer crown still
/// reads as dense.
fn offshoots(thickness: f32) -> usize {
    if thickness < 5.0 { 3 } else { 2 }
}

/// Scatters a fixed pool of leaf anchors over the skeleton's crown.
///
/// The trunk (segment 0) never carries leaves; an empty or trunk-only
/// skeleton yields an empty pool. For every other branch:
///
/// 1. Lay out `floor(thickness) + 3` base positions along the branch at
///    `t = (i/n)^1.5`, which crowds them toward the tip.
/// 2. Around each base position, spawn 2-3 anchors offset along a
///    direction within ±0.8 rad of the branch perpendicular, at a
///    distance of `thickness * 0.3` scaled by a random factor in
///    [0.5, 2.0], plus ±2 units of jitter on both axes.
/// 3. Give each anchor one of the three [`LeafVariant`]s uniformly at
///    random.
///
/// The pool size is therefore proportional to total branch thickness
/// and fixed for the lifetime of the skeleton.
///
/// ### Parameters
/// - `skeleton` - The finished branch skeleton; only read access is
///   required.
/// - `rng` - Random source for scatter and variants; seed it for
///   reproducible output.
///
/// ### Returns
/// The anchor pool, ordered by branch and then by base position.
pub fn place_leaves(skeleton: &Skeleton, rng: &mut impl Rng) -> Vec<LeafAnchor> {
    let capacity: usize = skeleton
        .crown()
        .map(|b| base_positions(b.thickness) * offshoots(b.thickness))
        .sum();
    let mut pool = Vec::with_capacity(capacity);

    for branch in skeleton.crown() {
        scatter_on_branch(branch, &mut pool, rng);
    }
    pool
}

/// Generates all anchors for one branch.
fn scatter_on_branch(branch: &BranchSegment, pool: &mut Vec<LeafAnchor>, rng: &mut impl Rng) {
    let n = base_positions(branch.thickness);
    let per_position = offshoots(branch.thickness);
    let perp = branch.angle() + FRAC_PI_2;

    for i in 0..n {
        // Non-linear spacing: denser toward the branch tip.
        let t = (i as f32 / n as f32).powf(1.5);
        let base = branch.start + (branch.end - branch.start) * t;

        for _ in 0..per_position {
            let leaf_angle = perp + rng.random_range(-0.8..=0.8);
            let distance = branch.thickness * 0.3 * rng.random_range(0.5..=2.0);

            let mut position = base + Vec2::new(leaf_angle.cos(), leaf_angle.sin()) * distance;
            position.x += rng.random_range(-2.0..=2.0);
            position.y += rng.random_range(-2.0..=2.0);

            pool.push(LeafAnchor {
                position,
                variant: random_variant(rng),
            });
        }
    }
}

fn random_variant(rng: &mut impl Rng) -> LeafVariant {
    match rng.random_range(0..3) {
        0 => LeafVariant::Round,
        1 => LeafVariant::Oval,
        _ => LeafVariant::Cluster,
    }
}
